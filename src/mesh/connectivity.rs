//! Half-edge mesh connectivity.
//!
//! This module provides a half-edge (doubly-connected edge list)
//! representation for polygonal meshes. The structure stores topology only:
//! which vertices, edges, and faces touch which. Vertex attributes such as
//! positions stay in caller-owned arrays, indexed by [`VertexId`].
//!
//! # Structure
//!
//! - Each undirected edge is split into two **half-edges** pointing in
//!   opposite directions
//! - Each half-edge knows its **next** and **prev** half-edges around its
//!   face, its **target** vertex, and its incident **face**
//! - Each vertex stores one outgoing half-edge
//! - Each face stores one half-edge on its boundary
//!
//! Half-edges are always allocated in consecutive pairs: half-edges `2k` and
//! `2k + 1` are each other's opposite and together form edge `k`. The
//! opposite relation is therefore a low-bit flip and needs no storage, and
//! `num_edges() == num_halfedges() / 2` always holds.
//!
//! # Boundary Handling
//!
//! Boundary half-edges (on mesh boundaries) have an invalid face ID but a
//! valid target vertex, so both directions of every edge can be navigated.
//!
//! # Totality
//!
//! Every query accessor is a total function: passing an invalid or
//! out-of-range index returns the invalid sentinel of the result kind,
//! never a panic. This keeps traversal code branch-light.

use super::index::{EdgeId, FaceId, HalfEdgeId, MeshIndex, VertexId};

/// A vertex record in the half-edge mesh.
#[derive(Debug, Clone, Copy)]
pub struct Vertex<I: MeshIndex = u32> {
    /// One outgoing half-edge from this vertex.
    /// Invalid for isolated vertices (referenced by no face).
    pub halfedge: HalfEdgeId<I>,

    /// Removal flag, reserved for future editing support. No exposed
    /// operation sets or reads it.
    pub removed: bool,
}

impl<I: MeshIndex> Default for Vertex<I> {
    fn default() -> Self {
        Self {
            halfedge: HalfEdgeId::invalid(),
            removed: false,
        }
    }
}

/// A half-edge record in the mesh.
#[derive(Debug, Clone, Copy)]
pub struct HalfEdge<I: MeshIndex = u32> {
    /// The next half-edge around the face.
    pub next: HalfEdgeId<I>,

    /// The previous half-edge around the face.
    pub prev: HalfEdgeId<I>,

    /// The vertex this half-edge points to.
    pub target: VertexId<I>,

    /// The face this half-edge belongs to.
    /// Invalid for boundary half-edges.
    pub face: FaceId<I>,

    /// Removal flag, reserved for future editing support. No exposed
    /// operation sets or reads it.
    pub removed: bool,
}

impl<I: MeshIndex> Default for HalfEdge<I> {
    fn default() -> Self {
        Self {
            next: HalfEdgeId::invalid(),
            prev: HalfEdgeId::invalid(),
            target: VertexId::invalid(),
            face: FaceId::invalid(),
            removed: false,
        }
    }
}

/// A face record in the half-edge mesh.
#[derive(Debug, Clone, Copy)]
pub struct Face<I: MeshIndex = u32> {
    /// One half-edge on the boundary cycle of this face.
    pub halfedge: HalfEdgeId<I>,

    /// Removal flag, reserved for future editing support. No exposed
    /// operation sets or reads it.
    pub removed: bool,
}

impl<I: MeshIndex> Default for Face<I> {
    fn default() -> Self {
        Self {
            halfedge: HalfEdgeId::invalid(),
            removed: false,
        }
    }
}

/// A half-edge mesh connectivity structure for polygonal meshes.
///
/// The structure is populated by [`load`](HalfEdgeMesh::load) and is
/// read-only afterwards: there is no incremental editing API. All adjacency
/// queries are O(1) and total.
#[derive(Debug, Clone, Default)]
pub struct HalfEdgeMesh<I: MeshIndex = u32> {
    /// All vertex records.
    pub(crate) vertices: Vec<Vertex<I>>,

    /// All half-edge records, allocated in opposite pairs.
    pub(crate) halfedges: Vec<HalfEdge<I>>,

    /// All face records.
    pub(crate) faces: Vec<Face<I>>,
}

impl<I: MeshIndex> HalfEdgeMesh<I> {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            halfedges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Empty the mesh, discarding all connectivity.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.halfedges.clear();
        self.faces.clear();
    }

    // ==================== Counts ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of half-edges.
    #[inline]
    pub fn num_halfedges(&self) -> usize {
        self.halfedges.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of full edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.halfedges.len() / 2
    }

    /// Check whether the mesh holds no elements at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.halfedges.is_empty() && self.faces.is_empty()
    }

    // ==================== Topology Queries ====================

    /// Get the outgoing half-edge of a vertex.
    ///
    /// Invalid for isolated vertices and out-of-range indices.
    #[inline]
    pub fn outgoing_halfedge(&self, v: VertexId<I>) -> HalfEdgeId<I> {
        match self.vertices.get(v.index()) {
            Some(record) => record.halfedge,
            None => HalfEdgeId::invalid(),
        }
    }

    /// Get the ingoing half-edge of a vertex (the opposite of its outgoing
    /// half-edge).
    #[inline]
    pub fn ingoing_halfedge(&self, v: VertexId<I>) -> HalfEdgeId<I> {
        self.opposite(self.outgoing_halfedge(v))
    }

    /// Get the vertex a half-edge points to.
    #[inline]
    pub fn target_vertex(&self, he: HalfEdgeId<I>) -> VertexId<I> {
        match self.halfedges.get(he.index()) {
            Some(record) => record.target,
            None => VertexId::invalid(),
        }
    }

    /// Get the vertex a half-edge originates from (the target of its
    /// opposite).
    #[inline]
    pub fn source_vertex(&self, he: HalfEdgeId<I>) -> VertexId<I> {
        self.target_vertex(self.opposite(he))
    }

    /// Get the opposite half-edge.
    ///
    /// Half-edges are allocated in pairs, so the opposite is the low-bit
    /// flip of the index: `2k <-> 2k + 1`.
    #[inline]
    pub fn opposite(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        if he.index() < self.halfedges.len() {
            HalfEdgeId::new(he.index() ^ 1)
        } else {
            HalfEdgeId::invalid()
        }
    }

    /// Get the next half-edge around the face.
    #[inline]
    pub fn next(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        match self.halfedges.get(he.index()) {
            Some(record) => record.next,
            None => HalfEdgeId::invalid(),
        }
    }

    /// Get the previous half-edge around the face.
    #[inline]
    pub fn prev(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        match self.halfedges.get(he.index()) {
            Some(record) => record.prev,
            None => HalfEdgeId::invalid(),
        }
    }

    /// Get the face a half-edge belongs to.
    ///
    /// Invalid for boundary half-edges.
    #[inline]
    pub fn face_of(&self, he: HalfEdgeId<I>) -> FaceId<I> {
        match self.halfedges.get(he.index()) {
            Some(record) => record.face,
            None => FaceId::invalid(),
        }
    }

    /// Get the full edge a half-edge belongs to (`index / 2`).
    #[inline]
    pub fn edge_of(&self, he: HalfEdgeId<I>) -> EdgeId<I> {
        if he.index() < self.halfedges.len() {
            EdgeId::new(he.index() / 2)
        } else {
            EdgeId::invalid()
        }
    }

    /// Get the representative half-edge of a face.
    #[inline]
    pub fn face_halfedge(&self, f: FaceId<I>) -> HalfEdgeId<I> {
        match self.faces.get(f.index()) {
            Some(record) => record.halfedge,
            None => HalfEdgeId::invalid(),
        }
    }

    /// Get one of the two half-edges of an edge.
    ///
    /// With `toward_larger` set, returns the half-edge pointing from the
    /// smaller vertex index to the larger one (index `2e`), otherwise the
    /// reverse one (index `2e + 1`).
    #[inline]
    pub fn edge_halfedge(&self, e: EdgeId<I>, toward_larger: bool) -> HalfEdgeId<I> {
        if e.index() < self.num_edges() {
            if toward_larger {
                HalfEdgeId::new(e.index() * 2)
            } else {
                HalfEdgeId::new(e.index() * 2 + 1)
            }
        } else {
            HalfEdgeId::invalid()
        }
    }

    // ==================== Boundary Predicates ====================

    /// Check if a half-edge is on the boundary (has no incident face).
    ///
    /// Out-of-range half-edges are not boundary half-edges.
    #[inline]
    pub fn is_boundary_halfedge(&self, he: HalfEdgeId<I>) -> bool {
        match self.halfedges.get(he.index()) {
            Some(record) => !record.face.is_valid(),
            None => false,
        }
    }

    /// Check if an edge is on the boundary (either half-edge has no face).
    #[inline]
    pub fn is_boundary_edge(&self, he: HalfEdgeId<I>) -> bool {
        self.is_boundary_halfedge(he) || self.is_boundary_halfedge(self.opposite(he))
    }

    /// Check if a vertex is on the boundary.
    ///
    /// Isolated vertices count as boundary. The check walks the vertex fan,
    /// so it costs O(valence).
    pub fn is_boundary_vertex(&self, v: VertexId<I>) -> bool {
        let start = self.outgoing_halfedge(v);
        if !start.is_valid() {
            return v.index() < self.num_vertices();
        }
        self.vertex_halfedges(v, true, true)
            .any(|he| self.is_boundary_halfedge(he) || self.is_boundary_halfedge(self.opposite(he)))
    }

    // ==================== Flat Ranges ====================

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId<I>> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Iterate over all half-edge IDs.
    pub fn halfedge_ids(&self) -> impl Iterator<Item = HalfEdgeId<I>> + '_ {
        (0..self.halfedges.len()).map(HalfEdgeId::new)
    }

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId<I>> + '_ {
        (0..self.faces.len()).map(FaceId::new)
    }

    /// Iterate over all edge IDs.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId<I>> + '_ {
        (0..self.num_edges()).map(EdgeId::new)
    }

    // ==================== Derived Quantities ====================

    /// Compute the valence (degree) of a vertex.
    ///
    /// For boundary vertices this counts only the fan reachable from the
    /// outgoing half-edge, which covers one side of the boundary.
    pub fn valence(&self, v: VertexId<I>) -> usize {
        self.vertex_halfedges(v, true, true).count()
    }

    /// Compute the corner count of a face.
    pub fn face_degree(&self, f: FaceId<I>) -> usize {
        self.face_halfedges(f, true).count()
    }

    // ==================== Validation ====================

    /// Check that all connectivity is consistent.
    ///
    /// Verifies the structural invariants: opposite is an involution,
    /// next/prev are inverse, every face cycle closes, and each vertex's
    /// outgoing half-edge originates at that vertex.
    pub fn is_valid(&self) -> bool {
        // Pairs only
        if self.halfedges.len() % 2 != 0 {
            return false;
        }

        for (vi, v) in self.vertices.iter().enumerate() {
            if v.halfedge.is_valid() && self.source_vertex(v.halfedge) != VertexId::new(vi) {
                return false;
            }
        }

        for hi in 0..self.halfedges.len() {
            let he = HalfEdgeId::new(hi);
            if self.opposite(self.opposite(he)) != he {
                return false;
            }
            let next = self.next(he);
            if next.is_valid() && self.prev(next) != he {
                return false;
            }
            let prev = self.prev(he);
            if prev.is_valid() && self.next(prev) != he {
                return false;
            }
        }

        for (fi, f) in self.faces.iter().enumerate() {
            if !f.halfedge.is_valid() {
                return false;
            }
            // The cycle must return to its start and stay within the face
            let mut he = f.halfedge;
            let mut steps = 0usize;
            loop {
                if self.face_of(he) != FaceId::new(fi) {
                    return false;
                }
                he = self.next(he);
                steps += 1;
                if !he.is_valid() || steps > self.halfedges.len() {
                    return false;
                }
                if he == f.halfedge {
                    break;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::build_from_polygons;
    use nalgebra::Point3;

    fn points(n: usize) -> Vec<Point3<f64>> {
        (0..n).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = HalfEdgeMesh::<u32>::new();
        assert_eq!(mesh.num_vertices(), 0);
        assert_eq!(mesh.num_halfedges(), 0);
        assert_eq!(mesh.num_faces(), 0);
        assert_eq!(mesh.num_edges(), 0);
        assert!(mesh.is_empty());
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_queries_total_on_empty_mesh() {
        let mesh = HalfEdgeMesh::<u32>::new();
        assert!(!mesh.outgoing_halfedge(VertexId::new(0)).is_valid());
        assert!(!mesh.ingoing_halfedge(VertexId::invalid()).is_valid());
        assert!(!mesh.opposite(HalfEdgeId::new(3)).is_valid());
        assert!(!mesh.next(HalfEdgeId::invalid()).is_valid());
        assert!(!mesh.prev(HalfEdgeId::new(0)).is_valid());
        assert!(!mesh.face_of(HalfEdgeId::new(0)).is_valid());
        assert!(!mesh.edge_of(HalfEdgeId::new(0)).is_valid());
        assert!(!mesh.face_halfedge(FaceId::new(0)).is_valid());
        assert!(!mesh.edge_halfedge(EdgeId::new(0), true).is_valid());
        assert!(!mesh.is_boundary_halfedge(HalfEdgeId::new(0)));
    }

    #[test]
    fn test_opposite_is_parity_flip() {
        let mesh: HalfEdgeMesh<u32> =
            build_from_polygons(&points(3), &[vec![0, 1, 2]]).unwrap();
        for he in mesh.halfedge_ids() {
            let opp = mesh.opposite(he);
            assert_eq!(opp.index(), he.index() ^ 1);
            assert_eq!(mesh.opposite(opp), he);
            assert_eq!(mesh.edge_of(he), mesh.edge_of(opp));
        }
    }

    #[test]
    fn test_source_and_target() {
        let mesh: HalfEdgeMesh<u32> =
            build_from_polygons(&points(3), &[vec![0, 1, 2]]).unwrap();
        for he in mesh.halfedge_ids() {
            let src = mesh.source_vertex(he);
            let dst = mesh.target_vertex(he);
            assert!(src.is_valid());
            assert!(dst.is_valid());
            assert_eq!(mesh.target_vertex(mesh.opposite(he)), src);
            assert_eq!(mesh.source_vertex(mesh.opposite(he)), dst);
        }
    }

    #[test]
    fn test_edge_halfedge_directions() {
        let mesh: HalfEdgeMesh<u32> =
            build_from_polygons(&points(3), &[vec![0, 1, 2]]).unwrap();
        for e in mesh.edge_ids() {
            let fwd = mesh.edge_halfedge(e, true);
            let rev = mesh.edge_halfedge(e, false);
            assert_eq!(fwd.index(), e.index() * 2);
            assert_eq!(rev.index(), e.index() * 2 + 1);
            assert_eq!(mesh.opposite(fwd), rev);
            // Half-edge 2e points from the smaller vertex to the larger one
            assert!(mesh.source_vertex(fwd) < mesh.target_vertex(fwd));
        }
        assert!(!mesh.edge_halfedge(EdgeId::new(99), true).is_valid());
    }

    #[test]
    fn test_boundary_predicates_single_triangle() {
        let mesh: HalfEdgeMesh<u32> =
            build_from_polygons(&points(3), &[vec![0, 1, 2]]).unwrap();
        // Every edge of a lone triangle is a boundary edge
        for e in mesh.edge_ids() {
            assert!(mesh.is_boundary_edge(mesh.edge_halfedge(e, true)));
        }
        for v in mesh.vertex_ids() {
            assert!(mesh.is_boundary_vertex(v));
        }
        // Exactly one side of each edge carries a face
        let interior = mesh
            .halfedge_ids()
            .filter(|&he| !mesh.is_boundary_halfedge(he))
            .count();
        assert_eq!(interior, 3);
    }

    #[test]
    fn test_closed_mesh_has_no_boundary() {
        // Tetrahedron
        let faces = vec![vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]];
        let mesh: HalfEdgeMesh<u32> = build_from_polygons(&points(4), &faces).unwrap();
        for he in mesh.halfedge_ids() {
            assert!(!mesh.is_boundary_halfedge(he));
        }
        for v in mesh.vertex_ids() {
            assert!(!mesh.is_boundary_vertex(v));
            assert_eq!(mesh.valence(v), 3);
        }
    }

    #[test]
    fn test_isolated_vertex() {
        // Vertex 3 is referenced by no face
        let mesh: HalfEdgeMesh<u32> =
            build_from_polygons(&points(4), &[vec![0, 1, 2]]).unwrap();
        let isolated = VertexId::new(3);
        assert!(!mesh.outgoing_halfedge(isolated).is_valid());
        assert!(mesh.is_boundary_vertex(isolated));
        assert_eq!(mesh.valence(isolated), 0);
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_reset_empties_everything() {
        let mut mesh: HalfEdgeMesh<u32> =
            build_from_polygons(&points(3), &[vec![0, 1, 2]]).unwrap();
        assert!(!mesh.is_empty());
        mesh.reset();
        assert!(mesh.is_empty());
        assert_eq!(mesh.num_edges(), 0);
    }

    #[test]
    fn test_face_degree() {
        let quad_and_tri = vec![vec![0, 1, 2, 3], vec![1, 0, 4]];
        let mesh: HalfEdgeMesh<u32> =
            build_from_polygons(&points(5), &quad_and_tri).unwrap();
        assert_eq!(mesh.face_degree(FaceId::new(0)), 4);
        assert_eq!(mesh.face_degree(FaceId::new(1)), 3);
        assert_eq!(mesh.face_degree(FaceId::new(7)), 0);
    }
}
