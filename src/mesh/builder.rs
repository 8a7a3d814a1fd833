//! Mesh construction.
//!
//! This module populates a [`HalfEdgeMesh`] from a face-vertex description,
//! the `(points, faces)` shape that mesh file decoders produce. Faces may
//! have any number of corners (three or more).
//!
//! Construction is atomic: the mesh is either fully populated or fully
//! empty. Non-manifold input, out-of-range vertex indices, and degenerate
//! faces are rejected, never half-built.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::debug;
use nalgebra::Point3;

use super::connectivity::{Face, HalfEdge, HalfEdgeMesh, Vertex};
use super::index::{EdgeId, FaceId, HalfEdgeId, MeshIndex, VertexId};
use crate::error::{MeshError, Result};

impl<I: MeshIndex> HalfEdgeMesh<I> {
    /// Populate this mesh from a face-vertex description.
    ///
    /// Only `points.len()` is consumed: it sizes the vertex table. The
    /// positions themselves stay caller-owned and are never read, so
    /// downstream geometry code indexes the caller's arrays with the same
    /// [`VertexId`] values this structure hands out.
    ///
    /// Each face is a cyclic corner list in counter-clockwise order. Two
    /// faces may share an edge only with opposite directions; a directed
    /// vertex pair claimed twice means inconsistent orientation or a
    /// non-manifold edge, and the whole build is rejected.
    ///
    /// On any error the mesh is left fully empty.
    ///
    /// # Example
    /// ```
    /// use halfmesh::prelude::*;
    /// use nalgebra::Point3;
    ///
    /// let points = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.5, 1.0, 0.0),
    /// ];
    /// let faces = vec![vec![0, 1, 2]];
    ///
    /// let mut mesh: HalfEdgeMesh = HalfEdgeMesh::new();
    /// mesh.load(&points, &faces).unwrap();
    /// assert_eq!(mesh.num_vertices(), 3);
    /// assert_eq!(mesh.num_halfedges(), 6);
    /// assert_eq!(mesh.num_edges(), 3);
    /// assert_eq!(mesh.num_faces(), 1);
    /// ```
    pub fn load(&mut self, points: &[Point3<f64>], faces: &[Vec<usize>]) -> Result<()> {
        self.reset();
        validate_faces(points.len(), faces)?;

        self.vertices = vec![Vertex::default(); points.len()];
        self.faces = vec![Face::default(); faces.len()];
        self.halfedges.reserve(faces.len() * 3);

        // Canonical undirected pair -> edge index. Insertion order defines
        // edge numbering; the traversal direction picks which of the pair's
        // two half-edges a corner maps to.
        let mut edge_map: HashMap<(usize, usize), EdgeId<I>> = HashMap::new();
        let mut cycle: Vec<HalfEdgeId<I>> = Vec::new();

        for (fi, corners) in faces.iter().enumerate() {
            let n = corners.len();

            // Resolve every corner's half-edge first, allocating edges on
            // first sighting, so next/prev can be wired in one pass below.
            cycle.clear();
            for hi in 0..n {
                let v1 = corners[(hi + n - 1) % n];
                let v2 = corners[hi];
                let (key, toward_larger) = if v1 > v2 {
                    ((v2, v1), false)
                } else {
                    ((v1, v2), true)
                };
                let edge = match edge_map.entry(key) {
                    Entry::Occupied(slot) => *slot.get(),
                    Entry::Vacant(slot) => {
                        let edge = EdgeId::new(self.halfedges.len() / 2);
                        self.halfedges.push(HalfEdge::default());
                        self.halfedges.push(HalfEdge::default());
                        *slot.insert(edge)
                    }
                };
                cycle.push(self.edge_halfedge(edge, toward_larger));
            }

            for hi in 0..n {
                let he = cycle[hi];
                let v1 = corners[(hi + n - 1) % n];
                let v2 = corners[hi];

                // A second claim of the same directed pair means the input
                // is not an orientable manifold surface.
                if self.face_of(he).is_valid() {
                    debug!(
                        "rejecting mesh: directed edge ({} -> {}) claimed twice (face {})",
                        v1, v2, fi
                    );
                    self.reset();
                    return Err(MeshError::NonManifoldEdge { from: v1, to: v2 });
                }

                if !self.vertices[v1].halfedge.is_valid() {
                    self.vertices[v1].halfedge = he;
                }

                let record = &mut self.halfedges[he.index()];
                record.next = cycle[(hi + 1) % n];
                record.prev = cycle[(hi + n - 1) % n];
                record.target = VertexId::new(v2);
                record.face = FaceId::new(fi);

                // Both sides of the edge always carry a correct target. If
                // the opposite face is never visited, its half-edge stays a
                // boundary half-edge: valid target, invalid face.
                let opp = self.opposite(he);
                self.halfedges[opp.index()].target = VertexId::new(v1);
            }

            self.faces[fi].halfedge = cycle[0];
        }

        debug!(
            "built mesh: {} vertices, {} half-edges, {} faces, {} edges",
            self.num_vertices(),
            self.num_halfedges(),
            self.num_faces(),
            self.num_edges()
        );
        Ok(())
    }
}

/// Reject faces with too few corners, out-of-range indices, or repeated
/// vertices before any state is built.
fn validate_faces(num_points: usize, faces: &[Vec<usize>]) -> Result<()> {
    for (fi, corners) in faces.iter().enumerate() {
        if corners.len() < 3 {
            return Err(MeshError::FaceTooSmall {
                face: fi,
                corners: corners.len(),
            });
        }
        for (ci, &vi) in corners.iter().enumerate() {
            if vi >= num_points {
                return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
            }
            // O(n^2), but face degree is small
            if corners[..ci].contains(&vi) {
                return Err(MeshError::DegenerateFace { face: fi, vertex: vi });
            }
        }
    }
    Ok(())
}

/// Build a half-edge mesh from a face-vertex description in one shot.
///
/// Convenience wrapper around [`HalfEdgeMesh::load`].
///
/// # Example
/// ```
/// use halfmesh::prelude::*;
/// use nalgebra::Point3;
///
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
///     Point3::new(0.5, -1.0, 0.0),
/// ];
/// let faces = vec![vec![0, 1, 2], vec![1, 0, 3]];
///
/// let mesh: HalfEdgeMesh = build_from_polygons(&points, &faces).unwrap();
/// assert_eq!(mesh.num_faces(), 2);
/// ```
pub fn build_from_polygons<I: MeshIndex>(
    points: &[Point3<f64>],
    faces: &[Vec<usize>],
) -> Result<HalfEdgeMesh<I>> {
    let mut mesh = HalfEdgeMesh::new();
    mesh.load(points, faces)?;
    Ok(mesh)
}
