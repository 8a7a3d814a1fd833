//! # Halfmesh
//!
//! A half-edge mesh connectivity library for geometry processing.
//!
//! Halfmesh represents the topology of a polygonal mesh — which vertices,
//! edges, and faces touch which — as a doubly-connected edge list with
//! paired directed half-edges. It stores no geometry at all: vertex
//! positions, normals, and UVs stay in caller-owned arrays, indexed by the
//! same IDs this structure hands out.
//!
//! ## Features
//!
//! - **Half-edge data structure**: O(1) adjacency queries with type-safe
//!   indices
//! - **Pair-allocated half-edges**: the opposite relation is a low-bit flip
//!   and full edges are a free derived view
//! - **Eight cyclic traversals**: half-edges, vertices, faces, and edges
//!   around any vertex or face, in either direction, from any start
//! - **Manifold validation**: a directed edge claimed by two faces rejects
//!   the whole build atomically
//! - **Flexible indexing**: support for 16-bit, 32-bit, and 64-bit indices
//!
//! ## Quick Start
//!
//! ```
//! use halfmesh::prelude::*;
//! use nalgebra::Point3;
//!
//! // A tetrahedron: positions are only consulted for their count
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//!     Point3::new(0.5, 0.5, 1.0),
//! ];
//! let faces = vec![
//!     vec![0, 2, 1],
//!     vec![0, 1, 3],
//!     vec![1, 2, 3],
//!     vec![2, 0, 3],
//! ];
//!
//! let mesh: HalfEdgeMesh = build_from_polygons(&points, &faces).unwrap();
//! assert_eq!(mesh.num_vertices(), 4);
//! assert_eq!(mesh.num_faces(), 4);
//! assert_eq!(mesh.num_edges(), 6);
//!
//! // Walk the ring of neighbors around vertex 0
//! for neighbor in mesh.vertex_vertices(VertexId::new(0), true) {
//!     println!("neighbor: {:?}", neighbor);
//! }
//!
//! // Walk the corners of face 0 in positive order
//! let corners: Vec<VertexId> = mesh.face_vertices(FaceId::new(0), true).collect();
//! assert_eq!(corners.len(), 3);
//! ```
//!
//! ## Queries
//!
//! Every accessor is total: out-of-range or invalid indices yield the
//! invalid sentinel of the result kind instead of panicking, so traversal
//! code stays branch-light.
//!
//! ```
//! use halfmesh::prelude::*;
//!
//! let mesh: HalfEdgeMesh = HalfEdgeMesh::new();
//! assert!(!mesh.next(HalfEdgeId::new(123)).is_valid());
//! assert!(!mesh.face_of(HalfEdgeId::invalid()).is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use halfmesh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        build_from_polygons, EdgeId, Face, FaceId, HalfEdge, HalfEdgeId, HalfEdgeMesh, MeshIndex,
        Vertex, VertexId,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use nalgebra::Point3;

    fn points(n: usize) -> Vec<Point3<f64>> {
        (0..n).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn test_tetrahedron() {
        let faces = vec![vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]];
        let mesh: HalfEdgeMesh = build_from_polygons(&points(4), &faces).unwrap();

        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_faces(), 4);
        // Closed mesh: 6 edges, 12 half-edges, no boundary
        assert_eq!(mesh.num_edges(), 6);
        assert_eq!(mesh.num_halfedges(), 12);
        assert!(mesh.is_valid());

        for he in mesh.halfedge_ids() {
            assert!(!mesh.is_boundary_halfedge(he));
            assert_eq!(mesh.opposite(mesh.opposite(he)), he);
        }
        for v in mesh.vertex_ids() {
            assert!(!mesh.is_boundary_vertex(v), "vertex {:?} on boundary", v);
            assert_eq!(mesh.vertex_vertices(v, true).count(), 3);
            assert_eq!(mesh.vertex_faces(v, true).count(), 3);
        }
    }

    #[test]
    fn test_euler_formula_on_closed_meshes() {
        // V - E + F = 2 for a sphere-topology mesh
        let tetra = vec![vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]];
        let mesh: HalfEdgeMesh = build_from_polygons(&points(4), &tetra).unwrap();
        let euler =
            mesh.num_vertices() as isize - mesh.num_edges() as isize + mesh.num_faces() as isize;
        assert_eq!(euler, 2);
    }

    #[test]
    fn test_mixed_degree_faces() {
        // A pentagon ringed by a triangle fan would be overkill; a pentagon
        // and a triangle sharing one edge is enough to mix degrees
        let faces = vec![vec![0, 1, 2, 3, 4], vec![1, 0, 5]];
        let mesh: HalfEdgeMesh = build_from_polygons(&points(6), &faces).unwrap();

        assert_eq!(mesh.num_faces(), 2);
        assert_eq!(mesh.face_vertices(FaceId::new(0), true).count(), 5);
        assert_eq!(mesh.face_vertices(FaceId::new(1), true).count(), 3);
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_error_display() {
        let err = MeshError::NonManifoldEdge { from: 3, to: 7 };
        assert_eq!(
            err.to_string(),
            "directed edge (3 -> 7) is claimed by more than one face"
        );
    }
}
