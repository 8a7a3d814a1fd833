//! Core mesh connectivity structures.
//!
//! This module provides the half-edge mesh representation and related types
//! for representing the topology of polygonal meshes.
//!
//! # Overview
//!
//! The primary type is [`HalfEdgeMesh`], which represents mesh topology
//! using a half-edge (doubly-connected edge list) data structure. This
//! representation provides O(1) adjacency queries and ordered cyclic
//! traversal around vertices and faces.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`HalfEdgeId`] - Identifies a half-edge
//! - [`FaceId`] - Identifies a face
//! - [`EdgeId`] - Identifies a full edge
//!
//! These indices are generic over the underlying integer type
//! ([`MeshIndex`] trait), allowing you to choose `u16`, `u32`, or `u64`
//! based on mesh size.
//!
//! # Construction
//!
//! Meshes are built from face-vertex lists, the shape that mesh file
//! decoders produce:
//!
//! ```
//! use halfmesh::mesh::{build_from_polygons, HalfEdgeMesh};
//! use nalgebra::Point3;
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![vec![0, 1, 2]];
//!
//! let mesh: HalfEdgeMesh = build_from_polygons(&points, &faces).unwrap();
//! ```

mod builder;
mod connectivity;
mod index;
mod iter;

pub use builder::build_from_polygons;
pub use connectivity::{Face, HalfEdge, HalfEdgeMesh, Vertex};
pub use index::{EdgeId, FaceId, HalfEdgeId, MeshIndex, VertexId};
pub use iter::{
    FaceEdgeIter, FaceFaceIter, FaceHalfEdgeIter, FaceVertexIter, VertexEdgeIter, VertexFaceIter,
    VertexHalfEdgeIter, VertexVertexIter,
};
