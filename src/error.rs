//! Error types for halfmesh.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while building a mesh.
///
/// Every error is detected during [`load`](crate::mesh::HalfEdgeMesh::load);
/// the query and traversal APIs are total and never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A face has fewer than three corners.
    #[error("face {face} has only {corners} corners (minimum is 3)")]
    FaceTooSmall {
        /// The face index.
        face: usize,
        /// The corner count of that face.
        corners: usize,
    },

    /// A face references a vertex index outside the point list.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face lists the same vertex more than once.
    #[error("face {face} is degenerate (vertex {vertex} appears twice)")]
    DegenerateFace {
        /// The face index.
        face: usize,
        /// The repeated vertex index.
        vertex: usize,
    },

    /// Two faces claim the same directed edge.
    ///
    /// This is the non-manifold condition: a directed vertex pair may be
    /// owned by at most one face. Two faces sharing an edge with consistent
    /// orientation claim the two *opposite* directions and are fine.
    #[error("directed edge ({from} -> {to}) is claimed by more than one face")]
    NonManifoldEdge {
        /// Source vertex of the directed edge.
        from: usize,
        /// Target vertex of the directed edge.
        to: usize,
    },
}
