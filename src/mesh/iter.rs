//! Cyclic traversal iterators.
//!
//! Two primitive walks drive everything here: the walk around a vertex
//! ([`VertexHalfEdgeIter`]) and the walk around a face
//! ([`FaceHalfEdgeIter`]). The six remaining adjacency iterators map the
//! half-edges those walks visit through a query: target vertex, associated
//! face, or associated edge.
//!
//! All iterators are lazy and finite (bounded by the local vertex or face
//! degree). A fresh call to the corresponding mesh method re-derives the
//! starting element, so traversals are restartable. Constructing an iterator
//! with an out-of-range center yields an immediately empty iterator.
//!
//! # Boundary behavior
//!
//! A vertex walk ends when it returns to its start *or* steps onto an
//! invalid half-edge. The latter happens at boundary vertices: the walk
//! covers one side of the fan and never wraps across the boundary. Which
//! side depends on the walk direction.
//!
//! The face-mapping iterators do not filter: a boundary half-edge maps to
//! the invalid face, exactly as [`face_of`](HalfEdgeMesh::face_of) reports.

use super::connectivity::HalfEdgeMesh;
use super::index::{EdgeId, FaceId, HalfEdgeId, MeshIndex, VertexId};

// ==================== Vertex-centered walks ====================

/// Iterator over the half-edges around a vertex.
///
/// Visits outgoing or ingoing half-edges of the center vertex, in clockwise
/// or counter-clockwise order. Each step recombines `next`/`prev` with
/// `opposite`; there are four combinations, one per `(outgoing, clockwise)`
/// pair.
#[derive(Clone)]
pub struct VertexHalfEdgeIter<'a, I: MeshIndex = u32> {
    mesh: &'a HalfEdgeMesh<I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    outgoing: bool,
    clockwise: bool,
    done: bool,
}

impl<'a, I: MeshIndex> VertexHalfEdgeIter<'a, I> {
    pub(crate) fn new(
        mesh: &'a HalfEdgeMesh<I>,
        center: VertexId<I>,
        outgoing: bool,
        clockwise: bool,
        requested: HalfEdgeId<I>,
    ) -> Self {
        // A requested start is honored only if it is incident to the center
        // in the requested direction; otherwise fall back to the vertex's
        // default half-edge.
        let start = if center.index() >= mesh.num_vertices() {
            HalfEdgeId::invalid()
        } else if outgoing {
            if mesh.source_vertex(requested) == center {
                requested
            } else {
                mesh.outgoing_halfedge(center)
            }
        } else if mesh.target_vertex(requested) == center {
            requested
        } else {
            mesh.ingoing_halfedge(center)
        };

        Self {
            mesh,
            start,
            current: start,
            outgoing,
            clockwise,
            done: !start.is_valid(),
        }
    }
}

impl<'a, I: MeshIndex> Iterator for VertexHalfEdgeIter<'a, I> {
    type Item = HalfEdgeId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;
        self.current = match (self.outgoing, self.clockwise) {
            // Ingoing, counter-clockwise: rotate through the opposite's face
            (false, false) => self.mesh.prev(self.mesh.opposite(self.current)),
            // Ingoing, clockwise
            (false, true) => self.mesh.opposite(self.mesh.next(self.current)),
            // Outgoing, counter-clockwise
            (true, false) => self.mesh.opposite(self.mesh.prev(self.current)),
            // Outgoing, clockwise
            (true, true) => self.mesh.next(self.mesh.opposite(self.current)),
        };

        // An invalid step means the fan hit the mesh boundary
        if !self.current.is_valid() || self.current == self.start {
            self.done = true;
        }

        Some(result)
    }
}

/// Iterator over the vertices adjacent to a vertex.
#[derive(Clone)]
pub struct VertexVertexIter<'a, I: MeshIndex = u32> {
    mesh: &'a HalfEdgeMesh<I>,
    inner: VertexHalfEdgeIter<'a, I>,
}

impl<'a, I: MeshIndex> VertexVertexIter<'a, I> {
    pub(crate) fn new(
        mesh: &'a HalfEdgeMesh<I>,
        center: VertexId<I>,
        clockwise: bool,
        requested: VertexId<I>,
    ) -> Self {
        let mut inner =
            VertexHalfEdgeIter::new(mesh, center, true, clockwise, HalfEdgeId::invalid());
        if requested.index() < mesh.num_vertices() {
            // One linear scan, bounded by the vertex degree, to locate the
            // requested start neighbor in the cyclic order
            let found = inner
                .clone()
                .find(|&he| mesh.target_vertex(he) == requested)
                .unwrap_or_else(HalfEdgeId::invalid);
            inner = VertexHalfEdgeIter::new(mesh, center, true, clockwise, found);
        }
        Self { mesh, inner }
    }
}

impl<'a, I: MeshIndex> Iterator for VertexVertexIter<'a, I> {
    type Item = VertexId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|he| self.mesh.target_vertex(he))
    }
}

/// Iterator over the faces around a vertex.
///
/// Boundary half-edges map to the invalid face; callers that only want real
/// faces filter with [`FaceId::is_valid`].
#[derive(Clone)]
pub struct VertexFaceIter<'a, I: MeshIndex = u32> {
    mesh: &'a HalfEdgeMesh<I>,
    inner: VertexHalfEdgeIter<'a, I>,
}

impl<'a, I: MeshIndex> VertexFaceIter<'a, I> {
    pub(crate) fn new(
        mesh: &'a HalfEdgeMesh<I>,
        center: VertexId<I>,
        clockwise: bool,
        requested: FaceId<I>,
    ) -> Self {
        let mut inner =
            VertexHalfEdgeIter::new(mesh, center, true, clockwise, HalfEdgeId::invalid());
        if requested.index() < mesh.num_faces() {
            let found = inner
                .clone()
                .find(|&he| mesh.face_of(he) == requested)
                .unwrap_or_else(HalfEdgeId::invalid);
            inner = VertexHalfEdgeIter::new(mesh, center, true, clockwise, found);
        }
        Self { mesh, inner }
    }
}

impl<'a, I: MeshIndex> Iterator for VertexFaceIter<'a, I> {
    type Item = FaceId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|he| self.mesh.face_of(he))
    }
}

/// Iterator over the edges incident to a vertex.
#[derive(Clone)]
pub struct VertexEdgeIter<'a, I: MeshIndex = u32> {
    mesh: &'a HalfEdgeMesh<I>,
    inner: VertexHalfEdgeIter<'a, I>,
}

impl<'a, I: MeshIndex> VertexEdgeIter<'a, I> {
    pub(crate) fn new(
        mesh: &'a HalfEdgeMesh<I>,
        center: VertexId<I>,
        clockwise: bool,
        requested: EdgeId<I>,
    ) -> Self {
        let mut inner =
            VertexHalfEdgeIter::new(mesh, center, true, clockwise, HalfEdgeId::invalid());
        if requested.index() < mesh.num_edges() {
            let found = inner
                .clone()
                .find(|&he| mesh.edge_of(he) == requested)
                .unwrap_or_else(HalfEdgeId::invalid);
            inner = VertexHalfEdgeIter::new(mesh, center, true, clockwise, found);
        }
        Self { mesh, inner }
    }
}

impl<'a, I: MeshIndex> Iterator for VertexEdgeIter<'a, I> {
    type Item = EdgeId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|he| self.mesh.edge_of(he))
    }
}

// ==================== Face-centered walks ====================

/// Iterator over the half-edges around a face.
///
/// Steps via `next` in positive order, `prev` in reverse order, and ends on
/// return to the starting half-edge.
#[derive(Clone)]
pub struct FaceHalfEdgeIter<'a, I: MeshIndex = u32> {
    mesh: &'a HalfEdgeMesh<I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    positive: bool,
    done: bool,
}

impl<'a, I: MeshIndex> FaceHalfEdgeIter<'a, I> {
    pub(crate) fn new(
        mesh: &'a HalfEdgeMesh<I>,
        center: FaceId<I>,
        positive: bool,
        requested: HalfEdgeId<I>,
    ) -> Self {
        let start = if center.index() >= mesh.num_faces() {
            HalfEdgeId::invalid()
        } else if mesh.face_of(requested) == center {
            requested
        } else {
            mesh.face_halfedge(center)
        };

        Self {
            mesh,
            start,
            current: start,
            positive,
            done: !start.is_valid(),
        }
    }
}

impl<'a, I: MeshIndex> Iterator for FaceHalfEdgeIter<'a, I> {
    type Item = HalfEdgeId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;
        self.current = if self.positive {
            self.mesh.next(self.current)
        } else {
            self.mesh.prev(self.current)
        };

        if !self.current.is_valid() || self.current == self.start {
            self.done = true;
        }

        Some(result)
    }
}

/// Iterator over the vertices of a face, via each half-edge's target.
#[derive(Clone)]
pub struct FaceVertexIter<'a, I: MeshIndex = u32> {
    mesh: &'a HalfEdgeMesh<I>,
    inner: FaceHalfEdgeIter<'a, I>,
}

impl<'a, I: MeshIndex> FaceVertexIter<'a, I> {
    pub(crate) fn new(
        mesh: &'a HalfEdgeMesh<I>,
        center: FaceId<I>,
        positive: bool,
        requested: VertexId<I>,
    ) -> Self {
        let mut inner = FaceHalfEdgeIter::new(mesh, center, positive, HalfEdgeId::invalid());
        if requested.index() < mesh.num_vertices() {
            let found = inner
                .clone()
                .find(|&he| mesh.target_vertex(he) == requested)
                .unwrap_or_else(HalfEdgeId::invalid);
            inner = FaceHalfEdgeIter::new(mesh, center, positive, found);
        }
        Self { mesh, inner }
    }
}

impl<'a, I: MeshIndex> Iterator for FaceVertexIter<'a, I> {
    type Item = VertexId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|he| self.mesh.target_vertex(he))
    }
}

/// Iterator over the faces adjacent to a face, across each boundary edge.
///
/// Each half-edge maps to the face on the other side of its edge
/// (`face_of(opposite(he))`); a boundary edge maps to the invalid face.
#[derive(Clone)]
pub struct FaceFaceIter<'a, I: MeshIndex = u32> {
    mesh: &'a HalfEdgeMesh<I>,
    inner: FaceHalfEdgeIter<'a, I>,
}

impl<'a, I: MeshIndex> FaceFaceIter<'a, I> {
    pub(crate) fn new(
        mesh: &'a HalfEdgeMesh<I>,
        center: FaceId<I>,
        positive: bool,
        requested: FaceId<I>,
    ) -> Self {
        let mut inner = FaceHalfEdgeIter::new(mesh, center, positive, HalfEdgeId::invalid());
        if requested.index() < mesh.num_faces() {
            let found = inner
                .clone()
                .find(|&he| mesh.face_of(mesh.opposite(he)) == requested)
                .unwrap_or_else(HalfEdgeId::invalid);
            inner = FaceHalfEdgeIter::new(mesh, center, positive, found);
        }
        Self { mesh, inner }
    }
}

impl<'a, I: MeshIndex> Iterator for FaceFaceIter<'a, I> {
    type Item = FaceId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|he| self.mesh.face_of(self.mesh.opposite(he)))
    }
}

/// Iterator over the edges of a face.
#[derive(Clone)]
pub struct FaceEdgeIter<'a, I: MeshIndex = u32> {
    mesh: &'a HalfEdgeMesh<I>,
    inner: FaceHalfEdgeIter<'a, I>,
}

impl<'a, I: MeshIndex> FaceEdgeIter<'a, I> {
    pub(crate) fn new(
        mesh: &'a HalfEdgeMesh<I>,
        center: FaceId<I>,
        positive: bool,
        requested: EdgeId<I>,
    ) -> Self {
        let mut inner = FaceHalfEdgeIter::new(mesh, center, positive, HalfEdgeId::invalid());
        if requested.index() < mesh.num_edges() {
            let found = inner
                .clone()
                .find(|&he| mesh.edge_of(he) == requested)
                .unwrap_or_else(HalfEdgeId::invalid);
            inner = FaceHalfEdgeIter::new(mesh, center, positive, found);
        }
        Self { mesh, inner }
    }
}

impl<'a, I: MeshIndex> Iterator for FaceEdgeIter<'a, I> {
    type Item = EdgeId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|he| self.mesh.edge_of(he))
    }
}

// ==================== Range constructors ====================

impl<I: MeshIndex> HalfEdgeMesh<I> {
    /// Iterate over the half-edges around a vertex.
    ///
    /// `outgoing` selects half-edges leaving (`true`) or entering (`false`)
    /// the center; `clockwise` selects the rotation direction. Starts at the
    /// vertex's default half-edge.
    pub fn vertex_halfedges(
        &self,
        center: VertexId<I>,
        outgoing: bool,
        clockwise: bool,
    ) -> VertexHalfEdgeIter<'_, I> {
        VertexHalfEdgeIter::new(self, center, outgoing, clockwise, HalfEdgeId::invalid())
    }

    /// Iterate over the half-edges around a vertex, starting at `start` if
    /// it is incident to the center in the requested direction.
    pub fn vertex_halfedges_from(
        &self,
        center: VertexId<I>,
        outgoing: bool,
        clockwise: bool,
        start: HalfEdgeId<I>,
    ) -> VertexHalfEdgeIter<'_, I> {
        VertexHalfEdgeIter::new(self, center, outgoing, clockwise, start)
    }

    /// Iterate over the vertices adjacent to a vertex.
    pub fn vertex_vertices(&self, center: VertexId<I>, clockwise: bool) -> VertexVertexIter<'_, I> {
        VertexVertexIter::new(self, center, clockwise, VertexId::invalid())
    }

    /// Iterate over the vertices adjacent to a vertex, starting at the
    /// neighbor `start` if present (located by one O(valence) scan).
    pub fn vertex_vertices_from(
        &self,
        center: VertexId<I>,
        clockwise: bool,
        start: VertexId<I>,
    ) -> VertexVertexIter<'_, I> {
        VertexVertexIter::new(self, center, clockwise, start)
    }

    /// Iterate over the faces around a vertex.
    ///
    /// Includes the invalid face for boundary half-edges; filter with
    /// [`FaceId::is_valid`] when only real faces matter.
    pub fn vertex_faces(&self, center: VertexId<I>, clockwise: bool) -> VertexFaceIter<'_, I> {
        VertexFaceIter::new(self, center, clockwise, FaceId::invalid())
    }

    /// Iterate over the faces around a vertex, starting at the face `start`
    /// if present.
    pub fn vertex_faces_from(
        &self,
        center: VertexId<I>,
        clockwise: bool,
        start: FaceId<I>,
    ) -> VertexFaceIter<'_, I> {
        VertexFaceIter::new(self, center, clockwise, start)
    }

    /// Iterate over the edges incident to a vertex.
    pub fn vertex_edges(&self, center: VertexId<I>, clockwise: bool) -> VertexEdgeIter<'_, I> {
        VertexEdgeIter::new(self, center, clockwise, EdgeId::invalid())
    }

    /// Iterate over the edges incident to a vertex, starting at the edge
    /// `start` if present.
    pub fn vertex_edges_from(
        &self,
        center: VertexId<I>,
        clockwise: bool,
        start: EdgeId<I>,
    ) -> VertexEdgeIter<'_, I> {
        VertexEdgeIter::new(self, center, clockwise, start)
    }

    /// Iterate over the half-edges around a face, in positive (`next`) or
    /// reverse (`prev`) order.
    pub fn face_halfedges(&self, center: FaceId<I>, positive_order: bool) -> FaceHalfEdgeIter<'_, I> {
        FaceHalfEdgeIter::new(self, center, positive_order, HalfEdgeId::invalid())
    }

    /// Iterate over the half-edges around a face, starting at `start` if it
    /// belongs to the face.
    pub fn face_halfedges_from(
        &self,
        center: FaceId<I>,
        positive_order: bool,
        start: HalfEdgeId<I>,
    ) -> FaceHalfEdgeIter<'_, I> {
        FaceHalfEdgeIter::new(self, center, positive_order, start)
    }

    /// Iterate over the vertices of a face.
    pub fn face_vertices(&self, center: FaceId<I>, positive_order: bool) -> FaceVertexIter<'_, I> {
        FaceVertexIter::new(self, center, positive_order, VertexId::invalid())
    }

    /// Iterate over the vertices of a face, starting at the vertex `start`
    /// if present (located by one O(degree) scan).
    pub fn face_vertices_from(
        &self,
        center: FaceId<I>,
        positive_order: bool,
        start: VertexId<I>,
    ) -> FaceVertexIter<'_, I> {
        FaceVertexIter::new(self, center, positive_order, start)
    }

    /// Iterate over the faces adjacent to a face.
    ///
    /// Boundary edges contribute the invalid face.
    pub fn face_faces(&self, center: FaceId<I>, positive_order: bool) -> FaceFaceIter<'_, I> {
        FaceFaceIter::new(self, center, positive_order, FaceId::invalid())
    }

    /// Iterate over the faces adjacent to a face, starting at the neighbor
    /// `start` if present.
    pub fn face_faces_from(
        &self,
        center: FaceId<I>,
        positive_order: bool,
        start: FaceId<I>,
    ) -> FaceFaceIter<'_, I> {
        FaceFaceIter::new(self, center, positive_order, start)
    }

    /// Iterate over the edges of a face.
    pub fn face_edges(&self, center: FaceId<I>, positive_order: bool) -> FaceEdgeIter<'_, I> {
        FaceEdgeIter::new(self, center, positive_order, EdgeId::invalid())
    }

    /// Iterate over the edges of a face, starting at the edge `start` if
    /// present.
    pub fn face_edges_from(
        &self,
        center: FaceId<I>,
        positive_order: bool,
        start: EdgeId<I>,
    ) -> FaceEdgeIter<'_, I> {
        FaceEdgeIter::new(self, center, positive_order, start)
    }
}
