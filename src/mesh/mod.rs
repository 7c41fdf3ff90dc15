pub mod selection;

pub use selection::resolve_fold_edge;

use crate::math::{transform_point, Matrix4, Point3, Vector3};

/// A single vertex of the host mesh, read-only to this crate.
#[derive(Debug, Clone, Copy)]
pub struct MeshVertex {
    /// Stable index assigned by the host mesh.
    pub index: usize,
    /// Position in the mesh object's local space.
    pub position: Point3,
    /// Normal in the mesh object's local space.
    pub normal: Vector3,
    /// Whether the host reports this vertex as selected.
    pub selected: bool,
}

/// A single edge of the host mesh.
#[derive(Debug, Clone, Copy)]
pub struct MeshEdge {
    /// Stable index assigned by the host mesh.
    pub index: usize,
    /// Indices of the two endpoint vertices.
    pub vertices: [usize; 2],
    /// Whether the host reports this edge as selected.
    pub selected: bool,
}

/// A read-only snapshot of the host mesh taken at the start of a fold
/// operation: vertices, edges, selection flags, and the object's world
/// transform.
#[derive(Debug, Clone)]
pub struct MeshSnapshot {
    /// All mesh vertices.
    pub vertices: Vec<MeshVertex>,
    /// All mesh edges.
    pub edges: Vec<MeshEdge>,
    /// Local-to-world transform of the mesh object.
    pub world: Matrix4,
}

impl MeshSnapshot {
    /// Creates a snapshot from host-supplied vertices, edges, and transform.
    #[must_use]
    pub fn new(vertices: Vec<MeshVertex>, edges: Vec<MeshEdge>, world: Matrix4) -> Self {
        Self {
            vertices,
            edges,
            world,
        }
    }

    /// Looks up a vertex by its host index.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&MeshVertex> {
        self.vertices.iter().find(|v| v.index == index)
    }

    /// Returns all vertices flagged as selected.
    #[must_use]
    pub fn selected_vertices(&self) -> Vec<&MeshVertex> {
        self.vertices.iter().filter(|v| v.selected).collect()
    }

    /// Returns all edges flagged as selected.
    #[must_use]
    pub fn selected_edges(&self) -> Vec<&MeshEdge> {
        self.edges.iter().filter(|e| e.selected).collect()
    }

    /// Transforms a vertex position into world space.
    #[must_use]
    pub fn world_position(&self, vertex: &MeshVertex) -> Point3 {
        transform_point(&self.world, &vertex.position)
    }
}
