use crate::error::SelectionError;
use crate::math::{bbox_2d, Point2};

use super::MeshSnapshot;

/// Reduces the current mesh selection to the two vertices defining the
/// fold line.
///
/// Policy, in order: exactly two selected vertices are used directly; a
/// single selected edge contributes its endpoints; multiple selected edges
/// are collapsed to the two bounding-box corners of their endpoint cloud.
///
/// # Errors
///
/// Returns [`SelectionError`] when the selection does not resolve to
/// exactly two vertices. The caller must abort without side effects.
pub fn resolve_fold_edge(mesh: &MeshSnapshot) -> Result<(usize, usize), SelectionError> {
    let selected = mesh.selected_vertices();
    if selected.len() == 2 {
        return Ok((selected[0].index, selected[1].index));
    }

    let edges = mesh.selected_edges();
    match edges.len() {
        1 => Ok((edges[0].vertices[0], edges[0].vertices[1])),
        n if n > 1 => {
            // Endpoint cloud of all selected edges, shared vertices included.
            let mut endpoints = Vec::with_capacity(n * 2);
            for edge in &edges {
                for &vi in &edge.vertices {
                    let vertex = mesh.vertex(vi).ok_or(SelectionError::UnknownVertex(vi))?;
                    endpoints.push((vi, Point2::new(vertex.position.x, vertex.position.y)));
                }
            }
            let (_, corners) = bbox_2d::compute_bbox(&endpoints);
            if corners.len() == 2 {
                Ok((corners[0], corners[1]))
            } else {
                log::debug!(
                    "multi-edge selection of {n} edges produced {} bounding-box corners",
                    corners.len()
                );
                Err(SelectionError::AmbiguousCorners(corners.len()))
            }
        }
        _ => Err(SelectionError::Unresolvable {
            vertices: selected.len(),
            edges: 0,
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Matrix4, Point3, Vector3};
    use crate::mesh::{MeshEdge, MeshVertex};

    fn vertex(index: usize, x: f64, y: f64, selected: bool) -> MeshVertex {
        MeshVertex {
            index,
            position: Point3::new(x, y, 0.0),
            normal: Vector3::z(),
            selected,
        }
    }

    fn edge(index: usize, a: usize, b: usize, selected: bool) -> MeshEdge {
        MeshEdge {
            index,
            vertices: [a, b],
            selected,
        }
    }

    #[test]
    fn two_selected_vertices_win() {
        let mesh = MeshSnapshot::new(
            vec![
                vertex(0, 0.0, 0.0, true),
                vertex(1, 1.0, 0.0, true),
                vertex(2, 1.0, 1.0, false),
            ],
            vec![edge(0, 0, 2, true)],
            Matrix4::identity(),
        );
        assert_eq!(resolve_fold_edge(&mesh).unwrap(), (0, 1));
    }

    #[test]
    fn single_edge_contributes_endpoints() {
        let mesh = MeshSnapshot::new(
            vec![
                vertex(0, 0.0, 0.0, false),
                vertex(1, 1.0, 0.0, false),
                vertex(2, 1.0, 1.0, false),
            ],
            vec![edge(0, 1, 2, true), edge(1, 0, 1, false)],
            Matrix4::identity(),
        );
        assert_eq!(resolve_fold_edge(&mesh).unwrap(), (1, 2));
    }

    #[test]
    fn edge_chain_resolves_to_diagonal_endpoints() {
        // Staircase of three edges from (0,0) to (1,1).
        let mesh = MeshSnapshot::new(
            vec![
                vertex(0, 0.0, 0.0, false),
                vertex(1, 0.4, 0.2, false),
                vertex(2, 0.6, 0.7, false),
                vertex(3, 1.0, 1.0, false),
            ],
            vec![
                edge(0, 0, 1, true),
                edge(1, 1, 2, true),
                edge(2, 2, 3, true),
            ],
            Matrix4::identity(),
        );
        assert_eq!(resolve_fold_edge(&mesh).unwrap(), (3, 0));
    }

    #[test]
    fn rectangle_boundary_is_ambiguous() {
        let mesh = MeshSnapshot::new(
            vec![
                vertex(0, 0.0, 0.0, false),
                vertex(1, 1.0, 0.0, false),
                vertex(2, 1.0, 1.0, false),
                vertex(3, 0.0, 1.0, false),
            ],
            vec![
                edge(0, 0, 1, true),
                edge(1, 1, 2, true),
                edge(2, 2, 3, true),
                edge(3, 3, 0, true),
            ],
            Matrix4::identity(),
        );
        assert!(matches!(
            resolve_fold_edge(&mesh),
            Err(SelectionError::AmbiguousCorners(4))
        ));
    }

    #[test]
    fn empty_selection_fails() {
        let mesh = MeshSnapshot::new(
            vec![vertex(0, 0.0, 0.0, false)],
            vec![edge(0, 0, 0, false)],
            Matrix4::identity(),
        );
        assert!(matches!(
            resolve_fold_edge(&mesh),
            Err(SelectionError::Unresolvable {
                vertices: 0,
                edges: 0
            })
        ));
    }

    #[test]
    fn three_selected_vertices_fail() {
        let mesh = MeshSnapshot::new(
            vec![
                vertex(0, 0.0, 0.0, true),
                vertex(1, 1.0, 0.0, true),
                vertex(2, 1.0, 1.0, true),
            ],
            Vec::new(),
            Matrix4::identity(),
        );
        assert!(matches!(
            resolve_fold_edge(&mesh),
            Err(SelectionError::Unresolvable {
                vertices: 3,
                edges: 0
            })
        ));
    }

    #[test]
    fn unknown_edge_endpoint_is_reported() {
        let mesh = MeshSnapshot::new(
            vec![vertex(0, 0.0, 0.0, false), vertex(1, 1.0, 0.0, false)],
            vec![edge(0, 0, 1, true), edge(1, 1, 9, true)],
            Matrix4::identity(),
        );
        assert!(matches!(
            resolve_fold_edge(&mesh),
            Err(SelectionError::UnknownVertex(9))
        ));
    }
}
