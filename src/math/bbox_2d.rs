use super::{Point2, BBOX_TOLERANCE};

/// One running axis extremum: the best coordinate seen so far and the
/// vertex indices attaining it within [`BBOX_TOLERANCE`].
#[derive(Debug, Clone)]
pub struct Extremum {
    /// The extremal coordinate value.
    pub value: f64,
    /// Indices of the vertices attaining `value` within tolerance.
    pub indices: Vec<usize>,
}

impl Extremum {
    fn new(start: f64) -> Self {
        Self {
            value: start,
            indices: Vec::new(),
        }
    }

    /// Offers a candidate coordinate. `improvement` is positive when the
    /// candidate beats the current extremum (sign flipped for min vs max).
    fn offer(&mut self, improvement: f64, candidate: f64, index: usize) {
        if improvement > BBOX_TOLERANCE {
            self.value = candidate;
            self.indices.clear();
            self.indices.push(index);
        } else if improvement > -BBOX_TOLERANCE && !self.indices.contains(&index) {
            self.indices.push(index);
        }
    }

    fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}

/// Axis-aligned extrema of a set of 2D-projected vertices.
#[derive(Debug, Clone)]
pub struct Extrema2 {
    /// Leftmost coordinate and its vertices.
    pub min_x: Extremum,
    /// Rightmost coordinate and its vertices.
    pub max_x: Extremum,
    /// Bottommost coordinate and its vertices.
    pub min_y: Extremum,
    /// Topmost coordinate and its vertices.
    pub max_y: Extremum,
}

/// Computes the axis-aligned extrema of a 2D vertex set and extracts its
/// bounding-box corners.
///
/// Input is a list of `(index, position)` pairs; duplicate indices are
/// tolerated (multi-edge selections list shared endpoints more than once)
/// and recorded once. A vertex is a corner when it attains extrema on two
/// perpendicular axes simultaneously. Top-left and top-right corners are
/// inserted at the front of the list, bottom-left and bottom-right appended
/// at the back, so a diagonal-ish chain of edges yields its two absolute
/// endpoints in a deterministic order.
///
/// A selection spanning the bounding box diagonally yields exactly two
/// corners; callers must treat any other count as "fold line not
/// determinable".
#[must_use]
pub fn compute_bbox(verts: &[(usize, Point2)]) -> (Extrema2, Vec<usize>) {
    let mut extrema = Extrema2 {
        min_x: Extremum::new(f64::INFINITY),
        max_x: Extremum::new(f64::NEG_INFINITY),
        min_y: Extremum::new(f64::INFINITY),
        max_y: Extremum::new(f64::NEG_INFINITY),
    };

    for &(index, p) in verts {
        extrema.min_x.offer(extrema.min_x.value - p.x, p.x, index);
        extrema.max_x.offer(p.x - extrema.max_x.value, p.x, index);
        extrema.min_y.offer(extrema.min_y.value - p.y, p.y, index);
        extrema.max_y.offer(p.y - extrema.max_y.value, p.y, index);
    }

    let mut corners: Vec<usize> = Vec::new();
    for x_side in [&extrema.min_x, &extrema.max_x] {
        for &index in &x_side.indices {
            // Top corners to the front, bottom corners to the back.
            if extrema.max_y.contains(index) && !corners.contains(&index) {
                corners.insert(0, index);
            }
            if extrema.min_y.contains(index) && !corners.contains(&index) {
                corners.push(index);
            }
        }
    }

    (extrema, corners)
}
