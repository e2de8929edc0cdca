//! Clip polygons with inclusive point containment
//!
//! Points lying exactly on an edge or vertex count as inside, so a polygon
//! drawn along the lattice border keeps the border cells.

/// Tolerance used when deciding whether a point lies on an edge
const EDGE_EPSILON: f64 = 1e-9;

/// Simple polygon given as an ordered vertex ring
///
/// The ring is implicitly closed; the last vertex connects back to the first.
/// Self-intersecting rings are classified with the even-odd rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<[f64; 2]>,
}

impl Polygon {
    /// Create a polygon from its vertices
    pub const fn new(vertices: Vec<[f64; 2]>) -> Self {
        Self { vertices }
    }

    /// Axis-aligned rectangle spanning two corners
    pub fn rectangle(min: [f64; 2], max: [f64; 2]) -> Self {
        Self::new(vec![
            [min[0], min[1]],
            [max[0], min[1]],
            [max[0], max[1]],
            [min[0], max[1]],
        ])
    }

    /// Regular polygon approximating a circle
    ///
    /// Fewer than three segments are raised to three.
    pub fn circle(centre: [f64; 2], radius: f64, segments: usize) -> Self {
        let segments = segments.max(3);
        let vertices = (0..segments)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / segments as f64;
                [
                    radius.mul_add(angle.cos(), centre[0]),
                    radius.mul_add(angle.sin(), centre[1]),
                ]
            })
            .collect();
        Self::new(vertices)
    }

    /// Square rotated by 45 degrees around `centre`
    pub fn diamond(centre: [f64; 2], radius: f64) -> Self {
        Self::new(vec![
            [centre[0], centre[1] - radius],
            [centre[0] + radius, centre[1]],
            [centre[0], centre[1] + radius],
            [centre[0] - radius, centre[1]],
        ])
    }

    /// Vertex ring in insertion order
    pub fn vertices(&self) -> &[[f64; 2]] {
        &self.vertices
    }

    /// Iterate the closed ring as consecutive edges
    fn edges(&self) -> impl Iterator<Item = ([f64; 2], [f64; 2])> + '_ {
        let shifted = self.vertices.iter().cycle().skip(1);
        self.vertices.iter().copied().zip(shifted.copied())
    }

    /// Test whether a point is inside the polygon or on its boundary
    pub fn contains(&self, point: [f64; 2]) -> bool {
        if self.vertices.is_empty() {
            return false;
        }

        if self.edges().any(|(a, b)| on_segment(point, a, b)) {
            return true;
        }

        // Even-odd ray cast towards +x
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a[1] > point[1]) != (b[1] > point[1]) {
                let crossing = (b[0] - a[0]) * (point[1] - a[1]) / (b[1] - a[1]) + a[0];
                if point[0] < crossing {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

impl From<Vec<[f64; 2]>> for Polygon {
    fn from(vertices: Vec<[f64; 2]>) -> Self {
        Self::new(vertices)
    }
}

fn on_segment(point: [f64; 2], a: [f64; 2], b: [f64; 2]) -> bool {
    let cross = (b[0] - a[0]).mul_add(point[1] - a[1], -((b[1] - a[1]) * (point[0] - a[0])));
    if cross.abs() > EDGE_EPSILON {
        return false;
    }

    point[0] >= a[0].min(b[0]) - EDGE_EPSILON
        && point[0] <= a[0].max(b[0]) + EDGE_EPSILON
        && point[1] >= a[1].min(b[1]) - EDGE_EPSILON
        && point[1] <= a[1].max(b[1]) + EDGE_EPSILON
}
