use crate::algorithm::walker::{PathPoint, PathStyle, Walker};
use crate::io::surface::Surface;
use crate::spatial::{CellId, Domain};

/// Grid polylines of one walker
pub type GridPolylines = Vec<Vec<[i32; 2]>>;
/// World polylines of one walker
pub type WorldPolylines = Vec<Vec<[f64; 2]>>;

/// Split a recorded path into disjoint segments
///
/// A new segment begins at every point flagged `move_to`. Points before the
/// first flagged point still form a segment of their own.
pub fn split_segments(path: &[PathPoint]) -> Vec<Vec<CellId>> {
    let mut segments: Vec<Vec<CellId>> = Vec::new();
    for point in path {
        match segments.last_mut() {
            Some(segment) if !point.move_to => segment.push(point.id),
            _ => segments.push(vec![point.id]),
        }
    }
    segments
}

/// Grid-coordinate polylines for every walker, in registration order
pub fn grid_polylines(walkers: &[Walker]) -> Vec<GridPolylines> {
    walkers
        .iter()
        .map(|walker| {
            split_segments(walker.path())
                .into_iter()
                .map(|segment| segment.into_iter().map(|id| [id.x, id.y]).collect())
                .collect()
        })
        .collect()
}

/// World-coordinate polylines using each cell's precomputed world position
///
/// Points whose cell is missing from `domain` are skipped.
pub fn world_polylines(walkers: &[Walker], domain: &Domain) -> Vec<WorldPolylines> {
    walkers
        .iter()
        .map(|walker| {
            split_segments(walker.path())
                .into_iter()
                .map(|segment| {
                    segment
                        .into_iter()
                        .filter_map(|id| domain.get(id).map(|cell| cell.world))
                        .collect()
                })
                .collect()
        })
        .collect()
}

/// Finished run: walkers, the filled domain and how long it took
#[derive(Debug, Clone)]
pub struct Sketch {
    /// Every walker ever registered, dead or alive
    pub walkers: Vec<Walker>,
    /// Domain with final occupancy written onto each cell
    pub domain: Domain,
    /// Ticks executed before completion
    pub ticks: usize,
}

impl Sketch {
    /// Grid polylines grouped per walker
    pub fn grid_paths(&self) -> Vec<GridPolylines> {
        grid_polylines(&self.walkers)
    }

    /// World polylines grouped per walker
    pub fn world_paths(&self) -> Vec<WorldPolylines> {
        world_polylines(&self.walkers, &self.domain)
    }

    /// Whether the run produced no paths at all
    pub fn is_empty(&self) -> bool {
        self.walkers.is_empty()
    }

    /// Hand every walker's world paths to a drawing surface
    ///
    /// Pure output: the simulation has already finished, so this may be
    /// called once per frame.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        for (walker, polylines) in self.walkers.iter().zip(self.world_paths()) {
            for polyline in &polylines {
                match walker.style.path_style {
                    PathStyle::Stroke => surface.stroke_polyline(polyline, &walker.style),
                    PathStyle::Blocks => {
                        for &point in polyline {
                            surface.fill_square(point, walker.style.size, walker.style.color);
                        }
                    }
                }
            }
        }
    }
}
