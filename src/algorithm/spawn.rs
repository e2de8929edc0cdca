//! Spawn patterns deciding where walkers begin
//!
//! Strategies never touch simulation state. They only call the placement
//! callback, passing `None` for "any free cell" or an explicit coordinate.
//! Whether a placement actually produces a walker is the caller's business.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::spatial::{CellId, Resolution};

/// Named spawn pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnType {
    /// `walker_count` walkers on random free cells
    #[default]
    Random,
    /// Four-fold rotationally symmetric diagonals
    Mandala,
    /// Centres of the four quadrants
    QuadCentres,
    /// Diagonal neighbours of the grid centre
    MiddleOut,
    /// Corners plus an alternating perimeter lattice
    MiddleOutCross,
}

impl SpawnType {
    /// Parse a configuration key, falling back to [`SpawnType::Random`]
    ///
    /// Keys are matched ignoring case, `-` and `_`, so `quadCentres`,
    /// `quad-centres` and `quad_centres` are the same pattern.
    pub fn from_key(key: &str) -> Self {
        let normalised: String = key
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalised.as_str() {
            "mandala" => Self::Mandala,
            "quadcentres" | "quadcenters" => Self::QuadCentres,
            "middleout" => Self::MiddleOut,
            "middleoutcross" => Self::MiddleOutCross,
            _ => Self::Random,
        }
    }

    /// Run this pattern against a placement callback
    pub fn spawn<F>(self, place: F, resolution: Resolution, walker_count: usize)
    where
        F: FnMut(Option<CellId>),
    {
        match self {
            Self::Random => random(place, walker_count),
            Self::Mandala => mandala(place, resolution),
            Self::QuadCentres => quad_centres(place, resolution),
            Self::MiddleOut => middle_out(place, resolution),
            Self::MiddleOutCross => middle_out_cross(place, resolution),
        }
    }
}

impl FromStr for SpawnType {
    type Err = Infallible;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key(key))
    }
}

impl fmt::Display for SpawnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Self::Random => "random",
            Self::Mandala => "mandala",
            Self::QuadCentres => "quadCentres",
            Self::MiddleOut => "middleOut",
            Self::MiddleOutCross => "middleOutCross",
        };
        f.write_str(key)
    }
}

fn at(x: i32, y: i32) -> Option<CellId> {
    Some(CellId::new(x, y))
}

fn fraction(extent: usize, share: f64) -> i32 {
    (extent as f64 * share).floor() as i32
}

/// Request `count` walkers at random free cells
pub fn random<F: FnMut(Option<CellId>)>(mut place: F, count: usize) {
    for _ in 0..count {
        place(None);
    }
}

/// Four symmetric diagonal arms meeting in the middle
///
/// On rectangular lattices the arms run for the shorter extent.
pub fn mandala<F: FnMut(Option<CellId>)>(mut place: F, resolution: Resolution) {
    let (rx, ry) = (resolution.x as i32, resolution.y as i32);
    for i in 0..rx.min(ry) {
        place(at(i, ry - i));
        place(at(rx - i, ry - i));
        place(at(rx - i, i));
        place(at(i, i));
    }
}

/// One walker at the floor-rounded centre of each quadrant
pub fn quad_centres<F: FnMut(Option<CellId>)>(mut place: F, resolution: Resolution) {
    let (near_x, far_x) = (fraction(resolution.x, 0.25), fraction(resolution.x, 0.75));
    let (near_y, far_y) = (fraction(resolution.y, 0.25), fraction(resolution.y, 0.75));
    place(at(near_x, near_y));
    place(at(far_x, near_y));
    place(at(near_x, far_y));
    place(at(far_x, far_y));
}

/// Four walkers diagonally adjacent to the centre
pub fn middle_out<F: FnMut(Option<CellId>)>(mut place: F, resolution: Resolution) {
    let (cx, cy) = (fraction(resolution.x, 0.5), fraction(resolution.y, 0.5));
    place(at(cx - 1, cy - 1));
    place(at(cx + 1, cy - 1));
    place(at(cx - 1, cy + 1));
    place(at(cx + 1, cy + 1));
}

/// Corners plus one walker per column and per row on alternating edges
///
/// Even columns go to the far (bottom) edge and odd ones to the near (top)
/// edge; rows alternate between the right and left edges the same way.
/// Corner placements repeat along the edges; repeats land on taken cells
/// and are dropped by the caller.
pub fn middle_out_cross<F: FnMut(Option<CellId>)>(mut place: F, resolution: Resolution) {
    let (rx, ry) = (resolution.x as i32, resolution.y as i32);

    place(at(0, 0));
    place(at(rx, 0));
    place(at(0, ry));
    place(at(rx, ry));

    for x in 0..=rx {
        let y = if x % 2 == 0 { ry } else { 0 };
        place(at(x, y));
    }

    for y in 0..=ry {
        let x = if y % 2 == 0 { rx } else { 0 };
        place(at(x, y));
    }
}
