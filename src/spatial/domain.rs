//! Lattice of addressable cells with optional polygon clipping
//!
//! A domain is the ordered set of cells one simulation may visit. Cells are
//! created in row-major order over an inclusive `(x + 1) × (y + 1)` lattice and
//! may then be clipped to an arbitrary subset. Lookups go through a
//! coordinate index, dense for compact sets and hashed for sparse ones, so
//! that clipped domains answer in constant time.

use ndarray::Array2;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::spatial::polygon::Polygon;

/// Extent of the lattice along each axis (inclusive upper bound)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    /// Largest x coordinate
    pub x: usize,
    /// Largest y coordinate
    pub y: usize,
}

impl Resolution {
    /// Create a rectangular resolution
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Create a square resolution
    pub const fn square(extent: usize) -> Self {
        Self::new(extent, extent)
    }

    /// Number of lattice points before clipping
    pub const fn cell_count(&self) -> usize {
        (self.x + 1) * (self.y + 1)
    }
}

impl From<usize> for Resolution {
    fn from(extent: usize) -> Self {
        Self::square(extent)
    }
}

impl From<[usize; 2]> for Resolution {
    fn from([x, y]: [usize; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// Canonical identity of a cell, derived only from its grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId {
    /// Grid column
    pub x: i32,
    /// Grid row
    pub y: i32,
}

impl CellId {
    /// Create an id from grid coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Orthogonal neighbours in the fixed order `+x, -x, +y, -y`
    ///
    /// Movement policies rely on this order: indices 0/1 form the horizontal
    /// pair and 2/3 the vertical pair. At the edge of the `i32` range a
    /// neighbour saturates onto the cell itself, which a walker standing
    /// there has always claimed.
    pub const fn neighbours(self) -> [Self; 4] {
        [
            Self::new(self.x.saturating_add(1), self.y),
            Self::new(self.x.saturating_sub(1), self.y),
            Self::new(self.x, self.y.saturating_add(1)),
            Self::new(self.x, self.y.saturating_sub(1)),
        ]
    }
}

impl From<[i32; 2]> for CellId {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

/// Single addressable grid location
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Identity and grid coordinate
    pub id: CellId,
    /// World-space position computed once at creation
    pub world: [f64; 2],
    /// Whether a walker has claimed the cell
    pub occupied: bool,
}

impl Cell {
    /// Grid column
    pub const fn x(&self) -> i32 {
        self.id.x
    }

    /// Grid row
    pub const fn y(&self) -> i32 {
        self.id.y
    }
}

// Bounding boxes larger than this many slots per cell fall back to a map
const MAX_SLOTS_PER_CELL: u64 = 4;

// Small domains always get a dense table
const MIN_DENSE_SLOTS: u64 = 1024;

/// Coordinate → position lookup over a cell set
///
/// Compact cell sets use a dense table over their bounding box whose slots
/// store `position + 1`, with zero marking coordinates outside the domain.
/// Sparse or widely spread sets use a map keyed by id instead.
#[derive(Debug, Clone)]
enum CellIndex {
    Dense {
        origin: [i32; 2],
        slots: Array2<u32>,
    },
    Sparse(HashMap<CellId, usize>),
}

impl CellIndex {
    fn build(cells: &[Cell]) -> Self {
        let Some(first) = cells.first() else {
            return Self::Sparse(HashMap::new());
        };

        let (mut min, mut max) = ([first.x(), first.y()], [first.x(), first.y()]);
        for cell in cells {
            min = [min[0].min(cell.x()), min[1].min(cell.y())];
            max = [max[0].max(cell.x()), max[1].max(cell.y())];
        }

        // Spans of i32 coordinates always fit in u64
        let width = (i64::from(max[0]) - i64::from(min[0])).unsigned_abs() + 1;
        let height = (i64::from(max[1]) - i64::from(min[1])).unsigned_abs() + 1;
        let budget = (cells.len() as u64)
            .saturating_mul(MAX_SLOTS_PER_CELL)
            .max(MIN_DENSE_SLOTS);
        let fits = width.checked_mul(height).is_some_and(|area| area <= budget)
            && u32::try_from(cells.len()).is_ok();

        if !fits {
            let positions = cells
                .iter()
                .enumerate()
                .map(|(position, cell)| (cell.id, position))
                .collect();
            return Self::Sparse(positions);
        }

        let mut slots = Array2::zeros((width as usize, height as usize));
        for (position, cell) in cells.iter().enumerate() {
            if let Some(slot) = Self::offset(min, cell.id)
                && let Some(value) = slots.get_mut(slot)
            {
                *value = position as u32 + 1;
            }
        }

        Self::Dense { origin: min, slots }
    }

    fn offset(origin: [i32; 2], id: CellId) -> Option<[usize; 2]> {
        let column = usize::try_from(i64::from(id.x) - i64::from(origin[0])).ok()?;
        let row = usize::try_from(i64::from(id.y) - i64::from(origin[1])).ok()?;
        Some([column, row])
    }

    fn position(&self, id: CellId) -> Option<usize> {
        match self {
            Self::Dense { origin, slots } => {
                let slot = Self::offset(*origin, id)?;
                match slots.get(slot).copied() {
                    Some(0) | None => None,
                    Some(value) => Some(value as usize - 1),
                }
            }
            Self::Sparse(positions) => positions.get(&id).copied(),
        }
    }
}

/// Ordered collection of cells with unique ids
///
/// Order is fixed for the lifetime of a domain and is the order in which
/// random start positions are drawn, so it matters for seed replay.
#[derive(Debug, Clone)]
pub struct Domain {
    resolution: Resolution,
    cells: Vec<Cell>,
    index: CellIndex,
}

impl Domain {
    /// Build the full inclusive lattice for `resolution`
    ///
    /// `domain_to_world` is evaluated exactly once per cell.
    pub fn new<F>(resolution: impl Into<Resolution>, domain_to_world: F) -> Self
    where
        F: Fn(i32, i32) -> [f64; 2],
    {
        let resolution = resolution.into();
        let mut cells = Vec::with_capacity(resolution.cell_count());
        for y in 0..=resolution.y as i32 {
            for x in 0..=resolution.x as i32 {
                cells.push(Cell {
                    id: CellId::new(x, y),
                    world: domain_to_world(x, y),
                    occupied: false,
                });
            }
        }
        Self::from_cells(resolution, cells)
    }

    /// Assemble a domain from prepared cells
    ///
    /// Later duplicates of an id are discarded so ids stay unique.
    pub fn from_cells(resolution: Resolution, cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut seen = HashSet::new();
        let cells: Vec<Cell> = cells.into_iter().filter(|cell| seen.insert(cell.id)).collect();
        let index = CellIndex::build(&cells);
        Self {
            resolution,
            cells,
            index,
        }
    }

    /// Keep the cells whose grid coordinate lies inside or on `polygon`
    #[must_use]
    pub fn clip(&self, polygon: &Polygon) -> Self {
        self.retain(|cell| polygon.contains([f64::from(cell.x()), f64::from(cell.y())]))
    }

    /// Keep the cells whose world coordinate lies inside or on `polygon`
    #[must_use]
    pub fn clip_world(&self, polygon: &Polygon) -> Self {
        self.retain(|cell| polygon.contains(cell.world))
    }

    fn retain(&self, keep: impl Fn(&Cell) -> bool) -> Self {
        let cells = self.cells.iter().filter(|&cell| keep(cell)).cloned();
        Self::from_cells(self.resolution, cells)
    }

    /// Mark a cell as taken before any walker runs
    ///
    /// Returns `false` when the id is not part of the domain.
    pub fn preoccupy(&mut self, id: CellId) -> bool {
        match self.index_of(id).and_then(|position| self.cells.get_mut(position)) {
            Some(cell) => {
                cell.occupied = true;
                true
            }
            None => false,
        }
    }

    /// Lattice extent this domain was generated from
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// All cells in domain order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access for writing back simulation results
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Position of `id` in domain order
    pub fn index_of(&self, id: CellId) -> Option<usize> {
        self.index.position(id)
    }

    /// Look up a cell by id
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.index_of(id).and_then(|position| self.cells.get(position))
    }

    /// Test whether `id` addresses a cell of this domain
    pub fn contains(&self, id: CellId) -> bool {
        self.index_of(id).is_some()
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether clipping removed every cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
