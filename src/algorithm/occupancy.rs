use bitvec::prelude::*;
use rand::Rng;

use crate::spatial::{Cell, CellId, Domain};

/// Simulation phase; only ever moves from `Draw` to `Complete`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Walkers are still claiming cells
    Draw,
    /// Every cell is occupied and occupancy is frozen
    Complete,
}

/// Free-cell counts over domain order as a Fenwick tree
///
/// Slot `i` (1-based) holds the free cells in the range ending at `i` whose
/// length is the lowest set bit of `i`.
#[derive(Debug, Clone)]
struct FreeCells {
    tree: Vec<usize>,
    free: usize,
}

impl FreeCells {
    fn new(occupied: &BitSlice) -> Self {
        let len = occupied.len();
        let mut tree = vec![0; len + 1];
        for (position, taken) in occupied.iter().by_vals().enumerate() {
            let slot = position + 1;
            let own = tree.get(slot).copied().unwrap_or(0) + usize::from(!taken);
            if let Some(value) = tree.get_mut(slot) {
                *value = own;
            }
            let parent = slot + lowest_bit(slot);
            if let Some(value) = tree.get_mut(parent) {
                *value += own;
            }
        }
        Self {
            tree,
            free: occupied.count_zeros(),
        }
    }

    fn claim(&mut self, position: usize) {
        self.free = self.free.saturating_sub(1);
        let mut slot = position + 1;
        while let Some(value) = self.tree.get_mut(slot) {
            *value = value.saturating_sub(1);
            slot += lowest_bit(slot);
        }
    }

    // Position of the `rank`-th free cell, counting from zero
    fn select(&self, rank: usize) -> Option<usize> {
        if rank >= self.free {
            return None;
        }

        let len = self.tree.len() - 1;
        let mut step = if len == 0 { 0 } else { 1 << len.ilog2() };
        let (mut slot, mut remaining) = (0, rank);
        while step > 0 {
            if let Some(&count) = self.tree.get(slot + step)
                && count <= remaining
            {
                slot += step;
                remaining -= count;
            }
            step >>= 1;
        }
        Some(slot)
    }
}

const fn lowest_bit(slot: usize) -> usize {
    slot & slot.wrapping_neg()
}

/// Occupancy registry for one simulation run
///
/// Owns the domain and one occupancy bit per cell, parallel to domain order.
/// Bits are only ever set, never cleared, and stop changing once the mode
/// reaches [`Mode::Complete`]. The walker registry lives next to this state on
/// [`Simulation`](crate::algorithm::executor::Simulation) rather than inside
/// it, so walkers can step mutably while their validity checks read occupancy.
#[derive(Debug, Clone)]
pub struct OccupancyState {
    domain: Domain,
    occupied: BitVec,
    free: FreeCells,
    mode: Mode,
}

impl OccupancyState {
    /// Take ownership of a domain, honouring any pre-occupied cells
    pub fn new(domain: Domain) -> Self {
        let occupied: BitVec = domain.cells().iter().map(|cell| cell.occupied).collect();
        let free = FreeCells::new(&occupied);
        Self {
            domain,
            occupied,
            free,
            mode: Mode::Draw,
        }
    }

    /// Domain being filled
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Current phase
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the run has finished
    pub fn is_complete(&self) -> bool {
        self.mode == Mode::Complete
    }

    /// Look up a cell by grid coordinate
    pub fn get_point(&self, x: i32, y: i32) -> Option<&Cell> {
        self.domain.get(CellId::new(x, y))
    }

    /// Draw a uniformly random unoccupied cell
    ///
    /// Returns `None` once no free cell remains.
    pub fn get_start<R: Rng>(&self, rng: &mut R) -> Option<CellId> {
        if self.free.free == 0 {
            return None;
        }

        let pick = rng.random_range(0..self.free.free);
        self.free
            .select(pick)
            .and_then(|position| self.domain.cells().get(position))
            .map(|cell| cell.id)
    }

    /// Whether `id` is a taken cell; ids outside the domain are never taken
    pub fn is_occupied(&self, id: CellId) -> bool {
        self.domain
            .index_of(id)
            .and_then(|position| self.occupied.get(position).map(|bit| *bit))
            .unwrap_or(false)
    }

    /// Claim a cell
    ///
    /// Ids outside the domain are ignored, as is any call after completion.
    /// Returns whether a previously free cell was claimed.
    pub fn set_occupied(&mut self, id: CellId) -> bool {
        if self.is_complete() {
            return false;
        }

        let Some(position) = self.domain.index_of(id) else {
            return false;
        };
        match self.occupied.get(position).map(|bit| *bit) {
            Some(false) => {
                self.occupied.set(position, true);
                self.free.claim(position);
                true
            }
            _ => false,
        }
    }

    /// Movement validity: the id exists in the domain and is still free
    pub fn valid_option(&self, id: CellId) -> bool {
        self.domain
            .index_of(id)
            .and_then(|position| self.occupied.get(position).map(|bit| *bit))
            .is_some_and(|taken| !taken)
    }

    /// Number of claimed cells
    pub fn occupied_count(&self) -> usize {
        self.occupied.len() - self.free.free
    }

    /// Whether every cell is claimed (vacuously true for an empty domain)
    pub fn is_full(&self) -> bool {
        self.free.free == 0
    }

    /// Move to [`Mode::Complete`] if the domain is full
    ///
    /// Returns whether the run is complete after the check.
    pub fn check_complete(&mut self) -> bool {
        if self.is_full() {
            self.mode = Mode::Complete;
        }
        self.is_complete()
    }

    /// Release the domain with occupancy written back onto each cell
    pub fn into_domain(self) -> Domain {
        let Self {
            mut domain,
            occupied,
            ..
        } = self;
        for (cell, taken) in domain.cells_mut().iter_mut().zip(occupied.iter().by_vals()) {
            cell.occupied = taken;
        }
        domain
    }
}
