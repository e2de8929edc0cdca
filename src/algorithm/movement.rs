use rand::Rng;
use rand::seq::IndexedRandom;

use crate::spatial::CellId;

/// Movement policy variant without its per-walker state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    /// Prefers runs along the x axis
    Horizontal,
    /// Prefers runs along the y axis
    Vertical,
    /// Uniformly random among free neighbours
    Squiggly,
}

const ALL_KINDS: [PolicyKind; 3] = [
    PolicyKind::Horizontal,
    PolicyKind::Vertical,
    PolicyKind::Squiggly,
];
const FLAT_KINDS: [PolicyKind; 2] = [PolicyKind::Horizontal, PolicyKind::Vertical];

/// Per-walker strategy proposing the next cell
///
/// Axis variants hold an index into [`CellId::neighbours`]: 0/1 for the
/// horizontal pair, 2/3 for the vertical pair. Flipping toggles the low bit,
/// which always stays on the same axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementPolicy {
    /// Try `+x`/`-x` first, bounce once, then any free neighbour
    Horizontal {
        /// Neighbour index currently preferred (0 or 1)
        preferred: usize,
    },
    /// Try `+y`/`-y` first, bounce once, then any free neighbour
    Vertical {
        /// Neighbour index currently preferred (2 or 3)
        preferred: usize,
    },
    /// Any free neighbour, uniformly
    Squiggly,
}

impl MovementPolicy {
    /// Pick a policy kind uniformly, then its initial direction
    ///
    /// `flat` removes [`PolicyKind::Squiggly`] from the draw. The generator is
    /// consumed in that order: one draw for the kind, one for the direction of
    /// axis variants.
    pub fn choose<R: Rng>(flat: bool, rng: &mut R) -> Self {
        let kinds: &[PolicyKind] = if flat { &FLAT_KINDS } else { &ALL_KINDS };
        let kind = kinds.choose(rng).copied().unwrap_or(PolicyKind::Horizontal);
        Self::with_kind(kind, rng)
    }

    /// Build a policy of a fixed kind with a random initial direction
    pub fn with_kind<R: Rng>(kind: PolicyKind, rng: &mut R) -> Self {
        match kind {
            PolicyKind::Horizontal => Self::Horizontal {
                preferred: rng.random_range(0..2),
            },
            PolicyKind::Vertical => Self::Vertical {
                preferred: 2 + rng.random_range(0..2),
            },
            PolicyKind::Squiggly => Self::Squiggly,
        }
    }

    /// Variant of this policy
    pub const fn kind(&self) -> PolicyKind {
        match self {
            Self::Horizontal { .. } => PolicyKind::Horizontal,
            Self::Vertical { .. } => PolicyKind::Vertical,
            Self::Squiggly => PolicyKind::Squiggly,
        }
    }

    /// Propose the next cell from `current`
    ///
    /// Every returned cell passed `valid` at the time of the call. `None` means
    /// the walker is boxed in.
    pub fn next<F, R>(&mut self, current: CellId, valid: F, rng: &mut R) -> Option<CellId>
    where
        F: Fn(CellId) -> bool,
        R: Rng,
    {
        let candidates = current.neighbours();

        match self {
            Self::Horizontal { preferred } | Self::Vertical { preferred } => {
                if let Some(cell) = candidates.get(*preferred).copied().filter(|&c| valid(c)) {
                    return Some(cell);
                }

                // Bounce to the opposite direction on the same axis
                *preferred ^= 1;
                if let Some(cell) = candidates.get(*preferred).copied().filter(|&c| valid(c)) {
                    return Some(cell);
                }

                random_valid(&candidates, &valid, rng)
            }
            Self::Squiggly => random_valid(&candidates, &valid, rng),
        }
    }
}

fn random_valid<F, R>(candidates: &[CellId], valid: &F, rng: &mut R) -> Option<CellId>
where
    F: Fn(CellId) -> bool,
    R: Rng,
{
    let options: Vec<CellId> = candidates.iter().copied().filter(|&c| valid(c)).collect();
    options.choose(rng).copied()
}
