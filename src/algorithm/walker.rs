use rand::Rng;

use crate::algorithm::movement::MovementPolicy;
use crate::spatial::CellId;

/// RGBA color handed through to the renderer untouched
pub type Color = [u8; 4];

/// How a walker's path is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PathStyle {
    /// Continuous polyline through the cell positions
    #[default]
    Stroke,
    /// One filled square per visited cell
    Blocks,
}

/// Styling carried by a walker for the drawing collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkerStyle {
    /// Main stroke color
    pub color: Color,
    /// Accent color for highlights
    pub highlight_color: Color,
    /// Polyline or blocks
    pub path_style: PathStyle,
    /// Stroke width in world units
    pub size: f64,
    /// World distance between neighbouring cells
    pub step_size: f64,
}

/// Lifecycle of a walker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkerState {
    /// Still moving
    Alive,
    /// Boxed in; kept only for its path
    Dead,
}

/// Recorded path position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathPoint {
    /// Cell visited
    pub id: CellId,
    /// Starts a new disjoint segment
    pub move_to: bool,
}

/// Agent performing a self-avoiding walk
#[derive(Debug, Clone)]
pub struct Walker {
    path: Vec<PathPoint>,
    state: WalkerState,
    policy: MovementPolicy,
    /// Rendering attributes
    pub style: WalkerStyle,
}

impl Walker {
    /// Place a new walker on `start`
    ///
    /// The caller owns occupancy and must claim `start` itself.
    pub fn new(start: CellId, policy: MovementPolicy, style: WalkerStyle) -> Self {
        Self {
            path: vec![PathPoint {
                id: start,
                move_to: true,
            }],
            state: WalkerState::Alive,
            policy,
            style,
        }
    }

    /// Advance one cell
    ///
    /// Asks the movement policy for a neighbour of the last path point and
    /// records it. The returned cell has not been claimed yet; committing it is
    /// up to the caller. A walker with nowhere to go dies and never asks its
    /// policy again.
    pub fn step<F, R>(&mut self, valid: F, rng: &mut R) -> Option<CellId>
    where
        F: Fn(CellId) -> bool,
        R: Rng,
    {
        if self.state == WalkerState::Dead {
            return None;
        }

        let current = self.head()?;
        match self.policy.next(current, valid, rng) {
            Some(next) => {
                self.path.push(PathPoint {
                    id: next,
                    move_to: false,
                });
                Some(next)
            }
            None => {
                self.state = WalkerState::Dead;
                None
            }
        }
    }

    /// Last recorded cell
    pub fn head(&self) -> Option<CellId> {
        self.path.last().map(|point| point.id)
    }

    /// Every recorded point in visiting order
    pub fn path(&self) -> &[PathPoint] {
        &self.path
    }

    /// Current lifecycle state
    pub const fn state(&self) -> WalkerState {
        self.state
    }

    /// Whether the walker still moves
    pub fn is_alive(&self) -> bool {
        self.state == WalkerState::Alive
    }

    /// Movement policy including its current preference
    pub const fn policy(&self) -> &MovementPolicy {
        &self.policy
    }
}
