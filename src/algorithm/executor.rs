use log::{debug, trace};
use rand::{SeedableRng, rngs::StdRng};

use crate::algorithm::{
    movement::MovementPolicy,
    occupancy::{Mode, OccupancyState},
    paths::Sketch,
    spawn::{self, SpawnType},
    walker::{Color, PathStyle, Walker, WalkerStyle},
};
use crate::io::configuration::{
    DEFAULT_PALETTE, DEFAULT_SIZE, DEFAULT_STEP_SIZE, DEFAULT_WALKER_COUNT,
};
use crate::spatial::{CellId, Domain, Polygon, Resolution};

/// Parameters shared by every walker of a run
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Interior spawn pattern, layered on top of the perimeter pattern
    pub spawn_type: SpawnType,
    /// Walkers requested by [`SpawnType::Random`]
    pub walker_count: usize,
    /// Exclude the squiggly policy
    pub flat: bool,
    /// Stroke width in world units
    pub size: f64,
    /// World distance between neighbouring cells
    pub step_size: f64,
    /// Polyline or blocks
    pub path_style: PathStyle,
    /// Colors assigned to walkers in registration order
    pub palette: Vec<Color>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            spawn_type: SpawnType::Random,
            walker_count: DEFAULT_WALKER_COUNT,
            flat: false,
            size: DEFAULT_SIZE,
            step_size: DEFAULT_STEP_SIZE,
            path_style: PathStyle::Stroke,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

/// Polygon restricting the domain, in grid or world space
#[derive(Clone, Debug, PartialEq)]
pub enum Clip {
    /// Tested against grid coordinates
    Grid(Polygon),
    /// Tested against world coordinates
    World(Polygon),
}

/// Snapshot reported after every tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickProgress {
    /// Ticks executed so far
    pub tick: usize,
    /// Claimed cells
    pub occupied: usize,
    /// Cells in the domain
    pub total: usize,
    /// Walkers ever registered
    pub walkers: usize,
    /// Walkers still moving
    pub alive: usize,
}

/// Runs walkers over a domain until every cell is claimed
///
/// Seeding happens on construction: the perimeter pattern first, then the
/// configured interior pattern. Each tick moves every live walker once. When a
/// tick leaves no walker alive the first time, nothing is spawned; every later
/// such tick backfills one walker on a random free cell.
pub struct Simulation {
    occupancy: OccupancyState,
    walkers: Vec<Walker>,
    config: RunConfig,
    rng: StdRng,
    initial_wave: bool,
    ticks: usize,
}

impl Simulation {
    /// Seed walkers onto `domain`
    pub fn new(domain: Domain, config: RunConfig, seed: u64) -> Self {
        let mut simulation = Self {
            occupancy: OccupancyState::new(domain),
            walkers: Vec::new(),
            config,
            rng: StdRng::seed_from_u64(seed),
            initial_wave: true,
            ticks: 0,
        };
        simulation.seed();
        simulation
    }

    fn seed(&mut self) {
        let resolution = self.occupancy.domain().resolution();
        let spawn_type = self.config.spawn_type;
        let walker_count = self.config.walker_count;

        spawn::middle_out_cross(
            |position| {
                self.place_walker(position);
            },
            resolution,
        );
        spawn_type.spawn(
            |position| {
                self.place_walker(position);
            },
            resolution,
            walker_count,
        );

        debug!(
            "Seeded {} walkers ({spawn_type}) on {} cells",
            self.walkers.len(),
            self.occupancy.domain().len()
        );
    }

    /// Register a walker at `position`, or at a random free cell for `None`
    ///
    /// Missing or taken targets are dropped silently. Returns whether a walker
    /// was created.
    pub fn place_walker(&mut self, position: Option<CellId>) -> bool {
        if self.occupancy.is_complete() {
            return false;
        }

        let target = match position {
            Some(id) => id,
            None => match self.occupancy.get_start(&mut self.rng) {
                Some(id) => id,
                None => return false,
            },
        };

        if !self.occupancy.valid_option(target) {
            trace!("Dropped placement at {target}");
            return false;
        }

        let policy = MovementPolicy::choose(self.config.flat, &mut self.rng);
        let style = self.style_for(self.walkers.len());
        self.occupancy.set_occupied(target);
        self.walkers.push(Walker::new(target, policy, style));
        true
    }

    fn style_for(&self, index: usize) -> WalkerStyle {
        let palette = &self.config.palette;
        let pick = |offset: usize| {
            palette
                .get((index + offset) % palette.len().max(1))
                .copied()
        };

        WalkerStyle {
            color: pick(0).unwrap_or([0, 0, 0, 255]),
            highlight_color: pick(1).unwrap_or([255, 255, 255, 255]),
            path_style: self.config.path_style,
            size: self.config.size,
            step_size: self.config.step_size,
        }
    }

    /// Advance every live walker by one cell
    ///
    /// Returns `false` once the simulation is complete; further calls do
    /// nothing.
    pub fn tick(&mut self) -> bool {
        if self.occupancy.is_complete() {
            return false;
        }
        self.ticks += 1;

        let Self {
            occupancy,
            walkers,
            rng,
            ..
        } = self;
        for walker in walkers.iter_mut().filter(|walker| walker.is_alive()) {
            if let Some(next) = walker.step(|id| occupancy.valid_option(id), rng) {
                occupancy.set_occupied(next);
            }
        }

        if self.alive_count() == 0 {
            if self.initial_wave {
                self.initial_wave = false;
                debug!("Initial wave exhausted at tick {}", self.ticks);
            } else if self.place_walker(None) {
                trace!("Backfilled walker {} at tick {}", self.walkers.len(), self.ticks);
            }
        }

        if self.occupancy.check_complete() {
            debug!(
                "Completed after {} ticks with {} walkers",
                self.ticks,
                self.walkers.len()
            );
            return false;
        }
        true
    }

    /// Run to completion
    pub fn run(self) -> Sketch {
        self.run_with(|_| {})
    }

    /// Run to completion, reporting progress after each tick
    pub fn run_with<F: FnMut(&TickProgress)>(mut self, mut observe: F) -> Sketch {
        while self.tick() {
            observe(&self.progress());
        }
        observe(&self.progress());
        self.into_sketch()
    }

    /// Current progress counters
    pub fn progress(&self) -> TickProgress {
        TickProgress {
            tick: self.ticks,
            occupied: self.occupancy.occupied_count(),
            total: self.occupancy.domain().len(),
            walkers: self.walkers.len(),
            alive: self.alive_count(),
        }
    }

    fn alive_count(&self) -> usize {
        self.walkers.iter().filter(|walker| walker.is_alive()).count()
    }

    /// Occupancy registry
    pub const fn occupancy(&self) -> &OccupancyState {
        &self.occupancy
    }

    /// Registered walkers in creation order
    pub fn walkers(&self) -> &[Walker] {
        &self.walkers
    }

    /// Current phase
    pub const fn mode(&self) -> Mode {
        self.occupancy.mode()
    }

    /// Ticks executed so far
    pub const fn ticks(&self) -> usize {
        self.ticks
    }

    /// Finish the run and hand out its walkers and filled domain
    pub fn into_sketch(self) -> Sketch {
        Sketch {
            walkers: self.walkers,
            domain: self.occupancy.into_domain(),
            ticks: self.ticks,
        }
    }
}

/// Build, optionally clip, and fill a domain in one call
pub fn generate<F>(
    resolution: impl Into<Resolution>,
    domain_to_world: F,
    clip: Option<&Clip>,
    config: RunConfig,
    seed: u64,
) -> Sketch
where
    F: Fn(i32, i32) -> [f64; 2],
{
    let domain = Domain::new(resolution, domain_to_world);
    let domain = match clip {
        Some(Clip::Grid(polygon)) => domain.clip(polygon),
        Some(Clip::World(polygon)) => domain.clip_world(polygon),
        None => domain,
    };
    Simulation::new(domain, config, seed).run()
}
