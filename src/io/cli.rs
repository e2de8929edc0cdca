//! Command-line interface for rendering batches of seeded sketches

use crate::algorithm::executor::{Clip, RunConfig, Simulation};
use crate::algorithm::spawn::SpawnType;
use crate::algorithm::walker::PathStyle;
use crate::io::configuration::{
    BACKGROUND_COLOR, CIRCLE_CLIP_SEGMENTS, DEFAULT_MARGIN, DEFAULT_PALETTE, DEFAULT_RESOLUTION,
    DEFAULT_SEED, DEFAULT_SIZE, DEFAULT_STEP_SIZE, DEFAULT_WALKER_COUNT, MAX_RESOLUTION, OUTPUT_PREFIX,
    OUTPUT_SUFFIX,
};
use crate::io::error::{FillError, Result, invalid_parameter};
use crate::io::image::RasterSurface;
use crate::io::prefill::PrefillData;
use crate::io::progress::ProgressManager;
use crate::spatial::{Domain, Polygon, Resolution};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Built-in clip shapes centred on the lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ClipShape {
    /// Keep the whole lattice
    #[default]
    None,
    /// Circle inscribed in the canvas, tested in world space
    Circle,
    /// Diamond touching the lattice edges, tested in grid space
    Diamond,
}

impl ClipShape {
    /// Clip polygon for a lattice drawn `step_size` apart with `margin`
    pub fn to_clip(self, resolution: Resolution, step_size: f64, margin: f64) -> Option<Clip> {
        let half = [resolution.x as f64 * 0.5, resolution.y as f64 * 0.5];
        match self {
            Self::None => None,
            Self::Circle => {
                let centre = [half[0].mul_add(step_size, margin), half[1].mul_add(step_size, margin)];
                let radius = half[0].min(half[1]) * step_size;
                Some(Clip::World(Polygon::circle(
                    centre,
                    radius,
                    CIRCLE_CLIP_SEGMENTS,
                )))
            }
            Self::Diamond => Some(Clip::Grid(Polygon::diamond(half, half[0].min(half[1])))),
        }
    }
}

/// Parse `N` or `WxH` into a lattice resolution
///
/// # Errors
///
/// Returns a message when either extent is not a non-negative integer
pub fn parse_resolution(value: &str) -> std::result::Result<Resolution, String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("'{part}' is not a valid extent: {e}"))
    };

    match value.split_once(['x', 'X']) {
        Some((x, y)) => Ok(Resolution::new(parse(x)?, parse(y)?)),
        None => parse(value).map(Resolution::square),
    }
}

#[derive(Parser)]
#[command(name = "fillwalk")]
#[command(
    author,
    version,
    about = "Fill a lattice with space-filling random walkers and render the paths"
)]
/// Command-line arguments for the sketch renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory receiving the rendered PNG files
    #[arg(value_name = "OUTPUT_DIR")]
    pub output: PathBuf,

    /// Random seed of the first sketch
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of consecutive seeds to render
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u64,

    /// Lattice extent as `N` or `WxH`
    #[arg(
        short,
        long,
        default_value_t = Resolution::square(DEFAULT_RESOLUTION),
        value_parser = parse_resolution
    )]
    pub resolution: Resolution,

    /// Spawn pattern: random, mandala, quadCentres, middleOut, middleOutCross
    #[arg(long, default_value = "random")]
    pub spawn: String,

    /// Walkers placed by the random spawn pattern
    #[arg(short, long, default_value_t = DEFAULT_WALKER_COUNT)]
    pub walkers: usize,

    /// Only axis-preferring walkers (no squiggly ones)
    #[arg(short, long)]
    pub flat: bool,

    /// Stroke width in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub size: f64,

    /// Pixels between neighbouring cells
    #[arg(long, default_value_t = DEFAULT_STEP_SIZE)]
    pub step_size: f64,

    /// How paths are drawn
    #[arg(long, value_enum, default_value_t = PathStyle::Stroke)]
    pub style: PathStyle,

    /// Clip shape applied to the lattice
    #[arg(long, value_enum, default_value_t = ClipShape::None)]
    pub clip: ClipShape,

    /// PNG mask whose opaque pixels start out occupied
    #[arg(short, long)]
    pub prefill: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render seeds even if their output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Engine configuration described by the arguments
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            spawn_type: SpawnType::from_key(&self.spawn),
            walker_count: self.walkers,
            flat: self.flat,
            size: self.size,
            step_size: self.step_size,
            path_style: self.style,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }

    /// Reject arguments the renderer cannot honour
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution exceeds [`MAX_RESOLUTION`], the
    /// step or stroke size is not a usable number, or no seed is requested
    pub fn validate(&self) -> Result<()> {
        if self.resolution.x > MAX_RESOLUTION || self.resolution.y > MAX_RESOLUTION {
            return Err(invalid_parameter(
                "resolution",
                &self.resolution,
                &format!("extent must not exceed {MAX_RESOLUTION}"),
            ));
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(invalid_parameter(
                "step-size",
                &self.step_size,
                &"must be a positive number",
            ));
        }
        if !self.size.is_finite() || self.size < 0.0 {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &"must be a non-negative number",
            ));
        }
        if self.count == 0 {
            return Err(invalid_parameter("count", &self.count, &"must be at least 1"));
        }
        Ok(())
    }
}

/// Renders one PNG per requested seed with progress tracking
pub struct SketchRenderer {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SketchRenderer {
    /// Create a renderer for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render every requested seed
    ///
    /// Returns the paths written, in seed order.
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, prefill loading or image
    /// export fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        self.cli.validate()?;

        let prefill = self
            .cli
            .prefill
            .as_deref()
            .map(PrefillData::from_png)
            .transpose()?;

        let seeds: Vec<u64> = (0..self.cli.count)
            .map(|offset| self.cli.seed.wrapping_add(offset))
            .filter(|&seed| self.should_render(seed))
            .collect();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        let mut written = Vec::with_capacity(seeds.len());
        for (index, &seed) in seeds.iter().enumerate() {
            written.push(self.render_seed(seed, index, prefill.as_ref())?);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn should_render(&self, seed: u64) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(seed);
        if output_path.exists() {
            info!("Skipping seed {seed}: {} exists", output_path.display());
            false
        } else {
            true
        }
    }

    /// Domain for this run: lattice, clip shape, then prefill
    pub fn build_domain(&self, prefill: Option<&PrefillData>) -> Domain {
        let (step_size, margin) = (self.cli.step_size, DEFAULT_MARGIN);
        let domain = Domain::new(self.cli.resolution, |x, y| {
            [
                f64::from(x).mul_add(step_size, margin),
                f64::from(y).mul_add(step_size, margin),
            ]
        });

        let mut domain = match self.cli.clip.to_clip(self.cli.resolution, step_size, margin) {
            Some(Clip::Grid(polygon)) => domain.clip(&polygon),
            Some(Clip::World(polygon)) => domain.clip_world(&polygon),
            None => domain,
        };

        if let Some(prefill) = prefill {
            let marked = prefill.apply(&mut domain);
            info!("Prefilled {marked} cells");
        }
        domain
    }

    fn render_seed(
        &mut self,
        seed: u64,
        index: usize,
        prefill: Option<&PrefillData>,
    ) -> Result<PathBuf> {
        let output_path = self.output_path(seed);
        let domain = self.build_domain(prefill);

        if domain.is_empty() {
            warn!(
                "{}",
                FillError::EmptyDomain {
                    resolution: self.cli.resolution.to_string(),
                }
            );
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_run(index, &format!("seed {seed}"), domain.len());
        }

        let simulation = Simulation::new(domain, self.cli.run_config(), seed);
        let progress_manager = &mut self.progress_manager;
        let sketch = simulation.run_with(|progress| {
            if let Some(pm) = progress_manager.as_mut() {
                pm.update_run(index, progress.occupied);
            }
        });

        let mut surface = RasterSurface::for_resolution(
            self.cli.resolution,
            self.cli.step_size,
            DEFAULT_MARGIN,
            BACKGROUND_COLOR,
        );
        sketch.draw(&mut surface);
        surface.save(&output_path)?;

        info!(
            "Seed {seed}: {} walkers over {} ticks -> {}",
            sketch.walkers.len(),
            sketch.ticks,
            output_path.display()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_run(index);
        }

        Ok(output_path)
    }

    /// Output file for a seed: `<OUTPUT_DIR>/walk_<seed>_result.png`
    pub fn output_path(&self, seed: u64) -> PathBuf {
        output_path_in(&self.cli.output, seed)
    }
}

fn output_path_in(directory: &Path, seed: u64) -> PathBuf {
    directory.join(format!("{OUTPUT_PREFIX}_{seed}{OUTPUT_SUFFIX}.png"))
}
