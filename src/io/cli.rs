//! Command-line interface for composing mosaics from a source directory

use crate::compose::{GridSpec, MosaicComposer};
use crate::io::configuration::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_OUTPUT_NAME, DEFAULT_STRIDE,
    DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH, SAVE_DIRECTORY,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::store;
use clap::{Parser, ValueEnum};
use image::RgbImage;
use std::path::PathBuf;

/// Composition mode for a single output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Cycle through the sources in order, scaling each into its cell
    Tiled,
    /// Fill each cell with the selected source's average color
    Average,
    /// Select each cell's source by nearest average color to the model
    Matched,
}

impl Mode {
    /// Name used in output filenames and progress messages
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tiled => "tiled",
            Self::Average => "average",
            Self::Matched => "matched",
        }
    }
}

#[derive(Parser)]
#[command(name = "photomosaic")]
#[command(
    version,
    about = "Compose photomosaics from a directory of source images"
)]
/// Command-line arguments for the mosaic composition tool
pub struct Cli {
    /// Directory containing the source images
    #[arg(value_name = "SOURCES")]
    pub sources: PathBuf,

    /// Model image whose regional colors drive matched composition
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Composition mode (omitted: run every mode the inputs support)
    #[arg(short = 'M', long, value_enum)]
    pub mode: Option<Mode>,

    /// Number of tiles horizontally
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub grid_width: u32,

    /// Number of tiles vertically
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub grid_height: u32,

    /// Width of each tile in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: u32,

    /// Height of each tile in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: u32,

    /// Pixel sampling step for average color computation
    #[arg(short, long, default_value_t = DEFAULT_STRIDE)]
    pub stride: u32,

    /// Base name for output files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    pub output: String,

    /// Directory composed mosaics are written into
    #[arg(long, default_value = SAVE_DIRECTORY)]
    pub output_dir: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates loading the sources and running a batch of compositions
pub struct MosaicProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Load the inputs and run every requested composition
    ///
    /// # Errors
    ///
    /// Returns an error if the model image cannot be loaded, a composition
    /// fails (empty source collection, invalid grid, undersized model), or
    /// an output cannot be saved.
    pub fn process(&mut self) -> Result<()> {
        let sources = store::load_images_from_directory(&self.cli.sources);

        let model = match &self.cli.model {
            Some(path) => Some(store::load_image(path)?),
            None => None,
        };

        let modes = self.select_modes(model.is_some())?;

        let grid = GridSpec::new(
            self.cli.grid_width,
            self.cli.grid_height,
            self.cli.tile_width,
            self.cli.tile_height,
        );
        let composer = MosaicComposer::with_stride(self.cli.stride);

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(modes.len());
        }

        for mode in modes {
            self.run_job(mode, &composer, &sources, model.as_ref(), &grid)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn select_modes(&self, has_model: bool) -> Result<Vec<Mode>> {
        match self.cli.mode {
            Some(Mode::Matched) if !has_model => Err(invalid_parameter(
                "mode",
                &"matched",
                &"matched composition requires --model",
            )),
            Some(mode) => Ok(vec![mode]),
            None => {
                let mut modes = vec![Mode::Tiled, Mode::Average];
                if has_model {
                    modes.push(Mode::Matched);
                }
                Ok(modes)
            }
        }
    }

    fn run_job(
        &self,
        mode: Mode,
        composer: &MosaicComposer,
        sources: &[RgbImage],
        model: Option<&RgbImage>,
        grid: &GridSpec,
    ) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_job(mode.label());
        }

        let mosaic = match mode {
            Mode::Tiled => composer.compose_tiled(sources, grid)?,
            Mode::Average => composer.compose_average(sources, grid)?,
            Mode::Matched => {
                let model = model.ok_or_else(|| {
                    invalid_parameter("mode", &"matched", &"matched composition requires --model")
                })?;
                composer.compose_matched(sources, model, grid)?
            }
        };

        let name = format!("{}_{}", self.cli.output, mode.label());
        store::save_image_to(&mosaic, &self.cli.output_dir, &name)?;

        if let Some(ref pm) = self.progress_manager {
            pm.complete_job();
        }

        Ok(())
    }
}
