//! Command-line interface for batch rendering of image files

use crate::io::configuration::{
    OUTPUT_EXTENSION, OUTPUT_SUFFIX, PREVIEW_SUFFIX, SOURCE_EXTENSIONS,
};
use crate::io::error::{RenderError, Result, WithPath, invalid_parameter};
use crate::io::image::{export_png, load_source};
use crate::io::progress::ProgressManager;
use crate::pattern::PatternType;
use crate::pipeline::{RenderRequest, Side, render};
use crate::style::Color;
use crate::style::presets::find_preset;
use clap::Parser;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "duotile")]
#[command(author, version, about = "Turn photographs into two-tone pattern art")]
/// Command-line arguments for the renderer
// Each boolean is an independent user-facing switch
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory of images
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Named look to start from (newsprint, blueprint, riso, gingham, etching)
    #[arg(long)]
    pub preset: Option<String>,

    /// Motif drawn into the pattern region
    #[arg(short, long, value_enum)]
    pub pattern: Option<PatternType>,

    /// Luminance class that receives the motif
    #[arg(short, long, value_enum)]
    pub side: Option<Side>,

    /// Brightness shift (-100 to 100)
    #[arg(short, long, allow_negative_numbers = true)]
    pub brightness: Option<i32>,

    /// Contrast change (-100 to 100)
    #[arg(short, long, allow_negative_numbers = true)]
    pub contrast: Option<i32>,

    /// Light/dark cut-off in percent (0 to 100)
    #[arg(short, long)]
    pub threshold: Option<i32>,

    /// Tile size multiplier (0.5 to 3.0)
    #[arg(long)]
    pub scale: Option<f32>,

    /// Stroke width in pixels (0.5 to 6.0)
    #[arg(long)]
    pub stroke: Option<f32>,

    /// Stripe angle in degrees (0 to 180)
    #[arg(long)]
    pub rotation: Option<f32>,

    /// Motif color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    pub pattern_color: Option<Color>,

    /// Background color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    pub background_color: Option<Color>,

    /// Swap pattern and background colors
    #[arg(short, long)]
    pub invert: bool,

    /// Also write the binary preview next to each output
    #[arg(long)]
    pub preview: bool,

    /// Directory for outputs (defaults to each input's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log each pipeline stage
    #[arg(short, long)]
    pub verbose: bool,
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

    /// Default log level when `RUST_LOG` is unset
    pub const fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    /// Render parameters: explicit flags override the preset, which overrides defaults
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the preset name is unknown
    pub fn request(&self) -> Result<RenderRequest> {
        let mut request = match &self.preset {
            Some(name) => find_preset(name)?.request(),
            None => RenderRequest::default(),
        };

        if let Some(pattern) = self.pattern {
            request.pattern = pattern;
        }
        if let Some(side) = self.side {
            request.side = side;
        }
        if let Some(brightness) = self.brightness {
            request.adjustments.brightness = brightness;
        }
        if let Some(contrast) = self.contrast {
            request.adjustments.contrast = contrast;
        }
        if let Some(threshold) = self.threshold {
            request.adjustments.threshold = threshold;
        }
        if let Some(scale) = self.scale {
            request.options.scale = scale;
        }
        if let Some(stroke) = self.stroke {
            request.options.stroke = stroke;
        }
        if let Some(rotation) = self.rotation {
            request.options.rotation = rotation;
        }
        if let Some(color) = self.pattern_color {
            request.colors.pattern = color;
        }
        if let Some(color) = self.background_color {
            request.colors.background = color;
        }
        request.invert = self.invert;

        Ok(request)
    }
}

/// Orchestrates batch rendering of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters or target are invalid, or if any
    /// file fails to decode, render or export
    pub fn process(&mut self) -> Result<()> {
        let request = self.cli.request()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            log::warn!("No images found at '{}'", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            if self.should_process_file(file) {
                self.process_file(file, &request)?;
            } else {
                log::info!("Skipping: {} (output exists)", file.display());
                if let Some(ref mut pm) = self.progress_manager {
                    pm.skip_file(file);
                }
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_source_image(target) {
                Ok(vec![target.clone()])
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("expected one of: {}", SOURCE_EXTENSIONS.join(", ")),
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target)? {
                let path = entry.with_path(target)?.path();
                if !is_source_image(&path) {
                    continue;
                }
                if is_own_output(&path) {
                    log::info!("Skipping: {} (output of a sibling source)", path.display());
                    continue;
                }
                files.push(path);
            }
            files.sort();
            Ok(files)
        } else {
            Err(RenderError::FileSystem {
                path: target.clone(),
                operation: "locate target",
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "not a file or directory",
                ),
            })
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        !self.cli.skip_existing() || !self.output_path(input_path, OUTPUT_SUFFIX).exists()
    }

    fn process_file(&mut self, input_path: &Path, request: &RenderRequest) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let source = load_source(input_path)?;
        let rendered = render(&source, request)?;

        export_png(
            &rendered.output,
            &self.output_path(input_path, OUTPUT_SUFFIX),
        )?;
        if self.cli.preview {
            export_png(
                &rendered.preview,
                &self.output_path(input_path, PREVIEW_SUFFIX),
            )?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(input_path, start_time.elapsed());
        }

        Ok(())
    }

    /// Where the output with `suffix` for `input_path` is written
    pub fn output_path(&self, input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{suffix}.{OUTPUT_EXTENSION}", stem.to_string_lossy());

        match (&self.cli.output_dir, input_path.parent()) {
            (Some(dir), _) => dir.join(output_name),
            (None, Some(parent)) => parent.join(output_name),
            (None, None) => PathBuf::from(output_name),
        }
    }
}

fn is_source_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

// An earlier output is a suffixed PNG whose unsuffixed source sits beside it
fn is_own_output(path: &Path) -> bool {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(OUTPUT_EXTENSION));
    let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
        return false;
    };

    is_png
        && [OUTPUT_SUFFIX, PREVIEW_SUFFIX]
            .iter()
            .filter_map(|suffix| stem.strip_suffix(suffix))
            .any(|base| {
                SOURCE_EXTENSIONS
                    .iter()
                    .any(|ext| path.with_file_name(format!("{base}.{ext}")).exists())
            })
}
