// pot/src/core/processor.rs
use super::{PotConfig, Result, ScaleDirection, TargetSize};
use crate::processors::{ensure_output_dir, scan_directory, DimensionCalculator, ImageTool};
use crate::utils::generate_output_path;
use std::io::Write;
use std::path::Path;

pub const USAGE: &str = "Usage: pot [path to image]";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchStats {
    pub scanned: usize,
    pub resized: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Drives probe and batch runs. Everything meant for the user, diagnostics
/// included, is written to `out`.
pub struct PowerOfTwoProcessor<T, W> {
    config: PotConfig,
    calculator: DimensionCalculator<T>,
    out: W,
}

impl<T: ImageTool, W: Write> PowerOfTwoProcessor<T, W> {
    pub fn new(config: PotConfig, tool: T, out: W) -> Self {
        Self {
            config,
            calculator: DimensionCalculator::new(tool),
            out,
        }
    }

    pub fn config(&self) -> &PotConfig {
        &self.config
    }

    pub fn tool(&self) -> &T {
        self.calculator.tool()
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Probe mode entry point: prints the usage line when no image is given.
    pub fn run_probe(&mut self, image: Option<&Path>) -> Result<Option<TargetSize>> {
        match image {
            Some(path) => self.probe(path).map(Some),
            None => {
                writeln!(self.out, "{}", USAGE)?;
                Ok(None)
            }
        }
    }

    /// Prints the rounded-up width and height of `image` on separate lines.
    pub fn probe(&mut self, image: &Path) -> Result<TargetSize> {
        let size = self
            .calculator
            .target_size(image, ScaleDirection::Up, &mut self.out)?;

        writeln!(self.out, "{}", size.width)?;
        writeln!(self.out, "{}", size.height)?;

        Ok(size)
    }

    /// Resizes every matching image directly inside `dir` into the output
    /// folder. Failures on one file never stop the others.
    pub fn run_batch(&mut self, dir: &Path) -> Result<BatchStats> {
        self.config.validate()?;

        let output_dir = dir.join(&self.config.output_folder);
        if let Err(e) = ensure_output_dir(&output_dir) {
            writeln!(
                self.out,
                "Could not create output directory {}: {}",
                output_dir.display(),
                e
            )?;
        }

        let images = scan_directory(dir, &self.config.extension, &mut self.out)?;
        let mut stats = BatchStats {
            scanned: images.len(),
            ..Default::default()
        };

        if images.is_empty() {
            log::warn!(
                "No .{} files found in {}",
                self.config.extension,
                dir.display()
            );
        }

        for image in &images {
            self.process_file(image, &mut stats)?;
        }

        log::info!(
            "Resized {} of {} images ({} skipped, {} failed) into {}",
            stats.resized,
            stats.scanned,
            stats.skipped,
            stats.failed,
            output_dir.display()
        );

        Ok(stats)
    }

    fn process_file(&mut self, image: &Path, stats: &mut BatchStats) -> Result<()> {
        let size = self
            .calculator
            .target_size(image, self.config.direction, &mut self.out)?;
        let output_path = generate_output_path(image, size, &self.config.output_folder);

        if !size.is_known() {
            writeln!(
                self.out,
                "Skipping {}: could not determine target size",
                output_path.display()
            )?;
            stats.skipped += 1;
            return Ok(());
        }

        writeln!(self.out, "{}", output_path.display())?;
        self.out.flush()?;

        match self.calculator.tool().resize(image, size, &output_path) {
            Ok(()) => stats.resized += 1,
            Err(e) => {
                writeln!(self.out, "Failed to resize {}: {}", image.display(), e)?;
                stats.failed += 1;
            }
        }

        Ok(())
    }
}
