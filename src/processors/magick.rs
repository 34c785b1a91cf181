// pot/src/processors/magick.rs
use super::ImageTool;
use crate::core::{Dimension, PotError, Result, ScaleDirection, TargetSize};
use crate::utils::fx_expression;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// ImageMagick `convert`, spawned once per query or resize.
#[derive(Debug, Clone)]
pub struct Magick {
    convert_path: PathBuf,
}

impl Magick {
    pub fn new(convert_path: impl Into<PathBuf>) -> Self {
        Self {
            convert_path: convert_path.into(),
        }
    }

    pub fn convert_path(&self) -> &Path {
        &self.convert_path
    }

    fn run(&self, command: &mut Command) -> Result<Output> {
        log::debug!("Running {:?}", command);

        let output = command.output().map_err(|source| PotError::ToolUnavailable {
            path: self.convert_path.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(PotError::ToolFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}

impl ImageTool for Magick {
    fn query_dimension(
        &self,
        path: &Path,
        dimension: Dimension,
        direction: ScaleDirection,
    ) -> Result<u32> {
        let expression = fx_expression(dimension, direction);
        let output = self.run(
            Command::new(&self.convert_path)
                .arg(path)
                .arg("-format")
                .arg(&expression)
                .arg("info:"),
        )?;

        parse_dimension(&output.stdout)
    }

    fn resize(&self, path: &Path, size: TargetSize, output_path: &Path) -> Result<()> {
        self.run(
            Command::new(&self.convert_path)
                .arg(path)
                .arg("-resize")
                .arg(size.geometry())
                .arg(output_path),
        )?;

        Ok(())
    }
}

/// Parses the number printed by an `info:` query. Surrounding whitespace and
/// double quotes are ignored.
pub fn parse_dimension(stdout: &[u8]) -> Result<u32> {
    let text = String::from_utf8_lossy(stdout);
    let trimmed = text.trim().trim_matches('"').trim();

    trimmed
        .parse::<u32>()
        .map_err(|_| PotError::UnparsableOutput(text.into_owned()))
}
