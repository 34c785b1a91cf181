// pot/src/core/mod.rs
pub mod processor;

use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

pub use processor::{BatchStats, PowerOfTwoProcessor};

/// Axis of an image the external tool is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    /// Variable name ImageMagick's fx language uses for this axis.
    pub fn fx_symbol(self) -> &'static str {
        match self {
            Dimension::Width => "w",
            Dimension::Height => "h",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleDirection {
    Up,
    #[default]
    Down,
}

impl ScaleDirection {
    pub fn fx_function(self) -> &'static str {
        match self {
            ScaleDirection::Up => "ceil",
            ScaleDirection::Down => "floor",
        }
    }
}

/// Power-of-two size an image is resized to. A zero on either axis means
/// the dimension could not be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_known(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Exact `WxH!` geometry, ignoring aspect ratio.
    pub fn geometry(&self) -> String {
        format!("{}!", self)
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone)]
pub struct PotConfig {
    pub convert_path: PathBuf,
    pub extension: String,
    pub output_folder: String,
    pub direction: ScaleDirection,
}

impl Default for PotConfig {
    fn default() -> Self {
        Self {
            convert_path: PathBuf::from("/usr/local/bin/convert"),
            extension: "png".to_string(),
            output_folder: "pot".to_string(),
            direction: ScaleDirection::Down,
        }
    }
}

impl PotConfig {
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(PotError::InvalidParameter(
                "Extension must not be empty".to_string(),
            ));
        }

        if self.extension.starts_with('.') {
            return Err(PotError::InvalidParameter(format!(
                "Extension must be given without a leading dot: {}",
                self.extension
            )));
        }

        if self.output_folder.is_empty() {
            return Err(PotError::InvalidParameter(
                "Output folder must not be empty".to_string(),
            ));
        }

        if self.output_folder.contains(['/', '\\']) || self.output_folder.contains("..") {
            return Err(PotError::InvalidParameter(format!(
                "Output folder must be a plain directory name: {}",
                self.output_folder
            )));
        }

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum PotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Image tool unavailable at {}: {source}", path.display())]
    ToolUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image tool exited with {status}: {stderr}")]
    ToolFailed { status: ExitStatus, stderr: String },

    #[error("Output could not be converted to number: {0:?}")]
    UnparsableOutput(String),
}

pub type Result<T> = std::result::Result<T, PotError>;

pub fn validate_config(config: &PotConfig) -> Result<()> {
    config.validate()
}
