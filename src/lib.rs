pub mod cli;
mod core;
mod processors;
mod utils;

pub use crate::core::processor::USAGE;
pub use crate::core::{
    validate_config, BatchStats, Dimension, PotConfig, PotError, PowerOfTwoProcessor, Result,
    ScaleDirection, TargetSize,
};
pub use processors::{
    ensure_output_dir, parse_dimension, scan_directory, DimensionCalculator, ImageTool, Magick,
};
pub use utils::{fx_expression, generate_output_path, has_extension, power_of_two};

pub mod prelude {
    pub use crate::processors::prelude::*;
    pub use crate::{PotConfig, PowerOfTwoProcessor, ScaleDirection, TargetSize};
}
