// pot/src/processors/mod.rs
mod dimension;
mod magick;
mod output_dir;
mod scanner;
mod tool;

pub use dimension::DimensionCalculator;
pub use magick::{parse_dimension, Magick};
pub use output_dir::ensure_output_dir;
pub use scanner::scan_directory;
pub use tool::ImageTool;

pub mod prelude {
    pub use super::{DimensionCalculator, ImageTool, Magick};
}
