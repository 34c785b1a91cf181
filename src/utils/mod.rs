// pot/src/utils/mod.rs
use crate::core::{Dimension, ScaleDirection, TargetSize};
use std::path::{Path, PathBuf};

/// Builds `<folder>/<output_folder>/<stem>-<w>x<h>.<ext>` for a source image.
pub fn generate_output_path(input_path: &Path, size: TargetSize, output_folder: &str) -> PathBuf {
    let folder = input_path.parent().unwrap_or_else(|| Path::new(""));
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| "image".into());

    let file_name = match input_path.extension() {
        Some(ext) => format!("{}-{}.{}", stem, size, ext.to_string_lossy()),
        None => format!("{}-{}", stem, size),
    };

    folder.join(output_folder).join(file_name)
}

/// `2^ceil(log2(n))` or `2^floor(log2(n))`, computed on integers.
///
/// Returns 0 for 0 and for a round-up that does not fit in a `u32`.
pub fn power_of_two(value: u32, direction: ScaleDirection) -> u32 {
    if value == 0 {
        return 0;
    }

    match direction {
        ScaleDirection::Up => value.checked_next_power_of_two().unwrap_or(0),
        ScaleDirection::Down => 1 << (u32::BITS - 1 - value.leading_zeros()),
    }
}

/// ImageMagick `-format` expression evaluating the power-of-two size of one axis.
pub fn fx_expression(dimension: Dimension, direction: ScaleDirection) -> String {
    format!(
        "%[fx:2^({}(log({})/log(2)))]",
        direction.fx_function(),
        dimension.fx_symbol()
    )
}

pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}
