// pot/src/processors/tool.rs
use crate::core::{Dimension, Result, ScaleDirection, TargetSize};
use std::path::Path;

/// The two things `pot` needs from an image-processing backend.
pub trait ImageTool {
    /// Power-of-two size of one axis of the image at `path`.
    fn query_dimension(
        &self,
        path: &Path,
        dimension: Dimension,
        direction: ScaleDirection,
    ) -> Result<u32>;

    /// Writes a copy of `path` forced to exactly `size` into `output_path`.
    fn resize(&self, path: &Path, size: TargetSize, output_path: &Path) -> Result<()>;
}

impl<T: ImageTool + ?Sized> ImageTool for &T {
    fn query_dimension(
        &self,
        path: &Path,
        dimension: Dimension,
        direction: ScaleDirection,
    ) -> Result<u32> {
        (**self).query_dimension(path, dimension, direction)
    }

    fn resize(&self, path: &Path, size: TargetSize, output_path: &Path) -> Result<()> {
        (**self).resize(path, size, output_path)
    }
}
