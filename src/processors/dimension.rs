// pot/src/processors/dimension.rs
use super::ImageTool;
use crate::core::{Dimension, ScaleDirection, TargetSize};
use std::io::{self, Write};
use std::path::Path;

/// Asks an [`ImageTool`] for power-of-two sizes, degrading to 0 on failure.
pub struct DimensionCalculator<T> {
    tool: T,
}

impl<T: ImageTool> DimensionCalculator<T> {
    pub fn new(tool: T) -> Self {
        Self { tool }
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// Returns the rounded size of one axis, or 0 after writing a diagnostic
    /// to `out` when the tool cannot answer. Only errors writing to `out`
    /// are returned.
    pub fn calculate<W: Write + ?Sized>(
        &self,
        path: &Path,
        dimension: Dimension,
        direction: ScaleDirection,
        out: &mut W,
    ) -> io::Result<u32> {
        match self.tool.query_dimension(path, dimension, direction) {
            Ok(value) => {
                log::debug!(
                    "{} {:?} rounded {:?}: {}",
                    path.display(),
                    dimension,
                    direction,
                    value
                );
                Ok(value)
            }
            Err(e) => {
                writeln!(out, "{}: {}", path.display(), e)?;
                Ok(0)
            }
        }
    }

    pub fn target_size<W: Write + ?Sized>(
        &self,
        path: &Path,
        direction: ScaleDirection,
        out: &mut W,
    ) -> io::Result<TargetSize> {
        let width = self.calculate(path, Dimension::Width, direction, out)?;
        let height = self.calculate(path, Dimension::Height, direction, out)?;
        Ok(TargetSize::new(width, height))
    }
}
