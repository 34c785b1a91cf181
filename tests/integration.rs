#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use pot::{
        power_of_two, Dimension, ImageTool, Magick, PotConfig, PotError, PowerOfTwoProcessor,
        ScaleDirection, TargetSize, USAGE,
    };
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Query(String, Dimension, ScaleDirection),
        Resize(String, TargetSize, PathBuf),
    }

    /// Stands in for ImageMagick: knows the true size of each file by name and
    /// rounds the way the fx expression would.
    #[derive(Default)]
    struct FakeMagick {
        sizes: HashMap<String, (u32, u32)>,
        failing_resizes: HashSet<String>,
        calls: RefCell<Vec<Call>>,
    }

    impl FakeMagick {
        fn with_image(mut self, name: &str, width: u32, height: u32) -> Self {
            self.sizes.insert(name.to_string(), (width, height));
            self
        }

        fn failing_resize(mut self, name: &str) -> Self {
            self.failing_resizes.insert(name.to_string());
            self
        }

        fn resizes(&self) -> Vec<Call> {
            self.calls
                .borrow()
                .iter()
                .filter(|c| matches!(c, Call::Resize(..)))
                .cloned()
                .collect()
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    fn name_of(path: &Path) -> String {
        path.file_name().unwrap().to_string_lossy().into_owned()
    }

    impl ImageTool for FakeMagick {
        fn query_dimension(
            &self,
            path: &Path,
            dimension: Dimension,
            direction: ScaleDirection,
        ) -> pot::Result<u32> {
            let name = name_of(path);
            self.calls
                .borrow_mut()
                .push(Call::Query(name.clone(), dimension, direction));

            let (width, height) = self
                .sizes
                .get(&name)
                .copied()
                .ok_or_else(|| PotError::UnparsableOutput("garbage".to_string()))?;
            let actual = match dimension {
                Dimension::Width => width,
                Dimension::Height => height,
            };
            Ok(power_of_two(actual, direction))
        }

        fn resize(&self, path: &Path, size: TargetSize, output_path: &Path) -> pot::Result<()> {
            let name = name_of(path);
            self.calls
                .borrow_mut()
                .push(Call::Resize(name.clone(), size, output_path.to_path_buf()));

            if self.failing_resizes.contains(&name) {
                return Err(PotError::UnparsableOutput("resize refused".to_string()));
            }
            std::fs::write(output_path, b"resized")?;
            Ok(())
        }
    }

    fn output_text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn probe_prints_rounded_up_size() {
        let tool = FakeMagick::default().with_image("ship.png", 300, 500);
        let mut processor = PowerOfTwoProcessor::new(PotConfig::default(), &tool, Vec::new());

        let size = processor.run_probe(Some(Path::new("ship.png"))).unwrap();

        assert_eq!(size, Some(TargetSize::new(512, 512)));
        assert_eq!(output_text(processor.into_output()), "512\n512\n");
        assert!(tool.resizes().is_empty());
        assert_eq!(
            tool.calls.borrow()[0],
            Call::Query("ship.png".to_string(), Dimension::Width, ScaleDirection::Up)
        );
    }

    #[test]
    fn probe_without_argument_prints_usage() {
        let tool = FakeMagick::default();
        let mut processor = PowerOfTwoProcessor::new(PotConfig::default(), &tool, Vec::new());

        let size = processor.run_probe(None).unwrap();

        assert!(size.is_none());
        assert_eq!(output_text(processor.into_output()), format!("{}\n", USAGE));
        assert_eq!(tool.call_count(), 0);
    }

    #[test]
    fn batch_on_empty_directory_only_creates_output() {
        let temp = TempDir::new().unwrap();
        let tool = FakeMagick::default();
        let mut processor = PowerOfTwoProcessor::new(PotConfig::default(), &tool, Vec::new());

        let stats = processor.run_batch(temp.path()).unwrap();

        assert_eq!(stats.scanned, 0);
        assert!(temp.child("pot").path().is_dir());
        assert_eq!(tool.call_count(), 0);
    }

    #[test]
    fn batch_rounds_down_by_default() {
        let temp = TempDir::new().unwrap();
        temp.child("ship.png").touch().unwrap();
        temp.child("readme.txt").touch().unwrap();
        let tool = FakeMagick::default().with_image("ship.png", 300, 500);
        let mut processor = PowerOfTwoProcessor::new(PotConfig::default(), &tool, Vec::new());

        let stats = processor.run_batch(temp.path()).unwrap();

        let expected = temp.path().join("pot").join("ship-256x256.png");
        assert_eq!(stats.resized, 1);
        assert_eq!(
            tool.resizes(),
            vec![Call::Resize(
                "ship.png".to_string(),
                TargetSize::new(256, 256),
                expected.clone()
            )]
        );
        assert!(expected.exists());
        assert_eq!(
            output_text(processor.into_output()),
            format!("{}\n", expected.display())
        );
    }

    #[test]
    fn batch_rounds_up_when_asked() {
        let temp = TempDir::new().unwrap();
        temp.child("ship.png").touch().unwrap();
        let tool = FakeMagick::default().with_image("ship.png", 300, 500);
        let config = PotConfig {
            direction: ScaleDirection::Up,
            ..Default::default()
        };
        let mut processor = PowerOfTwoProcessor::new(config, &tool, Vec::new());

        processor.run_batch(temp.path()).unwrap();

        assert!(temp.child("pot/ship-512x512.png").path().exists());
    }

    #[test]
    fn unparsable_output_is_skipped_as_zero() {
        let temp = TempDir::new().unwrap();
        temp.child("mystery.png").touch().unwrap();
        let tool = FakeMagick::default();
        let mut processor = PowerOfTwoProcessor::new(PotConfig::default(), &tool, Vec::new());

        let stats = processor.run_batch(temp.path()).unwrap();

        assert_eq!(stats.skipped, 1);
        assert!(tool.resizes().is_empty());
        let text = output_text(processor.into_output());
        assert!(text.contains("Output could not be converted to number"));
        assert!(text.contains("mystery-0x0.png"));
    }

    #[test]
    fn failed_resize_does_not_stop_batch() {
        let temp = TempDir::new().unwrap();
        temp.child("a.png").touch().unwrap();
        temp.child("b.png").touch().unwrap();
        let tool = FakeMagick::default()
            .with_image("a.png", 100, 100)
            .with_image("b.png", 1024, 700)
            .failing_resize("a.png");
        let mut processor = PowerOfTwoProcessor::new(PotConfig::default(), &tool, Vec::new());

        let stats = processor.run_batch(temp.path()).unwrap();

        assert_eq!(stats.failed, 1);
        assert_eq!(stats.resized, 1);
        assert_eq!(tool.resizes().len(), 2);
        assert!(temp.child("pot/b-1024x512.png").path().exists());
        assert!(output_text(processor.into_output()).contains("Failed to resize"));
    }

    #[test]
    fn blocked_output_directory_is_reported() {
        let temp = TempDir::new().unwrap();
        temp.child("pot").write_str("not a directory").unwrap();
        let tool = FakeMagick::default();
        let mut processor = PowerOfTwoProcessor::new(PotConfig::default(), &tool, Vec::new());

        let stats = processor.run_batch(temp.path()).unwrap();

        assert_eq!(stats.scanned, 0);
        assert!(output_text(processor.into_output())
            .starts_with("Could not create output directory"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let temp = TempDir::new().unwrap();
        let config = PotConfig {
            extension: String::new(),
            ..Default::default()
        };
        let mut processor = PowerOfTwoProcessor::new(config, FakeMagick::default(), Vec::new());

        assert!(matches!(
            processor.run_batch(temp.path()),
            Err(PotError::InvalidParameter(_))
        ));
    }

    #[test]
    fn missing_convert_degrades_to_zero() {
        let tool = Magick::new("/nonexistent/pot-test/convert");
        let mut processor = PowerOfTwoProcessor::new(PotConfig::default(), tool, Vec::new());

        let size = processor.probe(Path::new("ship.png")).unwrap();

        assert_eq!(size, TargetSize::new(0, 0));
        let text = output_text(processor.into_output());
        assert!(text.contains("Image tool unavailable"));
        assert!(text.ends_with("0\n0\n"));
    }

    #[test]
    #[ignore] // Requires ImageMagick
    fn resizes_with_real_convert() {
        let temp = TempDir::new().unwrap();
        let source = temp.child("ship.png");
        image::RgbImage::new(300, 500).save(source.path()).unwrap();

        let config = PotConfig {
            convert_path: PathBuf::from("convert"),
            ..Default::default()
        };
        let tool = Magick::new(config.convert_path.clone());
        let mut processor = PowerOfTwoProcessor::new(config, tool, Vec::new());

        let stats = processor.run_batch(temp.path()).unwrap();

        assert_eq!(stats.resized, 1);
        let output = temp.child("pot/ship-256x256.png");
        assert_eq!(image::image_dimensions(output.path()).unwrap(), (256, 256));
    }
}
