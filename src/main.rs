use anyhow::Context;
use clap::Parser;
use pot::cli::{init_logger, ProbeCli};
use pot::{Magick, PotConfig, PowerOfTwoProcessor};

fn main() -> anyhow::Result<()> {
    let cli = ProbeCli::parse();
    init_logger(cli.verbose);

    let config = PotConfig::default();
    let tool = Magick::new(config.convert_path.clone());
    let mut processor = PowerOfTwoProcessor::new(config, tool, std::io::stdout().lock());

    processor
        .run_probe(cli.image.as_deref())
        .context("Failed to probe image")?;

    Ok(())
}
