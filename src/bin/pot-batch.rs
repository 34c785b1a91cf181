use anyhow::Context;
use pot::cli::{init_logger, BatchCli};
use pot::{Magick, PotConfig, PowerOfTwoProcessor};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = BatchCli::parse_args(std::env::args_os());
    init_logger(cli.verbose);

    let config = PotConfig {
        direction: cli.direction(),
        ..Default::default()
    };
    let tool = Magick::new(config.convert_path.clone());
    let mut processor = PowerOfTwoProcessor::new(config, tool, std::io::stdout().lock());

    let stats = processor
        .run_batch(Path::new("."))
        .context("Batch resize failed")?;
    log::debug!("{:?}", stats);

    Ok(())
}
