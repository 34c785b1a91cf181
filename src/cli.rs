// pot/src/cli.rs
use crate::core::ScaleDirection;
use clap::Parser;
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;

/// Print the power-of-two width and height an image rounds up to
#[derive(Parser, Debug)]
#[command(name = "pot", author, version, about, long_about = None)]
pub struct ProbeCli {
    /// Path to the image to measure
    pub image: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resize every image in the current directory to power-of-two dimensions
#[derive(Parser, Debug)]
#[command(name = "pot-batch", author, version, about, long_about = None)]
pub struct BatchCli {
    /// Round up to the next power of two instead of down (also accepted as `-up`)
    #[arg(long)]
    pub up: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl BatchCli {
    /// Parses `args` after rewriting the single-dash `-up` flag.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    pub fn direction(&self) -> ScaleDirection {
        if self.up {
            ScaleDirection::Up
        } else {
            ScaleDirection::Down
        }
    }
}

pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| if arg == "-up" { OsString::from("--up") } else { arg })
        .collect()
}

pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();
}
