mod config;
mod data;
mod error;
mod habing;
mod integrate;
mod physics;
mod pipeline;

use anyhow::{Context, Result};
use structopt::StructOpt;

use config::{Config, Opt};

fn main() -> Result<()> {
    let opt = Opt::from_args();

    let default_filter = if opt.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = Config::from_opt(&opt).context("loading configuration")?;
    log::debug!("{config:?}");

    let report = pipeline::run(&config)?;

    println!("Interstellar radiation field in Habing units (G/G0):");
    println!("{report}");

    Ok(())
}
