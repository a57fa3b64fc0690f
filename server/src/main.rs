use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use rasters::Rasters;
use simulation::SimulationService;

mod cli;
mod config;
mod error;
mod geo;
mod models;
mod rasters;
mod ring;
mod server;
mod simulation;
mod tools;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Cli::parse();
    let config = Config::from_env()?;

    match args.cmd {
        Command::Http { address } => {
            let rasters = Rasters::probe(&config.data_dir);
            match rasters.as_ref().map(Rasters::sizes) {
                Some(Ok((landcover, elevation))) => log::info!(
                    "Rasters open from {}: landcover {} bytes, elevation {} bytes",
                    config.data_dir.display(),
                    landcover,
                    elevation
                ),
                Some(Err(e)) => log::warn!("Rasters open but unreadable: {}", e),
                None => log::info!("No rasters in {}, synthetic mode", config.data_dir.display()),
            }

            let service = SimulationService::new(config.point_count, rasters.is_some());
            server::run(address, service).await;
        }
        Command::Ring(ring_args) => tools::ring::exec(&config, ring_args)?,
    }

    Ok(())
}
