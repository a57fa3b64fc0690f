use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(about = "Fireline: synthetic wildfire perimeters for map clients.")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the demo page and the /simulate endpoint.
    Http {
        #[arg(env = "FIRELINE_SERVER_ADDRESS", default_value = "0.0.0.0:5000")]
        address: std::net::SocketAddr,
    },
    /// Print one ring as a /simulate response body.
    Ring(RingArgs),
}

#[derive(Debug, Parser)]
pub struct RingArgs {
    /// Latitude of the ignition point
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    /// Longitude of the ignition point
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,
    /// Elapsed hours since ignition
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    pub hours: i64,
    /// Sample density, overriding FIRELINE_POINT_COUNT
    #[arg(long)]
    pub points: Option<usize>,
    /// Seed for a reproducible ring
    #[arg(long)]
    pub seed: Option<u64>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
