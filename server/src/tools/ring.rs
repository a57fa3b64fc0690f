use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::RingArgs;
use crate::config::Config;
use crate::models::SimulationRequest;
use crate::ring::{JitterSource, UniformJitter};
use crate::simulation::SimulationService;

pub fn exec(config: &Config, args: RingArgs) -> anyhow::Result<()> {
    println!("{}", render(config, &args)?);
    Ok(())
}

fn render(config: &Config, args: &RingArgs) -> anyhow::Result<String> {
    let point_count = args.points.unwrap_or(config.point_count);
    if point_count == 0 {
        anyhow::bail!("--points must be at least 1");
    }
    let service = SimulationService::new(point_count, false);

    let mut jitter: Box<dyn JitterSource> = match args.seed {
        Some(seed) => Box::new(UniformJitter::new(StdRng::seed_from_u64(seed))),
        None => Box::new(UniformJitter::new(rand::rng())),
    };

    let request = SimulationRequest {
        lat: args.lat,
        lon: args.lng,
        hours: args.hours,
    };
    let result = service
        .simulate(&request, jitter.as_mut())
        .with_context(|| format!("Cannot simulate ({}, {})", args.lat, args.lng))?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(json)
}
