use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};
use simple_logger::SimpleLogger;

pub use utils::Pos;
mod utils;

pub use world::{CachedGrid, Cell, Grid, World};
pub mod world;

pub use sim::Sim;
mod sim;

mod seed;

pub use view::View;
mod view;

/// Conway's game of life on a bounded grid, drawn in the terminal.
///
/// Keys: q quits, space pauses, n steps while paused, + and - change speed.
#[derive(Debug, Parser)]
#[command(name = "gridlife", version)]
struct Args {
    /// Grid width.
    #[arg(short = 'x', long, default_value_t = 42, value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Grid height.
    #[arg(short = 'y', long, default_value_t = 42, value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,

    /// Initial live cells as a JSON array: '[[x1,y1],[x2,y2],...]'.
    #[arg(short, long, default_value = seed::DEFAULT_CELLS)]
    cells: String,

    /// Start from a random state instead of --cells.
    #[arg(short, long)]
    random: bool,

    /// Seed of the random state, for reproducible runs.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Milliseconds between generations.
    #[arg(short, long, default_value_t = 200)]
    interval: u64,

    /// Stop once this generation has been drawn.
    #[arg(short, long)]
    generations: Option<u64>,

    /// Recount every neighborhood on every generation.
    #[arg(long)]
    no_cache: bool,

    /// Log debug messages to stderr.
    #[arg(short, long)]
    verbose: bool,
}

pub fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).env().init()?;

    if args.no_cache {
        run::<Grid>(&args)
    } else {
        run::<CachedGrid>(&args)
    }
}

fn run<W>(args: &Args) -> Result<()>
where
    W: World,
{
    info!(
        "starting a {}x{} grid, cache {}",
        args.width,
        args.height,
        if args.no_cache { "off" } else { "on" }
    );
    let mut world = W::with_size(args.width as usize, args.height as usize);

    if args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        world.randomize(&mut rng);
    } else {
        let coords = seed::parse_cells(&args.cells).context("invalid --cells")?;
        let planted = seed::plant(&mut world, &coords);
        info!("planted {planted} of {} cells", coords.len());
    }

    let view = View::new(Duration::from_millis(args.interval), args.generations);
    view.run(Sim::new(world))
        .context("could not drive the terminal")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["gridlife", "-x", "10", "-y", "5", "--no-cache"]).unwrap();
        assert_eq!((args.width, args.height), (10, 5));
        assert!(args.no_cache);
        assert_eq!(args.cells, seed::DEFAULT_CELLS);

        assert!(Args::try_parse_from(["gridlife", "--width", "0"]).is_err());
        assert!(Args::try_parse_from(["gridlife", "--seed", "3"]).is_err());
        assert!(Args::try_parse_from(["gridlife", "-r", "--seed", "3"]).is_ok());
    }
}
