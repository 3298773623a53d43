//! Generate one cave room and print it
//!
//! Main entry point for the room dump tool.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cb_core::level::{Connections, LevelId, Room, RoomId};
use cb_core::{GeneratorConfig, RoomRng};

/// Cave room generator
#[derive(Parser, Debug)]
#[command(name = "caveroom")]
#[command(author, version, about = "Generate a cave room and dump it as text", long_about = None)]
struct Args {
    /// Interior width in tiles
    #[arg(short = 'W', long, default_value_t = 20)]
    width: usize,

    /// Interior height in tiles
    #[arg(short = 'H', long, default_value_t = 15)]
    height: usize,

    /// Cave density, 0 (open) to 100 (dense)
    #[arg(short = 'd', long, default_value_t = 45)]
    density: u8,

    /// Neighbour room ids for north, east, south and west; negative means no door
    #[arg(long, num_args = 4, value_names = ["N", "E", "S", "W"], allow_negative_numbers = true,
          default_values_t = [-1, -1, -1, -1])]
    doors: Vec<i32>,

    /// Id of the generated room
    #[arg(long, default_value_t = 0)]
    room: u32,

    /// RNG seed; random when omitted
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// JSON generator config file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    cb_cli::init_logging(args.verbose).context("installing logger")?;

    let config = match &args.config {
        Some(path) => GeneratorConfig::load_from_file(path)
            .with_context(|| format!("loading generator config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    let mut raw = [-1; 4];
    for (slot, id) in raw.iter_mut().zip(&args.doors) {
        *slot = *id;
    }

    let mut rng = match args.seed {
        Some(seed) => RoomRng::new(seed),
        None => RoomRng::from_entropy(),
    };
    log::info!("seed {}", rng.seed());

    let mut room = Room::new(
        RoomId(args.room),
        LevelId(0),
        args.width,
        args.height,
        Connections::from_raw(raw),
    )
    .context("creating room")?;
    room.generate_room(args.density, &config, &mut rng)
        .context("generating room")?;

    print!("{}", cb_cli::report(&mut room)?);
    Ok(())
}
