//! cb-cli: command-line front end for cb-core
//!
//! Builds a single room from numeric parameters, generates it and prints the
//! composed layers as text together with the spawn and door entry points.

use cb_core::level::Room;
use log::{LevelFilter, SetLoggerError};
use simplelog::{ConfigBuilder, WriteLogger};

/// Install a stderr logger; each `-v` raises the level one step from `Info`
pub fn init_logging(verbosity: u8) -> Result<(), SetLoggerError> {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .set_time_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, std::io::stderr())
}

/// Text report of a generated room
pub fn report(room: &mut Room) -> Result<String, cb_core::RoomError> {
    let mut lines = vec![
        format!(
            "room {} ({}x{} interior, {}x{} grid)",
            room.id(),
            room.width(),
            room.height(),
            room.grid_width(),
            room.grid_height()
        ),
        room.to_ascii(),
    ];
    if let Some(spawn) = room.player_spawn() {
        lines.push(format!("spawn: ({}, {})", spawn.x, spawn.y));
    }
    let connections = *room.connections();
    for (side, neighbor) in connections.iter() {
        let pos = room.compute_entry(Some(neighbor))?;
        lines.push(format!(
            "entry from {} ({}): pixel ({}, {})",
            neighbor, side, pos.x, pos.y
        ));
    }
    lines.push(String::new());
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_core::level::{Connections, LevelId, RoomId};
    use cb_core::{GeneratorConfig, RoomRng};

    #[test]
    fn test_report_lists_spawn_and_entries() {
        let mut room = Room::new(
            RoomId(3),
            LevelId(0),
            12,
            8,
            Connections::from_raw([4, -1, -1, 6]),
        )
        .unwrap();
        room.generate_room(40, &GeneratorConfig::default(), &mut RoomRng::new(1))
            .unwrap();
        let text = report(&mut room).unwrap();
        assert!(text.starts_with("room #3 (12x8 interior, 16x12 grid)"));
        assert!(text.contains("spawn: ("));
        assert!(text.contains("entry from #4 (North)"));
        assert!(text.contains("entry from #6 (West)"));
        assert!(!text.contains("East"));
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1 + 12 + 1 + 2);
    }

    #[test]
    fn test_logger_installs_once() {
        assert!(init_logging(1).is_ok());
        assert!(init_logging(0).is_err());
    }

    #[test]
    fn test_report_requires_generation_for_entries() {
        let mut room = Room::new(
            RoomId(3),
            LevelId(0),
            5,
            5,
            Connections::from_raw([4, -1, -1, -1]),
        )
        .unwrap();
        assert!(report(&mut room).is_err());
    }
}
