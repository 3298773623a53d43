use cb_core::level::{Connections, LevelId, Room, RoomId, Side, door};
use cb_core::map::{Coord, PixelPos};
use cb_core::tiles::{Tile, TileLayer};
use cb_core::{GeneratorConfig, MAX_DENSITY, RoomRng, TILE_HEIGHT, TILE_WIDTH};
use strum::IntoEnumIterator;

fn generate(width: usize, height: usize, conns: [i32; 4], density: u8, seed: u64) -> Room {
    let mut room = Room::new(
        RoomId(0),
        LevelId(1),
        width,
        height,
        Connections::from_raw(conns),
    )
    .unwrap();
    room.generate_room(density, &GeneratorConfig::default(), &mut RoomRng::new(seed))
        .unwrap();
    room
}

fn doors_on_side(room: &Room, side: Side) -> usize {
    room.layer(TileLayer::Foreground)
        .tiles()
        .filter(|(c, tile)| {
            tile.is_door() && door::is_within_door_window(side, *c, room.width(), room.height())
        })
        .count()
}

#[test]
fn test_single_north_door_room() {
    let mut room = generate(20, 15, [5, -1, -1, -1], 45, 2024);

    assert!(room.is_generated());
    assert!(doors_on_side(&room, Side::North) > 0);
    assert_eq!(doors_on_side(&room, Side::East), 0);
    assert_eq!(doors_on_side(&room, Side::South), 0);
    assert_eq!(doors_on_side(&room, Side::West), 0);
    assert_eq!(
        room.layer(TileLayer::Foreground).count(|t| t.is_door()),
        doors_on_side(&room, Side::North)
    );

    let spawn = room.player_spawn().unwrap();
    assert!((2..22).contains(&spawn.x));
    assert!((2..17).contains(&spawn.y));

    // Just south of the north door, on the door's centre column
    let entry = room.compute_entry(Some(RoomId(5))).unwrap();
    assert_eq!(entry, PixelPos::new(12 * TILE_WIDTH, 2 * TILE_HEIGHT));
    let cell = Coord::new(entry.x / TILE_WIDTH, entry.y / TILE_HEIGHT);
    assert_eq!(room.tile_at(TileLayer::Foreground, cell.x, cell.y), Ok(None));
    assert!(room.door_link_at(cell.x, cell.y - 1).unwrap().is_some());
}

#[test]
fn test_isolated_room_has_solid_perimeter() {
    let room = generate(20, 15, [-1, -1, -1, -1], 45, 7);
    let fg = room.layer(TileLayer::Foreground);
    assert_eq!(fg.count(|t| t.is_door()), 0);
    for y in 0..room.grid_height() as i32 {
        for x in 0..room.grid_width() as i32 {
            if door::is_border(Coord::new(x, y), 20, 15) {
                assert_eq!(fg.tile(x, y), Ok(Some(Tile::PERIMETER)), "({}, {})", x, y);
            }
        }
    }
    assert_eq!(room.layer(TileLayer::Spawner).count(|_| true), 1);
}

#[test]
fn test_density_extremes() {
    for seed in 0..10 {
        let sparse = generate(30, 20, [-1; 4], 0, seed);
        let walls = sparse.layer(TileLayer::Foreground).count(|_| true);
        let border = 34 * 24 - 30 * 20;
        let interior_walls = walls - border;
        assert!(interior_walls * 2 < 30 * 20, "seed {}: {} walls", seed, interior_walls);

        let dense = generate(30, 20, [-1; 4], MAX_DENSITY, seed);
        assert!(dense.player_spawn().is_some());
        let spawn = dense.player_spawn().unwrap();
        assert_eq!(dense.tile_at(TileLayer::Foreground, spawn.x, spawn.y), Ok(None));
    }
}

#[test]
fn test_unknown_neighbor_matches_fresh_entry() {
    let mut room = generate(16, 12, [3, 4, -1, -1], 50, 99);
    let fresh = room.compute_entry(None).unwrap();
    assert_eq!(room.compute_entry(Some(RoomId(77))).unwrap(), fresh);
    assert_eq!(fresh, room.player_spawn().unwrap().to_pixels());
}

#[test]
fn test_tile_at_is_pure() {
    let room = generate(12, 9, [1, 2, 3, 4], 50, 5);
    for layer in TileLayer::iter() {
        for (x, y) in [(0, 0), (5, 5), (15, 12), (16, 0), (-1, 3)] {
            assert_eq!(room.tile_at(layer, x, y), room.tile_at(layer, x, y));
        }
    }
    assert!(room.tile_at(TileLayer::Misc, 16, 0).is_err());
}

#[test]
fn test_every_side_reaches_the_spawn() {
    use std::collections::{HashSet, VecDeque};

    let room = generate(24, 18, [1, 2, 3, 4], 60, 31);
    let fg = room.layer(TileLayer::Foreground);
    let spawn = room.player_spawn().unwrap();

    let mut seen = HashSet::from([spawn]);
    let mut queue = VecDeque::from([spawn]);
    while let Some(c) = queue.pop_front() {
        for n in c.neighbors4() {
            if !door::is_border(n, 24, 18) && fg.tile(n.x, n.y) == Ok(None) && seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    for side in Side::iter() {
        let entry = door::to_grid(door::entry_cell(side, 24, 18));
        assert!(seen.contains(&entry), "{} door unreachable", side);
    }
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let a = generate(25, 18, [1, -1, 2, -1], 55, 123);
    let b = generate(25, 18, [1, -1, 2, -1], 55, 123);
    assert_eq!(a.to_ascii(), b.to_ascii());
    assert_eq!(a.player_spawn(), b.player_spawn());
}
