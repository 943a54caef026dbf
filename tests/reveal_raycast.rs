use std::collections::HashSet;

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use mazebound::{
    cell::Cell,
    grid::{Grid, Size},
    groups::GroupTracker,
    palette,
    raycast::{Frame, InputState, Raycaster, Slice},
    reveal::{self, RevealPattern, Revealer},
};

// Fixed seed for deterministic tests
const TEST_SEED: u64 = 42;

fn open_grid(width: usize, height: usize) -> Grid<Cell> {
    Grid::new(width, height, &mut |_, _| Cell::path())
}

/// Walled border, open interior.
fn walled_grid(width: usize, height: usize) -> Grid<Cell> {
    Grid::new(width, height, &mut |x, y| {
        if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
            Cell::wall()
        } else {
            Cell::path()
        }
    })
}

fn assert_permutation(order: &[(usize, usize)], size: Size) {
    let unique: HashSet<_> = order.iter().collect();

    assert_eq!(order.len(), size.area());
    assert_eq!(unique.len(), size.area());
}

#[test]
fn test_patterns_are_permutations() {
    let size = Size::new(7, 5);

    assert_permutation(&reveal::center_out(size), size);
    assert_permutation(&reveal::edges_in(size), size);
    assert_permutation(&reveal::mixed(size), size);
    assert_permutation(&reveal::corner_to_corner(size), size);
}

#[test]
fn test_edges_in_reverses_center_out() {
    let size = Size::new(9, 7);

    let mut reversed = reveal::center_out(size);
    reversed.reverse();

    assert_eq!(reversed, reveal::edges_in(size));
}

#[test]
fn test_mixed_zips_center_out() {
    let size = Size::new(5, 5);
    let base = reveal::center_out(size);
    let mixed = reveal::mixed(size);

    assert_eq!(mixed[0], base[0]);
    assert_eq!(mixed[1], base[base.len() - 1]);
    assert_eq!(mixed[2], base[1]);
    assert_eq!(mixed[3], base[base.len() - 2]);
    assert_permutation(&mixed, size);
}

#[test]
fn test_corner_to_corner_ascends_from_origin() {
    let size = Size::new(6, 4);
    let order = reveal::corner_to_corner(size);

    assert_eq!(order[0], (0, 0));

    let mut last = 0.0f64;
    for &(x, y) in &order {
        let d = (x as f64).hypot(y as f64);

        assert!(d >= last);
        last = d;
    }
}

#[test]
fn test_random_pattern_picks_one_of_the_four() {
    let size = Size::new(7, 5);
    let mut rng = XorShiftRng::seed_from_u64(TEST_SEED);

    let order = reveal::build_queue(size, RevealPattern::Random, &mut rng);

    let candidates = [
        reveal::center_out(size),
        reveal::edges_in(size),
        reveal::mixed(size),
        reveal::corner_to_corner(size),
    ];

    assert!(candidates.contains(&order));
}

#[test]
fn test_revealer_delivers_in_batches() {
    let size = Size::new(5, 5);
    let mut rng = XorShiftRng::seed_from_u64(TEST_SEED);
    let mut revealer = Revealer::new(size, RevealPattern::CenterOut, 3, &mut rng);

    assert_eq!(revealer.remaining(), 25);

    let mut seen = Vec::new();
    let mut ticks = 0;

    while revealer.tick(|x, y| seen.push((x, y))) {
        ticks += 1;
    }

    // 8 full batches of 3 plus one final single delivery.
    assert_eq!(ticks, 9);
    assert_eq!(seen, reveal::center_out(size));
    assert!(revealer.done());

    // A finished run delivers nothing more.
    assert!(!revealer.tick(|_, _| panic!("delivered after completion")));
}

#[test]
fn test_revealer_stop_discards_remainder() {
    let size = Size::new(5, 5);
    let mut rng = XorShiftRng::seed_from_u64(TEST_SEED);
    let mut revealer = Revealer::new(size, RevealPattern::EdgesIn, 4, &mut rng);

    let mut count = 0;
    revealer.tick(|_, _| count += 1);
    assert_eq!(count, 4);

    revealer.stop();

    assert!(revealer.done());
    assert_eq!(revealer.remaining(), 0);
    assert!(!revealer.tick(|_, _| panic!("delivered after stop")));
}

#[test]
fn test_try_move_rejects_walls_and_bounds() {
    let grid = walled_grid(3, 3);
    let mut raycaster = Raycaster::new(640, 400);

    // Player starts at (1.5, 1.0) which sits in the border wall row of this
    // grid; park them mid-cell instead.
    raycaster.player.x = 1.5;
    raycaster.player.y = 1.5;

    let before = raycaster.player;

    // A full cell to the right lands in the border wall.
    assert!(!raycaster.try_move(1.0, 0.0, &grid));
    assert_eq!(raycaster.player, before);

    // Way out of bounds.
    assert!(!raycaster.try_move(50.0, 0.0, &grid));
    assert!(!raycaster.try_move(-50.0, 0.0, &grid));
    assert_eq!(raycaster.player, before);

    // A small nudge inside the open cell is accepted.
    assert!(raycaster.try_move(0.25, 0.0, &grid));
    assert_eq!(raycaster.player.x, 1.75);
}

#[test]
fn test_tick_integrates_sampled_commands() {
    let grid = open_grid(9, 9);
    let mut raycaster = Raycaster::new(640, 400);
    raycaster.player.y = 1.5;

    // No commands held: nothing changes, no redraw needed.
    assert!(!raycaster.tick(InputState::default(), &grid));

    let before = raycaster.player;

    let rotate = InputState {
        rotate_left: true,
        ..InputState::default()
    };

    assert!(raycaster.tick(rotate, &grid));
    assert!(raycaster.player.angle < before.angle);
    assert_eq!(raycaster.player.x, before.x);

    let forward = InputState {
        forward: true,
        ..InputState::default()
    };

    assert!(raycaster.tick(forward, &grid));
    assert!(raycaster.player.x != before.x || raycaster.player.y != before.y);
}

#[test]
fn test_frame_geometry_and_minimum_view() {
    let grid = walled_grid(9, 9);
    let mut raycaster = Raycaster::new(640, 400);
    raycaster.player.y = 1.5;

    let frame = raycaster.render(&grid);

    assert_eq!(frame.width, 640);
    assert_eq!(frame.height, 400);
    assert_eq!(frame.slices.len(), 320);
    assert_eq!(frame.sky, palette::SKY);
    assert_eq!(frame.floor, palette::FLOOR);

    for slice in &frame.slices {
        assert!(slice.height >= 10.0);
        // Centered vertically.
        assert!((slice.top + slice.height / 2.0 - 200.0).abs() < 1e-9);
    }

    // The view never drops below 320x200.
    raycaster.set_size(10, 10);
    let tiny = raycaster.render(&grid);

    assert_eq!(tiny.width, 320);
    assert_eq!(tiny.height, 200);
    assert_eq!(tiny.slices.len(), 160);
}

#[test]
fn test_slice_colors_track_group_coloring() {
    let mut grid = walled_grid(9, 9);
    let mut raycaster = Raycaster::new(640, 400);
    raycaster.player.y = 1.5;

    // Ungrouped cells fall back to depth-quantized fallback shades.
    let frame = raycaster.render(&grid);
    for slice in &frame.slices {
        assert!(palette::YELLOW_GREEN.contains(&slice.color));
    }

    // Color the whole interior; scan-order activation merges everything into
    // group 1, which wears the first palette family.
    let mut tracker = GroupTracker::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            tracker.activate(&mut grid, x, y);
        }
    }

    let frame = raycaster.render(&grid);
    for slice in &frame.slices {
        assert_eq!(slice.color, palette::YELLOW[0]);
    }
}

#[test]
fn test_frame_rasterize_layout() {
    let frame = Frame {
        width: 320,
        height: 200,
        sky: palette::SKY,
        floor: palette::FLOOR,
        slices: vec![Slice {
            x: 10.0,
            width: 2.0,
            top: 90.0,
            height: 20.0,
            color: 0xAB_CDEF,
        }],
    };

    let pixels = frame.rasterize();

    assert_eq!(pixels.len(), 320 * 200 * 4);

    // Top-left pixel is sky, bottom-left is floor.
    let [_, r, g, b] = palette::SKY.to_be_bytes();
    assert_eq!(&pixels[0..4], &[r, g, b, 0xFF]);

    let [_, r, g, b] = palette::FLOOR.to_be_bytes();
    let last_row = (200 - 1) * 320 * 4;
    assert_eq!(&pixels[last_row..last_row + 4], &[r, g, b, 0xFF]);

    // The slice paints over the sky/floor split.
    let offset = (100 * 320 + 10) * 4;
    assert_eq!(&pixels[offset..offset + 4], &[0xAB, 0xCD, 0xEF, 0xFF]);
}
