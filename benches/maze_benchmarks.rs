use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use mazebound::{
    cell::Cell,
    generator,
    grid::{Grid, Size},
    groups::GroupTracker,
    pathing,
    raycast::Raycaster,
    reveal::{self, RevealPattern},
};

// Fixed seed for deterministic benchmarks
const BENCHMARK_SEED: u64 = 12345;

fn colored_maze(width: usize, height: usize) -> Grid<Cell> {
    let mut rng = XorShiftRng::seed_from_u64(BENCHMARK_SEED);
    let mut grid = generator::generate(Size::new(width, height), &mut rng);
    let mut tracker = GroupTracker::new();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            tracker.activate(&mut grid, x, y);
        }
    }

    grid
}

fn bench_generation(c: &mut Criterion) {
    c.bench_function("generate 63x63", |b| {
        let mut rng = XorShiftRng::seed_from_u64(BENCHMARK_SEED);

        b.iter(|| generator::generate(black_box(Size::new(63, 63)), &mut rng));
    });
}

fn bench_reveal_ordering(c: &mut Criterion) {
    c.bench_function("center-out order 101x101", |b| {
        b.iter(|| reveal::center_out(black_box(Size::new(101, 101))));
    });

    c.bench_function("mixed order 101x101", |b| {
        let mut rng = XorShiftRng::seed_from_u64(BENCHMARK_SEED);

        b.iter(|| reveal::build_queue(black_box(Size::new(101, 101)), RevealPattern::Mixed, &mut rng));
    });
}

fn bench_pathing(c: &mut Criterion) {
    let grid = colored_maze(63, 63);
    let entry = generator::ENTRY;
    let exit = generator::exit_position(grid.width(), grid.height());

    c.bench_function("shortest path 63x63", |b| {
        b.iter(|| pathing::shortest_path(black_box(&grid), entry, exit));
    });
}

fn bench_raycast_frame(c: &mut Criterion) {
    let grid = colored_maze(31, 31);
    let mut raycaster = Raycaster::new(640, 400);
    raycaster.player.y = 1.5;

    c.bench_function("raycast frame 640x400", |b| {
        b.iter(|| raycaster.render(black_box(&grid)));
    });
}

criterion_group!(
    benches,
    bench_generation,
    bench_reveal_ordering,
    bench_pathing,
    bench_raycast_frame
);
criterion_main!(benches);
