//! Maze generation: randomized depth-first backtracker over the odd/odd
//! lattice, producing a perfect maze (every cell reachable through exactly one
//! simple path).

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cell::Cell;
use crate::grid::{Direction, Grid, Size};

/// Entry cell coordinates, fixed by construction.
pub const ENTRY: (usize, usize) = (0, 1);

/// Exit cell coordinates for a grid of the given dimensions.
pub fn exit_position(width: usize, height: usize) -> (usize, usize) {
    (width - 1, height - 2)
}

/// One suspended carve site: the cell we backtrack to and the shuffled
/// direction order still left to try there.
struct CarveFrame {
    x: usize,
    y: usize,
    dirs: [Direction; 4],
    next: usize,
}

impl CarveFrame {
    fn new<R: Rng + ?Sized>(x: usize, y: usize, rng: &mut R) -> Self {
        let mut dirs = Direction::ALL;
        dirs.shuffle(rng);

        Self { x, y, dirs, next: 0 }
    }
}

/// Carve a maze of the requested size. Dimensions are rounded up to odd (and
/// to at least 3) first; the caller gets whatever grid actually fits.
///
/// Only cells with both coordinates odd are carve targets; the cell between
/// two of them becomes a passage when they are linked. The walk uses an
/// explicit stack instead of recursion so large grids cannot blow the call
/// stack, with output identical to the recursive form for the same draws.
pub fn generate<R: Rng + ?Sized>(size: Size, rng: &mut R) -> Grid<Cell> {
    let Size { width, height } = size.to_odd();
    let mut grid = Grid::new(width, height, &mut |_, _| Cell::wall());

    debug!("carving {}x{} maze", width, height);

    carve(&mut grid, rng);

    // Entry and exit are degree-one stubs off the boundary; each touches the
    // spanning tree at exactly one cell, so no cycle can appear.
    let (ex, ey) = exit_position(width, height);
    if let Some(cell) = grid.get_mut(ENTRY.0, ENTRY.1) {
        cell.carve();
    }
    if let Some(cell) = grid.get_mut(ex, ey) {
        cell.carve();
    }

    grid
}

fn carve<R: Rng + ?Sized>(grid: &mut Grid<Cell>, rng: &mut R) {
    let width = grid.width();
    let height = grid.height();

    if let Some(cell) = grid.get_mut(1, 1) {
        cell.carve();
    }

    let mut stack = vec![CarveFrame::new(1, 1, rng)];

    while let Some(frame) = stack.last_mut() {
        if frame.next >= frame.dirs.len() {
            stack.pop();
            continue;
        }

        let direction = frame.dirs[frame.next];
        frame.next += 1;

        let (fx, fy) = (frame.x, frame.y);
        let (dx, dy) = direction.offset();
        let nx = fx as isize + dx * 2;
        let ny = fy as isize + dy * 2;

        // Strictly inside the border wall, and still uncarved.
        if nx <= 0 || nx >= width as isize - 1 || ny <= 0 || ny >= height as isize - 1 {
            continue;
        }

        let (nx, ny) = (nx as usize, ny as usize);

        if !grid.get(nx, ny).map_or(false, Cell::is_wall) {
            continue;
        }

        let (cx, cy) = ((fx as isize + dx) as usize, (fy as isize + dy) as usize);

        if let Some(connector) = grid.get_mut(cx, cy) {
            connector.carve();
        }
        if let Some(cell) = grid.get_mut(nx, ny) {
            cell.carve();
        }

        stack.push(CarveFrame::new(nx, ny, rng));
    }
}
