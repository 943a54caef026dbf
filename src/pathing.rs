//! Shortest-path search between two colored cells, restricted to the entry
//! cell's group.

use std::collections::VecDeque;

use log::warn;

use crate::cell::Cell;
use crate::grid::{Direction, Grid, Position};

/// Breadth-first shortest path from `entry` to `exit` through cells sharing
/// the entry cell's group.
///
/// The group restriction is what keeps the search inside the connected
/// colored region rather than wandering over arbitrary path cells. Returns an
/// empty path if either endpoint is invalid or the exit is unreachable; both
/// are logged rather than treated as faults, since the caller only invokes
/// this after a connection has been reported.
pub fn shortest_path(grid: &Grid<Cell>, entry: Position, exit: Position) -> Vec<Position> {
    let group = match grid.get(entry.0, entry.1).and_then(|cell| cell.group) {
        Some(group) => group,
        None => {
            warn!("path requested from missing or uncolored entry {:?}", entry);
            return Vec::new();
        }
    };

    if grid.get(exit.0, exit.1).is_none() {
        warn!("path requested to missing exit {:?}", exit);
        return Vec::new();
    }

    let mut visited = Grid::new(grid.width(), grid.height(), &mut |_, _| false);
    let mut prev: Grid<Option<Position>> = Grid::new(grid.width(), grid.height(), &mut |_, _| None);
    let mut queue: VecDeque<Position> = VecDeque::new();

    visited.set(entry.0, entry.1, true).ok();
    queue.push_back(entry);

    while let Some((x, y)) = queue.pop_front() {
        if (x, y) == exit {
            break;
        }

        for direction in Direction::ALL {
            let (nx, ny) = match grid.neighbor_position(x, y, direction) {
                Some(position) => position,
                None => continue,
            };

            if *visited.get(nx, ny).unwrap_or(&true) {
                continue;
            }

            if grid.get(nx, ny).and_then(|cell| cell.group) != Some(group) {
                continue;
            }

            visited.set(nx, ny, true).ok();
            prev.set(nx, ny, Some((x, y))).ok();
            queue.push_back((nx, ny));
        }
    }

    if !visited.get(exit.0, exit.1).copied().unwrap_or(false) {
        warn!("no route from {:?} to {:?} within group {}", entry, exit, group);
        return Vec::new();
    }

    let mut path = vec![exit];
    let mut current = exit;

    while current != entry {
        match prev.get(current.0, current.1).copied().flatten() {
            Some(step) => {
                path.push(step);
                current = step;
            }
            None => {
                // Predecessor chain broken; should not happen once exit was visited.
                warn!("path reconstruction failed at {:?}", current);
                return Vec::new();
            }
        }
    }

    path.reverse();
    path
}
