//! Colored region tracking: cells are activated one at a time and join,
//! create, or merge groups based on their already-colored neighbors.

use std::collections::HashMap;

use log::debug;

use crate::cell::{Cell, DisplayColor, GroupId};
use crate::generator;
use crate::grid::{Direction, Grid, Position};
use crate::palette::{self, ShadeSet};

/// What a single activation did to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// Group the activated cell ended up in.
    pub group: GroupId,
    /// Groups absorbed into `group` by this activation.
    pub absorbed: Vec<GroupId>,
}

/// Tracks the partition of path cells into colored groups for one grid.
/// The counter and palette records are per-tracker, so independent grids
/// (and tests) never share group numbering.
pub struct GroupTracker {
    counter: GroupId,
    shades: HashMap<GroupId, &'static ShadeSet>,
}

impl Default for GroupTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupTracker {
    pub fn new() -> Self {
        Self {
            counter: 1,
            shades: HashMap::new(),
        }
    }

    /// Color the cell at `(x, y)` and resolve any resulting merge.
    ///
    /// Activating a wall, an out-of-bounds coordinate, or an already-colored
    /// cell is a no-op returning `None`; duplicate taps are benign.
    pub fn activate(&mut self, grid: &mut Grid<Cell>, x: usize, y: usize) -> Option<Activation> {
        match grid.get(x, y) {
            None => {
                debug!("activation outside the grid: ({}, {})", x, y);
                return None;
            }
            Some(cell) if cell.is_wall() => {
                debug!("activation on a wall cell: ({}, {})", x, y);
                return None;
            }
            Some(cell) if cell.group.is_some() => {
                debug!("cell ({}, {}) is already colored", x, y);
                return None;
            }
            Some(_) => {}
        }

        // Distinct neighbor groups, first-seen order. The scan order of
        // Direction::ALL decides which group survives a merge.
        let mut adjacent: Vec<GroupId> = Vec::with_capacity(4);

        for direction in Direction::ALL {
            if let Some(group) = grid.get_neighbor(x, y, direction).and_then(|c| c.group) {
                if !adjacent.contains(&group) {
                    adjacent.push(group);
                }
            }
        }

        let activation = match adjacent.split_first() {
            None => {
                let group = self.counter;
                self.counter += 1;
                self.shades.insert(group, palette::group_shades(group));

                Activation {
                    group,
                    absorbed: Vec::new(),
                }
            }
            Some((&group, absorbed)) if absorbed.is_empty() => Activation {
                group,
                absorbed: Vec::new(),
            },
            Some((&group, absorbed)) => {
                let absorbed = absorbed.to_vec();
                self.relabel(grid, group, &absorbed);

                for gone in &absorbed {
                    self.shades.remove(gone);
                }

                Activation { group, absorbed }
            }
        };

        let shades = self.shades[&activation.group];

        if let Some(cell) = grid.get_mut(x, y) {
            cell.group = Some(activation.group);
            cell.color = DisplayColor::new(shades);
        }

        debug!(
            "cell ({}, {}) joined group {} (absorbed {:?})",
            x, y, activation.group, activation.absorbed
        );

        Some(activation)
    }

    /// Entry and exit coordinates once both carry the same group.
    ///
    /// Callers check this after each activation; it is the precondition for
    /// running the path search.
    pub fn connection(&self, grid: &Grid<Cell>) -> Option<(Position, Position)> {
        let entry = generator::ENTRY;
        let exit = generator::exit_position(grid.width(), grid.height());

        let entry_group = grid.get(entry.0, entry.1)?.group?;
        let exit_group = grid.get(exit.0, exit.1)?.group?;

        (entry_group == exit_group).then_some((entry, exit))
    }

    /// Move every cell of the absorbed groups into `survivor`. A full grid
    /// scan, not a union-find: activations are human-paced and the scan keeps
    /// the first-in-scan-order survivor observable.
    fn relabel(&self, grid: &mut Grid<Cell>, survivor: GroupId, absorbed: &[GroupId]) {
        let shades = self.shades[&survivor];

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if let Some(cell) = grid.get_mut(x, y) {
                    if cell.group.map_or(false, |g| absorbed.contains(&g)) {
                        cell.group = Some(survivor);
                        cell.color.set_shades(shades);
                    }
                }
            }
        }
    }
}
