//! Reveal ordering and pacing: every grid coordinate gets a place in a
//! distance-keyed total order, then a tick-driven queue hands them out in
//! small batches.

use core::str::FromStr;
use std::collections::VecDeque;

use log::debug;
use rand::Rng;

use crate::grid::{Position, Size};

/// Coordinates revealed per tick unless the caller asks otherwise.
pub const DEFAULT_BATCH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPattern {
    CenterOut,
    EdgesIn,
    Mixed,
    CornerToCorner,
    /// One of the four deterministic patterns, picked uniformly per reveal.
    Random,
}

impl FromStr for RevealPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "center-out" => Ok(RevealPattern::CenterOut),
            "edges-in" => Ok(RevealPattern::EdgesIn),
            "mixed" => Ok(RevealPattern::Mixed),
            "corner-to-corner" => Ok(RevealPattern::CornerToCorner),
            "random" => Ok(RevealPattern::Random),
            _ => Err(format!("unknown reveal pattern: {}", s)),
        }
    }
}

fn all_positions(size: Size) -> Vec<Position> {
    let mut positions = Vec::with_capacity(size.area());

    for y in 0..size.height {
        for x in 0..size.width {
            positions.push((x, y));
        }
    }

    positions
}

fn sorted_by_distance(size: Size, cx: f64, cy: f64) -> Vec<Position> {
    let mut positions = all_positions(size);

    positions.sort_by(|&(x1, y1), &(x2, y2)| {
        let d1 = (x1 as f64 - cx).hypot(y1 as f64 - cy);
        let d2 = (x2 as f64 - cx).hypot(y2 as f64 - cy);

        d1.total_cmp(&d2)
    });

    positions
}

/// Ascending distance from the geometric center of the grid.
pub fn center_out(size: Size) -> Vec<Position> {
    let cx = (size.width as f64 - 1.0) / 2.0;
    let cy = (size.height as f64 - 1.0) / 2.0;

    sorted_by_distance(size, cx, cy)
}

/// Exact reverse of [`center_out`].
pub fn edges_in(size: Size) -> Vec<Position> {
    let mut positions = center_out(size);
    positions.reverse();
    positions
}

/// Zipper interleave of the center-out order: first, last, second,
/// second-last, working inwards.
pub fn mixed(size: Size) -> Vec<Position> {
    let base = center_out(size);
    let mut output = Vec::with_capacity(base.len());

    let mut left = 0;
    let mut right = base.len().saturating_sub(1);

    while left <= right && !base.is_empty() {
        if left == right {
            output.push(base[left]);
        } else {
            output.push(base[left]);
            output.push(base[right]);
        }

        left += 1;

        if right == 0 {
            break;
        }
        right -= 1;
    }

    output
}

/// Ascending distance from the `(0, 0)` corner.
pub fn corner_to_corner(size: Size) -> Vec<Position> {
    sorted_by_distance(size, 0.0, 0.0)
}

/// Build the full reveal order for `pattern`. Only `Random` consumes the RNG.
pub fn build_queue<R: Rng + ?Sized>(size: Size, pattern: RevealPattern, rng: &mut R) -> Vec<Position> {
    match pattern {
        RevealPattern::CenterOut => center_out(size),
        RevealPattern::EdgesIn => edges_in(size),
        RevealPattern::Mixed => mixed(size),
        RevealPattern::CornerToCorner => corner_to_corner(size),
        RevealPattern::Random => {
            let deterministic = [
                RevealPattern::CenterOut,
                RevealPattern::EdgesIn,
                RevealPattern::Mixed,
                RevealPattern::CornerToCorner,
            ];
            let pick = deterministic[rng.gen_range(0..deterministic.len())];

            debug!("random reveal resolved to {:?}", pick);

            build_queue(size, pick, rng)
        }
    }
}

/// Single-use reveal run: delivers batches from the front of the queue on
/// each tick and stops itself when empty. A new reveal builds a new
/// `Revealer`; dropping or replacing one is how an in-flight run is
/// cancelled before the next tick fires.
pub struct Revealer {
    queue: VecDeque<Position>,
    batch: usize,
    running: bool,
}

impl Revealer {
    pub fn new<R: Rng + ?Sized>(size: Size, pattern: RevealPattern, batch: usize, rng: &mut R) -> Self {
        Self {
            queue: build_queue(size, pattern, rng).into(),
            batch: batch.max(1),
            running: true,
        }
    }

    pub fn done(&self) -> bool {
        !self.running
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Deliver up to one batch of coordinates. Returns `false` once the run
    /// has finished (or was stopped) and nothing was delivered.
    pub fn tick(&mut self, mut on_reveal: impl FnMut(usize, usize)) -> bool {
        if !self.running {
            return false;
        }

        for _ in 0..self.batch {
            match self.queue.pop_front() {
                Some((x, y)) => on_reveal(x, y),
                None => break,
            }
        }

        if self.queue.is_empty() {
            self.stop();
        }

        true
    }

    /// Discard everything not yet revealed; the run cannot be resumed.
    pub fn stop(&mut self) {
        self.queue.clear();
        self.running = false;
    }
}
