//! **mazebound** is the algorithm core of a grid maze puzzle: procedural
//! generation, colored region tracking under user-driven merges,
//! group-constrained shortest-path search, paced reveal ordering, and a
//! ray-marched pseudo-3D projection of the same grid.

pub mod cell;
pub mod generator;
pub mod grid;
pub mod groups;
pub mod palette;
pub mod pathing;
pub mod raycast;
pub mod render;
pub mod reveal;

#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod cli;
