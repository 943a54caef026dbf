//! First-person projection of the maze: per-frame movement integration
//! against the grid as a collision surface, and a per-column ray-marched
//! render with distance shading.

use std::f64::consts::PI;

use crate::cell::Cell;
use crate::grid::{Grid, Position};
use crate::palette::{self, SHADE_STEPS};

pub const MOVE_SPEED: f64 = 0.035;
pub const ROT_SPEED: f64 = 0.015;

const FOV: f64 = PI / 3.0;
const MAX_DEPTH: f64 = 8.0;
const MARCH_STEP: f64 = 0.02;
const DISTANCE_EPSILON: f64 = 0.1;
const MIN_SLICE_HEIGHT: f64 = 10.0;

const MIN_VIEW_WIDTH: usize = 320;
const MIN_VIEW_HEIGHT: usize = 200;

/// Continuous player state in grid-cell units. Only collision tests ever
/// discretize it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: 1.5,
            y: 1.0,
            angle: 0.0,
        }
    }
}

/// Command flags sampled once per frame. Input backends set these on
/// press/release; the tick loop only ever reads them, which keeps movement
/// integration single-threaded and deterministic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

impl InputState {
    pub fn any(&self) -> bool {
        self.forward || self.back || self.rotate_left || self.rotate_right
    }
}

/// One vertical wall column of a rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub x: f64,
    pub width: f64,
    pub top: f64,
    pub height: f64,
    pub color: u32,
}

/// A rendered projection: flat sky and floor halves behind an ordered run of
/// wall slices.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub sky: u32,
    pub floor: u32,
    pub slices: Vec<Slice>,
}

impl Frame {
    /// Flatten the frame into an RGBA pixel buffer, row-major.
    pub fn rasterize(&self) -> Vec<u8> {
        let mut pixels = vec![0u8; self.width * self.height * 4];

        let half = self.height / 2;
        fill_rect(&mut pixels, self.width, 0, 0, self.width, half, self.sky);
        fill_rect(
            &mut pixels,
            self.width,
            0,
            half,
            self.width,
            self.height - half,
            self.floor,
        );

        for slice in &self.slices {
            let x = slice.x.max(0.0) as usize;
            let y = slice.top.max(0.0) as usize;
            let w = (slice.width.ceil() as usize).min(self.width.saturating_sub(x));
            let h = (slice.height.ceil() as usize).min(self.height.saturating_sub(y));

            fill_rect(&mut pixels, self.width, x, y, w, h, slice.color);
        }

        pixels
    }
}

fn fill_rect(pixels: &mut [u8], stride: usize, x: usize, y: usize, w: usize, h: usize, color: u32) {
    let [_, r, g, b] = color.to_be_bytes();

    for row in y..y + h {
        for col in x..x + w {
            let offset = (row * stride + col) * 4;

            if let Some(pixel) = pixels.get_mut(offset..offset + 4) {
                pixel.copy_from_slice(&[r, g, b, 0xFF]);
            }
        }
    }
}

/// The pseudo-3D view of one maze.
pub struct Raycaster {
    pub player: Player,
    view_width: usize,
    view_height: usize,
    move_speed: f64,
    rot_speed: f64,
}

impl Raycaster {
    pub fn new(view_width: usize, view_height: usize) -> Self {
        Self {
            player: Player::default(),
            view_width,
            view_height,
            move_speed: MOVE_SPEED,
            rot_speed: ROT_SPEED,
        }
    }

    pub fn view_size(&self) -> (usize, usize) {
        (self.view_width, self.view_height)
    }

    /// Change the target surface size. The caller re-renders immediately;
    /// player state is untouched.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.view_width = width;
        self.view_height = height;
    }

    /// Integrate one frame of sampled input. Returns whether anything
    /// changed, i.e. whether the view needs redrawing.
    pub fn tick(&mut self, input: InputState, grid: &Grid<Cell>) -> bool {
        let mut moved = false;

        if input.forward {
            moved |= self.try_move(
                self.player.angle.cos() * self.move_speed,
                self.player.angle.sin() * self.move_speed,
                grid,
            );
        }

        if input.back {
            moved |= self.try_move(
                -self.player.angle.cos() * self.move_speed,
                -self.player.angle.sin() * self.move_speed,
                grid,
            );
        }

        if input.rotate_left {
            self.player.angle -= self.rot_speed;
            moved = true;
        }

        if input.rotate_right {
            self.player.angle += self.rot_speed;
            moved = true;
        }

        moved
    }

    /// Propose a move by `(dx, dy)`; accept it only if the destination cell
    /// is in bounds and not a wall. Rejected moves leave the player exactly
    /// where they were, no clamping or wall sliding.
    pub fn try_move(&mut self, dx: f64, dy: f64, grid: &Grid<Cell>) -> bool {
        let nx = self.player.x + dx;
        let ny = self.player.y + dy;

        if nx <= 0.0 || ny <= 0.0 {
            return false;
        }

        let (mx, my) = (nx as usize, ny as usize);

        if mx >= grid.width() || my >= grid.height() {
            return false;
        }

        if grid.get(mx, my).map_or(true, Cell::is_wall) {
            return false;
        }

        self.player.x = nx;
        self.player.y = ny;
        true
    }

    /// Ray-march one frame. The view never drops below 320x200 regardless of
    /// the requested surface size.
    pub fn render(&self, grid: &Grid<Cell>) -> Frame {
        let width = self.view_width.max(MIN_VIEW_WIDTH);
        let height = self.view_height.max(MIN_VIEW_HEIGHT);

        let num_rays = width / 2;
        let w = width as f64;
        let h = height as f64;
        let column = w / num_rays as f64;

        let mut slices = Vec::with_capacity(num_rays);

        for i in 0..num_rays {
            let screen_x = i as f64 / num_rays as f64 - 0.5;
            let ray_angle = self.player.angle + screen_x * FOV;

            let (distance, last_path) = self.march(ray_angle, grid);

            // Fisheye correction: scale by the angle off the view axis.
            let corrected = distance * (ray_angle - self.player.angle).cos();
            let slice_height = (h * 1.5 / (corrected + DISTANCE_EPSILON)).max(MIN_SLICE_HEIGHT);

            slices.push(Slice {
                x: i as f64 * column,
                width: column + 1.0,
                top: h / 2.0 - slice_height / 2.0,
                height: slice_height,
                color: slice_color(grid, last_path, corrected),
            });
        }

        Frame {
            width,
            height,
            sky: palette::SKY,
            floor: palette::FLOOR,
            slices,
        }
    }

    /// March a single ray in fixed steps until it leaves the grid or enters a
    /// wall; leaving the grid counts as a hit at the boundary. Returns the
    /// travelled distance and the last path cell crossed.
    fn march(&self, ray_angle: f64, grid: &Grid<Cell>) -> (f64, Position) {
        let mut distance = 0.0;
        let mut last_path = (self.player.x as usize, self.player.y as usize);

        let (sin, cos) = ray_angle.sin_cos();

        while distance < MAX_DEPTH {
            distance += MARCH_STEP;

            let hx = self.player.x + cos * distance;
            let hy = self.player.y + sin * distance;

            if hx < 0.0 || hy < 0.0 {
                break;
            }

            let (mx, my) = (hx as usize, hy as usize);

            if mx >= grid.width() || my >= grid.height() {
                break;
            }

            if grid.get(mx, my).map_or(true, Cell::is_wall) {
                break;
            }

            last_path = (mx, my);
        }

        (distance, last_path)
    }
}

/// Wall slice color: the last path cell's live display color when it belongs
/// to a group, keeping the 3D view consistent with the 2D coloring; otherwise
/// a depth-quantized shade of the fallback family.
fn slice_color(grid: &Grid<Cell>, last_path: Position, corrected: f64) -> u32 {
    match grid.get(last_path.0, last_path.1) {
        Some(cell) if !cell.is_wall() => {
            if cell.group.is_some() {
                cell.color.rgb()
            } else {
                let bucket = ((corrected / MAX_DEPTH) * SHADE_STEPS as f64) as usize;

                palette::YELLOW_GREEN[bucket.min(SHADE_STEPS - 1)]
            }
        }
        _ => palette::YELLOW_GREEN[0],
    }
}
