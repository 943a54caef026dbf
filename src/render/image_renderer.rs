use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use log::info;

use super::{Renderer, Scene, ViewMode};
use crate::render::RenderEvent;

const CELL_PIXELS: u32 = 16;

/// Writes the final scene to a PNG: the colored 2D grid, or the rasterized
/// first-person frame when that view is active.
pub struct ImageRenderer {
    path: PathBuf,
}

impl ImageRenderer {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn draw_grid(&self, scene: &Scene) -> RgbaImage {
        let width = scene.grid.width() as u32 * CELL_PIXELS;
        let height = scene.grid.height() as u32 * CELL_PIXELS;

        RgbaImage::from_fn(width, height, |px, py| {
            let x = (px / CELL_PIXELS) as usize;
            let y = (py / CELL_PIXELS) as usize;

            let on_path = scene
                .path
                .map_or(false, |path| path.contains(&(x, y)));

            let color = match scene.grid.get(x, y) {
                Some(cell) if on_path => cell.color.shades[cell.color.shades.len() - 1],
                Some(cell) => cell.color.rgb(),
                None => 0,
            };

            let [_, r, g, b] = color.to_be_bytes();

            Rgba([r, g, b, 0xFF])
        })
    }
}

impl Renderer for ImageRenderer {
    type Error = String;

    fn initialize(&mut self, _scene: &Scene) -> Result<(), Self::Error> {
        Ok(())
    }

    fn handle_event(&mut self, _event: &RenderEvent) -> Result<(), Self::Error> {
        Ok(())
    }

    fn finalize(&mut self, scene: &Scene) -> Result<(), Self::Error> {
        let image = match (scene.view, scene.frame) {
            (ViewMode::FirstPerson, Some(frame)) => {
                RgbaImage::from_raw(frame.width as u32, frame.height as u32, frame.rasterize())
                    .ok_or("Frame buffer size mismatch")?
            }
            _ => self.draw_grid(scene),
        };

        image.save(&self.path).map_err(|e| e.to_string())?;

        info!("wrote {}", self.path.display());
        Ok(())
    }
}
