pub mod events;

#[cfg(feature = "visual")]
pub mod sdl_renderer;

#[cfg(feature = "image-output")]
pub mod image_renderer;

pub use events::RenderEvent;

use crate::cell::Cell;
use crate::grid::{Grid, Position};
use crate::raycast::{Frame, InputState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Top-down colored grid.
    Grid2d,
    /// Ray-marched first-person projection.
    FirstPerson,
}

/// Everything a renderer needs to draw one moment of the session.
pub struct Scene<'a> {
    pub grid: &'a Grid<Cell>,
    /// Which cells the reveal run has shown so far.
    pub revealed: &'a Grid<bool>,
    /// The traced entry-to-exit path, once computed.
    pub path: Option<&'a [Position]>,
    pub view: ViewMode,
    /// Current first-person frame, only present in [`ViewMode::FirstPerson`].
    pub frame: Option<&'a Frame>,
}

/// Inputs surfaced by interactive renderers for the app loop to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneInput {
    /// Pointer tap resolved to grid coordinates.
    Tap { x: usize, y: usize },
    /// Switch between the 2D grid and the first-person view.
    ToggleView,
    /// The target surface changed size.
    Resized { width: usize, height: usize },
}

/// Core trait for rendering maze session progress
pub trait Renderer {
    type Error;

    /// Initialize the renderer for a new scene
    fn initialize(&mut self, scene: &Scene) -> Result<(), Self::Error>;

    /// Handle a session event
    fn handle_event(&mut self, event: &RenderEvent) -> Result<(), Self::Error>;

    /// Update renderer with the current scene (for visual renderers)
    fn update(&mut self, scene: &Scene) -> Result<(), Self::Error> {
        let _ = scene;
        Ok(())
    }

    /// Drain pending pointer/window inputs (for interactive renderers)
    fn poll_input(&mut self) -> Vec<SceneInput> {
        Vec::new()
    }

    /// Currently held movement commands (for interactive renderers)
    fn input_state(&self) -> InputState {
        InputState::default()
    }

    /// Check if the user wants to quit (for interactive renderers)
    fn should_quit(&mut self) -> bool {
        false
    }

    /// Finalize rendering with the final scene (e.g. save to file)
    fn finalize(&mut self, scene: &Scene) -> Result<(), Self::Error>;
}
