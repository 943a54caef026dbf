use crate::cell::Cell;
use crate::cli::AppConfig;
use crate::generator;
use crate::grid::{Grid, Position, Size};
use crate::groups::GroupTracker;
use crate::pathing;
use crate::render::{RenderEvent, Renderer, Scene, ViewMode};
use crate::reveal::Revealer;

#[cfg(feature = "image-output")]
use crate::render::image_renderer::ImageRenderer;
#[cfg(feature = "visual")]
use crate::render::sdl_renderer::{SdlConfig, SdlRenderer};

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::rngs::OsRng;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use std::error::Error;
use std::time::Duration;

#[cfg(feature = "visual")]
const CELL_PIXELS: usize = 24;

type Renderers = Vec<Box<dyn Renderer<Error = String>>>;

/// One puzzle session: generate, reveal, activate until connected, trace the
/// shortest path. All three periodic drivers (reveal ticks, raycast frames,
/// renderer updates) share this one cooperative loop.
pub struct MazeApp {
    config: AppConfig,
}

impl MazeApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        let seed = self.config.seed.unwrap_or_else(|| OsRng.gen());

        info!("Using seed: {}", seed);

        let mut rng = XorShiftRng::seed_from_u64(seed);
        let mut grid = generator::generate(self.config.size, &mut rng);

        info!("Generated {}x{} maze", grid.width(), grid.height());

        let mut revealed = Grid::new(grid.width(), grid.height(), &mut |_, _| false);
        let mut tracker = GroupTracker::new();
        let mut renderers = self.create_renderers()?;

        {
            let scene = Scene {
                grid: &grid,
                revealed: &revealed,
                path: None,
                view: ViewMode::Grid2d,
                frame: None,
            };

            for renderer in &mut renderers {
                renderer.initialize(&scene)?;
                renderer.handle_event(&RenderEvent::Started)?;
            }
        }

        // Reveal phase
        let size = Size::new(grid.width(), grid.height());
        let mut revealer = Revealer::new(size, self.config.pattern, self.config.batch, &mut rng);

        let total = revealer.remaining() as u64;
        let progress = ProgressBar::new(total);
        progress.enable_steady_tick(Duration::from_millis(200));
        progress.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>5}/{len} {per_sec:>12}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );

        while !revealer.done() {
            revealer.tick(|x, y| {
                revealed.set(x, y, true).ok();
            });

            progress.set_position(total - revealer.remaining() as u64);

            let scene = Scene {
                grid: &grid,
                revealed: &revealed,
                path: None,
                view: ViewMode::Grid2d,
                frame: None,
            };

            for renderer in &mut renderers {
                renderer.handle_event(&RenderEvent::Revealed)?;
                renderer.update(&scene)?;
            }

            if renderers.iter_mut().any(|r| r.should_quit()) {
                return Ok(());
            }

            #[cfg(feature = "visual")]
            if self.config.renderer.visual {
                std::thread::sleep(Duration::from_millis(16));
            }
        }

        progress.finish();

        // Coloring phase: interactive when a window is up, otherwise traced
        // automatically so headless runs exercise the same machinery.
        #[cfg(feature = "visual")]
        let connected = if self.config.renderer.visual {
            self.interact(&mut grid, &mut tracker, &revealed, &mut renderers)?
        } else {
            self.auto_play(&mut grid, &mut tracker, &mut renderers)?
        };

        #[cfg(not(feature = "visual"))]
        let connected = self.auto_play(&mut grid, &mut tracker, &mut renderers)?;

        let path = match connected {
            Some((entry, exit)) => {
                info!("Entry and exit are connected");

                for renderer in &mut renderers {
                    renderer.handle_event(&RenderEvent::Connected)?;
                }

                let path = pathing::shortest_path(&grid, entry, exit);

                info!("Shortest path crosses {} cells", path.len());

                for renderer in &mut renderers {
                    renderer.handle_event(&RenderEvent::PathTraced)?;
                }

                Some(path)
            }
            None => None,
        };

        {
            let scene = Scene {
                grid: &grid,
                revealed: &revealed,
                path: path.as_deref(),
                view: ViewMode::Grid2d,
                frame: None,
            };

            for renderer in &mut renderers {
                renderer.handle_event(&RenderEvent::Completed)?;
                renderer.finalize(&scene)?;
            }
        }

        info!("Session completed");
        Ok(())
    }

    /// Color every path cell in scan order until the connection fires.
    fn auto_play(
        &self,
        grid: &mut Grid<Cell>,
        tracker: &mut GroupTracker,
        renderers: &mut Renderers,
    ) -> Result<Option<(Position, Position)>, Box<dyn Error>> {
        info!("No window requested; coloring the maze automatically");

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if tracker.activate(grid, x, y).is_some() {
                    for renderer in renderers.iter_mut() {
                        renderer.handle_event(&RenderEvent::Activated)?;
                    }
                }

                if let Some(pair) = tracker.connection(grid) {
                    return Ok(Some(pair));
                }
            }
        }

        Ok(tracker.connection(grid))
    }

    /// Window loop: taps color cells, Tab flips to the first-person view,
    /// held keys drive the raycaster one frame per pass.
    #[cfg(feature = "visual")]
    fn interact(
        &self,
        grid: &mut Grid<Cell>,
        tracker: &mut GroupTracker,
        revealed: &Grid<bool>,
        renderers: &mut Renderers,
    ) -> Result<Option<(Position, Position)>, Box<dyn Error>> {
        use crate::raycast::{InputState, Raycaster};
        use crate::render::SceneInput;

        let mut raycaster = Raycaster::new(
            grid.width() * CELL_PIXELS,
            grid.height() * CELL_PIXELS,
        );
        let mut view = ViewMode::Grid2d;
        let mut frame = None;

        loop {
            let mut inputs = Vec::new();

            for renderer in renderers.iter_mut() {
                inputs.extend(renderer.poll_input());
            }

            for input in inputs {
                match input {
                    SceneInput::Tap { x, y } => {
                        if view == ViewMode::Grid2d && tracker.activate(grid, x, y).is_some() {
                            for renderer in renderers.iter_mut() {
                                renderer.handle_event(&RenderEvent::Activated)?;
                            }
                        }
                    }
                    SceneInput::ToggleView => {
                        view = match view {
                            ViewMode::Grid2d => ViewMode::FirstPerson,
                            ViewMode::FirstPerson => ViewMode::Grid2d,
                        };
                        frame = (view == ViewMode::FirstPerson).then(|| raycaster.render(grid));
                    }
                    SceneInput::Resized { width, height } => {
                        raycaster.set_size(width, height);

                        if view == ViewMode::FirstPerson {
                            frame = Some(raycaster.render(grid));
                        }
                    }
                }
            }

            if view == ViewMode::FirstPerson {
                let mut keys = InputState::default();

                for renderer in renderers.iter() {
                    let state = renderer.input_state();

                    keys.forward |= state.forward;
                    keys.back |= state.back;
                    keys.rotate_left |= state.rotate_left;
                    keys.rotate_right |= state.rotate_right;
                }

                if raycaster.tick(keys, grid) || frame.is_none() {
                    frame = Some(raycaster.render(grid));
                }
            }

            {
                let scene = Scene {
                    grid,
                    revealed,
                    path: None,
                    view,
                    frame: frame.as_ref(),
                };

                for renderer in renderers.iter_mut() {
                    renderer.update(&scene)?;
                }
            }

            if renderers.iter_mut().any(|r| r.should_quit()) {
                return Ok(None);
            }

            if let Some(pair) = tracker.connection(grid) {
                return Ok(Some(pair));
            }

            std::thread::sleep(Duration::from_millis(16));
        }
    }

    fn create_renderers(&self) -> Result<Renderers, Box<dyn Error>> {
        let mut renderers: Renderers = Vec::new();

        #[cfg(feature = "visual")]
        if self.config.renderer.visual {
            let odd = self.config.size.to_odd();
            let window_size = Size::new(odd.width * CELL_PIXELS, odd.height * CELL_PIXELS);

            let sdl_renderer = SdlRenderer::new(&SdlConfig {
                window_size,
                vsync: self.config.renderer.vsync,
                fullscreen: self.config.renderer.fullscreen,
            })?;

            renderers.push(Box::new(sdl_renderer));
        }

        #[cfg(feature = "image-output")]
        if let Some(output_path) = &self.config.output {
            renderers.push(Box::new(ImageRenderer::new(output_path.clone())));
        }

        Ok(renderers)
    }
}
