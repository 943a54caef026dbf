use super::{Renderer, Scene, SceneInput, ViewMode};
use crate::grid::Size;
use crate::raycast::{Frame, InputState};
use crate::render::RenderEvent;

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::{FullscreenType, Window};
use sdl2::EventPump;

fn rgb(color: u32) -> Color {
    let [_, r, g, b] = color.to_be_bytes();

    Color::RGB(r, g, b)
}

/// SDL2-based interactive renderer: draws the colored grid, forwards taps
/// and key state, and presents the first-person frames.
pub struct SdlRenderer {
    canvas: Canvas<Window>,
    events: EventPump,
    input: InputState,
    pending: Vec<SceneInput>,
    grid_size: (usize, usize),
    should_quit: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct SdlConfig {
    pub window_size: Size,
    pub vsync: bool,
    pub fullscreen: bool,
}

impl SdlRenderer {
    pub fn new(config: &SdlConfig) -> Result<Self, String> {
        let context = sdl2::init()?;
        let video = context.video()?;

        let mut window = video
            .window(
                "Mazebound",
                config.window_size.width as u32,
                config.window_size.height as u32,
            )
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        if config.fullscreen {
            window.set_fullscreen(FullscreenType::True)?;
        }

        if window.fullscreen_state() != FullscreenType::Off {
            context.mouse().show_cursor(false);
        }

        let mut builder = window.into_canvas().target_texture();

        if config.vsync {
            builder = builder.present_vsync();
        }

        let canvas = builder.build().map_err(|e| e.to_string())?;
        let events = context.event_pump()?;

        Ok(Self {
            canvas,
            events,
            input: InputState::default(),
            pending: Vec::new(),
            grid_size: (0, 0),
            should_quit: false,
        })
    }

    fn cell_size(&self) -> (u32, u32) {
        let (width, height) = self.canvas.output_size().unwrap_or((1, 1));
        let (cols, rows) = self.grid_size;

        (
            width / cols.max(1) as u32,
            height / rows.max(1) as u32,
        )
    }

    fn handle_events(&mut self) {
        while let Some(event) = self.events.poll_event() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    self.should_quit = true;
                }
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match key {
                    Keycode::Tab => self.pending.push(SceneInput::ToggleView),
                    _ => self.set_key(key, true),
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => self.set_key(key, false),
                Event::MouseButtonDown { x, y, .. } => {
                    let (cw, ch) = self.cell_size();

                    if cw > 0 && ch > 0 && x >= 0 && y >= 0 {
                        self.pending.push(SceneInput::Tap {
                            x: x as usize / cw as usize,
                            y: y as usize / ch as usize,
                        });
                    }
                }
                Event::Window {
                    win_event: WindowEvent::SizeChanged(width, height),
                    ..
                } => {
                    self.pending.push(SceneInput::Resized {
                        width: width.max(0) as usize,
                        height: height.max(0) as usize,
                    });
                }
                _ => {}
            }
        }
    }

    /// Both letter and arrow bindings map onto the same four commands.
    fn set_key(&mut self, key: Keycode, held: bool) {
        match key {
            Keycode::W | Keycode::Up => self.input.forward = held,
            Keycode::S | Keycode::Down => self.input.back = held,
            Keycode::A | Keycode::Left => self.input.rotate_left = held,
            Keycode::D | Keycode::Right => self.input.rotate_right = held,
            _ => {}
        }
    }

    fn render_grid(&mut self, scene: &Scene) -> Result<(), String> {
        let (cw, ch) = self.cell_size();

        self.canvas.set_draw_color(Color::BLACK);
        self.canvas.clear();

        for (x, y, cell) in scene.grid {
            if !scene.revealed.get(x, y).copied().unwrap_or(false) {
                continue;
            }

            let rect = Rect::new(x as i32 * cw as i32, y as i32 * ch as i32, cw, ch);

            self.canvas.set_draw_color(rgb(cell.color.rgb()));
            self.canvas.fill_rect(rect).map_err(|e| e.to_string())?;
        }

        if let Some(path) = scene.path {
            for &(x, y) in path {
                if let Some(cell) = scene.grid.get(x, y) {
                    let rect = Rect::new(x as i32 * cw as i32, y as i32 * ch as i32, cw, ch);
                    let deepest = cell.color.shades[cell.color.shades.len() - 1];

                    self.canvas.set_draw_color(rgb(deepest));
                    self.canvas.fill_rect(rect).map_err(|e| e.to_string())?;
                }
            }
        }

        self.canvas.present();
        Ok(())
    }

    fn render_frame(&mut self, frame: &Frame) -> Result<(), String> {
        let (width, height) = self.canvas.output_size()?;

        self.canvas.set_draw_color(rgb(frame.sky));
        self.canvas
            .fill_rect(Rect::new(0, 0, width, height / 2))
            .map_err(|e| e.to_string())?;

        self.canvas.set_draw_color(rgb(frame.floor));
        self.canvas
            .fill_rect(Rect::new(0, height as i32 / 2, width, height - height / 2))
            .map_err(|e| e.to_string())?;

        for slice in &frame.slices {
            let rect = Rect::new(
                slice.x as i32,
                slice.top as i32,
                slice.width.ceil() as u32,
                slice.height as u32,
            );

            self.canvas.set_draw_color(rgb(slice.color));
            self.canvas.fill_rect(rect).map_err(|e| e.to_string())?;
        }

        self.canvas.present();
        Ok(())
    }
}

impl Renderer for SdlRenderer {
    type Error = String;

    fn initialize(&mut self, scene: &Scene) -> Result<(), Self::Error> {
        self.grid_size = (scene.grid.width(), scene.grid.height());
        Ok(())
    }

    fn handle_event(&mut self, event: &RenderEvent) -> Result<(), Self::Error> {
        let title = match event {
            RenderEvent::Connected => "Mazebound - connected!",
            RenderEvent::Completed => "Mazebound - done",
            _ => return Ok(()),
        };

        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| e.to_string())
    }

    fn update(&mut self, scene: &Scene) -> Result<(), Self::Error> {
        self.handle_events();

        if self.should_quit {
            return Ok(());
        }

        match (scene.view, scene.frame) {
            (ViewMode::FirstPerson, Some(frame)) => self.render_frame(frame),
            _ => self.render_grid(scene),
        }
    }

    fn poll_input(&mut self) -> Vec<SceneInput> {
        std::mem::take(&mut self.pending)
    }

    fn input_state(&self) -> InputState {
        self.input
    }

    fn should_quit(&mut self) -> bool {
        self.should_quit
    }

    fn finalize(&mut self, scene: &Scene) -> Result<(), Self::Error> {
        self.update(scene)
    }
}
