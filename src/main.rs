mod animation;
mod app;
mod camera;
mod config;
mod constants;
mod enemy;
mod events;
mod floating_text;
mod input;
mod inventory;
mod player;
mod renderer;
mod spawner;
mod sprites;
mod time_system;
mod ui;
mod world;

use config::GameConfig;
use constants::*;
use renderer::Renderer;
use sprites::SpriteLibrary;
use std::path::Path;
use std::time::Instant;
use time_system::FixedStep;
use world::World;

use anyhow::{anyhow, Result};
use glutin::prelude::*;
use glutin::surface::WindowSurface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

fn main() -> Result<()> {
    // Info and up unless RUST_LOG says otherwise
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    match app.startup_error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct App {
    state: Option<AppState>,
    startup_error: Option<anyhow::Error>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    egui_glow: EguiGlow,

    // Rendering
    renderer: Renderer,

    // Game state
    world: World,
    rng: StdRng,

    // Input and timing
    input: input::InputState,
    clock: FixedStep,
}

impl App {
    fn new() -> Self {
        Self {
            state: None,
            startup_error: None,
        }
    }
}

impl AppState {
    fn new(event_loop: &ActiveEventLoop) -> Result<Self> {
        let config = GameConfig::load(Path::new(config::CONFIG_PATH))?;

        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = app::create_window(event_loop)?;

        let mut library = SpriteLibrary::new();
        let world = World::load(&config, &mut library)?;

        let mut renderer = Renderer::new(gl).map_err(|e| anyhow!("failed to create renderer: {}", e))?;
        renderer
            .upload_sheets(&library)
            .map_err(|e| anyhow!("failed to upload sprite sheets: {}", e))?;
        let size = window.inner_size();
        renderer.resize(size.width as i32, size.height as i32);
        log::info!("{} textures on the GPU", renderer.sheet_count());

        Ok(Self {
            window,
            gl_surface,
            gl_context,
            egui_glow,
            renderer,
            world,
            rng: StdRng::from_entropy(),
            input: input::InputState::new(),
            clock: FixedStep::new(TICKS_PER_SECOND, MAX_TICKS_PER_FRAME),
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match AppState::new(event_loop) {
            Ok(state) => {
                log::info!("{} ready", WINDOW_TITLE);
                self.state = Some(state);
            }
            Err(err) => {
                log::error!("startup failed: {:#}", err);
                self.startup_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // egui only paints overlays; every event still reaches the game
        let _ = state.egui_glow.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
                state.renderer.resize(size.width as i32, size.height as i32);
            }
            WindowEvent::Focused(false) => {
                state.input.release_all();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => {
                            if key == KeyCode::Escape {
                                event_loop.exit();
                            }
                            state.input.key_down(key);
                        }
                        ElementState::Released => {
                            state.input.key_up(key);
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                // Game logic works in logical pixels
                let logical = position.to_logical::<f32>(state.window.scale_factor());
                state.input.pointer_moved(Vec2::new(logical.x, logical.y));
            }
            WindowEvent::MouseInput {
                state: btn_state,
                button: MouseButton::Left,
                ..
            } => {
                state.input.pointer_button(btn_state == ElementState::Pressed);
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl AppState {
    fn update_and_render(&mut self) {
        puffin::profile_function!();

        let ticks = self.clock.ticks_due(Instant::now());
        {
            puffin::profile_scope!("simulate");
            for _ in 0..ticks {
                let snapshot = self.input.snapshot();
                self.world.update(&snapshot, &mut self.rng);
            }
        }
        self.report_events();

        // Render
        self.renderer.clear(ui::style::BACKGROUND);
        let sprites = renderer::collect_sprites(&self.world);
        self.renderer.render_sprites(&self.world.camera, &sprites);

        let world = &self.world;
        let pointer = self.input.pointer_pos;
        self.egui_glow.run(&self.window, |ctx| {
            ui::draw_game_ui(ctx, world, pointer);
        });
        self.egui_glow.paint(&self.window);

        if let Err(err) = self.gl_surface.swap_buffers(&self.gl_context) {
            log::error!("swap_buffers failed: {}", err);
        }
    }

    /// Log what happened during this frame's ticks
    fn report_events(&mut self) {
        for event in self.world.events.drain() {
            if event.is_routine() {
                log::debug!("{}", event);
            } else {
                log::info!("{}", event);
            }
        }
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.egui_glow.destroy();
    }
}
