use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use glam::Vec2;
use pixelforge_core::{Instant, Viewport, World};
use pixelforge_editor::{ActiveWorld, EditorSession, CATALOG};
use pixelforge_engine::{Engine, InputHub, Surface};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, ModifiersState, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::AppConfig;
use crate::graphics::GpuSurface;

const CONTROLS: &str = "Tab/Shift+Tab select, 1-5 place asset, arrows move (Shift: 1px), \
Delete remove, Esc deselect, Ctrl+S save, F5/Enter play, Esc in play returns to the editor";

/// Editor keyboard commands.
#[derive(Debug, Clone, Copy, PartialEq)]
enum EditCommand {
    Play,
    Save,
    Select { forward: bool },
    ClearSelection,
    Delete,
    Place(usize),
    Nudge { direction: Vec2, fine: bool },
}

fn edit_command(code: KeyCode, mods: ModifiersState) -> Option<EditCommand> {
    let cmd = match code {
        KeyCode::F5 | KeyCode::Enter | KeyCode::NumpadEnter => EditCommand::Play,
        KeyCode::KeyS if mods.control_key() || mods.super_key() => EditCommand::Save,
        KeyCode::Tab => EditCommand::Select { forward: !mods.shift_key() },
        KeyCode::Escape => EditCommand::ClearSelection,
        KeyCode::Delete | KeyCode::Backspace => EditCommand::Delete,
        KeyCode::Digit1 => EditCommand::Place(0),
        KeyCode::Digit2 => EditCommand::Place(1),
        KeyCode::Digit3 => EditCommand::Place(2),
        KeyCode::Digit4 => EditCommand::Place(3),
        KeyCode::Digit5 => EditCommand::Place(4),
        KeyCode::ArrowUp => EditCommand::Nudge { direction: Vec2::NEG_Y, fine: mods.shift_key() },
        KeyCode::ArrowDown => EditCommand::Nudge { direction: Vec2::Y, fine: mods.shift_key() },
        KeyCode::ArrowLeft => EditCommand::Nudge { direction: Vec2::NEG_X, fine: mods.shift_key() },
        KeyCode::ArrowRight => EditCommand::Nudge { direction: Vec2::X, fine: mods.shift_key() },
        _ => return None,
    };
    Some(cmd)
}

/// The code the play-mode input tracker sees for a physical key: winit's
/// key name, e.g. `KeyW` or `ArrowUp`.
fn input_code(code: KeyCode) -> String {
    format!("{code:?}")
}

struct Runner {
    config: AppConfig,
    viewport: Viewport,
    window: Option<Arc<Window>>,
    /// Owned here while editing; moved into the engine while playing.
    canvas: Option<GpuSurface>,
    engine: Option<Engine<GpuSurface>>,
    session: EditorSession,
    active: ActiveWorld,
    hub: InputHub,
    modifiers: ModifiersState,
    error: Option<anyhow::Error>,
}

impl Runner {
    fn new(config: AppConfig, world: World) -> Self {
        Self {
            viewport: Viewport::new(config.width, config.height),
            config,
            window: None,
            canvas: None,
            engine: None,
            active: ActiveWorld::new(world.clone()),
            session: EditorSession::new(world),
            hub: InputHub::new(),
            modifiers: ModifiersState::empty(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn set_title(&self, suffix: Option<&str>) {
        if let Some(window) = &self.window {
            match suffix {
                Some(s) => window.set_title(&format!("{} [{s}]", self.config.title)),
                None => window.set_title(&self.config.title),
            }
        }
    }

    // ── Mode switches ──────────────────────────────────────────────────────

    fn start_play(&mut self, event_loop: &ActiveEventLoop) {
        let Some(canvas) = self.canvas.take() else {
            return;
        };
        self.save();
        match Engine::new(canvas, self.viewport) {
            Ok(engine) => {
                let mut engine = engine.with_policy(self.config.movement.into());
                engine.start(self.active.world(), &self.hub, Instant::now());
                self.engine = Some(engine);
                self.set_title(Some("play"));
            }
            Err(e) => self.fail(event_loop, anyhow!(e).context("enter play mode")),
        }
    }

    fn stop_play(&mut self) {
        if let Some(engine) = self.engine.take() {
            self.canvas = Some(engine.into_surface());
            self.set_title(None);
        }
    }

    // ── Editing ────────────────────────────────────────────────────────────

    fn save(&mut self) {
        self.session.save(&mut self.active);
        if let Some(path) = &self.config.world {
            if let Err(e) = write_snapshot(path, self.active.world()) {
                log::error!("{e:#}");
            }
        }
    }

    fn apply(&mut self, event_loop: &ActiveEventLoop, cmd: EditCommand) {
        match cmd {
            EditCommand::Play => self.start_play(event_loop),
            EditCommand::Save => self.save(),
            EditCommand::Select { forward } => {
                if let Some(id) = self.session.cycle_selection(forward) {
                    log::info!("selected `{id}`");
                }
            }
            EditCommand::ClearSelection => self.session.clear_selection(),
            EditCommand::Delete => {
                self.session.delete_selected();
            }
            EditCommand::Place(index) => {
                if let Some(template) = CATALOG.get(index) {
                    match self.session.add_from_asset(template) {
                        Ok(id) => log::info!("placed {} as `{id}`", template.name),
                        Err(e) => log::error!("could not place {}: {e}", template.name),
                    }
                }
            }
            EditCommand::Nudge { direction, fine } => {
                let step = if fine { 1.0 } else { self.session.world().settings.tile_size };
                self.session.nudge(direction * step);
            }
        }
    }

    fn on_key(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let pressed = event.state == ElementState::Pressed;

        if self.engine.is_some() {
            if code == KeyCode::Escape {
                if pressed {
                    self.stop_play();
                }
                return;
            }
            let code = input_code(code);
            if pressed {
                self.hub.press(&code);
            } else {
                self.hub.release(&code);
            }
            return;
        }

        if pressed {
            if let Some(cmd) = edit_command(code, self.modifiers) {
                self.apply(event_loop, cmd);
            }
        }
    }
}

fn write_snapshot(path: &Path, world: &World) -> Result<()> {
    let json = world.to_json_pretty().context("serialize world")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

impl ApplicationHandler for Runner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, anyhow!(e).context("create window")),
        };

        let canvas = (self.viewport.width, self.viewport.height);
        match pollster::block_on(GpuSurface::new(window.clone(), canvas, self.config.vsync)) {
            Ok(surface) => self.canvas = Some(surface),
            Err(e) => return self.fail(event_loop, e.context("initialise graphics")),
        }
        self.window = Some(window);
        log::info!("controls: {CONTROLS}");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(canvas) = &mut self.canvas {
                    canvas.resize(size.width, size.height);
                }
                if let Some(engine) = &mut self.engine {
                    engine.surface_mut().resize(size.width, size.height);
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => self.modifiers = modifiers.state(),
            WindowEvent::KeyboardInput { event, .. } => self.on_key(event_loop, event),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };

        if let Some(engine) = &mut self.engine {
            engine.tick(Instant::now());
        } else if let Some(canvas) = &mut self.canvas {
            canvas.present(&self.session.preview(self.viewport));
        }

        window.request_redraw();
    }
}

pub(crate) fn run_internal(config: AppConfig, world: World) -> Result<()> {
    if config.width == 0 || config.height == 0 {
        bail!("canvas {}x{} has no area", config.width, config.height);
    }
    let mut runner = Runner::new(config, world);
    let event_loop = EventLoop::new().context("create event loop")?;
    // Poll = spin the loop as fast as possible; no sleeping between frames.
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut runner).context("run event loop")?;
    match runner.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
