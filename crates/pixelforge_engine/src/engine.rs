//! Play-mode engine loop.
//!
//! The engine does not own a timer or a thread.  The host calls
//! [`Engine::tick`] from its per-frame callback and keeps doing so for as long
//! as the engine answers [`TickOutcome::Rendered`]; once it answers
//! [`TickOutcome::Halted`] the host stops scheduling.
//!
//! ```rust,ignore
//! let mut engine = Engine::new(framebuffer, Viewport::new(1024, 576))?;
//! engine.start(&world, &hub, Instant::now());
//! while engine.tick(Instant::now()).is_rendered() {
//!     // wait for the next display refresh
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use pixelforge_core::{FrameClock, Instant, InputTracker, MoveBindings, Time, Viewport, World};
use pixelforge_renderer::{render_world, FrameStyle};

use crate::error::EngineError;
use crate::input_source::{InputHub, Subscription};
use crate::simulation::{step_world, MovementPolicy, StepContext, MOVEMENT_POLICY};
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running,
}

/// What a call to [`Engine::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// A frame was simulated and presented; schedule the next tick.
    Rendered(Time),
    /// The engine is not running; nothing happened and nothing should be
    /// scheduled.
    Halted,
}

impl TickOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, TickOutcome::Rendered(_))
    }
}

/// Runs a private copy of a world: simulate, render, present, once per tick.
pub struct Engine<S: Surface> {
    surface: S,
    viewport: Viewport,
    bindings: MoveBindings,
    policy: MovementPolicy,
    style: FrameStyle,
    state: EngineState,
    /// Play-session copy.  Kept after `stop` for inspection, replaced by the
    /// next `start`.
    world: Option<World>,
    input: Rc<RefCell<InputTracker>>,
    subscription: Option<Subscription>,
    clock: Option<FrameClock>,
}

impl<S: Surface> Engine<S> {
    /// Bind an engine to `surface`.
    ///
    /// Fails when the surface cannot be drawn to or the viewport has no
    /// area; an engine that was constructed can always start.
    pub fn new(surface: S, viewport: Viewport) -> Result<Self, EngineError> {
        if !surface.is_drawable() {
            let (width, height) = surface.size();
            return Err(EngineError::SurfaceUnavailable { width, height });
        }
        if viewport.is_empty() {
            return Err(EngineError::EmptyViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            surface,
            viewport,
            bindings: MoveBindings::wasd_and_arrows(),
            policy: MOVEMENT_POLICY,
            style: FrameStyle::play(),
            state: EngineState::Idle,
            world: None,
            input: Rc::new(RefCell::new(InputTracker::new())),
            subscription: None,
            clock: None,
        })
    }

    pub fn with_policy(mut self, policy: MovementPolicy) -> Self {
        self.policy = policy;
        self
    }

    // ── Lifecycle ──────────────────────────────────────────────────────────

    /// Begin a play session on a deep copy of `world`.
    ///
    /// `now` becomes the tick origin.  The engine's tracker is cleared and
    /// attached to `input` until [`stop`](Self::stop).  Returns `false` (and
    /// changes nothing) if the engine is already running.
    pub fn start(&mut self, world: &World, input: &InputHub, now: Instant) -> bool {
        if self.state == EngineState::Running {
            log::debug!("engine already running; start ignored");
            return false;
        }
        self.world = Some(world.clone());
        self.clock = Some(FrameClock::starting_at(now));
        self.input.borrow_mut().clear();
        self.subscription = Some(input.subscribe(self.input.clone()));
        self.state = EngineState::Running;
        log::info!(
            "play session started: `{}` ({} entities, {}x{})",
            world.name,
            world.len(),
            self.viewport.width,
            self.viewport.height
        );
        true
    }

    /// Simulate and present one frame observed at `now`.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if self.state != EngineState::Running {
            return TickOutcome::Halted;
        }
        let (Some(world), Some(clock)) = (self.world.as_mut(), self.clock.as_mut()) else {
            return TickOutcome::Halted;
        };

        let time = clock.tick_at(now);
        {
            let input = self.input.borrow();
            let ctx = StepContext {
                input: &input,
                bindings: &self.bindings,
                viewport: self.viewport,
                policy: self.policy,
                dt: time.delta,
            };
            step_world(world, &ctx);
        }

        let frame = render_world(world, self.viewport, &self.style);
        self.surface.present(&frame);
        log::trace!("tick {} ({:.4}s, {} draw commands)", time.frame_count, time.delta, frame.len());
        TickOutcome::Rendered(time)
    }

    /// End the play session.  Returns `false` if it was not running.
    ///
    /// Already-scheduled ticks become no-ops; the input tracker is detached.
    pub fn stop(&mut self) -> bool {
        if self.state != EngineState::Running {
            return false;
        }
        self.state = EngineState::Idle;
        self.subscription = None;
        let frames = self.clock.as_ref().map_or(0, FrameClock::frame_count);
        log::info!("play session stopped after {frames} ticks");
        true
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    /// The play-session world, if a session was ever started.
    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn world_mut(&mut self) -> Option<&mut World> {
        self.world.as_mut()
    }

    /// Whether the engine currently sees `code` as held.
    ///
    /// The tracker is shared with the input hub, so no borrow of it outlives
    /// this call.
    pub fn is_held(&self, code: &str) -> bool {
        self.input.borrow().is_held(code)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Tear the engine down and give the surface back to the host.
    pub fn into_surface(mut self) -> S {
        self.stop();
        self.surface
    }
}
