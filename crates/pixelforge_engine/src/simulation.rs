//! One simulation tick: keyboard-driven movement followed by the viewport
//! clamp.
//!
//! Both rules are plain functions over component data so they can be tested
//! without an engine.  Gravity from the world settings is deliberately not an
//! input here; nothing defines its behaviour yet.

use glam::Vec2;
use pixelforge_core::{Collider, InputTracker, MoveBindings, PlayerController, Viewport, World};

/// How a controller's `speed` relates to elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementPolicy {
    /// `speed` is pixels per tick; elapsed time is ignored, so perceived
    /// speed follows the display refresh rate.
    #[default]
    PerTick,
    /// `speed` is pixels per second, scaled by the tick's delta.
    PerSecond,
}

impl MovementPolicy {
    /// Multiplier applied to `speed` for a tick lasting `dt` seconds.
    #[inline]
    pub fn scale(self, dt: f32) -> f32 {
        match self {
            MovementPolicy::PerTick => 1.0,
            MovementPolicy::PerSecond => dt,
        }
    }
}

/// Policy used unless the host asks for another.
pub const MOVEMENT_POLICY: MovementPolicy = MovementPolicy::PerTick;

/// Per-tick inputs shared by every entity.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub input: &'a InputTracker,
    pub bindings: &'a MoveBindings,
    pub viewport: Viewport,
    pub policy: MovementPolicy,
    /// Seconds since the previous tick.
    pub dt: f32,
}

/// Displacement produced by `controller` for the held keys.
///
/// A non-zero direction is normalised before scaling, so moving diagonally
/// is exactly as fast as moving along one axis.
pub fn displacement(controller: &PlayerController, ctx: &StepContext<'_>) -> Vec2 {
    let dir = ctx.bindings.direction(ctx.input);
    if dir == Vec2::ZERO {
        return Vec2::ZERO;
    }
    dir.normalize() * controller.speed * ctx.policy.scale(ctx.dt)
}

/// Keep a collider of `size` at `position` inside the viewport.
///
/// The lower bound is applied before the upper one, so a collider larger
/// than the viewport ends up pinned at `viewport - size` (a negative
/// coordinate) rather than at 0.
pub fn clamp_to_viewport(position: Vec2, size: Vec2, viewport: Viewport) -> Vec2 {
    let max = Vec2::new(viewport.width_f32(), viewport.height_f32()) - size;
    position.max(Vec2::ZERO).min(max)
}

/// Advance every entity in `world` by one tick.
///
/// Entities with a [`PlayerController`] move; entities with a [`Collider`]
/// are clamped whether or not they move.  Nothing else is touched.
pub fn step_world(world: &mut World, ctx: &StepContext<'_>) {
    for entity in world.iter_mut() {
        let controller = entity.components.get::<PlayerController>().copied();
        let collider = entity.components.get::<Collider>().copied();
        let transform = entity.components.transform_mut();

        if let Some(controller) = controller {
            transform.position += displacement(&controller, ctx);
        }
        if let Some(collider) = collider {
            transform.position = clamp_to_viewport(transform.position, collider.size, ctx.viewport);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1024, 576);

    fn held(codes: &[&str]) -> InputTracker {
        let mut input = InputTracker::new();
        for c in codes {
            input.on_press(*c);
        }
        input
    }

    fn ctx<'a>(input: &'a InputTracker, bindings: &'a MoveBindings) -> StepContext<'a> {
        StepContext {
            input,
            bindings,
            viewport: VIEWPORT,
            policy: MovementPolicy::PerTick,
            dt: 0.016,
        }
    }

    fn world(collider: bool) -> World {
        let mut w = World::new("w", "Test", "tester");
        let mut b = w
            .spawn("p", "Player")
            .with_position(Vec2::new(100.0, 100.0))
            .with(PlayerController { speed: 5.0 });
        if collider {
            b = b.with(Collider { size: Vec2::splat(32.0), is_trigger: false });
        }
        b.build().unwrap();
        w
    }

    #[test]
    fn diagonal_is_normalised() {
        let bindings = MoveBindings::wasd_and_arrows();
        for keys in [["KeyW", "KeyD"], ["ArrowUp", "ArrowRight"], ["KeyS", "KeyA"]] {
            let input = held(&keys);
            let d = displacement(&PlayerController { speed: 5.0 }, &ctx(&input, &bindings));
            assert!((d.length() - 5.0).abs() < 1e-5, "{keys:?} -> {d}");
        }
    }

    #[test]
    fn opposing_keys_cancel_per_axis() {
        let bindings = MoveBindings::wasd_and_arrows();
        let input = held(&["KeyW", "KeyS", "KeyD"]);
        let d = displacement(&PlayerController { speed: 5.0 }, &ctx(&input, &bindings));
        assert_eq!(d, Vec2::new(5.0, 0.0));

        let input = held(&["KeyA", "ArrowRight"]);
        let d = displacement(&PlayerController { speed: 5.0 }, &ctx(&input, &bindings));
        assert_eq!(d, Vec2::ZERO);
    }

    #[test]
    fn per_second_policy_scales_by_dt() {
        let bindings = MoveBindings::wasd_and_arrows();
        let input = held(&["KeyD"]);
        let mut c = ctx(&input, &bindings);
        c.policy = MovementPolicy::PerSecond;
        c.dt = 0.5;
        let d = displacement(&PlayerController { speed: 100.0 }, &c);
        assert_eq!(d, Vec2::new(50.0, 0.0));
        assert_eq!(MOVEMENT_POLICY, MovementPolicy::PerTick);
    }

    #[test]
    fn clamp_pins_to_viewport_edges() {
        let p = clamp_to_viewport(Vec2::new(2000.0, -50.0), Vec2::splat(32.0), VIEWPORT);
        assert_eq!(p, Vec2::new(992.0, 0.0));
    }

    #[test]
    fn clamp_is_idempotent() {
        for raw in [
            Vec2::new(2000.0, -50.0),
            Vec2::new(-3.0, 900.0),
            Vec2::new(500.0, 200.0),
        ] {
            let once = clamp_to_viewport(raw, Vec2::splat(32.0), VIEWPORT);
            let twice = clamp_to_viewport(once, Vec2::splat(32.0), VIEWPORT);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn oversized_collider_pins_to_upper_bound() {
        let p = clamp_to_viewport(Vec2::new(10.0, 10.0), Vec2::new(2048.0, 32.0), VIEWPORT);
        assert_eq!(p, Vec2::new(-1024.0, 10.0));
    }

    #[test]
    fn step_moves_and_clamps() {
        let bindings = MoveBindings::wasd_and_arrows();
        let mut w = world(true);
        w.get_mut("p").unwrap().components.transform_mut().position = Vec2::new(990.0, 2.0);
        let input = held(&["KeyD", "KeyW"]);
        step_world(&mut w, &ctx(&input, &bindings));
        assert_eq!(w.position("p"), Some(Vec2::new(992.0, 0.0)));
    }

    #[test]
    fn uncollided_entities_leave_the_screen() {
        let bindings = MoveBindings::wasd_and_arrows();
        let mut w = world(false);
        w.get_mut("p").unwrap().components.transform_mut().position = Vec2::new(1500.0, -300.0);
        let input = held(&["KeyD"]);
        step_world(&mut w, &ctx(&input, &bindings));
        assert_eq!(w.position("p"), Some(Vec2::new(1505.0, -300.0)));
    }

    #[test]
    fn colliders_clamp_without_a_controller() {
        let bindings = MoveBindings::wasd_and_arrows();
        let mut w = World::new("w", "Test", "tester");
        w.spawn("crate", "Crate")
            .with_position(Vec2::new(-40.0, 600.0))
            .with(Collider { size: Vec2::splat(32.0), is_trigger: false })
            .build()
            .unwrap();
        let input = held(&["KeyD"]);
        step_world(&mut w, &ctx(&input, &bindings));
        assert_eq!(w.position("crate"), Some(Vec2::new(0.0, 544.0)));
    }

    #[test]
    fn unknown_keys_have_no_effect() {
        let bindings = MoveBindings::wasd_and_arrows();
        let mut w = world(true);
        let input = held(&["Space", "KeyQ"]);
        step_world(&mut w, &ctx(&input, &bindings));
        assert_eq!(w.position("p"), Some(Vec2::new(100.0, 100.0)));
    }
}
