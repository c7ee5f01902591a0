//! `pixelforge_engine`: runs a world in play mode.
//!
//! | Module         | Responsibility                                        |
//! |----------------|-------------------------------------------------------|
//! | `simulation`   | movement + viewport clamp for one tick                |
//! | `input_source` | `InputHub`: host key events, scoped listeners         |
//! | `surface`      | `Surface`: where a finished `DrawList` is presented   |
//! | `engine`       | `Engine`: start / tick / stop over a private world    |

pub mod engine;
pub mod error;
pub mod input_source;
pub mod simulation;
pub mod surface;

pub use engine::{Engine, EngineState, TickOutcome};
pub use error::EngineError;
pub use input_source::{InputHub, Subscription};
pub use simulation::{
    clamp_to_viewport, displacement, step_world, MovementPolicy, StepContext, MOVEMENT_POLICY,
};
pub use surface::Surface;
