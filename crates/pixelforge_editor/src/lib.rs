//! `pixelforge_editor`: authoring operations over a [`World`](pixelforge_core::World).
//!
//! Nothing here draws to a window or reads the keyboard.  The host maps its
//! own input onto [`EditorSession`] calls and presents the draw list returned
//! by [`EditorSession::preview`].
//!
//! ```rust,ignore
//! let mut session = EditorSession::new(starter_world());
//! let id = session.add_from_asset(&CATALOG[0]);
//! session.set_position(Some(64.0), None);
//! session.save(&mut active_world);
//! ```

pub mod assets;
pub mod session;
pub mod sink;
mod starter;

pub use assets::{AssetKind, AssetTemplate, CATALOG};
pub use session::EditorSession;
pub use sink::{ActiveWorld, LogSink, WorldSink};
pub use starter::starter_world;
