//! Click-to-launch fireworks over a drifting starfield.
//!
//! [`Show`] owns the simulation: call [`Show::resize`] to mount it,
//! [`Show::request_spawn`] from input handling, and [`Show::frame`] once per
//! refresh with the current [`Settings`]. The resulting [`Surface`] can be
//! written to a terminal with [`Presenter`].

pub mod background;
pub mod color;
pub mod compositor;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod input;
pub mod physics;
pub mod scheduler;
pub mod show;
pub mod spawn;
pub mod surface;
pub mod terminal;

pub use config::Settings;
pub use error::{Error, Result};
pub use scheduler::FrameScheduler;
pub use show::Show;
pub use surface::Surface;
pub use terminal::Presenter;
