// lib.rs - Animated Conway's Game of Life board
//
// The window shell drives a `GridEngine` once per frame: `render_frame` while
// the mouse is up, `handle_click` while it is held. Cells paint themselves onto
// a `Surface` and fade between colors whenever their state changes.

pub mod cell;
pub mod clock;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod rule;
pub mod surface;

pub use cell::{Animation, Cell, ANIMATION_DURATION};
pub use clock::{GenerationClock, ANIMATION_COUNTDOWN};
pub use color::{Palette, Rgb};
pub use config::BoardConfig;
pub use engine::GridEngine;
pub use error::{LifeError, LifeResult};
pub use surface::{Canvas, PixelRect, Surface};
