//! # Joystick Feedback Core
//!
//! Board-independent logic for the micro:bit joystick demo:
//!
//! - [`mapper`]: stick displacement → output intensity and cursor position
//! - [`debounce`]: one shared 200 ms gate for all buttons
//! - [`oneshot`]: single cancellable timeout over an injected [`Scheduler`]
//! - [`feedback`]: button state machine (mode toggle, LED slot ring, glyphs)
//! - [`control`]: the 100 ms polling loop
//!
//! Hardware is reached only through the traits in [`io`], so everything here
//! runs on the host under `cargo test`. The firmware binary (feature
//! `firmware`) supplies the micro:bit implementations.
#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod control;
pub mod debounce;
pub mod feedback;
pub mod frame;
pub mod glyph;
pub mod io;
pub mod mapper;
pub mod oneshot;
pub mod shared;

#[cfg(test)]
mod scenarios;
#[cfg(test)]
mod sim;

pub use config::*;
pub use control::*;
pub use debounce::{Button, ButtonEvent, DebounceGate};
pub use feedback::*;
pub use frame::*;
pub use glyph::*;
pub use io::*;
pub use mapper::*;
pub use oneshot::*;
pub use shared::*;

pub use embassy_time::{Duration, Instant};

use rtt_target::rprintln;
