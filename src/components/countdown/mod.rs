//! Live countdown to the next Dec 25.
//!
//! Splits into the DOM-free arithmetic ([`time`]) and the component that
//! owns the once-per-second refresh ([`Countdown`]).

mod component;
pub mod time;

pub use component::Countdown;
