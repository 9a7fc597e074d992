//! Full-viewport animated snowfall overlay.
//!
//! Simulates a pool of drifting flakes on a canvas layered over the page
//! content, redrawn once per animation frame:
//! - Population scales with viewport area and regenerates on resize
//! - Flakes sway on a shared oscillation, fall, and wrap at the edges
//! - Stopping the overlay cancels the scheduled frame and clears the canvas
//!
//! # Example
//!
//! ```ignore
//! let snow_on = RwSignal::new(true);
//!
//! view! { <SnowCanvas enabled=snow_on /> }
//! ```

mod component;
mod particles;
mod render;
pub mod theme;
mod types;

pub use component::SnowCanvas;
pub use theme::SnowStyle;
pub use types::OverlayConfig;
