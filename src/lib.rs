//! deck-rs: composable vision-deck renderer.
//!
//! This crate builds the Mishima Chamber of Commerce 80th-anniversary
//! vision deck ("SESERAGISM") as themed HTML pages with embedded chart
//! specifications, behind a surface abstraction that keeps page
//! composition independent of the output target.

pub mod api;
pub mod chart;
pub mod components;
pub mod error;
pub mod pages;
pub mod render;
pub mod telemetry;
pub mod theme;

pub use api::{Deck, DeckConfig};
pub use error::{DeckError, DeckResult};
