//! Freehand drawing overlay engine.
//!
//! Converts noisy pointer-gesture samples into smoothed cubic Bezier stroke
//! segments, rasterizes them immediately onto a persistent alpha overlay in
//! draw or erase mode, and publishes immutable snapshots of the overlay on a
//! frame clock for a display compositor to layer above a background image.
//!
//! Embedders wire a [`session::DrawingSession`] between their gesture source,
//! layout/sizing events, and display path; [`capture`] handles on-demand
//! PNG export of the accumulated drawing.

pub mod capture;
pub mod config;
pub mod draw;
pub mod input;
pub mod session;

pub use config::Config;
