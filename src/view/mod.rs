//! View layer - projections of the model
//!
//! `geometry` lays out tab bars, `hit_test` maps pointer coordinates back to
//! model ids, and `html` renders the page.

pub mod geometry;
pub mod html;

pub use geometry::{TabSlot, WindowGeometry};
pub use hit_test::{hit_test, resolve_drop, HitTarget};
