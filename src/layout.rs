//! Layout module for tracking UI component regions
//!
//! Rendering records where each form field and the suggestion panel were
//! drawn; `region_at()` answers which of them sits under a mouse position.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
