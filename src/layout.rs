//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where the username field and the suggestion popup
//! were drawn on the last frame, and `region_at()` maps a screen position back
//! to the component under it.

mod layout_regions;

pub use layout_hit_test::{region_at, suggestion_target};
pub use layout_regions::{LayoutRegions, Region};

#[cfg(test)]
#[path = "layout/layout_hit_test_tests.rs"]
mod layout_hit_test_tests;
