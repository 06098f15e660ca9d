pub mod suggestion;
pub mod suggestion_render;
pub mod suggestion_state;

pub use suggestion::{MARKER, MARKER_PREFIX, Suggestion, strip_marker};
pub use suggestion_state::SuggestionList;
