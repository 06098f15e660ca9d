//! usersuggest: a terminal username picker backed by a search endpoint.
//!
//! The core is [`controller::SuggestionController`], which binds one text
//! input, one suggestion list and one lookup channel. Everything else is the
//! terminal shell around it.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod lookup;
pub mod notification;
pub mod suggestions;
pub mod widgets;


pub use error::SuggestError;
