//! skq - interactive skill search against a GraphQL endpoint.
//!
//! Type into the search field and every change of the text fires a
//! wildcarded `skills` query; the results pane shows whichever response
//! arrived last.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod suggest;

pub use app::App;
pub use error::SkqError;
pub use suggest::{Skill, SuggestClient, SuggestError};
