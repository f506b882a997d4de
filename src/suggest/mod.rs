//! Live skill suggestions from the GraphQL endpoint.
//!
//! The pipeline: every input change sends one wildcarded request to the
//! worker thread, the worker queries the endpoint and renders the result
//! into display text, and the UI loop applies responses in arrival order.

mod client;
mod policy;
mod render;
mod state;
mod types;
mod worker;

// Re-export public types
pub use client::{SuggestClient, SuggestError};
pub use policy::LatestWinsDisplay;
pub use render::{NO_SUCH_SKILLS, render_skills};
pub use state::{SuggestRequest, SuggestResponse, SuggestState};
pub use types::Skill;
pub use worker::spawn_worker;
