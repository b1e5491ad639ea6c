//! Student chat: ask the teaching assistant a question
//!
//! Structure:
//! - api.rs: `POST /ask` client
//! - state.rs: transcript state machine (no browser dependencies)
//! - view.rs: `AskQuestionPage` component

pub mod api;
pub mod state;
pub mod view;

pub use view::AskQuestionPage;
