//! Action handlers for board mutations

mod handler;

pub use handler::{ActionError, ActionHandler, CreateOutcome, DeleteOutcome};
