//! Session module for vidsum
//!
//! Holds the state of one interactive session and drives summary generation.

mod controller;
mod state;

pub use controller::{Outcome, SessionController, FETCH_ERROR_MESSAGE};
pub use state::{Reply, SessionInput, SessionState, SummaryResult};
