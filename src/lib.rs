//! Resume match client library

pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod session;
pub mod view;

pub use config::Config;
pub use controller::{FlowOutcome, PageController};
pub use error::{MatchClientError, Result};
