//! Core types and service wiring for the tambang fare calculator.

/// Ordered catalog of car variants grouped by model.
pub mod catalog;
/// Loading catalogs from TOML files.
pub mod config;
/// The fare formula and its surcharge multipliers.
pub mod fare;
/// Parsing of raw user input into fare parameters.
pub mod input;
/// Subscriber setup shared by the front ends.
pub mod logging;
/// Domain models shared by all front ends.
pub mod model;
/// Error type and the catalog source trait.
pub mod ports;
/// Text rendering of fare summaries and receipts.
pub mod receipt;
/// High-level service facade used by clients.
pub mod service;

pub use catalog::*;
pub use config::*;
pub use fare::*;
pub use model::*;
pub use ports::*;
pub use receipt::*;
pub use service::*;
