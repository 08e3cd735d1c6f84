//! Shared core for the front desk calculators
//!
//! Holds the clinic billing and shop sales rules used by the console
//! programs: the records, their derived amounts, input validation and the
//! single-slot services that keep the last record of a session.

pub mod error;
pub mod models;
pub mod services;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use services::*;
pub use types::*;
pub use validation::*;
