//! Front desk consoles
//!
//! Interactive menus for the MediSure Clinic billing desk and the QuickMart
//! Traders sales counter, built on the `shared` calculators.

pub mod config;
pub mod error;
pub mod handlers;
pub mod menu;
pub mod telemetry;
pub mod terminal;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::{ClinicDesk, MartCounter};
pub use terminal::Terminal;
