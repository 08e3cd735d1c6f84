//! Menu handlers for each console

pub mod clinic;
pub mod mart;

pub use clinic::{ClinicDesk, CLINIC_MENU};
pub use mart::{MartCounter, MART_MENU};
