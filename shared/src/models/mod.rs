//! Domain models for the clinic and shop calculators

mod bill;
mod sale;

pub use bill::*;
pub use sale::*;
