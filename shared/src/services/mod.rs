//! Session-level operations over the single-slot stores

pub mod billing;
pub mod sales;

pub use billing::BillingService;
pub use sales::SalesService;
