//! Common types used by both calculators

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places shown for money and percentages
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Holds at most one live record.
///
/// The slot is owned by whoever drives the session and handed to the
/// services by reference; there is no process-wide state.
#[derive(Debug, Clone)]
pub struct Slot<T> {
    current: Option<T>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is stored and return a reference to the new record
    pub fn replace(&mut self, value: T) -> &T {
        self.current.insert(value)
    }

    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.current.as_mut()
    }

    /// Empty the slot, returning the previous record if there was one
    pub fn take(&mut self) -> Option<T> {
        self.current.take()
    }

    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }
}

/// Round an amount for display (two places, midpoint away from zero)
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount with exactly two decimal places
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_for_display(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_slot_starts_empty() {
        let slot: Slot<u32> = Slot::new();
        assert!(!slot.is_occupied());
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn test_slot_replace_overwrites() {
        let mut slot = Slot::new();
        slot.replace(1);
        assert_eq!(*slot.replace(2), 2);
        assert_eq!(slot.get(), Some(&2));
    }

    #[test]
    fn test_slot_take_is_idempotent() {
        let mut slot = Slot::new();
        slot.replace("bill");
        assert_eq!(slot.take(), Some("bill"));
        assert_eq!(slot.take(), None);
        assert!(!slot.is_occupied());
    }

    #[test]
    fn test_format_amount_pads_and_rounds() {
        assert_eq!(format_amount(Decimal::from(180)), "180.00");
        assert_eq!(format_amount(Decimal::from_str("18.005").unwrap()), "18.01");
        assert_eq!(format_amount(Decimal::from_str("33.3333").unwrap()), "33.33");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }
}
