//! Clinic billing service: create, view and clear the last bill

use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};
use crate::models::{CreateBillInput, PatientBill, STANDARD_INSURANCE_DISCOUNT_PERCENT};
use crate::types::Slot;

/// Billing service holding the last bill created in this session
#[derive(Debug, Clone)]
pub struct BillingService {
    last_bill: Slot<PatientBill>,
    discount_percent: Decimal,
}

impl Default for BillingService {
    fn default() -> Self {
        Self::new()
    }
}

impl BillingService {
    pub fn new() -> Self {
        Self::with_discount_percent(STANDARD_INSURANCE_DISCOUNT_PERCENT)
    }

    pub fn with_discount_percent(discount_percent: Decimal) -> Self {
        Self {
            last_bill: Slot::new(),
            discount_percent,
        }
    }

    pub fn discount_percent(&self) -> Decimal {
        self.discount_percent
    }

    /// Create a bill and make it the last bill.
    ///
    /// On a validation failure the previously stored bill is kept.
    pub fn create_bill(&mut self, input: CreateBillInput) -> CoreResult<&PatientBill> {
        let bill = PatientBill::with_discount_percent(input, self.discount_percent).map_err(|e| {
            tracing::warn!(error = %e, "Rejected bill");
            e
        })?;

        tracing::info!(
            bill_id = %bill.bill_id,
            insured = bill.has_insurance,
            final_payable = %bill.final_payable,
            "Bill created"
        );
        Ok(self.last_bill.replace(bill))
    }

    /// Get the last bill
    pub fn view_last_bill(&self) -> CoreResult<&PatientBill> {
        tracing::debug!(occupied = self.last_bill.is_occupied(), "Viewing last bill");
        self.last_bill.get().ok_or(CoreError::NotFound("Bill"))
    }

    /// Drop the last bill. Clearing an empty slot is a no-op.
    pub fn clear_last_bill(&mut self) -> Option<PatientBill> {
        let removed = self.last_bill.take();
        match &removed {
            Some(bill) => tracing::info!(bill_id = %bill.bill_id, "Last bill cleared"),
            None => tracing::debug!("Clear requested with no bill stored"),
        }
        removed
    }

    pub fn has_bill(&self) -> bool {
        self.last_bill.is_occupied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: &str, insured: bool) -> CreateBillInput {
        CreateBillInput {
            bill_id: id.into(),
            patient_name: "Alice".into(),
            has_insurance: insured,
            consultation_fee: Decimal::from(100),
            lab_charges: Decimal::from(50),
            medication_charges: Decimal::from(30),
        }
    }

    #[test]
    fn test_empty_service_has_no_bill() {
        let service = BillingService::new();
        assert!(!service.has_bill());
        assert_eq!(service.view_last_bill().unwrap_err(), CoreError::NotFound("Bill"));
    }

    #[test]
    fn test_discount_rate() {
        assert_eq!(BillingService::new().discount_percent(), Decimal::TEN);
        let service = BillingService::with_discount_percent(Decimal::from(15));
        assert_eq!(service.discount_percent(), Decimal::from(15));
    }

    #[test]
    fn test_create_replaces_previous_bill() {
        let mut service = BillingService::new();
        service.create_bill(input("B1", true)).unwrap();
        service.create_bill(input("B2", false)).unwrap();
        assert_eq!(service.view_last_bill().unwrap().bill_id, "B2");
    }

    #[test]
    fn test_rejected_create_keeps_previous_bill() {
        let mut service = BillingService::new();
        service.create_bill(input("B1", true)).unwrap();
        assert!(service.create_bill(input("   ", true)).is_err());
        assert_eq!(service.view_last_bill().unwrap().bill_id, "B1");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut service = BillingService::new();
        service.create_bill(input("B1", true)).unwrap();
        assert!(service.clear_last_bill().is_some());
        assert!(service.clear_last_bill().is_none());
        assert!(service.view_last_bill().unwrap_err().is_not_found());
    }
}
