//! Patient bill models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::validation::{ensure_non_negative, require_text};

/// Discount granted to insured patients, as a percentage of the gross amount
pub const STANDARD_INSURANCE_DISCOUNT_PERCENT: Decimal = Decimal::TEN;

/// Input for creating a bill
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBillInput {
    pub bill_id: String,
    pub patient_name: String,
    pub has_insurance: bool,
    pub consultation_fee: Decimal,
    pub lab_charges: Decimal,
    pub medication_charges: Decimal,
}

impl CreateBillInput {
    /// Check every field in prompt order, stopping at the first failure
    pub fn validate(&self) -> CoreResult<()> {
        require_text("bill_id", &self.bill_id)?;
        require_text("patient_name", &self.patient_name)?;
        ensure_non_negative("consultation_fee", self.consultation_fee)?;
        ensure_non_negative("lab_charges", self.lab_charges)?;
        ensure_non_negative("medication_charges", self.medication_charges)?;
        Ok(())
    }
}

/// A patient's bill with its derived totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientBill {
    pub bill_id: String,
    pub patient_name: String,
    pub has_insurance: bool,
    pub consultation_fee: Decimal,
    pub lab_charges: Decimal,
    pub medication_charges: Decimal,
    /// Sum of the three charges
    pub gross_amount: Decimal,
    /// Insurance discount, zero when uninsured
    pub discount_amount: Decimal,
    pub final_payable: Decimal,
    pub created_at: DateTime<Utc>,
}

impl PatientBill {
    /// Build a bill with the standard insurance discount
    pub fn new(input: CreateBillInput) -> CoreResult<Self> {
        Self::with_discount_percent(input, STANDARD_INSURANCE_DISCOUNT_PERCENT)
    }

    /// Build a bill, validating the input and computing gross, discount and final
    /// amounts once.
    pub fn with_discount_percent(input: CreateBillInput, discount_percent: Decimal) -> CoreResult<Self> {
        input.validate()?;
        let totals = BillTotals::compute(
            input.consultation_fee,
            input.lab_charges,
            input.medication_charges,
            input.has_insurance,
            discount_percent,
        )?;

        Ok(Self {
            bill_id: input.bill_id.trim().to_string(),
            patient_name: input.patient_name.trim().to_string(),
            has_insurance: input.has_insurance,
            consultation_fee: input.consultation_fee,
            lab_charges: input.lab_charges,
            medication_charges: input.medication_charges,
            gross_amount: totals.gross_amount,
            discount_amount: totals.discount_amount,
            final_payable: totals.final_payable,
            created_at: Utc::now(),
        })
    }
}

/// Gross, discount and final amounts for a set of charges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillTotals {
    pub gross_amount: Decimal,
    pub discount_amount: Decimal,
    pub final_payable: Decimal,
}

impl BillTotals {
    pub fn compute(
        consultation_fee: Decimal,
        lab_charges: Decimal,
        medication_charges: Decimal,
        has_insurance: bool,
        discount_percent: Decimal,
    ) -> CoreResult<Self> {
        if discount_percent < Decimal::ZERO || discount_percent > Decimal::ONE_HUNDRED {
            return Err(CoreError::validation(
                "discount_percent",
                "must be between 0 and 100",
            ));
        }

        let gross_amount = consultation_fee
            .checked_add(lab_charges)
            .and_then(|sum| sum.checked_add(medication_charges))
            .ok_or_else(|| CoreError::validation("gross_amount", "charges are too large"))?;

        let discount_amount = if has_insurance {
            gross_amount
                .checked_mul(discount_percent)
                .map(|scaled| scaled / Decimal::ONE_HUNDRED)
                .ok_or_else(|| CoreError::validation("discount_amount", "charges are too large"))?
        } else {
            Decimal::ZERO
        };

        Ok(Self {
            gross_amount,
            discount_amount,
            final_payable: gross_amount - discount_amount,
        })
    }
}
