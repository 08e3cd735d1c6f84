//! Sale transaction models and the profit/loss calculation

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::validation::{ensure_non_negative, ensure_positive, require_text};

/// Input for recording a sale
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransactionInput {
    pub invoice_no: String,
    pub customer_name: String,
    pub item_name: String,
    pub quantity: u32,
    /// Total purchase cost
    pub purchase_amount: Decimal,
    /// Total selling price
    pub selling_amount: Decimal,
}

impl CreateTransactionInput {
    pub fn validate(&self) -> CoreResult<()> {
        require_text("invoice_no", &self.invoice_no)?;
        require_text("customer_name", &self.customer_name)?;
        require_text("item_name", &self.item_name)?;
        if self.quantity == 0 {
            return Err(CoreError::validation("quantity", "must be greater than zero"));
        }
        ensure_positive("purchase_amount", self.purchase_amount)?;
        ensure_non_negative("selling_amount", self.selling_amount)?;
        Ok(())
    }
}

/// Outcome of a sale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProfitStatus {
    #[serde(rename = "PROFIT")]
    Profit,
    #[serde(rename = "LOSS")]
    Loss,
    #[serde(rename = "BREAK-EVEN")]
    BreakEven,
}

impl std::fmt::Display for ProfitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfitStatus::Profit => write!(f, "PROFIT"),
            ProfitStatus::Loss => write!(f, "LOSS"),
            ProfitStatus::BreakEven => write!(f, "BREAK-EVEN"),
        }
    }
}

/// Derived profit/loss figures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfitLoss {
    pub status: ProfitStatus,
    /// Always non-negative; `status` carries the direction
    pub amount: Decimal,
    /// `amount / purchase * 100`, reported as a magnitude for losses too
    pub margin_percent: Decimal,
}

/// Compute status, amount and margin from purchase and selling totals.
///
/// Re-checks `purchase > 0` itself since the margin divides by it.
pub fn calculate_profit_loss(purchase_amount: Decimal, selling_amount: Decimal) -> CoreResult<ProfitLoss> {
    ensure_positive("purchase_amount", purchase_amount)?;
    ensure_non_negative("selling_amount", selling_amount)?;

    let (status, amount) = match selling_amount.cmp(&purchase_amount) {
        std::cmp::Ordering::Greater => (ProfitStatus::Profit, selling_amount - purchase_amount),
        std::cmp::Ordering::Less => (ProfitStatus::Loss, purchase_amount - selling_amount),
        std::cmp::Ordering::Equal => (ProfitStatus::BreakEven, Decimal::ZERO),
    };

    let margin_percent = amount
        .checked_div(purchase_amount)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| CoreError::validation("profit_margin_percent", "margin is out of range"))?;

    Ok(ProfitLoss {
        status,
        amount,
        margin_percent,
    })
}

/// A recorded sale with its profit/loss figures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleTransaction {
    pub invoice_no: String,
    pub customer_name: String,
    pub item_name: String,
    pub quantity: u32,
    pub purchase_amount: Decimal,
    pub selling_amount: Decimal,
    pub profit_or_loss_status: ProfitStatus,
    pub profit_or_loss_amount: Decimal,
    pub profit_margin_percent: Decimal,
    pub created_at: DateTime<Utc>,
}

impl SaleTransaction {
    pub fn new(input: CreateTransactionInput) -> CoreResult<Self> {
        input.validate()?;
        let outcome = calculate_profit_loss(input.purchase_amount, input.selling_amount)?;

        Ok(Self {
            invoice_no: input.invoice_no.trim().to_string(),
            customer_name: input.customer_name.trim().to_string(),
            item_name: input.item_name.trim().to_string(),
            quantity: input.quantity,
            purchase_amount: input.purchase_amount,
            selling_amount: input.selling_amount,
            profit_or_loss_status: outcome.status,
            profit_or_loss_amount: outcome.amount,
            profit_margin_percent: outcome.margin_percent,
            created_at: Utc::now(),
        })
    }

    /// Current derived figures
    pub fn profit_loss(&self) -> ProfitLoss {
        ProfitLoss {
            status: self.profit_or_loss_status,
            amount: self.profit_or_loss_amount,
            margin_percent: self.profit_margin_percent,
        }
    }

    /// Recompute the derived figures from the stored amounts, in place
    pub fn recalculate(&mut self) -> CoreResult<ProfitLoss> {
        let outcome = calculate_profit_loss(self.purchase_amount, self.selling_amount)?;
        self.profit_or_loss_status = outcome.status;
        self.profit_or_loss_amount = outcome.amount;
        self.profit_margin_percent = outcome.margin_percent;
        Ok(outcome)
    }
}
