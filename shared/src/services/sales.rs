//! Sales service: record, view and recalculate the last transaction

use crate::error::{CoreError, CoreResult};
use crate::models::{CreateTransactionInput, SaleTransaction};
use crate::types::Slot;

/// Sales service holding the last transaction recorded in this session
#[derive(Debug, Clone, Default)]
pub struct SalesService {
    last_transaction: Slot<SaleTransaction>,
}

impl SalesService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Service whose slot already holds `transaction`
    pub fn with_transaction(transaction: SaleTransaction) -> Self {
        let mut last_transaction = Slot::new();
        last_transaction.replace(transaction);
        Self { last_transaction }
    }

    /// Record a transaction and make it the last transaction.
    ///
    /// On a validation failure the previously stored transaction is kept.
    pub fn create_transaction(&mut self, input: CreateTransactionInput) -> CoreResult<&SaleTransaction> {
        let transaction = SaleTransaction::new(input).map_err(|e| {
            tracing::warn!(error = %e, "Rejected transaction");
            e
        })?;

        tracing::info!(
            invoice_no = %transaction.invoice_no,
            status = %transaction.profit_or_loss_status,
            amount = %transaction.profit_or_loss_amount,
            "Transaction saved"
        );
        Ok(self.last_transaction.replace(transaction))
    }

    /// Get the last transaction
    pub fn view_last_transaction(&self) -> CoreResult<&SaleTransaction> {
        tracing::debug!(
            occupied = self.last_transaction.is_occupied(),
            "Viewing last transaction"
        );
        self.last_transaction
            .get()
            .ok_or(CoreError::NotFound("Transaction"))
    }

    /// Recompute profit/loss on the stored transaction without new input
    pub fn recalculate(&mut self) -> CoreResult<&SaleTransaction> {
        let transaction = self
            .last_transaction
            .get_mut()
            .ok_or(CoreError::NotFound("Transaction"))?;

        let outcome = transaction.recalculate()?;
        tracing::info!(
            invoice_no = %transaction.invoice_no,
            status = %outcome.status,
            margin_percent = %outcome.margin_percent,
            "Profit/loss recalculated"
        );
        Ok(transaction)
    }

    pub fn has_transaction(&self) -> bool {
        self.last_transaction.is_occupied()
    }
}
