use hydroflow_catalog::pricing::PricingResult;
use hydroflow_core::{OrderStatus, PaymentMethod};
use uuid::Uuid;

use crate::models::Order;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order {0} not found")]
    NotFound(Uuid),

    #[error("order {id} is {status:?}: cannot {operation}")]
    InvalidState {
        id: Uuid,
        status: OrderStatus,
        operation: &'static str,
    },
}

/// Lifecycle state machine. Paid and Cancelled are terminal; every mutation
/// below requires the Open state, and `transition_to` applies the same rules
/// to explicit status writes.
impl Order {
    /// Replace the line-item set wholesale, repricing against the supplied
    /// result. Legal only while Open. The discount rule is reapplied along
    /// with the rest of the pricing.
    pub fn replace_items(
        &mut self,
        payment_method: PaymentMethod,
        pricing: PricingResult,
    ) -> Result<(), OrderError> {
        self.ensure_open("replace items")?;
        self.payment_method = payment_method;
        self.apply_pricing(pricing);
        Ok(())
    }

    /// Confirm payment: Open -> Paid. Amounts are left untouched.
    pub fn confirm_payment(&mut self, payment_method: PaymentMethod) -> Result<(), OrderError> {
        self.ensure_open("confirm payment")?;
        self.payment_method = payment_method;
        self.status = OrderStatus::Paid;
        Ok(())
    }

    /// Logical cancellation: Open -> Cancelled. The order is retained.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        self.ensure_open("cancel")?;
        self.status = OrderStatus::Cancelled;
        Ok(())
    }

    /// Transition to an explicit status, guarded by the same rules as the
    /// named operations. Re-asserting the current status is a no-op.
    pub fn transition_to(&mut self, status: OrderStatus) -> Result<(), OrderError> {
        if self.status == status {
            return Ok(());
        }
        match status {
            OrderStatus::Paid => {
                self.ensure_open("mark paid")?;
                self.status = OrderStatus::Paid;
            }
            OrderStatus::Cancelled => self.cancel()?,
            OrderStatus::Open => return Err(self.invalid_state("reopen")),
        }
        Ok(())
    }

    /// Check the edit precondition without mutating anything.
    pub fn ensure_open(&self, operation: &'static str) -> Result<(), OrderError> {
        if self.status == OrderStatus::Open {
            Ok(())
        } else {
            Err(self.invalid_state(operation))
        }
    }

    fn invalid_state(&self, operation: &'static str) -> OrderError {
        OrderError::InvalidState {
            id: self.id,
            status: self.status,
            operation,
        }
    }
}
