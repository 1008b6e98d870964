use chrono::{DateTime, Utc};
use hydroflow_catalog::pricing::PricingResult;
use hydroflow_core::{OrderStatus, PaymentMethod};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single service line owned by an order. The unit price is captured at
/// pricing time; later catalog edits never reprice a stored line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub service_id: i32,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// A service order for one vehicle: the single source of truth for what was
/// sold, for how much, and where it sits in the lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub vehicle_plate: String,
    pub attendant_cpf: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Build a freshly priced order in the Open state.
    pub fn create(
        vehicle_plate: String,
        attendant_cpf: Option<String>,
        payment_method: PaymentMethod,
        pricing: PricingResult,
    ) -> Self {
        let mut order = Self {
            id: Uuid::new_v4(),
            vehicle_plate,
            attendant_cpf,
            created_at: Utc::now(),
            status: OrderStatus::Open,
            subtotal: Decimal::ZERO,
            discount: Decimal::ZERO,
            total: Decimal::ZERO,
            payment_method,
            items: Vec::new(),
        };
        order.apply_pricing(pricing);
        order
    }

    /// Overwrite the line items and totals from a pricing result.
    pub(crate) fn apply_pricing(&mut self, pricing: PricingResult) {
        self.items = pricing
            .lines
            .into_iter()
            .map(|line| OrderItem {
                service_id: line.service_id,
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect();
        self.subtotal = pricing.subtotal;
        self.discount = pricing.discount;
        self.total = pricing.total;
    }
}
