use std::collections::BTreeMap;

use chrono::NaiveDate;
use hydroflow_core::{OrderStatus, PaymentMethod};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Order;

/// Revenue for one payment method on the summarized day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentBreakdown {
    pub payment_method: PaymentMethod,
    pub total: Decimal,
}

/// Volume and revenue for one catalog service on the summarized day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceBreakdown {
    pub service_id: i32,
    pub quantity: u64,
    pub total: Decimal,
}

/// The daily cash-register report.
#[derive(Debug, Clone, Serialize)]
pub struct CashSummary {
    pub date: NaiveDate,
    pub total_orders: u64,
    pub total_revenue: Decimal,
    pub total_discounts: Decimal,
    pub by_payment_method: Vec<PaymentBreakdown>,
    pub by_service: Vec<ServiceBreakdown>,
}

/// Reduce orders into the cash-register report for one UTC calendar day.
///
/// Cancelled orders are excluded; open and paid orders both count. Line
/// items are flattened across orders and grouped by service.
pub fn summarize(date: NaiveDate, orders: &[Order]) -> CashSummary {
    let selected: Vec<&Order> = orders
        .iter()
        .filter(|o| o.created_at.date_naive() == date)
        .filter(|o| o.status != OrderStatus::Cancelled)
        .collect();

    let total_revenue = selected.iter().map(|o| o.total).sum();
    let total_discounts = selected.iter().map(|o| o.discount).sum();

    let mut by_payment: BTreeMap<PaymentMethod, Decimal> = BTreeMap::new();
    for order in &selected {
        *by_payment.entry(order.payment_method).or_default() += order.total;
    }

    let mut by_service: BTreeMap<i32, (u64, Decimal)> = BTreeMap::new();
    for order in &selected {
        for item in &order.items {
            let entry = by_service.entry(item.service_id).or_default();
            entry.0 += u64::from(item.quantity);
            entry.1 += item.unit_price * Decimal::from(item.quantity);
        }
    }

    CashSummary {
        date,
        total_orders: selected.len() as u64,
        total_revenue,
        total_discounts,
        by_payment_method: by_payment
            .into_iter()
            .map(|(payment_method, total)| PaymentBreakdown {
                payment_method,
                total,
            })
            .collect(),
        by_service: by_service
            .into_iter()
            .map(|(service_id, (quantity, total))| ServiceBreakdown {
                service_id,
                quantity,
                total,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderItem;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn order_on(
        day: u32,
        status: OrderStatus,
        payment_method: PaymentMethod,
        subtotal: Decimal,
        discount: Decimal,
        items: Vec<OrderItem>,
    ) -> Order {
        Order {
            id: Uuid::new_v4(),
            vehicle_plate: "ABC1D23".to_string(),
            attendant_cpf: None,
            created_at: Utc.with_ymd_and_hms(2026, 8, day, 14, 30, 0).unwrap(),
            status,
            subtotal,
            discount,
            total: subtotal - discount,
            payment_method,
            items,
        }
    }

    #[test]
    fn groups_totals_by_payment_method() {
        let orders = vec![
            order_on(
                6,
                OrderStatus::Paid,
                PaymentMethod::Cash,
                dec!(15.00),
                dec!(1.50),
                vec![OrderItem { service_id: 1, quantity: 1, unit_price: dec!(15.00) }],
            ),
            order_on(
                6,
                OrderStatus::Open,
                PaymentMethod::Pix,
                dec!(40.00),
                dec!(0),
                vec![OrderItem { service_id: 2, quantity: 2, unit_price: dec!(20.00) }],
            ),
        ];

        let day = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let summary = summarize(day, &orders);

        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.total_revenue, dec!(53.50));
        assert_eq!(summary.total_discounts, dec!(1.50));
        assert_eq!(
            summary.by_payment_method,
            vec![
                PaymentBreakdown { payment_method: PaymentMethod::Cash, total: dec!(13.50) },
                PaymentBreakdown { payment_method: PaymentMethod::Pix, total: dec!(40.00) },
            ]
        );
    }

    #[test]
    fn flattens_line_items_by_service() {
        let orders = vec![
            order_on(
                6,
                OrderStatus::Paid,
                PaymentMethod::Cash,
                dec!(30.00),
                dec!(3.00),
                vec![OrderItem { service_id: 1, quantity: 2, unit_price: dec!(15.00) }],
            ),
            order_on(
                6,
                OrderStatus::Paid,
                PaymentMethod::CardDebit,
                dec!(35.00),
                dec!(0),
                vec![
                    OrderItem { service_id: 1, quantity: 1, unit_price: dec!(15.00) },
                    OrderItem { service_id: 2, quantity: 1, unit_price: dec!(20.00) },
                ],
            ),
        ];

        let day = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let summary = summarize(day, &orders);

        assert_eq!(
            summary.by_service,
            vec![
                ServiceBreakdown { service_id: 1, quantity: 3, total: dec!(45.00) },
                ServiceBreakdown { service_id: 2, quantity: 1, total: dec!(20.00) },
            ]
        );
    }

    #[test]
    fn other_days_and_cancelled_orders_are_excluded() {
        let orders = vec![
            order_on(6, OrderStatus::Paid, PaymentMethod::Cash, dec!(15.00), dec!(1.50), vec![]),
            order_on(5, OrderStatus::Paid, PaymentMethod::Cash, dec!(99.00), dec!(0), vec![]),
            order_on(6, OrderStatus::Cancelled, PaymentMethod::Pix, dec!(50.00), dec!(0), vec![]),
        ];

        let day = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let summary = summarize(day, &orders);

        assert_eq!(summary.total_orders, 1);
        assert_eq!(summary.total_revenue, dec!(13.50));
    }

    #[test]
    fn an_empty_day_yields_zeroes() {
        let day = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let summary = summarize(day, &[]);
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.total_revenue, dec!(0));
        assert!(summary.by_payment_method.is_empty());
        assert!(summary.by_service.is_empty());
    }
}
