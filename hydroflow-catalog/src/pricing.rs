use hydroflow_core::{money, PaymentMethod, VehicleType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::service::{CatalogError, PriceLookup};

/// One requested (service, quantity) pair, before pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRequest {
    pub service_id: i32,
    pub quantity: i32,
}

/// A priced line with the unit price captured from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedLine {
    pub service_id: i32,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// The outcome of pricing one order's worth of lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub lines: Vec<PricedLine>,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

pub struct PricingEngine;

impl PricingEngine {
    /// Price a set of requested lines for one vehicle type.
    ///
    /// Quantities below 1 are clamped to 1 rather than rejected. Any
    /// unresolved service id fails the whole call; a partial result is
    /// never returned. The cash discount is 10% of the subtotal rounded to
    /// cents; every other payment method discounts nothing.
    pub fn price(
        vehicle: VehicleType,
        requests: &[LineRequest],
        payment: PaymentMethod,
        catalog: &dyn PriceLookup,
    ) -> Result<PricingResult, CatalogError> {
        let mut lines = Vec::with_capacity(requests.len());
        let mut subtotal = Decimal::ZERO;

        for request in requests {
            let quantity = request.quantity.max(1) as u32;
            let unit_price = catalog.price_for(request.service_id, vehicle)?;
            subtotal += unit_price * Decimal::from(quantity);
            lines.push(PricedLine {
                service_id: request.service_id,
                quantity,
                unit_price,
            });
        }

        let discount = match payment {
            PaymentMethod::Cash => money::cash_discount(subtotal),
            _ => Decimal::ZERO,
        };

        Ok(PricingResult {
            lines,
            subtotal,
            discount,
            total: subtotal - discount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{Service, ServiceIndex};
    use rust_decimal_macros::dec;

    fn catalog() -> ServiceIndex {
        ServiceIndex::new([
            Service {
                id: 1,
                name: "Full Wash".to_string(),
                price_motorcycle: dec!(15),
                price_car_small: dec!(25),
                price_car_large: dec!(35),
                duration_minutes: 40,
                active: true,
            },
            Service {
                id: 2,
                name: "Wax".to_string(),
                price_motorcycle: dec!(10),
                price_car_small: dec!(20),
                price_car_large: dec!(30),
                duration_minutes: 25,
                active: true,
            },
        ])
    }

    #[test]
    fn line_total_uses_the_vehicle_tier() {
        let result = PricingEngine::price(
            VehicleType::CarLarge,
            &[LineRequest { service_id: 1, quantity: 2 }],
            PaymentMethod::Pix,
            &catalog(),
        )
        .unwrap();

        assert_eq!(result.subtotal, dec!(70));
        assert_eq!(result.discount, dec!(0));
        assert_eq!(result.total, dec!(70));
    }

    #[test]
    fn cash_payment_discounts_ten_percent() {
        let result = PricingEngine::price(
            VehicleType::Motorcycle,
            &[LineRequest { service_id: 1, quantity: 3 }],
            PaymentMethod::Cash,
            &catalog(),
        )
        .unwrap();

        assert_eq!(result.subtotal, dec!(45.00));
        assert_eq!(result.discount, dec!(4.50));
        assert_eq!(result.total, dec!(40.50));
        assert_eq!(result.total, result.subtotal - result.discount);
    }

    #[test]
    fn quantities_below_one_are_clamped() {
        let result = PricingEngine::price(
            VehicleType::CarSmall,
            &[LineRequest { service_id: 2, quantity: 0 }],
            PaymentMethod::CardDebit,
            &catalog(),
        )
        .unwrap();

        assert_eq!(result.lines[0].quantity, 1);
        assert_eq!(result.subtotal, dec!(20));
    }

    #[test]
    fn unknown_service_fails_the_whole_request() {
        let result = PricingEngine::price(
            VehicleType::CarSmall,
            &[
                LineRequest { service_id: 1, quantity: 1 },
                LineRequest { service_id: 99, quantity: 1 },
            ],
            PaymentMethod::Cash,
            &catalog(),
        );

        assert_eq!(result, Err(CatalogError::ServiceNotFound(99)));
    }

    #[test]
    fn multiple_lines_accumulate_into_the_subtotal() {
        let result = PricingEngine::price(
            VehicleType::CarSmall,
            &[
                LineRequest { service_id: 1, quantity: 1 },
                LineRequest { service_id: 2, quantity: 2 },
            ],
            PaymentMethod::Cash,
            &catalog(),
        )
        .unwrap();

        // 25 + 2 * 20 = 65, cash discount 6.50
        assert_eq!(result.subtotal, dec!(65));
        assert_eq!(result.discount, dec!(6.50));
        assert_eq!(result.total, dec!(58.50));
    }
}
