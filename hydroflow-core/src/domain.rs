use serde::{Deserialize, Serialize};

/// Vehicle type, selecting which price tier of a service applies.
///
/// Persisted as a small integer; exchanged on the wire as a string token.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    Motorcycle,
    CarSmall,
    CarLarge,
}

impl VehicleType {
    pub fn as_i16(self) -> i16 {
        match self {
            VehicleType::Motorcycle => 0,
            VehicleType::CarSmall => 1,
            VehicleType::CarLarge => 2,
        }
    }

    /// Decode a persisted code. Unrecognized codes resolve to the small-car
    /// tier rather than failing.
    pub fn from_i16(code: i16) -> Self {
        match code {
            0 => VehicleType::Motorcycle,
            2 => VehicleType::CarLarge,
            _ => VehicleType::CarSmall,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            VehicleType::Motorcycle => "MOTORCYCLE",
            VehicleType::CarSmall => "CAR_SMALL",
            VehicleType::CarLarge => "CAR_LARGE",
        }
    }
}

/// How an order is (to be) paid. Only Cash triggers the automatic discount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Pix,
    CardCredit,
    CardDebit,
}

impl PaymentMethod {
    pub fn as_i16(self) -> i16 {
        match self {
            PaymentMethod::Cash => 0,
            PaymentMethod::Pix => 1,
            PaymentMethod::CardCredit => 2,
            PaymentMethod::CardDebit => 3,
        }
    }

    pub fn from_i16(code: i16) -> Option<Self> {
        match code {
            0 => Some(PaymentMethod::Cash),
            1 => Some(PaymentMethod::Pix),
            2 => Some(PaymentMethod::CardCredit),
            3 => Some(PaymentMethod::CardDebit),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::Pix => "PIX",
            PaymentMethod::CardCredit => "CARD_CREDIT",
            PaymentMethod::CardDebit => "CARD_DEBIT",
        }
    }
}

/// Order status in the lifecycle. Paid and Cancelled are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Open,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub fn as_i16(self) -> i16 {
        match self {
            OrderStatus::Open => 0,
            OrderStatus::Paid => 1,
            OrderStatus::Cancelled => 2,
        }
    }

    pub fn from_i16(code: i16) -> Option<Self> {
        match code {
            0 => Some(OrderStatus::Open),
            1 => Some(OrderStatus::Paid),
            2 => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            OrderStatus::Open => "OPEN",
            OrderStatus::Paid => "PAID",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// No transition leaves a terminal status.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Paid | OrderStatus::Cancelled)
    }
}
