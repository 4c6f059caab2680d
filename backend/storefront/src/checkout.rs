//! # Checkout
//!
//! Simulated, nothing is charged.
//!
//! - Bill = subtotal + flat delivery fee + 5% tax on the subtotal, rounded to the nearest unit
//! - Payment method is recorded on the confirmation and changes nothing else
//! - Confirmation carries a random pickup code, shown for [`CONFIRMATION_DELAY`] before the
//!   session clears the cart and goes back to the catalog
use std::{fmt, str::FromStr, time::Duration};

use chrono::{DateTime, Local};
use rand::Rng;
use thiserror::Error;

use crate::cart::Totals;

pub const DELIVERY_FEE: u64 = 20;
pub const TAX_PERCENT: u64 = 5;
pub const CONFIRMATION_DELAY: Duration = Duration::from_secs(3);

pub const PICKUP_CODE_LEN: usize = 4;
// excludes 0, O, 1 and I
pub const PICKUP_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    Cash,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown payment method: {0}")]
pub struct UnknownPaymentMethod(pub String);

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::Cash,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Upi => "UPI / Wallet",
            PaymentMethod::Cash => "Cash on Pickup",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();

        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.key() == key)
            .ok_or_else(|| UnknownPaymentMethod(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bill {
    pub item_count: u64,
    pub subtotal: u64,
    pub delivery_fee: u64,
    pub tax: u64,
    pub total: u64,
}

impl Bill {
    pub fn from_totals(totals: Totals) -> Self {
        let tax = tax_for(totals.price);

        Self {
            item_count: totals.items,
            subtotal: totals.price,
            delivery_fee: DELIVERY_FEE,
            tax,
            total: totals.price.saturating_add(DELIVERY_FEE).saturating_add(tax),
        }
    }
}

/// Half rounds up, subtotals too large to scale round down.
pub fn tax_for(subtotal: u64) -> u64 {
    match subtotal.checked_mul(TAX_PERCENT) {
        Some(scaled) => scaled.saturating_add(50) / 100,
        None => subtotal / 100 * TAX_PERCENT,
    }
}

pub fn pickup_code<R: Rng>(rng: &mut R) -> String {
    (0..PICKUP_CODE_LEN)
        .map(|_| char::from(PICKUP_CODE_ALPHABET[rng.random_range(0..PICKUP_CODE_ALPHABET.len())]))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub pickup_code: String,
    pub bill: Bill,
    pub payment: PaymentMethod,
    pub placed_at: DateTime<Local>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CheckoutState {
    #[default]
    Pending,
    Confirmed(Confirmation),
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_bill() {
        let bill = Bill::from_totals(Totals { items: 3, price: 130 });

        assert_eq!(
            bill,
            Bill {
                item_count: 3,
                subtotal: 130,
                delivery_fee: 20,
                tax: 7,
                total: 157,
            }
        );
    }

    #[test]
    fn test_tax_rounding() {
        assert_eq!(tax_for(0), 0);
        assert_eq!(tax_for(9), 0);
        assert_eq!(tax_for(10), 1);
        assert_eq!(tax_for(29), 1);
        assert_eq!(tax_for(30), 2);
        assert_eq!(tax_for(50), 3);
        assert_eq!(tax_for(1000), 50);
    }

    #[test]
    fn test_bill_large_totals() {
        let bill = Bill::from_totals(Totals {
            items: 4_000_000_000,
            price: 4_000_000_000_000_000_000,
        });

        assert_eq!(bill.tax, 200_000_000_000_000_000);
        assert_eq!(bill.total, 4_200_000_000_000_000_020);

        let bill = Bill::from_totals(Totals { items: 1, price: u64::MAX });

        assert_eq!(bill.subtotal, u64::MAX);
        assert_eq!(bill.total, u64::MAX);
    }

    #[test]
    fn test_pickup_code_shape() {
        let mut rng = StdRng::seed_from_u64(2613);

        for _ in 0..100 {
            let code = pickup_code(&mut rng);

            assert_eq!(code.len(), PICKUP_CODE_LEN);
            assert!(code.bytes().all(|b| PICKUP_CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_pickup_code_deterministic_per_seed() {
        let first = pickup_code(&mut StdRng::seed_from_u64(7));
        let again = pickup_code(&mut StdRng::seed_from_u64(7));

        assert_eq!(first, again);
    }

    #[test]
    fn test_pickup_codes_vary() {
        let mut rng = StdRng::seed_from_u64(42);

        let codes: std::collections::HashSet<String> =
            (0..50).map(|_| pickup_code(&mut rng)).collect();

        assert!(codes.len() > 1);
    }

    #[test]
    fn test_payment_method_from_str() {
        assert_eq!("UPI".parse::<PaymentMethod>(), Ok(PaymentMethod::Upi));
        assert_eq!("cash".parse::<PaymentMethod>(), Ok(PaymentMethod::Cash));
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
    }
}
