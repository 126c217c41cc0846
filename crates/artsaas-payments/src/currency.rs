use artsaas_core::models::donation::Currency;

use crate::error::PaymentError;

/// Smallest accepted donation. Every supported currency currently shares the
/// same floor of one major unit.
pub const MINIMUM_DONATION_CENTS: i64 = 100;

/// Parse a currency code ("usd" / "USD") into a supported currency.
pub fn parse_currency(code: &str) -> Result<Currency, PaymentError> {
    Currency::from_code(code).map_err(|_| PaymentError::UnsupportedCurrency(code.to_string()))
}

/// Reject donations under the per-currency minimum before any network call.
pub fn check_minimum(currency: Currency, amount_cents: i64) -> Result<(), PaymentError> {
    if amount_cents < MINIMUM_DONATION_CENTS {
        return Err(PaymentError::BelowMinimum {
            currency: currency.code(),
            minimum_cents: MINIMUM_DONATION_CENTS,
        });
    }
    Ok(())
}
