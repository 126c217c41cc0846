//! Fee-split and currency-validation tests.
//!
//! Run with: `cargo test -p artsaas-payments --test fees`

use artsaas_core::models::donation::Currency;
use artsaas_payments::currency::{check_minimum, parse_currency, MINIMUM_DONATION_CENTS};
use artsaas_payments::error::PaymentError;
use artsaas_payments::fees::FeeSplit;

/// The platform keeps a flat 5% of the gross.
#[test]
fn fee_is_five_percent_of_gross() {
    let split = FeeSplit::from_gross(10_000);
    assert_eq!(split.fee_cents, 500);
    assert_eq!(split.net_cents, 9_500);
}

/// Fee and net always reassemble into the gross, whatever the rounding.
#[test]
fn split_conserves_the_gross() {
    for gross in [1, 99, 100, 101, 1_999, 2_500, 123_456_789] {
        let split = FeeSplit::from_gross(gross);
        assert_eq!(
            split.fee_cents + split.net_cents,
            gross,
            "gross {gross} split into {} + {}",
            split.fee_cents,
            split.net_cents
        );
    }
}

/// Sub-cent fees round half-up: 5% of 1999 is 99.95, recorded as 100.
#[test]
fn fee_rounds_half_up() {
    assert_eq!(FeeSplit::from_gross(1_999).fee_cents, 100);
    assert_eq!(FeeSplit::from_gross(1_989).fee_cents, 99);
}

#[test]
fn failed_payments_settle_nothing() {
    let split = FeeSplit::failed(10_000);
    assert_eq!(split.gross_cents, 10_000);
    assert_eq!(split.fee_cents, 0);
    assert_eq!(split.net_cents, 0);
}

#[test]
fn currency_codes_parse_in_either_case() {
    assert_eq!(parse_currency("usd").unwrap(), Currency::Usd);
    assert_eq!(parse_currency("EUR").unwrap(), Currency::Eur);
    assert_eq!(parse_currency("Cad").unwrap(), Currency::Cad);
}

#[test]
fn unsupported_currency_is_rejected() {
    assert!(matches!(
        parse_currency("jpy"),
        Err(PaymentError::UnsupportedCurrency(code)) if code == "jpy"
    ));
}

#[test]
fn donations_below_the_minimum_are_rejected() {
    assert!(check_minimum(Currency::Usd, MINIMUM_DONATION_CENTS).is_ok());
    assert!(matches!(
        check_minimum(Currency::Gbp, MINIMUM_DONATION_CENTS - 1),
        Err(PaymentError::BelowMinimum {
            currency: "gbp",
            minimum_cents: MINIMUM_DONATION_CENTS,
        })
    ));
}
