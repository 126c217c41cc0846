//! Webhook parsing and dispatch tests, driven by trimmed-down copies of
//! Stripe's event payloads.
//!
//! Run with: `cargo test -p artsaas-payments --test webhook`

use artsaas_payments::webhook::{parse_event, WebhookOutcome};

fn event_body(event_type: &str) -> Vec<u8> {
    serde_json::json!({
        "id": "evt_123",
        "type": event_type,
        "data": {
            "object": {
                "id": "pi_456",
                "amount": 2500,
                "currency": "usd",
                "metadata": {
                    "donor_id": "a2f1b9ce-9a3d-4bb4-9d65-25b8f6a2f3a1",
                    "artist_id": "5f0b3f8e-0f0f-4f6a-8a2e-7f3f2b1c9d10",
                    "donation_type": "one_time",
                    "message": "keep painting!",
                    "is_anonymous": "true"
                }
            }
        }
    })
    .to_string()
    .into_bytes()
}

#[test]
fn succeeded_event_dispatches_to_completed() {
    let event = parse_event(&event_body("payment_intent.succeeded")).unwrap();

    match event.outcome() {
        WebhookOutcome::Succeeded(intent) => {
            assert_eq!(intent.id, "pi_456");
            assert_eq!(intent.amount, 2500);
            assert_eq!(intent.currency, "usd");
            assert!(intent.metadata.is_anonymous());
            assert_eq!(intent.metadata.donation_type.as_deref(), Some("one_time"));
        }
        other => panic!("expected Succeeded, got {other:?}"),
    }
}

#[test]
fn failed_event_dispatches_to_failed() {
    let event = parse_event(&event_body("payment_intent.payment_failed")).unwrap();
    assert!(matches!(event.outcome(), WebhookOutcome::Failed(_)));
}

#[test]
fn other_events_are_ignored() {
    let event = parse_event(&event_body("charge.refunded")).unwrap();
    assert!(matches!(
        event.outcome(),
        WebhookOutcome::Ignored {
            event_type: "charge.refunded"
        }
    ));
}

/// Stripe sends intents with no metadata for payments created elsewhere;
/// parsing must not require it.
#[test]
fn metadata_is_optional() {
    let body = serde_json::json!({
        "id": "evt_789",
        "type": "payment_intent.succeeded",
        "data": { "object": { "id": "pi_000", "amount": 100, "currency": "eur" } }
    })
    .to_string();

    let event = parse_event(body.as_bytes()).unwrap();
    match event.outcome() {
        WebhookOutcome::Succeeded(intent) => {
            assert!(!intent.metadata.is_anonymous());
            assert_eq!(intent.metadata.donor_id, None);
        }
        other => panic!("expected Succeeded, got {other:?}"),
    }
}
