//! Waitlist delivery validation.

use crate::schema::{AetherConfig, DeliveryMode};

use super::helpers::validate_range;

pub(crate) fn validate_waitlist(errors: &mut Vec<String>, config: &AetherConfig) {
    let w = &config.waitlist;

    if w.delivery == DeliveryMode::Relay {
        let url = w.relay.url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            errors.push(format!(
                "waitlist.relay.url = {url:?} must be an http(s) URL when delivery = \"relay\""
            ));
        }
    }
    validate_range(
        errors,
        "waitlist.relay.timeout_secs",
        w.relay.timeout_secs,
        1,
        120,
    );

    if w.delivery == DeliveryMode::Csv && w.csv.directory.trim().is_empty() {
        errors.push("waitlist.csv.directory must not be empty".into());
    }
    validate_range(
        errors,
        "waitlist.csv.simulated_latency_ms",
        w.csv.simulated_latency_ms,
        0,
        10_000,
    );
}
