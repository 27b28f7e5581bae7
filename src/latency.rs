//! Simulated network latency for the mocked backend calls.
//!
//! Every call that would go to a real banking backend waits for a fixed delay
//! before completing. The delay is awaited inside the request handler, so if
//! the client goes away and the request future is dropped, the pending timer
//! is cancelled with it.

use std::time::Duration;

/// How long each kind of mocked backend call takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedLatency {
    /// Logging in and registering.
    pub auth: Duration,
    /// Looking up the name of the owner of a bank account.
    pub account_lookup: Duration,
    /// Sending a transfer or paying a bill.
    pub payment: Duration,
    /// Issuing a new virtual card.
    pub card_issue: Duration,
    /// Saving any of the settings forms.
    pub settings_save: Duration,
}

impl SimulatedLatency {
    /// No delays at all, for tests and impatient demos.
    pub const NONE: SimulatedLatency = SimulatedLatency {
        auth: Duration::ZERO,
        account_lookup: Duration::ZERO,
        payment: Duration::ZERO,
        card_issue: Duration::ZERO,
        settings_save: Duration::ZERO,
    };
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            auth: Duration::from_millis(1000),
            account_lookup: Duration::from_millis(1000),
            payment: Duration::from_millis(2000),
            card_issue: Duration::from_millis(2000),
            settings_save: Duration::from_millis(1500),
        }
    }
}

/// Wait for `delay` to pretend that `operation` went over the network.
pub async fn simulate_round_trip(operation: &str, delay: Duration) {
    tracing::debug!("Simulating backend call \"{operation}\" ({delay:?})");

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{SimulatedLatency, simulate_round_trip};

    #[tokio::test]
    async fn waits_for_delay() {
        let start = Instant::now();

        simulate_round_trip("test", Duration::from_millis(20)).await;

        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn payments_are_slower_than_lookups() {
        let latency = SimulatedLatency::default();

        assert!(latency.payment > latency.account_lookup);
        assert_eq!(latency.auth, Duration::from_secs(1));
    }
}
