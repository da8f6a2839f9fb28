//! Submission status with timed revert to idle.

use std::time::{Duration, Instant};

/// How long a success message stays up.
pub const SUBMITTED_REVERT: Duration = Duration::from_secs(5);
/// How long a failure message stays up.
pub const FAILED_REVERT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Submitted,
    Failed,
    /// Validation failed; stays until the next submission.
    Invalid(String),
}

impl SubmissionStatus {
    /// Headline copy for the status.
    pub fn label(&self) -> &str {
        match self {
            SubmissionStatus::Idle => "JOIN THE WAITLIST",
            SubmissionStatus::Submitting => "ESTABLISHING UPLINK...",
            SubmissionStatus::Submitted => "ACCESS GRANTED",
            SubmissionStatus::Failed => "TRANSMISSION FAILED",
            SubmissionStatus::Invalid(message) => message,
        }
    }

    /// Secondary copy, when the status has one.
    pub fn detail(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Submitted => Some("DATA TRANSMITTED TO SECTOR COMMAND"),
            SubmissionStatus::Failed => {
                Some("Unable to reach servers. Please check your connection.")
            }
            _ => None,
        }
    }

    /// Time after which this status falls back to `Idle`.
    pub fn revert_after(&self) -> Option<Duration> {
        match self {
            SubmissionStatus::Submitted => Some(SUBMITTED_REVERT),
            SubmissionStatus::Failed => Some(FAILED_REVERT),
            _ => None,
        }
    }
}

/// Current status plus when it was entered.
#[derive(Debug, Clone)]
pub struct StatusTracker {
    status: SubmissionStatus,
    since: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            status: SubmissionStatus::Idle,
            since: Instant::now(),
        }
    }

    pub fn set(&mut self, status: SubmissionStatus) {
        self.set_at(status, Instant::now());
    }

    pub fn set_at(&mut self, status: SubmissionStatus, now: Instant) {
        tracing::debug!("submission status: {:?} -> {:?}", self.status, status);
        self.status = status;
        self.since = now;
    }

    /// Status as of now, applying any pending revert.
    pub fn current(&mut self) -> &SubmissionStatus {
        self.current_at(Instant::now())
    }

    /// Status as of `now`, applying any pending revert.
    pub fn current_at(&mut self, now: Instant) -> &SubmissionStatus {
        if let Some(after) = self.status.revert_after() {
            if now.saturating_duration_since(self.since) >= after {
                self.set_at(SubmissionStatus::Idle, now);
            }
        }
        &self.status
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let mut tracker = StatusTracker::new();
        assert_eq!(tracker.current(), &SubmissionStatus::Idle);
    }

    #[test]
    fn submitted_reverts_after_five_seconds() {
        let start = Instant::now();
        let mut tracker = StatusTracker::new();
        tracker.set_at(SubmissionStatus::Submitted, start);

        let before = start + Duration::from_millis(4_999);
        assert_eq!(tracker.current_at(before), &SubmissionStatus::Submitted);

        assert_eq!(
            tracker.current_at(start + Duration::from_secs(5)),
            &SubmissionStatus::Idle
        );
    }

    #[test]
    fn failed_reverts_after_three_seconds() {
        let start = Instant::now();
        let mut tracker = StatusTracker::new();
        tracker.set_at(SubmissionStatus::Failed, start);
        assert_eq!(
            tracker.current_at(start + Duration::from_secs(2)),
            &SubmissionStatus::Failed
        );
        assert_eq!(
            tracker.current_at(start + Duration::from_secs(3)),
            &SubmissionStatus::Idle
        );
    }

    #[test]
    fn invalid_and_submitting_persist() {
        let start = Instant::now();
        let later = start + Duration::from_secs(3600);
        for status in [
            SubmissionStatus::Submitting,
            SubmissionStatus::Invalid("Please fill in all required fields.".into()),
        ] {
            let mut tracker = StatusTracker::new();
            tracker.set_at(status.clone(), start);
            assert_eq!(tracker.current_at(later), &status);
        }
    }

    #[test]
    fn labels_follow_ui_copy() {
        assert_eq!(SubmissionStatus::Submitting.label(), "ESTABLISHING UPLINK...");
        assert_eq!(SubmissionStatus::Submitted.label(), "ACCESS GRANTED");
        assert_eq!(SubmissionStatus::Failed.label(), "TRANSMISSION FAILED");
        assert_eq!(
            SubmissionStatus::Invalid("missing".into()).label(),
            "missing"
        );
        assert!(SubmissionStatus::Idle.detail().is_none());
    }
}
