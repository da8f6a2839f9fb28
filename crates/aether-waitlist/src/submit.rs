//! One submission from form input to delivered record.

use chrono::Utc;
use tracing::{info, warn};

use aether_config::schema::WaitlistConfig;

use crate::delivery::{self, Delivery, DeliveryReceipt};
use crate::error::DeliveryError;
use crate::record::ContactForm;
use crate::status::{StatusTracker, SubmissionStatus};

/// Drives the submission status machine around a delivery backend.
pub struct Waitlist {
    delivery: Box<dyn Delivery>,
    status: StatusTracker,
}

impl Waitlist {
    pub fn new(delivery: Box<dyn Delivery>) -> Self {
        Self {
            delivery,
            status: StatusTracker::new(),
        }
    }

    pub fn from_config(config: &WaitlistConfig) -> Result<Self, DeliveryError> {
        Ok(Self::new(delivery::from_config(config)?))
    }

    pub fn delivery_name(&self) -> &'static str {
        self.delivery.name()
    }

    /// Current status, applying any timed revert.
    pub fn status(&mut self) -> &SubmissionStatus {
        self.status.current()
    }

    /// Validate, timestamp, and deliver one form.
    ///
    /// Ends in `Submitted`, `Failed`, or `Invalid`. The delivery is attempted
    /// once; a failure is reported, not retried.
    pub async fn submit(&mut self, form: ContactForm) -> Result<DeliveryReceipt, DeliveryError> {
        self.status.set(SubmissionStatus::Submitting);

        if let Err(e) = form.validate() {
            self.status.set(SubmissionStatus::Invalid(e.to_string()));
            return Err(e);
        }

        let record = form.into_record(Utc::now());
        match self.delivery.deliver(&record).await {
            Ok(receipt) => {
                info!("submission delivered via {}", self.delivery.name());
                self.status.set(SubmissionStatus::Submitted);
                Ok(receipt)
            }
            Err(e) => {
                warn!("submission via {} failed: {e}", self.delivery.name());
                self.status.set(SubmissionStatus::Failed);
                Err(e)
            }
        }
    }
}
