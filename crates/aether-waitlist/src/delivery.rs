//! The delivery boundary: one outbound request or one local file write.

use std::path::PathBuf;

use async_trait::async_trait;

use aether_config::schema::{DeliveryMode, WaitlistConfig};

use crate::csv::CsvExport;
use crate::error::DeliveryError;
use crate::record::ClientData;
use crate::relay::RelayDelivery;

/// What a successful delivery produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryReceipt {
    /// The relay accepted the record.
    Relayed,
    /// The record was written to this file.
    Exported(PathBuf),
}

#[async_trait]
pub trait Delivery: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Deliver one record. Called once per submission; never retried.
    async fn deliver(&self, record: &ClientData) -> Result<DeliveryReceipt, DeliveryError>;
}

/// Build the configured delivery backend.
pub fn from_config(config: &WaitlistConfig) -> Result<Box<dyn Delivery>, DeliveryError> {
    match config.delivery {
        DeliveryMode::Relay => Ok(Box::new(RelayDelivery::from_config(&config.relay)?)),
        DeliveryMode::Csv => Ok(Box::new(CsvExport::from_config(&config.csv))),
    }
}
