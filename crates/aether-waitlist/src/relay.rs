//! Hosted form relay delivery: one JSON POST per record.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use aether_config::schema::RelayConfig;

use crate::delivery::{Delivery, DeliveryReceipt};
use crate::error::DeliveryError;
use crate::record::ClientData;

/// Posts records to an email relay such as FormSubmit's AJAX endpoint.
pub struct RelayDelivery {
    url: String,
    subject_prefix: String,
    template: String,
    captcha: bool,
    http: reqwest::Client,
}

impl RelayDelivery {
    pub fn from_config(config: &RelayConfig) -> Result<Self, DeliveryError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(u64::from(config.timeout_secs.max(1))))
            .build()?;
        Ok(Self::with_client(config, http))
    }

    /// Use a preconfigured HTTP client.
    pub fn with_client(config: &RelayConfig, http: reqwest::Client) -> Self {
        Self {
            url: config.url.trim().to_string(),
            subject_prefix: config.subject_prefix.clone(),
            template: config.template.clone(),
            captcha: config.captcha,
            http,
        }
    }

    /// JSON body: the record fields plus relay directives.
    pub fn payload(&self, record: &ClientData) -> serde_json::Value {
        serde_json::json!({
            "name": record.name,
            "email": record.email,
            "instagram": record.instagram,
            "country": record.country,
            "timestamp": record.timestamp,
            "_subject": format!("{}: {}", self.subject_prefix, record.name),
            "_template": self.template,
            "_captcha": self.captcha.to_string(),
        })
    }
}

#[async_trait]
impl Delivery for RelayDelivery {
    fn name(&self) -> &'static str {
        "relay"
    }

    async fn deliver(&self, record: &ClientData) -> Result<DeliveryReceipt, DeliveryError> {
        let body = self.payload(record);
        debug!(url = %self.url, "relay request");

        let response = self
            .http
            .post(&self.url)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            warn!("relay returned HTTP {status}: {text}");
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        info!("waitlist record relayed for {}", record.name);
        Ok(DeliveryReceipt::Relayed)
    }
}
