//! Waitlist lead capture.
//!
//! Validates a visitor's contact form, stamps it, and hands it to one
//! delivery backend: a hosted email relay or a local CSV export. The
//! submission status follows the form's UI copy and reverts on a timer.

pub mod csv;
pub mod delivery;
pub mod error;
pub mod record;
pub mod relay;
pub mod status;
pub mod submit;

pub use csv::CsvExport;
pub use delivery::{from_config, Delivery, DeliveryReceipt};
pub use error::DeliveryError;
pub use record::{ClientData, ContactForm, REQUIRED_FIELDS_MESSAGE};
pub use relay::RelayDelivery;
pub use status::{StatusTracker, SubmissionStatus};
pub use submit::Waitlist;
