//! `aether join`: one waitlist submission from the command line.

use aether_common::AetherError;
use aether_config::schema::{DeliveryMode, WaitlistConfig};
use aether_config::AetherConfig;
use aether_waitlist::{ContactForm, DeliveryReceipt, Waitlist};

use crate::cli::JoinArgs;

/// Waitlist config with the `--csv` override applied.
fn effective_config(config: &AetherConfig, args: &JoinArgs) -> WaitlistConfig {
    let mut waitlist = config.waitlist.clone();
    if let Some(ref dir) = args.csv {
        waitlist.delivery = DeliveryMode::Csv;
        waitlist.csv.directory = dir.display().to_string();
    }
    waitlist
}

fn form(args: &JoinArgs) -> ContactForm {
    ContactForm {
        name: args.name.clone(),
        email: args.email.clone(),
        instagram: args.instagram.clone(),
        country: args.country.clone(),
    }
}

/// Submit once on a dedicated runtime and print the resulting status copy.
pub fn run(config: &AetherConfig, args: &JoinArgs) -> Result<(), AetherError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut waitlist = Waitlist::from_config(&effective_config(config, args))
        .map_err(|e| AetherError::Waitlist(e.to_string()))?;
    tracing::info!("submitting via {}", waitlist.delivery_name());

    let result = runtime.block_on(waitlist.submit(form(args)));

    let status = waitlist.status();
    println!("{}", status.label());
    if let Some(detail) = status.detail() {
        println!("{detail}");
    }

    match result {
        Ok(DeliveryReceipt::Exported(path)) => {
            tracing::info!("record written to {}", path.display());
            Ok(())
        }
        Ok(DeliveryReceipt::Relayed) => Ok(()),
        Err(e) => Err(AetherError::Waitlist(e.to_string())),
    }
}
