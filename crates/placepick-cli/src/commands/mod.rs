pub mod catalog;
pub mod nickname;
pub mod profile;

use anyhow::{Context, Result};
use placepick_core::api::UserAccountClient;
use placepick_core::{Notice, NoticeSink};
use placepick_infrastructure::{ClientConfig, HttpTransport};
use std::sync::Arc;

/// Prints notices to the terminal.
pub struct ConsoleNotices;

impl NoticeSink for ConsoleNotices {
    fn notify(&self, notice: Notice) {
        if notice.is_error() {
            eprintln!("❌ {}", notice);
        } else {
            println!("ℹ️  {}", notice);
        }
    }
}

pub fn client(config: &ClientConfig) -> Result<UserAccountClient> {
    let transport = HttpTransport::new(&config.api).context("Failed to set up HTTP transport")?;
    Ok(UserAccountClient::new(Arc::new(transport)))
}

pub fn notices() -> Arc<dyn NoticeSink> {
    Arc::new(ConsoleNotices)
}
