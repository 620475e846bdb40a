//! Console OTP notifier
//!
//! Prints each issued code to stdout instead of delivering it, so a
//! developer can complete verification screens without a gateway.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lu_core::services::OtpNotifier;
use lu_shared::Environment;
use tracing::info;
use uuid::Uuid;

/// Development notifier that writes codes to the console
///
/// This implementation:
/// - Prints a banner with the message and code
/// - Hides the code itself unless echoing is enabled
/// - Tracks the number of notifications for tests
#[derive(Clone)]
pub struct ConsoleNotifier {
    /// Counter for tracking number of codes delivered
    message_count: Arc<AtomicU64>,
    /// Whether to print the banner at all
    console_output: bool,
    /// Whether the banner shows the code in clear
    echo_codes: bool,
}

impl ConsoleNotifier {
    /// Create a notifier that prints codes in clear
    pub fn new() -> Self {
        Self::with_options(true, true)
    }

    /// Create a notifier with configurable options
    pub fn with_options(console_output: bool, echo_codes: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            console_output,
            echo_codes,
        }
    }

    /// Notifier suited to `environment`; production never echoes codes
    pub fn for_environment(environment: Environment) -> Self {
        Self::with_options(true, environment.echoes_codes())
    }

    /// Get the total number of codes delivered
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }

    /// Banner text for one delivery
    pub fn render(&self, count: u64, message_id: &str, message: &str, code: &str) -> String {
        let shown = if self.echo_codes {
            code.to_string()
        } else {
            "*".repeat(code.len())
        };
        let rule = "=".repeat(60);
        format!(
            "\n{rule}\nCONSOLE OTP - MESSAGE #{count}\n{rule}\nMessage ID: {message_id}\nContent: {message}\nCode: {shown}\n{rule}\n"
        )
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl OtpNotifier for ConsoleNotifier {
    fn notify(&self, message: &str, code: &str) {
        let message_id = format!("console_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("{}", self.render(count, &message_id, message, code));
        }

        info!(
            target: "otp_delivery",
            provider = "console",
            message_id = %message_id,
            count,
            "OTP delivered"
        );
    }
}
