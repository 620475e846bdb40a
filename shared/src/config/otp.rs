//! OTP flow configuration
//!
//! Every verification screen (forgot password, login email OTP, invite email
//! OTP, invite mobile OTP) runs the same flow with different parameters. The
//! presets below capture the values each screen uses today.

use serde::{Deserialize, Serialize};

use crate::types::OtpLength;

use super::routes;

/// Channel a code is delivered over, used to validate the contact before the first send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactChannel {
    Email,
    Mobile,
}

/// Which issuances count against `max_sends`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SendCountPolicy {
    /// The initial send is issuance 1 of `max_sends`
    CountInitialSend,
    /// Only resends are counted
    CountResendsOnly,
}

/// User-facing wording for a flow
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OtpMessages {
    /// Shown when fewer digits than required were entered
    pub incomplete: String,
    /// Shown when the countdown reached zero before submit
    pub expired: String,
    /// Shown when the entered code matched
    pub matched: String,
    /// Shown when the entered code did not match
    pub invalid: String,
    /// Human message passed to the delivery notifier on every issuance
    pub sent: String,
    /// Transient notice shown after a resend
    pub resent: String,
}

impl Default for OtpMessages {
    fn default() -> Self {
        Self {
            incomplete: "Please enter complete OTP".to_string(),
            expired: "OTP expired, please resend".to_string(),
            matched: "OTP Matched".to_string(),
            invalid: "Invalid OTP".to_string(),
            sent: "OTP sent successfully".to_string(),
            resent: "New OTP sent...".to_string(),
        }
    }
}

/// Parameters for one OTP flow instance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlowConfig {
    /// Name used in logs
    pub name: String,

    /// Delivery channel of the contact being verified
    pub channel: ContactChannel,

    /// Code width and number of input slots
    pub digit_count: OtpLength,

    /// Validity window of each issued code
    pub ttl_seconds: u32,

    /// Cap on counted sends; `None` disables blocking
    #[serde(default)]
    pub max_sends: Option<u32>,

    /// Which sends count against the cap
    #[serde(default = "default_count_policy")]
    pub count_policy: SendCountPolicy,

    /// Cool-down applied once the cap is reached
    #[serde(default = "default_block_duration_seconds")]
    pub block_duration_seconds: u64,

    /// Delay before the resend notice clears itself
    #[serde(default = "default_notice_clear_seconds")]
    pub notice_clear_seconds: u64,

    /// Route navigated to after a match
    pub destination: String,

    /// Navigation parameter name carrying the verified contact, if any
    #[serde(default)]
    pub forward_contact_as: Option<String>,

    /// Flow wording
    #[serde(default)]
    pub messages: OtpMessages,
}

impl FlowConfig {
    /// Password reset confirmation: 4 digits, 60s, capped at 3 sends including the first
    pub fn forgot_password() -> Self {
        Self {
            name: "forgot_password".to_string(),
            channel: ContactChannel::Email,
            digit_count: OtpLength::Four,
            ttl_seconds: 60,
            max_sends: Some(3),
            count_policy: SendCountPolicy::CountInitialSend,
            block_duration_seconds: default_block_duration_seconds(),
            notice_clear_seconds: default_notice_clear_seconds(),
            destination: routes::RESET_PASSWORD.to_string(),
            forward_contact_as: Some("email".to_string()),
            messages: OtpMessages::default(),
        }
    }

    /// Login email OTP: 6 digits, 30s, uncapped
    pub fn login_email() -> Self {
        Self {
            name: "login_email".to_string(),
            channel: ContactChannel::Email,
            digit_count: OtpLength::Six,
            ttl_seconds: 30,
            max_sends: None,
            count_policy: SendCountPolicy::CountResendsOnly,
            block_duration_seconds: default_block_duration_seconds(),
            notice_clear_seconds: default_notice_clear_seconds(),
            destination: routes::HOME.to_string(),
            forward_contact_as: Some("email".to_string()),
            messages: OtpMessages {
                incomplete: "Please enter the complete 6-digit OTP".to_string(),
                expired: "OTP has expired. Please resend OTP".to_string(),
                ..OtpMessages::default()
            },
        }
    }

    /// Invite email OTP: 4 digits, 56s, uncapped
    pub fn invite_email() -> Self {
        Self {
            name: "invite_email".to_string(),
            channel: ContactChannel::Email,
            digit_count: OtpLength::Four,
            ttl_seconds: 56,
            max_sends: None,
            count_policy: SendCountPolicy::CountResendsOnly,
            block_duration_seconds: default_block_duration_seconds(),
            notice_clear_seconds: default_notice_clear_seconds(),
            destination: routes::CONTACT_HOME.to_string(),
            forward_contact_as: None,
            messages: OtpMessages::default(),
        }
    }

    /// Invite mobile OTP: 4 digits, 60s, uncapped
    pub fn invite_mobile() -> Self {
        Self {
            name: "invite_mobile".to_string(),
            channel: ContactChannel::Mobile,
            digit_count: OtpLength::Four,
            ttl_seconds: 60,
            max_sends: None,
            count_policy: SendCountPolicy::CountResendsOnly,
            block_duration_seconds: default_block_duration_seconds(),
            notice_clear_seconds: default_notice_clear_seconds(),
            destination: routes::CONTACT_HOME.to_string(),
            forward_contact_as: None,
            messages: OtpMessages::default(),
        }
    }

    /// Set the send cap and counting policy
    pub fn with_max_sends(mut self, max_sends: Option<u32>, policy: SendCountPolicy) -> Self {
        self.max_sends = max_sends;
        self.count_policy = policy;
        self
    }

    /// Set the validity window
    pub fn with_ttl_seconds(mut self, ttl_seconds: u32) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }

    /// Check the configuration for values the flow cannot run with
    pub fn validate(&self) -> Result<(), String> {
        if self.ttl_seconds == 0 {
            return Err(format!("{}: ttl_seconds must be greater than zero", self.name));
        }
        if self.max_sends == Some(0) {
            return Err(format!("{}: max_sends must be at least 1 when set", self.name));
        }
        if self.max_sends.is_some() && self.block_duration_seconds == 0 {
            return Err(format!(
                "{}: block_duration_seconds must be greater than zero when max_sends is set",
                self.name
            ));
        }
        if self.destination.trim().is_empty() {
            return Err(format!("{}: destination route is required", self.name));
        }
        Ok(())
    }
}

/// Presets for every verification screen
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OtpConfig {
    pub forgot_password: FlowConfig,
    pub login_email: FlowConfig,
    pub invite_email: FlowConfig,
    pub invite_mobile: FlowConfig,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            forgot_password: FlowConfig::forgot_password(),
            login_email: FlowConfig::login_email(),
            invite_email: FlowConfig::invite_email(),
            invite_mobile: FlowConfig::invite_mobile(),
        }
    }
}

impl OtpConfig {
    /// Validate every flow preset
    pub fn validate(&self) -> Result<(), String> {
        self.forgot_password.validate()?;
        self.login_email.validate()?;
        self.invite_email.validate()?;
        self.invite_mobile.validate()
    }
}

fn default_count_policy() -> SendCountPolicy {
    SendCountPolicy::CountResendsOnly
}

fn default_block_duration_seconds() -> u64 {
    3600 // 1 hour
}

fn default_notice_clear_seconds() -> u64 {
    3
}
