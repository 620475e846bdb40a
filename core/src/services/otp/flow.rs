//! The OTP verification flow shared by every verification screen

use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, info, warn};

use lu_shared::config::{ContactChannel, FlowConfig, SendCountPolicy};
use lu_shared::utils::{phone, validation};

use crate::domain::entities::{OtpStatus, StatusMessage, Tone};
use crate::errors::{DomainError, DomainResult};
use crate::services::navigation::{single_param, Navigator};

use super::generator::RandomCodeGenerator;
use super::ledger::{AttemptLedger, SendPermit};
use super::notice::TransientNotice;
use super::session::OtpSession;
use super::traits::{CodeGenerator, OtpNotifier};
use super::types::{FlowControls, SendOutcome};

/// One verification screen's OTP lifecycle
///
/// Screen differences (digit count, TTL, send cap, destination, wording) come
/// from [`FlowConfig`]; delivery and navigation are injected. Dropping the
/// flow drops its session, which cancels the countdown, any pending
/// cool-down release and the resend notice timer.
///
/// All methods that issue codes must run inside a `tokio::task::LocalSet`.
pub struct OtpFlow<N: OtpNotifier, R: Navigator> {
    config: FlowConfig,
    contact: String,
    session: OtpSession,
    message: Option<StatusMessage>,
    notice: TransientNotice,
    notifier: Rc<N>,
    navigator: Rc<R>,
    generator: Box<dyn CodeGenerator>,
}

impl<N: OtpNotifier, R: Navigator> OtpFlow<N, R> {
    /// Create an idle flow for `contact` (an email address or mobile number)
    ///
    /// Fails with [`DomainError::Configuration`] when `config` does not
    /// validate.
    pub fn new(
        config: FlowConfig,
        contact: impl Into<String>,
        notifier: Rc<N>,
        navigator: Rc<R>,
    ) -> DomainResult<Self> {
        config
            .validate()
            .map_err(|message| DomainError::Configuration { message })?;

        let ledger = AttemptLedger::new(
            config.max_sends,
            Duration::from_secs(config.block_duration_seconds),
        );
        let session = OtpSession::new(config.digit_count, config.ttl_seconds, ledger);

        Ok(Self {
            config,
            contact: contact.into(),
            session,
            message: None,
            notice: TransientNotice::new(),
            notifier,
            navigator,
            generator: Box::new(RandomCodeGenerator),
        })
    }

    /// Replace the code source
    pub fn with_generator(mut self, generator: impl CodeGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    /// Request the first code
    ///
    /// Once a code has been issued this behaves like [`resend`](Self::resend).
    pub fn send(&mut self) -> SendOutcome {
        if self.session.status() == OtpStatus::Matched {
            return SendOutcome::Consumed;
        }
        if self.session.code().is_some() {
            return self.resend();
        }

        if let Err(message) = self.validate_contact() {
            warn!(
                flow = %self.config.name,
                event = "otp_invalid_contact",
                "Refusing to send OTP to malformed contact"
            );
            self.message = Some(StatusMessage::new(message.clone(), Tone::Error));
            return SendOutcome::InvalidContact { message };
        }

        if let Some(blocked) = self.refuse_if_blocked() {
            return blocked;
        }

        let counted = self.config.count_policy == SendCountPolicy::CountInitialSend;
        self.issue(counted)
    }

    /// Request a replacement code
    ///
    /// Only possible once the countdown reached zero and the ledger allows
    /// another send. Shows a notice that clears itself after the configured
    /// delay.
    pub fn resend(&mut self) -> SendOutcome {
        if self.session.status() == OtpStatus::Matched {
            return SendOutcome::Consumed;
        }
        if self.session.code().is_none() {
            return self.send();
        }

        let remaining_seconds = self.session.remaining_seconds();
        if remaining_seconds > 0 {
            debug!(
                flow = %self.config.name,
                remaining_seconds,
                "Resend requested while code is still valid"
            );
            return SendOutcome::NotReady { remaining_seconds };
        }

        if let Some(blocked) = self.refuse_if_blocked() {
            return blocked;
        }

        let outcome = self.issue(true);
        self.notice.show(
            self.config.messages.resent.clone(),
            Duration::from_secs(self.config.notice_clear_seconds),
        );
        outcome
    }

    /// Evaluate the typed digits
    ///
    /// A match navigates to the configured destination exactly once; after
    /// that the session is consumed and further submits change nothing.
    /// Without an issued code there is nothing to check and the status is
    /// left as is.
    pub fn submit(&mut self) -> OtpStatus {
        let current = self.session.status();
        if matches!(current, OtpStatus::Matched | OtpStatus::Blocked | OtpStatus::Idle)
            || self.session.code().is_none()
        {
            return current;
        }

        let status = self.session.evaluate();
        let messages = &self.config.messages;
        let text = match status {
            OtpStatus::Incomplete => &messages.incomplete,
            OtpStatus::Expired => &messages.expired,
            OtpStatus::Matched => &messages.matched,
            _ => &messages.invalid,
        };
        self.message = Some(StatusMessage::new(text.clone(), status.tone()));

        info!(
            flow = %self.config.name,
            event = "otp_submitted",
            status = ?status,
            remaining_seconds = self.session.remaining_seconds(),
            "OTP submitted"
        );

        if status == OtpStatus::Matched {
            self.session.consume();
            self.notice.dismiss();
            let params = self
                .config
                .forward_contact_as
                .as_ref()
                .map(|key| single_param(key.clone(), self.contact.clone()));
            self.navigator.navigate(&self.config.destination, params.as_ref());
        } else {
            self.session.set_status(status);
        }

        status
    }

    /// Set one slot to `text` (empty clears it)
    ///
    /// Returns `false` when the input was rejected.
    pub fn set_digit(&mut self, index: usize, text: &str) -> bool {
        if !self.is_editable() {
            return false;
        }
        let accepted = self.session.digits_mut().set_slot(index, text);
        if accepted {
            self.clear_stale_status();
        }
        accepted
    }

    /// Backspace pressed on a slot
    pub fn backspace(&mut self, index: usize) -> bool {
        if !self.is_editable() {
            return false;
        }
        let before = self.session.digits().value();
        let handled = self.session.digits_mut().backspace(index);
        if handled && self.session.digits().value() != before {
            self.clear_stale_status();
        }
        handled
    }

    /// Paste a whole code into the slots
    pub fn paste(&mut self, text: &str) -> bool {
        if !self.is_editable() {
            return false;
        }
        let accepted = self.session.digits_mut().paste(text);
        if accepted {
            self.clear_stale_status();
        }
        accepted
    }

    /// Controls the screen should show right now
    pub fn controls(&self) -> FlowControls {
        let status = self.session.status();
        let open = !matches!(status, OtpStatus::Matched | OtpStatus::Blocked)
            && !self.session.ledger().is_blocked();
        let issued = self.session.code().is_some();

        FlowControls {
            can_send: open && !issued,
            can_resend: open && issued && self.session.remaining_seconds() == 0,
            can_submit: issued && !matches!(status, OtpStatus::Matched | OtpStatus::Blocked),
        }
    }

    pub fn status(&self) -> OtpStatus {
        self.session.status()
    }

    /// Status text, if any
    pub fn message(&self) -> Option<&StatusMessage> {
        // The retry text goes stale once the cool-down is over.
        if self.session.cool_down_over() {
            return None;
        }
        self.message.as_ref()
    }

    /// Self-clearing notice shown after a resend
    pub fn notice(&self) -> Option<String> {
        self.notice.current()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.session.remaining_seconds()
    }

    pub fn send_count(&self) -> u32 {
        self.session.send_count()
    }

    /// Slot values as displayed
    pub fn entries(&self) -> Vec<String> {
        self.session.digits().entries()
    }

    pub fn focus(&self) -> usize {
        self.session.digits().focus()
    }

    pub fn session(&self) -> &OtpSession {
        &self.session
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    fn issue(&mut self, counted: bool) -> SendOutcome {
        let code = self.generator.generate(self.config.digit_count);
        self.session.issue(code.clone());
        if counted {
            self.session.ledger_mut().record_send();
        }
        self.message = None;
        self.notice.dismiss();

        let send_count = self.session.send_count();
        info!(
            flow = %self.config.name,
            contact = %self.masked_contact(),
            event = "otp_generated",
            send_count,
            ttl_seconds = self.config.ttl_seconds,
            "Issued new OTP"
        );
        self.notifier.notify(&self.config.messages.sent, &code);

        SendOutcome::Sent { send_count }
    }

    fn refuse_if_blocked(&mut self) -> Option<SendOutcome> {
        let permit = self.session.ledger().can_send();
        match permit {
            SendPermit::Allowed => None,
            SendPermit::Blocked { retry_after, message } => {
                warn!(
                    flow = %self.config.name,
                    contact = %self.masked_contact(),
                    event = "otp_send_blocked",
                    send_count = self.session.send_count(),
                    "OTP send refused during cool-down"
                );
                self.session.block();
                self.notice.dismiss();
                self.message = Some(StatusMessage::new(message.clone(), Tone::Error));
                Some(SendOutcome::Blocked {
                    retry_after,
                    message,
                })
            }
        }
    }

    fn clear_stale_status(&mut self) {
        if self.session.status().clears_on_edit() {
            self.session.set_status(OtpStatus::Sent);
            self.message = None;
        }
    }

    fn is_editable(&self) -> bool {
        !matches!(
            self.session.status(),
            OtpStatus::Matched | OtpStatus::Blocked | OtpStatus::Idle
        )
    }

    fn validate_contact(&self) -> Result<(), String> {
        match self.config.channel {
            ContactChannel::Email if !validation::validators::is_valid_email(&self.contact) => {
                Err("Please enter a valid email address".to_string())
            }
            ContactChannel::Mobile if !phone::is_valid_phone(&self.contact) => {
                Err("Please enter a valid mobile number".to_string())
            }
            _ => Ok(()),
        }
    }

    fn masked_contact(&self) -> String {
        match self.config.channel {
            ContactChannel::Email => validation::mask_email(&self.contact),
            ContactChannel::Mobile => phone::mask_phone_number(&self.contact),
        }
    }
}
