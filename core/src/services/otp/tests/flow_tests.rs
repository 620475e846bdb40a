//! Unit tests for the OTP flow

use std::rc::Rc;

use lu_shared::config::{FlowConfig, SendCountPolicy};
use lu_shared::routes;

use crate::domain::entities::{OtpStatus, Tone};
use crate::errors::DomainError;
use crate::services::otp::{OtpFlow, SendOutcome};

use super::mocks::{advance_secs, run_local, FixedCodes, RecordingNavigator, RecordingNotifier};

type TestFlow = OtpFlow<RecordingNotifier, RecordingNavigator>;

struct Harness {
    flow: TestFlow,
    notifier: Rc<RecordingNotifier>,
    navigator: Rc<RecordingNavigator>,
}

fn harness(config: FlowConfig, contact: &str, codes: &[&str]) -> Harness {
    let notifier = Rc::new(RecordingNotifier::default());
    let navigator = Rc::new(RecordingNavigator::default());
    let flow = OtpFlow::new(config, contact, notifier.clone(), navigator.clone())
        .unwrap()
        .with_generator(FixedCodes::new(codes));
    Harness {
        flow,
        notifier,
        navigator,
    }
}

fn mobile_flow(codes: &[&str]) -> Harness {
    harness(FlowConfig::invite_mobile(), "9876543210", codes)
}

fn type_code(flow: &mut TestFlow, code: &str) {
    for (index, digit) in code.chars().enumerate() {
        assert!(flow.set_digit(index, &digit.to_string()));
    }
}

#[tokio::test(start_paused = true)]
async fn test_initial_send_issues_code() {
    run_local(async {
        let mut h = mobile_flow(&["1234"]);
        assert_eq!(h.flow.status(), OtpStatus::Idle);
        assert!(h.flow.controls().can_send);

        let outcome = h.flow.send();
        assert_eq!(outcome, SendOutcome::Sent { send_count: 0 });
        assert_eq!(h.flow.status(), OtpStatus::Sent);
        assert_eq!(h.flow.remaining_seconds(), 60);
        assert_eq!(h.flow.session().code(), Some("1234"));
        assert!(h.flow.session().issued_at().is_some());

        assert_eq!(h.notifier.count(), 1);
        assert_eq!(h.notifier.last_code().as_deref(), Some("1234"));

        let controls = h.flow.controls();
        assert!(!controls.can_send);
        assert!(!controls.can_resend);
        assert!(controls.can_submit);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_scenario_a_match_navigates_once() {
    run_local(async {
        let mut h = mobile_flow(&["1234"]);
        h.flow.send();
        advance_secs(20).await;

        for (index, digit) in ["1", "2", "3", "4"].iter().enumerate() {
            h.flow.set_digit(index, digit);
        }
        assert_eq!(h.flow.submit(), OtpStatus::Matched);

        let message = h.flow.message().unwrap();
        assert_eq!(message.text, "OTP Matched");
        assert_eq!(message.tone, Tone::Success);
        assert_eq!(h.navigator.count(), 1);
        assert_eq!(h.navigator.last_route().as_deref(), Some(routes::CONTACT_HOME));

        // Consumed: edits are ignored and submit does not navigate again
        assert!(!h.flow.set_digit(0, "9"));
        assert_eq!(h.flow.submit(), OtpStatus::Matched);
        assert_eq!(h.navigator.count(), 1);
        assert_eq!(h.flow.send(), SendOutcome::Consumed);
        assert_eq!(h.flow.resend(), SendOutcome::Consumed);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_scenario_b_expired_code_never_matches() {
    run_local(async {
        let mut h = mobile_flow(&["1234"]);
        h.flow.send();
        advance_secs(60).await;
        assert_eq!(h.flow.remaining_seconds(), 0);

        type_code(&mut h.flow, "1234");
        assert_eq!(h.flow.submit(), OtpStatus::Expired);
        assert_eq!(h.flow.message().unwrap().text, "OTP expired, please resend");
        assert_eq!(h.navigator.count(), 0);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_scenario_c_incomplete_code() {
    run_local(async {
        let mut h = mobile_flow(&["1234"]);
        h.flow.send();

        h.flow.set_digit(0, "1");
        h.flow.set_digit(1, "2");
        assert_eq!(h.flow.submit(), OtpStatus::Incomplete);
        assert_eq!(h.flow.message().unwrap().text, "Please enter complete OTP");
        assert_eq!(h.navigator.count(), 0);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_incomplete_takes_precedence_over_expiry() {
    run_local(async {
        let mut h = mobile_flow(&["1234"]);
        h.flow.send();
        advance_secs(61).await;

        h.flow.set_digit(0, "1");
        assert_eq!(h.flow.submit(), OtpStatus::Incomplete);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_scenario_e_invalid_clears_on_edit() {
    run_local(async {
        let mut h = mobile_flow(&["1234"]);
        h.flow.send();

        type_code(&mut h.flow, "0000");
        assert_eq!(h.flow.submit(), OtpStatus::Invalid);
        assert_eq!(h.flow.message().unwrap().text, "Invalid OTP");

        // Re-reading does not clear it
        assert_eq!(h.flow.status(), OtpStatus::Invalid);

        assert!(h.flow.set_digit(1, "9"));
        assert_eq!(h.flow.status(), OtpStatus::Sent);
        assert!(h.flow.message().is_none());
        assert_eq!(h.flow.entries(), vec!["0", "9", "0", "0"]);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_rejected_input_does_not_clear_status() {
    run_local(async {
        let mut h = mobile_flow(&["1234"]);
        h.flow.send();
        type_code(&mut h.flow, "0000");
        h.flow.submit();

        assert!(!h.flow.set_digit(1, "x"));
        assert_eq!(h.flow.status(), OtpStatus::Invalid);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_expired_status_survives_edits() {
    run_local(async {
        let mut h = mobile_flow(&["1234"]);
        h.flow.send();
        advance_secs(60).await;
        type_code(&mut h.flow, "1234");
        h.flow.submit();

        assert!(h.flow.backspace(3));
        assert!(h.flow.set_digit(3, "4"));
        assert_eq!(h.flow.status(), OtpStatus::Expired);
        assert_eq!(h.flow.message().unwrap().text, "OTP expired, please resend");
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_backspace_focus_movement() {
    run_local(async {
        let mut h = mobile_flow(&["1234"]);
        h.flow.send();

        h.flow.set_digit(0, "1");
        h.flow.set_digit(1, "2");
        assert_eq!(h.flow.focus(), 2);

        h.flow.backspace(2);
        assert_eq!(h.flow.focus(), 1);
        h.flow.backspace(1);
        assert_eq!(h.flow.entries(), vec!["1", "", "", ""]);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_resend_refused_while_counting() {
    run_local(async {
        let mut h = mobile_flow(&["1234", "5678"]);
        h.flow.send();
        advance_secs(10).await;

        assert_eq!(
            h.flow.resend(),
            SendOutcome::NotReady {
                remaining_seconds: 50
            }
        );
        assert_eq!(h.notifier.count(), 1);
        assert_eq!(h.flow.session().code(), Some("1234"));
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_resend_resets_session() {
    run_local(async {
        let mut h = mobile_flow(&["1234", "5678"]);
        h.flow.send();
        advance_secs(60).await;

        type_code(&mut h.flow, "0000");
        h.flow.submit();
        assert!(h.flow.controls().can_resend);

        let outcome = h.flow.resend();
        assert_eq!(outcome, SendOutcome::Sent { send_count: 1 });
        assert_eq!(h.flow.status(), OtpStatus::Sent);
        assert!(h.flow.message().is_none());
        assert_eq!(h.flow.entries(), vec!["", "", "", ""]);
        assert_eq!(h.flow.remaining_seconds(), 60);
        assert_eq!(h.flow.session().code(), Some("5678"));
        assert_eq!(h.notifier.count(), 2);

        // The old code no longer matches, the new one does
        type_code(&mut h.flow, "1234");
        assert_eq!(h.flow.submit(), OtpStatus::Invalid);
        h.flow.paste("5678");
        assert_eq!(h.flow.submit(), OtpStatus::Matched);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_resend_notice_clears_itself() {
    run_local(async {
        let mut h = mobile_flow(&["1234", "5678"]);
        h.flow.send();
        assert!(h.flow.notice().is_none());
        advance_secs(60).await;

        h.flow.resend();
        assert_eq!(h.flow.notice().as_deref(), Some("New OTP sent..."));

        advance_secs(2).await;
        assert!(h.flow.notice().is_some());

        advance_secs(1).await;
        assert!(h.flow.notice().is_none());
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_rapid_resends_do_not_double_decrement() {
    run_local(async {
        let mut h = mobile_flow(&["1111", "2222", "3333"]);
        h.flow.send();
        advance_secs(60).await;
        h.flow.resend();
        advance_secs(60).await;
        h.flow.resend();

        assert_eq!(h.flow.remaining_seconds(), 60);
        advance_secs(1).await;
        assert_eq!(h.flow.remaining_seconds(), 59);
        advance_secs(9).await;
        assert_eq!(h.flow.remaining_seconds(), 50);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_scenario_d_cap_counting_initial_send() {
    run_local(async {
        let mut h = harness(FlowConfig::forgot_password(), "user@example.com", &["1234"]);

        assert_eq!(h.flow.send(), SendOutcome::Sent { send_count: 1 });
        advance_secs(60).await;
        assert_eq!(h.flow.resend(), SendOutcome::Sent { send_count: 2 });
        advance_secs(60).await;
        assert_eq!(h.flow.resend(), SendOutcome::Sent { send_count: 3 });

        // The third code is still usable until it expires
        assert_eq!(h.flow.status(), OtpStatus::Sent);
        advance_secs(60).await;

        match h.flow.resend() {
            SendOutcome::Blocked { message, .. } => assert!(message.contains("hour(s)")),
            other => panic!("expected blocked, got {:?}", other),
        }
        assert_eq!(h.flow.status(), OtpStatus::Blocked);
        assert_eq!(h.flow.message().unwrap().tone, Tone::Error);
        assert_eq!(h.notifier.count(), 3);

        let controls = h.flow.controls();
        assert!(!controls.can_send);
        assert!(!controls.can_resend);
        assert!(!controls.can_submit);
        assert!(!h.flow.set_digit(0, "1"));
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_cap_counting_resends_only() {
    run_local(async {
        let config = FlowConfig::invite_mobile()
            .with_max_sends(Some(3), SendCountPolicy::CountResendsOnly);
        let mut h = harness(config, "9876543210", &["1234"]);

        assert_eq!(h.flow.send(), SendOutcome::Sent { send_count: 0 });
        for expected in 1..=3 {
            advance_secs(60).await;
            assert_eq!(h.flow.resend(), SendOutcome::Sent { send_count: expected });
        }
        advance_secs(60).await;

        assert!(matches!(h.flow.resend(), SendOutcome::Blocked { .. }));
        assert_eq!(h.notifier.count(), 4);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_block_released_after_cool_down() {
    run_local(async {
        let mut h = harness(FlowConfig::forgot_password(), "user@example.com", &["1234"]);
        h.flow.send();
        for _ in 0..2 {
            advance_secs(60).await;
            h.flow.resend();
        }
        advance_secs(60).await;
        assert!(matches!(h.flow.send(), SendOutcome::Blocked { .. }));

        advance_secs(3600).await;
        assert_eq!(h.flow.status(), OtpStatus::Idle);
        assert!(h.flow.message().is_none());
        assert_eq!(h.flow.send_count(), 0);
        assert!(h.flow.controls().can_send);

        assert_eq!(h.flow.send(), SendOutcome::Sent { send_count: 1 });
        assert_eq!(h.flow.status(), OtpStatus::Sent);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_match_forwards_contact() {
    run_local(async {
        let mut h = harness(FlowConfig::forgot_password(), "user@example.com", &["4321"]);
        h.flow.send();
        type_code(&mut h.flow, "4321");
        assert_eq!(h.flow.submit(), OtpStatus::Matched);

        let calls = h.navigator.calls.borrow();
        let (route, params) = &calls[0];
        assert_eq!(route, routes::RESET_PASSWORD);
        assert_eq!(
            params.as_ref().and_then(|p| p.get("email")).map(String::as_str),
            Some("user@example.com")
        );
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_six_digit_flow() {
    run_local(async {
        let mut h = harness(FlowConfig::login_email(), "user@example.com", &["123456"]);
        h.flow.send();
        assert_eq!(h.flow.entries().len(), 6);
        assert_eq!(h.flow.remaining_seconds(), 30);

        type_code(&mut h.flow, "1234");
        assert_eq!(h.flow.submit(), OtpStatus::Incomplete);
        assert_eq!(
            h.flow.message().unwrap().text,
            "Please enter the complete 6-digit OTP"
        );

        h.flow.set_digit(4, "5");
        h.flow.set_digit(5, "6");
        assert_eq!(h.flow.submit(), OtpStatus::Matched);
        assert_eq!(h.navigator.last_route().as_deref(), Some(routes::HOME));
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_invalid_contact_is_not_sent() {
    run_local(async {
        let mut h = harness(FlowConfig::invite_email(), "not-an-email", &["1234"]);

        assert!(matches!(h.flow.send(), SendOutcome::InvalidContact { .. }));
        assert_eq!(h.flow.status(), OtpStatus::Idle);
        assert_eq!(h.notifier.count(), 0);

        let message = h.flow.message().unwrap();
        assert_eq!(message.text, "Please enter a valid email address");
        assert_eq!(message.tone, Tone::Error);

        let mut m = harness(FlowConfig::invite_mobile(), "12ab", &["1234"]);
        assert!(matches!(m.flow.send(), SendOutcome::InvalidContact { .. }));
        assert_eq!(
            m.flow.message().map(|msg| msg.text.as_str()),
            Some("Please enter a valid mobile number")
        );
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_submit_before_send_changes_nothing() {
    run_local(async {
        let mut h = mobile_flow(&["1234"]);

        assert_eq!(h.flow.submit(), OtpStatus::Idle);
        assert!(h.flow.message().is_none());
        assert!(!h.flow.set_digit(0, "1"));
        assert_eq!(h.flow.status(), OtpStatus::Idle);
        assert!(h.flow.session().code().is_none());
        assert_eq!(h.navigator.count(), 0);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_submit_after_cool_down_changes_nothing() {
    run_local(async {
        let mut h = harness(FlowConfig::forgot_password(), "user@example.com", &["1234"]);
        h.flow.send();
        for _ in 0..2 {
            advance_secs(60).await;
            h.flow.resend();
        }
        advance_secs(60).await;
        assert!(matches!(h.flow.resend(), SendOutcome::Blocked { .. }));
        advance_secs(3600).await;

        assert_eq!(h.flow.submit(), OtpStatus::Idle);
        assert!(!h.flow.set_digit(0, "1"));
        assert_eq!(h.flow.status(), OtpStatus::Idle);
        assert!(h.flow.message().is_none());
    })
    .await;
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = FlowConfig::invite_mobile()
        .with_max_sends(Some(0), SendCountPolicy::CountInitialSend);
    let result = OtpFlow::new(
        config,
        "9876543210",
        Rc::new(RecordingNotifier::default()),
        Rc::new(RecordingNavigator::default()),
    );

    assert!(matches!(result, Err(DomainError::Configuration { .. })));

    let result = OtpFlow::new(
        FlowConfig::login_email().with_ttl_seconds(0),
        "user@example.com",
        Rc::new(RecordingNotifier::default()),
        Rc::new(RecordingNavigator::default()),
    );
    assert!(result.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_editing_before_send_is_ignored() {
    run_local(async {
        let mut h = mobile_flow(&["1234"]);
        assert!(!h.flow.set_digit(0, "1"));
        assert!(!h.flow.paste("1234"));
        assert!(!h.flow.controls().can_submit);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_dropping_blocked_flow_is_clean() {
    run_local(async {
        let mut h = harness(FlowConfig::forgot_password(), "user@example.com", &["1234"]);
        h.flow.send();
        for _ in 0..2 {
            advance_secs(60).await;
            h.flow.resend();
        }
        assert!(h.flow.session().ledger().release_pending());
        h.flow.resend();

        drop(h.flow);
        advance_secs(2 * 3600).await;
        assert_eq!(h.navigator.count(), 0);
    })
    .await;
}
