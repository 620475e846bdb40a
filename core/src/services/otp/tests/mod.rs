//! Tests for the OTP verification module

mod flow_tests;
