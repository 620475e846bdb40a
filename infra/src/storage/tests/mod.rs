//! Tests for storage implementations
