//! Tests for the customer repository
