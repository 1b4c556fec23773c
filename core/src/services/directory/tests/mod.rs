//! Tests for the customer directory service
