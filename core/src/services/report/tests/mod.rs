//! Tests for report generation
