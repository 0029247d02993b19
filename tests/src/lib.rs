//! End-to-end tests against a mock controller.
