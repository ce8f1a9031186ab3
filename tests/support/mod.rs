//! Shared fixtures for validate integration tests

pub mod harness;
