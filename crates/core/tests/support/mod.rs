//! Shared test helpers for `slotwise-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so the
//! view and segmentation tests can focus on behaviour instead of
//! boilerplate.

#![allow(dead_code)]

pub mod repositories;

pub use repositories::{sample_event, FailingEventRepository, InMemoryEventRepository};
