//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `PaymentEngine`, the single entry point for the
//! order/payment lifecycle, and the read-through cache that lets buyers see
//! fulfilled orders even after an administrator has deleted the record.

pub mod cache;
pub mod engine;
