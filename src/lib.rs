//! Order/payment lifecycle core for the MintProxy storefront.
//!
//! Buyers pick a country from the catalog and create an order that stays
//! `pending` until an administrator verifies the bank transfer and confirms
//! it, at which point proxy access credentials are generated and attached.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
