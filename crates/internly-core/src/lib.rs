//! Business logic and storage port definitions for internly.
//!
//! This crate defines the `KvStore` port that the infrastructure layer
//! implements, the static internship catalog, and the services that own
//! the persisted state. It depends only on `internly-types` -- never on
//! `internly-infra` or any database/IO crate.

pub mod catalog;
pub mod service;
pub mod storage;
