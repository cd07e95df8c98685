//! Shared domain types for internly.
//!
//! This crate contains the core domain types used across the internly
//! workspace: User, Skill, Internship, Application, and their associated
//! error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod application;
pub mod config;
pub mod error;
pub mod internship;
pub mod skill;
pub mod user;
