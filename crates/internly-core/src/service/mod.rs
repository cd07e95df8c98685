//! Business logic services (use cases).
//!
//! Services own their slice of the persisted key namespace and are the
//! only code that touches the store; callers depend on these structs,
//! never on raw keys. Each is generic over the `KvStore` port -- never
//! a concrete infrastructure implementation.

pub mod applications;
pub mod dashboard;
pub mod profile;
pub mod skills;
