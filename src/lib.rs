//! # Inline Type Erasure in Rust
//!
//! This crate demonstrates static polymorphism without a heap allocation and
//! without a trait-object vtable:
//!
//! ## Inline storage
//! - A fixed-capacity, 16-byte aligned byte buffer (`storage`)
//! - Oversized or over-aligned payloads rejected at compile time
//!
//! ## The erased wrapper
//! - One capability contract: `Accelerate::accelerate(i32)`
//! - `Vehicle` stores any payload inline plus two function pointers
//!   monomorphized for the payload type (forward and drop)
//! - Moving a `Vehicle` never leaves a dangling binding behind
//!
//! ## Example payloads and a fleet
//! - `Car` and `AirPlane`
//! - `Fleet`: an ordered collection built from a TOML `FleetConfig`
//!
//! Run the demo with: `cargo run --bin fleet [fleet.toml]`
//!
//! ```
//! use inline_erasure::{AirPlane, Car, Vehicle};
//!
//! let vehicles = vec![Vehicle::new(Car), Vehicle::new(AirPlane)];
//! let deltas: Vec<i32> = vehicles.iter().map(|v| v.accelerate(3).delta).collect();
//! assert_eq!(deltas, [3, 6]);
//! ```

pub mod error;
pub mod fleet;
pub mod models;
pub mod storage;
pub mod vehicle;

pub use error::FleetError;
pub use fleet::{Fleet, FleetConfig, VehicleKind};
pub use models::{AirPlane, Car};
pub use vehicle::{Accelerate, SpeedChange, Vehicle};
