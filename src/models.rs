//! Example payloads.

use crate::vehicle::{Accelerate, SpeedChange};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Car;

impl Accelerate for Car {
    fn accelerate(&self, x: i32) -> SpeedChange {
        SpeedChange {
            vehicle: "car",
            delta: x,
        }
    }
}

/// Accelerates twice as hard as a [`Car`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AirPlane;

impl Accelerate for AirPlane {
    fn accelerate(&self, x: i32) -> SpeedChange {
        SpeedChange {
            vehicle: "plane",
            delta: x.saturating_mul(2),
        }
    }
}
