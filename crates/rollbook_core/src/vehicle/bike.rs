//! Two-wheeled vehicles.

use crate::vehicle::{Drivable, Motion, VEHICLE_HORN};

const BIKE_SPEED_DELTA: i32 = 10;

/// Two-wheeler. Uses the vehicle-family horn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bike {
    brand: String,
    motion: Motion,
}

impl Bike {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            motion: Motion::new(),
        }
    }

    pub fn kick_start(&self) -> String {
        format!("{} bike kick-started.", self.brand)
    }
}

impl Drivable for Bike {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }

    fn advance(&mut self) -> String {
        self.accelerate(BIKE_SPEED_DELTA);
        format!("{} bike is riding on two wheels.", self.brand)
    }

    fn honk(&self) -> String {
        VEHICLE_HORN.to_string()
    }
}
