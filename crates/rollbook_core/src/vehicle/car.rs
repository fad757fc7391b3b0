//! Plain and electric cars.

use crate::vehicle::{Chargeable, Drivable, Motion, Trunk, CAR_HORN, FULL_LEVEL};

const CAR_SPEED_DELTA: i32 = 20;
const ELECTRIC_SPEED_DELTA: i32 = 30;
const BATTERY_DRAIN_PER_MOVE: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    brand: String,
    motion: Motion,
}

impl Car {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            motion: Motion::new(),
        }
    }
}

impl Drivable for Car {
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
        self.accelerate(CAR_SPEED_DELTA);
        format!("{} car is driving on the road.", self.brand)
    }

    fn honk(&self) -> String {
        CAR_HORN.to_string()
    }
}

impl Trunk for Car {}

/// Battery car. Satisfies both `Drivable` and `Chargeable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectricCar {
    brand: String,
    motion: Motion,
    battery_level: u8,
}

impl ElectricCar {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            motion: Motion::new(),
            battery_level: FULL_LEVEL,
        }
    }

    /// Battery charge in percent.
    pub fn battery_level(&self) -> u8 {
        self.battery_level
    }
}

impl Drivable for ElectricCar {
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
        self.accelerate(ELECTRIC_SPEED_DELTA);
        self.battery_level = self.battery_level.saturating_sub(BATTERY_DRAIN_PER_MOVE);
        format!(
            "{} electric car is gliding silently. Battery: {}%.",
            self.brand, self.battery_level
        )
    }

    fn honk(&self) -> String {
        format!("Soft beep from {} (electric).", self.brand)
    }
}

impl Chargeable for ElectricCar {
    fn charge_battery(&mut self) -> String {
        self.battery_level = FULL_LEVEL;
        format!("{} battery charged to {FULL_LEVEL}%.", self.brand)
    }
}

impl Trunk for ElectricCar {}
