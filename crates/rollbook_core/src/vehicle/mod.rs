//! Vehicle capability exercise.
//!
//! # Responsibility
//! - Model vehicles as concrete types composing an owned `Motion` value.
//! - Express shared behavior through capability traits with default methods.
//!
//! # Invariants
//! - Speed never goes below zero; every delta is clamped at the floor.
//! - Fuel and battery levels stay within 0..=100.

mod bike;
mod car;
mod combustion;

pub use bike::Bike;
pub use car::{Car, ElectricCar};
pub use combustion::{DieselCar, FuelType, IceEngine, PetrolCar};

use log::debug;

/// Horn used by any `Drivable` that does not override `honk`.
pub const DEFAULT_HORN: &str = "Default horn: Beep Beep!";
/// Horn of the vehicle family when a type does not specialize it further.
pub const VEHICLE_HORN: &str = "From Vehicle class";
/// Horn shared by the car family.
pub const CAR_HORN: &str = "Honk from Car";
/// Upper bound for fuel and battery percentages.
pub const FULL_LEVEL: u8 = 100;

/// Speed state owned by each vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Motion {
    speed: u32,
}

impl Motion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current speed in km/h.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Applies `delta` and clamps the result at zero. Returns the new speed.
    pub fn change_speed(&mut self, delta: i32) -> u32 {
        let next = i64::from(self.speed) + i64::from(delta);
        self.speed = u32::try_from(next.max(0)).unwrap_or(u32::MAX);
        self.speed
    }

    pub fn stop(&mut self) {
        self.speed = 0;
    }
}

/// Capability of anything that can be driven.
pub trait Drivable {
    fn brand(&self) -> &str;
    fn motion(&self) -> &Motion;
    fn motion_mut(&mut self) -> &mut Motion;

    /// Moves once, changing speed by this vehicle's delta. Returns a
    /// description of the move.
    fn advance(&mut self) -> String;

    fn honk(&self) -> String {
        DEFAULT_HORN.to_string()
    }

    fn speed(&self) -> u32 {
        self.motion().speed()
    }

    /// Console line for the current speed, e.g. `Hero speed now 10 km/h.`
    fn speed_report(&self) -> String {
        format!("{} speed now {} km/h.", self.brand(), self.speed())
    }

    fn start(&self) -> String {
        format!("{} started.", self.brand())
    }

    fn stop(&mut self) -> String {
        self.motion_mut().stop();
        format!("{} stopped.", self.brand())
    }

    /// Shared speed helper for `advance` implementations.
    fn accelerate(&mut self, delta: i32) -> u32 {
        let speed = self.motion_mut().change_speed(delta);
        debug!(
            "event=speed_change module=vehicle status=ok brand={} delta={delta} speed={speed}",
            self.brand()
        );
        speed
    }
}

/// Capability of anything with a rechargeable battery.
pub trait Chargeable {
    fn charge_battery(&mut self) -> String;

    fn plug_in(&self) -> String {
        "Plugging in to charge...".to_string()
    }
}

/// Car-family behavior layered on `Drivable`.
pub trait Trunk: Drivable {
    /// Honks with this vehicle's own horn, then opens the trunk.
    fn open_trunk(&self) -> Vec<String> {
        vec![self.honk(), format!("{} trunk opened.", self.brand())]
    }
}

pub fn safety_tip() -> &'static str {
    "Safety tip: Always wear a seatbelt."
}

pub fn charging_guidelines() -> &'static str {
    "Use manufacturer-approved chargers only."
}

/// One-line state summary, e.g. `Vehicle{brand='Tesla', speed=30}`.
pub fn describe(vehicle: &dyn Drivable) -> String {
    format!(
        "Vehicle{{brand='{}', speed={}}}",
        vehicle.brand(),
        vehicle.speed()
    )
}

#[cfg(test)]
mod tests {
    use super::Motion;

    #[test]
    fn speed_is_clamped_at_zero() {
        let mut motion = Motion::new();
        assert_eq!(motion.change_speed(10), 10);
        assert_eq!(motion.change_speed(-15), 0);
        assert_eq!(motion.change_speed(-1), 0);
    }

    #[test]
    fn stop_resets_speed() {
        let mut motion = Motion::new();
        motion.change_speed(40);
        motion.stop();
        assert_eq!(motion.speed(), 0);
    }

    #[test]
    fn large_deltas_saturate() {
        let mut motion = Motion::new();
        motion.change_speed(i32::MAX);
        motion.change_speed(i32::MAX);
        motion.change_speed(i32::MAX);
        assert_eq!(motion.speed(), u32::MAX);
    }
}
