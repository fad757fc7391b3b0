//! Combustion-engine cars.

use crate::vehicle::{Drivable, Motion, Trunk, CAR_HORN, FULL_LEVEL};

const PETROL_SPEED_DELTA: i32 = 25;
const DIESEL_SPEED_DELTA: i32 = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelType {
    Petrol,
    Diesel,
}

impl FuelType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Petrol => "petrol",
            Self::Diesel => "diesel",
        }
    }
}

/// Fuel tank shared by combustion cars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IceEngine {
    fuel: FuelType,
    fuel_level: u8,
}

impl IceEngine {
    /// Starts with a full tank.
    pub fn new(fuel: FuelType) -> Self {
        Self {
            fuel,
            fuel_level: FULL_LEVEL,
        }
    }

    /// Starts at `level` percent, capped at a full tank.
    pub fn with_level(fuel: FuelType, level: u8) -> Self {
        Self {
            fuel,
            fuel_level: level.min(FULL_LEVEL),
        }
    }

    pub fn fuel(&self) -> FuelType {
        self.fuel
    }

    pub fn fuel_level(&self) -> u8 {
        self.fuel_level
    }

    /// Adds fuel, capped at a full tank. Returns the new level.
    pub fn refuel(&mut self, amount: u32) -> u8 {
        let level = u32::from(self.fuel_level).saturating_add(amount);
        self.fuel_level = u8::try_from(level.min(u32::from(FULL_LEVEL))).unwrap_or(FULL_LEVEL);
        self.fuel_level
    }
}

macro_rules! combustion_car {
    ($name:ident, $fuel:expr, $delta:expr, $verb:literal, $mode_fn:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            brand: String,
            motion: Motion,
            engine: IceEngine,
        }

        impl $name {
            pub fn new(brand: impl Into<String>) -> Self {
                Self {
                    brand: brand.into(),
                    motion: Motion::new(),
                    engine: IceEngine::new($fuel),
                }
            }

            pub fn engine(&self) -> &IceEngine {
                &self.engine
            }

            pub fn fuel_type(&self) -> String {
                format!("{} uses {}.", self.brand, self.engine.fuel().as_str())
            }

            pub fn refuel(&mut self, amount: u32) -> String {
                let level = self.engine.refuel(amount);
                format!("{} refueled to {level}%.", self.brand)
            }

            pub fn $mode_fn(&self) -> String {
                format!(
                    "{} running in {} mode.",
                    self.brand,
                    self.engine.fuel().as_str()
                )
            }
        }

        impl Drivable for $name {
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
                self.accelerate($delta);
                format!(concat!("{} ", $verb, " car is driving."), self.brand)
            }

            fn honk(&self) -> String {
                CAR_HORN.to_string()
            }
        }

        impl Trunk for $name {}
    };
}

combustion_car!(
    PetrolCar,
    FuelType::Petrol,
    PETROL_SPEED_DELTA,
    "petrol",
    use_petrol_mode
);
combustion_car!(
    DieselCar,
    FuelType::Diesel,
    DIESEL_SPEED_DELTA,
    "diesel",
    use_diesel_mode
);
