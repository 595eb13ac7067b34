//! Physical constants and system parameters

/// Speed of sound in water under standard conditions (m/s)
pub const SPEED_OF_SOUND_WATER: f64 = 1480.0;
