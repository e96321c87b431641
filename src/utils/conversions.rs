//! Conversiones de unidades

/// Millas por kilómetro
pub const MILES_PER_KILOMETER: f64 = 0.621371;

/// Convertir kilómetros a millas redondeando a dos decimales
pub fn kilometers_to_miles(kilometers: f64) -> f64 {
    (kilometers * MILES_PER_KILOMETER * 100.0).round() / 100.0
}
