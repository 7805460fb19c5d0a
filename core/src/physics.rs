// core/src/physics.rs

pub const SEA_LEVEL_HPA: f64 = 1013.25; // standardatmosfære ved havnivå (hPa)
pub const ALT_SCALE_M: f64 = 44330.0;   // skalakonstant i barometrisk formel (m)
pub const ALT_EXPONENT: f64 = 5.255;

/// Høyde (m) fra trykk `p` relativt til referansetrykk `p0`, begge i hPa.
/// Standard barometrisk tilnærming: 44330 * (1 - (p/p0)^(1/5.255)).
#[inline]
pub fn altitude_from_pressure(pressure_hpa: f64, reference_hpa: f64) -> f64 {
    ALT_SCALE_M * (1.0 - (pressure_hpa / reference_hpa).powf(1.0 / ALT_EXPONENT))
}

/// Høyde over havet mot 1013.25 hPa.
#[inline]
pub fn altitude_asl(pressure_hpa: f64) -> f64 {
    altitude_from_pressure(pressure_hpa, SEA_LEVEL_HPA)
}

/// Vertikalfart (m/s) mellom to høyder målt `dt_ms` fra hverandre.
/// dt_ms <= 0 gir 0.0 (ingen tidsbasis).
#[inline]
pub fn vertical_speed(prev_alt_m: f64, alt_m: f64, dt_ms: i64) -> f64 {
    if dt_ms <= 0 {
        return 0.0;
    }
    let v = (alt_m - prev_alt_m) / dt_ms as f64 * 1000.0;
    if v.is_finite() { v } else { 0.0 }
}
