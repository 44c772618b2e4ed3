//! Process-wide precision constants.
//!
//! Floating-point noise is absorbed by rounding to a fixed number of decimal
//! places rather than by comparing against hidden epsilons. Every place in the
//! crate that rounds goes through the constants and helpers in this module.

use num_traits::Float;

/// Decimal places kept for vertex coordinates produced by rotation and
/// regular-polygon generation.
///
/// Five places are enough to make a full `2π` rotation reproduce the original
/// coordinates exactly.
pub const VERTEX_DECIMALS: i32 = 5;

/// Decimal places used when deciding whether a residual overlap counts as
/// resolved.
///
/// Zero means the magnitude is rounded to the nearest integer.
pub const RESOLUTION_DECIMALS: i32 = 0;

/// Rounds `value` to `decimals` places after the decimal point.
///
/// Negative zero is folded into positive zero so that rounded coordinates
/// compare and print consistently.
///
/// # Example
///
/// ```
/// use sat2d::tolerance::round_to_decimals;
///
/// assert_eq!(round_to_decimals(1.234_567_f64, 5), 1.23457);
/// assert_eq!(round_to_decimals(2.4_f64, 0), 2.0);
/// ```
#[inline]
pub fn round_to_decimals<F: Float>(value: F, decimals: i32) -> F {
    let scale = F::from(10.0).unwrap().powi(decimals);
    let rounded = (value * scale).round() / scale;
    if rounded.is_zero() {
        F::zero()
    } else {
        rounded
    }
}

/// Rounds a vertex coordinate to [`VERTEX_DECIMALS`].
#[inline]
pub fn round_coordinate<F: Float>(value: F) -> F {
    round_to_decimals(value, VERTEX_DECIMALS)
}

/// Returns true if a residual overlap magnitude rounds to zero at
/// [`RESOLUTION_DECIMALS`].
#[inline]
pub fn is_resolved<F: Float>(magnitude: F) -> bool {
    round_to_decimals(magnitude, RESOLUTION_DECIMALS).is_zero()
}
