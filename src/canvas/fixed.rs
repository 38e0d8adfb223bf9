//! 26.6 fixed-point device coordinates
//!
//! Layout math happens in logical points. Everything that touches the pixel
//! grid goes through [`Fixed`], which stores device pixels with 6 fractional
//! bits, the same representation glyph rasterizers use for pen positions.

use std::ops::{Add, AddAssign};

/// Points per inch; logical units are points
pub const POINTS_PER_INCH: f64 = 72.0;

/// A device coordinate with 6 fractional bits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(pub i32);

impl Fixed {
    const ONE: i32 = 64;

    /// Convert logical points to device units at `dpi`, truncating
    #[inline]
    pub fn from_points(points: f64, dpi: f64) -> Self {
        Self((points * dpi * f64::from(Self::ONE) / POINTS_PER_INCH) as i32)
    }

    /// Like [`Fixed::from_points`], but `None` when the result does not fit
    pub fn checked_from_points(points: f64, dpi: f64) -> Option<Self> {
        let v = points * dpi * f64::from(Self::ONE) / POINTS_PER_INCH;
        (v.is_finite() && v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX))
            .then(|| Self(v as i32))
    }

    /// A whole number of device pixels
    #[inline]
    pub const fn from_pixels(px: i32) -> Self {
        Self(px << 6)
    }

    /// Smallest whole pixel count not less than this value
    #[inline]
    pub const fn ceil(self) -> i32 {
        ((self.0 as i64 + 0x3f) >> 6) as i32
    }

    /// Nearest whole pixel
    #[inline]
    pub const fn round(self) -> i32 {
        ((self.0 as i64 + 0x20) >> 6) as i32
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::ONE as f32
    }
}

impl Add for Fixed {
    type Output = Fixed;

    #[inline]
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 + rhs.0)
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Fixed) {
        self.0 += rhs.0;
    }
}

/// A point in device units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: Fixed,
    pub y: Fixed,
}

impl Point {
    #[inline]
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }
}

/// Convert a logical length to whole device pixels, rounding up
///
/// `None` when the length is not representable in 26.6.
#[inline]
pub fn device_ceil(points: f64, dpi: f64) -> Option<i32> {
    Fixed::checked_from_points(points, dpi).map(Fixed::ceil)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_scales_by_dpi() {
        assert_eq!(Fixed::from_points(72.0, 72.0), Fixed(64 * 72));
        // 16pt at 120dpi = 26.666.. px
        assert_eq!(Fixed::from_points(16.0, 120.0), Fixed(1706));
    }

    #[test]
    fn test_ceil_and_round() {
        assert_eq!(Fixed(0).ceil(), 0);
        assert_eq!(Fixed(1).ceil(), 1);
        assert_eq!(Fixed(64).ceil(), 1);
        assert_eq!(Fixed(65).ceil(), 2);
        assert_eq!(Fixed(96).round(), 2);
        assert_eq!(Fixed(95).round(), 1);
    }

    #[test]
    fn test_device_ceil_never_clips() {
        for tenths in 0..500 {
            let points = f64::from(tenths) / 10.0;
            let px = device_ceil(points, 120.0).unwrap();
            assert!(f64::from(px) * 72.0 / 120.0 >= points - 1.0 / 64.0);
        }
    }

    #[test]
    fn test_ceil_at_i32_max_does_not_overflow() {
        assert_eq!(Fixed(i32::MAX).ceil(), 1 << 25);
        assert_eq!(Fixed(i32::MAX).round(), 1 << 25);
    }

    #[test]
    fn test_checked_from_points_rejects_out_of_range() {
        assert_eq!(Fixed::checked_from_points(16.0, 72.0), Some(Fixed(1024)));
        // 21.12M points at 120dpi is past i32::MAX in 26.6
        assert_eq!(Fixed::checked_from_points(21_120_000.0, 120.0), None);
        assert_eq!(Fixed::checked_from_points(f64::INFINITY, 120.0), None);
        assert_eq!(device_ceil(21_120_000.0, 120.0), None);
    }

    #[test]
    fn test_from_pixels_round_trip() {
        assert_eq!(Fixed::from_pixels(27).ceil(), 27);
        assert_eq!(Fixed::from_pixels(3) + Fixed(10), Fixed(202));
    }
}
