//! Additive RGB color with integer channels clamped to a fixed range.
//!
//! Every mutating operation keeps the channels inside
//! `[MIN_COLOR_VALUE, MAX_COLOR_VALUE]` and reports through its `bool`
//! return whether clamping was needed. What "needed" means differs per
//! operation, see the individual method docs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::BrightnessClip;

/// Largest value a channel may hold.
pub const MAX_COLOR_VALUE: i32 = 1000;

/// Smallest value a channel may hold.
pub const MIN_COLOR_VALUE: i32 = 0;

/// Clamp a single channel value into `[MIN_COLOR_VALUE, MAX_COLOR_VALUE]`.
pub const fn clip_value(value: i32) -> i32 {
    if value > MAX_COLOR_VALUE {
        MAX_COLOR_VALUE
    } else if value < MIN_COLOR_VALUE {
        MIN_COLOR_VALUE
    } else {
        value
    }
}

const fn in_range(value: i32) -> bool {
    value >= MIN_COLOR_VALUE && value <= MAX_COLOR_VALUE
}

/// An RGB color with channels in `[0, 1000]`.
///
/// The default color is full white. Black is the identity for
/// [`add_color`](Self::add_color), so reductions must start from
/// [`Color::BLACK`] rather than from `Color::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct Color {
    red: i32,
    green: i32,
    blue: i32,
}

impl Color {
    pub const BLACK: Self = Self::raw(MIN_COLOR_VALUE, MIN_COLOR_VALUE, MIN_COLOR_VALUE);
    pub const RED: Self = Self::raw(MAX_COLOR_VALUE, MIN_COLOR_VALUE, MIN_COLOR_VALUE);
    pub const GREEN: Self = Self::raw(MIN_COLOR_VALUE, MAX_COLOR_VALUE, MIN_COLOR_VALUE);
    pub const BLUE: Self = Self::raw(MIN_COLOR_VALUE, MIN_COLOR_VALUE, MAX_COLOR_VALUE);
    pub const WHITE: Self = Self::raw(MAX_COLOR_VALUE, MAX_COLOR_VALUE, MAX_COLOR_VALUE);

    const fn raw(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Build a color from raw channel values, clamping each one.
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self::raw(clip_value(red), clip_value(green), clip_value(blue))
    }

    pub const fn red(&self) -> i32 {
        self.red
    }

    pub const fn green(&self) -> i32 {
        self.green
    }

    pub const fn blue(&self) -> i32 {
        self.blue
    }

    pub fn set_to_black(&mut self) {
        *self = Self::BLACK;
    }

    pub fn set_to_red(&mut self) {
        *self = Self::RED;
    }

    pub fn set_to_green(&mut self) {
        *self = Self::GREEN;
    }

    pub fn set_to_blue(&mut self) {
        *self = Self::BLUE;
    }

    pub fn set_to_white(&mut self) {
        *self = Self::WHITE;
    }

    /// Assign raw channel values.
    ///
    /// Returns `true` if any of the *inputs* lay outside the valid range,
    /// in which case the stored channels are clamped.
    pub fn set_to(&mut self, red: i32, green: i32, blue: i32) -> bool {
        let clipped = !(in_range(red) && in_range(green) && in_range(blue));
        *self = Self::new(red, green, blue);
        if clipped {
            tracing::trace!(red, green, blue, "set_to clamped out-of-range input");
        }
        clipped
    }

    /// Copy another color's channels through the same path as [`set_to`](Self::set_to).
    pub fn set_to_color(&mut self, other: &Self) -> bool {
        self.set_to(other.red, other.green, other.blue)
    }

    /// Add `rhs` channel-wise.
    ///
    /// Returns `true` if any resulting channel exceeded the maximum and was
    /// clamped.
    pub fn add_color(&mut self, rhs: &Self) -> bool {
        let red = self.red.saturating_add(rhs.red);
        let green = self.green.saturating_add(rhs.green);
        let blue = self.blue.saturating_add(rhs.blue);
        let clipped = red > MAX_COLOR_VALUE || green > MAX_COLOR_VALUE || blue > MAX_COLOR_VALUE;
        self.store(red, green, blue, clipped)
    }

    /// Subtract `rhs` channel-wise.
    ///
    /// Returns `true` if any resulting channel fell below the minimum and was
    /// clamped.
    pub fn subtract_color(&mut self, rhs: &Self) -> bool {
        let red = self.red.saturating_sub(rhs.red);
        let green = self.green.saturating_sub(rhs.green);
        let blue = self.blue.saturating_sub(rhs.blue);
        let clipped = red < MIN_COLOR_VALUE || green < MIN_COLOR_VALUE || blue < MIN_COLOR_VALUE;
        self.store(red, green, blue, clipped)
    }

    /// Scale every channel by `factor` using the default [`BrightnessClip`].
    pub fn adjust_brightness(&mut self, factor: f64) -> bool {
        self.adjust_brightness_with(factor, BrightnessClip::default())
    }

    /// Scale every channel by `factor`, truncating toward zero.
    ///
    /// Returns `true` if the policy triggered clamping:
    /// - [`BrightnessClip::UpperOnly`]: some channel exceeded the maximum.
    ///   Negative results survive when nothing overflows.
    /// - [`BrightnessClip::Both`]: some channel left the valid range.
    pub fn adjust_brightness_with(&mut self, factor: f64, policy: BrightnessClip) -> bool {
        // `as` saturates on overflow and truncates toward zero.
        let scale = |channel: i32| (f64::from(channel) * factor) as i32;
        let red = scale(self.red);
        let green = scale(self.green);
        let blue = scale(self.blue);

        let clipped = match policy {
            BrightnessClip::UpperOnly => {
                red > MAX_COLOR_VALUE || green > MAX_COLOR_VALUE || blue > MAX_COLOR_VALUE
            }
            BrightnessClip::Both => !(in_range(red) && in_range(green) && in_range(blue)),
        };
        self.store(red, green, blue, clipped)
    }

    /// Write computed channels, clamping all three when `clipped` is set.
    fn store(&mut self, red: i32, green: i32, blue: i32, clipped: bool) -> bool {
        if clipped {
            tracing::trace!(red, green, blue, "clamping color channels");
            *self = Self::new(red, green, blue);
        } else {
            *self = Self::raw(red, green, blue);
        }
        clipped
    }
}

impl Default for Color {
    /// Full white.
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R: {} G: {} B: {}", self.red, self.green, self.blue)
    }
}

impl From<[i32; 3]> for Color {
    fn from(rgb: [i32; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Color> for [i32; 3] {
    fn from(color: Color) -> Self {
        [color.red, color.green, color.blue]
    }
}
