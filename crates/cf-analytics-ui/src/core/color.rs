//! Request-count color scale shared by the ranked table and the map.

use crate::core::theme::ThemeMode;
use std::fmt;

/// Gradient endpoints in dark mode (low → high).
pub const DARK_GRADIENT: (Rgb, Rgb) = (Rgb::new(0x2d, 0x2d, 0x2d), Rgb::new(0x3b, 0x82, 0xf6));
/// Gradient endpoints in light mode (low → high).
pub const LIGHT_GRADIENT: (Rgb, Rgb) = (Rgb::new(0xf1, 0xf5, 0xf9), Rgb::new(0x25, 0x63, 0xeb));

/// 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Blend towards `other` by `t` in `[0, 1]`, rounding each channel.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| {
            let value = (f64::from(to) - f64::from(from)).mul_add(t, f64::from(from));
            channel_from_f64(value)
        };
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_from_f64(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Linear mapping from request count to a two-point gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScale {
    domain_max: f64,
    low: Rgb,
    high: Rgb,
}

impl ColorScale {
    /// Scale over `[0, max_requests]`, or `[0, 1]` when the maximum is 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn for_theme(max_requests: u64, mode: ThemeMode) -> Self {
        let (low, high) = if mode.is_dark() {
            DARK_GRADIENT
        } else {
            LIGHT_GRADIENT
        };
        let domain_max = if max_requests > 0 {
            max_requests as f64
        } else {
            1.0
        };
        Self {
            domain_max,
            low,
            high,
        }
    }

    /// Upper end of the domain.
    #[must_use]
    pub const fn domain_max(&self) -> f64 {
        self.domain_max
    }

    /// Color for `requests`; values outside the domain clamp to the endpoints.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn color(&self, requests: u64) -> Rgb {
        self.low.lerp(self.high, requests as f64 / self.domain_max)
    }

    /// Evenly spaced `(value, color)` stops for a legend, including both ends.
    #[must_use]
    pub fn legend_stops(&self, steps: usize) -> Vec<(f64, Rgb)> {
        let steps = steps.max(2);
        (0..steps)
            .map(|i| {
                let t = f64::from(u32::try_from(i).unwrap_or(u32::MAX))
                    / f64::from(u32::try_from(steps - 1).unwrap_or(u32::MAX));
                (t * self.domain_max, self.low.lerp(self.high, t))
            })
            .collect()
    }

    /// CSS `linear-gradient` running left to right through `steps` legend stops.
    #[must_use]
    pub fn css_gradient(&self, steps: usize) -> String {
        let stops = self.legend_stops(steps);
        let last = stops.len().saturating_sub(1).max(1);
        let parts: Vec<String> = stops
            .iter()
            .enumerate()
            .map(|(i, (_, color))| format!("{color} {}%", i * 100 / last))
            .collect();
        format!("linear-gradient(to right, {})", parts.join(", "))
    }
}

/// Light text used on dark badge backgrounds.
pub const BADGE_TEXT_LIGHT: &str = "#fff";
/// Dark text used on light badge backgrounds in light mode.
pub const BADGE_TEXT_DARK: &str = "#333";

/// Inline style for a rank badge in the country table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankBadgeStyle {
    /// Background from the color scale.
    pub background: Rgb,
    /// Text color.
    pub text: &'static str,
    /// CSS border declaration value.
    pub border: String,
    /// Whether the background counts as dark.
    pub dark_background: bool,
}

impl RankBadgeStyle {
    /// Style a badge for `requests`.
    ///
    /// The background counts as dark once the country has more than half of
    /// `max_requests`; this threshold stands in for a luminance check.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(
        requests: u64,
        max_requests: u64,
        mode: ThemeMode,
        scale: &ColorScale,
        border_color: &str,
    ) -> Self {
        let dark_background = requests as f64 > max_requests as f64 * 0.5;
        let text = if dark_background || mode.is_dark() {
            BADGE_TEXT_LIGHT
        } else {
            BADGE_TEXT_DARK
        };
        let border = if dark_background {
            "none".to_string()
        } else {
            format!("1px solid {border_color}")
        };
        Self {
            background: scale.color(requests),
            text,
            border,
            dark_background,
        }
    }

    /// Inline `style` attribute value.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "background-color: {}; color: {}; border: {};",
            self.background, self.text, self.border
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_and_rejects_garbage() {
        assert_eq!(Rgb::from_hex("#2563eb"), Some(LIGHT_GRADIENT.1));
        assert_eq!(LIGHT_GRADIENT.1.to_hex(), "#2563eb");
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("zzzzzz"), None);
    }

    #[test]
    fn endpoints_match_theme_gradients() {
        let light = ColorScale::for_theme(200, ThemeMode::Light);
        assert_eq!(light.color(0), LIGHT_GRADIENT.0);
        assert_eq!(light.color(200), LIGHT_GRADIENT.1);
        let dark = ColorScale::for_theme(200, ThemeMode::Dark);
        assert_eq!(dark.color(0).to_string(), "rgb(45, 45, 45)");
        assert_eq!(dark.color(200).to_hex(), "#3b82f6");
    }

    #[test]
    fn midpoint_interpolates_and_rounds() {
        let dark = ColorScale::for_theme(2, ThemeMode::Dark);
        // 0x2d→0x3b = 45→59, 45→130, 45→246 at t = 0.5
        assert_eq!(dark.color(1), Rgb::new(52, 88, 146));
    }

    #[test]
    fn zero_maximum_uses_unit_domain() {
        let scale = ColorScale::for_theme(0, ThemeMode::Light);
        assert!((scale.domain_max() - 1.0).abs() < f64::EPSILON);
        assert_eq!(scale.color(0), LIGHT_GRADIENT.0);
        assert_eq!(scale.color(5), LIGHT_GRADIENT.1);
    }

    #[test]
    fn scale_is_monotonic_towards_high_end() {
        let scale = ColorScale::for_theme(1000, ThemeMode::Light);
        let blues: Vec<u8> = (0..=10).map(|step| scale.color(step * 100).b).collect();
        let reds: Vec<u8> = (0..=10).map(|step| scale.color(step * 100).r).collect();
        // light gradient: red falls, blue falls slightly (0xf9 → 0xeb)
        assert!(reds.windows(2).all(|pair| pair[0] >= pair[1]));
        assert!(blues.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn legend_stops_cover_domain() {
        let stops = ColorScale::for_theme(400, ThemeMode::Dark).legend_stops(5);
        assert_eq!(stops.len(), 5);
        assert!(stops[0].0.abs() < f64::EPSILON);
        assert!((stops[4].0 - 400.0).abs() < f64::EPSILON);
        assert_eq!(stops[4].1, DARK_GRADIENT.1);
    }

    #[test]
    fn css_gradient_lists_percent_stops() {
        let css = ColorScale::for_theme(10, ThemeMode::Light).css_gradient(3);
        assert_eq!(
            css,
            "linear-gradient(to right, rgb(241, 245, 249) 0%, rgb(139, 172, 242) 50%, rgb(37, 99, 235) 100%)"
        );
    }

    #[test]
    fn badge_threshold_is_half_of_maximum() {
        let scale = ColorScale::for_theme(100, ThemeMode::Light);
        let above = RankBadgeStyle::new(51, 100, ThemeMode::Light, &scale, "#e1e1e1");
        assert!(above.dark_background);
        assert_eq!(above.text, BADGE_TEXT_LIGHT);
        assert_eq!(above.border, "none");

        let at = RankBadgeStyle::new(50, 100, ThemeMode::Light, &scale, "#e1e1e1");
        assert!(!at.dark_background);
        assert_eq!(at.text, BADGE_TEXT_DARK);
        assert_eq!(at.border, "1px solid #e1e1e1");
    }

    #[test]
    fn dark_mode_badges_always_use_light_text() {
        let scale = ColorScale::for_theme(100, ThemeMode::Dark);
        let low = RankBadgeStyle::new(1, 100, ThemeMode::Dark, &scale, "#404040");
        assert!(!low.dark_background);
        assert_eq!(low.text, BADGE_TEXT_LIGHT);
        assert!(low.css().contains("border: 1px solid #404040"));
    }
}
