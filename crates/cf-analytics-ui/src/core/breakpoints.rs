//! Responsive breakpoint definitions for the Web UI.

/// Widest viewport (inclusive, CSS pixels) that still uses the mobile layout.
pub const MOBILE_MAX_WIDTH: u32 = 768;

/// Fallback width when the viewport cannot be measured.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Layout density derived from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Narrow screens: abbreviated headers, compact spacing.
    Mobile,
    /// Everything wider than [`MOBILE_MAX_WIDTH`].
    Desktop,
}

impl Layout {
    /// Pick the layout for a viewport width.
    #[must_use]
    pub const fn for_width(width: u32) -> Self {
        if is_mobile(width) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Whether this is the mobile layout.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }

    /// Spacing class used between the stacked chart, map and table blocks.
    #[must_use]
    pub const fn gap_class(self) -> &'static str {
        match self {
            Self::Mobile => "gap-3",
            Self::Desktop => "gap-6",
        }
    }
}

/// Whether a viewport of `width` CSS pixels uses the mobile layout.
#[must_use]
pub const fn is_mobile(width: u32) -> bool {
    width <= MOBILE_MAX_WIDTH
}

/// Convert a raw `innerWidth` reading into whole pixels.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn width_from_px(raw: Option<f64>) -> u32 {
    match raw {
        Some(px) if px.is_finite() && px >= 0.0 => px.min(f64::from(u32::MAX)) as u32,
        _ => DEFAULT_VIEWPORT_WIDTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert!(is_mobile(0));
        assert!(is_mobile(768));
        assert!(!is_mobile(769));
        assert_eq!(Layout::for_width(400), Layout::Mobile);
        assert_eq!(Layout::for_width(1024), Layout::Desktop);
    }

    #[test]
    fn unreadable_width_falls_back_to_desktop() {
        assert_eq!(width_from_px(None), DEFAULT_VIEWPORT_WIDTH);
        assert_eq!(width_from_px(Some(f64::NAN)), DEFAULT_VIEWPORT_WIDTH);
        assert_eq!(width_from_px(Some(375.6)), 375);
        assert!(!Layout::for_width(width_from_px(None)).is_mobile());
    }
}
