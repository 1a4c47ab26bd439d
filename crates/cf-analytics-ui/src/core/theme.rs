//! Theme mode, palette tokens and startup resolution.
//!
//! # Design
//! - Resolution is a pure function over the three sources (query string,
//!   persisted value, OS preference) so the priority order is testable natively.
//! - The DOM side only applies [`RootClasses`] and reads/writes the raw values.

/// CSS class marking the dark theme on the document root.
pub const DARK_ROOT_CLASS: &str = "dark-mode";
/// CSS class marking the light theme on the document root.
pub const LIGHT_ROOT_CLASS: &str = "light-mode";
/// Media query reporting the OS color-scheme preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used for persistence and CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Mode for a dark/light boolean.
    #[must_use]
    pub const fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    /// Whether this is the dark mode.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Root class mutation for a theme change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootClasses {
    /// Class to add to the document root.
    pub add: &'static str,
    /// Class to remove from the document root.
    pub remove: &'static str,
}

impl RootClasses {
    /// Classes for `mode`; the two markers are mutually exclusive.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                add: DARK_ROOT_CLASS,
                remove: LIGHT_ROOT_CLASS,
            },
            ThemeMode::Light => Self {
                add: LIGHT_ROOT_CLASS,
                remove: DARK_ROOT_CLASS,
            },
        }
    }
}

/// Raw inputs read once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSources<'a> {
    /// `location.search`, with or without the leading `?`.
    pub query: &'a str,
    /// Persisted explicit choice, if any.
    pub persisted: Option<&'a str>,
    /// OS color-scheme preference.
    pub system_prefers_dark: bool,
}

/// Resolve the initial mode: query string, then persisted choice, then OS preference.
#[must_use]
pub fn resolve_initial(sources: ThemeSources<'_>) -> ThemeMode {
    query_override(sources.query)
        .or_else(|| persisted_choice(sources.persisted))
        .unwrap_or(ThemeMode::from_dark(sources.system_prefers_dark))
}

/// Mode forced by `?dark`, `?light` or `?theme=dark|light`.
#[must_use]
pub fn query_override(query: &str) -> Option<ThemeMode> {
    let params = parse_query(query);
    let has = |key: &str| params.iter().any(|(name, _)| name == key);
    let theme = params
        .iter()
        .find(|(name, _)| name == "theme")
        .map(|(_, value)| value.as_str());

    if has("dark") || theme == Some("dark") {
        Some(ThemeMode::Dark)
    } else if has("light") || theme == Some("light") {
        Some(ThemeMode::Light)
    } else {
        None
    }
}

/// Interpret a persisted value; only a non-empty value counts as an explicit choice.
#[must_use]
pub fn persisted_choice(value: Option<&str>) -> Option<ThemeMode> {
    value
        .filter(|value| !value.is_empty())
        .map(|value| ThemeMode::from_dark(value == "dark"))
}

/// Mode to apply after an OS preference change, or `None` when an explicit choice is persisted.
#[must_use]
pub fn follow_system(persisted: Option<&str>, prefers_dark: bool) -> Option<ThemeMode> {
    if persisted_choice(persisted).is_some() {
        None
    } else {
        Some(ThemeMode::from_dark(prefers_dark))
    }
}

/// Outcome of an explicit toggle from the current mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeToggle {
    /// Mode after the toggle.
    pub next: ThemeMode,
    /// Value written under the theme storage key.
    pub persist: &'static str,
    /// Root class change for `next`.
    pub root: RootClasses,
}

impl ThemeToggle {
    /// Flip `current`; the persisted value always names the new mode.
    #[must_use]
    pub const fn from_current(current: ThemeMode) -> Self {
        let next = current.toggled();
        Self {
            next,
            persist: next.as_str(),
            root: RootClasses::for_mode(next),
        }
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(name), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or(spaced.clone(), |decoded| decoded.into_owned())
}

/// Chart series color for requests.
pub const REQUESTS_SERIES_COLOR: &str = "#2563eb";
/// Chart series color for bandwidth.
pub const BANDWIDTH_SERIES_COLOR: &str = "#10b981";

/// Inline color tokens for the geography block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    /// Panel background.
    pub background: &'static str,
    /// Primary text.
    pub text: &'static str,
    /// Secondary text (axes, captions).
    pub text_secondary: &'static str,
    /// Borders and dividers.
    pub border: &'static str,
    /// Grid stroke; `None` keeps the stylesheet default.
    pub grid: Option<&'static str>,
    /// Tooltip drop shadow.
    pub shadow: &'static str,
    /// Requests series color.
    pub requests: &'static str,
    /// Bandwidth series color.
    pub bandwidth: &'static str,
}

impl ThemeColors {
    /// Tokens for `mode`.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                background: "#2d2d2d",
                text: "#ffffff",
                text_secondary: "#b0b0b0",
                border: "#404040",
                grid: Some("#404040"),
                shadow: "0 4px 12px rgba(0,0,0,0.4)",
                requests: REQUESTS_SERIES_COLOR,
                bandwidth: BANDWIDTH_SERIES_COLOR,
            },
            ThemeMode::Light => Self {
                background: "#ffffff",
                text: "#333333",
                text_secondary: "#666666",
                border: "#e1e1e1",
                grid: None,
                shadow: "0 4px 12px rgba(0,0,0,0.1)",
                requests: REQUESTS_SERIES_COLOR,
                bandwidth: BANDWIDTH_SERIES_COLOR,
            },
        }
    }
}
