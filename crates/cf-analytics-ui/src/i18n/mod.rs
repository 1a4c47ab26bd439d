//! Typed UI copy for the two bundled locales.
//!
//! Each locale ships a JSON catalog embedded at build time. Lookups go through
//! [`TextKey`]; a missing entry falls back to English and then to the key's
//! built-in English text.

use serde::Deserialize;
use std::sync::LazyLock;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    En,
    /// Chinese (Simplified).
    Zh,
}

impl LocaleCode {
    /// All supported locales in cycling order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Zh]
    }

    /// Two-letter language code, also the persisted value.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Name shown on the locale switch.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
        }
    }

    /// Locale after this one in [`Self::all`], wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }

    /// Match a browser tag such as `zh-CN` or `en_US` on its primary subtag.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or_default().trim();
        if primary.eq_ignore_ascii_case("en") {
            Some(Self::En)
        } else if primary.eq_ignore_ascii_case("zh") {
            Some(Self::Zh)
        } else {
            None
        }
    }
}

/// Locale used when neither storage nor the browser names a supported one.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Every piece of copy the UI renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextKey {
    /// Page heading.
    AppTitle,
    /// Page subheading.
    AppSubtitle,
    /// Theme switch label while light.
    ThemeToDark,
    /// Theme switch label while dark.
    ThemeToLight,
    /// Requests series and column.
    Requests,
    /// Bandwidth series and column.
    Bandwidth,
    /// Geography section title.
    GeographyTitle,
    /// Geography section subtitle.
    GeographySubtitle,
    /// Empty-state message.
    NoGeographyData,
    /// Chart heading.
    TrafficByCountry,
    /// Table heading.
    DetailedStats,
    /// Country column on desktop.
    CountryRegion,
    /// Country column on mobile.
    CountryShort,
    /// Requests column on mobile.
    RequestsShort,
    /// Bandwidth column on mobile.
    BandwidthShort,
    /// Map legend caption.
    MapLegend,
    /// Rank column.
    Rank,
}

impl TextKey {
    /// Every key, in declaration order.
    pub const ALL: [Self; 17] = [
        Self::AppTitle,
        Self::AppSubtitle,
        Self::ThemeToDark,
        Self::ThemeToLight,
        Self::Requests,
        Self::Bandwidth,
        Self::GeographyTitle,
        Self::GeographySubtitle,
        Self::NoGeographyData,
        Self::TrafficByCountry,
        Self::DetailedStats,
        Self::CountryRegion,
        Self::CountryShort,
        Self::RequestsShort,
        Self::BandwidthShort,
        Self::MapLegend,
        Self::Rank,
    ];

    /// English text used when no catalog carries the key.
    #[must_use]
    pub const fn fallback(self) -> &'static str {
        match self {
            Self::AppTitle => "Cloudflare Analytics",
            Self::AppSubtitle => "",
            Self::ThemeToDark => "Dark mode",
            Self::ThemeToLight => "Light mode",
            Self::Requests | Self::MapLegend => "Requests",
            Self::Bandwidth => "Bandwidth",
            Self::GeographyTitle => "Geography Statistics",
            Self::GeographySubtitle => "Top countries/regions by traffic",
            Self::NoGeographyData => "No geography data available",
            Self::TrafficByCountry => "Traffic by Country",
            Self::DetailedStats => "Detailed Statistics",
            Self::CountryRegion => "Country/Region",
            Self::CountryShort => "Country",
            Self::RequestsShort => "Req.",
            Self::BandwidthShort => "BW",
            Self::Rank => "#",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct Catalog {
    app: AppText,
    theme: ThemeText,
    common: CommonText,
    geography: GeographyText,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct AppText {
    title: Option<String>,
    subtitle: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct ThemeText {
    to_dark: Option<String>,
    to_light: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct CommonText {
    requests: Option<String>,
    bandwidth: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct GeographyText {
    title: Option<String>,
    subtitle: Option<String>,
    no_data: Option<String>,
    traffic_by_country: Option<String>,
    detailed_stats: Option<String>,
    country_region: Option<String>,
    country_short: Option<String>,
    requests_short: Option<String>,
    bandwidth_short: Option<String>,
    map_legend: Option<String>,
    rank: Option<String>,
}

impl Catalog {
    fn get(&self, key: TextKey) -> Option<&str> {
        let entry = match key {
            TextKey::AppTitle => &self.app.title,
            TextKey::AppSubtitle => &self.app.subtitle,
            TextKey::ThemeToDark => &self.theme.to_dark,
            TextKey::ThemeToLight => &self.theme.to_light,
            TextKey::Requests => &self.common.requests,
            TextKey::Bandwidth => &self.common.bandwidth,
            TextKey::GeographyTitle => &self.geography.title,
            TextKey::GeographySubtitle => &self.geography.subtitle,
            TextKey::NoGeographyData => &self.geography.no_data,
            TextKey::TrafficByCountry => &self.geography.traffic_by_country,
            TextKey::DetailedStats => &self.geography.detailed_stats,
            TextKey::CountryRegion => &self.geography.country_region,
            TextKey::CountryShort => &self.geography.country_short,
            TextKey::RequestsShort => &self.geography.requests_short,
            TextKey::BandwidthShort => &self.geography.bandwidth_short,
            TextKey::MapLegend => &self.geography.map_legend,
            TextKey::Rank => &self.geography.rank,
        };
        entry.as_deref()
    }
}

/// Catalog for one locale, shared through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    catalog: Catalog,
}

impl TranslationBundle {
    /// Bundle for an embedded locale; an unreadable catalog leaves every key on fallback.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        Self::from_json(locale, embedded_catalog(locale)).unwrap_or_else(|_| Self {
            locale,
            catalog: Catalog::default(),
        })
    }

    /// Bundle from catalog JSON.
    ///
    /// # Errors
    /// Returns the decode error when `raw` is not a catalog object.
    pub fn from_json(locale: LocaleCode, raw: &str) -> Result<Self, serde_json::Error> {
        let catalog = serde_json::from_str(raw)?;
        Ok(Self { locale, catalog })
    }

    /// Text for `key`: this locale, then English, then [`TextKey::fallback`].
    #[must_use]
    pub fn text(&self, key: TextKey) -> String {
        self.catalog
            .get(key)
            .or_else(|| ENGLISH.get(key))
            .unwrap_or_else(|| key.fallback())
            .to_string()
    }
}

static ENGLISH: LazyLock<Catalog> =
    LazyLock::new(|| serde_json::from_str(embedded_catalog(LocaleCode::En)).unwrap_or_default());

const fn embedded_catalog(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Zh => include_str!("../../i18n/zh.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_tags_match_on_primary_subtag() {
        assert_eq!(LocaleCode::from_lang_tag("zh-CN"), Some(LocaleCode::Zh));
        assert_eq!(LocaleCode::from_lang_tag("EN_us"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("fr"), None);
        assert_eq!(LocaleCode::from_lang_tag(""), None);
    }

    #[test]
    fn next_cycles_through_all_locales() {
        for locale in LocaleCode::all() {
            assert_ne!(locale.next(), locale);
            assert_eq!(locale.next().next(), locale);
        }
    }

    #[test]
    fn embedded_catalogs_cover_every_key() -> Result<(), serde_json::Error> {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::from_json(locale, embedded_catalog(locale))?;
            for key in TextKey::ALL {
                assert!(bundle.catalog.get(key).is_some(), "{} missing {key:?}", locale.code());
            }
        }
        Ok(())
    }

    #[test]
    fn missing_entries_fall_back_to_english() -> Result<(), serde_json::Error> {
        let bundle = TranslationBundle::from_json(
            LocaleCode::Zh,
            r#"{ "common": { "requests": "请求" } }"#,
        )?;
        assert_eq!(bundle.text(TextKey::Requests), "请求");
        assert_eq!(bundle.text(TextKey::Bandwidth), "Bandwidth");
        assert_eq!(bundle.text(TextKey::Rank), "#");
        Ok(())
    }

    #[test]
    fn malformed_catalog_is_rejected() {
        assert!(TranslationBundle::from_json(LocaleCode::En, "[]").is_err());
        assert!(TranslationBundle::from_json(LocaleCode::En, "{").is_err());
    }

    #[test]
    fn locales_render_their_own_copy() {
        let en = TranslationBundle::new(LocaleCode::En);
        let zh = TranslationBundle::new(LocaleCode::Zh);
        assert_eq!(en.text(TextKey::Requests), "Requests");
        assert_eq!(zh.text(TextKey::Requests), "请求数");
        assert_ne!(en, zh);
    }
}
