//! Persistence and environment helpers for the app shell.
//!
//! Values are stored as raw strings (not JSON) so they stay readable by any
//! other page sharing the origin.

use crate::core::theme::{PREFERS_DARK_QUERY, ThemeMode, ThemeSources, resolve_initial};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::MediaQueryList;

pub(crate) const THEME_KEY: &str = "cf-analytics-theme";
pub(crate) const LOCALE_KEY: &str = "cf-analytics-locale";

/// Resolve the startup theme from the query string, storage and OS preference.
pub(crate) fn load_initial_theme() -> ThemeMode {
    let query = location_query();
    let persisted = load_persisted_theme();
    resolve_initial(ThemeSources {
        query: &query,
        persisted: persisted.as_deref(),
        system_prefers_dark: system_prefers_dark(),
    })
}

pub(crate) fn load_persisted_theme() -> Option<String> {
    read_storage(THEME_KEY)
}

pub(crate) fn persist_theme(value: &str) {
    write_storage(THEME_KEY, value);
}

pub(crate) fn prefers_dark_query() -> Option<MediaQueryList> {
    window().match_media(PREFERS_DARK_QUERY).ok().flatten()
}

fn system_prefers_dark() -> bool {
    prefers_dark_query().is_some_and(|query| query.matches())
}

fn location_query() -> String {
    window().location().search().unwrap_or_default()
}

pub(crate) fn load_locale() -> LocaleCode {
    if let Some(locale) = read_storage(LOCALE_KEY).and_then(|v| LocaleCode::from_lang_tag(&v)) {
        return locale;
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    write_storage(LOCALE_KEY, locale.code());
}

fn read_storage(key: &'static str) -> Option<String> {
    match LocalStorage::raw().get_item(key) {
        Ok(value) => value,
        Err(err) => {
            log_storage_error("get", key, &format!("{err:?}"));
            None
        }
    }
}

fn write_storage(key: &'static str, value: &str) {
    if let Err(err) = LocalStorage::raw().set_item(key, value) {
        log_storage_error("set", key, &format!("{err:?}"));
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
