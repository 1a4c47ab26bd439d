use crate::components::geography::GeographyStats;
use crate::core::format::{format_bytes, format_number};
use crate::i18n::{LocaleCode, TextKey, TranslationBundle};
use crate::models::demo_payload;
use preferences::{load_locale, persist_locale};
use theme::{ThemeProvider, use_theme};
use yew::prelude::*;

mod preferences;
pub(crate) mod theme;

#[function_component(CfAnalyticsApp)]
pub(crate) fn cf_analytics_app() -> Html {
    html! {
        <ThemeProvider>
            <AppShell />
        </ThemeProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let theme = use_theme();
    let locale = use_state(load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let data = use_memo(|_| demo_payload(), ());
    let number_formatter = use_memo(|_| Callback::from(format_number), ());
    let bytes_formatter = use_memo(|_| Callback::from(format_bytes), ());

    use_effect_with_deps(
        move |locale| {
            persist_locale(*locale);
            apply_document_lang(*locale);
            || ()
        },
        *locale,
    );

    let on_toggle_theme = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    let on_cycle_locale = {
        let locale = locale.clone();
        Callback::from(move |_: MouseEvent| locale.set(locale.next()))
    };

    let toggle_label = if theme.is_dark_mode() {
        bundle.text(TextKey::ThemeToLight)
    } else {
        bundle.text(TextKey::ThemeToDark)
    };
    let next_locale = locale.next();

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <div class="app-shell" data-theme={theme.theme()}>
                <header class="app-header">
                    <div>
                        <h1>{bundle.text(TextKey::AppTitle)}</h1>
                        <p class="muted">{bundle.text(TextKey::AppSubtitle)}</p>
                    </div>
                    <div class="app-actions">
                        <button class="btn btn-ghost" onclick={on_cycle_locale}>
                            {next_locale.label()}
                        </button>
                        <button class="btn btn-ghost" onclick={on_toggle_theme}>
                            {toggle_label}
                        </button>
                    </div>
                </header>
                <main>
                    <GeographyStats
                        data={data}
                        format_number={(*number_formatter).clone()}
                        format_bytes={(*bytes_formatter).clone()}
                    />
                </main>
            </div>
        </ContextProvider<TranslationBundle>>
    }
}

fn apply_document_lang(locale: LocaleCode) {
    let Some(root) = gloo::utils::document().document_element() else {
        return;
    };
    if root.set_attribute("lang", locale.code()).is_err() {
        gloo::console::warn!("failed to set document language", locale.code());
    }
}

/// Mount the dashboard into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CfAnalyticsApp>::with_root(root).render();
    } else {
        yew::Renderer::<CfAnalyticsApp>::new().render();
    }
}
