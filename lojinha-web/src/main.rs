mod api;
mod app;
mod checkout;
mod components;
mod config;
mod containers;
mod data;
mod language;
mod pages;
mod routes;
mod stores;

use app::App;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::supported_languages;
use std::collections::HashMap;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .values()
        .map(|language| (language.code, language.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: "pt".to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    std::panic::set_hook(Box::new(|info| {
        web_sys::console::error_1(&info.to_string().into());
    }));

    web_sys::console::log_1(&"Starting Lojinha".into());

    Renderer::<Root>::new().render();
}
