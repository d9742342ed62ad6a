use desktop_runtime::{DesktopConfig, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

const DESKTOP_CONFIG_JSON: &str = include_str!("../desktop.config.json");

/// Desktop tunables embedded at build time; falls back to defaults if the document is invalid.
pub fn desktop_config() -> DesktopConfig {
    DesktopConfig::from_json(DESKTOP_CONFIG_JSON).unwrap_or_else(|err| {
        logging::warn!("{err}; using default desktop config");
        DesktopConfig::default()
    })
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Retro Desktop" />
        <Meta name="description" content="A retro desktop with draggable windows and icons." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider config=desktop_config()>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let parsed = DesktopConfig::from_json(DESKTOP_CONFIG_JSON).expect("embedded config");
        assert_eq!(parsed, DesktopConfig::default());
    }
}
