use dioxus::logger::tracing::{info, warn, Level};
use dioxus::prelude::*;
use login_ui::services::config::{get_global_config, init_global_config};
use login_ui::{Credentials, LoginAppConfig, LoginPage};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BUNDLED_CONFIG: &str = include_str!("../assets/config.json");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");

    if !init_global_config(load_config(BUNDLED_CONFIG)) {
        warn!("global configuration already installed");
    }

    dioxus::launch(App);
}

/// Parse the bundled config, falling back to defaults when it is unusable
fn load_config(json: &str) -> LoginAppConfig {
    match LoginAppConfig::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "falling back to default configuration");
            LoginAppConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let title = get_global_config().branding.title();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "{title}" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    let mut signed_in = use_signal(|| None::<String>);

    rsx! {
        if let Some(email) = signed_in() {
            div {
                class: "signed-in-banner",
                "Signed in as {email}"
            }
        }
        LoginPage {
            on_login: move |credentials: Credentials| {
                info!(email = %credentials.email, "login completed");
                signed_in.set(Some(credentials.email));
            }
        }
    }
}
