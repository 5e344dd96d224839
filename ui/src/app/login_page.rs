use crate::console_info;
use dioxus::prelude::*;

use crate::components::forms::LoginForm;
use crate::features::login::Credentials;
use crate::services::config::{get_global_config, LoginAppConfig};
use crate::utils::current_year;

const LOGIN_PAGE_CSS: Asset = asset!("/assets/styling/login_page.css");

#[derive(Props, PartialEq, Clone)]
pub struct LoginPageProps {
    /// Falls back to the global configuration
    pub config: Option<LoginAppConfig>,
    pub on_login: Option<EventHandler<Credentials>>,
}

#[component]
pub fn LoginPage(props: LoginPageProps) -> Element {
    let config = props.config.clone().unwrap_or_else(get_global_config);

    use_effect(move || {
        console_info!("[Login Page] Mounted");
    });

    let year = current_year();

    rsx! {
        document::Link { rel: "stylesheet", href: LOGIN_PAGE_CSS }

        div {
            class: "login-page",
            style: "{config.theme.to_css_variables()}",

            div {
                class: "login-card",
                h2 {
                    class: "login-title",
                    "{config.branding.title()}"
                }
                p {
                    class: "login-subtitle",
                    "{config.branding.tagline}"
                }
                LoginForm {
                    config: config.form.clone(),
                    on_login: props.on_login
                }
            }

            footer {
                class: "login-footer",
                span { "© {year} {config.branding.product_name}" }
            }
        }
    }
}
