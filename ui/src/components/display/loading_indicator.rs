use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    /// Screen-reader text; the spinner itself is decorative
    #[props(default = "Signing in".to_string())]
    pub message: String,
}

#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        span {
            class: "loading-indicator",
            role: "status",
            span { class: "spinner", "aria-hidden": "true" }
            span { class: "visually-hidden", "{props.message}" }
        }
    }
}
