use crate::features::login::Field;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    pub field: Field,
    pub message: Option<String>,
}

/// Inline error text under an input; renders nothing without a message
#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            p {
                id: "{props.field.name()}-error",
                class: "field-error",
                "{message}"
            }
        },
        None => rsx! {},
    }
}
