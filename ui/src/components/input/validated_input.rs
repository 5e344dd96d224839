use crate::features::login::Field;
use crate::utils::input_class;
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }

    pub fn for_field(field: Field) -> Self {
        match field {
            Field::Email => InputType::Email,
            Field::Password => InputType::Password,
        }
    }
}

/// Browser autofill hint for a login field
pub fn autocomplete_hint(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Password => "current-password",
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub field: Field,
    pub value: String,
    pub has_error: bool,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let name = props.field.name();

    rsx! {
        input {
            id: "{name}",
            name: "{name}",
            class: input_class(props.has_error),
            r#type: InputType::for_field(props.field).as_str(),
            autocomplete: autocomplete_hint(props.field),
            value: "{props.value}",
            disabled: props.disabled,
            required: true,
            "aria-invalid": if props.has_error { "true" } else { "false" },
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_input_types() {
        assert_eq!(InputType::for_field(Field::Email).as_str(), "email");
        assert_eq!(InputType::for_field(Field::Password).as_str(), "password");
        assert_eq!(autocomplete_hint(Field::Password), "current-password");
    }
}
