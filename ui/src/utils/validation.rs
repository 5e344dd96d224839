/// Input class for the current error state
pub fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "input-field input-invalid"
    } else {
        "input-field"
    }
}

/// Submit button class; the disabled look comes from the `:disabled` rule
pub fn submit_button_class(submitting: bool) -> &'static str {
    if submitting {
        "login-button busy"
    } else {
        "login-button"
    }
}
