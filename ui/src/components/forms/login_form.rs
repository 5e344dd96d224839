//! Email/password login form with a simulated sign-in round-trip

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::components::{
    display::{FieldError, LoadingIndicator},
    input::ValidatedInput,
};
use crate::features::login::{
    complete_submission, Credentials, Field, LoginAction, LoginState, PendingSubmission,
    SimulatedLogin, SubmitOutcome,
};
use crate::services::config::FormConfig;
use crate::utils::submit_button_class;
use crate::{console_debug, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormProps {
    #[props(default)]
    pub config: FormConfig,
    /// Receives the validated credentials once the simulated login finishes
    pub on_login: Option<EventHandler<Credentials>>,
}

#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let mut state = use_signal(LoginState::default);

    // At most one in-flight submission, cancelled when the form unmounts
    let pending: Rc<RefCell<Option<PendingSubmission>>> = use_hook(|| Rc::new(RefCell::new(None)));
    use_drop({
        let pending = pending.clone();
        move || {
            if let Some(submission) = pending.borrow_mut().take() {
                submission.cancel();
            }
        }
    });

    // Dispatch function for actions - in-place reduction keeps the Signal reactive
    let dispatch = EventHandler::new(move |action: LoginAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let rules = props.config.clone();
    let on_login = props.on_login;
    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        match state.with_mut(|s| s.begin_submit(&rules)) {
            SubmitOutcome::Started(credentials) => {
                let backend = SimulatedLogin::from_config(&rules);
                let (guard, task) = PendingSubmission::guard(async move {
                    complete_submission(
                        &backend,
                        credentials,
                        move |action| dispatch.call(action),
                        move |credentials| {
                            if let Some(handler) = on_login {
                                handler.call(credentials);
                            }
                        },
                    )
                    .await;
                });
                *pending.borrow_mut() = Some(guard);

                spawn(async move {
                    if task.await.is_err() {
                        console_debug!("[Login] Submission cancelled before completion");
                    }
                });
            }
            SubmitOutcome::Rejected => {}
            SubmitOutcome::AlreadySubmitting => {
                console_warn!("[Login] Submit ignored, a login is already in progress");
            }
        }
    };

    let current = state.read().clone();

    rsx! {
        form {
            class: "login-form",
            novalidate: true,
            onsubmit: onsubmit,

            for field in Field::ALL {
                div {
                    key: "{field.name()}",
                    class: "input-section",
                    label {
                        r#for: field.name(),
                        class: "input-label",
                        "{field.label()}"
                    }
                    ValidatedInput {
                        field: field,
                        value: current.value(field).to_string(),
                        has_error: current.errors.get(field).is_some(),
                        disabled: current.submitting,
                        on_change: move |value: String| {
                            dispatch.call(LoginAction::set_field(field, value));
                        }
                    }
                    FieldError {
                        field: field,
                        message: current.errors.message(field)
                    }
                }
            }

            button {
                r#type: "submit",
                class: submit_button_class(current.submitting),
                disabled: current.submitting,
                if current.submitting {
                    LoadingIndicator {}
                }
                "Log In"
            }
        }
    }
}
