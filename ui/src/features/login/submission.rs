//! Simulated login round-trip
//!
//! A submission that passed validation is handed to a [`LoginBackend`]. The
//! only backend is [`SimulatedLogin`], which waits a fixed delay standing in
//! for network latency and always succeeds. The task is bound to the form's
//! lifetime through [`PendingSubmission`] so a disposed form is never updated.

use async_trait::async_trait;
use futures::future::{abortable, AbortHandle, Abortable};
use std::future::Future;
use std::time::Duration;
use tracing::{info, instrument};

use crate::services::config::FormConfig;
use crate::utils::sleep;

use super::types::{Credentials, LoginAction};

#[async_trait(?Send)]
pub trait LoginBackend {
    /// Authenticate a validated credential pair
    async fn authenticate(&self, credentials: &Credentials);
}

/// Fixed-delay stand-in for a real authentication call
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedLogin {
    delay: Duration,
}

impl SimulatedLogin {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(config.submit_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedLogin {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}

#[async_trait(?Send)]
impl LoginBackend for SimulatedLogin {
    async fn authenticate(&self, _credentials: &Credentials) {
        sleep(self.delay).await;
    }
}

/// Runs the backend, leaves the submitting phase, then reports the credentials.
///
/// `on_login` is called exactly once, after `SetSubmitting(false)` has been dispatched.
#[instrument(skip_all)]
pub async fn complete_submission<B, D, F>(
    backend: &B,
    credentials: Credentials,
    dispatch: D,
    on_login: F,
) where
    B: LoginBackend + ?Sized,
    D: Fn(LoginAction),
    F: FnOnce(Credentials),
{
    info!("Login submission started");
    backend.authenticate(&credentials).await;

    dispatch(LoginAction::SetSubmitting(false));
    info!("Login submission completed");
    on_login(credentials);
}

/// Cancellation guard for an in-flight submission.
///
/// Dropping the guard aborts the task it was created with.
#[derive(Debug)]
pub struct PendingSubmission {
    handle: AbortHandle,
}

impl PendingSubmission {
    pub fn guard<F: Future>(future: F) -> (Self, Abortable<F>) {
        let (task, handle) = abortable(future);
        (Self { handle }, task)
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::login::{Field, LoginState, SubmitOutcome};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use tokio::time::{timeout, Instant};

    fn started(state: &Rc<RefCell<LoginState>>) -> Credentials {
        state.borrow_mut().on_field_change(Field::Email, "user@example.com".to_string());
        state.borrow_mut().on_field_change(Field::Password, "secret1".to_string());
        match state.borrow_mut().begin_submit(&FormConfig::default()) {
            SubmitOutcome::Started(credentials) => credentials,
            other => panic!("expected submission to start, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_valid_submission_completes_after_delay() {
        let state = Rc::new(RefCell::new(LoginState::default()));
        let credentials = started(&state);
        assert!(state.borrow().submitting);

        let received = Rc::new(RefCell::new(Vec::new()));
        let backend = SimulatedLogin::default();
        let start = Instant::now();

        let dispatch_state = state.clone();
        let sink = received.clone();
        let mut task = Box::pin(complete_submission(
            &backend,
            credentials,
            move |action| dispatch_state.borrow_mut().reduce_in_place(action),
            move |credentials| sink.borrow_mut().push(credentials),
        ));

        // Still pending just before the delay elapses
        assert!(timeout(Duration::from_millis(999), &mut task).await.is_err());
        assert!(state.borrow().submitting);
        assert!(received.borrow().is_empty());

        task.await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert!(!state.borrow().submitting);
        assert_eq!(
            *received.borrow(),
            vec![Credentials::new("user@example.com", "secret1")]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_guard_prevents_completion() {
        let state = Rc::new(RefCell::new(LoginState::default()));
        let credentials = started(&state);
        let calls = Rc::new(Cell::new(0));

        let backend = SimulatedLogin::default();
        let dispatch_state = state.clone();
        let counter = calls.clone();
        let (guard, task) = PendingSubmission::guard(async move {
            complete_submission(
                &backend,
                credentials,
                move |action| dispatch_state.borrow_mut().reduce_in_place(action),
                move |_| counter.set(counter.get() + 1),
            )
            .await
        });

        drop(guard);
        assert!(task.await.is_err());
        assert_eq!(calls.get(), 0);
        // the disposed form keeps whatever it last had
        assert!(state.borrow().submitting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_mid_flight() {
        let calls = Rc::new(Cell::new(0));
        let backend = SimulatedLogin::new(Duration::from_millis(50));
        let counter = calls.clone();
        let (guard, task) = PendingSubmission::guard(async move {
            complete_submission(
                &backend,
                Credentials::new("user@example.com", "secret1"),
                |_| {},
                move |_| counter.set(counter.get() + 1),
            )
            .await
        });
        let mut task = Box::pin(task);

        assert!(timeout(Duration::from_millis(10), &mut task).await.is_err());
        guard.cancel();
        assert!(guard.is_cancelled());
        assert!(task.await.is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_backend_delay_from_config() {
        let config = FormConfig {
            submit_delay_ms: 250,
            ..FormConfig::default()
        };
        assert_eq!(SimulatedLogin::from_config(&config).delay(), Duration::from_millis(250));
        assert_eq!(SimulatedLogin::default().delay(), Duration::from_millis(1000));
    }
}
