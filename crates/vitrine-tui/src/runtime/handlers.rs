//! Simulated-delay handlers.
//!
//! Handlers are pure async functions that return the `UiEvent` to feed back
//! into the reducer. Each one races its sleep against the cancellation
//! token so navigating away resolves the task promptly.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::events::{FlowUiEvent, SignInMethod, UiEvent};

/// Simulated sign-in "API call".
pub async fn sign_in(
    method: SignInMethod,
    latency: Duration,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    tracing::debug!(method = method.label(), ?latency, "simulating sign-in");
    if simulated_delay(latency, cancel).await {
        UiEvent::Flow(FlowUiEvent::SignInCompleted { method })
    } else {
        UiEvent::Flow(FlowUiEvent::SignInCancelled)
    }
}

/// Simulated profile-save "API call".
pub async fn profile_save(latency: Duration, cancel: Option<CancellationToken>) -> UiEvent {
    tracing::debug!(?latency, "simulating profile save");
    if simulated_delay(latency, cancel).await {
        UiEvent::Flow(FlowUiEvent::ProfileSaveCompleted)
    } else {
        UiEvent::Flow(FlowUiEvent::ProfileSaveCancelled)
    }
}

/// Dwell before moving from the success notice to the store.
pub async fn save_notice(delay: Duration, cancel: Option<CancellationToken>) -> UiEvent {
    if simulated_delay(delay, cancel).await {
        UiEvent::Flow(FlowUiEvent::NoticeElapsed)
    } else {
        UiEvent::Flow(FlowUiEvent::NoticeCancelled)
    }
}

/// Sleeps for `delay`. Returns false if cancelled first.
async fn simulated_delay(delay: Duration, cancel: Option<CancellationToken>) -> bool {
    match cancel {
        Some(token) => {
            tokio::select! {
                () = token.cancelled() => false,
                () = tokio::time::sleep(delay) => true,
            }
        }
        None => {
            tokio::time::sleep(delay).await;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sign_in_completes_after_the_delay() {
        let event = sign_in(SignInMethod::GitHub, Duration::from_millis(800), None).await;
        assert!(matches!(
            event,
            UiEvent::Flow(FlowUiEvent::SignInCompleted {
                method: SignInMethod::GitHub
            })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_sign_in_reports_cancellation() {
        let token = CancellationToken::new();
        token.cancel();
        let event = sign_in(
            SignInMethod::Email,
            Duration::from_millis(800),
            Some(token),
        )
        .await;
        assert!(matches!(
            event,
            UiEvent::Flow(FlowUiEvent::SignInCancelled)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn notice_dwell_elapses() {
        let event = save_notice(Duration::from_millis(1500), None).await;
        assert!(matches!(event, UiEvent::Flow(FlowUiEvent::NoticeElapsed)));
    }
}
