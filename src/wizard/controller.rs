//! WizardController — owns the draft, the step position, and the
//! overview-mode toggle. UI layers read derived view state through
//! [`WizardController::view`] and never mutate the draft directly.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{Mutex, RwLock};

use crate::error::{Error, StoreError};
use crate::nav::{Navigator, Route};
use crate::notify::{Notification, NotificationSink};
use crate::store::{keys, DraftStore};

use super::model::{Draft, FieldPatch, UserType};
use super::steps;

/// View flags layered over the draft. Overview (review) mode and
/// step-editing mode are mutually exclusive.
#[derive(Debug, Clone, Copy)]
struct ViewFlags {
    current_step: usize,
    overview_mode: bool,
}

/// Derived view state, recomputed on every read and never cached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub user_type: UserType,
    pub current_step: usize,
    pub total_steps: usize,
    pub progress_percent: u8,
    pub overview_mode: bool,
    pub steps: Vec<StepView>,
    pub draft: Draft,
}

/// One step header: its fixed index, title, and positional markers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepView {
    pub index: usize,
    pub title: &'static str,
    pub active: bool,
    pub completed: bool,
}

/// Coordinates the preference wizard: draft mutation, step navigation,
/// overview mode, and persistence.
pub struct WizardController {
    draft: RwLock<Draft>,
    flags: RwLock<ViewFlags>,
    store: Arc<dyn DraftStore>,
    notifier: Arc<dyn NotificationSink>,
    navigator: Arc<dyn Navigator>,
    // Serializes store writes so a later save always wins (last-write-wins).
    save_lock: Mutex<()>,
}

impl WizardController {
    /// Create a controller with an empty draft at step 0. The stored
    /// draft, if any, is not loaded here — only explicit saves touch
    /// the store.
    pub fn new(
        store: Arc<dyn DraftStore>,
        notifier: Arc<dyn NotificationSink>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            draft: RwLock::new(Draft::default()),
            flags: RwLock::new(ViewFlags {
                current_step: 0,
                overview_mode: false,
            }),
            store,
            notifier,
            navigator,
            save_lock: Mutex::new(()),
        }
    }

    /// Set the user type on the draft. Does not advance the step — the
    /// user confirms with [`Self::confirm_user_type`]. `Unset` is the
    /// invalid-value no-op.
    pub async fn select_user_type(&self, user_type: UserType) {
        if user_type == UserType::Unset {
            return;
        }
        self.draft.write().await.user_type = user_type;
        // Re-choosing the track can shrink the step range.
        let mut flags = self.flags.write().await;
        flags.current_step = steps::clamp_step(user_type, flags.current_step);
    }

    /// The explicit "Continue as …" confirmation: advances to step 1.
    /// No-op while the user type is still unset.
    pub async fn confirm_user_type(&self) {
        let user_type = self.draft.read().await.user_type;
        if user_type == UserType::Unset {
            return;
        }
        let mut flags = self.flags.write().await;
        flags.current_step = steps::clamp_step(user_type, 1);
    }

    /// Jump directly to a step. Out-of-range indices clamp to the
    /// nearest valid step; field completeness is deliberately not
    /// checked, incomplete steps may be skipped freely.
    pub async fn go_to_step(&self, index: usize) {
        let user_type = self.draft.read().await.user_type;
        let mut flags = self.flags.write().await;
        flags.current_step = steps::clamp_step(user_type, index);
    }

    /// Merge one field update into the draft.
    pub async fn apply_field(&self, patch: FieldPatch) {
        self.draft.write().await.apply(patch);
    }

    /// Serialize the full draft to the store and acknowledge. Never
    /// changes the step or the overview flag; idempotent for an
    /// unchanged draft. On failure the in-memory draft is retained so
    /// the user can retry.
    pub async fn save_progress(&self) -> Result<(), Error> {
        match self.persist().await {
            Ok(()) => {
                self.notifier.notify(Notification::info(
                    "Progress saved",
                    "Your preferences are saved on this device.",
                ));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to save preference draft: {e}");
                self.notifier.notify(Notification::default_severity(
                    "Save failed",
                    "Could not save your preferences. Please try again.",
                ));
                Err(e)
            }
        }
    }

    /// Persist the draft and enter overview mode. The sole transition
    /// into overview; the step position is left unchanged. On a failed
    /// write we stay in editing mode and surface the failure instead.
    pub async fn complete_profile(&self) -> Result<(), Error> {
        match self.persist().await {
            Ok(()) => {
                self.flags.write().await.overview_mode = true;
                self.notifier.notify(Notification::info(
                    "Profile completed",
                    "Your Singapore preferences are all set.",
                ));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to persist completed profile: {e}");
                self.notifier.notify(Notification::default_severity(
                    "Save failed",
                    "Could not save your preferences. Please try again.",
                ));
                Err(e)
            }
        }
    }

    /// Leave the wizard without persisting anything. The in-memory
    /// draft is simply discarded with the controller.
    pub async fn skip(&self) -> Route {
        self.notifier.notify(Notification::default_severity(
            "Preferences skipped",
            "You can set up your preferences anytime.",
        ));
        self.navigator.go_to(Route::Home);
        Route::Home
    }

    /// From overview mode, jump back into editing at `index` (clamped).
    pub async fn edit_section(&self, index: usize) {
        let user_type = self.draft.read().await.user_type;
        let mut flags = self.flags.write().await;
        flags.overview_mode = false;
        flags.current_step = steps::clamp_step(user_type, index);
    }

    /// From overview mode, resume editing at whatever step was active
    /// before the profile was completed.
    pub async fn continue_editing(&self) {
        self.flags.write().await.overview_mode = false;
    }

    /// Terminal action from overview mode. Tourists are sent to the
    /// itinerary builder, locals back home for recommendations; the
    /// action performed is identical, only framing and target differ.
    pub async fn finish(&self) -> Route {
        let user_type = self.draft.read().await.user_type;
        let route = match user_type {
            UserType::Tourist => {
                self.notifier.notify(Notification::info(
                    "Let's plan your trip",
                    "Time to build your Singapore itinerary.",
                ));
                Route::Itinerary
            }
            _ => {
                self.notifier.notify(Notification::info(
                    "Ready to explore",
                    "Here are spots picked out for you.",
                ));
                Route::Home
            }
        };
        self.navigator.go_to(route);
        route
    }

    /// Read the last saved draft from the store. Never mutates the
    /// controller; a corrupt blob reads as absent.
    pub async fn load_saved(&self) -> Result<Option<Draft>, Error> {
        let Some(value) = self.store.get(keys::PREFERENCES).await? else {
            return Ok(None);
        };
        match serde_json::from_value(value) {
            Ok(draft) => Ok(Some(draft)),
            Err(e) => {
                tracing::warn!("Stored preference draft is unreadable: {e}");
                Ok(None)
            }
        }
    }

    /// Compute the current derived view state.
    pub async fn view(&self) -> WizardView {
        let draft = self.draft.read().await.clone();
        let flags = *self.flags.read().await;
        let user_type = draft.user_type;

        let steps_view = steps::visible_steps(user_type)
            .iter()
            .map(|s| StepView {
                index: s.index,
                title: s.title,
                active: !flags.overview_mode && flags.current_step == s.index,
                completed: steps::is_completed(flags.current_step, s.index),
            })
            .collect();

        WizardView {
            user_type,
            current_step: flags.current_step,
            total_steps: steps::total_steps(user_type),
            progress_percent: steps::progress_percent(
                user_type,
                flags.current_step,
                flags.overview_mode,
            ),
            overview_mode: flags.overview_mode,
            steps: steps_view,
            draft,
        }
    }

    /// Snapshot and write the draft under the save lock, so concurrent
    /// saves cannot interleave and a later save always wins.
    async fn persist(&self) -> Result<(), Error> {
        let _guard = self.save_lock.lock().await;
        let snapshot = self.draft.read().await.clone();
        let value = serde_json::to_value(&snapshot)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store.set(keys::PREFERENCES, &value).await?;
        Ok(())
    }
}
