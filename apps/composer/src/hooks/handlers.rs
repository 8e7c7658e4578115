//! Webhook handlers for profile write events.
//!
//! Each write event runs the composition pipeline and, when documents were
//! generated, commits all derived fields in one store write. Binary rendering
//! is best-effort: a failed render or upload downgrades to text-only output
//! and never rejects the triggering write.

use axum::{extract::State, Json};
use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::composer::{compose, ComposeOutcome, SkipReason};
use crate::errors::AppError;
use crate::state::AppState;
use crate::store::GeneratedUpdate;

use super::event::ProfileChangeEvent;

const PROFILES_TABLE: &str = "profiles";

/// Outcome summary returned to the webhook dispatcher.
#[derive(Debug, Serialize)]
pub struct HookResponse {
    pub profile_id: Uuid,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_key: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub changed_fields: Vec<&'static str>,
}

/// POST /api/v1/hooks/profiles/created
pub async fn handle_profile_created(
    State(state): State<AppState>,
    Json(mut event): Json<ProfileChangeEvent>,
) -> Result<Json<HookResponse>, AppError> {
    // Inserts have no prior image, whatever the dispatcher attached.
    event.old_record = None;
    process_change(&state, event).await
}

/// POST /api/v1/hooks/profiles/updated
pub async fn handle_profile_updated(
    State(state): State<AppState>,
    Json(event): Json<ProfileChangeEvent>,
) -> Result<Json<HookResponse>, AppError> {
    process_change(&state, event).await
}

async fn process_change(
    state: &AppState,
    event: ProfileChangeEvent,
) -> Result<Json<HookResponse>, AppError> {
    if event.table != PROFILES_TABLE {
        return Err(AppError::Validation(format!(
            "unsupported table '{}'",
            event.table
        )));
    }

    let record = event.new_image();
    let profile_id = record
        .id()
        .ok_or_else(|| AppError::Validation("profile record is missing a valid id".to_string()))?;
    let prior = event.prior_image();

    // Compose and render off the async executor; both are CPU-bound.
    let renderer = state.renderer.clone();
    let (outcome, rendered) = tokio::task::spawn_blocking(move || {
        let outcome = compose(&record, prior.as_ref());
        let rendered = match (&outcome, &renderer) {
            (ComposeOutcome::Generated { documents, .. }, Some(renderer)) => {
                Some(renderer.render(&documents.resume))
            }
            _ => None,
        };
        (outcome, rendered)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in compose: {e}")))?;

    match outcome {
        ComposeOutcome::Skipped(reason) => {
            info!(
                "Profile {profile_id}: nothing to regenerate ({})",
                reason_label(reason)
            );
            Ok(Json(HookResponse {
                profile_id,
                outcome: "skipped",
                skip_reason: Some(reason_label(reason)),
                pdf_key: None,
                changed_fields: vec![],
            }))
        }
        ComposeOutcome::Generated { documents, changed } => {
            let pdf_key = match rendered {
                Some(Ok(bytes)) => {
                    match state.artifacts.put_pdf(profile_id, Bytes::from(bytes)).await {
                        Ok(key) => Some(key),
                        Err(e) => {
                            warn!("Profile {profile_id}: PDF upload failed, persisting text only: {e}");
                            None
                        }
                    }
                }
                Some(Err(e)) => {
                    warn!("Profile {profile_id}: PDF render failed, persisting text only: {e}");
                    None
                }
                None => None,
            };

            let update = GeneratedUpdate {
                resume: documents.resume,
                redacted: documents.redacted,
                pdf_key: pdf_key.clone(),
                generated_at: Utc::now(),
            };
            state.profiles.commit_generated(profile_id, &update).await?;

            info!(
                "Profile {profile_id}: regenerated résumé ({} changed fields, pdf: {})",
                changed.len(),
                pdf_key.is_some(),
            );
            Ok(Json(HookResponse {
                profile_id,
                outcome: "generated",
                skip_reason: None,
                pdf_key,
                changed_fields: changed,
            }))
        }
    }
}

fn reason_label(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::UpToDate => "up_to_date",
        SkipReason::EmptyDocument => "empty_document",
    }
}
