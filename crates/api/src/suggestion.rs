//! The suggestion orchestrator: one linear flow per request.
//!
//! Load campaign context (404 before any prompt is built), render the
//! prompt, call the generation adapter, repair+parse its output, map to
//! a typed response with locally-computed metrics, then persist a
//! snapshot best-effort.
//!
//! Failure policy, by step:
//! - validation / not-found: caller errors, no retry.
//! - adapter failure: *not* an error. The pipeline substitutes mock
//!   output and the request still succeeds. This availability-over-
//!   correctness tradeoff is deliberate; do not "fix" it to propagate.
//! - unparseable output after repair: the only hard server error that
//!   can follow a successful generation call.
//! - snapshot/audit writes: fire-and-forget, failures logged and
//!   swallowed, never change the response.

use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use adforge_core::context::{
    advert_completion_rate, budget_utilization, ConceptNoteContext, PromptContext,
};
use adforge_core::error::CoreError;
use adforge_core::parse::parse_payload;
use adforge_core::prompt::{build_campaign_prompt, build_creative_prompt};
use adforge_core::suggestion::{
    AnalysisType, PerformanceAnalysis, RequestType, SuggestionResponse, Tone,
};
use adforge_core::types::DbId;
use adforge_db::models::campaign::CampaignWithContext;
use adforge_db::models::suggestion::CreateSuggestionSnapshot;
use adforge_db::repositories::{CampaignRepo, ConceptNoteRepo, SuggestionRepo};
use adforge_llm::{mock, PromptKind};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Request body for `POST /ai/campaign-suggestion`.
#[derive(Debug, Deserialize, Validate)]
pub struct CampaignSuggestionRequest {
    pub campaign_id: DbId,
    pub analysis_type: Option<AnalysisType>,
    #[validate(length(max = 4000, message = "additional_context is too long"))]
    pub additional_context: Option<String>,
}

/// Request body for `POST /ai/creative-idea`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreativeIdeaRequest {
    pub campaign_id: DbId,
    pub concept_note_id: Option<DbId>,
    pub request_type: RequestType,
    #[validate(length(max = 4000, message = "brief is too long"))]
    pub brief: Option<String>,
    #[validate(length(max = 1000, message = "target_audience is too long"))]
    pub target_audience: Option<String>,
    pub tone: Option<Tone>,
}

// ---------------------------------------------------------------------------
// Campaign analysis
// ---------------------------------------------------------------------------

/// Run the campaign-analysis pipeline end to end.
pub async fn run_campaign_suggestion(
    state: &AppState,
    user_id: DbId,
    req: &CampaignSuggestionRequest,
) -> AppResult<SuggestionResponse> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let loaded = CampaignRepo::find_with_context(&state.pool, req.campaign_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "campaign",
            id: req.campaign_id,
        })?;

    let ctx = build_prompt_context(&loaded, None);
    let prompt = build_campaign_prompt(
        &ctx,
        req.analysis_type,
        req.additional_context.as_deref(),
        Utc::now().date_naive(),
    );

    let raw = generate_or_mock(state, PromptKind::Analysis, &prompt).await;
    let payload = parse_payload(&raw).map_err(AppError::Core)?;

    // The two numeric figures always come from the loaded rows, never
    // from the model's output.
    let response = SuggestionResponse {
        campaign_id: req.campaign_id,
        analysis_type: req.analysis_type,
        request_type: None,
        content: payload.content,
        suggestions: payload.suggestions,
        ideas: payload.ideas,
        performance_analysis: Some(PerformanceAnalysis {
            summary: payload.summary,
            budget_utilization: ctx.budget_utilization,
            advert_completion_rate: ctx.advert_completion_rate,
            strengths: payload.strengths,
            weaknesses: payload.weaknesses,
            recommendations: payload.recommendations,
        }),
        generated_at: Utc::now(),
    };

    persist_snapshot(
        state,
        adforge_core::audit::suggestion_kinds::CAMPAIGN_SUGGESTION,
        user_id,
        &ctx,
        &response,
    );

    Ok(response)
}

// ---------------------------------------------------------------------------
// Creative ideas
// ---------------------------------------------------------------------------

/// Run the creative-idea pipeline end to end.
pub async fn run_creative_idea(
    state: &AppState,
    user_id: DbId,
    req: &CreativeIdeaRequest,
) -> AppResult<SuggestionResponse> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let loaded = CampaignRepo::find_with_context(&state.pool, req.campaign_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "campaign",
            id: req.campaign_id,
        })?;

    let concept_note = match req.concept_note_id {
        Some(note_id) => {
            let note = ConceptNoteRepo::find_by_id(&state.pool, note_id)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "concept note",
                    id: note_id,
                })?;
            Some(ConceptNoteContext {
                title: note.title,
                content: note.content,
                tags: note.tags,
            })
        }
        None => None,
    };

    let ctx = build_prompt_context(&loaded, concept_note);
    let prompt = build_creative_prompt(
        &ctx,
        req.request_type,
        req.brief.as_deref(),
        req.target_audience.as_deref(),
        req.tone,
        Utc::now().date_naive(),
    );

    let raw = generate_or_mock(state, PromptKind::Creative, &prompt).await;
    let payload = parse_payload(&raw).map_err(AppError::Core)?;

    let response = SuggestionResponse {
        campaign_id: req.campaign_id,
        analysis_type: None,
        request_type: Some(req.request_type),
        content: payload.content,
        suggestions: payload.suggestions,
        ideas: payload.ideas,
        performance_analysis: None,
        generated_at: Utc::now(),
    };

    persist_snapshot(
        state,
        adforge_core::audit::suggestion_kinds::CREATIVE_IDEA,
        user_id,
        &ctx,
        &response,
    );

    Ok(response)
}

// ---------------------------------------------------------------------------
// Shared steps
// ---------------------------------------------------------------------------

/// Build the read-only prompt context from loaded campaign rows.
pub fn build_prompt_context(
    loaded: &CampaignWithContext,
    concept_note: Option<ConceptNoteContext>,
) -> PromptContext {
    let campaign = &loaded.campaign;
    let advert_count = loaded.adverts.len();
    let completed = loaded.completed_advert_count();

    PromptContext {
        campaign_id: campaign.id,
        title: campaign.title.clone(),
        client_name: campaign.client_name.clone(),
        status: campaign.status.clone(),
        description: campaign.description.clone().unwrap_or_default(),
        estimated_budget: campaign.estimated_budget,
        actual_cost: campaign.actual_cost,
        start_date: campaign.start_date,
        end_date: campaign.end_date,
        advert_count,
        completed_advert_count: completed,
        budget_line_count: loaded.budget_lines.len(),
        budget_utilization: budget_utilization(campaign.estimated_budget, campaign.actual_cost),
        advert_completion_rate: advert_completion_rate(advert_count, completed),
        concept_note,
    }
}

/// Call the generation adapter, substituting mock output on any failure.
async fn generate_or_mock(state: &AppState, kind: PromptKind, prompt: &str) -> String {
    match state.llm.generate(kind, prompt).await {
        Ok(text) => text,
        Err(err) => {
            // Degrading silently to mock output is the contract here:
            // the caller always gets a structured response.
            tracing::warn!(error = %err, "generation adapter failed, substituting mock output");
            mock::payload(kind)
        }
    }
}

/// Persist a suggestion snapshot on a spawned task. Write failures are
/// logged and swallowed; the response has already been computed.
fn persist_snapshot(
    state: &AppState,
    kind: &str,
    user_id: DbId,
    ctx: &PromptContext,
    response: &SuggestionResponse,
) {
    let pool = state.pool.clone();
    let snapshot = CreateSuggestionSnapshot {
        campaign_id: Some(response.campaign_id),
        author_user_id: Some(user_id),
        kind: kind.to_string(),
        prompt_snapshot: serde_json::to_value(ctx).unwrap_or_default(),
        result: serde_json::to_value(response).unwrap_or_default(),
    };

    tokio::spawn(async move {
        if let Err(err) = SuggestionRepo::append(&pool, &snapshot).await {
            tracing::warn!(error = %err, kind = %snapshot.kind, "failed to persist suggestion snapshot");
        }
    });
}
