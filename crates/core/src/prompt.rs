//! Deterministic prompt rendering for the suggestion pipeline.
//!
//! Pure functions of their inputs: no clock reads, no randomness. The
//! current date is passed in by the caller and appears only as a display
//! label in the campaign facts section. Each variant embeds a literal
//! JSON example the model is instructed to mimic exactly, followed by an
//! explicit "return only JSON" directive.

use chrono::NaiveDate;

use crate::context::PromptContext;
use crate::suggestion::{AnalysisType, RequestType, Tone};

/// Shared closing directive. Models still wrap output in code fences
/// sometimes; the adapter strips those before parsing.
const JSON_ONLY_DIRECTIVE: &str =
    "Return ONLY the JSON object described above. Do not wrap it in markdown, \
     code fences, or any explanatory text.";

/// Target schema for the three campaign-analysis variants. Structurally
/// identical across variants; only the instruction framing differs.
const ANALYSIS_SCHEMA: &str = r#"{
  "summary": "one-paragraph overall assessment",
  "strengths": ["what is working"],
  "weaknesses": ["what is underperforming"],
  "recommendations": ["concrete next actions"],
  "ideas": [
    {
      "title": "short idea name",
      "description": "what to do",
      "category": "channel or theme",
      "priority": 1,
      "tags": ["keyword"],
      "rationale": "why this will help"
    }
  ],
  "suggestions": ["short one-line suggestions"]
}"#;

/// Target schema for creative-idea requests.
const CREATIVE_SCHEMA: &str = r#"{
  "content": "short introduction to the idea set",
  "ideas": [
    {
      "title": "short idea name",
      "description": "the creative concept",
      "type": "creative | concept | tagline | visual",
      "priority": 1,
      "tags": ["keyword"],
      "rationale": "why this fits the brief"
    }
  ],
  "suggestions": ["short one-line suggestions"]
}"#;

/// Render the campaign-analysis prompt.
///
/// `analysis` selects the instruction framing: performance, ideas, or
/// general (optimization and unspecified requests share the general
/// framing).
pub fn build_campaign_prompt(
    ctx: &PromptContext,
    analysis: Option<AnalysisType>,
    additional_context: Option<&str>,
    current_date: NaiveDate,
) -> String {
    let focus = match analysis {
        Some(AnalysisType::Performance) => {
            "Analyse this advertising campaign's delivery performance. \
             Weigh budget pacing, advert completion, and schedule position."
        }
        Some(AnalysisType::Ideas) => {
            "Propose fresh campaign ideas that build on what this \
             advertising campaign has already delivered."
        }
        Some(AnalysisType::Optimization) | None => {
            "Review this advertising campaign and recommend optimisations \
             across budget allocation, scheduling, and creative mix."
        }
    };

    let mut prompt = String::with_capacity(1024);
    prompt.push_str(focus);
    prompt.push_str("\n\n");
    prompt.push_str(&campaign_facts(ctx, current_date));

    if let Some(extra) = additional_context {
        if !extra.is_empty() {
            prompt.push_str("\nAdditional context from the requester:\n");
            prompt.push_str(extra);
            prompt.push('\n');
        }
    }

    prompt.push_str("\nRespond with a JSON object matching this structure exactly:\n");
    prompt.push_str(ANALYSIS_SCHEMA);
    prompt.push_str("\n\n");
    prompt.push_str(JSON_ONLY_DIRECTIVE);
    prompt
}

/// Render the creative-idea prompt.
pub fn build_creative_prompt(
    ctx: &PromptContext,
    request_type: RequestType,
    brief: Option<&str>,
    target_audience: Option<&str>,
    tone: Option<Tone>,
    current_date: NaiveDate,
) -> String {
    let ask = match request_type {
        RequestType::Creative => "creative executions",
        RequestType::Concept => "campaign concepts",
        RequestType::Tagline => "taglines",
        RequestType::Visual => "visual directions",
    };

    let mut prompt = String::with_capacity(1024);
    prompt.push_str(&format!(
        "Generate {ask} for the advertising campaign described below.\n\n"
    ));
    prompt.push_str(&campaign_facts(ctx, current_date));

    if let Some(note) = &ctx.concept_note {
        prompt.push_str("\nStaff concept note to build on:\n");
        prompt.push_str(&format!("Title: {}\n", note.title));
        prompt.push_str(&format!("Content: {}\n", note.content));
        if !note.tags.is_empty() {
            prompt.push_str(&format!("Tags: {}\n", note.tags.join(", ")));
        }
    }

    if let Some(brief) = brief {
        if !brief.is_empty() {
            prompt.push_str(&format!("\nBrief: {brief}\n"));
        }
    }
    if let Some(audience) = target_audience {
        if !audience.is_empty() {
            prompt.push_str(&format!("Target audience: {audience}\n"));
        }
    }
    if let Some(tone) = tone {
        prompt.push_str(&format!("Tone: {}\n", tone.as_str()));
    }

    prompt.push_str("\nRespond with a JSON object matching this structure exactly:\n");
    prompt.push_str(CREATIVE_SCHEMA);
    prompt.push_str("\n\n");
    prompt.push_str(JSON_ONLY_DIRECTIVE);
    prompt
}

/// The campaign facts block shared by every prompt variant.
///
/// The current date is a display label only; it carries no behavioural
/// meaning beyond letting the model relate the campaign window to today.
fn campaign_facts(ctx: &PromptContext, current_date: NaiveDate) -> String {
    let date_range = match (ctx.start_date, ctx.end_date) {
        (Some(start), Some(end)) => format!("{start} to {end}"),
        (Some(start), None) => format!("from {start}"),
        (None, Some(end)) => format!("until {end}"),
        (None, None) => "not scheduled".to_string(),
    };

    format!(
        "Campaign: {title}\n\
         Client: {client}\n\
         Status: {status}\n\
         Description: {description}\n\
         Estimated budget: {estimated:.2}\n\
         Actual cost: {actual:.2}\n\
         Budget utilization: {utilization:.1}%\n\
         Adverts: {adverts} ({completion}% complete)\n\
         Budget lines: {lines}\n\
         Schedule: {date_range}\n\
         Current date: {current_date}\n",
        title = ctx.title,
        client = ctx.client_name,
        status = ctx.status,
        description = ctx.description,
        estimated = ctx.estimated_budget,
        actual = ctx.actual_cost,
        utilization = ctx.budget_utilization,
        adverts = ctx.advert_count,
        completion = ctx.advert_completion_rate,
        lines = ctx.budget_line_count,
    )
}
