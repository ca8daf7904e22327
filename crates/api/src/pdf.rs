//! PDF rendering for suggestion responses.
//!
//! Pure rendering of an already-obtained [`SuggestionResponse`]: no
//! network calls, no generation, no database access. Output is
//! byte-for-byte deterministic for identical inputs: the document
//! metadata (creation/modification dates, document id) is derived from
//! the date the caller passes in, never from the wall clock.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use time::OffsetDateTime;

use adforge_core::suggestion::SuggestionResponse;

/// A4 page geometry, in millimetres.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 20.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 20.0;

/// Approximate characters per line at body size before wrapping.
const WRAP_WIDTH: usize = 90;

/// Everything the renderer needs; the response is supplied by the
/// caller, never re-fetched or re-generated.
pub struct SuggestionDocument<'a> {
    pub campaign_title: &'a str,
    pub client_name: &'a str,
    pub response: &'a SuggestionResponse,
}

/// Render a suggestion response into a paginated PDF byte stream.
pub fn render_suggestion(
    doc: &SuggestionDocument<'_>,
    current_date: NaiveDate,
) -> Result<Vec<u8>, printpdf::Error> {
    let title = format!("AI Suggestions - {}", doc.campaign_title);
    let (pdf, page, layer) = PdfDocument::new(&title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");

    // printpdf stamps documents with the current time and a random id
    // by default; pin all of it to the caller's date so identical
    // inputs produce identical bytes.
    let stamp = metadata_stamp(current_date);
    let pdf = pdf
        .with_creation_date(stamp)
        .with_mod_date(stamp)
        .with_metadata_date(stamp)
        .with_document_id(format!(
            "adforge-suggestion-{}-{}",
            doc.response.campaign_id,
            current_date.format("%Y%m%d")
        ));

    let body_font = pdf.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold_font = pdf.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut writer = PageWriter {
        pdf: &pdf,
        layer: pdf.get_page(page).get_layer(layer),
        body_font,
        bold_font,
        y: PAGE_HEIGHT - MARGIN_TOP,
    };

    writer.heading(&title, 16.0);
    writer.line(&format!("Client: {}", doc.client_name), 11.0);
    writer.line(&format!("Generated: {current_date}"), 11.0);
    writer.gap();

    let response = doc.response;

    if let Some(analysis) = &response.performance_analysis {
        writer.heading("Performance analysis", 13.0);
        writer.paragraph(&analysis.summary);
        writer.line(
            &format!("Budget utilization: {:.1}%", analysis.budget_utilization),
            11.0,
        );
        writer.line(
            &format!("Advert completion: {}%", analysis.advert_completion_rate),
            11.0,
        );
        writer.gap();

        writer.bullet_section("Strengths", &analysis.strengths);
        writer.bullet_section("Weaknesses", &analysis.weaknesses);
        writer.bullet_section("Recommendations", &analysis.recommendations);
    }

    if !response.content.is_empty() {
        writer.heading("Overview", 13.0);
        writer.paragraph(&response.content);
        writer.gap();
    }

    if !response.ideas.is_empty() {
        writer.heading("Ideas", 13.0);
        for idea in &response.ideas {
            let header = if idea.category.is_empty() {
                idea.title.clone()
            } else {
                format!("{} ({})", idea.title, idea.category)
            };
            writer.subheading(&header);
            writer.paragraph(&idea.description);
            if let Some(rationale) = &idea.rationale {
                writer.paragraph(&format!("Rationale: {rationale}"));
            }
            if !idea.tags.is_empty() {
                writer.line(&format!("Tags: {}", idea.tags.join(", ")), 10.0);
            }
            writer.gap();
        }
    }

    writer.bullet_section("Suggestions", &response.suggestions);

    pdf.save_to_bytes()
}

/// Default export filename for a rendered suggestion.
pub fn export_filename(kind_slug: &str, campaign_id: i64, current_date: NaiveDate) -> String {
    format!("{kind_slug}-{campaign_id}-{}.pdf", current_date.format("%Y%m%d"))
}

/// Midnight UTC on the given date, as the `time` type printpdf's
/// metadata setters take.
fn metadata_stamp(date: NaiveDate) -> OffsetDateTime {
    let seconds = NaiveDateTime::new(date, NaiveTime::MIN).and_utc().timestamp();
    OffsetDateTime::UNIX_EPOCH + time::Duration::seconds(seconds)
}

// ---------------------------------------------------------------------------
// Page writer
// ---------------------------------------------------------------------------

/// Cursor-based writer that starts a new page when the current one runs
/// out of vertical space.
struct PageWriter<'a> {
    pdf: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    body_font: IndirectFontRef,
    bold_font: IndirectFontRef,
    y: f32,
}

impl PageWriter<'_> {
    fn advance(&mut self, line_height: f32) {
        if self.y - line_height < MARGIN_BOTTOM {
            let (page, layer) = self
                .pdf
                .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
            self.layer = self.pdf.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN_TOP;
        } else {
            self.y -= line_height;
        }
    }

    fn text(&mut self, text: &str, size: f32, bold: bool) {
        self.advance(size * 0.5);
        let font = if bold { &self.bold_font } else { &self.body_font };
        self.layer
            .use_text(text, size, Mm(MARGIN_LEFT), Mm(self.y), font);
    }

    fn heading(&mut self, text: &str, size: f32) {
        self.text(text, size, true);
        self.y -= 2.0;
    }

    fn subheading(&mut self, text: &str) {
        self.text(text, 11.0, true);
    }

    fn line(&mut self, text: &str, size: f32) {
        self.text(text, size, false);
    }

    fn paragraph(&mut self, text: &str) {
        for wrapped in wrap_text(text, WRAP_WIDTH) {
            self.line(&wrapped, 11.0);
        }
    }

    fn gap(&mut self) {
        self.advance(4.0);
    }

    fn bullet_section(&mut self, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        self.heading(title, 13.0);
        for item in items {
            for (i, wrapped) in wrap_text(item, WRAP_WIDTH - 2).into_iter().enumerate() {
                let prefix = if i == 0 { "- " } else { "  " };
                self.line(&format!("{prefix}{wrapped}"), 11.0);
            }
        }
        self.gap();
    }
}

/// Greedy word wrap at a character budget. Words longer than the budget
/// get their own line rather than being split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforge_core::suggestion::{Idea, PerformanceAnalysis};
    use chrono::{TimeZone, Utc};

    fn sample_response() -> SuggestionResponse {
        SuggestionResponse {
            campaign_id: 7,
            analysis_type: None,
            request_type: None,
            content: "A campaign overview paragraph.".into(),
            suggestions: vec!["Try out-of-home placements".into()],
            ideas: vec![Idea {
                title: "Billboard blitz".into(),
                description: "High-traffic placements across the city centre.".into(),
                category: "outdoor".into(),
                priority: 1,
                tags: vec!["ooh".into()],
                rationale: Some("Strong local awareness".into()),
            }],
            performance_analysis: Some(PerformanceAnalysis {
                summary: "On track".into(),
                budget_utilization: 25.0,
                advert_completion_rate: 50,
                strengths: vec!["pacing".into()],
                weaknesses: vec!["reach".into()],
                recommendations: vec!["shift spend".into()],
            }),
            generated_at: Utc.with_ymd_and_hms(2026, 7, 15, 12, 0, 0).unwrap(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, 15).unwrap()
    }

    #[test]
    fn rendered_output_is_a_pdf() {
        let response = sample_response();
        let doc = SuggestionDocument {
            campaign_title: "Summer Splash",
            client_name: "Acme Beverages",
            response: &response,
        };
        let bytes = render_suggestion(&doc, today()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn identical_inputs_render_identical_bytes() {
        let response = sample_response();
        let doc = SuggestionDocument {
            campaign_title: "Summer Splash",
            client_name: "Acme Beverages",
            response: &response,
        };

        let first = render_suggestion(&doc, today()).unwrap();
        // Cross a wall-clock second boundary so live timestamps, if any
        // leaked into the document, would differ between renders.
        std::thread::sleep(std::time::Duration::from_millis(1100));
        let second = render_suggestion(&doc, today()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn long_content_paginates_without_panicking() {
        let mut response = sample_response();
        response.suggestions = (0..300).map(|i| format!("Suggestion number {i}")).collect();
        let doc = SuggestionDocument {
            campaign_title: "Summer Splash",
            client_name: "Acme Beverages",
            response: &response,
        };
        let bytes = render_suggestion(&doc, today()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn export_filename_includes_kind_and_date() {
        assert_eq!(
            export_filename("campaign-suggestion", 7, today()),
            "campaign-suggestion-7-20260715.pdf"
        );
    }

    #[test]
    fn wrap_respects_width() {
        let wrapped = wrap_text("one two three four five six seven eight", 12);
        assert!(wrapped.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(wrapped.join(" "), "one two three four five six seven eight");
    }

    #[test]
    fn wrap_of_empty_text_yields_single_empty_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
