/// Placeholder used when the summary call fails.
pub const SUMMARY_FALLBACK: &str = "summary generation failed";

/// Placeholder used when the explanation call fails.
pub const EXPLANATION_FALLBACK: &str = "could not extract the key points";

/// Summary artifacts for one document. Both fields are always populated;
/// failed LLM calls degrade to the fixed placeholders instead of leaving
/// anything empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryBundle {
    pub summary: String,
    pub explanation: Vec<String>,
}
