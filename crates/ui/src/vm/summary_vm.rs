use pawmatch_core::matcher::MatchReport;
use pawmatch_core::model::ResponseSummary;

/// How many ranked breeds the summary screen shows.
const TOP_MATCHES: usize = 5;

/// Display data for the summary screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    /// The ordered numeric dump, e.g. "[3, 1, 5, 2, 4, 3, 1, 5, 2, 4]".
    pub ratings_dump: String,
    pub answer_lines: Vec<String>,
    pub match_lines: Vec<String>,
}

#[must_use]
pub fn map_summary(summary: &ResponseSummary, report: &MatchReport) -> SummaryVm {
    let total = summary.responses().len();
    let answer_lines = summary
        .responses()
        .iter()
        .map(|response| format!("{} {}/5", response.prompt, response.rating))
        .collect();
    let match_lines = report
        .ranked
        .iter()
        .take(TOP_MATCHES)
        .map(|entry| {
            format!(
                "{} (score {}, matched {} of {})",
                entry.breed, entry.score, entry.matched_count, total
            )
        })
        .collect();

    SummaryVm {
        ratings_dump: format!("{:?}", summary.ratings()),
        answer_lines,
        match_lines,
    }
}
