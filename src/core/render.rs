//! Renderer module
//!
//! Formats token counts, cost estimates, and the end-of-run summary.
//! Rendering returns strings; the scan driver decides where they go.

use num_format::{Locale, ToFormattedString};

use crate::core::model::RunTotals;

/// Fixed presentational rate: dollars per one million tokens.
const COST_PER_MILLION_TOKENS: f64 = 3.0;

/// Format a bare count with thousands grouping ("1,234,567").
pub fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::en)
}

/// Format a token count with its cost estimate.
///
/// 1,000,000 tokens render as "1,000,000 tokens (≈$3.00 at $3/1M tokens)".
pub fn format_token_count(count: usize) -> String {
    let cost = count as f64 / 1_000_000.0 * COST_PER_MILLION_TOKENS;
    format!(
        "{} tokens (≈${:.2} at $3/1M tokens)",
        format_count(count),
        cost
    )
}

/// Render the end-of-run summary block, preceded by a blank line.
pub fn render_summary(totals: &RunTotals) -> String {
    format!(
        "\nSummary:\nTotal files processed: {}\nFiles skipped (too large): {}\nTotal: {}",
        format_count(totals.files_processed),
        format_count(totals.files_skipped),
        format_token_count(totals.total_tokens)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_zero_tokens_cost_zero() {
        assert_eq!(format_token_count(0), "0 tokens (≈$0.00 at $3/1M tokens)");
    }

    #[test]
    fn test_one_million_tokens_cost_three_dollars() {
        assert_eq!(
            format_token_count(1_000_000),
            "1,000,000 tokens (≈$3.00 at $3/1M tokens)"
        );
    }

    #[test]
    fn test_cost_rounds_to_two_decimals() {
        // 1,234,567 / 1M * 3 = 3.7037...
        assert_eq!(
            format_token_count(1_234_567),
            "1,234,567 tokens (≈$3.70 at $3/1M tokens)"
        );
    }

    #[test]
    fn test_small_counts_cost_under_a_cent() {
        assert_eq!(format_token_count(100), "100 tokens (≈$0.00 at $3/1M tokens)");
    }

    #[test]
    fn test_summary_block_layout() {
        let mut totals = RunTotals::new();
        totals.record_processed(1_000_000);
        totals.record_skipped();

        let summary = render_summary(&totals);
        let expected = "\nSummary:\n\
                        Total files processed: 1\n\
                        Files skipped (too large): 1\n\
                        Total: 1,000,000 tokens (≈$3.00 at $3/1M tokens)";
        assert_eq!(summary, expected);
    }

    #[test]
    fn test_summary_counts_are_grouped() {
        let mut totals = RunTotals::new();
        for _ in 0..1500 {
            totals.record_processed(1000);
        }

        let summary = render_summary(&totals);
        assert!(summary.contains("Total files processed: 1,500"));
        assert!(summary.contains("Total: 1,500,000 tokens"));
    }
}
