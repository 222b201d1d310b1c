//! Shot-duration consistency check.

use serde::Serialize;
use tracing::warn;
use vprompt_models::VideoPrompt;

/// Allowed gap between the shot sum and the declared total, in seconds.
pub const DURATION_TOLERANCE_SECS: f64 = 0.1;

/// Outcome of comparing per-shot durations with the declared total.
///
/// Advisory: a mismatch is reported to the caller and logged, the prompt is
/// still returned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationReport {
    pub duration_match: bool,
    pub total_duration: f64,
    pub expected_duration: f64,
}

/// Strictly inside the tolerance; a gap of exactly the tolerance mismatches.
fn within_tolerance(total: f64, expected: f64) -> bool {
    (total - expected).abs() < DURATION_TOLERANCE_SECS
}

pub fn validate_durations(prompt: &VideoPrompt) -> DurationReport {
    let total_duration = prompt.shots_duration_sum();
    let expected_duration = prompt.duration_total_seconds;
    let duration_match = within_tolerance(total_duration, expected_duration);
    if !duration_match {
        warn!(
            total_duration,
            expected_duration, "Duration mismatch between shots and declared total"
        );
    }

    DurationReport {
        duration_match,
        total_duration,
        expected_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vprompt_models::Shot;

    fn prompt_with(durations: &[f64], total: f64) -> VideoPrompt {
        VideoPrompt {
            project_title: Some("Test".to_string()),
            resolution: Some("16:9".to_string()),
            duration_total_seconds: total,
            visual_style: None,
            product_reference_image_link: None,
            product_consistency_rule: None,
            shared_elements: None,
            shots: durations
                .iter()
                .enumerate()
                .map(|(i, &d)| Shot::new(i as u32 + 1, d))
                .collect(),
            extra: Default::default(),
        }
    }

    #[test]
    fn test_matching_durations() {
        let report = validate_durations(&prompt_with(&[2.0, 2.0, 2.0], 6.0));
        assert!(report.duration_match);
        assert_eq!(report.total_duration, 6.0);
        assert_eq!(report.expected_duration, 6.0);
    }

    #[test]
    fn test_mismatched_durations() {
        let report = validate_durations(&prompt_with(&[2.0, 2.0, 2.5], 6.0));
        assert!(!report.duration_match);
        assert_eq!(report.total_duration, 6.5);
        assert_eq!(report.expected_duration, 6.0);
    }

    #[test]
    fn test_decimal_durations_within_tolerance() {
        let report = validate_durations(&prompt_with(&[1.5, 2.25, 2.25], 6.0));
        assert!(report.duration_match);

        let report = validate_durations(&prompt_with(&[2.0, 2.0, 2.05], 6.0));
        assert!(report.duration_match);
    }

    #[test]
    fn test_gap_at_tolerance_is_a_mismatch() {
        assert!(!within_tolerance(0.1, 0.0));
        assert!(!within_tolerance(0.0, 0.1));
        assert!(within_tolerance(0.05, 0.0));

        let report = validate_durations(&prompt_with(&[4.0], 4.5));
        assert!(!report.duration_match);
    }

    #[test]
    fn test_no_shots() {
        let report = validate_durations(&prompt_with(&[], 4.0));
        assert!(!report.duration_match);
        assert_eq!(report.total_duration, 0.0);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = validate_durations(&prompt_with(&[4.0, 4.0], 8.0));
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "durationMatch": true,
                "totalDuration": 8.0,
                "expectedDuration": 8.0
            })
        );
    }
}
