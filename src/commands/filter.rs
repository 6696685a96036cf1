//! Filter command
//!
//! One parse -> generate pass over a round of raw feedback.

use crate::core::{Conflict, Constraints};
use crate::generator::{CandidateGenerator, Generation};
use crate::input::RawFeedback;
use crate::parser::{ConstraintParser, ParseError};
use log::{info, warn};
use std::time::{Duration, Instant};

/// Result of filtering the dictionary against one round of feedback
#[derive(Debug, Clone)]
pub struct FilterResult {
    pub feedback: RawFeedback,
    pub constraints: Constraints,
    pub conflicts: Vec<Conflict>,
    pub generation: Generation,
    pub duration: Duration,
}

impl FilterResult {
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.generation.candidates.len()
    }
}

/// Parse `feedback` and generate the matching candidates
///
/// # Errors
///
/// Returns `ParseError` if any of the three inputs is malformed; nothing is
/// generated in that case.
pub fn run_filter(
    feedback: &RawFeedback,
    parser: &ConstraintParser,
    generator: &CandidateGenerator,
) -> Result<FilterResult, ParseError> {
    info!("Green: {}", feedback.green);
    info!("Yellow: {}", feedback.yellow);
    info!("Gray: {}", feedback.gray);

    let start = Instant::now();
    let constraints = parser.parse(&feedback.green, &feedback.yellow, &feedback.gray)?;

    let conflicts = constraints.conflicts();
    for conflict in &conflicts {
        warn!("Overlapping feedback: {conflict}");
    }

    let generation = generator.run(&constraints);
    let duration = start.elapsed();
    info!(
        "Found {} candidates in {:.4}s",
        generation.candidates.len(),
        duration.as_secs_f64()
    );

    Ok(FilterResult {
        feedback: feedback.clone(),
        constraints,
        conflicts,
        generation,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn setup_dictionary() -> Dictionary {
        Dictionary::from_text("crane\nslate\nstale\nsteal\nleast\nirate\ncrate\n")
    }

    #[test]
    fn filter_finds_candidates() {
        let dictionary = setup_dictionary();
        let generator = CandidateGenerator::new(&dictionary);
        let feedback = RawFeedback::new("s____", "e2", "talk");

        let result = run_filter(&feedback, &ConstraintParser::default(), &generator).unwrap();
        assert_eq!(result.candidate_count(), 3);
        assert_eq!(
            result.generation.candidates.texts(),
            vec!["steal", "stale", "slate"]
        );
        assert!(result.conflicts.is_empty());
        assert_eq!(result.feedback, feedback);
    }

    #[test]
    fn filter_reports_parse_error() {
        let dictionary = setup_dictionary();
        let generator = CandidateGenerator::new(&dictionary);
        let feedback = RawFeedback::new("", "a1 b", "");

        let err = run_filter(&feedback, &ConstraintParser::default(), &generator).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingPosition {
                token: "b".to_string()
            }
        );
    }

    #[test]
    fn filter_surfaces_conflicts_without_rejecting() {
        let dictionary = setup_dictionary();
        let generator = CandidateGenerator::new(&dictionary);
        let feedback = RawFeedback::new("c____", "", "crate");

        let result = run_filter(&feedback, &ConstraintParser::default(), &generator).unwrap();
        assert_eq!(result.conflicts.len(), 1);
        assert_eq!(result.generation.candidates.texts(), vec!["crate"]);
    }

    #[test]
    fn filter_empty_feedback_is_empty_result() {
        let dictionary = setup_dictionary();
        let generator = CandidateGenerator::new(&dictionary);
        let result = run_filter(
            &RawFeedback::default(),
            &ConstraintParser::default(),
            &generator,
        )
        .unwrap();
        assert_eq!(result.candidate_count(), 0);
        assert!(result.constraints.is_empty());
    }
}
