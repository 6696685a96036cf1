//! Simple interactive CLI mode
//!
//! Prompt for the three feedback strings, print the candidates, repeat.

use super::filter::run_filter;
use crate::generator::CandidateGenerator;
use crate::input::{FeedbackSource, PromptFeedback};
use crate::output::{print_filter_result, print_parse_error};
use crate::parser::ConstraintParser;
use anyhow::{Context, Result};
use log::{info, warn};
use std::io::{BufRead, Write};

/// Run the simple interactive CLI mode
///
/// Malformed input is reported and asked for again; nothing is generated for
/// it. The loop ends when the user declines another round or input runs out.
/// Returns the number of completed rounds.
///
/// # Errors
///
/// Returns an error if reading from or writing to the prompt fails.
pub fn run_simple<R: BufRead, W: Write>(
    prompt: &mut PromptFeedback<R, W>,
    parser: &ConstraintParser,
    generator: &CandidateGenerator,
) -> Result<usize> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Filter - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Describe your feedback so far and I'll list every word that fits.");

    let mut rounds = 0;
    loop {
        let Some(feedback) = prompt
            .read_constraints()
            .context("Failed to read feedback")?
        else {
            info!("Input closed");
            break;
        };

        let result = match run_filter(&feedback, parser, generator) {
            Ok(result) => result,
            Err(err) => {
                warn!("Rejected feedback: {err}");
                print_parse_error(&err);
                continue;
            }
        };

        print_filter_result(&result, parser.placeholder(), false);
        rounds += 1;

        if !prompt
            .confirm("Filter again?")
            .context("Failed to read answer")?
        {
            break;
        }
    }

    println!("\n👋 Good luck!\n");
    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use std::io::Cursor;

    fn run(input: &str) -> (usize, String) {
        let dictionary = Dictionary::from_text("slate\nstale\nsteal\nleast\ncrane\n");
        let generator = CandidateGenerator::new(&dictionary);
        let mut prompt =
            PromptFeedback::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), '_');

        let rounds = run_simple(&mut prompt, &ConstraintParser::default(), &generator).unwrap();
        let transcript = String::from_utf8(prompt.into_writer()).unwrap();
        (rounds, transcript)
    }

    #[test]
    fn single_round_then_stop() {
        let (rounds, transcript) = run("s____\ne2\ntalk\nno\n");
        assert_eq!(rounds, 1);
        assert!(transcript.contains("Filter again?"));
    }

    #[test]
    fn parse_error_prompts_again() {
        let (rounds, transcript) = run("\na1 b\n\ns____\ne2\ntalk\nno\n");
        assert_eq!(rounds, 1);
        assert_eq!(transcript.matches("Which letters are correct?").count(), 2);
    }

    #[test]
    fn repeats_until_declined() {
        let (rounds, _) = run("s____\ne2\ntalk\nyes\nc____\n\nrane\nn\n");
        assert_eq!(rounds, 2);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let (rounds, _) = run("");
        assert_eq!(rounds, 0);

        let (rounds, _) = run("s____\ne2\ntalk\n");
        assert_eq!(rounds, 1);
    }
}
