//! Formatting utilities for terminal output

use crate::core::{GreenConstraint, Letter, Position, Word};

/// Render the green slots as a five-character mask, e.g. `S__A_`
#[must_use]
pub fn green_mask(greens: &GreenConstraint, placeholder: char) -> String {
    Position::all()
        .map(|p| {
            greens
                .get(p)
                .map_or(placeholder, |l| l.as_char().to_ascii_uppercase())
        })
        .collect()
}

/// Render the green slots as squares: 🟩 for known, ⬜ for open
#[must_use]
pub fn green_squares(greens: &GreenConstraint) -> String {
    Position::all()
        .map(|p| if greens.get(p).is_some() { '🟩' } else { '⬜' })
        .collect()
}

/// Letters as one uppercase string, `-` when empty
#[must_use]
pub fn letters_string(letters: &[Letter]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(|l| l.as_char().to_ascii_uppercase())
        .collect()
}

/// Lay out words in rows of `columns`, uppercase, separated by two spaces
#[must_use]
pub fn word_columns(words: &[Word], columns: usize) -> Vec<String> {
    words
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|w| w.text().to_uppercase())
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
