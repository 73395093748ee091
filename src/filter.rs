// Consistency check of a candidate against the rows the game has scored.

use crate::board::{GameObservation, GuessRow, LetterEvaluation};
use crate::error::SelectionError;
use std::collections::HashMap;

#[derive(Default)]
struct LetterMarks {
    correct: Vec<usize>,
    present: Vec<usize>,
    absent: usize,
}

/// Returns `true` if `candidate` could still be the solution given every
/// evaluated row of `observation`.
///
/// # Errors
///
/// Returns [`SelectionError::MalformedRow`] when a row's evaluation does not
/// have one entry per letter.
pub fn is_valid_candidate(
    candidate: &str,
    observation: &GameObservation,
) -> Result<bool, SelectionError> {
    let candidate: Vec<char> = candidate.chars().collect();
    let mut candidate_counts: HashMap<char, usize> = HashMap::new();
    for &c in &candidate {
        *candidate_counts.entry(c).or_insert(0) += 1;
    }

    for (index, row) in observation.evaluated_rows().enumerate() {
        if !row_allows(&candidate, &candidate_counts, index, row)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn row_allows(
    candidate: &[char],
    candidate_counts: &HashMap<char, usize>,
    index: usize,
    row: &GuessRow,
) -> Result<bool, SelectionError> {
    let Some(evaluation) = row.evaluation.as_ref() else {
        return Ok(true);
    };
    let letters: Vec<char> = row.word.chars().collect();
    if letters.len() != evaluation.len() {
        return Err(SelectionError::MalformedRow {
            row: index,
            letters: letters.len(),
            evaluations: evaluation.len(),
        });
    }

    let mut marks: HashMap<char, LetterMarks> = HashMap::new();
    for (pos, (&letter, &eval)) in letters.iter().zip(evaluation).enumerate() {
        let entry = marks.entry(letter).or_default();
        match eval {
            LetterEvaluation::Correct => entry.correct.push(pos),
            LetterEvaluation::Present => entry.present.push(pos),
            LetterEvaluation::Absent => entry.absent += 1,
        }
    }

    for (letter, mark) in &marks {
        if mark.correct.iter().any(|&pos| candidate.get(pos) != Some(letter)) {
            return Ok(false);
        }
        if mark.present.iter().any(|&pos| candidate.get(pos) == Some(letter)) {
            return Ok(false);
        }

        let min_count = mark.correct.len() + mark.present.len();
        let max_count = if mark.absent > 0 { min_count } else { letters.len() };
        let used = candidate_counts.get(letter).copied().unwrap_or(0);
        if used < min_count || used > max_count {
            return Ok(false);
        }
    }
    Ok(true)
}
