use crate::board::GameObservation;
use crate::debug_log;
use crate::filter::is_valid_candidate;
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

/// `NaiveDate::num_days_from_ce` of 2021-12-31, the day the rotation starts.
const EPOCH_DAYS_FROM_CE: i64 = 738_155;

/// Whole calendar days between 2021-12-31 and `today`.
#[must_use]
pub fn days_since_epoch(today: NaiveDate) -> i64 {
    i64::from(today.num_days_from_ce()) - EPOCH_DAYS_FROM_CE
}

/// First cursor position for the day. Changes once per calendar day and is
/// identical for every call made on the same day.
#[must_use]
pub fn starting_index(today: NaiveDate, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    let size = i64::try_from(size).unwrap_or(i64::MAX);
    usize::try_from(days_since_epoch(today).rem_euclid(size)).unwrap_or(0)
}

/// Candidate bookkeeping for a single game attempt.
#[derive(Debug, Clone)]
pub struct SolverState {
    remaining: Vec<String>,
    discarded: HashSet<String>,
    cursor: Option<usize>,
    parity: bool,
    today: NaiveDate,
}

impl SolverState {
    #[must_use]
    pub fn new(dictionary: &[String], today: NaiveDate) -> Self {
        Self {
            remaining: dictionary.to_vec(),
            discarded: HashSet::new(),
            cursor: None,
            parity: false,
            today,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    #[must_use]
    pub fn discarded(&self) -> &HashSet<String> {
        &self.discarded
    }

    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn discard(&mut self, word: String) {
        self.discarded.insert(word);
    }

    /// Index of the next word to try, alternating between the point half
    /// way and three quarters of the way past the cursor. `None` once the
    /// list is exhausted.
    pub fn next_index(&mut self) -> Option<usize> {
        let len = self.remaining.len();
        match len {
            0 => return None,
            1 => return Some(0),
            _ => {}
        }

        let cursor = *self
            .cursor
            .get_or_insert_with(|| starting_index(self.today, len));
        self.parity = !self.parity;
        let span = len - 1;
        let offset = if self.parity { span * 3 / 4 } else { span / 2 };
        Some((cursor + offset) % len)
    }

    /// Removes and returns the next word. Every call consumes exactly one
    /// word whether or not the caller ends up using it.
    pub fn next_candidate(&mut self) -> Option<String> {
        let Some(index) = self.next_index() else {
            log::info!("Out of potential words");
            return None;
        };
        let word = self.remaining.remove(index);
        if !self.remaining.is_empty() {
            self.cursor = Some(index % self.remaining.len());
        }
        Some(word)
    }
}

/// What the elimination loop produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextGuess {
    Word(String),
    /// Every board row already carries an evaluation.
    BoardFull,
    /// No remaining word is consistent with the board.
    Exhausted,
    /// Validation failed internally; treated like running out of words.
    Failed,
}

impl NextGuess {
    #[must_use]
    pub fn into_word(self) -> Option<String> {
        match self {
            Self::Word(word) => Some(word),
            Self::BoardFull | Self::Exhausted | Self::Failed => None,
        }
    }
}

/// Pulls candidates until one fits every evaluated row. Words of the wrong
/// length are discarded without being checked.
pub fn next_guess(
    state: &mut SolverState,
    observation: &GameObservation,
    word_length: usize,
) -> NextGuess {
    if observation.is_full() {
        log::info!(
            "No next guess: all {} rows are evaluated",
            observation.rows.len()
        );
        return NextGuess::BoardFull;
    }

    while let Some(word) = state.next_candidate() {
        if word.chars().count() != word_length {
            debug_log!("Discarding '{word}': not {word_length} letters");
            state.discard(word);
            continue;
        }
        match is_valid_candidate(&word, observation) {
            Ok(true) => return NextGuess::Word(word),
            Ok(false) => {
                debug_log!("Discarding '{word}'");
                state.discard(word);
            }
            Err(e) => {
                log::error!("Could not validate '{word}': {e}");
                return NextGuess::Failed;
            }
        }
    }

    log::info!("Couldn't find a candidate for the next word");
    NextGuess::Exhausted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GuessRow, LetterEvaluation, parse_evaluations};
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn empty_board(rows: usize) -> GameObservation {
        GameObservation::new(vec![GuessRow::empty(); rows])
    }

    #[test]
    fn test_days_since_epoch() {
        assert_eq!(days_since_epoch(date(2021, 12, 31)), 0);
        assert_eq!(days_since_epoch(date(2022, 1, 3)), 3);
        assert_eq!(days_since_epoch(date(2023, 1, 1)), 366);
        assert_eq!(days_since_epoch(date(2021, 12, 30)), -1);
    }

    #[test]
    fn test_starting_index_is_stable_within_a_day() {
        let today = date(2024, 5, 17);
        assert_eq!(starting_index(today, 2315), starting_index(today, 2315));
        assert_eq!(starting_index(date(2022, 1, 3), 2), 1);
        assert_eq!(starting_index(date(2022, 1, 3), 10), 3);
        assert_eq!(starting_index(date(2021, 12, 30), 10), 9);
        assert_eq!(starting_index(today, 0), 0);
    }

    #[test]
    fn test_next_index_single_word_is_zero() {
        let mut state = SolverState::new(&words(&["crane"]), date(2024, 5, 17));
        assert_eq!(state.next_index(), Some(0));
        assert_eq!(state.next_index(), Some(0));
    }

    #[test]
    fn test_next_index_empty_is_none() {
        let mut state = SolverState::new(&[], date(2024, 5, 17));
        assert_eq!(state.next_index(), None);
        assert_eq!(state.next_candidate(), None);
    }

    #[test]
    fn test_next_index_alternates_offsets() {
        // 11 words, day 3: cursor starts at 3
        let dict: Vec<String> = (0..11).map(|i| format!("w{i:03}")).collect();
        let mut state = SolverState::new(&dict, date(2022, 1, 3));
        // parity 1: 3 + floor(10 * 0.75) = 10
        assert_eq!(state.next_index(), Some(10));
        // parity 0: 3 + floor(10 * 0.5) = 8
        assert_eq!(state.next_index(), Some(8));
        assert_eq!(state.next_index(), Some(10));
    }

    #[test]
    fn test_next_candidate_consumes_and_wraps_cursor() {
        let dict = words(&["aaaaa", "bbbbb", "ccccc"]);
        let mut state = SolverState::new(&dict, date(2022, 1, 3));
        // cursor 0, offset floor(2 * 0.75) = 1
        assert_eq!(state.next_candidate().as_deref(), Some("bbbbb"));
        assert_eq!(state.remaining(), &words(&["aaaaa", "ccccc"])[..]);
        assert_eq!(state.cursor(), Some(1));
        // cursor 1, offset floor(1 * 0.5) = 0
        assert_eq!(state.next_candidate().as_deref(), Some("ccccc"));
        assert_eq!(state.next_candidate().as_deref(), Some("aaaaa"));
        assert_eq!(state.next_candidate(), None);
    }

    #[test]
    fn test_next_index_always_in_range() {
        let dict: Vec<String> = (0..97).map(|i| format!("w{i:04}")).collect();
        let mut state = SolverState::new(&dict, date(2025, 2, 14));
        let mut seen = HashSet::new();
        while !state.remaining().is_empty() {
            let len = state.remaining().len();
            let mut peek = state.clone();
            let index = peek.next_index().unwrap();
            assert!(index < len);
            if let Some(cursor) = state.cursor() {
                assert!(cursor < len);
            }
            let word = state.next_candidate().unwrap();
            assert!(seen.insert(word), "a word was returned twice");
        }
        assert_eq!(seen.len(), 97);
    }

    #[test]
    fn test_same_day_same_first_candidate() {
        let dict = words(&["crane", "slate", "raise", "stare", "arise", "irate"]);
        let today = date(2024, 8, 1);
        let first = SolverState::new(&dict, today).next_candidate();
        let again = SolverState::new(&dict, today).next_candidate();
        assert_eq!(first, again);
    }

    #[test]
    fn test_next_guess_board_full_skips_dictionary() {
        let dict = words(&["crane", "slate"]);
        let mut state = SolverState::new(&dict, date(2024, 8, 1));
        let obs = GameObservation::new(vec![GuessRow::evaluated(
            "arise",
            vec![LetterEvaluation::Absent; 5],
        )]);
        assert_eq!(next_guess(&mut state, &obs, 5), NextGuess::BoardFull);
        assert_eq!(state.remaining().len(), 2);
    }

    #[test]
    fn test_next_guess_discards_until_valid() {
        let dict = words(&["crane", "slate", "moist", "idyst", "ghost"]);
        let mut state = SolverState::new(&dict, date(2024, 8, 1));
        let mut obs = empty_board(6);
        obs.rows[0] = GuessRow::evaluated("arise", parse_evaluations("XXYGX").unwrap());
        assert_eq!(
            next_guess(&mut state, &obs, 5),
            NextGuess::Word("idyst".to_string())
        );
        assert!(!state.discarded().contains("idyst"));
        assert_eq!(state.discarded().len() + state.remaining().len(), 4);
    }

    #[test]
    fn test_next_guess_exhausts_within_remaining_len() {
        let dict = words(&["crane", "slate", "raise", "stare"]);
        let mut state = SolverState::new(&dict, date(2024, 8, 1));
        let mut obs = empty_board(6);
        obs.rows[0] = GuessRow::evaluated("zzzzz", vec![LetterEvaluation::Correct; 5]);
        assert_eq!(next_guess(&mut state, &obs, 5), NextGuess::Exhausted);
        assert!(state.remaining().is_empty());
        assert_eq!(state.discarded().len(), 4);
        assert_eq!(next_guess(&mut state, &obs, 5), NextGuess::Exhausted);
    }

    #[test]
    fn test_next_guess_skips_wrong_length() {
        let dict = words(&["cranes", "slat"]);
        let mut state = SolverState::new(&dict, date(2024, 8, 1));
        assert_eq!(next_guess(&mut state, &empty_board(6), 5), NextGuess::Exhausted);
        assert_eq!(state.discarded().len(), 2);
    }

    #[test]
    fn test_next_guess_recovers_from_malformed_row() {
        let dict = words(&["crane", "slate"]);
        let mut state = SolverState::new(&dict, date(2024, 8, 1));
        let mut obs = empty_board(6);
        obs.rows[0] = GuessRow::evaluated("arise", parse_evaluations("XX").unwrap());
        let result = next_guess(&mut state, &obs, 5);
        assert_eq!(result, NextGuess::Failed);
        assert_eq!(result.into_word(), None);
    }

    fn day_from_epoch(days: i32) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(738_155 + days).unwrap()
    }

    proptest! {
        #[test]
        fn next_index_stays_in_range_until_exhausted(
            size in 1_usize..300,
            days in -3650_i32..7300
        ) {
            let dict: Vec<String> = (0..size).map(|i| format!("w{i:04}")).collect();
            let mut state = SolverState::new(&dict, day_from_epoch(days));
            let mut seen = HashSet::new();
            while !state.remaining().is_empty() {
                let len = state.remaining().len();
                let mut peek = state.clone();
                let index = peek.next_index().unwrap();
                prop_assert!(index < len);
                if len == 1 {
                    prop_assert_eq!(index, 0);
                }
                if let Some(cursor) = state.cursor() {
                    prop_assert!(cursor < len);
                }
                let word = state.next_candidate().unwrap();
                prop_assert_eq!(&word, &peek.remaining()[index]);
                prop_assert!(seen.insert(word));
            }
            prop_assert_eq!(seen.len(), size);
            prop_assert_eq!(state.next_index(), None);
        }

        #[test]
        fn starting_index_depends_only_on_day_and_size(
            size in 1_usize..5000,
            days in -3650_i32..7300
        ) {
            let today = day_from_epoch(days);
            let first = starting_index(today, size);
            prop_assert_eq!(first, starting_index(today, size));
            prop_assert!(first < size);
            prop_assert_eq!(starting_index(day_from_epoch(days + 1), size), (first + 1) % size);
        }
    }
}
