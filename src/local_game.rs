// In-process game with the same rules as the daily puzzle.

use crate::board::{GameObservation, GameStatus, GuessRow, evaluate_guess};
use crate::game_state::GameSurface;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct LocalGame {
    solution: String,
    allowed: HashSet<String>,
    rows: Vec<GuessRow>,
    current: usize,
    status: GameStatus,
}

impl LocalGame {
    /// A fresh board of `max_guesses` rows. Rows whose word is not in
    /// `allowed` (the solution is always allowed) are refused without an
    /// evaluation, like the real game's "not in word list".
    pub fn new<I>(solution: &str, allowed: I, max_guesses: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut allowed: HashSet<String> = allowed.into_iter().collect();
        allowed.insert(solution.to_string());
        Self {
            solution: solution.to_string(),
            allowed,
            rows: vec![GuessRow::empty(); max_guesses],
            current: 0,
            status: GameStatus::InProgress,
        }
    }

    fn word_length(&self) -> usize {
        self.solution.chars().count()
    }
}

impl GameSurface for LocalGame {
    fn solution(&self) -> String {
        self.solution.clone()
    }

    fn observation(&self) -> GameObservation {
        GameObservation::new(self.rows.clone())
    }

    fn can_input(&self) -> bool {
        true
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn add_letter(&mut self, letter: char) {
        let word_length = self.word_length();
        if self.status != GameStatus::InProgress {
            return;
        }
        if let Some(row) = self.rows.get_mut(self.current) {
            if row.word.chars().count() < word_length {
                row.word.push(letter);
            }
        }
    }

    fn remove_letter(&mut self) {
        if self.status != GameStatus::InProgress {
            return;
        }
        if let Some(row) = self.rows.get_mut(self.current) {
            row.word.pop();
        }
    }

    fn evaluate_row(&mut self) {
        if self.status != GameStatus::InProgress {
            return;
        }
        let word_length = self.word_length();
        let Some(row) = self.rows.get_mut(self.current) else {
            return;
        };
        if row.word.chars().count() != word_length {
            log::debug!("Not enough letters in '{}'", row.word);
            return;
        }
        if !self.allowed.contains(&row.word) {
            log::debug!("'{}' is not in the word list", row.word);
            return;
        }

        row.evaluation = Some(evaluate_guess(&row.word, &self.solution));
        self.current += 1;
        if row.is_solved() {
            self.status = GameStatus::Win;
        } else if self.current == self.rows.len() {
            self.status = GameStatus::Lose;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LetterEvaluation;

    fn type_word(game: &mut LocalGame, word: &str) {
        for c in word.chars() {
            game.add_letter(c);
        }
        game.evaluate_row();
    }

    fn game(solution: &str, allowed: &[&str], rows: usize) -> LocalGame {
        LocalGame::new(solution, allowed.iter().map(|s| s.to_string()), rows)
    }

    #[test]
    fn test_accepted_row_is_evaluated() {
        let mut g = game("crane", &["slate"], 6);
        type_word(&mut g, "slate");
        let obs = g.observation();
        assert_eq!(obs.rows[0].word, "slate");
        assert_eq!(
            obs.rows[0].evaluation.as_deref(),
            Some(
                &[
                    LetterEvaluation::Absent,
                    LetterEvaluation::Absent,
                    LetterEvaluation::Correct,
                    LetterEvaluation::Absent,
                    LetterEvaluation::Correct
                ][..]
            )
        );
        assert_eq!(g.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_unknown_word_is_left_unevaluated() {
        let mut g = game("crane", &[], 6);
        type_word(&mut g, "zzzzz");
        assert!(!g.observation().rows[0].is_evaluated());
        for _ in 0..5 {
            g.remove_letter();
        }
        assert_eq!(g.observation().rows[0].word, "");
        type_word(&mut g, "crane");
        assert!(g.observation().rows[0].is_evaluated());
        assert_eq!(g.status(), GameStatus::Win);
    }

    #[test]
    fn test_extra_letters_are_ignored() {
        let mut g = game("crane", &[], 6);
        type_word(&mut g, "cranes");
        assert_eq!(g.status(), GameStatus::Win);
    }

    #[test]
    fn test_filling_the_board_loses() {
        let mut g = game("crane", &["slate"], 2);
        type_word(&mut g, "slate");
        type_word(&mut g, "slate");
        assert_eq!(g.status(), GameStatus::Lose);
        assert!(g.observation().is_full());
    }
}
