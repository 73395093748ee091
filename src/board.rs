// Board types shared by the filter, the solver and every game surface.

/// Per-letter feedback for one position of an evaluated row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterEvaluation {
    /// Letter is in the solution at this exact position (green).
    Correct,
    /// Letter is in the solution at a different position (yellow).
    Present,
    /// Letter is not in the solution, or all of its occurrences are
    /// already accounted for by other positions (gray).
    Absent,
}

impl LetterEvaluation {
    /// Parses `G`/`Y`/`X` (case-insensitive).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Self::Correct),
            'Y' => Some(Self::Present),
            'X' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Parses a whole pattern such as `"XXYGX"`.
#[must_use]
pub fn parse_evaluations(pattern: &str) -> Option<Vec<LetterEvaluation>> {
    pattern.chars().map(LetterEvaluation::from_char).collect()
}

/// One board row: the letters typed so far and, once the game has scored
/// the row, its evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessRow {
    pub word: String,
    pub evaluation: Option<Vec<LetterEvaluation>>,
}

impl GuessRow {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn evaluated(word: &str, evaluation: Vec<LetterEvaluation>) -> Self {
        Self {
            word: word.to_string(),
            evaluation: Some(evaluation),
        }
    }

    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.evaluation.is_some()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.evaluation
            .as_ref()
            .is_some_and(|e| !e.is_empty() && e.iter().all(|&l| l == LetterEvaluation::Correct))
    }
}

/// Snapshot of the board as seen by the solver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameObservation {
    pub rows: Vec<GuessRow>,
}

impl GameObservation {
    #[must_use]
    pub fn new(rows: Vec<GuessRow>) -> Self {
        Self { rows }
    }

    /// Rows the game has already scored, in board order. Scoring stops at
    /// the first row without an evaluation.
    pub fn evaluated_rows(&self) -> impl Iterator<Item = &GuessRow> {
        self.rows.iter().take_while(|row| row.is_evaluated())
    }

    /// `true` when the last board slot already carries an evaluation.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.rows.last().is_some_and(GuessRow::is_evaluated)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Win,
    Lose,
}

/// Scores `guess` against `solution` the way the game does: exact matches
/// first, then misplaced letters while unmatched copies remain.
#[must_use]
pub fn evaluate_guess(guess: &str, solution: &str) -> Vec<LetterEvaluation> {
    let guess_chars: Vec<char> = guess.chars().collect();
    let mut solution_chars: Vec<Option<char>> = solution.chars().map(Some).collect();
    let mut evaluation = vec![LetterEvaluation::Absent; guess_chars.len()];

    for (i, &g) in guess_chars.iter().enumerate() {
        if solution_chars.get(i).copied().flatten() == Some(g) {
            evaluation[i] = LetterEvaluation::Correct;
            solution_chars[i] = None;
        }
    }

    for (i, &g) in guess_chars.iter().enumerate() {
        if evaluation[i] == LetterEvaluation::Correct {
            continue;
        }
        if let Some(pos) = solution_chars.iter().position(|&c| c == Some(g)) {
            evaluation[i] = LetterEvaluation::Present;
            solution_chars[pos] = None;
        }
    }

    evaluation
}
