// Library interface for wordle-autoplay
// The binary and the integration tests both go through these modules.

pub mod board;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod filter;
pub mod game_state;
pub mod local_game;
pub mod logging;
pub mod outcome;
pub mod retry;
pub mod solver;
pub mod wordbank;

// Re-export the engine surface for easier testing
pub use board::{GameObservation, GameStatus, GuessRow, LetterEvaluation, evaluate_guess};
pub use config::EngineConfig;
pub use filter::is_valid_candidate;
pub use game_state::{GameSurface, play_attempt};
pub use outcome::GameOutcome;
pub use solver::{NextGuess, SolverState, next_guess, starting_index};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
