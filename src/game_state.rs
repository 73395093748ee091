use crate::board::{GameObservation, GameStatus, GuessRow};
use crate::clock::Clock;
use crate::config::EngineConfig;
use crate::error::AttemptError;
use crate::outcome::GameOutcome;
use crate::solver::{SolverState, next_guess};

/// The game as the engine sees it: read the board, poll readiness, type.
/// Implementations wrap whatever actually hosts the game.
pub trait GameSurface {
    /// Used only for reporting; never consulted when choosing guesses.
    fn solution(&self) -> String;
    fn observation(&self) -> GameObservation;
    fn can_input(&self) -> bool;
    fn status(&self) -> GameStatus;
    fn add_letter(&mut self, letter: char);
    fn remove_letter(&mut self);
    /// Asks the game to score the current row.
    fn evaluate_row(&mut self);
}

/// Terminal states of an attempt that are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    Guessing,
    Won,
    Lost,
}

/// Polls `can_input` until it turns true or the readiness budget runs out.
///
/// # Errors
///
/// [`AttemptError::ReadinessTimeout`] when the surface never became ready.
pub fn wait_until_ready<S, C>(
    surface: &S,
    clock: &mut C,
    config: &EngineConfig,
) -> Result<(), AttemptError>
where
    S: GameSurface + ?Sized,
    C: Clock + ?Sized,
{
    log::trace!("Waiting for input readiness");
    for _ in 0..config.readiness_polls() {
        if surface.can_input() {
            return Ok(());
        }
        clock.sleep(config.poll_interval);
    }
    Err(AttemptError::ReadinessTimeout(config.readiness_timeout))
}

fn row_is_evaluated(observation: &GameObservation, row: usize) -> bool {
    observation.rows.get(row).is_some_and(GuessRow::is_evaluated)
}

/// Plays one full game against `surface` with a fresh solver state.
///
/// # Errors
///
/// [`AttemptError::ReadinessTimeout`] if the surface stops accepting input,
/// [`AttemptError::Stuck`] if guesses run out while the last row is still
/// unevaluated.
pub fn play_attempt<S, C>(
    dictionary: &[String],
    surface: &mut S,
    clock: &mut C,
    config: &EngineConfig,
) -> Result<GameOutcome, AttemptError>
where
    S: GameSurface + ?Sized,
    C: Clock + ?Sized,
{
    let solution = surface.solution();
    log::debug!("Solution is '{solution}'");

    let mut solver = SolverState::new(dictionary, clock.today());
    let mut row = 0;
    let mut state = AttemptState::Guessing;

    while state == AttemptState::Guessing {
        let observation = surface.observation();
        let guess = next_guess(&mut solver, &observation, config.word_length);
        let Some(word) = guess.into_word() else {
            break;
        };

        wait_until_ready(surface, clock, config)?;
        log::info!("Trying word '{word}' on row {}", row + 1);
        for letter in word.chars() {
            surface.add_letter(letter);
        }
        surface.evaluate_row();
        wait_until_ready(surface, clock, config)?;

        if !row_is_evaluated(&surface.observation(), row) {
            log::info!("'{word}' was rejected, deleting it");
            for _ in word.chars() {
                surface.remove_letter();
            }
            continue;
        }

        if surface.status() == GameStatus::Win {
            log::info!("Won with '{word}'");
            state = AttemptState::Won;
        } else {
            log::info!("Nope, wasn't '{word}'");
            row += 1;
        }
    }

    let observation = surface.observation();
    log::info!(
        "Attempt finished with {} words discarded",
        solver.discarded().len()
    );
    if state != AttemptState::Won {
        if !observation.is_full() {
            log::warn!("No legal guess left and the last row is empty");
            return Err(AttemptError::Stuck);
        }
        state = AttemptState::Lost;
        log::info!("Lost, the solution was '{solution}'");
    }

    Ok(GameOutcome {
        solution,
        won: state == AttemptState::Won,
        rows: observation.rows,
        discarded: solver.discarded().len(),
    })
}
