use std::error::Error;
use std::process::ExitCode;
use wordle_autoplay::cli::{Cli, parse_cli};
use wordle_autoplay::clock::{Clock, SystemClock};
use wordle_autoplay::error::AutoplayError;
use wordle_autoplay::game_state::play_attempt;
use wordle_autoplay::local_game::LocalGame;
use wordle_autoplay::logging::init_logging;
use wordle_autoplay::outcome::{FileSink, OutcomeSink};
use wordle_autoplay::retry::{RetryPolicy, run_with_retries};
use wordle_autoplay::wordbank::{load_wordbank_from_file, to_ascii_word};

fn run(cli: &Cli) -> Result<(), AutoplayError> {
    let config = cli.engine_config();
    config.validate()?;

    let dictionary = load_wordbank_from_file(&cli.dictionary_path)?;
    let allowed = match &cli.allowed_path {
        Some(path) => load_wordbank_from_file(path)?,
        None => dictionary.clone(),
    };
    let solution = to_ascii_word(cli.solution.trim());
    config.check_solution(&solution)?;

    let mut clock = SystemClock;
    let outcome = run_with_retries(RetryPolicy::from(&config), &mut clock, |_, clock| {
        let mut game = LocalGame::new(&solution, allowed.iter().cloned(), config.max_guesses);
        play_attempt(&dictionary, &mut game, clock, &config)
    })?;

    let share_text = outcome.share_text(&cli.name, clock.today());
    log::info!("Shared text:\n{share_text}");
    let mut sink = FileSink::new(&cli.output_path);
    if let Err(e) = sink.publish(&outcome, &share_text) {
        log::error!("Could not save the shared text: {e}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            let mut source = e.source();
            while let Some(cause) = source {
                log::error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
