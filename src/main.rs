use std::io;
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
use grid_snake::config::{BOARD_SIZE, FRAME_INTERVAL_MS, THEMES, TICK_INTERVAL_MS};
use grid_snake::error::AppError;
use grid_snake::game::{DeathReason, GamePhase, GameState};
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::renderer;
use grid_snake::terminal_runtime::TerminalSession;

#[derive(Debug, Parser)]
#[command(version, about = "Retro grid-based terminal Snake")]
struct Cli {
    /// Seed the fruit placement RNG for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

/// Outcome carried out of the interactive loop for the exit summary.
struct GameSummary {
    score: u32,
    death_reason: Option<DeathReason>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    install_panic_hook();

    let summary = run(&cli)?;
    match summary.death_reason {
        Some(DeathReason::WallCollision) => {
            println!("Game over: hit the wall. Final score: {}", summary.score);
        }
        Some(DeathReason::SelfCollision) => {
            println!("Game over: bit yourself. Final score: {}", summary.score);
        }
        None => println!("Final score: {}", summary.score),
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<GameSummary, AppError> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(BOARD_SIZE, seed),
        None => GameState::new(BOARD_SIZE),
    };

    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();
    let mut theme_index = 0;

    loop {
        let theme = &THEMES[theme_index];
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, theme))?;

        if let Some(event) = input.poll_input()? {
            match event {
                GameInput::Quit => break,
                GameInput::Begin => state.begin(),
                GameInput::Direction(direction) => state.request_direction(direction),
                GameInput::CycleTheme => theme_index = (theme_index + 1) % THEMES.len(),
            }
        }

        if last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }

        if state.phase == GamePhase::Ended {
            // Final frame with the game-over banner before teardown.
            session
                .terminal_mut()
                .draw(|frame| renderer::render(frame, &state, theme))?;
            break;
        }

        thread::sleep(Duration::from_millis(FRAME_INTERVAL_MS));
    }

    Ok(GameSummary {
        score: state.score,
        death_reason: state.death_reason,
    })
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
