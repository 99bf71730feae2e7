use std::io;

use thiserror::Error;

/// Top-level failures surfaced to the operator.
///
/// The game engine itself is total; everything that can actually fail
/// lives at the terminal boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Raw mode or the alternate screen could not be initialized.
    #[error("failed to initialize terminal: {0}")]
    TerminalSetup(#[source] io::Error),

    /// I/O failure while the game loop was running.
    #[error("terminal i/o error: {0}")]
    Io(#[from] io::Error),
}
