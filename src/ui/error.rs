use std::io;
use thiserror::Error;

/// Ways a selection can fail.
///
/// Cancelling is not one of them: it comes back as
/// [`Outcome::Cancelled`](crate::ui::app::Outcome::Cancelled).
#[derive(Debug, Error)]
pub enum SelectError {
    /// Nothing to choose from. Raised before the terminal is touched.
    #[error("no {noun} available")]
    Empty { noun: String },

    /// Raw mode or the alternate screen could not be set up.
    #[error("failed to initialize terminal")]
    TerminalInit(#[source] io::Error),

    /// Reading input or drawing a frame failed mid-session.
    #[error("terminal I/O failed")]
    Terminal(#[source] io::Error),
}
