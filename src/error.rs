use std::collections::TryReserveError;
use std::io;

/// Errors raised around the sort engine. The engine itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("required count not specified!")]
    MissingCount,

    #[error("failed to allocate memory for {count} integers")]
    Alloc {
        count: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("unknown pivot policy `{0}`, expected `median3` or `random`")]
    UnknownPivotPolicy(String),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
