use thiserror::Error;

/// Failures of the internal fallible steps (date handling).
///
/// The public `evaluate` entry point never surfaces these; it absorbs them
/// into the documented age fallback and flags the result instead.
#[derive(Debug, Error)]
pub enum AssessError {
    #[error("invalid calendar date: {0}")]
    InvalidDate(#[from] jiff::Error),

    #[error("visit date {visit} predates birth date {birth}")]
    VisitBeforeBirth {
        birth: jiff::civil::Date,
        visit: jiff::civil::Date,
    },
}
