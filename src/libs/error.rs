//! Reporting engine error taxonomy.
//!
//! Every failure in the report pipeline is fatal to the invocation: a gap
//! computation with one bad endpoint is meaningless, so there is no partial
//! output and nothing is retried. Errors propagate as `Result` values up to
//! the command boundary, which decides how to surface them.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReportError {
    /// A stored or user-supplied timestamp failed to parse as a valid instant.
    #[error("unable to parse date/time '{0}'")]
    TimeParse(String),

    /// The selected window contains no entries; consolidation never runs.
    #[error("no entries found in the requested reporting window")]
    EmptyWindow,

    /// The configured week-start day name is not a day of the week.
    #[error("'{0}' is an invalid day of week.  Please correct your configuration.")]
    InvalidWeekday(String),
}
