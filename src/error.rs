use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("value {0} appears more than once on the monument")]
    DuplicateValue(i64),

    #[error("no coin is worth {0}")]
    UnknownCoin(i64),
}
