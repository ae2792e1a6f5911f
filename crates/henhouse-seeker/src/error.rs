//! Query construction errors.

use thiserror::Error;

use crate::op::Op;
use crate::value::Kind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeekerError {
    #[error("operator '{op}' cannot compare {kind} values")]
    Mismatch { op: Op, kind: Kind },

    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    /// An ordering such as `""` or `"-"`.
    #[error("'{0}' does not name a field to order by")]
    NoOrderField(String),
}

pub type Result<T, E = SeekerError> = std::result::Result<T, E>;
