//! Single-field predicates.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::error::{Result, SeekerError};
use crate::op::Op;
use crate::value::{Kind, Value};

/// The owned right-hand side of a clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    /// Stands in for an operand that could not be read, such as a date
    /// bound that does not parse. Nothing satisfies it.
    Never,
}

impl Operand {
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Operand::Text(_) => Some(Kind::Text),
            Operand::Number(_) => Some(Kind::Number),
            Operand::Date(_) => Some(Kind::Date),
            Operand::Never => None,
        }
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Operand::Text(text.to_string())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Operand::Text(text)
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Number(n)
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Number(n as f64)
    }
}

impl From<usize> for Operand {
    fn from(n: usize) -> Self {
        Operand::Number(n as f64)
    }
}

impl From<NaiveDate> for Operand {
    fn from(day: NaiveDate) -> Self {
        Operand::Date(day)
    }
}

/// `None` gives [`Operand::Never`].
impl From<Option<NaiveDate>> for Operand {
    fn from(day: Option<NaiveDate>) -> Self {
        day.map_or(Operand::Never, Operand::Date)
    }
}

/// `field op operand`.
///
/// ```
/// use henhouse_seeker::{Clause, Op, Value};
///
/// let clause = Clause::new("house", Op::ContainsFold, "barn");
/// assert!(clause.test(&Value::Text("North Barn")));
/// assert!(!clause.test(&Value::Missing));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub field: String,
    pub op: Op,
    pub operand: Operand,
}

impl Clause {
    /// Builds a clause as given. One whose operator does not fit its
    /// operand is legal and matches nothing.
    pub fn new(field: impl Into<String>, op: Op, operand: impl Into<Operand>) -> Self {
        Clause {
            field: field.into(),
            op,
            operand: operand.into(),
        }
    }

    /// Builds a clause, rejecting an operator that cannot apply to the
    /// operand. [`Operand::Never`] takes any operator.
    pub fn checked(field: impl Into<String>, op: Op, operand: impl Into<Operand>) -> Result<Self> {
        let clause = Clause::new(field, op, operand);
        match clause.operand.kind() {
            Some(kind) if !op.accepts(kind) => Err(SeekerError::Mismatch { op, kind }),
            _ => Ok(clause),
        }
    }

    /// Tests a field value. A missing value or one of another kind never
    /// matches, not even with `Ne`.
    pub fn test(&self, value: &Value<'_>) -> bool {
        match (&self.operand, value) {
            (Operand::Text(needle), Value::Text(text)) => match self.op {
                Op::Contains => text.contains(needle.as_str()),
                Op::ContainsFold => text.to_lowercase().contains(&needle.to_lowercase()),
                _ => self.ordered(Kind::Text, Some((*text).cmp(needle.as_str()))),
            },
            (Operand::Number(n), Value::Number(x)) => self.ordered(Kind::Number, x.partial_cmp(n)),
            (Operand::Date(day), Value::Date(x)) => self.ordered(Kind::Date, Some(x.cmp(day))),
            _ => false,
        }
    }

    fn ordered(&self, kind: Kind, ordering: Option<Ordering>) -> bool {
        self.op.accepts(kind) && ordering.is_some_and(|o| self.op.holds(o))
    }
}
