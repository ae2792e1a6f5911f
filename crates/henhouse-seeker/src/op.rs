//! Comparison operators.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SeekerError;
use crate::value::Kind;

/// How a clause compares a field against its operand.
///
/// | Operator | Symbol | Text | Number | Date |
/// |----------|--------|------|--------|------|
/// | `Eq`, `Ne` | `=`, `!=` | yes | yes | yes |
/// | `Contains`, `ContainsFold` | `~`, `~*` | yes | | |
/// | `Gt`, `Gte`, `Lt`, `Lte` | `>`, `>=`, `<`, `<=` | | yes | yes |
/// | `Before`, `After` | `before`, `after` | | | yes |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Eq,
    Ne,
    Contains,
    /// Substring match ignoring case.
    ContainsFold,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Same as `Lt`, for dates.
    Before,
    /// Same as `Gt`, for dates.
    After,
}

const ALL: [Op; 10] = [
    Op::Eq,
    Op::Ne,
    Op::Contains,
    Op::ContainsFold,
    Op::Gt,
    Op::Gte,
    Op::Lt,
    Op::Lte,
    Op::Before,
    Op::After,
];

impl Op {
    /// Whether the operator means anything for fields of `kind`.
    pub fn accepts(self, kind: Kind) -> bool {
        match self {
            Op::Eq | Op::Ne => true,
            Op::Contains | Op::ContainsFold => kind == Kind::Text,
            Op::Gt | Op::Gte | Op::Lt | Op::Lte => kind != Kind::Text,
            Op::Before | Op::After => kind == Kind::Date,
        }
    }

    /// Decides the comparison given `field.cmp(operand)`. Substring
    /// operators never hold on an ordering.
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering.is_eq(),
            Op::Ne => ordering.is_ne(),
            Op::Gt | Op::After => ordering.is_gt(),
            Op::Gte => ordering.is_ge(),
            Op::Lt | Op::Before => ordering.is_lt(),
            Op::Lte => ordering.is_le(),
            Op::Contains | Op::ContainsFold => false,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Contains => "~",
            Op::ContainsFold => "~*",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Before => "before",
            Op::After => "after",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Op {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL.into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| SeekerError::UnknownOperator(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_kinds() {
        assert!(Op::Eq.accepts(Kind::Text));
        assert!(Op::Ne.accepts(Kind::Date));
        assert!(Op::ContainsFold.accepts(Kind::Text));
        assert!(!Op::Contains.accepts(Kind::Number));
        assert!(Op::Gte.accepts(Kind::Number));
        assert!(!Op::Gt.accepts(Kind::Text));
        assert!(Op::Before.accepts(Kind::Date));
        assert!(!Op::After.accepts(Kind::Number));
    }

    #[test]
    fn holds_on_orderings() {
        use Ordering::*;
        assert!(Op::Eq.holds(Equal) && !Op::Eq.holds(Less));
        assert!(Op::Ne.holds(Greater) && !Op::Ne.holds(Equal));
        assert!(Op::Gte.holds(Equal) && Op::Gte.holds(Greater) && !Op::Gte.holds(Less));
        assert!(Op::Lte.holds(Equal) && Op::Lte.holds(Less) && !Op::Lte.holds(Greater));
        assert!(Op::Before.holds(Less) && !Op::Before.holds(Equal));
        assert!(Op::After.holds(Greater) && !Op::After.holds(Equal));
        assert!(!Op::Contains.holds(Equal));
    }

    #[test]
    fn symbols_round_trip() {
        for op in ALL {
            assert_eq!(op.to_string().parse::<Op>(), Ok(op));
        }
        assert_eq!(" >= ".parse::<Op>(), Ok(Op::Gte));
        assert_eq!(
            "like".parse::<Op>(),
            Err(SeekerError::UnknownOperator("like".to_string()))
        );
    }
}
