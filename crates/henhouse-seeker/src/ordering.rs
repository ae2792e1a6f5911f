//! Sort keys.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SeekerError};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    #[default]
    Asc,
    Desc,
}

/// One sort key: a field and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub dir: Dir,
}

impl OrderBy {
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Desc)
    }

    /// Reads `field`, `+field` (ascending) or `-field` (descending).
    ///
    /// ```
    /// use henhouse_seeker::{Dir, OrderBy};
    ///
    /// let order = OrderBy::parse("-totalEggs").unwrap();
    /// assert_eq!(order, OrderBy::new("totalEggs", Dir::Desc));
    /// assert!(OrderBy::parse("-").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        let (dir, field) = if let Some(rest) = trimmed.strip_prefix('-') {
            (Dir::Desc, rest)
        } else {
            (Dir::Asc, trimmed.strip_prefix('+').unwrap_or(trimmed))
        };
        match field.trim() {
            "" => Err(SeekerError::NoOrderField(spec.to_string())),
            field => Ok(OrderBy::new(field, dir)),
        }
    }

    /// Orders two values of this key's field.
    ///
    /// Missing values go last whichever the direction. Values that cannot
    /// be compared (mixed kinds, NaN) tie.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        match (a.is_missing(), b.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ordering = a.compare(b).unwrap_or(Ordering::Equal);
                match self.dir {
                    Dir::Asc => ordering,
                    Dir::Desc => ordering.reverse(),
                }
            }
        }
    }
}

impl FromStr for OrderBy {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        OrderBy::parse(s)
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dir {
            Dir::Asc => write!(f, "{}", self.field),
            Dir::Desc => write!(f, "-{}", self.field),
        }
    }
}

/// Compares two items key by key; later keys break ties of earlier ones.
pub(crate) fn compare_items<T, F>(a: &T, b: &T, keys: &[OrderBy], accessor: &F) -> Ordering
where
    for<'v> F: Fn(&'v T, &str) -> Value<'v>,
{
    keys.iter()
        .map(|key| key.compare(&accessor(a, &key.field), &accessor(b, &key.field)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
