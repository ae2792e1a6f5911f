//! Records with named, queryable fields.

use crate::value::Value;

/// A record type that exposes its fields by name.
///
/// Unknown names give [`Value::Missing`], which no clause matches.
///
/// ```
/// use henhouse_seeker::{Query, Seekable, Value};
///
/// struct Tally {
///     house: String,
///     eggs: u32,
/// }
///
/// impl Seekable for Tally {
///     fn field_value(&self, name: &str) -> Value<'_> {
///         match name {
///             "house" => Value::Text(&self.house),
///             "eggs" => Value::Number(f64::from(self.eggs)),
///             _ => Value::Missing,
///         }
///     }
/// }
///
/// let tallies = vec![
///     Tally { house: "North".into(), eggs: 410 },
///     Tally { house: "South".into(), eggs: 90 },
/// ];
///
/// let busy = Query::new().and_gte("eggs", 100.0).filter(&tallies, Tally::accessor);
/// assert_eq!(busy.len(), 1);
/// assert_eq!(busy[0].house, "North");
/// ```
pub trait Seekable {
    fn field_value(&self, name: &str) -> Value<'_>;

    /// The accessor function [`Query`](crate::Query) methods take.
    fn accessor<'a>(item: &'a Self, name: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(name)
    }
}
