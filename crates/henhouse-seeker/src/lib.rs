//! Clause-based filtering and ordering for in-memory record collections.
//!
//! A [`Query`] holds an AND group and an OR group of [`Clause`]s and a list
//! of sort keys. Records are read through an accessor,
//! `Fn(&T, &str) -> Value`, usually [`Seekable::accessor`].
//!
//! ```
//! use henhouse_seeker::{OrderBy, Query, Seekable, Value};
//!
//! struct Tally {
//!     house: String,
//!     eggs: f64,
//! }
//!
//! impl Seekable for Tally {
//!     fn field_value(&self, name: &str) -> Value<'_> {
//!         match name {
//!             "house" => Value::Text(&self.house),
//!             "eggs" => Value::Number(self.eggs),
//!             _ => Value::Missing,
//!         }
//!     }
//! }
//!
//! let tallies = vec![
//!     Tally { house: "North Barn".into(), eggs: 410.0 },
//!     Tally { house: "South Barn".into(), eggs: 380.0 },
//!     Tally { house: "Annex".into(), eggs: 95.0 },
//! ];
//!
//! let barns = Query::new()
//!     .and_contains_fold("house", "barn")
//!     .order_by(OrderBy::asc("eggs"))
//!     .filter(&tallies, Tally::accessor);
//! assert_eq!(barns.len(), 2);
//! assert_eq!(barns[0].house, "South Barn");
//! ```
//!
//! A clause never matches a [`Value::Missing`] field or a field of another
//! kind than its operand. Missing values sort last in either direction.

mod clause;
mod error;
mod op;
mod ordering;
mod query;
mod traits;
mod value;

pub use clause::{Clause, Operand};
pub use error::{Result, SeekerError};
pub use op::Op;
pub use ordering::{Dir, OrderBy};
pub use query::Query;
pub use traits::Seekable;
pub use value::{parse_date, Kind, Value};
