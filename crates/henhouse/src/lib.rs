//! henhouse: egg production records and farm content from the command line.
//!
//! The heart of the crate is the egg record pipeline in [`eggs`]: raw sheet
//! rows become typed [`EggRecord`]s, request parameters become a
//! [`FilterSpec`], and [`EggListView`] carries one page of matches with
//! counts and house facets.
//!
//! ```
//! use henhouse::eggs::{self, Params, RawRow};
//!
//! let rows: Vec<RawRow> = vec![
//!     vec![Some("Date".into()), Some("House".into()), Some("Total".into())],
//!     vec![Some("2024-01-01".into()), Some("A".into()), Some("400".into())],
//!     vec![Some("2024-01-01".into()), Some("B".into()), Some("n/a".into())],
//! ];
//!
//! let mut params = Params::new();
//! params.insert("filterHouse".into(), "B".into());
//!
//! let view = eggs::list(&rows, &params).unwrap();
//! assert_eq!(view.total_items, 1);
//! assert_eq!(view.records[0].sequence_number, 2);
//! assert_eq!(view.records[0].total_eggs, 0.0);
//! ```
//!
//! Around it sit the blog, FAQ and about collections in [`content`], backed
//! by a small JSON document store, with access checks in [`auth`].

pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod content;
pub mod context;
pub mod eggs;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod output;

pub use eggs::{EggListView, EggRecord, FilterSpec};
pub use error::{HenhouseError, Result};
