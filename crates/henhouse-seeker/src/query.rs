//! Queries: two clause groups plus sort keys.

use crate::clause::{Clause, Operand};
use crate::error::Result;
use crate::op::Op;
use crate::ordering::{compare_items, OrderBy};
use crate::value::Value;

/// Filters and orders a slice of records.
///
/// An item matches when every clause of the AND group holds and, if the
/// OR group is non-empty, at least one of its clauses holds:
///
/// ```text
/// all(and) && (or.is_empty() || any(or))
/// ```
///
/// Matches keep their input order unless sort keys are given. Sorting is
/// stable.
///
/// ```
/// use chrono::NaiveDate;
/// use henhouse_seeker::{OrderBy, Query};
///
/// let query = Query::new()
///     .and_eq("house", "North")
///     .and_gte("day", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .or_contains_fold("recordedBy", "ana")
///     .or_contains_fold("recordedBy", "joe")
///     .order_by(OrderBy::desc("totalEggs"));
/// assert_eq!(query.and_clauses().len(), 2);
/// assert_eq!(query.or_clauses().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    and_group: Vec<Clause>,
    or_group: Vec<Clause>,
    sort_keys: Vec<OrderBy>,
}

impl Query {
    /// An empty query, matching everything.
    pub fn new() -> Self {
        Query::default()
    }

    pub fn and(mut self, field: &str, op: Op, operand: impl Into<Operand>) -> Self {
        self.and_group.push(Clause::new(field, op, operand));
        self
    }

    pub fn or(mut self, field: &str, op: Op, operand: impl Into<Operand>) -> Self {
        self.or_group.push(Clause::new(field, op, operand));
        self
    }

    /// [`Query::and`] with the operator checked against the operand.
    pub fn try_and(mut self, field: &str, op: Op, operand: impl Into<Operand>) -> Result<Self> {
        self.and_group.push(Clause::checked(field, op, operand)?);
        Ok(self)
    }

    /// [`Query::or`] with the operator checked against the operand.
    pub fn try_or(mut self, field: &str, op: Op, operand: impl Into<Operand>) -> Result<Self> {
        self.or_group.push(Clause::checked(field, op, operand)?);
        Ok(self)
    }

    pub fn and_eq(self, field: &str, operand: impl Into<Operand>) -> Self {
        self.and(field, Op::Eq, operand)
    }

    pub fn and_ne(self, field: &str, operand: impl Into<Operand>) -> Self {
        self.and(field, Op::Ne, operand)
    }

    pub fn and_gte(self, field: &str, operand: impl Into<Operand>) -> Self {
        self.and(field, Op::Gte, operand)
    }

    pub fn and_lte(self, field: &str, operand: impl Into<Operand>) -> Self {
        self.and(field, Op::Lte, operand)
    }

    /// Case-insensitive substring match.
    pub fn and_contains_fold(self, field: &str, needle: &str) -> Self {
        self.and(field, Op::ContainsFold, needle)
    }

    pub fn or_eq(self, field: &str, operand: impl Into<Operand>) -> Self {
        self.or(field, Op::Eq, operand)
    }

    /// Case-insensitive substring match.
    pub fn or_contains_fold(self, field: &str, needle: &str) -> Self {
        self.or(field, Op::ContainsFold, needle)
    }

    /// Appends a sort key. Earlier keys take precedence.
    pub fn order_by(mut self, key: OrderBy) -> Self {
        self.sort_keys.push(key);
        self
    }

    pub fn and_clauses(&self) -> &[Clause] {
        &self.and_group
    }

    pub fn or_clauses(&self) -> &[Clause] {
        &self.or_group
    }

    pub fn sort_keys(&self) -> &[OrderBy] {
        &self.sort_keys
    }

    /// True when no clause constrains the result. Sort keys don't count.
    pub fn is_empty(&self) -> bool {
        self.and_group.is_empty() && self.or_group.is_empty()
    }

    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'v> F: Fn(&'v T, &str) -> Value<'v>,
    {
        let holds = |clause: &Clause| clause.test(&accessor(item, &clause.field));
        self.and_group.iter().all(holds)
            && (self.or_group.is_empty() || self.or_group.iter().any(holds))
    }

    /// Matching items, by reference.
    pub fn filter<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'v> F: Fn(&'v T, &str) -> Value<'v>,
    {
        let mut hits: Vec<&'a T> = items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .collect();
        if !self.sort_keys.is_empty() {
            hits.sort_by(|a, b| compare_items(*a, *b, &self.sort_keys, &accessor));
        }
        hits
    }

    pub fn filter_cloned<T, F>(&self, items: &[T], accessor: F) -> Vec<T>
    where
        T: Clone,
        for<'v> F: Fn(&'v T, &str) -> Value<'v>,
    {
        self.filter(items, accessor).into_iter().cloned().collect()
    }

    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'v> F: Fn(&'v T, &str) -> Value<'v>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .count()
    }

    pub fn any<T, F>(&self, items: &[T], accessor: F) -> bool
    where
        for<'v> F: Fn(&'v T, &str) -> Value<'v>,
    {
        items.iter().any(|item| self.matches(item, &accessor))
    }

    /// The first match in input order. Sort keys are ignored.
    pub fn find<'a, T, F>(&self, items: &'a [T], accessor: F) -> Option<&'a T>
    where
        for<'v> F: Fn(&'v T, &str) -> Value<'v>,
    {
        items.iter().find(|item| self.matches(*item, &accessor))
    }
}
