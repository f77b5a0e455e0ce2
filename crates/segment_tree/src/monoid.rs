//! Associative combine operators with their identity elements.

use std::fmt::Debug;

/// A monoid over `Value`.
///
/// `combine` must be associative and `identity()` must be neutral on both sides.
/// The store relies on this to answer disjoint segments with `identity()`.
pub trait Monoid {
    type Value: Copy + Debug;

    fn identity() -> Self::Value;
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value;
}

/// Sum over `i64`.
#[derive(Clone, Copy, Debug)]
pub enum Sum {}

impl Monoid for Sum {
    type Value = i64;

    #[inline(always)]
    fn identity() -> Self::Value {
        0
    }

    #[inline(always)]
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value {
        left.wrapping_add(*right)
    }
}

/// Minimum over `i64`; `i64::MAX` stands in for +∞.
#[derive(Clone, Copy, Debug)]
pub enum Min {}

impl Monoid for Min {
    type Value = i64;

    #[inline(always)]
    fn identity() -> Self::Value {
        i64::MAX
    }

    #[inline(always)]
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value {
        *left.min(right)
    }
}

/// Maximum over `i64`; `i64::MIN` stands in for −∞.
#[derive(Clone, Copy, Debug)]
pub enum Max {}

impl Monoid for Max {
    type Value = i64;

    #[inline(always)]
    fn identity() -> Self::Value {
        i64::MIN
    }

    #[inline(always)]
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value {
        *left.max(right)
    }
}
