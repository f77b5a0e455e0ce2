use std::fmt;
use std::ops::RangeBounds;
use std::str::FromStr;

use crate::error::{ParseOperationError, RangeError};
use crate::monoid::{self, Monoid};
use crate::store::RangeQueryStore;

/// Operator chosen at runtime, e.g. from a configuration string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Sum,
    Min,
    Max,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Self::Sum, Self::Min, Self::Max];

    pub fn label(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    pub fn identity(self) -> i64 {
        match self {
            Self::Sum => monoid::Sum::identity(),
            Self::Min => monoid::Min::identity(),
            Self::Max => monoid::Max::identity(),
        }
    }

    pub fn combine(self, left: i64, right: i64) -> i64 {
        match self {
            Self::Sum => monoid::Sum::combine(&left, &right),
            Self::Min => monoid::Min::combine(&left, &right),
            Self::Max => monoid::Max::combine(&left, &right),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseOperationError(s.to_owned()))
    }
}

/// A store whose operator is picked at runtime.
///
/// Dispatch happens once per call; the recursion underneath is monomorphic.
#[derive(Clone, Debug)]
pub enum OperationStore {
    Sum(RangeQueryStore<monoid::Sum>),
    Min(RangeQueryStore<monoid::Min>),
    Max(RangeQueryStore<monoid::Max>),
}

macro_rules! dispatch {
    ($self:expr, $store:ident => $body:expr) => {
        match $self {
            OperationStore::Sum($store) => $body,
            OperationStore::Min($store) => $body,
            OperationStore::Max($store) => $body,
        }
    };
}

impl OperationStore {
    pub fn new(values: &[i64], operation: Operation) -> Result<Self, RangeError> {
        Ok(match operation {
            Operation::Sum => Self::Sum(RangeQueryStore::<monoid::Sum>::new(values)?),
            Operation::Min => Self::Min(RangeQueryStore::<monoid::Min>::new(values)?),
            Operation::Max => Self::Max(RangeQueryStore::<monoid::Max>::new(values)?),
        })
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Sum(_) => Operation::Sum,
            Self::Min(_) => Operation::Min,
            Self::Max(_) => Operation::Max,
        }
    }

    pub fn len(&self) -> usize {
        dispatch!(self, store => store.len())
    }

    pub fn is_empty(&self) -> bool {
        dispatch!(self, store => store.is_empty())
    }

    pub fn all(&self) -> i64 {
        dispatch!(self, store => store.all())
    }

    pub fn get(&self, index: usize) -> Result<i64, RangeError> {
        dispatch!(self, store => store.get(index))
    }

    pub fn query(&self, lo: usize, hi: usize) -> Result<i64, RangeError> {
        dispatch!(self, store => store.query(lo, hi))
    }

    pub fn fold<R: RangeBounds<usize>>(&self, range: R) -> Result<i64, RangeError> {
        dispatch!(self, store => store.fold(range))
    }

    pub fn update(&mut self, index: usize, value: i64) -> Result<(), RangeError> {
        dispatch!(self, store => store.update(index, value))
    }
}
