// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Number of loop constructs observed. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoopCount(usize);

impl LoopCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Increments by one.
    #[inline]
    pub fn bump(&mut self) {
        self.0 += 1;
    }
}

impl Default for LoopCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for LoopCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<usize> for LoopCount {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign for LoopCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl AddAssign<usize> for LoopCount {
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl Sum for LoopCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a LoopCount> for LoopCount {
    fn sum<I: Iterator<Item = &'a LoopCount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<usize> for LoopCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<LoopCount> for usize {
    fn from(value: LoopCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for LoopCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

mod display {
    use std::fmt;

    use super::LoopCount;

    impl fmt::Display for LoopCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
