use std::ops::{Add, AddAssign, Index};

use count_loops_shared_kernel::LoopCount;
use serde::{Deserialize, Serialize};

use crate::model::LoopKind;

/// Loop counts for a single translation unit, one slot per [`LoopKind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopTally {
    #[serde(rename = "numwhile")]
    pub while_loops: LoopCount,
    #[serde(rename = "numdowhile")]
    pub do_while_loops: LoopCount,
    #[serde(rename = "numfor")]
    pub for_loops: LoopCount,
}

impl LoopTally {
    pub fn new(while_loops: usize, do_while_loops: usize, for_loops: usize) -> Self {
        Self {
            while_loops: while_loops.into(),
            do_while_loops: do_while_loops.into(),
            for_loops: for_loops.into(),
        }
    }

    pub fn set(&mut self, kind: LoopKind, count: LoopCount) {
        *self.slot_mut(kind) = count;
    }

    pub fn total(&self) -> LoopCount {
        self.while_loops + self.do_while_loops + self.for_loops
    }

    fn slot_mut(&mut self, kind: LoopKind) -> &mut LoopCount {
        match kind {
            LoopKind::While => &mut self.while_loops,
            LoopKind::DoWhile => &mut self.do_while_loops,
            LoopKind::For => &mut self.for_loops,
        }
    }
}

impl Index<LoopKind> for LoopTally {
    type Output = LoopCount;

    fn index(&self, kind: LoopKind) -> &Self::Output {
        match kind {
            LoopKind::While => &self.while_loops,
            LoopKind::DoWhile => &self.do_while_loops,
            LoopKind::For => &self.for_loops,
        }
    }
}

impl Add for LoopTally {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for LoopTally {
    fn add_assign(&mut self, rhs: Self) {
        for kind in LoopKind::ALL {
            *self.slot_mut(kind) += rhs[kind];
        }
    }
}
