use count_loops_shared_kernel::LoopCount;
use log::trace;

use crate::{
    model::{LoopKind, LoopTally},
    visit::{LoopSite, LoopVisitor},
};

/// Counts the loops of one [`LoopKind`], ignoring every other kind.
///
/// No reset; build a fresh counter for each file.
#[derive(Debug, Clone)]
pub struct LoopCounter {
    target: LoopKind,
    count: LoopCount,
}

impl LoopCounter {
    pub fn new(target: LoopKind) -> Self {
        Self { target, count: LoopCount::zero() }
    }

    pub fn target(&self) -> LoopKind {
        self.target
    }

    pub fn count(&self) -> LoopCount {
        self.count
    }
}

impl LoopVisitor for LoopCounter {
    fn visit_loop(&mut self, kind: LoopKind, site: LoopSite<'_>) {
        if kind != self.target {
            return;
        }
        match site.file {
            Some(file) => trace!("{kind} loop at {}:{}: {}", file.display(), site.line, site.condition.unwrap_or("<none>")),
            None => trace!("{kind} loop at line {}: {}", site.line, site.condition.unwrap_or("<none>")),
        }
        self.count.bump();
    }
}

/// One counter per loop kind, driven together over a single tree.
#[derive(Debug, Clone)]
pub struct LoopCounterSet {
    counters: [LoopCounter; 3],
}

impl LoopCounterSet {
    pub fn new() -> Self {
        Self { counters: LoopKind::ALL.map(LoopCounter::new) }
    }

    pub fn counter(&self, kind: LoopKind) -> &LoopCounter {
        &self.counters[kind.index()]
    }

    pub fn tally(&self) -> LoopTally {
        let mut tally = LoopTally::default();
        for counter in &self.counters {
            tally.set(counter.target(), counter.count());
        }
        tally
    }
}

impl Default for LoopCounterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopVisitor for LoopCounterSet {
    fn visit_loop(&mut self, kind: LoopKind, site: LoopSite<'_>) {
        for counter in &mut self.counters {
            counter.visit_loop(kind, site);
        }
    }
}
