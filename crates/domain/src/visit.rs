use std::path::Path;

use crate::model::LoopKind;

/// Where a loop was found, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopSite<'a> {
    /// File the loop was written in; a header when it came from an include.
    /// `None` when the front end cannot tell.
    pub file: Option<&'a Path>,
    /// 1-based line within `file`.
    pub line: usize,
    /// Source text of the controlling expression, if the loop has one.
    pub condition: Option<&'a str>,
}

/// Receives every loop node a syntax tree contains, in document order.
pub trait LoopVisitor {
    fn visit_loop(&mut self, kind: LoopKind, site: LoopSite<'_>);
}

impl<V: LoopVisitor + ?Sized> LoopVisitor for &mut V {
    fn visit_loop(&mut self, kind: LoopKind, site: LoopSite<'_>) {
        (**self).visit_loop(kind, site);
    }
}
