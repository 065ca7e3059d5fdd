// crates/ports/src/frontend.rs
use std::path::Path;

use count_loops_domain::LoopVisitor;
use count_loops_shared_kernel::Result;

/// A parsed translation unit that can be walked by a [`LoopVisitor`].
pub trait SyntaxTree: Send {
    /// Reports every loop node, in document order, to `visitor`.
    fn accept(&self, visitor: &mut dyn LoopVisitor);
}

/// Port for turning a source file into a syntax tree.
///
/// Failures carry an `InfrastructureError` describing whether reading,
/// preprocessing or parsing went wrong.
pub trait CFrontend: Send + Sync {
    fn parse(&self, path: &Path) -> Result<Box<dyn SyntaxTree>>;
}
