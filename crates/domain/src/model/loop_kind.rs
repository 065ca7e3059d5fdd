use std::fmt;

/// The looping constructs that are tallied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LoopKind {
    While,
    DoWhile,
    For,
}

impl LoopKind {
    /// All kinds, in report column order.
    pub const ALL: [LoopKind; 3] = [LoopKind::While, LoopKind::DoWhile, LoopKind::For];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::While => "while",
            Self::DoWhile => "do-while",
            Self::For => "for",
        }
    }

    /// Position of this kind inside [`LoopKind::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::While => 0,
            Self::DoWhile => 1,
            Self::For => 2,
        }
    }
}

impl fmt::Display for LoopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
