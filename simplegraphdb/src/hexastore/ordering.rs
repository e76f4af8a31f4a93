use std::fmt;

/// One of the six role orderings the hexastore indexes by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexOrdering {
    Spo,
    Sop,
    Pso,
    Pos,
    Osp,
    Ops,
}

impl IndexOrdering {
    /// All six orderings.
    pub const ALL: [Self; 6] = [
        Self::Spo,
        Self::Sop,
        Self::Pso,
        Self::Pos,
        Self::Osp,
        Self::Ops,
    ];

    /// The ordering that shares its leaves with this one.
    #[must_use]
    pub const fn partner(self) -> Self {
        match self {
            Self::Spo => Self::Pso,
            Self::Pso => Self::Spo,
            Self::Sop => Self::Osp,
            Self::Osp => Self::Sop,
            Self::Pos => Self::Ops,
            Self::Ops => Self::Pos,
        }
    }
}

impl fmt::Display for IndexOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spo => "SPO",
            Self::Sop => "SOP",
            Self::Pso => "PSO",
            Self::Pos => "POS",
            Self::Osp => "OSP",
            Self::Ops => "OPS",
        };
        f.write_str(name)
    }
}
