use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog must hold exactly {expected} roles, found {found}")]
    Cardinality { expected: usize, found: usize },
    #[error("duplicate role id '{0}'")]
    DuplicateId(String),
    #[error("role at position {0} has an empty id")]
    EmptyId(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("row sizes {sizes:?} add up to {total}, but the catalog holds {roles} roles")]
    RowSizeMismatch {
        sizes: Vec<usize>,
        total: usize,
        roles: usize,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("breakpoint must be at least {min} columns, got {got}")]
    BreakpointTooSmall { min: u16, got: u16 },
    #[error("tick interval must be within {min}..={max} ms, got {got}")]
    TickOutOfRange { min: u64, max: u64, got: u64 },
}
