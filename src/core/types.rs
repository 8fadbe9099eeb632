//! Result types produced by the extraction pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which kind of container the default export resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    Class,
    Object,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Class => write!(f, "class"),
            ContainerKind::Object => write!(f, "object"),
        }
    }
}

/// A public method of the exported container.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MethodEntry {
    /// Identifier of the method key. Empty when the key is computed or a literal.
    pub name: String,
    /// 1-based line of the method key.
    pub lineno: usize,
}

impl MethodEntry {
    pub fn new(name: impl Into<String>, lineno: usize) -> Self {
        Self {
            name: name.into(),
            lineno,
        }
    }
}

/// Methods of a default-exported class or object, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractorOutput {
    pub kind: ContainerKind,
    pub methods: Vec<MethodEntry>,
}
