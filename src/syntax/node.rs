//! The normalized schema tree.
//!
//! A parsed document becomes a tree of [`SchemaNode`]s. Nodes own their
//! children exclusively, so the tree is acyclic by construction and can
//! be serialized directly.

use serde::Serialize;
use smol_str::SmolStr;

/// Statement kind of a schema node, tagged with the YANG keyword spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Module,
    Submodule,
    Container,
    List,
    Leaf,
    LeafList,
    Rpc,
    Notification,
    Choice,
    Grouping,
    Unknown,
}

impl NodeKind {
    /// Map a YANG statement keyword to a node kind.
    ///
    /// Returns `None` for keywords that are not schema nodes (attributes
    /// like `description`, metadata like `import`).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "module" => Some(Self::Module),
            "submodule" => Some(Self::Submodule),
            "container" => Some(Self::Container),
            "list" => Some(Self::List),
            "leaf" => Some(Self::Leaf),
            "leaf-list" => Some(Self::LeafList),
            "rpc" => Some(Self::Rpc),
            "notification" => Some(Self::Notification),
            "choice" => Some(Self::Choice),
            "grouping" => Some(Self::Grouping),
            _ => None,
        }
    }

    /// Keyword spelling, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Submodule => "submodule",
            Self::Container => "container",
            Self::List => "list",
            Self::Leaf => "leaf",
            Self::LeafList => "leaf-list",
            Self::Rpc => "rpc",
            Self::Notification => "notification",
            Self::Choice => "choice",
            Self::Grouping => "grouping",
            Self::Unknown => "unknown",
        }
    }
}

/// Per-node attributes pulled from type constraints and substatements.
///
/// The key set is fixed, so this is a closed struct of options rather
/// than an open map; `None` fields are omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NodeProperties {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl NodeProperties {
    pub fn is_empty(&self) -> bool {
        self.type_name.is_none()
            && self.range.is_none()
            && self.length.is_none()
            && self.pattern.is_none()
            && self.default.is_none()
            && self.units.is_none()
            && self.status.is_none()
    }
}

/// One node of the normalized schema tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub name: SmolStr,
    /// 1-based source line of the declaring statement, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub mandatory: bool,
    /// Whether the node is writable (YANG `config`, defaults to true).
    pub config: bool,
    #[serde(skip_serializing_if = "NodeProperties::is_empty")]
    pub properties: NodeProperties,
    pub children: Vec<SchemaNode>,
}

impl SchemaNode {
    pub fn new(kind: NodeKind, name: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            name: name.into(),
            line: None,
            description: None,
            mandatory: false,
            config: true,
            properties: NodeProperties::default(),
            children: Vec::new(),
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Find a direct child by name.
    pub fn find_child(&self, name: &str) -> Option<&SchemaNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Total node count of this subtree, including self.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(SchemaNode::subtree_size).sum::<usize>()
    }
}
