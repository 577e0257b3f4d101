//! Hardware description tree nodes.
//!
//! Nodes carry a name, an ordered list of byte-array properties, and an
//! ordered list of children. Properties follow device-tree conventions:
//! integer cells are stored big-endian, and the `compatible` property is a
//! NUL-separated list of strings.

/// A single named property with an opaque byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name (e.g. `"reg"`, `"compatible"`).
    pub name: String,
    /// Raw property bytes.
    pub value: Vec<u8>,
}

/// A node in the hardware description tree.
///
/// Children keep their insertion order; sibling iteration is therefore
/// deterministic and repeatable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    properties: Vec<Property>,
    children: Vec<Node>,
}

impl Node {
    /// Creates a node with the given name, no properties, and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds a raw byte property (builder style).
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.properties.push(Property {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a single-cell integer property, stored big-endian (builder style).
    #[must_use]
    pub fn with_property_u32(self, name: impl Into<String>, value: u32) -> Self {
        self.with_property(name, value.to_be_bytes().to_vec())
    }

    /// Adds a child node (builder style).
    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the node's children in tree order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the first child with the given name, or `None`.
    pub fn child_by_name(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Returns a lazy, restartable iterator over all children with the given
    /// name, in tree order.
    ///
    /// Repeated-name siblings are a legacy layout (several `cluster` children
    /// under one `/clusters` node); this is the ordered walk that layout needs.
    pub fn children_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Returns the raw bytes of the named property, or `None` if absent.
    pub fn property(&self, name: &str) -> Option<&[u8]> {
        self.properties
            .iter()
            .find(|prop| prop.name == name)
            .map(|prop| prop.value.as_slice())
    }

    /// Returns the named property decoded as a single big-endian 32-bit cell.
    ///
    /// Returns `None` if the property is absent or its length is not exactly
    /// four bytes; callers decide whether that is an error or tolerated.
    pub fn property_u32(&self, name: &str) -> Option<u32> {
        let bytes: [u8; 4] = self.property(name)?.try_into().ok()?;
        Some(u32::from_be_bytes(bytes))
    }

    /// Returns `true` if the node's `compatible` string list contains `compat`.
    ///
    /// The `compatible` property is a sequence of NUL-terminated strings.
    pub fn is_compatible(&self, compat: &str) -> bool {
        self.property("compatible").is_some_and(|bytes| {
            bytes
                .split(|byte| *byte == 0)
                .any(|entry| entry == compat.as_bytes())
        })
    }
}
