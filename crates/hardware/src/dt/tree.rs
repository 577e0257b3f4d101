//! The hardware description tree and its query operations.
//!
//! A `DeviceTree` owns a single root node and answers the lookups discovery
//! needs: find a node by absolute path, and find a node by compatible string
//! anywhere in the tree. Both walks are read-only; absence is reported as
//! `None`, never as an error.

use crate::dt::node::Node;

/// An owned hardware description tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceTree {
    root: Node,
}

impl DeviceTree {
    /// Creates a tree from its root node.
    ///
    /// The root's own name is ignored by path lookup; `/` always resolves to
    /// the root.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Resolves an absolute path (e.g. `"/cpus/cpu-map"`) to a node.
    ///
    /// Returns `None` if any path component has no matching child. `"/"`
    /// resolves to the root.
    pub fn find_by_path(&self, path: &str) -> Option<&Node> {
        let mut node = &self.root;
        for component in path.split('/').filter(|part| !part.is_empty()) {
            node = node.child_by_name(component)?;
        }
        Some(node)
    }

    /// Returns the first node (depth-first, tree order) whose `compatible`
    /// list contains `compat`, or `None`.
    pub fn find_compatible(&self, compat: &str) -> Option<&Node> {
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.is_compatible(compat) {
                return Some(node);
            }
            // Children are pushed in reverse so the walk visits them in
            // tree order.
            stack.extend(node.children().iter().rev());
        }
        None
    }
}
