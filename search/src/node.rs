//! Exploration tree nodes.

use ferry_kernel::model::configuration::Configuration;
use ferry_kernel::model::rider::Ride;

/// One step in the exploration tree.
///
/// A parent exclusively owns its children. The `on_solution_path` flag is
/// set after the fact, walking back from the goal to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    configuration: Configuration,
    children: Vec<TreeNode>,
    ride: Ride,
    on_solution_path: bool,
}

impl TreeNode {
    /// A root node: no producing ride, not yet on any path.
    #[must_use]
    pub fn root(configuration: Configuration) -> Self {
        Self::new(configuration, Ride::EMPTY)
    }

    #[must_use]
    pub fn new(configuration: Configuration, ride: Ride) -> Self {
        Self {
            configuration,
            children: Vec::new(),
            ride,
            on_solution_path: false,
        }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// The ride that produced this node from its parent (empty for the root).
    #[must_use]
    pub fn ride(&self) -> Ride {
        self.ride
    }

    /// Children in insertion (catalog) order.
    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [TreeNode] {
        &mut self.children
    }

    /// Append a child and return its index.
    pub fn add_child(&mut self, configuration: Configuration, ride: Ride) -> usize {
        self.children.push(Self::new(configuration, ride));
        self.children.len() - 1
    }

    #[must_use]
    pub fn is_on_solution_path(&self) -> bool {
        self.on_solution_path
    }

    pub fn mark_on_solution_path(&mut self) {
        self.on_solution_path = true;
    }

    /// The first flagged child, if any.
    #[must_use]
    pub fn flagged_child(&self) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.on_solution_path)
    }

    /// Nodes from this one down through flagged children.
    ///
    /// Empty if this node itself is not flagged.
    #[must_use]
    pub fn solution_chain(&self) -> Vec<&TreeNode> {
        let mut chain = Vec::new();
        if !self.on_solution_path {
            return chain;
        }
        let mut current = self;
        chain.push(current);
        while let Some(next) = current.flagged_child() {
            chain.push(next);
            current = next;
        }
        chain
    }

    /// Total nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }
}
