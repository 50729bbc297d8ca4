//! Core search node type and path reconstruction.

use std::cmp::Ordering;
use std::sync::Arc;

/// Shared handle to an immutable node.
///
/// Children hold their parent through this handle, so a solution node keeps
/// its whole path alive and can be handed to other threads.
pub type NodeRef<S, A> = Arc<Node<S, A>>;

/// An immutable node in the search tree.
///
/// A root has neither parent nor action; every other node has both. The
/// constructors enforce this, and nothing mutates a node after it is built.
#[derive(Debug)]
pub struct Node<S, A> {
    state: S,
    parent: Option<NodeRef<S, A>>,
    action: Option<A>,
    path_cost: f64,
    depth: u32,
}

impl<S, A> Node<S, A> {
    /// Create a root node with zero path cost.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            path_cost: 0.0,
            depth: 0,
        }
    }

    /// Create a child of `parent` reached by `action` with the given
    /// cumulative `path_cost`.
    #[must_use]
    pub fn child(state: S, parent: &NodeRef<S, A>, action: A, path_cost: f64) -> Self {
        Self {
            state,
            parent: Some(Arc::clone(parent)),
            action: Some(action),
            path_cost,
            depth: parent.depth + 1,
        }
    }

    /// The state this node represents.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The parent node (`None` for a root).
    #[must_use]
    pub fn parent(&self) -> Option<&NodeRef<S, A>> {
        self.parent.as_ref()
    }

    /// The action that produced this node from its parent.
    #[must_use]
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Cumulative cost of the path from the root.
    #[must_use]
    pub fn path_cost(&self) -> f64 {
        self.path_cost
    }

    /// Number of actions between the root and this node (root = 0).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Iterate from this node up to the root, this node first.
    pub fn ancestors(&self) -> Ancestors<'_, S, A> {
        Ancestors { next: Some(self) }
    }

    /// Compare two nodes by path cost only.
    ///
    /// Distinct nodes may compare equal, so this is a preorder, not an
    /// identity. The frontier never relies on it for tie-breaking.
    #[must_use]
    pub fn cost_cmp(&self, other: &Self) -> Ordering {
        self.path_cost.total_cmp(&other.path_cost)
    }
}

// Unlink the parent chain iteratively so that dropping a very deep solution
// path cannot overflow the stack.
impl<S, A> Drop for Node<S, A> {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(parent) = next {
            match Arc::try_unwrap(parent) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator over a node and its ancestors, leaf first.
pub struct Ancestors<'a, S, A> {
    next: Option<&'a Node<S, A>>,
}

impl<'a, S, A> Iterator for Ancestors<'a, S, A> {
    type Item = &'a Node<S, A>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

/// The actions leading from the root to `node`, in order.
///
/// Empty for a root.
#[must_use]
pub fn path_actions<S, A: Clone>(node: &Node<S, A>) -> Vec<A> {
    let mut actions: Vec<A> = node
        .ancestors()
        .filter_map(|n| n.action.clone())
        .collect();
    actions.reverse();
    actions
}

/// The states visited from the root to `node`, in order.
///
/// Always has `node.depth() + 1` entries and ends with `node.state()`.
#[must_use]
pub fn path_states<S: Clone, A>(node: &Node<S, A>) -> Vec<S> {
    let mut states: Vec<S> = node.ancestors().map(|n| n.state.clone()).collect();
    states.reverse();
    states
}
