use slotmap::new_key_type;

new_key_type! {
    /// Generational key of a node inside a heap's arena
    pub(crate) struct NodeKey;
}

/// A tree cell holding one (element, priority) pair
///
/// `parent` is set on every child (not only on the head of a sibling list) and is `None`
/// for the root and for detached nodes. The sibling list is doubly linked but not circular:
/// the head reached through `parent.first_child` always has `prev_sibling == None`.
#[derive(Debug, Clone)]
pub(crate) struct Node<T, P> {
    pub(crate) elem: T,
    pub(crate) priority: P,
    pub(crate) first_child: Option<NodeKey>,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) prev_sibling: Option<NodeKey>,
    pub(crate) next_sibling: Option<NodeKey>,
}

impl<T, P> Node<T, P> {
    /// Creates a detached singleton node
    pub(crate) fn new(elem: T, priority: P) -> Self {
        Node {
            elem,
            priority,
            first_child: None,
            parent: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }

    /// Clears the links to parent and siblings, returning the former next sibling
    pub(crate) fn unlink(&mut self) -> Option<NodeKey> {
        self.parent = None;
        self.prev_sibling = None;
        self.next_sibling.take()
    }

    #[cfg(test)]
    pub(crate) fn is_detached(&self) -> bool {
        self.parent.is_none() && self.prev_sibling.is_none() && self.next_sibling.is_none()
    }
}
