//! Addressable pairing heap
//!
//! Nodes live in a generational arena and refer to each other by key, so parent and
//! sibling back-links never own anything. An identity index maps every live element to
//! its node, which makes `change_priority`, `delete` and `get_priority` O(1) lookups.
//!
//! - push, peek: O(1)
//! - pop, delete: O(log n) amortized, O(n) worst case
//! - change_priority (promotion): O(1) amortized cut-and-meld

use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};
use slotmap::SlotMap;

use crate::heap::iter::{Iter, IterWithPriority};
use crate::heap::node::{Node, NodeKey};
use crate::order::{MinOrder, PriorityOrder};
use crate::{Error, Result};

/// Pairing heap addressed by element identity
///
/// Elements must be hashable and are cloned once on push to key the identity index.
/// Two pushes of equal elements are rejected as duplicates.
///
/// # Example
///
/// ```rust
/// use pairing_heap::PairingHeap;
///
/// let mut heap: PairingHeap<_, _> = PairingHeap::new();
/// heap.push("b", 3).unwrap();
/// heap.push("a", 5).unwrap();
/// heap.change_priority("a", 1).unwrap();
/// assert_eq!(heap.pop_with_priority(), Ok(("a", 1)));
/// assert_eq!(heap.get_priority("b"), Ok(&3));
/// ```
#[derive(Debug, Clone)]
pub struct PairingHeap<T, P, O = MinOrder> {
    /// Root of the tree, `None` when empty
    root: Option<NodeKey>,

    /// Arena owning every node of the tree
    nodes: SlotMap<NodeKey, Node<T, P>>,

    /// Identity index: element -> node holding it
    index: HashMap<T, NodeKey>,

    /// Ordering policy
    order: O,
}

impl<T, P, O> Default for PairingHeap<T, P, O>
where
    O: Default,
{
    fn default() -> Self {
        Self::with_order(O::default())
    }
}

impl<T, P, O> PairingHeap<T, P, O>
where
    O: Default,
{
    /// Creates an empty heap using the default value of the ordering policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        PairingHeap {
            root: None,
            nodes: SlotMap::with_capacity_and_key(capacity),
            index: HashMap::with_capacity(capacity),
            order: O::default(),
        }
    }
}

impl<T, P, O> PairingHeap<T, P, O> {
    /// Creates an empty heap ordered by `order`
    pub fn with_order(order: O) -> Self {
        PairingHeap {
            root: None,
            nodes: SlotMap::with_key(),
            index: HashMap::new(),
            order,
        }
    }

    /// Returns the ordering policy of this heap
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the most prioritary element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.peek_with_priority().map(|(elem, _)| elem)
    }

    /// Returns the priority of the most prioritary element
    pub fn peek_priority(&self) -> Option<&P> {
        self.peek_with_priority().map(|(_, priority)| priority)
    }

    /// Returns the most prioritary element together with its priority
    pub fn peek_with_priority(&self) -> Option<(&T, &P)> {
        self.root.map(|root| {
            let node = &self.nodes[root];
            (&node.elem, &node.priority)
        })
    }

    /// Like [`peek`](Self::peek), but fails with [`Error::EmptyHeap`] on an empty heap
    pub fn top(&self) -> Result<&T> {
        self.peek().ok_or(Error::EmptyHeap)
    }

    /// Iterates over all elements in unspecified order
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter::new(self.iter_with_priority())
    }

    /// Iterates over all (element, priority) pairs in unspecified order
    pub fn iter_with_priority(&self) -> IterWithPriority<'_, T, P> {
        IterWithPriority::new(&self.nodes, self.root, self.len())
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.root = None;
        self.nodes.clear();
        self.index.clear();
    }
}

impl<T, P, O> PairingHeap<T, P, O>
where
    T: Hash + Eq + Clone,
    O: PriorityOrder<P>,
{
    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
        self.index.reserve(additional);
    }

    /// Pushes an element with the given priority
    ///
    /// # Errors
    /// Returns [`Error::DuplicateElement`] if an equal element is already in the heap.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn push(&mut self, elem: T, priority: P) -> Result<()> {
        let key = match self.index.entry(elem) {
            Entry::Occupied(_) => return Err(Error::DuplicateElement),
            Entry::Vacant(entry) => {
                let key = self.nodes.insert(Node::new(entry.key().clone(), priority));
                entry.insert(key);
                key
            }
        };
        self.root = self.meld(self.root, Some(key));
        Ok(())
    }

    /// Removes the most prioritary element and returns it
    ///
    /// # Time Complexity
    /// O(log n) amortized, O(n) worst case
    pub fn pop(&mut self) -> Result<T> {
        self.pop_with_priority().map(|(elem, _)| elem)
    }

    /// Removes the most prioritary element and returns its priority
    pub fn pop_priority(&mut self) -> Result<P> {
        self.pop_with_priority().map(|(_, priority)| priority)
    }

    /// Removes the most prioritary element and returns it with its priority
    pub fn pop_with_priority(&mut self) -> Result<(T, P)> {
        let root = self.root.ok_or(Error::EmptyHeap)?;
        Ok(self.remove_node(root))
    }

    /// Changes the priority of `elem` to a more prioritary (or equal) one
    ///
    /// # Errors
    /// - [`Error::UnknownElement`] if `elem` is not in the heap
    /// - [`Error::InvalidPromotion`] if `priority` is less prioritary than the current one
    ///
    /// # Time Complexity
    /// O(1) amortized
    pub fn change_priority<Q>(&mut self, elem: &Q, priority: P) -> Result<()>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let key = self.key_of(elem)?;
        if !self
            .order
            .is_at_least_as_prioritary(&priority, &self.nodes[key].priority)
        {
            return Err(Error::InvalidPromotion);
        }
        self.promote(key, priority);
        Ok(())
    }

    /// Removes `elem` from the heap, returning it with its priority
    ///
    /// # Errors
    /// Returns [`Error::UnknownElement`] if `elem` is not in the heap.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn delete<Q>(&mut self, elem: &Q) -> Result<(T, P)>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let key = self.key_of(elem)?;
        Ok(self.remove_node(key))
    }

    /// Returns the priority of `elem`
    ///
    /// # Errors
    /// Returns [`Error::UnknownElement`] if `elem` is not in the heap.
    pub fn get_priority<Q>(&self, elem: &Q) -> Result<&P>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.priority(elem).ok_or(Error::UnknownElement)
    }

    /// Returns the priority of `elem`, or `None` if it is not in the heap
    pub fn priority<Q>(&self, elem: &Q) -> Option<&P>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(elem).map(|&key| &self.nodes[key].priority)
    }

    /// Returns true if `elem` is in the heap
    pub fn contains<Q>(&self, elem: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(elem)
    }

    /// Changes the priority of `elem`, accepting demotions
    ///
    /// A demotion takes the node out of the tree as `delete` does and melds it back with
    /// the new priority as `push` does. The identity index entry stays in place.
    pub(crate) fn reprioritize<Q>(&mut self, elem: &Q, priority: P) -> Result<()>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let key = self.key_of(elem)?;
        if self
            .order
            .is_at_least_as_prioritary(&priority, &self.nodes[key].priority)
        {
            self.promote(key, priority);
            return Ok(());
        }

        debug!("Demoting node {:?}, reinserting it", key);
        self.detach(key);
        self.nodes[key].priority = priority;
        self.root = self.meld(self.root, Some(key));
        Ok(())
    }

    fn key_of<Q>(&self, elem: &Q) -> Result<NodeKey>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(elem).copied().ok_or(Error::UnknownElement)
    }

    /// Stores a promoted priority and restores heap order if the parent is now outranked
    fn promote(&mut self, key: NodeKey, priority: P) {
        self.nodes[key].priority = priority;

        let Some(parent) = self.nodes[key].parent else {
            return;
        };
        if self
            .order
            .is_at_least_as_prioritary(&self.nodes[parent].priority, &self.nodes[key].priority)
        {
            return;
        }

        trace!("Cutting node {:?} from {:?} and melding it with the root", key, parent);
        self.cut(key);
        self.root = self.meld(Some(key), self.root);
    }

    /// Removes a live node from the tree, the arena and the index
    fn remove_node(&mut self, key: NodeKey) -> (T, P) {
        self.detach(key);
        let Some(node) = self.nodes.remove(key) else {
            unreachable!("detached node {:?} missing from the arena", key);
        };
        self.index.remove(&node.elem);
        (node.elem, node.priority)
    }

    /// Takes a node out of the tree, leaving it as a childless singleton
    ///
    /// Its former children are paired up and melded back into the tree.
    fn detach(&mut self, key: NodeKey) {
        let children = self.nodes[key].first_child.take();
        if self.root == Some(key) {
            self.root = self.merge_pairs(children);
            return;
        }

        self.cut(key);
        if children.is_some() {
            trace!("Re-pairing children of detached node {:?}", key);
            let subtree = self.merge_pairs(children);
            self.root = self.meld(subtree, self.root);
        }
    }

    /// Removes a non-root node from its parent's sibling list
    fn cut(&mut self, key: NodeKey) {
        let node = &mut self.nodes[key];
        let parent = node.parent;
        let prev = node.prev_sibling;
        let next = node.unlink();

        match prev {
            Some(prev) => self.nodes[prev].next_sibling = next,
            None => {
                if let Some(parent) = parent {
                    self.nodes[parent].first_child = next;
                }
            }
        }
        if let Some(next) = next {
            self.nodes[next].prev_sibling = prev;
        }
    }

    /// Returns the root of the union of two trees
    fn meld(&mut self, left: Option<NodeKey>, right: Option<NodeKey>) -> Option<NodeKey> {
        match (left, right) {
            (None, right) => right,
            (left, None) => left,
            (Some(left), Some(right)) => Some(self.link(left, right)),
        }
    }

    /// Links the loser of the comparison as the first child of the winner
    fn link(&mut self, left: NodeKey, right: NodeKey) -> NodeKey {
        let (parent, child) = if self
            .order
            .is_at_least_as_prioritary(&self.nodes[left].priority, &self.nodes[right].priority)
        {
            (left, right)
        } else {
            (right, left)
        };

        let head = self.nodes[parent].first_child;
        let node = &mut self.nodes[child];
        node.parent = Some(parent);
        node.prev_sibling = None;
        node.next_sibling = head;
        if let Some(head) = head {
            self.nodes[head].prev_sibling = Some(child);
        }
        self.nodes[parent].first_child = Some(child);
        parent
    }

    /// Two-pass pairing of a detached sibling list into a single tree
    ///
    /// Pairs are melded left to right, then the results are folded right to left.
    /// Both passes use an explicit stack instead of recursion.
    fn merge_pairs(&mut self, first: Option<NodeKey>) -> Option<NodeKey> {
        let mut pairs = Vec::new();
        let mut current = first;

        // [H1, H2, H3, H4, H5] => [H1H2, H3H4, H5]
        while let Some(left) = current {
            match self.nodes[left].unlink() {
                Some(right) => {
                    current = self.nodes[right].unlink();
                    pairs.push(self.link(left, right));
                }
                None => {
                    pairs.push(left);
                    current = None;
                }
            }
        }

        // [H1H2, H3H4, H5] => [H1H2, H3H4H5] => [H1H2H3H4H5]
        let mut root = pairs.pop()?;
        while let Some(left) = pairs.pop() {
            root = self.link(left, root);
        }
        Some(root)
    }

    /// Checks link consistency, heap order and the identity index
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let mut visited = 0;
        if let Some(root) = self.root {
            assert!(self.nodes[root].is_detached(), "root must have no parent or siblings");

            let mut stack = vec![root];
            while let Some(key) = stack.pop() {
                visited += 1;
                let node = &self.nodes[key];
                assert_eq!(self.index.get(&node.elem), Some(&key));

                let mut prev = None;
                let mut child = node.first_child;
                while let Some(current) = child {
                    let child_node = &self.nodes[current];
                    assert_eq!(child_node.parent, Some(key));
                    assert_eq!(child_node.prev_sibling, prev);
                    assert!(
                        self.order
                            .is_at_least_as_prioritary(&node.priority, &child_node.priority),
                        "heap order violated"
                    );
                    stack.push(current);
                    prev = Some(current);
                    child = child_node.next_sibling;
                }
            }
        }
        assert_eq!(visited, self.nodes.len());
        assert_eq!(self.index.len(), self.nodes.len());
    }
}

impl<T, O> PairingHeap<T, T, O>
where
    T: Hash + Eq + Clone,
    O: PriorityOrder<T>,
{
    /// Pushes `value` using itself as its priority
    pub fn push_value(&mut self, value: T) -> Result<()> {
        self.push(value.clone(), value)
    }
}

impl<'a, T, P, O> IntoIterator for &'a PairingHeap<T, P, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
