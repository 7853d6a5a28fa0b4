use core::iter::FusedIterator;

use alloc::vec::Vec;

use crate::node::AshwoodNode;

/// The order in which a [`Traversal`] visits the keys of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree: ascending key order.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

enum Pending<'a, K> {
    Key(&'a K),
    Subtree(&'a AshwoodNode<K>),
}

impl<K> Clone for Pending<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Pending<'_, K> {}

/// A lazy walk over the keys of an [`Ashwood`](crate::Ashwood).
///
/// Keeps its own stack of pending keys and unexpanded subtrees, so several walks over the
/// same tree advance independently of each other.
pub struct Traversal<'a, K> {
    order: TraversalOrder,
    stack: Vec<Pending<'a, K>>,
    remaining: usize,
}

impl<'a, K> Traversal<'a, K> {
    pub(crate) fn new(
        root: Option<&'a AshwoodNode<K>>,
        len: usize,
        order: TraversalOrder,
    ) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = root {
            stack.push(Pending::Subtree(root));
        }

        Self {
            order,
            stack,
            remaining: len,
        }
    }

    #[must_use]
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    // pushed in reverse, the stack pops the first entry last
    fn expand(&mut self, node: &'a AshwoodNode<K>) {
        let left = node.left.as_deref().map(Pending::Subtree);
        let right = node.right.as_deref().map(Pending::Subtree);
        let key = Pending::Key(&node.key);

        let pending = match self.order {
            TraversalOrder::PreOrder => [right, left, Some(key)],
            TraversalOrder::InOrder => [right, Some(key), left],
            TraversalOrder::PostOrder => [Some(key), right, left],
        };

        self.stack.extend(pending.into_iter().flatten());
    }
}

impl<'a, K> Iterator for Traversal<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Key(key) => {
                    self.remaining -= 1;
                    return Some(key);
                }
                Pending::Subtree(node) => self.expand(node),
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Traversal<'_, K> {}

impl<K> FusedIterator for Traversal<'_, K> {}

impl<K> Clone for Traversal<'_, K> {
    fn clone(&self) -> Self {
        Self {
            order: self.order,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::TraversalOrder;
    use crate::Ashwood;

    fn perfect_tree() -> Ashwood<usize> {
        // 4 ( 2 (1, 3), 6 (5, 7) )
        (1..=7).collect()
    }

    #[test]
    pub fn orders_on_perfect_tree() {
        let tree = perfect_tree();

        let pre: Vec<_> = tree.pre_order().copied().collect();
        let ino: Vec<_> = tree.in_order().copied().collect();
        let post: Vec<_> = tree.post_order().copied().collect();

        assert_eq!(pre, [4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(ino, [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(post, [1, 3, 2, 5, 7, 6, 4]);
    }

    #[test]
    pub fn empty_tree_yields_nothing() {
        let tree = Ashwood::<usize>::new();

        for order in [
            TraversalOrder::PreOrder,
            TraversalOrder::InOrder,
            TraversalOrder::PostOrder,
        ] {
            let mut walk = tree.traverse(order);
            assert_eq!(walk.len(), 0);
            assert_eq!(walk.next(), None);
            assert_eq!(walk.next(), None);
        }
    }

    #[test]
    pub fn restartable_and_independent() {
        let tree = perfect_tree();

        let first: Vec<_> = tree.in_order().collect();
        let second: Vec<_> = tree.in_order().collect();
        assert_eq!(first, second);

        let mut partial = tree.in_order();
        assert_eq!(partial.next(), Some(&1));
        assert_eq!(partial.next(), Some(&2));

        let fresh: Vec<_> = tree.in_order().copied().collect();
        assert_eq!(fresh, [1, 2, 3, 4, 5, 6, 7]);

        let forked = partial.clone();
        assert_eq!(partial.copied().collect::<Vec<_>>(), [3, 4, 5, 6, 7]);
        assert_eq!(forked.copied().collect::<Vec<_>>(), [3, 4, 5, 6, 7]);
    }

    #[test]
    pub fn exact_size() {
        let tree = perfect_tree();
        let mut walk = tree.post_order();

        assert_eq!(walk.len(), 7);
        walk.next();
        walk.next();
        assert_eq!(walk.len(), 5);
        assert_eq!(walk.order(), TraversalOrder::PostOrder);
    }
}
