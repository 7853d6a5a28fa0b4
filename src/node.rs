use core::cmp::Ordering;

use alloc::boxed::Box;

use crate::{compare::Comparator, error::InvariantViolation};

pub(crate) type Link<K> = Option<Box<AshwoodNode<K>>>;

/*
the height of a node is cached and only ever recomputed from the cached heights of its two
children, so every structural change must be followed by `balanced()` on each ancestor, bottom-up.
an absent subtree has height 0, a leaf has height 1.
*/

#[derive(Debug, Clone)]
pub(crate) struct AshwoodNode<K> {
    pub(crate) key: K,
    pub(crate) height: usize,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> AshwoodNode<K> {
    pub(crate) fn singleton(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            height: 1,
            left: None,
            right: None,
        })
    }

    pub(crate) fn height(link: &Link<K>) -> usize {
        link.as_ref().map_or(0, |node| node.height)
    }

    pub(crate) fn balance_factor(link: &Link<K>) -> isize {
        link.as_ref().map_or(0, |node| node.balance())
    }

    fn balance(&self) -> isize {
        Self::height(&self.left) as isize - Self::height(&self.right) as isize
    }

    fn update_height(&mut self) {
        self.height = 1 + Self::height(&self.left).max(Self::height(&self.right));
    }

    /// Promotes the left child. Without a left child the node is returned unchanged.
    pub(crate) fn rotated_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut pivot) = self.left.take() else {
            return self;
        };

        self.left = pivot.right.take();
        self.update_height();

        pivot.right = Some(self);
        pivot.update_height();

        tracing::trace!(height = pivot.height, "rotated right");
        pivot
    }

    /// Promotes the right child. Without a right child the node is returned unchanged.
    pub(crate) fn rotated_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut pivot) = self.right.take() else {
            return self;
        };

        self.right = pivot.left.take();
        self.update_height();

        pivot.left = Some(self);
        pivot.update_height();

        tracing::trace!(height = pivot.height, "rotated left");
        pivot
    }

    /// Restores the balance of this node after a change in one of its subtrees, and
    /// returns the root of the resulting subtree with an up to date height.
    pub(crate) fn balanced(mut self: Box<Self>) -> Box<Self> {
        let balance = self.balance();

        if balance > 1 {
            // left-right case
            if Self::balance_factor(&self.left) < 0 {
                self.left = self.left.take().map(Self::rotated_left);
            }
            self.rotated_right()
        } else if balance < -1 {
            // right-left case
            if Self::balance_factor(&self.right) > 0 {
                self.right = self.right.take().map(Self::rotated_right);
            }
            self.rotated_left()
        } else {
            self.update_height();
            self
        }
    }

    /// Detaches the minimum node of this subtree. Returns what is left of the subtree,
    /// rebalanced, along with the detached key.
    pub(crate) fn split_min(mut self: Box<Self>) -> (Link<K>, K) {
        match self.left.take() {
            None => {
                let AshwoodNode { key, right, .. } = *self;
                (right, key)
            }
            Some(left) => {
                let (rest, min) = left.split_min();
                self.left = rest;
                (Some(self.balanced()), min)
            }
        }
    }

    pub(crate) fn split_max(mut self: Box<Self>) -> (Link<K>, K) {
        match self.right.take() {
            None => {
                let AshwoodNode { key, left, .. } = *self;
                (left, key)
            }
            Some(right) => {
                let (rest, max) = right.split_max();
                self.right = rest;
                (Some(self.balanced()), max)
            }
        }
    }

    /// Removes the key stored in this node from the subtree it roots.
    ///
    /// With two children the node itself stays in place: the minimum of the right subtree is
    /// detached and its key moves into this node. The returned subtree is not rebalanced at
    /// its root.
    pub(crate) fn unlinked(mut self: Box<Self>) -> (Link<K>, K) {
        match (self.left.take(), self.right.take()) {
            (None, rest) | (rest, None) => {
                let AshwoodNode { key, .. } = *self;
                (rest, key)
            }
            (Some(left), Some(right)) => {
                let (rest, successor) = right.split_min();
                self.left = Some(left);
                self.right = rest;

                tracing::trace!(height = self.height, "spliced in successor");
                let removed = core::mem::replace(&mut self.key, successor);
                (Some(self), removed)
            }
        }
    }

    /// Checks order, balance and cached heights below `link`, with every key strictly between
    /// `lower` and `upper`. Returns the height and the number of keys of the subtree.
    pub(crate) fn verify<C: Comparator<K>>(
        link: &Link<K>,
        comparator: &C,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> Result<(usize, usize), InvariantViolation> {
        let Some(node) = link else {
            return Ok((0, 0));
        };

        let above_lower =
            lower.is_none_or(|bound| comparator.compare(bound, &node.key) == Ordering::Less);
        let below_upper =
            upper.is_none_or(|bound| comparator.compare(&node.key, bound) == Ordering::Less);
        if !above_lower || !below_upper {
            return Err(InvariantViolation::Unordered);
        }

        let (left_height, left_count) =
            Self::verify(&node.left, comparator, lower, Some(&node.key))?;
        let (right_height, right_count) =
            Self::verify(&node.right, comparator, Some(&node.key), upper)?;

        let actual = 1 + left_height.max(right_height);
        if node.height != actual {
            return Err(InvariantViolation::StaleHeight {
                cached: node.height,
                actual,
            });
        }

        let balance = left_height as isize - right_height as isize;
        if balance.abs() > 1 {
            return Err(InvariantViolation::Unbalanced { balance });
        }

        Ok((actual, left_count + right_count + 1))
    }
}
