use std::iter::FusedIterator;

use crate::list::List;
use crate::quadtree::{Children, NodeId, Quadtree};
use crate::QuadtreeVisitor;

/// Pre-order walk over every node, root first, children in quadrant order.
///
/// Created by [`Quadtree::iter`]. Calling `iter` again starts a fresh walk.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    tree: &'a Quadtree,
    to_process: List<NodeId>,
}

impl<'a> Iter<'a> {
    fn new(tree: &'a Quadtree) -> Self {
        let mut to_process = List::with_capacity(16);
        to_process.push(tree.root());
        Self { tree, to_process }
    }
}

impl Iterator for Iter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.to_process.pop()?;
        if let Children::Split(children) = self.tree.node(id).children() {
            for child in children.iter().rev() {
                self.to_process.push(*child);
            }
        }
        Some(id)
    }
}

impl FusedIterator for Iter<'_> {}

impl Quadtree {
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Path ids of every node in pre-order, starting with `root`.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(move |id| self.path_id(id))
    }

    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter().filter(move |id| self.node(*id).is_leaf())
    }

    /// Reports every node to `visitor` in the same order as [`Quadtree::iter`].
    pub fn traverse<V>(&self, visitor: &mut V)
        where
            V: QuadtreeVisitor,
    {
        for id in self.iter() {
            let node = self.node(id);
            if node.is_leaf() {
                visitor.leaf(node.depth(), id, node.path_id());
            } else {
                visitor.branch(node.depth(), id, node.path_id());
            }
        }
    }
}

impl<'a> IntoIterator for &'a Quadtree {
    type Item = NodeId;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
