//! West-neighbor resolution.
//!
//! Finding the neighbors of a node happens in two passes. The ascent looks
//! for the closest node of equal or larger size across the west edge: an
//! east quadrant (1 or 2) always has its west sibling (3 or 4), while a west
//! quadrant has to ask its parent and then step down one level into the east
//! half of whatever the parent found. The descent then expands that node into
//! the leaves of its east half that actually touch the edge.
//!
//! The root doubles as the boundary: a node on the west rim of the tree gets
//! the root back, and the root is never descended into.

use tracing::trace;

use crate::list::List;
use crate::position::Position;
use crate::quadtree::{Children, NodeId, Quadtree};

impl Quadtree {
    /// Closest node across the west edge of `id` that is at least as large as
    /// `id`. Returns the root when `id` lies on the west boundary, and for the
    /// root itself.
    pub fn west_neighbor_or_larger(&self, id: NodeId) -> NodeId {
        let node = self.node(id);
        let (Some(parent), Some(position)) = (node.parent(), node.position()) else {
            return id;
        };

        if position.is_east() {
            return self.sibling(parent, position.mirror());
        }

        let candidate = self.west_neighbor_or_larger(parent);
        let candidate_node = self.node(candidate);
        trace!(
            node = %node.path_id(),
            parent_neighbor = %candidate_node.path_id(),
            "ascended to parent's west neighbor"
        );
        match candidate_node.children() {
            Children::Split(children) if !candidate_node.is_root() => {
                children[position.mirror().index()]
            }
            _ => candidate,
        }
    }

    /// Every node touching the west edge of `id`, ordered north to south.
    pub fn west_neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let start = self.west_neighbor_or_larger(id);
        let mut neighbors = Vec::new();
        let mut to_process = List::<NodeId>::with_capacity(8);
        to_process.push(start);

        while let Some(current) = to_process.pop() {
            let node = self.node(current);
            match node.children() {
                Children::Split(children) if !node.is_root() => {
                    trace!(node = %node.path_id(), "descending into east half");
                    // Popped in reverse, so NE is visited before SE.
                    to_process.push(children[Position::SE.index()]);
                    to_process.push(children[Position::NE.index()]);
                }
                _ => neighbors.push(current),
            }
        }
        neighbors
    }

    fn sibling(&self, parent: NodeId, position: Position) -> NodeId {
        match self.child_at(parent, position) {
            Some(sibling) => sibling,
            None => unreachable!(
                "parent `{}` of a child node is a leaf",
                self.path_id(parent)
            ),
        }
    }
}
