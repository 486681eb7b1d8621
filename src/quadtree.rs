use tracing::debug;

use crate::config::{Config, SplitPolicy};
use crate::error::{QuadtreeError, Result};
use crate::list::List;
use crate::path::{NodePath, ROOT_ID};
use crate::position::Position;

/// Handle to a node stored in a [`Quadtree`].
///
/// Handles are only meaningful for the tree that produced them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeId(i32);

impl NodeId {
    pub(crate) fn index(self) -> i32 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Children {
    Leaf,
    /// Children in quadrant order 1, 2, 3, 4.
    Split([NodeId; 4]),
}

#[derive(Clone, Debug)]
pub struct Node {
    children: Children,
    parent: Option<NodeId>,
    position: Option<Position>,
    depth: u8,
    path_id: String,
}

impl Node {
    fn root() -> Self {
        Self {
            children: Children::Leaf,
            parent: None,
            position: None,
            depth: 0,
            path_id: ROOT_ID.to_string(),
        }
    }

    pub fn children(&self) -> Children {
        self.children
    }

    /// Non-owning link back to the parent. `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Quadrant within the parent. `None` only for the root.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn path_id(&self) -> &str {
        &self.path_id
    }

    pub fn is_leaf(&self) -> bool {
        self.children == Children::Leaf
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn child(&self, position: Position) -> Option<NodeId> {
        match self.children {
            Children::Leaf => None,
            Children::Split(children) => Some(children[position.index()]),
        }
    }
}

/// Region quadtree whose root starts out split into quadrants 1 to 4.
///
/// ```text
///  3 | 1
///  --+--
///  4 | 2
/// ```
#[derive(Clone, Debug)]
pub struct Quadtree {
    root: NodeId,
    config: Config,
    nodes: List<Node>,
}

impl Default for Quadtree {
    fn default() -> Self {
        Self::new()
    }
}

impl Quadtree {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Builds a tree with the root already split. `max_depth` is raised to 1
    /// if needed so that split can happen.
    pub fn with_config(mut config: Config) -> Self {
        config.max_depth = config.max_depth.max(1);
        let mut nodes = List::new();
        let root = NodeId(nodes.push(Node::root()));
        let mut tree = Self {
            root,
            config,
            nodes,
        };
        tree.split_leaf(root);
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(id.index())
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.size() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn path_id(&self, id: NodeId) -> &str {
        self.node(id).path_id()
    }

    /// Rebuilds the position sequence of `id` by walking parent links.
    pub fn path_of(&self, id: NodeId) -> NodePath {
        let mut segments = Vec::with_capacity(self.node(id).depth() as usize);
        let mut current = self.node(id);
        while let (Some(parent), Some(position)) = (current.parent, current.position) {
            segments.push(position);
            current = self.node(parent);
        }
        segments.reverse();
        NodePath::from(segments)
    }

    /// Gives a leaf its four children and returns them.
    ///
    /// An already split node is left alone under [`SplitPolicy::Ignore`] and
    /// reported as [`QuadtreeError::AlreadySplit`] under
    /// [`SplitPolicy::Reject`]. Existing subtrees are never replaced.
    pub fn split(&mut self, id: NodeId) -> Result<[NodeId; 4]> {
        let node = self.node(id);
        if let Children::Split(children) = node.children {
            return match self.config.split_policy {
                SplitPolicy::Ignore => Ok(children),
                SplitPolicy::Reject => Err(QuadtreeError::AlreadySplit {
                    path: node.path_id.clone(),
                }),
            };
        }
        if node.depth >= self.config.max_depth {
            return Err(QuadtreeError::MaxDepthExceeded {
                path: node.path_id.clone(),
                max_depth: self.config.max_depth,
            });
        }
        Ok(self.split_leaf(id))
    }

    // All four children are pushed before the parent is marked split, and the
    // whole thing happens under `&mut self`.
    fn split_leaf(&mut self, id: NodeId) -> [NodeId; 4] {
        let parent = self.node(id);
        let depth = parent.depth + 1;
        let prefix = if parent.is_root() {
            None
        } else {
            Some(parent.path_id.clone())
        };
        debug!(path = %parent.path_id, depth = parent.depth, "splitting node");

        let children = Position::ALL.map(|position| {
            let path_id = match &prefix {
                None => position.to_string(),
                Some(prefix) => format!("{prefix}.{position}"),
            };
            NodeId(self.nodes.push(Node {
                children: Children::Leaf,
                parent: Some(id),
                position: Some(position),
                depth,
                path_id,
            }))
        });
        self.nodes.get_mut(id.index()).children = Children::Split(children);
        children
    }

    /// Child of `id` at `position`, or `None` when `id` is a leaf.
    pub fn child_at(&self, id: NodeId, position: Position) -> Option<NodeId> {
        self.node(id).child(position)
    }

    /// Child of `id` at `position`, splitting `id` first if it is a leaf.
    pub fn get_or_create_child(&mut self, id: NodeId, position: Position) -> Result<NodeId> {
        if let Some(child) = self.child_at(id, position) {
            return Ok(child);
        }
        let children = self.split(id)?;
        Ok(children[position.index()])
    }

    /// Walks `path` from the root, splitting leaves along the way.
    pub fn resolve(&mut self, path: &str) -> Result<NodeId> {
        let path: NodePath = path.parse()?;
        self.resolve_path(&path)
    }

    pub fn resolve_path(&mut self, path: &NodePath) -> Result<NodeId> {
        path.segments()
            .iter()
            .try_fold(self.root, |id, &position| self.get_or_create_child(id, position))
    }

    /// Walks `path` from the root without creating anything.
    pub fn find(&self, path: &str) -> Result<NodeId> {
        let path: NodePath = path.parse()?;
        self.find_path(&path)
    }

    pub fn find_path(&self, path: &NodePath) -> Result<NodeId> {
        path.segments()
            .iter()
            .try_fold(self.root, |id, &position| {
                self.child_at(id, position)
                    .ok_or_else(|| QuadtreeError::NotFound {
                        path: path.to_string(),
                    })
            })
    }

    /// Splits every node named in `paths`, creating ancestors as needed.
    ///
    /// `create_subtree(&["4.1"])` splits `4` and then `4.1`.
    pub fn create_subtree<S: AsRef<str>>(&mut self, paths: &[S]) -> Result<()> {
        for path in paths {
            let path: NodePath = path.as_ref().parse()?;
            debug!(path = %path, "creating subtree");
            let mut id = self.root;
            for &position in path.segments() {
                id = self.get_or_create_child(id, position)?;
                if self.node(id).is_leaf() {
                    self.split(id)?;
                }
            }
        }
        Ok(())
    }

    /// West neighbors of the node at `path`, finest leaves first.
    ///
    /// The path must already exist: walking into a leaf is reported as
    /// [`QuadtreeError::NotFound`].
    pub fn west_neighbors_of(&self, path: &str) -> Result<Vec<NodeId>> {
        let id = self.find(path)?;
        Ok(self.west_neighbors(id))
    }
}
