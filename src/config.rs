/// What [`Quadtree::split`](crate::Quadtree::split) does with a node that
/// already has children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Leave the existing subtree untouched.
    #[default]
    Ignore,
    /// Fail with [`QuadtreeError::AlreadySplit`](crate::QuadtreeError::AlreadySplit).
    Reject,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub split_policy: SplitPolicy,
    /// Nodes at this depth stay leaves. The root is depth 0.
    pub max_depth: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            split_policy: SplitPolicy::Ignore,
            max_depth: u8::MAX,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_split_policy(mut self, split_policy: SplitPolicy) -> Self {
        self.split_policy = split_policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }
}
