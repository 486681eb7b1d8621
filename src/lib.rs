//! Region quadtree with west-neighbor lookup.
//!
//! Every node is either a leaf or split into four quadrants numbered
//!
//! ```text
//!  3 | 1
//!  --+--
//!  4 | 2
//! ```
//!
//! and is named by the dotted sequence of quadrants leading to it from the
//! root (`"4.1.3"`), the root itself being `"root"`.
//!
//! ```
//! use region_quadtree::Quadtree;
//!
//! let mut tree = Quadtree::new();
//! tree.create_subtree(&["4"]).unwrap();
//!
//! let neighbors = tree.west_neighbors_of("2").unwrap();
//! let ids: Vec<&str> = neighbors.iter().map(|id| tree.path_id(*id)).collect();
//! assert_eq!(ids, ["4.1", "4.2"]);
//! ```

mod config;
mod error;
mod list;
mod neighbor;
mod path;
mod position;
mod quadtree;
mod traverse;

pub trait QuadtreeVisitor {
    fn leaf(&mut self, depth: u8, node: NodeId, path_id: &str);
    fn branch(&mut self, depth: u8, node: NodeId, path_id: &str);
}

pub use config::*;
pub use error::*;
pub use path::*;
pub use position::*;
pub use quadtree::*;
pub use traverse::*;
