use region_quadtree::{QuadtreeError, Quadtree};

use crate::helpers::{assert_west, tree_with, west_of};

//  3 | 1
//  --+--
//  4 | 2
#[test]
fn fresh_tree() {
    let tree = Quadtree::new();
    assert_west(&tree, "1", "3");
    assert_west(&tree, "2", "4");
    assert_west(&tree, "3", "root");
    assert_west(&tree, "4", "root");
}

//       | 1.3 | 1.1
//   3   |-----+-----
//       | 1.4 | 1.2
//  -----+-----------
//   4   |     2
#[test]
fn east_quadrant_split() {
    let tree = tree_with(&["1"]);
    assert_west(&tree, "1.1", "1.3");
    assert_west(&tree, "1.2", "1.4");
    assert_west(&tree, "1.3", "3");
    assert_west(&tree, "1.4", "3");
    assert_west(&tree, "2", "4");
}

//  3.3 | 3.1 | 1.3 | 1.1
//  ----+-----+-----+----
//  3.4 | 3.2 | 1.4 | 1.2
//  ----------+----------
//      4     |    2
#[test]
fn both_north_quadrants_split() {
    let tree = tree_with(&["1", "3"]);
    assert_west(&tree, "1.1", "1.3");
    assert_west(&tree, "1.2", "1.4");
    assert_west(&tree, "1.3", "3.1");
    assert_west(&tree, "1.4", "3.2");
    assert_west(&tree, "2", "4");
}

//       3     |  1
//  -----------+-----
//  4.3 | 4.1  |
//  ----+----- |  2
//  4.4 | 4.2  |
#[test]
fn smaller_neighbors_to_the_west() {
    let tree = tree_with(&["4"]);
    assert_west(&tree, "2", "4.1,4.2");
    assert_west(&tree, "4.1", "4.3");
    assert_west(&tree, "4.2", "4.4");
}

//                3             |      1
//  ----------------------------+-------------
//      | 4.1.3 | 4.1.1         |
//  4.3 |-------+------   2.3   |   2.1
//      | 4.1.4 | 4.1.2         |
//  ----+---------------+-------+-------------
//  4.4 |     4.2       |  2.4  |   2.2
#[test]
fn mixed_depths_in_the_south() {
    let tree = tree_with(&["2", "4", "4.1"]);
    assert_west(&tree, "1", "3");
    assert_west(&tree, "2.1", "2.3");
    assert_west(&tree, "2.2", "2.4");
    assert_west(&tree, "2.4", "4.2");
    assert_west(&tree, "4.2", "4.4");
    assert_west(&tree, "2.3", "4.1.1,4.1.2");
    assert_west(&tree, "4.1.1", "4.1.3");
    assert_west(&tree, "4.1.3", "4.3");
}

//         | 1.3.3 | 1.3.1 |
//         |-------+-------|  1.1
//    3    | 1.3.4 | 1.3.2 |
//         |-------+-------+------
//         |      1.4      |  1.2
//  -------+-----------------------
//    4    |           2
#[test]
fn nested_split_inside_east_quadrant() {
    let tree = tree_with(&["1", "1.3"]);
    assert_west(&tree, "1.1", "1.3.1,1.3.2");
    assert_west(&tree, "1.3.1", "1.3.3");
    assert_west(&tree, "1.3.2", "1.3.4");
    assert_west(&tree, "1.3.3", "3");
    assert_west(&tree, "1.3.4", "3");
    assert_west(&tree, "1.4", "3");
    assert_west(&tree, "1.2", "1.4");
    assert_west(&tree, "2", "4");
    assert_west(&tree, "4", "root");
}

#[test]
fn neighbors_across_the_root_midline_at_depth() {
    let tree = tree_with(&["1.4.3", "3.2.1", "3.2.2"]);
    // 1.4.3 faces 3.2.1 across the root midline.
    assert_west(&tree, "1.4.3", "3.2.1.1,3.2.1.2");
    assert_west(&tree, "1.4.4", "3.2.2.1,3.2.2.2");
    assert_west(&tree, "1.4.1", "1.4.3.1,1.4.3.2");
    assert_west(&tree, "1.4", "3.2.1.1,3.2.1.2,3.2.2.1,3.2.2.2");
    assert_west(&tree, "1.3", "3.1");
}

#[test]
fn repeated_queries_agree() {
    let tree = tree_with(&["2", "4", "4.1"]);
    let first = west_of(&tree, "2.3");
    for _ in 0..3 {
        assert_eq!(west_of(&tree, "2.3"), first);
    }
}

#[test]
fn neighbors_round_trip_through_find() {
    let tree = tree_with(&["1", "1.3", "4", "4.2"]);
    for path in ["1.1", "2", "1.3.1", "4.1", "3"] {
        for id in tree.west_neighbors_of(path).unwrap() {
            assert_eq!(tree.find(tree.path_id(id)).unwrap(), id);
        }
    }
}

#[test]
fn bad_paths_are_typed_errors() {
    let tree = Quadtree::new();
    assert_eq!(
        tree.west_neighbors_of("5").unwrap_err(),
        QuadtreeError::InvalidPosition(5)
    );
    assert!(matches!(
        tree.west_neighbors_of("1.").unwrap_err(),
        QuadtreeError::MalformedPath { .. }
    ));
    assert_eq!(
        tree.west_neighbors_of("1.1").unwrap_err(),
        QuadtreeError::NotFound {
            path: "1.1".to_string()
        }
    );
}
