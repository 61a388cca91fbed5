/*
Rendering goes through a local trait so that `termtree::Tree` stays a plain
display type and the domain layer never depends on it.
 */
use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::{Tree as SternBrocotTree, TreeArena};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for TreeArena {
    fn to_tree_string(&self) -> Tree<String> {
        if let Some(root_idx) = self.root() {
            fn build_tree(arena: &TreeArena, node_idx: Index) -> Tree<String> {
                match arena.get_node(node_idx) {
                    Some(node) => Tree::new(node.data.to_string()).with_leaves(
                        node.children
                            .iter()
                            .map(|&child_idx| build_tree(arena, child_idx)),
                    ),
                    None => Tree::new(String::new()),
                }
            }

            build_tree(self, root_idx)
        } else {
            Tree::new("Empty tree".to_string())
        }
    }
}

// The boundaries label the root; the expansion hangs below it.
impl TreeNodeConvert for SternBrocotTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let root = format!("{} .. {}", self.left(), self.right());
        if self.arena().is_empty() {
            Tree::new(root)
        } else {
            Tree::new(root).with_leaves([self.arena().to_tree_string()])
        }
    }
}
