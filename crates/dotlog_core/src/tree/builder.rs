//! Tree materialization from a flat entry collection.
//!
//! # Responsibility
//! - Materialize rooted `TreeNode` forests for nested rendering.
//! - Provide pre-order flattening for row-oriented consumers.
//!
//! # Invariants
//! - O(n) bucketing; every entry lands in the forest exactly once.
//! - Children appear in input collection order.
//! - Materialization, flattening and teardown use explicit work stacks;
//!   chain depth never consumes call stack.
//! - Defensive rooting for orphans/self-references/cycles is delegated to
//!   `HierarchyIndex` and inherited unchanged here.

use crate::model::entry::{Entry, EntryId};
use crate::tree::index::HierarchyIndex;
use std::collections::HashMap;

/// One node of a derived entry tree.
///
/// Trees are disposable views; the flat collection remains the owner of
/// entry data, so nodes hold clones rather than back-references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// The entry at this node.
    pub entry: Entry,
    /// Child nodes in input collection order.
    pub children: Vec<TreeNode>,
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        // Drain descendants iteratively; drop glue would otherwise recurse
        // to chain depth.
        let mut pending: Vec<TreeNode> = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Builds the root forest for one flat collection snapshot.
///
/// Empty input yields an empty forest. Roots are entries whose parent
/// reference is null or unresolved (missing target, self-reference, or a
/// cycle-closing edge).
pub fn build_tree(entries: &[Entry]) -> Vec<TreeNode> {
    let index = HierarchyIndex::new(entries);
    let by_id: HashMap<EntryId, &Entry> = entries.iter().map(|entry| (entry.id, entry)).collect();

    // Pre-order id walk with an explicit stack.
    let mut order: Vec<EntryId> = Vec::with_capacity(entries.len());
    let mut stack: Vec<EntryId> = index.roots().iter().rev().copied().collect();
    while let Some(id) = stack.pop() {
        order.push(id);
        stack.extend(index.children_of(id).iter().rev().copied());
    }

    // Assemble bottom-up: reverse pre-order sees every child before its
    // parent, so each node is moved into place exactly once.
    let mut built: HashMap<EntryId, TreeNode> = HashMap::with_capacity(order.len());
    for id in order.into_iter().rev() {
        let children = index
            .children_of(id)
            .iter()
            .map(|child| {
                built
                    .remove(child)
                    .expect("children assemble before their parent")
            })
            .collect();
        built.insert(
            id,
            TreeNode {
                entry: (*by_id[&id]).clone(),
                children,
            },
        );
    }

    index
        .roots()
        .iter()
        .map(|id| {
            built
                .remove(id)
                .expect("every root assembles exactly once")
        })
        .collect()
}

/// Flattens a forest in pre-order, yielding entry references.
pub fn flatten(nodes: &[TreeNode]) -> Vec<&Entry> {
    let mut rows = Vec::new();
    let mut stack: Vec<&TreeNode> = nodes.iter().rev().collect();
    while let Some(node) = stack.pop() {
        rows.push(&node.entry);
        stack.extend(node.children.iter().rev());
    }
    rows
}
