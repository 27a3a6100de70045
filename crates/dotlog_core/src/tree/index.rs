//! Hierarchy facts index over a flat entry collection.
//!
//! # Responsibility
//! - Resolve raw `parent_id` references into a defensible acyclic shape.
//! - Answer children/depth/ancestry queries for other components.
//!
//! # Invariants
//! - Resolution is deterministic for a given input order.
//! - A parent reference that is missing, self-pointing, or closes a cycle
//!   is treated as unresolved; the entry becomes a root.
//! - Child id lists preserve the relative input order of siblings.

use crate::model::entry::{Entry, EntryId};
use std::collections::{HashMap, HashSet};

/// Derived, disposable index of parent/child facts.
///
/// Built once per collection snapshot; queries are O(1) or O(depth).
#[derive(Debug, Clone)]
pub struct HierarchyIndex {
    parents: HashMap<EntryId, Option<EntryId>>,
    children: HashMap<EntryId, Vec<EntryId>>,
    roots: Vec<EntryId>,
}

impl HierarchyIndex {
    /// Builds the index from one flat collection snapshot.
    ///
    /// Cycle defense: entries are walked in input order; when a parent chain
    /// closes back on itself, the entry owning the cycle-closing edge is
    /// re-rooted and the rest of the chain keeps its links.
    pub fn new(entries: &[Entry]) -> Self {
        let by_id: HashMap<EntryId, &Entry> =
            entries.iter().map(|entry| (entry.id, entry)).collect();

        let raw_parent = |entry: &Entry| -> Option<EntryId> {
            match entry.parent_id {
                Some(parent) if parent != entry.id && by_id.contains_key(&parent) => Some(parent),
                _ => None,
            }
        };

        // First pass: find the entries whose parent edge closes a cycle.
        let mut settled: HashSet<EntryId> = HashSet::new();
        let mut broken: HashSet<EntryId> = HashSet::new();
        for entry in entries {
            if settled.contains(&entry.id) {
                continue;
            }
            let mut chain: Vec<EntryId> = Vec::new();
            let mut chain_set: HashSet<EntryId> = HashSet::new();
            let mut current = entry.id;
            loop {
                chain.push(current);
                chain_set.insert(current);
                let next = if broken.contains(&current) {
                    None
                } else {
                    by_id.get(&current).copied().and_then(|e| raw_parent(e))
                };
                match next {
                    None => break,
                    Some(parent) if settled.contains(&parent) => break,
                    Some(parent) if chain_set.contains(&parent) => {
                        broken.insert(current);
                        break;
                    }
                    Some(parent) => current = parent,
                }
            }
            settled.extend(chain);
        }

        // Second pass: bucket children under their effective parent.
        let mut parents: HashMap<EntryId, Option<EntryId>> = HashMap::new();
        let mut children: HashMap<EntryId, Vec<EntryId>> = HashMap::new();
        let mut roots: Vec<EntryId> = Vec::new();
        for entry in entries {
            let effective = if broken.contains(&entry.id) {
                None
            } else {
                raw_parent(entry)
            };
            parents.insert(entry.id, effective);
            match effective {
                Some(parent) => children.entry(parent).or_default().push(entry.id),
                None => roots.push(entry.id),
            }
        }

        Self {
            parents,
            children,
            roots,
        }
    }

    /// Returns whether the collection contains this id.
    pub fn contains(&self, id: EntryId) -> bool {
        self.parents.contains_key(&id)
    }

    /// Returns root-level ids in input order.
    pub fn roots(&self) -> &[EntryId] {
        &self.roots
    }

    /// Returns the effective parent of an entry, if any.
    pub fn parent_of(&self, id: EntryId) -> Option<EntryId> {
        self.parents.get(&id).copied().flatten()
    }

    /// Returns whether the entry resolved to a non-root position.
    pub fn has_parent(&self, id: EntryId) -> bool {
        self.parent_of(id).is_some()
    }

    /// Returns child ids in input order.
    pub fn children_of(&self, id: EntryId) -> &[EntryId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns whether the entry has at least one child.
    pub fn has_children(&self, id: EntryId) -> bool {
        !self.children_of(id).is_empty()
    }

    /// Returns the number of direct children.
    pub fn child_count(&self, id: EntryId) -> usize {
        self.children_of(id).len()
    }

    /// Returns tree depth, with roots at depth zero.
    ///
    /// Unknown ids report depth zero.
    pub fn depth(&self, id: EntryId) -> usize {
        let mut depth = 0;
        let mut cursor = self.parent_of(id);
        while let Some(current) = cursor {
            depth += 1;
            cursor = self.parent_of(current);
        }
        depth
    }

    /// Returns whether `candidate` sits strictly below `ancestor`.
    pub fn is_descendant_of(&self, candidate: EntryId, ancestor: EntryId) -> bool {
        let mut cursor = self.parent_of(candidate);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent_of(current);
        }
        false
    }

    /// Returns the ancestor chain for an entry, root first, entry last.
    ///
    /// Backs the context view that walks from a selected entry up to its
    /// root. Unknown ids yield an empty chain.
    pub fn ancestor_chain(&self, id: EntryId) -> Vec<EntryId> {
        if !self.contains(id) {
            return Vec::new();
        }
        let mut chain = vec![id];
        let mut cursor = self.parent_of(id);
        while let Some(current) = cursor {
            chain.push(current);
            cursor = self.parent_of(current);
        }
        chain.reverse();
        chain
    }
}
