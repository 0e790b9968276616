//! In-memory category hierarchy.
//!
//! Categories are stored as parent pointers. [`CategoryTree`] keeps the rows
//! in an arena and links them through slot indices, with siblings sorted by
//! name so a pre-order walk gives the browsing order of the catalog.

use std::collections::HashMap;

use thiserror::Error;

use crate::entity::categories;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("category {id} references missing parent {parent}")]
    UnknownParent { id: i32, parent: i32 },

    #[error("category {id} is part of a parent cycle")]
    Cycle { id: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
    pub depth: usize,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Debug, Default, Clone)]
pub struct CategoryTree {
    nodes: Vec<CategoryNode>,
    index: HashMap<i32, usize>,
    roots: Vec<usize>,
}

impl CategoryTree {
    pub fn build(rows: impl IntoIterator<Item = categories::Model>) -> Result<Self, TreeError> {
        let mut tree = CategoryTree::default();
        let mut parents = Vec::new();

        for row in rows {
            let slot = tree.nodes.len();
            tree.index.insert(row.id, slot);
            parents.push(row.parent_id);
            tree.nodes.push(CategoryNode {
                id: row.id,
                name: row.name,
                is_active: row.is_active,
                depth: 0,
                parent: None,
                children: Vec::new(),
            });
        }

        for (slot, parent_id) in parents.into_iter().enumerate() {
            match parent_id {
                None => tree.roots.push(slot),
                Some(parent_id) => {
                    let parent = *tree.index.get(&parent_id).ok_or(TreeError::UnknownParent {
                        id: tree.nodes[slot].id,
                        parent: parent_id,
                    })?;
                    tree.nodes[slot].parent = Some(parent);
                    tree.nodes[parent].children.push(slot);
                }
            }
        }

        tree.sort_siblings();
        tree.assign_depths()?;
        Ok(tree)
    }

    fn sort_siblings(&mut self) {
        let nodes = &self.nodes;
        let by_name = |a: &usize, b: &usize| {
            nodes[*a]
                .name
                .cmp(&nodes[*b].name)
                .then(nodes[*a].id.cmp(&nodes[*b].id))
        };

        let mut roots = std::mem::take(&mut self.roots);
        roots.sort_by(by_name);
        let children: Vec<Vec<usize>> = nodes
            .iter()
            .map(|node| {
                let mut slots = node.children.clone();
                slots.sort_by(by_name);
                slots
            })
            .collect();

        self.roots = roots;
        for (node, sorted) in self.nodes.iter_mut().zip(children) {
            node.children = sorted;
        }
    }

    // Walks from the roots; any slot never reached hangs off a cycle.
    fn assign_depths(&mut self) -> Result<(), TreeError> {
        let mut visited = vec![false; self.nodes.len()];
        let mut stack: Vec<(usize, usize)> = self.roots.iter().map(|&slot| (slot, 0)).collect();

        while let Some((slot, depth)) = stack.pop() {
            visited[slot] = true;
            self.nodes[slot].depth = depth;
            stack.extend(self.nodes[slot].children.iter().map(|&child| (child, depth + 1)));
        }

        match visited.iter().position(|seen| !seen) {
            Some(slot) => Err(TreeError::Cycle {
                id: self.nodes[slot].id,
            }),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: i32) -> Option<&CategoryNode> {
        self.index.get(&id).map(|&slot| &self.nodes[slot])
    }

    pub fn parent(&self, id: i32) -> Option<&CategoryNode> {
        self.slot(id)
            .and_then(|slot| self.nodes[slot].parent)
            .map(|slot| &self.nodes[slot])
    }

    pub fn roots(&self) -> impl Iterator<Item = &CategoryNode> {
        self.roots.iter().map(|&slot| &self.nodes[slot])
    }

    pub fn children(&self, id: i32) -> impl Iterator<Item = &CategoryNode> {
        self.slot(id)
            .map(|slot| self.nodes[slot].children.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&slot| &self.nodes[slot])
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: i32) -> Vec<&CategoryNode> {
        let mut out = Vec::new();
        let mut current = self.slot(id).and_then(|slot| self.nodes[slot].parent);
        while let Some(slot) = current {
            out.push(&self.nodes[slot]);
            current = self.nodes[slot].parent;
        }
        out
    }

    /// Everything below `id` in pre-order, excluding `id` itself.
    pub fn descendants(&self, id: i32) -> Vec<&CategoryNode> {
        match self.slot(id) {
            Some(slot) => self.walk(&self.nodes[slot].children),
            None => Vec::new(),
        }
    }

    /// The whole tree depth-first, siblings in name order.
    pub fn preorder(&self) -> Vec<&CategoryNode> {
        self.walk(&self.roots)
    }

    fn walk(&self, start: &[usize]) -> Vec<&CategoryNode> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<usize> = start.iter().rev().copied().collect();
        while let Some(slot) = stack.pop() {
            let node = &self.nodes[slot];
            out.push(node);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    fn slot(&self, id: i32) -> Option<usize> {
        self.index.get(&id).copied()
    }
}
