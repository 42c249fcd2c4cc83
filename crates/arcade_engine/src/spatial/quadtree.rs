//! Quadtree spatial partitioning structure
//!
//! Divides the 2D play-field into hierarchical regions for fast broad-phase
//! queries. Each node splits into 4 quadrants once it holds more than
//! `max_objects` entries, until `max_levels` is reached.
//!
//! Entries are stored by bounding box. An entry that does not fit entirely
//! inside a single quadrant (it straddles a split line, or pokes out of the
//! node) stays at the node itself, so a query never misses an entity whose
//! box touches the queried region.
//!
//! The tree is meant to be cleared and rebuilt every tick rather than updated
//! in place.

use serde::{Deserialize, Serialize};

use crate::ecs::Entity;
use crate::foundation::math::Aabb2;

/// Configuration for quadtree behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadTreeConfig {
    /// Entries a node may hold before it tries to split
    pub max_objects: usize,

    /// Deepest level a node may be created at (root = 0)
    pub max_levels: u32,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_objects: 10,
            max_levels: 5,
        }
    }
}

/// Entity stored in the quadtree with the bounds it was inserted with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadTreeEntry {
    /// Entity the bounds belong to
    pub id: Entity,
    /// Bounding box at insertion time
    pub bounds: Aabb2,
}

/// Single node in the quadtree hierarchy
#[derive(Debug, Clone)]
pub struct QuadTreeNode {
    /// World-space bounds of this node
    pub bounds: Aabb2,

    /// Entries that fit this node but no single child quadrant
    pub entries: Vec<QuadTreeEntry>,

    /// Child nodes (4 quadrants), None if this is a leaf
    pub children: Option<Box<[QuadTreeNode; 4]>>,

    /// Depth in the tree (0 = root)
    pub level: u32,
}

impl QuadTreeNode {
    /// Create a new leaf node
    pub fn new(bounds: Aabb2, level: u32) -> Self {
        Self {
            bounds,
            entries: Vec::new(),
            children: None,
            level,
        }
    }

    /// Check if this node is a leaf (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Drop every entry and child, leaving an empty leaf
    pub fn clear(&mut self) {
        self.entries.clear();
        self.children = None;
    }

    /// Quadrant (0-3) that fully contains `bounds`, if any
    ///
    /// Layout: 0 top-left, 1 top-right, 2 bottom-left, 3 bottom-right.
    pub fn quadrant_index(&self, bounds: &Aabb2) -> Option<usize> {
        quadrant_for(&self.bounds, bounds)
    }

    /// Materialize the four child quadrants one level down
    pub fn split(&mut self) {
        if self.children.is_some() {
            return;
        }
        let level = self.level + 1;
        let [top_left, top_right, bottom_left, bottom_right] = self.bounds.quadrants();
        self.children = Some(Box::new([
            QuadTreeNode::new(top_left, level),
            QuadTreeNode::new(top_right, level),
            QuadTreeNode::new(bottom_left, level),
            QuadTreeNode::new(bottom_right, level),
        ]));
    }

    /// Insert an entry into this node or the child quadrant that fully contains it
    pub fn insert(&mut self, entry: QuadTreeEntry, config: &QuadTreeConfig) {
        let index = self.quadrant_index(&entry.bounds);
        if let (Some(children), Some(index)) = (self.children.as_mut(), index) {
            children[index].insert(entry, config);
            return;
        }

        self.entries.push(entry);

        if self.entries.len() > config.max_objects && self.level < config.max_levels {
            self.split();
            self.push_entries_down(config);
        }
    }

    /// Move every stored entry that fits a single quadrant into that quadrant
    fn push_entries_down(&mut self, config: &QuadTreeConfig) {
        let node_bounds = self.bounds;
        let Some(children) = self.children.as_mut() else {
            return;
        };

        let entries = std::mem::take(&mut self.entries);
        for entry in entries {
            match quadrant_for(&node_bounds, &entry.bounds) {
                Some(index) => children[index].insert(entry, config),
                None => self.entries.push(entry),
            }
        }
    }

    /// Collect entries at this node and in every child quadrant overlapping `query`
    pub fn retrieve(&self, query: &Aabb2, results: &mut Vec<QuadTreeEntry>) {
        results.extend_from_slice(&self.entries);

        if let Some(ref children) = self.children {
            for child in children.iter() {
                if child.bounds.intersects(query) {
                    child.retrieve(query, results);
                }
            }
        }
    }

    /// Count total entries in this node and all children
    pub fn count_entries(&self) -> usize {
        let mut count = self.entries.len();

        if let Some(ref children) = self.children {
            for child in children.iter() {
                count += child.count_entries();
            }
        }

        count
    }

    /// Deepest level reached below (and including) this node
    pub fn depth(&self) -> u32 {
        self.children
            .as_ref()
            .map_or(self.level, |children| children.iter().map(QuadTreeNode::depth).max().unwrap_or(self.level))
    }

    /// Get all leaf nodes (for visualization)
    pub fn get_all_leaves<'a>(&'a self, leaves: &mut Vec<&'a QuadTreeNode>) {
        if self.is_leaf() {
            leaves.push(self);
        } else if let Some(ref children) = self.children {
            for child in children.iter() {
                child.get_all_leaves(leaves);
            }
        }
    }
}

fn quadrant_for(node_bounds: &Aabb2, bounds: &Aabb2) -> Option<usize> {
    node_bounds.quadrants().iter().position(|quadrant| quadrant.contains(bounds))
}

/// Quadtree spatial partitioning structure
#[derive(Debug, Clone)]
pub struct QuadTree {
    /// Root node covering the play-field
    pub root: QuadTreeNode,

    /// Configuration
    config: QuadTreeConfig,
}

impl QuadTree {
    /// Create a new quadtree covering `world_bounds`
    pub fn new(world_bounds: Aabb2, config: QuadTreeConfig) -> Self {
        Self {
            root: QuadTreeNode::new(world_bounds, 0),
            config,
        }
    }

    /// Insert an entity with its current bounding box
    pub fn insert(&mut self, id: Entity, bounds: Aabb2) {
        self.root.insert(QuadTreeEntry { id, bounds }, &self.config);
    }

    /// Entries whose node overlaps `query`
    ///
    /// This is a conservative candidate set: it never omits an entry whose box
    /// intersects `query`, but may include entries that do not. Each entry
    /// appears at most once per call.
    pub fn retrieve(&self, query: &Aabb2) -> Vec<QuadTreeEntry> {
        let mut results = Vec::new();
        self.root.retrieve(query, &mut results);
        results
    }

    /// Get total entry count
    pub fn entity_count(&self) -> usize {
        self.root.count_entries()
    }

    /// Deepest level currently materialized
    pub fn depth(&self) -> u32 {
        self.root.depth()
    }

    /// Get all leaf nodes (for visualization)
    pub fn get_all_leaves(&self) -> Vec<&QuadTreeNode> {
        let mut leaves = Vec::new();
        self.root.get_all_leaves(&mut leaves);
        leaves
    }

    /// Bounds covered by the root node
    pub fn bounds(&self) -> Aabb2 {
        self.root.bounds
    }

    /// Get the configuration
    pub fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    /// Clear the quadtree back to an empty root leaf
    pub fn clear(&mut self) {
        self.root.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;

    fn field() -> Aabb2 {
        Aabb2::new(Vec2::zeros(), Vec2::new(800.0, 600.0))
    }

    fn square(x: f32, y: f32, half: f32) -> Aabb2 {
        Aabb2::from_center_extents(Vec2::new(x, y), Vec2::new(half, half))
    }

    #[test]
    fn test_quadtree_basic_insertion() {
        let mut tree = QuadTree::new(field(), QuadTreeConfig::default());
        tree.insert(Entity::new(0), square(100.0, 100.0, 5.0));
        assert_eq!(tree.entity_count(), 1);
        assert!(tree.root.is_leaf());
    }

    #[test]
    fn test_split_happens_only_above_capacity() {
        let config = QuadTreeConfig { max_objects: 4, max_levels: 5 };
        let mut tree = QuadTree::new(field(), config);

        for i in 0..4 {
            tree.insert(Entity::new(i), square(50.0 + i as f32 * 10.0, 50.0, 2.0));
        }
        assert!(tree.root.is_leaf());

        tree.insert(Entity::new(4), square(700.0, 500.0, 2.0));
        let children = tree.root.children.as_ref().expect("root should have split");
        assert_eq!(children[0].level, 1);
        assert_eq!(children[0].entries.len(), 4);
        assert_eq!(children[3].entries.len(), 1);
        assert!(tree.root.entries.is_empty());
        assert_eq!(tree.entity_count(), 5);
    }

    #[test]
    fn test_straddling_entry_stays_at_parent() {
        let config = QuadTreeConfig { max_objects: 1, max_levels: 5 };
        let mut tree = QuadTree::new(field(), config);

        tree.insert(Entity::new(0), square(400.0, 300.0, 10.0));
        tree.insert(Entity::new(1), square(100.0, 100.0, 5.0));

        assert!(tree.root.children.is_some());
        assert_eq!(tree.root.entries.len(), 1);
        assert_eq!(tree.root.entries[0].id, Entity::new(0));
    }

    #[test]
    fn test_max_levels_caps_subdivision() {
        let config = QuadTreeConfig { max_objects: 1, max_levels: 2 };
        let mut tree = QuadTree::new(field(), config);

        for i in 0..50 {
            tree.insert(Entity::new(i), square(10.0, 10.0, 1.0));
        }

        assert_eq!(tree.entity_count(), 50);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_clear_resets_to_leaf() {
        let config = QuadTreeConfig { max_objects: 1, max_levels: 3 };
        let mut tree = QuadTree::new(field(), config);
        for i in 0..10 {
            tree.insert(Entity::new(i), square(20.0 * i as f32 + 5.0, 30.0, 2.0));
        }
        tree.clear();
        assert!(tree.root.is_leaf());
        assert_eq!(tree.entity_count(), 0);
        assert!(tree.retrieve(&field()).is_empty());
    }

    #[test]
    fn test_retrieve_has_no_false_negatives() {
        let config = QuadTreeConfig { max_objects: 2, max_levels: 4 };
        let mut tree = QuadTree::new(field(), config);

        // Deterministic spread, including boxes hanging off the field edges
        let boxes: Vec<(Entity, Aabb2)> = (0..60u32)
            .map(|i| {
                let x = ((i * 137) % 840) as f32 - 20.0;
                let y = ((i * 71) % 640) as f32 - 20.0;
                let half = (i % 5) as f32 * 6.0;
                (Entity::new(i), square(x, y, half))
            })
            .collect();
        for (id, bounds) in &boxes {
            tree.insert(*id, *bounds);
        }

        let queries = [
            square(400.0, 300.0, 1.0),
            square(0.0, 0.0, 30.0),
            square(790.0, 590.0, 40.0),
            square(200.0, 450.0, 120.0),
            Aabb2::new(Vec2::new(-50.0, 280.0), Vec2::new(-10.0, 320.0)),
        ];

        for query in &queries {
            let found: Vec<Entity> = tree.retrieve(query).iter().map(|e| e.id).collect();
            for (id, bounds) in &boxes {
                if bounds.intersects(query) {
                    assert!(found.contains(id), "{id} missing for query {query:?}");
                }
            }
        }
    }

    #[test]
    fn test_degenerate_bounds_are_indexed() {
        let mut tree = QuadTree::new(field(), QuadTreeConfig::default());
        let point = Aabb2::new(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0));
        tree.insert(Entity::new(3), point);
        let found = tree.retrieve(&square(10.0, 10.0, 1.0));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, Entity::new(3));
    }
}
