//! Core collision detection system
//!
//! Collision detection runs in two phases each tick:
//! 1. Broad phase: every live collider is inserted into a freshly cleared
//!    spatial index, then each collider queries it with its own bounds.
//! 2. Narrow phase: candidates that pass layer filtering are tested with
//!    their exact shapes.
//!
//! The manager never mutates the caller's entities. It works on a snapshot of
//! [`Collider`]s and returns a [`CollisionReport`]; reacting to it (destroying,
//! splitting, reaping) is the caller's job once every query has finished.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::ecs::Entity;
use crate::foundation::math::{Aabb2, Vec2};
use crate::physics::collision::CollisionShape;
use crate::physics::collision_layers::CollisionLayers;
use crate::spatial::SpatialQuery;

/// Collision pair representing two entities that are colliding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollisionPair {
    /// Entity with the smaller id
    pub entity_a: Entity,
    /// Entity with the larger id
    pub entity_b: Entity,
}

impl CollisionPair {
    /// Create a new collision pair (always stores smaller entity ID first for consistency)
    pub fn new(entity_a: Entity, entity_b: Entity) -> Self {
        if entity_a.id() < entity_b.id() {
            Self { entity_a, entity_b }
        } else {
            Self { entity_a: entity_b, entity_b: entity_a }
        }
    }

    /// Check whether `entity` is one side of this pair
    pub fn involves(&self, entity: Entity) -> bool {
        self.entity_a == entity || self.entity_b == entity
    }
}

/// Snapshot of one entity's collision data for a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Entity this collider belongs to
    pub entity: Entity,
    /// Bounding box used for broad-phase indexing
    pub bounds: Aabb2,
    /// Exact shape used for narrow-phase tests
    pub shape: CollisionShape,
    /// Layers this collider lives on
    pub layer: CollisionLayers,
    /// Layers this collider reacts to
    pub mask: CollisionLayers,
    /// Entity that spawned this one; the two never collide with each other
    pub owner: Option<Entity>,
}

impl Collider {
    /// Build a collider from a shape, deriving bounds from it
    pub fn new(entity: Entity, shape: CollisionShape) -> Self {
        Self {
            entity,
            bounds: shape.bounds(),
            shape,
            layer: CollisionLayers::all(),
            mask: CollisionLayers::all(),
            owner: None,
        }
    }

    /// Circular collider
    pub fn circle(entity: Entity, center: Vec2, radius: f32) -> Self {
        Self::new(entity, CollisionShape::circle(center, radius))
    }

    /// Set layer and mask (builder pattern)
    #[must_use]
    pub fn with_layers(mut self, layer: CollisionLayers, mask: CollisionLayers) -> Self {
        self.layer = layer;
        self.mask = mask;
        self
    }

    /// Set the owning entity (builder pattern)
    #[must_use]
    pub fn with_owner(mut self, owner: Entity) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Override the broad-phase bounds (builder pattern)
    #[must_use]
    pub fn with_bounds(mut self, bounds: Aabb2) -> Self {
        self.bounds = bounds;
        self
    }

    /// Layer and ownership filtering for a candidate pair
    pub fn can_collide_with(&self, other: &Collider) -> bool {
        if self.entity == other.entity {
            return false;
        }
        if self.owner == Some(other.entity) || other.owner == Some(self.entity) {
            return false;
        }
        CollisionLayers::should_collide(self.layer, self.mask, other.layer, other.mask)
    }
}

/// Result of one detection pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Every overlapping pair, each reported once
    pub pairs: Vec<CollisionPair>,
    /// Every entity that is part of at least one pair, each listed once
    pub flagged: BTreeSet<Entity>,
    /// Candidate pairs handed to the narrow phase
    pub narrow_phase_tests: usize,
}

impl CollisionReport {
    /// Check whether `entity` needs a collision reaction this tick
    pub fn is_flagged(&self, entity: Entity) -> bool {
        self.flagged.contains(&entity)
    }
}

/// Broad-phase plus narrow-phase collision detection
///
/// Owns the spatial index, which is cleared and rebuilt on every call to
/// [`detect`](Self::detect).
pub struct CollisionManager {
    /// Spatial partitioning structure for broad-phase
    spatial_query: Box<dyn SpatialQuery>,
}

impl CollisionManager {
    /// Create a new collision manager over the given spatial query implementation
    pub fn new(spatial_query: Box<dyn SpatialQuery>) -> Self {
        Self { spatial_query }
    }

    /// Rebuild the index from `colliders` and report every overlapping pair
    pub fn detect(&mut self, colliders: &[Collider]) -> CollisionReport {
        self.rebuild(colliders);

        let by_entity: HashMap<Entity, &Collider> =
            colliders.iter().map(|collider| (collider.entity, collider)).collect();

        let candidates = self.broad_phase(colliders, &by_entity);
        let narrow_phase_tests = candidates.len();
        let pairs = Self::narrow_phase(candidates, &by_entity);

        let flagged = pairs
            .iter()
            .flat_map(|pair| [pair.entity_a, pair.entity_b])
            .collect();

        if !pairs.is_empty() {
            log::trace!("{} collision pair(s) from {} narrow-phase test(s)", pairs.len(), narrow_phase_tests);
        }

        CollisionReport {
            pairs,
            flagged,
            narrow_phase_tests,
        }
    }

    /// Clear the spatial index and insert every collider
    fn rebuild(&mut self, colliders: &[Collider]) {
        self.spatial_query.clear();
        for collider in colliders {
            self.spatial_query.insert(collider.entity, collider.bounds);
        }
    }

    /// Broad-phase: query the index with each collider's bounds
    ///
    /// Candidates are deduplicated per query and pairs are deduplicated
    /// across queries, so each unordered pair is tested at most once.
    fn broad_phase(&self, colliders: &[Collider], by_entity: &HashMap<Entity, &Collider>) -> BTreeSet<CollisionPair> {
        let mut potential_pairs = BTreeSet::new();

        for collider in colliders {
            let mut seen = HashSet::new();
            for candidate in self.spatial_query.query(&collider.bounds) {
                if !seen.insert(candidate) {
                    continue;
                }
                let Some(other) = by_entity.get(&candidate) else {
                    continue;
                };
                if !collider.bounds.intersects(&other.bounds) {
                    continue;
                }
                if collider.can_collide_with(other) {
                    potential_pairs.insert(CollisionPair::new(collider.entity, candidate));
                }
            }
        }

        potential_pairs
    }

    /// Narrow-phase: exact shape tests
    fn narrow_phase(candidates: BTreeSet<CollisionPair>, by_entity: &HashMap<Entity, &Collider>) -> Vec<CollisionPair> {
        candidates
            .into_iter()
            .filter(|pair| {
                match (by_entity.get(&pair.entity_a), by_entity.get(&pair.entity_b)) {
                    (Some(a), Some(b)) => a.shape.intersects(&b.shape),
                    _ => false,
                }
            })
            .collect()
    }

    /// Get spatial query for direct access (e.g., for visualization)
    pub fn spatial_query(&self) -> &dyn SpatialQuery {
        self.spatial_query.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::{QuadTree, QuadTreeConfig};

    fn create_test_manager() -> CollisionManager {
        let bounds = Aabb2::new(Vec2::zeros(), Vec2::new(800.0, 600.0));
        let config = QuadTreeConfig {
            max_objects: 4,
            max_levels: 5,
        };
        CollisionManager::new(Box::new(QuadTree::new(bounds, config)))
    }

    fn rock(id: u32, x: f32, y: f32, radius: f32) -> Collider {
        Collider::circle(Entity::new(id), Vec2::new(x, y), radius)
            .with_layers(CollisionLayers::ENEMY, CollisionLayers::PLAYER | CollisionLayers::PROJECTILE)
    }

    fn bullet(id: u32, x: f32, y: f32, owner: u32) -> Collider {
        Collider::circle(Entity::new(id), Vec2::new(x, y), 1.0)
            .with_layers(CollisionLayers::PROJECTILE, CollisionLayers::ENEMY)
            .with_owner(Entity::new(owner))
    }

    #[test]
    fn test_collision_detection() {
        let mut manager = create_test_manager();
        let colliders = [
            rock(1, 100.0, 100.0, 20.0),
            bullet(2, 110.0, 100.0, 0),
        ];

        let report = manager.detect(&colliders);

        assert_eq!(report.pairs, vec![CollisionPair::new(Entity::new(1), Entity::new(2))]);
        assert!(report.is_flagged(Entity::new(1)));
        assert!(report.is_flagged(Entity::new(2)));
    }

    #[test]
    fn test_layer_filtering() {
        let mut manager = create_test_manager();
        // Overlapping rocks never collide with each other
        let colliders = [rock(1, 100.0, 100.0, 20.0), rock(2, 110.0, 100.0, 20.0)];
        let report = manager.detect(&colliders);
        assert!(report.pairs.is_empty());
        assert!(report.flagged.is_empty());
    }

    #[test]
    fn test_owner_is_ignored() {
        let mut manager = create_test_manager();
        let ship = Collider::circle(Entity::new(0), Vec2::new(50.0, 50.0), 10.0)
            .with_layers(CollisionLayers::all(), CollisionLayers::all());
        let shot = Collider::circle(Entity::new(1), Vec2::new(50.0, 50.0), 1.0)
            .with_layers(CollisionLayers::all(), CollisionLayers::all())
            .with_owner(Entity::new(0));
        let report = manager.detect(&[ship, shot]);
        assert!(report.pairs.is_empty());
    }

    #[test]
    fn test_each_entity_flagged_once() {
        let mut manager = create_test_manager();
        let colliders = [
            rock(1, 300.0, 300.0, 30.0),
            bullet(2, 295.0, 300.0, 0),
            bullet(3, 305.0, 300.0, 0),
            bullet(4, 300.0, 310.0, 0),
        ];
        let report = manager.detect(&colliders);
        assert_eq!(report.pairs.len(), 3);
        assert_eq!(report.flagged.len(), 4);
    }

    #[test]
    fn test_pair_straddling_quadrants_is_found() {
        let mut manager = create_test_manager();
        let mut colliders: Vec<Collider> = (10..30)
            .map(|i| rock(i, 20.0 + (i as f32) * 30.0, 550.0, 5.0))
            .collect();
        // Straddles the vertical split line at x = 400
        colliders.push(rock(1, 400.0, 150.0, 15.0));
        colliders.push(bullet(2, 412.0, 150.0, 0));

        let report = manager.detect(&colliders);
        assert_eq!(report.pairs, vec![CollisionPair::new(Entity::new(1), Entity::new(2))]);
    }

    #[test]
    fn test_degenerate_collider_indexed_but_silent() {
        let mut manager = create_test_manager();
        let colliders = [rock(1, 100.0, 100.0, 20.0), bullet(2, 100.0, 100.0, 0)];
        let mut degenerate = colliders;
        degenerate[1] = Collider::circle(Entity::new(2), Vec2::new(100.0, 100.0), 0.0)
            .with_layers(CollisionLayers::PROJECTILE, CollisionLayers::ENEMY);

        let report = manager.detect(&degenerate);
        assert!(report.pairs.is_empty());
        assert_eq!(manager.spatial_query().entity_count(), 2);
    }
}
