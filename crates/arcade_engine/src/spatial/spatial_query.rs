//! Abstract spatial query interface for broad-phase collision detection
//!
//! Lets the collision manager work against any partitioning scheme that can be
//! rebuilt from a snapshot of bounding boxes and queried by region.

use crate::ecs::Entity;
use crate::foundation::math::Aabb2;
use crate::spatial::QuadTree;

/// Abstract interface for spatial partitioning used in broad-phase collision detection
///
/// Implementations are rebuilt from scratch each tick: `clear`, then `insert`
/// every live entity, then `query` as often as needed. A query may return
/// candidates that do not actually overlap, but must never omit one that does.
pub trait SpatialQuery {
    /// Remove every entity from the structure
    fn clear(&mut self);

    /// Insert an entity with its current bounding box
    fn insert(&mut self, entity: Entity, bounds: Aabb2);

    /// Candidate entities whose boxes may intersect `bounds`
    fn query(&self, bounds: &Aabb2) -> Vec<Entity>;

    /// Get the number of entities in the structure
    fn entity_count(&self) -> usize;
}

impl SpatialQuery for QuadTree {
    fn clear(&mut self) {
        QuadTree::clear(self);
    }

    fn insert(&mut self, entity: Entity, bounds: Aabb2) {
        QuadTree::insert(self, entity, bounds);
    }

    fn query(&self, bounds: &Aabb2) -> Vec<Entity> {
        self.retrieve(bounds).into_iter().map(|entry| entry.id).collect()
    }

    fn entity_count(&self) -> usize {
        QuadTree::entity_count(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use crate::spatial::QuadTreeConfig;

    #[test]
    fn test_spatial_query_through_trait_object() {
        let bounds = Aabb2::new(Vec2::zeros(), Vec2::new(100.0, 100.0));
        let mut spatial: Box<dyn SpatialQuery> = Box::new(QuadTree::new(bounds, QuadTreeConfig::default()));

        spatial.insert(Entity::new(1), Aabb2::from_center_extents(Vec2::new(10.0, 10.0), Vec2::new(2.0, 2.0)));
        assert_eq!(spatial.entity_count(), 1);
        assert_eq!(spatial.query(&bounds), vec![Entity::new(1)]);

        spatial.clear();
        assert_eq!(spatial.entity_count(), 0);
    }
}
