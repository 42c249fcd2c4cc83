//! Entity lifecycle orchestration
//!
//! [`GameWorld`] owns the single ordered collection of live objects. The ship
//! sits in slot 0 for the whole session and is never reaped; everything after
//! it is asteroids and projectiles in spawn order.
//!
//! A tick runs in two phases. Phase 1 updates every object, runs collision
//! detection on a snapshot of the collection, calls `collide()` on the
//! flagged objects and plans a worklist of splits and reaps while only
//! reading the collection. Phase 2 applies the worklist: children are
//! appended with fresh ids, then destroyed objects are removed.

use std::collections::HashSet;

use arcade_engine::ecs::{Entity, EntityAllocator};
use arcade_engine::foundation::math::Vec2;
use arcade_engine::physics::{Collider, CollisionManager};
use arcade_engine::spatial::QuadTree;
use rand::rngs::StdRng;
use rand::Rng;

use crate::components::{AsteroidSize, ObjectType};
use crate::config::GameConfig;
use crate::display::DisplayManager;
use crate::game_object::GameObject;
use crate::input::ShipControls;

/// Slot of the ship in the object collection
const SHIP_SLOT: usize = 0;

/// Heading offsets of the two children of a split asteroid
const SPLIT_OFFSETS: [f32; 2] = [90.0, -90.0];

/// Deferred change to the object collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    /// Spawn the children of a destroyed asteroid
    Split(Entity),
    /// Remove a destroyed object
    Reap(Entity),
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Overlapping pairs found
    pub collisions: usize,
    /// Objects spawned by splits, in spawn order
    pub spawned: Vec<Entity>,
    /// Objects removed
    pub reaped: Vec<Entity>,
    /// The ship is destroyed at the end of the tick
    pub ship_destroyed: bool,
}

/// The live object collection and the rules that grow and shrink it
pub struct GameWorld {
    config: GameConfig,
    objects: Vec<GameObject>,
    ids: EntityAllocator,
    rng: StdRng,
    display: DisplayManager,
    collisions: CollisionManager,
}

impl GameWorld {
    /// Create a world with the ship at the spawn point and the starting asteroids
    pub fn new(config: GameConfig, rng: StdRng) -> Self {
        let display = DisplayManager::new(config.field.size(), config.gameplay.spawn_safe_radius);
        let collisions = CollisionManager::new(Box::new(QuadTree::new(config.field.bounds(), config.spatial)));

        let mut ids = EntityAllocator::new();
        let ship = GameObject::ship(ids.allocate(), display.player_spawn(), &config.ship);

        let mut world = Self {
            config,
            objects: vec![ship],
            ids,
            rng,
            display,
            collisions,
        };
        world.spawn_asteroids(world.config.gameplay.starting_asteroids);
        world
    }

    /// Game configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play-field geometry
    pub fn display(&self) -> &DisplayManager {
        &self.display
    }

    /// Every live object, ship first
    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    /// The player's ship
    pub fn ship(&self) -> &GameObject {
        &self.objects[SHIP_SLOT]
    }

    fn ship_mut(&mut self) -> &mut GameObject {
        &mut self.objects[SHIP_SLOT]
    }

    /// Look up a live object
    pub fn get(&self, id: Entity) -> Option<&GameObject> {
        self.objects.iter().find(|object| object.id() == id)
    }

    /// Look up a live object for modification
    pub fn get_mut(&mut self, id: Entity) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|object| object.id() == id)
    }

    /// Number of live objects, ship included
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Always false: the ship is never removed
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of live objects of one type
    pub fn count(&self, object_type: ObjectType) -> usize {
        self.objects.iter().filter(|object| object.object_type() == object_type).count()
    }

    /// The id the next spawn will get
    pub fn next_id(&self) -> Entity {
        self.ids.peek()
    }

    /// Spawn `count` large asteroids at random clear positions with random headings
    pub fn spawn_asteroids(&mut self, count: u32) {
        let radius = self.config.gameplay.asteroid_radius(AsteroidSize::Large);
        for _ in 0..count {
            let position = self.display.valid_asteroid_position(&mut self.rng, radius, &self.objects);
            let rotation = self.rng.gen_range(0.0..360.0);
            self.spawn_asteroid(AsteroidSize::Large, position, rotation);
        }
    }

    /// Spawn one asteroid and return its id
    pub fn spawn_asteroid(&mut self, size: AsteroidSize, position: Vec2, rotation: f32) -> Entity {
        let id = self.ids.allocate();
        self.objects.push(GameObject::asteroid(id, size, position, rotation, &self.config.gameplay));
        id
    }

    /// Spawn a projectile owned by the ship and return its id
    pub fn spawn_projectile(&mut self, position: Vec2, rotation: f32) -> Entity {
        let id = self.ids.allocate();
        let ship = self.ship();
        let projectile =
            GameObject::projectile(id, ship.id(), rotation, ship.velocity(), position, &self.config.projectile);
        self.objects.push(projectile);
        id
    }

    /// Feed this frame's held controls to the ship
    ///
    /// Returns true when a shot was fired.
    pub fn apply_controls(&mut self, controls: &ShipControls) -> bool {
        if self.ship().is_destroyed() {
            return false;
        }
        let ship_config = self.config.ship.clone();
        let ship = self.ship_mut();

        if controls.thrust_forward {
            ship.engage_thrusters(1.0);
        }
        if controls.thrust_reverse {
            ship.engage_thrusters(-ship_config.reverse_thrust);
        }
        if controls.rotate_left {
            ship.rotate(-ship_config.rotation_speed);
        }
        if controls.rotate_right {
            ship.rotate(ship_config.rotation_speed);
        }

        if controls.fire && ship.fire_weapon(ship_config.gun_sound_duration) {
            let (muzzle, rotation) = (ship.muzzle(), ship.rotation());
            let id = self.spawn_projectile(muzzle, rotation);
            log::debug!("Ship fired projectile {id}");
            return true;
        }
        false
    }

    /// Advance the world by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> TickReport {
        let field_size = self.display.view_size();
        for object in &mut self.objects {
            object.update(dt, field_size);
        }

        let colliders: Vec<Collider> = self
            .objects
            .iter()
            .filter(|object| !object.is_destroyed())
            .map(GameObject::collider)
            .collect();
        let collisions = self.collisions.detect(&colliders);

        for object in &mut self.objects {
            if collisions.is_flagged(object.id()) {
                object.collide();
            }
            if self.display.off_camera(object.position(), object.radius()) {
                self.display.wrap_object(object);
            }
        }

        let actions = self.plan_lifecycle();
        let (spawned, reaped) = self.apply_lifecycle(&actions);

        TickReport {
            collisions: collisions.pairs.len(),
            spawned,
            reaped,
            ship_destroyed: self.ship().is_destroyed(),
        }
    }

    /// Phase 1: decide what happens to destroyed objects without touching the collection
    pub fn plan_lifecycle(&self) -> Vec<LifecycleAction> {
        let mut actions = Vec::new();
        for object in self.objects.iter().filter(|object| object.is_destroyed()) {
            match object.object_type() {
                ObjectType::Player => {}
                ObjectType::Asteroid => {
                    if object.asteroid_size().and_then(AsteroidSize::split_into).is_some() {
                        actions.push(LifecycleAction::Split(object.id()));
                    }
                    actions.push(LifecycleAction::Reap(object.id()));
                }
                ObjectType::Projectile => actions.push(LifecycleAction::Reap(object.id())),
            }
        }
        actions
    }

    /// Phase 2: spawn split children, then remove reaped objects
    fn apply_lifecycle(&mut self, actions: &[LifecycleAction]) -> (Vec<Entity>, Vec<Entity>) {
        let mut children = Vec::new();
        let mut reaped = HashSet::new();

        for action in actions {
            match *action {
                LifecycleAction::Split(parent) => {
                    let Some(index) = self.objects.iter().position(|object| object.id() == parent) else {
                        continue;
                    };
                    for offset in SPLIT_OFFSETS {
                        let id = self.ids.peek();
                        if let Some(child) = self.objects[index].spawn_child(offset, id, &self.config.gameplay) {
                            self.ids.allocate();
                            children.push(child);
                        }
                    }
                    log::debug!("Asteroid {parent} split");
                }
                LifecycleAction::Reap(id) => {
                    reaped.insert(id);
                }
            }
        }

        let spawned: Vec<Entity> = children.iter().map(GameObject::id).collect();
        self.objects.extend(children);

        let ship = self.ship().id();
        let mut removed = Vec::new();
        self.objects.retain(|object| {
            let reap = object.id() != ship && reaped.contains(&object.id());
            if reap {
                removed.push(object.id());
            }
            !reap
        });
        if !removed.is_empty() {
            log::debug!("Reaped {} object(s)", removed.len());
        }

        (spawned, removed)
    }

    /// Back to the session start: ship revived at the spawn point, fresh asteroids
    pub fn reset(&mut self) {
        let spawn = self.display.player_spawn();
        self.ship_mut().reset_ship(spawn);
        self.objects.truncate(SHIP_SLOT + 1);
        self.ids.reset_to(self.objects.len() as u32);
        self.spawn_asteroids(self.config.gameplay.starting_asteroids);
        log::info!("World reset with {} asteroid(s)", self.count(ObjectType::Asteroid));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;

    fn world() -> GameWorld {
        GameWorld::new(GameConfig::default(), StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_new_world_layout() {
        let world = world();
        assert_eq!(world.len(), 5);
        assert_eq!(world.ship().id(), Entity::new(0));
        assert_eq!(world.ship().object_type(), ObjectType::Player);
        assert_eq!(world.count(ObjectType::Asteroid), 4);
        assert_eq!(world.next_id(), Entity::new(5));
    }

    #[test]
    fn test_plan_does_not_mutate() {
        let mut world = world();
        let rock = world.spawn_asteroid(AsteroidSize::Large, Vec2::new(50.0, 50.0), 0.0);
        world.get_mut(rock).unwrap().collide();

        let before = world.len();
        let actions = world.plan_lifecycle();
        assert_eq!(actions, vec![LifecycleAction::Split(rock), LifecycleAction::Reap(rock)]);
        assert_eq!(world.len(), before);
    }

    #[test]
    fn test_ship_is_never_reaped() {
        let mut world = world();
        world.ship_mut().collide();
        let report = world.tick(0.0);
        assert!(report.ship_destroyed);
        assert_eq!(world.ship().id(), Entity::new(0));
        assert!(world.plan_lifecycle().is_empty());
    }

    #[test]
    fn test_fire_spawns_projectile_at_nose() {
        let mut world = world();
        let fire = ShipControls { fire: true, ..Default::default() };

        assert!(world.apply_controls(&fire));
        let shot = world.objects().last().unwrap();
        assert_eq!(shot.object_type(), ObjectType::Projectile);
        assert_eq!(shot.position(), world.ship().muzzle());
        assert!(shot.velocity().y < 0.0);

        // Held fire does not repeat while the gun sound plays
        assert!(!world.apply_controls(&fire));
        assert_eq!(world.count(ObjectType::Projectile), 1);
    }

    #[test]
    fn test_opposing_thrusters_add_up() {
        let forward = ShipControls { thrust_forward: true, ..Default::default() };
        let both = ShipControls { thrust_forward: true, thrust_reverse: true, ..Default::default() };

        let mut forward_only = world();
        forward_only.apply_controls(&forward);
        forward_only.tick(0.1);

        let mut opposed = world();
        opposed.apply_controls(&both);
        opposed.tick(0.1);

        let reverse_thrust = opposed.config().ship.reverse_thrust;
        let expected = forward_only.ship().velocity().y * (1.0 - reverse_thrust);
        assert!(opposed.ship().velocity().y < 0.0);
        assert_relative_eq!(opposed.ship().velocity().y, expected, epsilon = 1e-4);
    }

    #[test]
    fn test_projectile_ignores_its_ship() {
        let mut world = world();
        let at_ship = world.ship().position();
        world.spawn_projectile(at_ship, 0.0);
        let report = world.tick(0.0);
        assert_eq!(report.collisions, 0);
        assert_eq!(world.count(ObjectType::Projectile), 1);
    }

    #[test]
    fn test_reset_restores_layout_and_ids() {
        let mut world = world();
        world.spawn_asteroid(AsteroidSize::Small, Vec2::new(20.0, 20.0), 0.0);
        world.ship_mut().collide();
        world.reset();

        assert_eq!(world.len(), 5);
        assert!(!world.ship().is_destroyed());
        assert_eq!(world.ship().position(), world.display().player_spawn());
        let ids: Vec<u32> = world.objects().iter().map(|object| object.id().id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }
}
