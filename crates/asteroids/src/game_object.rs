//! Simulated game objects
//!
//! A [`GameObject`] is one entity on the play-field: the ship, an asteroid or
//! a projectile. The common transform, velocity and destroyed flag live on the
//! object; variant-specific state lives in [`ObjectKind`].
//!
//! Every variant follows the same per-tick contract:
//! - [`update`](GameObject::update) integrates and wraps the position, runs
//!   any variant countdowns and recomputes the bounding box.
//! - [`collide`](GameObject::collide) marks the object destroyed. Asteroid
//!   splitting is not done here; the world performs it after all collisions
//!   for the tick have been resolved.

use arcade_engine::ecs::{Entity, Lifetime, MovementComponent};
use arcade_engine::foundation::math::{utils, Aabb2, Vec2};
use arcade_engine::physics::{Collider, CollisionLayers, CollisionShape};

use crate::components::{Asteroid, AsteroidSize, ObjectType, Projectile, Ship};
use crate::config::{GameplayConfig, ProjectileConfig, ShipConfig};

/// Variant-specific state
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    /// The player's ship
    Ship(Ship),
    /// An asteroid
    Asteroid(Asteroid),
    /// A projectile
    Projectile(Projectile),
}

/// A single entity on the play-field
#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
    id: Entity,
    position: Vec2,
    /// Degrees clockwise from up
    rotation: f32,
    movement: MovementComponent,
    radius: f32,
    bounds: Aabb2,
    destroyed: bool,
    kind: ObjectKind,
}

impl GameObject {
    fn new(id: Entity, position: Vec2, rotation: f32, movement: MovementComponent, radius: f32, kind: ObjectKind) -> Self {
        let mut object = Self {
            id,
            position,
            rotation: utils::clamp_degrees(rotation),
            movement,
            radius,
            bounds: Aabb2::new(position, position),
            destroyed: false,
            kind,
        };
        object.refresh_bounds();
        object
    }

    /// Create the player's ship at rest, facing up
    pub fn ship(id: Entity, position: Vec2, config: &ShipConfig) -> Self {
        let ship = Ship::new(config);
        let radius = ship.hull_radius();
        let mut movement = MovementComponent::new();
        movement.set_max_speed(config.max_speed);
        Self::new(id, position, 0.0, movement, radius, ObjectKind::Ship(ship))
    }

    /// Create an asteroid drifting along `rotation` at the configured speed
    pub fn asteroid(id: Entity, size: AsteroidSize, position: Vec2, rotation: f32, config: &GameplayConfig) -> Self {
        let velocity = utils::heading(rotation) * config.asteroid_speed;
        Self::new(
            id,
            position,
            rotation,
            MovementComponent::with_velocity(velocity),
            config.asteroid_radius(size),
            ObjectKind::Asteroid(Asteroid { size }),
        )
    }

    /// Create a projectile leaving `muzzle` along `rotation`, inheriting the shooter's velocity
    pub fn projectile(
        id: Entity,
        owner: Entity,
        rotation: f32,
        shooter_velocity: Vec2,
        muzzle: Vec2,
        config: &ProjectileConfig,
    ) -> Self {
        let velocity = utils::heading(rotation) * config.speed + shooter_velocity;
        Self::new(
            id,
            muzzle,
            rotation,
            MovementComponent::with_velocity(velocity),
            config.radius,
            ObjectKind::Projectile(Projectile {
                lifetime: Lifetime::new(config.lifetime),
                owner,
            }),
        )
    }

    /// Get the entity id
    pub fn id(&self) -> Entity {
        self.id
    }

    /// Variant tag
    pub fn object_type(&self) -> ObjectType {
        match self.kind {
            ObjectKind::Ship(_) => ObjectType::Player,
            ObjectKind::Asteroid(_) => ObjectType::Asteroid,
            ObjectKind::Projectile(_) => ObjectType::Projectile,
        }
    }

    /// Variant-specific state
    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    /// Current position in play-field space
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current rotation in degrees, in `[0, 360)`
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Unit vector the object is facing
    pub fn heading(&self) -> Vec2 {
        utils::heading(self.rotation)
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec2 {
        self.movement.velocity
    }

    /// Bounding radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Axis-aligned bounds as of the last update
    pub fn bounds(&self) -> Aabb2 {
        self.bounds
    }

    /// Whether the object has been destroyed this tick or earlier
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Size class, for asteroids only
    pub fn asteroid_size(&self) -> Option<AsteroidSize> {
        match &self.kind {
            ObjectKind::Asteroid(asteroid) => Some(asteroid.size),
            _ => None,
        }
    }

    /// Ship state, for the ship only
    pub fn as_ship(&self) -> Option<&Ship> {
        match &self.kind {
            ObjectKind::Ship(ship) => Some(ship),
            _ => None,
        }
    }

    fn as_ship_mut(&mut self) -> Option<&mut Ship> {
        match &mut self.kind {
            ObjectKind::Ship(ship) => Some(ship),
            _ => None,
        }
    }

    /// Advance the object by `dt` seconds on a field of `field_size`
    pub fn update(&mut self, dt: f32, field_size: Vec2) {
        let heading = self.heading();
        match &mut self.kind {
            ObjectKind::Ship(ship) => {
                if ship.thrust != 0.0 {
                    self.movement.add_velocity(heading * ship.acceleration * ship.thrust * dt);
                    ship.thrust = 0.0;
                }
                if ship.angular_velocity != 0.0 {
                    self.rotation = utils::clamp_degrees(self.rotation + ship.angular_velocity * dt);
                    ship.angular_velocity = 0.0;
                }
                ship.gun_sound_remaining = (ship.gun_sound_remaining - dt).max(0.0);
            }
            ObjectKind::Projectile(projectile) => {
                if projectile.lifetime.tick(dt) {
                    self.destroyed = true;
                }
            }
            ObjectKind::Asteroid(_) => {}
        }

        self.position = self.movement.integrate(self.position, dt, field_size);
        self.refresh_bounds();
    }

    /// React to a collision flagged this tick
    pub fn collide(&mut self) {
        log::debug!("{:?} {} collided", self.object_type(), self.id);
        self.destroyed = true;
    }

    /// Teleport the object, keeping its velocity
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
        self.refresh_bounds();
    }

    /// Ship hull in play-field space (ship only)
    pub fn hull_vertices(&self) -> Option<[Vec2; 3]> {
        self.as_ship()
            .map(|ship| ship.hull.map(|vertex| self.position + utils::rotate(vertex, self.rotation)))
    }

    /// Exact shape for narrow-phase tests
    pub fn collision_shape(&self) -> CollisionShape {
        match self.hull_vertices() {
            Some([nose, back_left, back_right]) => CollisionShape::triangle(nose, back_left, back_right),
            None => CollisionShape::circle(self.position, self.radius),
        }
    }

    /// Collision snapshot for this tick
    ///
    /// Ships and projectiles only react to asteroids; asteroids react to both
    /// but never to each other. A projectile never hits the ship that fired it.
    pub fn collider(&self) -> Collider {
        let collider = Collider::new(self.id, self.collision_shape()).with_bounds(self.bounds);
        match &self.kind {
            ObjectKind::Ship(_) => collider.with_layers(CollisionLayers::PLAYER, CollisionLayers::ENEMY),
            ObjectKind::Asteroid(_) => collider.with_layers(
                CollisionLayers::ENEMY,
                CollisionLayers::PLAYER | CollisionLayers::PROJECTILE,
            ),
            ObjectKind::Projectile(projectile) => collider
                .with_layers(CollisionLayers::PROJECTILE, CollisionLayers::ENEMY)
                .with_owner(projectile.owner),
        }
    }

    /// Request thrust for the next update (ship only)
    ///
    /// Requests made in the same frame add up.
    pub fn engage_thrusters(&mut self, direction: f32) {
        if let Some(ship) = self.as_ship_mut() {
            ship.thrust += direction;
        }
    }

    /// Request rotation for the next update (ship only)
    pub fn rotate(&mut self, degrees_per_second: f32) {
        if let Some(ship) = self.as_ship_mut() {
            ship.angular_velocity += degrees_per_second;
        }
    }

    /// Try to fire the ship's gun
    ///
    /// Returns false while the previous shot's sound is still playing, or for
    /// anything that is not a ship.
    pub fn fire_weapon(&mut self, gun_sound_duration: f32) -> bool {
        match self.as_ship_mut() {
            Some(ship) if !ship.is_gun_sound_playing() => {
                ship.gun_sound_remaining = gun_sound_duration;
                true
            }
            _ => false,
        }
    }

    /// Where a projectile leaves the ship: the nose of the hull
    pub fn muzzle(&self) -> Vec2 {
        self.hull_vertices().map_or(self.position, |[nose, _, _]| nose)
    }

    /// Put the ship back at `position`, at rest and facing up
    pub fn reset_ship(&mut self, position: Vec2) {
        if let Some(ship) = self.as_ship_mut() {
            ship.thrust = 0.0;
            ship.angular_velocity = 0.0;
            ship.gun_sound_remaining = 0.0;
        }
        self.rotation = 0.0;
        self.movement.velocity = Vec2::zeros();
        self.destroyed = false;
        self.move_to(position);
    }

    /// Child asteroid one size class down, heading offset from this asteroid's
    ///
    /// Returns `None` for small asteroids and non-asteroids.
    pub fn spawn_child(&self, heading_offset: f32, id: Entity, config: &GameplayConfig) -> Option<GameObject> {
        let size = self.asteroid_size()?.split_into()?;
        Some(GameObject::asteroid(id, size, self.position, self.rotation + heading_offset, config))
    }

    fn refresh_bounds(&mut self) {
        self.bounds = match self.hull_vertices() {
            Some(hull) => Aabb2::from_points(&hull),
            None => Aabb2::from_center_extents(self.position, Vec2::new(self.radius, self.radius)),
        };
    }
}
