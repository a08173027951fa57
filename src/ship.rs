//! The player's ship and its projectile pool.
//!
//! The ship owns a fixed set of projectiles created once at construction.
//! Each one sits in exactly one of two pools: `ready` (available to fire) or
//! `in_flight` (moving and collidable).  Firing, leaving the field and being
//! reclaimed after a hit only move projectiles between the pools, so
//! `ready.len() + in_flight.len()` never changes.

use crate::asteroid::Asteroid;
use crate::compute::{boost_bonus, circles_overlap, heading_to_direction, in_field, wrap_toroidal};
use crate::config::{FieldConfig, ShipConfig};
use crate::constants::{PROJECTILE_PARK_X, PROJECTILE_PARK_Y};
use crate::entities::{MovementState, Projectile, Tier, Vec2};
use crate::error::{GameError, GameResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
}

impl Rotation {
    fn sign(self) -> f32 {
        match self {
            Rotation::Left => -1.0,
            Rotation::Right => 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Ship {
    pub pos: Vec2,
    /// Degrees, 0 = up, clockwise.
    pub heading: f32,
    health: u32,
    score: u32,
    state: MovementState,
    ready: Vec<Projectile>,
    in_flight: Vec<Projectile>,

    // Timers are plain accumulators advanced by `elapse`.
    since_shot_ms: f32,
    first_shot: bool,
    thrust_ms: f32,
    first_boost: bool,

    cfg: ShipConfig,
    field: FieldConfig,
}

impl Ship {
    /// A fresh ship at the centre of the field, pointing up, with a full pool.
    pub fn new(cfg: ShipConfig, field: FieldConfig) -> Self {
        Self {
            pos: Vec2::new(field.width / 2.0, field.height / 2.0),
            heading: 0.0,
            health: cfg.initial_health,
            score: 0,
            state: MovementState::Stationary,
            ready: vec![Projectile::default(); cfg.pool_size],
            in_flight: Vec::with_capacity(cfg.pool_size),
            since_shot_ms: 0.0,
            first_shot: true,
            thrust_ms: 0.0,
            first_boost: true,
            cfg,
            field,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> MovementState {
        self.state
    }

    pub fn ready(&self) -> &[Projectile] {
        &self.ready
    }

    pub fn in_flight(&self) -> &[Projectile] {
        &self.in_flight
    }

    /// Live projectiles, in launch order.  Positions may be edited; the
    /// pools themselves stay owned by the ship.
    pub fn in_flight_mut(&mut self) -> &mut [Projectile] {
        &mut self.in_flight
    }

    pub fn radius(&self) -> f32 {
        self.cfg.radius
    }

    // ── Timers ───────────────────────────────────────────────────────────────

    /// Advance the fire-rate and thrust accumulators by `dt` milliseconds.
    pub fn elapse(&mut self, dt: f32) {
        self.since_shot_ms += dt;
        self.thrust_ms += dt;
    }

    // ── Shooting ─────────────────────────────────────────────────────────────

    /// Launch one projectile from the ready pool.
    ///
    /// Returns `false`, leaving every pool and timer untouched, when the pool
    /// is empty or the previous shot was less than the fire delay ago.
    pub fn fire(&mut self) -> bool {
        if self.ready.is_empty() {
            return false;
        }
        if !self.first_shot && self.since_shot_ms < self.cfg.fire_delay_ms {
            return false;
        }
        let Some(mut projectile) = self.ready.pop() else {
            return false;
        };
        projectile.pos = self.pos;
        projectile.heading = self.heading;
        self.in_flight.push(projectile);

        self.first_shot = false;
        self.since_shot_ms = 0.0;
        self.state = MovementState::Firing;
        true
    }

    /// Return the in-flight projectile at `index` to the ready pool.
    pub fn revive_projectile(&mut self, index: usize) -> GameResult<()> {
        if index >= self.in_flight.len() {
            return Err(GameError::InvalidProjectileIndex {
                index,
                in_flight: self.in_flight.len(),
            });
        }
        let projectile = self.in_flight.remove(index);
        self.ready.push(projectile);
        Ok(())
    }

    /// Move every live projectile and reclaim those that left the field.
    /// Returns how many were reclaimed.
    pub fn advance_projectiles(&mut self, dt: f32) -> usize {
        let step = self.cfg.projectile_speed * dt;
        let (w, h) = (self.field.width, self.field.height);

        let mut reclaimed = 0;
        let mut i = 0;
        while i < self.in_flight.len() {
            let p = &mut self.in_flight[i];
            p.pos = p.pos + heading_to_direction(p.heading) * step;
            if in_field(p.pos, w, h) {
                i += 1;
            } else {
                // Removing in place keeps the survivors in firing order.
                let p = self.in_flight.remove(i);
                self.ready.push(p);
                reclaimed += 1;
            }
        }
        if reclaimed > 0 {
            tracing::debug!(reclaimed, ready = self.ready.len(), "projectiles reclaimed");
        }
        reclaimed
    }

    // ── Movement ─────────────────────────────────────────────────────────────

    /// Enter the thrusting state.  Only the transition out of `Stationary`
    /// restarts the boost window; returns whether that happened.
    pub fn begin_thrust(&mut self) -> bool {
        if self.state != MovementState::Stationary {
            return false;
        }
        self.thrust_ms = 0.0;
        self.state = MovementState::Thrusting;
        true
    }

    pub fn idle(&mut self) {
        self.state = MovementState::Stationary;
    }

    pub fn rotate(&mut self, dt: f32, direction: Rotation) {
        self.heading += direction.sign() * self.cfg.rotation_rate * dt;
    }

    /// Move forward along the heading, then wrap around the field.
    ///
    /// Inside the boost window a bonus tapering from `boost_max` to
    /// `boost_min` is added.  The bonus depends only on how long ago thrust
    /// started, never on `dt`.
    pub fn advance(&mut self, dt: f32) {
        let mut speed = self.cfg.base_speed * dt;
        if self.thrust_ms < self.cfg.boost_duration_ms || self.first_boost {
            speed += boost_bonus(
                self.thrust_ms,
                self.cfg.boost_duration_ms,
                self.cfg.boost_max,
                self.cfg.boost_min,
            );
            self.first_boost = false;
        }
        self.pos = self.pos + heading_to_direction(self.heading) * speed;
        self.pos = wrap_toroidal(
            self.pos,
            self.field.width,
            self.field.height,
            self.field.ship_wrap_margin,
        );
    }

    // ── Collision ────────────────────────────────────────────────────────────

    /// Ship against one body.  Costs one health per continuous overlap: the
    /// body's damage latch is set on the first overlapping frame and cleared
    /// once the two separate.  Returns whether health was lost.
    pub fn check_body_contact(&mut self, body: &mut Asteroid) -> bool {
        if !circles_overlap(self.pos, self.cfg.radius, body.pos, body.radius()) {
            body.set_damage_latch(false);
            return false;
        }
        if self.health == 0 || body.damage_latched() {
            return false;
        }
        self.health -= 1;
        body.set_damage_latch(true);
        tracing::debug!(health = self.health, "ship hit by asteroid");
        true
    }

    /// Live projectiles against one body.
    ///
    /// The first projectile inside the body scores for its tier and is
    /// parked off-field, where the next `advance_projectiles` reclaims it.
    /// A body takes at most one hit per call.  Returns the tier struck.
    pub fn strike(&mut self, body: &Asteroid) -> Option<Tier> {
        let hit = self
            .in_flight
            .iter_mut()
            .find(|p| circles_overlap(p.pos, 0.0, body.pos, body.radius()))?;
        hit.pos = Vec2::new(PROJECTILE_PARK_X, PROJECTILE_PARK_Y);

        let tier = body.tier();
        self.score += tier.points();
        tracing::debug!(?tier, score = self.score, "asteroid hit");
        Some(tier)
    }
}
