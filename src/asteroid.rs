//! Drifting bodies.
//!
//! A body is either `Large` (slow) or `Small` (fast).  Getting shot turns a
//! large body into a small one in place; what happens to small bodies is the
//! controller's business.

use rand::Rng;

use crate::compute::wrap_toroidal;
use crate::config::{AsteroidConfig, FieldConfig};
use crate::entities::{Tier, Vec2};

#[derive(Clone, Debug)]
pub struct Asteroid {
    pub pos: Vec2,
    heading: Vec2,
    speed: f32,
    tier: Tier,
    /// Set while the body overlaps the ship after having damaged it.
    damage_latch: bool,
    cfg: AsteroidConfig,
    field: FieldConfig,
}

impl Asteroid {
    /// A body of `tier` with random motion.  Large bodies also get a random
    /// position; small ones start at the origin and are meant to be placed
    /// with [`Asteroid::spawn_at`].
    pub fn new(tier: Tier, cfg: AsteroidConfig, field: FieldConfig, rng: &mut impl Rng) -> Self {
        let mut body = Self {
            pos: Vec2::default(),
            heading: Vec2::default(),
            speed: 0.0,
            tier,
            damage_latch: false,
            cfg,
            field,
        };
        body.initialize(tier, rng);
        body
    }

    /// A body of `tier` placed at `pos`.
    pub fn spawn_at(
        tier: Tier,
        pos: Vec2,
        cfg: AsteroidConfig,
        field: FieldConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let mut body = Self::new(tier, cfg, field, rng);
        body.pos = pos;
        body
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn heading(&self) -> Vec2 {
        self.heading
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn radius(&self) -> f32 {
        match self.tier {
            Tier::Large => self.cfg.large_radius,
            Tier::Small => self.cfg.small_radius,
        }
    }

    pub fn damage_latched(&self) -> bool {
        self.damage_latch
    }

    pub fn set_damage_latch(&mut self, latched: bool) {
        self.damage_latch = latched;
    }

    /// Re-roll motion for `tier`.
    ///
    /// Each heading component is drawn independently from [0, 1], so bodies
    /// only ever drift right and down and favour diagonals.  Large bodies are
    /// also moved to a random spot, and get `spike_multiplier` times their
    /// speed when the heading lands in the narrow near-horizontal band.
    pub fn initialize(&mut self, tier: Tier, rng: &mut impl Rng) {
        self.tier = tier;
        self.heading = Vec2::new(rng.gen_range(0.0..=1.0), rng.gen_range(0.0..=1.0));

        let (lo, hi) = match tier {
            Tier::Large => self.cfg.large_speed,
            Tier::Small => self.cfg.small_speed,
        };
        let base = rng.gen_range(lo..=hi) * self.cfg.speed_factor;

        match tier {
            Tier::Small => self.speed = base,
            Tier::Large => {
                self.pos = Vec2::new(
                    rng.gen_range(0.0..=self.field.width),
                    rng.gen_range(0.0..=self.field.height),
                );
                self.speed = spiked_speed(&self.cfg, self.heading, base);
            }
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos = self.pos + self.heading * (self.speed * dt);
        self.pos = wrap_toroidal(
            self.pos,
            self.field.width,
            self.field.height,
            self.field.body_wrap_margin,
        );
    }

    /// Swap tiers in place: large becomes small, small becomes large.
    pub fn shrink(&mut self, rng: &mut impl Rng) {
        let next = match self.tier {
            Tier::Large => Tier::Small,
            Tier::Small => Tier::Large,
        };
        self.initialize(next, rng);
    }
}

/// Speed for a large body after the near-horizontal spike is applied.
pub fn spiked_speed(cfg: &AsteroidConfig, heading: Vec2, speed: f32) -> f32 {
    if heading.x < cfg.spike_heading_x && heading.y < cfg.spike_heading_y {
        speed * cfg.spike_multiplier
    } else {
        speed
    }
}
