use asteroids::asteroid::{spiked_speed, Asteroid};
use asteroids::config::{AsteroidConfig, GameConfig};
use asteroids::entities::{Tier, Vec2};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn make(tier: Tier, rng: &mut StdRng) -> Asteroid {
    let cfg = GameConfig::default();
    Asteroid::new(tier, cfg.asteroids, cfg.field, rng)
}

fn make_at(tier: Tier, pos: Vec2) -> Asteroid {
    let cfg = GameConfig::default();
    Asteroid::spawn_at(tier, pos, cfg.asteroids, cfg.field, &mut seeded_rng())
}

// ── initialize ────────────────────────────────────────────────────────────────

#[test]
fn large_bodies_roll_slow_speed_and_random_position() {
    let mut rng = seeded_rng();
    for _ in 0..2000 {
        let a = make(Tier::Large, &mut rng);
        let h = a.heading();
        assert!((0.0..=1.0).contains(&h.x) && (0.0..=1.0).contains(&h.y));
        assert!((0.0..=800.0).contains(&a.pos.x) && (0.0..=800.0).contains(&a.pos.y));

        let spiked = h.x < 0.02 && h.y < 0.1;
        let (lo, hi) = if spiked { (1.5, 2.5) } else { (0.15, 0.25) };
        assert!(
            a.speed() >= lo - 1e-5 && a.speed() <= hi + 1e-5,
            "speed {} outside [{lo}, {hi}] for heading {h:?}",
            a.speed()
        );
    }
}

#[test]
fn small_bodies_roll_fast_speed() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let a = make(Tier::Small, &mut rng);
        assert!((0.35..=0.40).contains(&a.speed()));
        assert_eq!(a.radius(), 15.0);
    }
}

#[test]
fn small_tier_is_always_faster_than_unspiked_large_tier() {
    let cfg = AsteroidConfig::default();
    assert!(cfg.small_speed.0 > cfg.large_speed.1);
}

#[test]
fn spike_applies_only_inside_near_horizontal_band() {
    let cfg = AsteroidConfig::default();
    assert!((spiked_speed(&cfg, Vec2::new(0.01, 0.05), 0.2) - 2.0).abs() < 1e-5);
    assert_eq!(spiked_speed(&cfg, Vec2::new(0.01, 0.2), 0.2), 0.2);
    assert_eq!(spiked_speed(&cfg, Vec2::new(0.5, 0.01), 0.2), 0.2);
}

// ── shrink ────────────────────────────────────────────────────────────────────

#[test]
fn shrinking_large_body_keeps_its_position() {
    let mut rng = seeded_rng();
    let mut a = make_at(Tier::Large, Vec2::new(120.0, 640.0));
    a.shrink(&mut rng);
    assert_eq!(a.tier(), Tier::Small);
    assert_eq!(a.pos, Vec2::new(120.0, 640.0));
    assert!((0.35..=0.40).contains(&a.speed()));
}

#[test]
fn shrinking_small_body_grows_it_back() {
    let mut rng = seeded_rng();
    let mut a = make_at(Tier::Small, Vec2::new(120.0, 640.0));
    a.shrink(&mut rng);
    assert_eq!(a.tier(), Tier::Large);
    assert_eq!(a.radius(), 30.0);
}

// ── advance ───────────────────────────────────────────────────────────────────

#[test]
fn advance_moves_by_heading_times_speed() {
    let mut a = make_at(Tier::Small, Vec2::new(100.0, 100.0));
    let h = a.heading();
    let v = a.speed();
    a.advance(10.0);
    assert!((a.pos.x - (100.0 + h.x * v * 10.0)).abs() < 1e-3);
    assert!((a.pos.y - (100.0 + h.y * v * 10.0)).abs() < 1e-3);
}

#[test]
fn advance_wraps_with_asymmetric_margins() {
    let mut a = make_at(Tier::Small, Vec2::new(1100.0, 400.0));
    a.advance(0.0);
    assert_eq!(a.pos, Vec2::new(0.0, 400.0));

    a.pos = Vec2::new(400.0, -250.0);
    a.advance(0.0);
    assert_eq!(a.pos, Vec2::new(400.0, 800.0));
}

#[test]
fn advance_does_not_wrap_inside_margin() {
    let mut a = make_at(Tier::Small, Vec2::new(950.0, -150.0));
    a.advance(0.0);
    assert_eq!(a.pos, Vec2::new(950.0, -150.0));
}

#[test]
fn new_body_has_clear_damage_latch() {
    let a = make_at(Tier::Large, Vec2::new(0.0, 0.0));
    assert!(!a.damage_latched());
}
