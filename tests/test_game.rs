use asteroids::asteroid::Asteroid;
use asteroids::config::GameConfig;
use asteroids::entities::{AppState, Cue, Input, Screen, Tier, Vec2};
use asteroids::game::Game;
use asteroids::scores::MemoryScoreStore;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn new_game(scores: Vec<u32>) -> Game<MemoryScoreStore> {
    Game::new(GameConfig::default(), MemoryScoreStore::with_scores(scores))
}

fn body(tier: Tier, pos: Vec2) -> Asteroid {
    let cfg = GameConfig::default();
    Asteroid::spawn_at(tier, pos, cfg.asteroids, cfg.field, &mut seeded_rng())
}

fn press_up() -> Input {
    Input { menu_up: true, ..Input::default() }
}

fn press_down() -> Input {
    Input { menu_down: true, ..Input::default() }
}

fn press_confirm() -> Input {
    Input { confirm: true, ..Input::default() }
}

/// A game already in `Playing`, with the field replaced by `bodies`.
fn playing_with(bodies: Vec<Asteroid>, rng: &mut StdRng) -> Game<MemoryScoreStore> {
    let mut g = new_game(Vec::new());
    g.step(0.0, &press_confirm(), rng);
    g.session_mut().unwrap().asteroids = bodies;
    g.drain_cues();
    g
}

/// Six large bodies parked well away from the ship at (400, 400).
fn quiet_field() -> Vec<Asteroid> {
    (0..6)
        .map(|i| body(Tier::Large, Vec2::new(60.0 + 110.0 * i as f32, 80.0)))
        .collect()
}

/// Fire one projectile and drop it exactly on body `index`.
fn shoot_body(g: &mut Game<MemoryScoreStore>, index: usize) {
    let session = g.session_mut().unwrap();
    let target = session.asteroids[index].pos;
    session.ship.elapse(100.0);
    assert!(session.ship.fire());
    let last = session.ship.in_flight().len() - 1;
    session.ship.in_flight_mut()[last].pos = target;
}

// ── menu ──────────────────────────────────────────────────────────────────────

#[test]
fn starts_in_menu_on_play() {
    let g = new_game(Vec::new());
    assert_eq!(g.state(), AppState::Menu);
    assert_eq!(g.selected(), 1);
    assert!(g.is_running());
    assert!(g.session().is_none());
}

#[test]
fn menu_cursor_is_bounded() {
    let mut rng = seeded_rng();
    let mut g = new_game(Vec::new());
    g.step(16.0, &press_up(), &mut rng);
    assert_eq!(g.selected(), 1);
    for _ in 0..5 {
        g.step(16.0, &press_down(), &mut rng);
    }
    assert_eq!(g.selected(), 3);
    g.step(16.0, &press_up(), &mut rng);
    assert_eq!(g.selected(), 2);
}

#[test]
fn menu_presses_emit_select_cue() {
    let mut rng = seeded_rng();
    let mut g = new_game(Vec::new());
    g.step(16.0, &press_down(), &mut rng);
    g.step(16.0, &press_up(), &mut rng);
    assert_eq!(g.drain_cues(), vec![Cue::Select, Cue::Select]);
    assert!(g.drain_cues().is_empty());
}

#[test]
fn confirm_play_starts_fresh_session() {
    let mut rng = seeded_rng();
    let mut g = new_game(Vec::new());
    g.step(16.0, &press_confirm(), &mut rng);

    assert_eq!(g.state(), AppState::Playing);
    let session = g.session().unwrap();
    assert_eq!(session.ship.health(), 3);
    assert_eq!(session.ship.score(), 0);
    assert_eq!(session.asteroids.len(), 6);
    assert!(session.asteroids.iter().all(|a| a.tier() == Tier::Large));
}

#[test]
fn confirm_top_score_shows_persisted_table() {
    let mut rng = seeded_rng();
    let mut g = new_game(vec![10, 50, 30, 5]);
    g.step(16.0, &press_down(), &mut rng);
    g.step(16.0, &press_confirm(), &mut rng);

    assert_eq!(g.state(), AppState::ScoreList);
    assert_eq!(g.scores(), &[50, 30, 10]);
    match g.snapshot().screen {
        Screen::ScoreList { lines } => {
            assert_eq!(lines, vec!["Top Scores:", "50", "30", "10", "Menu"]);
        }
        other => panic!("expected score list, got {other:?}"),
    }
}

#[test]
fn score_list_pads_missing_entries() {
    let mut rng = seeded_rng();
    let mut g = new_game(vec![12]);
    g.step(16.0, &press_down(), &mut rng);
    g.step(16.0, &press_confirm(), &mut rng);
    match g.snapshot().screen {
        Screen::ScoreList { lines } => {
            assert_eq!(lines, vec!["Top Scores:", "12", "", "", "Menu"]);
        }
        other => panic!("expected score list, got {other:?}"),
    }
}

#[test]
fn confirm_in_score_list_returns_to_menu() {
    let mut rng = seeded_rng();
    let mut g = new_game(Vec::new());
    g.step(16.0, &press_down(), &mut rng);
    g.step(16.0, &press_confirm(), &mut rng);
    g.step(16.0, &press_down(), &mut rng);
    assert_eq!(g.state(), AppState::ScoreList);
    g.step(16.0, &press_confirm(), &mut rng);
    assert_eq!(g.state(), AppState::Menu);
}

#[test]
fn confirm_exit_stops_the_game() {
    let mut rng = seeded_rng();
    let mut g = new_game(Vec::new());
    g.step(16.0, &press_down(), &mut rng);
    g.step(16.0, &press_down(), &mut rng);
    g.step(16.0, &press_confirm(), &mut rng);
    assert!(!g.is_running());
}

#[test]
fn menu_snapshot_lists_entries() {
    let g = new_game(Vec::new());
    match g.snapshot().screen {
        Screen::Menu { entries, selected } => {
            assert_eq!(entries, vec!["Asteroids", "Play", "Top Score", "Exit"]);
            assert_eq!(selected, 1);
        }
        other => panic!("expected menu, got {other:?}"),
    }
}

// ── playing: input ────────────────────────────────────────────────────────────

#[test]
fn thrust_cue_only_on_thrust_start() {
    let mut rng = seeded_rng();
    let mut g = playing_with(quiet_field(), &mut rng);
    let thrust = Input { thrust: true, ..Input::default() };
    g.step(16.0, &thrust, &mut rng);
    g.step(16.0, &thrust, &mut rng);
    assert_eq!(g.drain_cues(), vec![Cue::Thrust]);
    assert!(g.session().unwrap().ship.pos.y < 400.0);
}

#[test]
fn fire_input_launches_projectile_with_cue() {
    let mut rng = seeded_rng();
    let mut g = playing_with(quiet_field(), &mut rng);
    let fire = Input { fire: true, ..Input::default() };
    g.step(16.0, &fire, &mut rng);
    g.step(16.0, &fire, &mut rng); // inside the fire delay
    assert_eq!(g.drain_cues(), vec![Cue::Shot]);
    assert_eq!(g.session().unwrap().ship.in_flight().len(), 1);
}

#[test]
fn playing_snapshot_carries_hud_and_entities() {
    let mut rng = seeded_rng();
    let g = playing_with(quiet_field(), &mut rng);
    match g.snapshot().screen {
        Screen::Playing { hud, asteroids, projectiles, ship } => {
            assert_eq!(hud, ["Lives: 3".to_string(), "Score: 0".to_string()]);
            assert_eq!(asteroids.len(), 6);
            assert!(projectiles.is_empty());
            assert_eq!(ship.pos, Vec2::new(400.0, 400.0));
        }
        other => panic!("expected playing, got {other:?}"),
    }
}

// ── playing: collisions ───────────────────────────────────────────────────────

#[test]
fn sustained_overlap_costs_one_health() {
    let mut rng = seeded_rng();
    let mut field = quiet_field();
    field[2].pos = Vec2::new(400.0, 400.0);
    let mut g = playing_with(field, &mut rng);

    for _ in 0..5 {
        g.step(0.0, &Input::default(), &mut rng);
    }
    assert_eq!(g.session().unwrap().ship.health(), 2);

    g.session_mut().unwrap().asteroids[2].pos = Vec2::new(700.0, 700.0);
    g.step(0.0, &Input::default(), &mut rng);
    g.session_mut().unwrap().asteroids[2].pos = Vec2::new(400.0, 400.0);
    g.step(0.0, &Input::default(), &mut rng);
    assert_eq!(g.session().unwrap().ship.health(), 1);
}

#[test]
fn shooting_large_body_splits_it_in_place() {
    let mut rng = seeded_rng();
    let mut g = playing_with(quiet_field(), &mut rng);
    let target = g.session().unwrap().asteroids[1].pos;
    shoot_body(&mut g, 1);

    g.step(0.0, &Input::default(), &mut rng);

    let session = g.session().unwrap();
    assert_eq!(session.ship.score(), 2);
    assert_eq!(session.asteroids.len(), 7);
    assert_eq!(session.asteroids[1].tier(), Tier::Small);
    assert_eq!(session.asteroids[1].pos, target);
    let spawned = session.asteroids.last().unwrap();
    assert_eq!(spawned.tier(), Tier::Small);
    assert_eq!(spawned.pos, target);
    // parked projectile was reclaimed by the same frame's projectile pass
    assert_eq!(session.ship.ready().len(), 5);
    assert_eq!(g.drain_cues(), vec![Cue::Explosion]);
}

#[test]
fn shooting_small_body_replaces_it() {
    let mut rng = seeded_rng();
    let mut field = quiet_field();
    field[3] = body(Tier::Small, Vec2::new(500.0, 650.0));
    let mut g = playing_with(field, &mut rng);
    shoot_body(&mut g, 3);

    g.step(0.0, &Input::default(), &mut rng);

    let session = g.session().unwrap();
    assert_eq!(session.ship.score(), 1);
    assert_eq!(session.asteroids.len(), 6);
    let replacement = session.asteroids.last().unwrap();
    assert_eq!(replacement.tier(), Tier::Small);
    assert_eq!(replacement.pos, Vec2::new(500.0, 650.0));
    let larges = session.asteroids.iter().filter(|a| a.tier() == Tier::Large).count();
    assert_eq!(larges, 5);
}

#[test]
fn every_kill_in_a_frame_is_resolved() {
    let mut rng = seeded_rng();
    let mut field = quiet_field();
    field[0] = body(Tier::Small, Vec2::new(100.0, 600.0));
    field[4] = body(Tier::Small, Vec2::new(600.0, 600.0));
    let mut g = playing_with(field, &mut rng);
    shoot_body(&mut g, 0);
    shoot_body(&mut g, 4);

    let report = g.resolve_collisions(&mut rng);
    assert_eq!(report.kills, vec![(0, Tier::Small), (4, Tier::Small)]);

    let session = g.session().unwrap();
    assert_eq!(session.ship.score(), 2);
    assert_eq!(session.asteroids.len(), 6);
    let smalls: Vec<Vec2> = session
        .asteroids
        .iter()
        .filter(|a| a.tier() == Tier::Small)
        .map(|a| a.pos)
        .collect();
    assert_eq!(smalls, vec![Vec2::new(100.0, 600.0), Vec2::new(600.0, 600.0)]);
}

#[test]
fn ship_hit_and_kill_on_same_body_in_one_frame() {
    let mut rng = seeded_rng();
    let mut field = quiet_field();
    field[0].pos = Vec2::new(400.0, 400.0);
    let mut g = playing_with(field, &mut rng);
    shoot_body(&mut g, 0);

    let report = g.resolve_collisions(&mut rng);
    assert_eq!(report.ship_hits, 1);
    assert_eq!(report.kills, vec![(0, Tier::Large)]);
}

#[test]
fn replacement_for_small_body_on_ship_keeps_damage_latch() {
    let mut rng = seeded_rng();
    let mut field = quiet_field();
    field[2] = body(Tier::Small, Vec2::new(400.0, 400.0));
    let mut g = playing_with(field, &mut rng);
    shoot_body(&mut g, 2);

    for _ in 0..3 {
        g.step(0.0, &Input::default(), &mut rng);
    }
    let session = g.session().unwrap();
    assert_eq!(session.ship.score(), 1);
    assert_eq!(session.asteroids.len(), 6);
    assert_eq!(session.ship.health(), 2);
}

#[test]
fn split_of_large_body_on_ship_costs_one_health() {
    let mut rng = seeded_rng();
    let mut field = quiet_field();
    field[2].pos = Vec2::new(400.0, 400.0);
    let mut g = playing_with(field, &mut rng);
    shoot_body(&mut g, 2);

    for _ in 0..3 {
        g.step(0.0, &Input::default(), &mut rng);
    }
    let session = g.session().unwrap();
    assert_eq!(session.asteroids.len(), 7);
    assert!(session.asteroids[2].damage_latched());
    assert!(session.asteroids.last().unwrap().damage_latched());
    assert_eq!(session.ship.health(), 2);
}

#[test]
fn no_projectiles_means_no_kills() {
    let mut rng = seeded_rng();
    let mut g = playing_with(quiet_field(), &mut rng);
    let report = g.resolve_collisions(&mut rng);
    assert!(report.kills.is_empty());
    assert_eq!(g.session().unwrap().asteroids.len(), 6);
}

// ── game over ─────────────────────────────────────────────────────────────────

/// Put a fresh small body on the ship and run one motionless frame.
fn ram_ship(g: &mut Game<MemoryScoreStore>, rng: &mut StdRng) {
    let pos = g.session().unwrap().ship.pos;
    g.session_mut().unwrap().asteroids = vec![body(Tier::Small, pos)];
    g.step(0.0, &Input::default(), rng);
}

/// Score `points` by shooting a large body `points / 2` times.
fn earn(g: &mut Game<MemoryScoreStore>, points: u32, rng: &mut StdRng) {
    for _ in 0..points / 2 {
        g.session_mut().unwrap().asteroids = vec![body(Tier::Large, Vec2::new(100.0, 100.0))];
        shoot_body(g, 0);
        g.step(0.0, &Input::default(), rng);
    }
}

#[test]
fn three_collisions_end_session_and_record_score() {
    let mut rng = seeded_rng();
    let mut g = Game::new(
        GameConfig::default(),
        MemoryScoreStore::with_scores(vec![50, 30, 10]),
    );
    g.step(0.0, &press_confirm(), &mut rng);
    earn(&mut g, 40, &mut rng);
    assert_eq!(g.session().unwrap().ship.score(), 40);

    for _ in 0..3 {
        ram_ship(&mut g, &mut rng);
    }
    assert_eq!(g.session().unwrap().ship.health(), 0);
    assert_eq!(g.state(), AppState::Playing);

    // the check runs at the start of the next frame
    g.step(0.0, &Input::default(), &mut rng);
    assert_eq!(g.state(), AppState::Menu);
    assert!(g.session().is_none());
    assert_eq!(g.scores(), &[50, 40, 30]);
    assert_eq!(g.store().scores, vec![50, 40, 30]);
    assert_eq!(g.store().saves, 1);
}

#[test]
fn low_score_is_not_persisted() {
    let mut rng = seeded_rng();
    let mut g = Game::new(
        GameConfig::default(),
        MemoryScoreStore::with_scores(vec![50, 30, 10]),
    );
    g.step(0.0, &press_confirm(), &mut rng);
    for _ in 0..3 {
        ram_ship(&mut g, &mut rng);
    }
    g.step(0.0, &Input::default(), &mut rng);

    assert_eq!(g.state(), AppState::Menu);
    assert_eq!(g.store().saves, 0);
    assert_eq!(g.scores(), &[50, 30, 10]);
}

#[test]
fn short_table_accepts_any_score() {
    let mut rng = seeded_rng();
    let mut g = new_game(vec![8]);
    g.step(0.0, &press_confirm(), &mut rng);
    for _ in 0..3 {
        ram_ship(&mut g, &mut rng);
    }
    g.step(0.0, &Input::default(), &mut rng);
    assert_eq!(g.store().scores, vec![8, 0]);
}

#[test]
fn new_session_after_game_over_is_reset() {
    let mut rng = seeded_rng();
    let mut g = new_game(Vec::new());
    g.step(0.0, &press_confirm(), &mut rng);
    earn(&mut g, 4, &mut rng);
    for _ in 0..3 {
        ram_ship(&mut g, &mut rng);
    }
    g.step(0.0, &Input::default(), &mut rng);
    assert_eq!(g.state(), AppState::Menu);

    g.step(0.0, &press_confirm(), &mut rng);
    let session = g.session().unwrap();
    assert_eq!(session.ship.health(), 3);
    assert_eq!(session.ship.score(), 0);
    assert_eq!(session.asteroids.len(), 6);
}
