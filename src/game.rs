//! The application controller.
//!
//! `Game` owns the current session (ship + asteroid field), the menu cursor,
//! the top-score table and the score store.  The front-end calls
//! [`Game::step`] once per frame with the elapsed milliseconds and the
//! sampled input, then renders [`Game::snapshot`] and plays whatever
//! [`Game::drain_cues`] hands back.  All randomness comes through the `rng`
//! argument so tests can seed it.

use rand::Rng;

use crate::asteroid::Asteroid;
use crate::compute::insert_top_score;
use crate::config::GameConfig;
use crate::entities::{
    AppState, BodySprite, Cue, Input, Screen, Snapshot, Sprite, Tier, Vec2, MENU_ENTRIES,
    MENU_FIRST_SELECTABLE,
};
use crate::scores::ScoreStore;
use crate::ship::{Rotation, Ship};

/// One play-through: the ship and the bodies it is dodging.
#[derive(Clone, Debug)]
pub struct Session {
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
}

impl Session {
    pub fn new(cfg: &GameConfig, rng: &mut impl Rng) -> Self {
        let asteroids = (0..cfg.asteroids.count)
            .map(|_| Asteroid::new(Tier::Large, cfg.asteroids, cfg.field, rng))
            .collect();
        Self {
            ship: Ship::new(cfg.ship, cfg.field),
            asteroids,
        }
    }
}

/// What one collision pass did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionReport {
    pub ship_hits: u32,
    /// `(index, tier before the hit)` for every body shot this pass, in
    /// iteration order.  Indices refer to the field before replacements.
    pub kills: Vec<(usize, Tier)>,
}

pub struct Game<S: ScoreStore> {
    cfg: GameConfig,
    state: AppState,
    selected: usize,
    session: Option<Session>,
    scores: Vec<u32>,
    scores_loaded: bool,
    store: S,
    cues: Vec<Cue>,
    running: bool,
}

impl<S: ScoreStore> Game<S> {
    pub fn new(cfg: GameConfig, store: S) -> Self {
        Self {
            cfg,
            state: AppState::Menu,
            selected: MENU_FIRST_SELECTABLE,
            session: None,
            scores: Vec::new(),
            scores_loaded: false,
            store,
            cues: Vec::new(),
            running: true,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// Sound cues raised since the last call.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    // ── Session lifecycle ────────────────────────────────────────────────────

    pub fn start_session(&mut self, rng: &mut impl Rng) {
        self.session = Some(Session::new(&self.cfg, rng));
        self.state = AppState::Playing;
        tracing::info!(asteroids = self.cfg.asteroids.count, "session started");
    }

    pub fn end_session(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(score = session.ship.score(), "session ended");
        }
    }

    // ── Frame ────────────────────────────────────────────────────────────────

    /// Advance one frame of `dt` milliseconds.
    pub fn step(&mut self, dt: f32, input: &Input, rng: &mut impl Rng) {
        match self.state {
            AppState::Menu => self.handle_menu(input, rng),
            AppState::ScoreList => self.handle_score_list(input),
            AppState::Playing => self.play_frame(dt, input, rng),
        }
    }

    fn handle_menu(&mut self, input: &Input, rng: &mut impl Rng) {
        if input.menu_up {
            self.cues.push(Cue::Select);
            if self.selected > MENU_FIRST_SELECTABLE {
                self.selected -= 1;
            }
        }
        if input.menu_down {
            self.cues.push(Cue::Select);
            if self.selected + 1 < MENU_ENTRIES.len() {
                self.selected += 1;
            }
        }
        if input.confirm {
            self.cues.push(Cue::Select);
            self.confirm_menu(rng);
        }
    }

    fn confirm_menu(&mut self, rng: &mut impl Rng) {
        match self.selected {
            1 => self.start_session(rng),
            2 => {
                self.load_scores();
                self.state = AppState::ScoreList;
            }
            3 => {
                tracing::info!("exit selected");
                self.running = false;
            }
            // The title line: nothing to do.
            _ => {}
        }
    }

    fn handle_score_list(&mut self, input: &Input) {
        if input.menu_up || input.menu_down {
            self.cues.push(Cue::Select);
        }
        if input.confirm {
            self.cues.push(Cue::Select);
            self.state = AppState::Menu;
        }
    }

    fn play_frame(&mut self, dt: f32, input: &Input, rng: &mut impl Rng) {
        if self.session.is_none() {
            tracing::warn!("playing without a session, returning to menu");
            self.state = AppState::Menu;
            return;
        }
        if self.check_game_over() {
            return;
        }
        self.resolve_collisions(rng);

        let Some(session) = self.session.as_mut() else {
            return;
        };
        let ship = &mut session.ship;
        ship.elapse(dt);

        if input.rotate_left {
            ship.rotate(dt, Rotation::Left);
        }
        if input.rotate_right {
            ship.rotate(dt, Rotation::Right);
        }
        if input.thrust {
            if ship.begin_thrust() {
                self.cues.push(Cue::Thrust);
            }
            ship.advance(dt);
        } else {
            ship.idle();
        }
        if input.fire && ship.fire() {
            self.cues.push(Cue::Shot);
        }

        ship.advance_projectiles(dt);
        for body in &mut session.asteroids {
            body.advance(dt);
        }
    }

    // ── Collisions ───────────────────────────────────────────────────────────

    /// Check the ship and every live projectile against each body in turn.
    ///
    /// A large body that is shot becomes small in place and a second small
    /// body is spawned on top of it.  A small body that is shot is removed
    /// and a fresh small body is appended where it was, so the field size is
    /// unchanged.  Every body shot this pass is handled, not only the last.
    pub fn resolve_collisions(&mut self, rng: &mut impl Rng) -> CollisionReport {
        let mut report = CollisionReport::default();
        let Some(session) = self.session.as_mut() else {
            return report;
        };
        let ship = &mut session.ship;
        // Position and damage latch of each body to spawn.  A replacement
        // inherits the latch so an ongoing overlap keeps costing one health.
        let mut spawns: Vec<(Vec2, bool)> = Vec::new();
        let mut removed: Vec<usize> = Vec::new();

        for (i, body) in session.asteroids.iter_mut().enumerate() {
            if ship.check_body_contact(body) {
                report.ship_hits += 1;
            }
            if ship.in_flight().is_empty() {
                continue;
            }
            let Some(tier) = ship.strike(body) else {
                continue;
            };
            self.cues.push(Cue::Explosion);
            report.kills.push((i, tier));
            spawns.push((body.pos, body.damage_latched()));
            match tier {
                Tier::Large => body.shrink(rng),
                Tier::Small => removed.push(i),
            }
        }

        for &i in removed.iter().rev() {
            session.asteroids.remove(i);
        }
        for (pos, latched) in spawns {
            let mut spawned =
                Asteroid::spawn_at(Tier::Small, pos, self.cfg.asteroids, self.cfg.field, rng);
            spawned.set_damage_latch(latched);
            session.asteroids.push(spawned);
        }
        if !report.kills.is_empty() {
            tracing::debug!(
                kills = report.kills.len(),
                field = session.asteroids.len(),
                "asteroids destroyed"
            );
        }
        report
    }

    // ── Game over & scores ───────────────────────────────────────────────────

    /// End the session once the ship is out of health, recording the score
    /// if it makes the table.  Returns whether the session ended.
    pub fn check_game_over(&mut self) -> bool {
        let score = match &self.session {
            Some(session) if session.ship.health() == 0 => session.ship.score(),
            _ => return false,
        };
        if !self.scores_loaded {
            self.load_scores();
        }
        if insert_top_score(&mut self.scores, score, self.cfg.scores.table_size) {
            tracing::info!(score, table = ?self.scores, "new top score");
            self.save_scores();
        }
        self.end_session();
        self.state = AppState::Menu;
        true
    }

    /// Replace the in-memory table with the persisted one.  Failures leave an
    /// empty table.
    pub fn load_scores(&mut self) {
        let mut scores = match self.store.load() {
            Ok(scores) => scores,
            Err(e) => {
                tracing::warn!("could not load scores: {e}");
                Vec::new()
            }
        };
        scores.sort_by(|a, b| b.cmp(a));
        scores.truncate(self.cfg.scores.table_size);
        self.scores = scores;
        self.scores_loaded = true;
    }

    fn save_scores(&mut self) {
        if let Err(e) = self.store.save(&self.scores) {
            tracing::warn!("could not save scores: {e}");
        }
    }

    // ── Render snapshot ──────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Snapshot {
        let screen = match (self.state, &self.session) {
            (AppState::Playing, Some(session)) => playing_screen(session),
            (AppState::ScoreList, _) => Screen::ScoreList {
                lines: self.score_lines(),
            },
            _ => Screen::Menu {
                entries: MENU_ENTRIES.iter().map(|e| e.to_string()).collect(),
                selected: self.selected,
            },
        };
        Snapshot {
            field_width: self.cfg.field.width,
            field_height: self.cfg.field.height,
            screen,
        }
    }

    fn score_lines(&self) -> Vec<String> {
        let mut lines = vec!["Top Scores:".to_string()];
        for i in 0..self.cfg.scores.table_size {
            lines.push(self.scores.get(i).map(u32::to_string).unwrap_or_default());
        }
        lines.push("Menu".to_string());
        lines
    }
}

fn playing_screen(session: &Session) -> Screen {
    let ship = &session.ship;
    Screen::Playing {
        ship: Sprite {
            pos: ship.pos,
            heading: ship.heading,
        },
        projectiles: ship
            .in_flight()
            .iter()
            .map(|p| Sprite {
                pos: p.pos,
                heading: p.heading,
            })
            .collect(),
        asteroids: session
            .asteroids
            .iter()
            .map(|a| BodySprite {
                pos: a.pos,
                tier: a.tier(),
                radius: a.radius(),
            })
            .collect(),
        hud: [
            format!("Lives: {}", ship.health()),
            format!("Score: {}", ship.score()),
        ],
    }
}
