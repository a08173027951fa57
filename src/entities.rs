//! All game entity types — pure data, no logic beyond tiny accessors.

pub use glam::Vec2;

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A pooled shot.  Whether it is live is decided by which of the ship's two
/// pools holds it, not by a flag on the projectile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    /// Degrees, 0 = up, clockwise.
    pub heading: f32,
}

// ── Asteroid tiers ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Small = 0,
    Large = 1,
}

impl Tier {
    pub fn points(self) -> u32 {
        match self {
            Tier::Large => crate::constants::POINTS_LARGE,
            Tier::Small => crate::constants::POINTS_SMALL,
        }
    }
}

// ── Ship movement ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementState {
    Stationary,
    Thrusting,
    Firing,
}

// ── Application ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Playing,
    ScoreList,
}

/// Index 0 is the title line and can never be selected.
pub const MENU_ENTRIES: [&str; 4] = ["Asteroids", "Play", "Top Score", "Exit"];
pub const MENU_FIRST_SELECTABLE: usize = 1;

/// Fire-and-forget sound triggers, drained by the front-end each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Select,
    Shot,
    Thrust,
    Explosion,
}

/// One frame of player intent.
///
/// `menu_up`, `menu_down` and `confirm` are discrete presses; the rest are
/// held-key states sampled for this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub fire: bool,
    pub menu_up: bool,
    pub menu_down: bool,
    pub confirm: bool,
}

// ── Render snapshot ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub pos: Vec2,
    pub heading: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BodySprite {
    pub pos: Vec2,
    pub tier: Tier,
    pub radius: f32,
}

/// Everything the renderer needs for one frame.  Owned, so the renderer
/// cannot reach back into the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub field_width: f32,
    pub field_height: f32,
    pub screen: Screen,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Menu {
        entries: Vec<String>,
        selected: usize,
    },
    Playing {
        ship: Sprite,
        projectiles: Vec<Sprite>,
        asteroids: Vec<BodySprite>,
        /// "Lives: N" and "Score: N".
        hud: [String; 2],
    },
    ScoreList {
        lines: Vec<String>,
    },
}
