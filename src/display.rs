//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an owned [`Snapshot`] taken
//! from the game.  No game logic is performed; this module only translates
//! field coordinates into terminal cells and queues crossterm commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use asteroids::entities::{BodySprite, Screen, Snapshot, Sprite, Tier, Vec2};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_SHIP: Color = Color::White;
const C_ASTEROID_LARGE: Color = Color::Grey;
const C_ASTEROID_SMALL: Color = Color::DarkYellow;
const C_PROJECTILE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;
const C_TITLE: Color = Color::Cyan;
const C_SELECTED: Color = Color::Red;
const C_ENTRY: Color = Color::White;
const C_BEST: Color = Color::Green;

// ── Field → terminal mapping ──────────────────────────────────────────────────

/// Maps the play field onto the bordered interior of the terminal:
/// columns `1..width-1`, rows `2..height-2`.
#[derive(Clone, Copy, Debug)]
struct Viewport {
    width: u16,
    height: u16,
    field_width: f32,
    field_height: f32,
}

impl Viewport {
    fn new(width: u16, height: u16, snapshot: &Snapshot) -> Self {
        Self {
            width,
            height,
            field_width: snapshot.field_width,
            field_height: snapshot.field_height,
        }
    }

    /// Terminal cell for a field position, or `None` when it lies outside
    /// the visible field (bodies drift well past the edges before wrapping).
    fn cell(&self, pos: Vec2) -> Option<(u16, u16)> {
        if !(0.0..self.field_width).contains(&pos.x) || !(0.0..self.field_height).contains(&pos.y) {
            return None;
        }
        let cols = self.width.saturating_sub(2).max(1) as f32;
        let rows = self.height.saturating_sub(4).max(1) as f32;
        let col = 1 + (pos.x / self.field_width * cols) as u16;
        let row = 2 + (pos.y / self.field_height * rows) as u16;
        Some((col, row))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snapshot: &Snapshot) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match &snapshot.screen {
        Screen::Menu { entries, selected } => draw_menu(out, width, height, entries, *selected)?,
        Screen::ScoreList { lines } => draw_score_list(out, width, height, lines)?,
        Screen::Playing {
            ship,
            projectiles,
            asteroids,
            hud,
        } => {
            let view = Viewport::new(width, height, snapshot);
            draw_border(out, width, height)?;
            draw_hud(out, width, hud)?;
            for body in asteroids {
                draw_asteroid(out, &view, body)?;
            }
            for projectile in projectiles {
                draw_projectile(out, &view, projectile)?;
            }
            draw_ship(out, &view, ship)?;
            draw_controls_hint(out, height)?;
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, width: u16, hud: &[String; 2]) -> std::io::Result<()> {
    let [lives, score] = hud;

    // Lives — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(lives))?;

    // Score — right
    let rx = width.saturating_sub(score.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(score))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// One of eight arrows, picked by rounding the heading to the nearest 45°.
fn ship_glyph(heading: f32) -> &'static str {
    const ARROWS: [&str; 8] = ["▲", "◥", "▶", "◢", "▼", "◣", "◀", "◤"];
    let octant = (heading.rem_euclid(360.0) / 45.0).round() as usize % 8;
    ARROWS[octant]
}

fn draw_ship<W: Write>(out: &mut W, view: &Viewport, ship: &Sprite) -> std::io::Result<()> {
    if let Some((col, row)) = view.cell(ship.pos) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_SHIP))?;
        out.queue(Print(ship_glyph(ship.heading)))?;
    }
    Ok(())
}

fn draw_asteroid<W: Write>(out: &mut W, view: &Viewport, body: &BodySprite) -> std::io::Result<()> {
    let Some((col, row)) = view.cell(body.pos) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col, row))?;
    match body.tier {
        Tier::Large => {
            out.queue(style::SetForegroundColor(C_ASTEROID_LARGE))?;
            out.queue(Print("@"))?;
        }
        Tier::Small => {
            out.queue(style::SetForegroundColor(C_ASTEROID_SMALL))?;
            out.queue(Print("o"))?;
        }
    }
    Ok(())
}

fn draw_projectile<W: Write>(out: &mut W, view: &Viewport, projectile: &Sprite) -> std::io::Result<()> {
    if let Some((col, row)) = view.cell(projectile.pos) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_PROJECTILE))?;
        out.queue(Print("•"))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("↑ : Thrust   ← → : Rotate   SPACE : Fire   ESC : Quit"))?;
    Ok(())
}

// ── Menu & score list ─────────────────────────────────────────────────────────

/// Lines spread evenly down the screen, each centred horizontally.
fn draw_centered<W: Write>(
    out: &mut W,
    width: u16,
    height: u16,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let step = height / (lines.len() as u16 + 1);
    let cx = width / 2;
    for (i, (text, color)) in lines.iter().enumerate() {
        let row = step * (i as u16 + 1);
        let col = cx.saturating_sub(text.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*text))?;
    }
    Ok(())
}

fn draw_menu<W: Write>(
    out: &mut W,
    width: u16,
    height: u16,
    entries: &[String],
    selected: usize,
) -> std::io::Result<()> {
    let lines: Vec<(&str, Color)> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let color = match i {
                0 => C_TITLE,
                i if i == selected => C_SELECTED,
                _ => C_ENTRY,
            };
            (entry.as_str(), color)
        })
        .collect();
    draw_centered(out, width, height, &lines)
}

fn draw_score_list<W: Write>(
    out: &mut W,
    width: u16,
    height: u16,
    lines: &[String],
) -> std::io::Result<()> {
    let last = lines.len().saturating_sub(1);
    let lines: Vec<(&str, Color)> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let color = match i {
                1 => C_BEST,
                i if i == last => C_SELECTED,
                _ => C_ENTRY,
            };
            (line.as_str(), color)
        })
        .collect();
    draw_centered(out, width, height, &lines)
}
