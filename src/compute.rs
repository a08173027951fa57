//! Pure game-logic helpers.
//!
//! Nothing in here owns state: every function takes plain values and returns
//! plain values, so the entity modules and the controller can share the same
//! geometry and scoring rules.

use crate::entities::Vec2;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Unit vector for a heading in degrees, 0 = up, growing clockwise.
pub fn heading_to_direction(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

/// Toroidal wrap with a hidden margin.
///
/// A coordinate only wraps once it is more than `margin` past an edge, and
/// it re-enters exactly on the opposite edge.  Leaving and re-entering on
/// different lines keeps sprites from popping at the visible border.
pub fn wrap_toroidal(pos: Vec2, width: f32, height: f32, margin: f32) -> Vec2 {
    Vec2::new(
        wrap_axis(pos.x, width, margin),
        wrap_axis(pos.y, height, margin),
    )
}

fn wrap_axis(v: f32, extent: f32, margin: f32) -> f32 {
    if v > extent + margin {
        0.0
    } else if v < -margin {
        extent
    } else {
        v
    }
}

/// True while `pos` lies inside the visible field, edges included.
pub fn in_field(pos: Vec2, width: f32, height: f32) -> bool {
    (0.0..=width).contains(&pos.x) && (0.0..=height).contains(&pos.y)
}

pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

// ── Thrust ────────────────────────────────────────────────────────────────────

/// Extra speed granted `elapsed_ms` into a boost window of `duration_ms`.
///
/// Falls linearly from `max` at the start of the window to `min` at its end
/// and stays at `min` afterwards; callers decide whether the window is open.
pub fn boost_bonus(elapsed_ms: f32, duration_ms: f32, max: f32, min: f32) -> f32 {
    if duration_ms <= 0.0 {
        return min;
    }
    let t = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    max + (min - max) * t
}

// ── Scores ────────────────────────────────────────────────────────────────────

/// Try to place `score` in a best-first table holding at most `capacity`
/// entries.  Returns whether the table changed.
///
/// A score enters when the table has room, or when it beats the current
/// lowest entry, which it then evicts.  The table is left sorted descending;
/// equal scores keep their previous relative order.
pub fn insert_top_score(table: &mut Vec<u32>, score: u32, capacity: usize) -> bool {
    if capacity == 0 {
        return false;
    }
    table.sort_by(|a, b| b.cmp(a));
    table.truncate(capacity);

    if table.len() < capacity {
        table.push(score);
    } else {
        match table.last_mut() {
            Some(lowest) if score > *lowest => *lowest = score,
            _ => return false,
        }
    }
    table.sort_by(|a, b| b.cmp(a));
    true
}
