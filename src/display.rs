//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer, an immutable view of the game
//! state and the current viewport. No game logic is performed; this module
//! only translates state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use dungeon_shooter::compute::{GameState, GameStatus};
use dungeon_shooter::config::{PLAYER_SIZE, SCREEN_HEIGHT};
use dungeon_shooter::entities::{Enemy, EnemyKind, PowerUpKind, Rgb, GREEN, RED, WHITE, YELLOW};
use dungeon_shooter::viewport::Viewport;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::Rgb { r: 20, g: 20, b: 50 };
const C_STAR: Color = Color::Rgb { r: 255, g: 255, b: 255 };
const C_PLAYER: Color = Color::Rgb { r: 0, g: 0, b: 255 };
const C_HUD: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// World-space radius of a door marker.
const DOOR_SIZE: f32 = 20.0;

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

/// Scale a colour towards black by `alpha` in `[0, 1]`.
fn faded((r, g, b): Rgb, alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    Color::Rgb {
        r: (r as f32 * a) as u8,
        g: (g as f32 * a) as u8,
        b: (b as f32 * a) as u8,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_stars(out, state, vp)?;
    draw_player(out, state, vp)?;
    draw_doors(out, state, vp)?;
    for enemy in &state.level.room().enemies {
        draw_enemy(out, enemy, vp)?;
    }
    for bullet in &state.bullets {
        put(out, vp, bullet.x, bullet.y, rgb(YELLOW), "•")?;
    }
    for coin in &state.level.room().coins {
        put(out, vp, coin.x, coin.y, rgb(YELLOW), "$")?;
    }
    for powerup in &state.level.room().powerups {
        let glyph = match powerup.kind {
            PowerUpKind::Health => "+",
            PowerUpKind::Speed => "»",
        };
        put(out, vp, powerup.x, powerup.y, rgb(powerup.kind.color()), glyph)?;
    }
    for particle in &state.particles {
        put(out, vp, particle.x, particle.y, faded(particle.color, particle.alpha()), "·")?;
    }

    draw_hud(out, state, vp)?;
    draw_controls_hint(out, vp)?;

    if state.paused {
        draw_banner(out, vp, &[("Paused - Press P to Resume", Color::White)])?;
    } else {
        match state.status {
            GameStatus::LevelComplete => {
                draw_banner(out, vp, &[("Level Complete!", rgb(GREEN))])?;
            }
            GameStatus::GameOver => draw_game_over(out, state, vp)?,
            GameStatus::Playing => {}
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Primitives ────────────────────────────────────────────────────────────────

/// Print `glyph` at the cell containing a world point; off-field points are skipped.
fn put<W: Write>(
    out: &mut W,
    vp: &Viewport,
    x: f32,
    y: f32,
    color: Color,
    glyph: &str,
) -> std::io::Result<()> {
    if let Some((col, row)) = vp.to_cell(x, y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

/// Fill every cell covered by a world-space box.
fn fill<W: Write>(
    out: &mut W,
    vp: &Viewport,
    (x, y, w, h): (f32, f32, f32, f32),
    color: Color,
    glyph: &str,
) -> std::io::Result<()> {
    if let Some((c0, r0, c1, r1)) = vp.cell_span(x, y, w, h) {
        out.queue(style::SetForegroundColor(color))?;
        for row in r0..=r1 {
            out.queue(cursor::MoveTo(c0, row))?;
            out.queue(Print(glyph.repeat((c1 - c0 + 1) as usize)))?;
        }
    }
    Ok(())
}

// ── Scenery ───────────────────────────────────────────────────────────────────

fn draw_stars<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    for &(x, y) in &state.stars {
        put(out, vp, x, y, C_STAR, ".")?;
    }
    Ok(())
}

/// Doors glow green once the room is cleared, red while it is still locked.
fn draw_doors<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    let room = state.level.room();
    let color = if room.cleared { rgb(GREEN) } else { rgb(RED) };
    for door in &room.doors {
        fill(
            out,
            vp,
            (door.x - DOOR_SIZE, door.y - DOOR_SIZE, DOOR_SIZE * 2.0, DOOR_SIZE * 2.0),
            color,
            "▒",
        )?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    let p = &state.player;
    fill(out, vp, (p.x, p.y, PLAYER_SIZE, PLAYER_SIZE), C_PLAYER, "@")
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, vp: &Viewport) -> std::io::Result<()> {
    let glyph = match enemy.kind {
        EnemyKind::Normal => "o",
        EnemyKind::Fast => "v",
        EnemyKind::Tanky => "O",
        EnemyKind::Armored => "#",
        EnemyKind::Boss => "B",
    };
    let size = enemy.size();
    fill(out, vp, (enemy.x, enemy.y, size, size), rgb(enemy.kind.color()), glyph)?;

    // Health bar on the row above the sprite
    let bar_y = enemy.y - SCREEN_HEIGHT / vp.field_rows() as f32;
    if let Some((c0, row, c1, _)) = vp.cell_span(enemy.x, bar_y, size, 0.0) {
        let width = (c1 - c0 + 1) as usize;
        let filled = ((width as f32) * enemy.health_fraction()).ceil() as usize;
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(style::SetForegroundColor(rgb(GREEN)))?;
        out.queue(Print("▀".repeat(filled)))?;
        out.queue(style::SetForegroundColor(rgb(RED)))?;
        out.queue(Print("▀".repeat(width - filled.min(width))))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    let p = &state.player;
    let line = format!(
        "Health:{:>3}  Score:{:>5}  High:{:>5}  Level:{}  Room:{}  Weapon:{}  Speed:{}  Wave:{}",
        p.health,
        state.score,
        state.high_score,
        state.level.number,
        state.level.room().id,
        p.weapon.name(),
        p.speed,
        state.wave,
    );
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(truncate(&line, vp.cols as usize)))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    let hint = "WASD/arrows: Move  Mouse: Aim/Fire  Q: Weapon  E: Sword  P: Pause  Esc: Quit";
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(truncate(hint, vp.cols as usize)))?;
    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

// ── Overlays ──────────────────────────────────────────────────────────────────

/// Centre a block of lines on the screen.
fn draw_banner<W: Write>(
    out: &mut W,
    vp: &Viewport,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = vp.cols / 2;
    let start_row = (vp.rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    let best = state.high_score.max(state.score);
    let score_line = format!("Final Score: {} (High: {})", state.score, best);
    let best_color = if state.score > state.high_score {
        rgb(YELLOW)
    } else {
        rgb(WHITE)
    };
    draw_banner(
        out,
        vp,
        &[
            ("╔════════════════════╗", rgb(RED)),
            ("║     GAME  OVER     ║", rgb(RED)),
            ("╚════════════════════╝", rgb(RED)),
            (score_line.as_str(), best_color),
        ],
    )
}
