use ::rand::Rng;
use macroquad::prelude::*;

use super::controls::{Button, menu_buttons};
use crate::game::{Game, Screen};
use crate::grid::Cell;
use crate::theme::{Palette, Rgb};
use crate::variant::{Variant, VariantRules};

fn color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.0, rgb.1, rgb.2, 255)
}

fn faded(rgb: Rgb, alpha: f32) -> Color {
    Color {
        a: alpha,
        ..color(rgb)
    }
}

/// Where the board sits on screen. The window may be resized or high-dpi, so
/// everything is scaled from the variant's nominal window size.
struct Layout {
    scale: f32,
    tile: f32,
    off_x: f32,
    off_y: f32,
}

impl Layout {
    fn fit(rules: &VariantRules) -> Self {
        let sw = screen_width();
        let sh = screen_height();
        let scale = (sw / rules.window_width as f32).min(sh / rules.window_height as f32);
        let tile = rules.cell_size as f32 * scale;
        let board_w = tile * rules.grid.width as f32;
        let board_h = tile * rules.grid.height as f32;
        let sidebar = rules.sidebar_width as f32 * scale;
        Self {
            scale,
            tile,
            off_x: sidebar + (sw - sidebar - board_w) * 0.5,
            off_y: (sh - board_h) * 0.5,
        }
    }

    fn cell(&self, cell: Cell) -> Rect {
        Rect::new(
            self.off_x + cell.x as f32 * self.tile,
            self.off_y + cell.y as f32 * self.tile,
            self.tile,
            self.tile,
        )
    }

    fn font(&self, size: f32) -> f32 {
        size * self.scale
    }
}

fn draw_centered(text: &str, y: f32, font_size: f32, color: Color) {
    let m = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (screen_width() - m.width) * 0.5, y, font_size, color);
}

// Drifting particles behind the modern menu
struct Particle {
    pos: Vec2,
    velocity: Vec2,
    size: f32,
}

pub struct Backdrop {
    particles: Vec<Particle>,
}

impl Backdrop {
    pub fn new<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let (sw, sh) = (screen_width().max(1.0), screen_height().max(1.0));
        let particles = (0..count)
            .map(|_| {
                let angle = rng.random_range(0.0..std::f32::consts::TAU);
                let speed: f32 = rng.random_range(15.0..60.0);
                Particle {
                    pos: vec2(rng.random_range(0.0..sw), rng.random_range(0.0..sh)),
                    velocity: vec2(angle.cos(), angle.sin()) * speed,
                    size: rng.random_range(2.0..5.0),
                }
            })
            .collect();
        Self { particles }
    }

    fn update_and_draw(&mut self, dt: f32, tint: Rgb) {
        let (sw, sh) = (screen_width(), screen_height());
        let t = get_time() as f32;
        for p in &mut self.particles {
            p.pos += p.velocity * dt;
            p.pos.x = p.pos.x.rem_euclid(sw.max(1.0));
            p.pos.y = p.pos.y.rem_euclid(sh.max(1.0));
            let alpha = 0.5 + 0.5 * (t * 2.0 + p.pos.x * 0.01).sin();
            draw_circle(p.pos.x, p.pos.y, p.size, faded(tint, alpha));
        }
    }
}

pub fn draw(game: &Game, backdrop: &mut Backdrop, dt: f32) {
    let rules = game.rules();
    let palette = game.theme().palette();
    let layout = Layout::fit(rules);

    match game.screen() {
        Screen::Menu => {
            match game.variant() {
                Variant::Modern => {
                    clear_background(color(palette.background));
                    backdrop.update_and_draw(dt, palette.accent);
                    draw_modern_menu(game, &palette, &layout);
                }
                _ => {
                    clear_background(BLACK);
                    draw_enhanced_menu(game, &palette, &layout);
                }
            }
            for button in menu_buttons(game) {
                draw_button(&button, &palette, &layout);
            }
        }
        Screen::Playing => draw_play(game, &palette, &layout),
        Screen::Paused => {
            draw_play(game, &palette, &layout);
            draw_pause(&palette, &layout);
        }
        Screen::GameOver => match game.variant() {
            Variant::Modern => {
                draw_play(game, &palette, &layout);
                draw_game_over(game, &palette, &layout, true);
            }
            _ => {
                clear_background(BLACK);
                draw_game_over(game, &palette, &layout, false);
            }
        },
    }
}

fn draw_button(button: &Button, palette: &Palette, layout: &Layout) {
    let r = button.rect;
    draw_rectangle(r.x, r.y, r.w, r.h, button.color);
    if r.contains(mouse_position().into()) {
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, color(palette.accent));
    }
    let size = layout.font(28.0);
    let m = measure_text(&button.label, None, size as u16, 1.0);
    draw_text(
        &button.label,
        r.x + (r.w - m.width) * 0.5,
        r.y + (r.h + m.offset_y) * 0.5,
        size,
        color(palette.text),
    );
}

fn draw_play(game: &Game, palette: &Palette, layout: &Layout) {
    let rules = game.rules();
    let session = game.session();
    clear_background(color(palette.background));

    match game.variant() {
        Variant::Modern => {
            for cell in rules.grid.cells() {
                let r = layout.cell(cell);
                draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, color(palette.grid));
            }
            draw_sidebar(game, palette, layout);

            // body fades towards the tail
            let len = session.snake.len() as f32;
            let inset = 2.0 * layout.scale;
            for (i, cell) in session.snake.body().enumerate() {
                let r = layout.cell(*cell);
                let alpha = 1.0 - i as f32 / len * 0.5;
                draw_rectangle(r.x + inset, r.y + inset, r.w - 2.0 * inset, r.h - 2.0 * inset, faded(palette.snake, alpha));
            }

            let pulse = (get_time() as f32 * 3.0).sin();
            let radius = layout.tile * (0.6 + pulse * 0.1) * 0.5;
            let center = layout.cell(session.food.position()).center();
            draw_circle(center.x, center.y, radius + 4.0 * layout.scale, faded(palette.food, 0.4));
            draw_circle(center.x, center.y, radius, color(palette.food));
        }
        _ => {
            for cell in session.snake.body() {
                let r = layout.cell(*cell);
                draw_rectangle(r.x, r.y, r.w, r.h, color(palette.snake));
            }
            let r = layout.cell(session.food.position());
            draw_rectangle(r.x, r.y, r.w, r.h, color(palette.food));

            let size = layout.font(36.0);
            draw_text(&format!("Score: {}", session.score), 10.0, 10.0 + size * 0.7, size, color(palette.text));
            if rules.has_menu {
                let line = format!("Difficulty: {}", game.difficulty());
                draw_text(&line, 10.0, 40.0 * layout.scale + size * 0.7, size, color(palette.text));
            }
        }
    }
}

fn draw_sidebar(game: &Game, palette: &Palette, layout: &Layout) {
    let width = game.rules().sidebar_width as f32 * layout.scale;
    draw_rectangle(0.0, 0.0, width, screen_height(), color(palette.panel));

    let size = layout.font(24.0);
    let text = color(palette.text);
    let x = 20.0 * layout.scale;
    draw_text(&format!("Score: {}", game.session().score), x, 20.0 * layout.scale + size, size, text);
    draw_text(&format!("Best: {}", game.best_score()), x, 60.0 * layout.scale + size, size, text);
    draw_text(game.difficulty().name(), x, 100.0 * layout.scale + size, size, color(palette.accent));

    let hint = color(palette.highlight);
    draw_text("P - Pause", x, screen_height() - 70.0 * layout.scale, size, hint);
    draw_text("ESC - Back to Menu", x, screen_height() - 40.0 * layout.scale, size, hint);
}

fn draw_enhanced_menu(game: &Game, palette: &Palette, layout: &Layout) {
    let size = layout.font(36.0);
    let x = 300.0 * layout.scale;
    let mut y = 420.0 * layout.scale + size * 0.7;
    draw_text("High Scores:", x, y, size, color(palette.text));
    for difficulty in game.rules().difficulties() {
        y += 40.0 * layout.scale;
        let line = format!("{}: {}", difficulty, game.high_scores().best(difficulty.name()));
        draw_text(&line, x, y, size, color(palette.text));
    }
}

fn draw_modern_menu(game: &Game, palette: &Palette, layout: &Layout) {
    let t = get_time() as f32;
    let sh = screen_height();

    // title colour drifts slowly through the spectrum
    let glow = Color::new(
        0.5 + 0.5 * (t * 0.06).sin(),
        0.5 + 0.5 * (t * 0.06 + 2.0).sin(),
        0.5 + 0.5 * (t * 0.06 + 4.0).sin(),
        0.25,
    );
    let title_size = layout.font(100.0);
    let wave = (t * 2.0).sin() * 10.0 * layout.scale;
    let title_y = sh / 4.0 + wave;
    for offset in [8.0, 6.0, 4.0, 2.0] {
        let m = measure_text("SNAKE", None, title_size as u16, 1.0);
        let o = offset * layout.scale;
        draw_text("SNAKE", (screen_width() - m.width) * 0.5 + o, title_y + o, title_size, glow);
    }
    draw_centered("SNAKE", title_y, title_size, color(palette.text));

    let fade = 0.5 + 0.5 * (t * 2.0).sin();
    let size = layout.font(36.0);
    draw_centered("Use arrow keys to control", sh / 4.0 + 60.0 * layout.scale, size, faded(palette.accent, fade));
    draw_centered(game.profile().description, sh - 60.0 * layout.scale, size, faded(palette.highlight, fade));

    draw_high_score_panel(game, palette, layout);
}

fn draw_high_score_panel(game: &Game, palette: &Palette, layout: &Layout) {
    let (w, h) = (300.0 * layout.scale, 200.0 * layout.scale);
    let x = screen_width() - w - 20.0 * layout.scale;
    let y = 20.0 * layout.scale;
    draw_rectangle(x, y, w, h, faded(palette.panel, 0.8));

    let title_size = layout.font(36.0);
    let m = measure_text("High Scores", None, title_size as u16, 1.0);
    draw_text("High Scores", x + (w - m.width) * 0.5, y + 10.0 * layout.scale + m.offset_y, title_size, color(palette.text));

    // hue runs from red (easiest) to green (hardest)
    let count = game.rules().profiles.len().max(2) as f32;
    let t = get_time() as f32;
    let size = layout.font(24.0);
    for (i, difficulty) in game.rules().difficulties().enumerate() {
        let ratio = i as f32 / (count - 1.0);
        let shade = Color::new(1.0 - ratio, ratio, 0.5 + 0.5 * (t + i as f32).sin(), 1.0);
        let line = format!("{}: {}", difficulty, game.high_scores().best(difficulty.name()));
        let row_y = y + (50.0 + 25.0 * i as f32) * layout.scale + size * 0.7;
        draw_text(&line, x + 20.0 * layout.scale, row_y, size, shade);
    }
}

fn draw_pause(palette: &Palette, layout: &Layout) {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), faded(palette.background, 0.8));
    let sh = screen_height();
    draw_centered("PAUSED", sh / 3.0, layout.font(100.0), color(palette.text));

    let size = layout.font(36.0);
    let mut y = sh / 2.0;
    for line in ["ESC  Return to Menu", "SPACE  Resume Game"] {
        draw_centered(line, y, size, color(palette.accent));
        y += 40.0 * layout.scale;
    }
}

fn draw_game_over(game: &Game, palette: &Palette, layout: &Layout, overlay: bool) {
    let sh = screen_height();
    let score = game.session().score;
    let text = color(palette.text);

    if overlay {
        draw_rectangle(0.0, 0.0, screen_width(), sh, faded(palette.background, 0.8));
        draw_centered("GAME OVER", sh / 2.0 - 100.0 * layout.scale, layout.font(100.0), color(palette.food));
    } else {
        draw_centered("Game Over!", sh / 2.0 - 50.0 * layout.scale, layout.font(36.0), text);
    }

    let size = layout.font(if overlay { 24.0 } else { 36.0 });
    draw_centered(&format!("Final Score: {}", score), sh / 2.0, size, text);
    if score > 0 && score == game.best_score() {
        draw_centered("New best!", sh / 2.0 + 30.0 * layout.scale, size, color(palette.highlight));
    }
    let hint = if overlay { color(palette.accent) } else { text };
    draw_centered("Press ENTER to continue", sh / 2.0 + 70.0 * layout.scale, size, hint);
}
