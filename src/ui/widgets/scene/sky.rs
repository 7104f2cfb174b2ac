use std::f32::consts::TAU;

use super::{Raster, cycle, pct};
use crate::{
    domain::weather::SceneCategory,
    scene::{BALLOONS, Rgb, SceneState, balloon_colors},
    ui::theme::{gradient, mix},
};

const SUN: Rgb = Rgb(250, 204, 21);
const MOON: Rgb = Rgb(226, 232, 240);
const STAR: Rgb = Rgb(248, 250, 252);
const ROPE: Rgb = Rgb(120, 113, 108);

pub(super) fn paint_gradient(raster: &mut Raster, scene: &SceneState) {
    let stops = scene.palette().sky;
    let rows = raster.height().max(2) - 1;
    for y in 0..raster.height() {
        let color = gradient(stops, y as f32 / rows as f32);
        for x in 0..raster.width() {
            raster.fill(x as i32, y as i32, color);
        }
    }
}

pub(super) fn paint_stars(raster: &mut Raster, scene: &SceneState, t: f32) {
    let horizon = raster.horizon();
    for star in &scene.stars {
        let x = pct(star.left_pct, raster.width());
        let y = pct(star.top_pct, horizon);
        let lit = cycle(t, -star.delay_s, 3.0) < 0.5;
        let glyph = match (lit, star.size > 2.0) {
            (true, true) => '✦',
            (true, false) => '•',
            (false, _) => '·',
        };
        let bg = raster.get(x, y).map_or(STAR, |px| px.bg);
        let fg = if lit { STAR } else { mix(STAR, bg, 0.5) };
        raster.put(x, y, glyph, fg);
    }
}

/// Sun by day, moon by night; hidden behind rain and storm clouds.
pub(super) fn paint_celestial(raster: &mut Raster, scene: &SceneState) {
    if matches!(scene.category, SceneCategory::Rain | SceneCategory::Storm) {
        return;
    }
    let color = if scene.day_phase.is_day() { SUN } else { MOON };
    let cx = (raster.width() as f32 * 0.82) as i32;
    let cy = (raster.horizon() as f32 * 0.18) as i32;
    let rows: [&str; 3] = [" ▄██▄ ", "██████", " ▀██▀ "];
    for (dy, row) in rows.iter().enumerate() {
        for (dx, ch) in row.chars().enumerate() {
            if ch != ' ' {
                raster.put(cx + dx as i32 - 3, cy + dy as i32, ch, color);
            }
        }
    }
}

fn cloud_rows(rows: usize) -> &'static [&'static [char]] {
    if rows >= 3 {
        &[
            &[' ', '░', '░', '▒', '▒', '░', '░', ' '],
            &['░', '▒', '▓', '▓', '▓', '▓', '▒', '░'],
            &[' ', ' ', '░', '▒', '▒', '░', ' ', ' '],
        ]
    } else {
        &[
            &[' ', '░', '▒', '▒', '▒', '░', ' '],
            &['░', '▒', '▓', '▓', '▒', '░', ' '],
        ]
    }
}

pub(super) fn paint_clouds(raster: &mut Raster, scene: &SceneState, t: f32) {
    let color = scene.cloud_tint().color(scene.day_phase);
    let width = raster.width() as f32;
    let horizon = raster.horizon();
    for cloud in &scene.clouds {
        let cloud_w = (cloud.width / 10.0).round().max(4.0) as usize;
        let rows = cloud_rows(if cloud.width >= 170.0 { 3 } else { 2 });
        let start = cloud.left_pct / 100.0 * width - cloud_w as f32;
        let travel = width + cloud_w as f32;
        let x0 = (start + cycle(t, cloud.delay_s, cloud.speed_s) * travel).round() as i32;
        let y0 = pct(cloud.top_pct, horizon);
        for (dy, pattern) in rows.iter().enumerate() {
            for dx in 0..cloud_w {
                let ch = pattern[dx * pattern.len() / cloud_w];
                if ch != ' ' {
                    raster.put(x0 + dx as i32, y0 + dy as i32, ch, color);
                }
            }
        }
    }
}

/// Three hot-air balloons drifting on bobbing paths, baskets swung by the
/// wind.
pub(super) fn paint_balloons(raster: &mut Raster, scene: &SceneState, t: f32) {
    let colors = balloon_colors(scene.day_phase);
    let horizon = raster.horizon();
    let swing = (scene.tilt_deg / 10.0).round() as i32;
    for layout in &BALLOONS {
        let period = layout.bob_period_s(scene.wind_speed);
        let bob = ((cycle(t, 0.0, period) * TAU).sin()).round() as i32;
        let x = pct(layout.left_pct, raster.width());
        let y = pct(layout.top_pct, horizon) + bob;
        let fade = 1.0 - layout.depth;
        let sky = raster.get(x, y).map_or(colors.envelope, |px| px.bg);
        let envelope = mix(colors.envelope, sky, fade);
        let band = mix(colors.band, sky, fade);
        let basket = mix(colors.basket, sky, fade);

        if layout.depth >= 0.8 {
            put_row(raster, x - 2, y, "▄███▄", envelope);
            put_row(raster, x - 2, y + 1, "▓▓▓▓▓", band);
            put_row(raster, x - 2, y + 2, "▀███▀", envelope);
            raster.put(x + swing / 2, y + 3, '│', ROPE);
            raster.put(x + swing, y + 4, '▄', basket);
        } else {
            put_row(raster, x - 1, y, "▄█▄", envelope);
            put_row(raster, x - 1, y + 1, "▀▓▀", band);
            raster.put(x + swing, y + 2, '▪', basket);
        }
    }
}

fn put_row(raster: &mut Raster, x: i32, y: i32, row: &str, color: Rgb) {
    for (dx, ch) in row.chars().enumerate() {
        raster.put(x + dx as i32, y, ch, color);
    }
}
