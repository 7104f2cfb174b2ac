use super::{Raster, cycle, pct};
use crate::{
    scene::{Rgb, SceneState, fog_veil},
    ui::theme::mix,
};

const RAIN: Rgb = Rgb(191, 219, 254);
const SNOW: Rgb = Rgb(255, 255, 255);
const FLASH: Rgb = Rgb(255, 255, 255);
const FLASH_OPACITY: f32 = 0.6;

pub(super) fn paint_rain(raster: &mut Raster, scene: &SceneState, t: f32) {
    let height = raster.height() as f32;
    for drop in &scene.raindrops {
        let progress = cycle(t, drop.delay_s, drop.duration_s);
        let head = ((-0.1 + 1.2 * progress) * height).round() as i32;
        let slant = drop.rotation_deg.to_radians().tan();
        let glyph = if drop.rotation_deg < 16.0 { '│' } else { '╱' };
        let streak = (drop.length / 10.0).round().max(1.0) as i32;
        let x0 = pct(drop.left_pct, raster.width());
        for step in 0..streak {
            let y = head - step;
            let x = x0 - ((y as f32) * slant * 0.5).round() as i32;
            let bg = raster.get(x, y).map_or(RAIN, |px| px.bg);
            raster.put(x, y, glyph, mix(bg, RAIN, 0.7));
        }
    }
}

pub(super) fn paint_snow(raster: &mut Raster, scene: &SceneState, t: f32) {
    let height = raster.height() as f32;
    for flake in &scene.snowflakes {
        let progress = cycle(t, flake.delay_s, flake.duration_s);
        let y = ((-0.05 + 1.1 * progress) * height).round() as i32;
        let drift = flake.swing / 10.0 * (progress * std::f32::consts::TAU).sin() * 2.0;
        let x = pct(flake.left_pct, raster.width()) + drift.round() as i32;
        let glyph = if flake.size > 4.0 { '*' } else { '·' };
        raster.put(x, y, glyph, SNOW);
    }
}

pub(super) fn apply_fog(raster: &mut Raster, scene: &SceneState) {
    if !scene.fog.is_visible() {
        return;
    }
    let (color, opacity) = fog_veil(scene.day_phase);
    raster.veil(color, scene.fog.value() * opacity);
}

pub(super) fn apply_flash(raster: &mut Raster, scene: &SceneState) {
    if scene.flash_visible() {
        raster.veil(FLASH, FLASH_OPACITY);
    }
}
