use std::f32::consts::TAU;

use super::{Raster, cycle};
use crate::{
    scene::{MotionParams, Rgb, SceneState, WAVE_LAYERS, boat_colors},
    ui::theme::mix,
};

/// Wavelength of the swell, in columns.
const WAVELENGTH: f32 = 24.0;
const BOAT_LAYER: usize = 2;
const BOAT_X: f32 = 0.18;

/// Rows the waterline rises or falls from bobbing at `t`.
fn bob_rows(motion: MotionParams, period_s: f32, delay_s: f32, t: f32) -> f32 {
    if motion.frozen {
        return 0.0;
    }
    motion.bob_height_px / 60.0 * (cycle(t, delay_s, period_s) * TAU).sin()
}

fn layer_base(raster: &Raster, layer: usize) -> f32 {
    let horizon = raster.horizon() as f32;
    let water = raster.height() as f32 - horizon;
    horizon + water * layer as f32 / (WAVE_LAYERS.len() as f32 + 1.0)
}

fn surface_row(raster: &Raster, scene: &SceneState, layer: usize, x: i32, t: f32) -> i32 {
    let motion = scene.motion();
    let config = WAVE_LAYERS[layer];
    let phase = if motion.frozen {
        0.0
    } else {
        cycle(t, 0.0, config.flow_period_s(scene.intensity)) * TAU
    };
    let amplitude = motion.wave_scale_y * 0.5;
    let swell = amplitude * (x as f32 / WAVELENGTH * TAU + phase + layer as f32).sin();
    let bob = bob_rows(motion, config.bob_period_s, config.bob_delay_s, t);
    (layer_base(raster, layer) + swell + bob).round() as i32
}

/// Five layers back to front, each filling from its surface down.
pub(super) fn paint_waves(raster: &mut Raster, scene: &SceneState, t: f32) {
    let colors = scene.palette().waves;
    let bottom = raster.height() as i32;
    for (layer, config) in WAVE_LAYERS.iter().enumerate() {
        for x in 0..raster.width() as i32 {
            let top = surface_row(raster, scene, layer, x, t);
            for y in top.max(0)..bottom {
                let behind = raster.get(x, y).map_or(colors[layer], |px| px.bg);
                let color = mix(behind, colors[layer], config.opacity);
                if y == top {
                    raster.put(x, y, '▄', color);
                } else {
                    raster.fill(x, y, color);
                }
            }
        }
    }
}

pub(super) fn paint_boat(raster: &mut Raster, scene: &SceneState, t: f32) {
    let colors = boat_colors(scene.day_phase);
    let motion = scene.motion();
    let mast_x = (raster.width() as f32 * BOAT_X).round() as i32;
    let waterline = surface_row(raster, scene, BOAT_LAYER, mast_x, t);

    let sail_rows = if motion.mainsail_scale > 1.3 { 5 } else { 4 };
    let lean = motion.boat_rotation_deg.to_radians().tan();
    let jib_reach = (2.0 * motion.jib_scale).round() as i32;
    let hull_top = waterline - 1;

    for row in 0..sail_rows {
        let y = hull_top - sail_rows + row;
        let depth = sail_rows - row;
        let shift = (depth as f32 * lean).round() as i32;
        let mx = mast_x + shift;
        raster.put(mx, y, '│', colors.mast);
        for dx in 1..=(row + 1) {
            let ch = if dx == row + 1 { '◣' } else { '█' };
            raster.put(mx + dx, y, ch, colors.sail);
        }
        let jib = row * jib_reach / sail_rows;
        for dx in 1..=jib {
            let ch = if dx == jib { '◢' } else { '█' };
            raster.put(mx - dx, y, ch, colors.jib);
        }
    }

    put_hull(raster, mast_x, hull_top, colors.deck, colors.hull);
}

fn put_hull(raster: &mut Raster, mast_x: i32, y: i32, deck: Rgb, hull: Rgb) {
    for dx in -5..=6 {
        raster.put(mast_x + dx, y, '▄', deck);
    }
    raster.put(mast_x - 5, y + 1, '◥', hull);
    for dx in -4..=5 {
        raster.put(mast_x + dx, y + 1, '█', hull);
    }
    raster.put(mast_x + 6, y + 1, '◤', hull);
}
