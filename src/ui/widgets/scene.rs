#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

//! Full-screen animated scene. Everything is painted into an RGB raster
//! first so fog and lightning can blend real colors, then flushed to the
//! buffer at the terminal's color capability.

mod effects;
mod sea;
mod sky;

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::{
    scene::{Rgb, SceneState},
    ui::theme::{ColorCapability, mix, to_color},
};

/// Fraction of the height above the waterline.
const HORIZON: f32 = 0.62;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Px {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

pub(crate) struct Raster {
    width: usize,
    height: usize,
    cells: Vec<Px>,
}

impl Raster {
    fn new(width: u16, height: u16) -> Self {
        let blank = Px {
            ch: ' ',
            fg: Rgb(255, 255, 255),
            bg: Rgb(0, 0, 0),
        };
        Self {
            width: usize::from(width),
            height: usize::from(height),
            cells: vec![blank; usize::from(width) * usize::from(height)],
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn horizon(&self) -> usize {
        ((self.height as f32) * HORIZON).round() as usize
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub(crate) fn get(&self, x: i32, y: i32) -> Option<Px> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Glyph over whatever background is already there.
    pub(crate) fn put(&mut self, x: i32, y: i32, ch: char, fg: Rgb) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx].ch = ch;
            self.cells[idx].fg = fg;
        }
    }

    pub(crate) fn fill(&mut self, x: i32, y: i32, bg: Rgb) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Px {
                ch: ' ',
                fg: bg,
                bg,
            };
        }
    }

    /// Pulls every cell toward `color` by `amount`.
    pub(crate) fn veil(&mut self, color: Rgb, amount: f32) {
        if amount <= 0.0 {
            return;
        }
        for cell in &mut self.cells {
            cell.bg = mix(cell.bg, color, amount);
            cell.fg = mix(cell.fg, color, amount);
        }
    }

    fn flush(&self, area: Rect, buf: &mut Buffer, capability: ColorCapability) {
        for (idx, px) in self.cells.iter().enumerate() {
            let x = area.x + (idx % self.width) as u16;
            let y = area.y + (idx / self.width) as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(px.ch)
                    .set_fg(to_color(px.fg, capability))
                    .set_bg(to_color(px.bg, capability));
            }
        }
    }
}

pub struct SceneCanvas<'a> {
    pub scene: &'a SceneState,
    /// Seconds of animation time.
    pub time_s: f32,
    pub capability: ColorCapability,
}

impl Widget for SceneCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut raster = Raster::new(area.width, area.height);
        let t = self.time_s;

        sky::paint_gradient(&mut raster, self.scene);
        sky::paint_stars(&mut raster, self.scene, t);
        sky::paint_celestial(&mut raster, self.scene);
        sky::paint_clouds(&mut raster, self.scene, t);
        sky::paint_balloons(&mut raster, self.scene, t);
        sea::paint_waves(&mut raster, self.scene, t);
        sea::paint_boat(&mut raster, self.scene, t);
        effects::paint_rain(&mut raster, self.scene, t);
        effects::paint_snow(&mut raster, self.scene, t);
        effects::apply_fog(&mut raster, self.scene);
        effects::apply_flash(&mut raster, self.scene);

        raster.flush(area, buf, self.capability);
    }
}

/// Position in one animation cycle, 0..1, for an element with a CSS-style
/// (usually negative) start delay.
pub(crate) fn cycle(time_s: f32, delay_s: f32, period_s: f32) -> f32 {
    if period_s <= 0.0 {
        return 0.0;
    }
    ((time_s - delay_s) / period_s).rem_euclid(1.0)
}

pub(crate) fn pct(value: f32, extent: usize) -> i32 {
    (value / 100.0 * extent as f32).round() as i32
}
