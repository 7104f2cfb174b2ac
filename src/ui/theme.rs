#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use ratatui::style::Color;

use crate::{
    cli::ColorArg,
    domain::weather::DayPhase,
    scene::{Palette, Rgb},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

/// Text and panel colors that sit on top of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub surface: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    pub border: Rgb,
    pub danger: Rgb,
}

pub fn detect_color_capability(mode: ColorArg) -> ColorCapability {
    detect_color_capability_from(
        mode,
        std::env::var("TERM").ok().as_deref(),
        std::env::var("COLORTERM").ok().as_deref(),
        std::env::var("NO_COLOR").ok().as_deref(),
    )
}

pub(crate) fn detect_color_capability_from(
    mode: ColorArg,
    term: Option<&str>,
    colorterm: Option<&str>,
    no_color: Option<&str>,
) -> ColorCapability {
    let term = term.unwrap_or_default().to_lowercase();
    let colorterm = colorterm.unwrap_or_default().to_lowercase();
    let no_color = no_color.is_some_and(|value| !value.is_empty());

    if mode == ColorArg::Never || (mode == ColorArg::Auto && no_color) || term == "dumb" {
        return ColorCapability::Basic16;
    }
    if mode == ColorArg::Always
        || colorterm.contains("truecolor")
        || colorterm.contains("24bit")
        || term.ends_with("-direct")
    {
        return ColorCapability::TrueColor;
    }
    if term.contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

#[must_use]
pub fn chrome_for(palette: &Palette, phase: DayPhase) -> Chrome {
    let surface = mix(palette.sky[0], Rgb(2, 6, 23), 0.55);
    let text = ensure_contrast(Rgb(241, 245, 249), surface, 4.5);
    Chrome {
        surface,
        text,
        muted: mix(text, surface, 0.35),
        accent: match phase {
            DayPhase::Day => Rgb(250, 204, 21),
            DayPhase::Night => Rgb(165, 180, 252),
        },
        border: mix(text, surface, 0.55),
        danger: Rgb(248, 113, 113),
    }
}

#[must_use]
pub fn mix(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| -> u8 {
        (f32::from(x) + (f32::from(y) - f32::from(x)) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Rgb(channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

/// Three-stop vertical gradient; `t` runs top (0) to bottom (1).
#[must_use]
pub fn gradient(stops: [Rgb; 3], t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        mix(stops[0], stops[1], t * 2.0)
    } else {
        mix(stops[1], stops[2], (t - 0.5) * 2.0)
    }
}

fn ensure_contrast(fg: Rgb, bg: Rgb, min_ratio: f32) -> Rgb {
    if contrast_ratio(fg, bg) >= min_ratio {
        return fg;
    }
    let target = if contrast_ratio(Rgb(255, 255, 255), bg) >= contrast_ratio(Rgb(0, 0, 0), bg) {
        Rgb(255, 255, 255)
    } else {
        Rgb(0, 0, 0)
    };
    let mut best = fg;
    for step in 1..=24 {
        let candidate = mix(fg, target, step as f32 / 24.0);
        best = candidate;
        if contrast_ratio(candidate, bg) >= min_ratio {
            break;
        }
    }
    best
}

fn contrast_ratio(a: Rgb, b: Rgb) -> f32 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (hi, lo) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (hi + 0.05) / (lo + 0.05)
}

fn relative_luminance(rgb: Rgb) -> f32 {
    0.2126 * srgb_to_linear(rgb.0) + 0.7152 * srgb_to_linear(rgb.1) + 0.0722 * srgb_to_linear(rgb.2)
}

fn srgb_to_linear(v: u8) -> f32 {
    let s = f32::from(v) / 255.0;
    if s <= 0.04045 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// Terminal color for `rgb` at the given capability.
#[must_use]
pub fn to_color(rgb: Rgb, capability: ColorCapability) -> Color {
    let Rgb(r, g, b) = rgb;
    match capability {
        ColorCapability::TrueColor => Color::Rgb(r, g, b),
        ColorCapability::Xterm256 => {
            let to_cube = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
            Color::Indexed(16 + 36 * to_cube(r) + 6 * to_cube(g) + to_cube(b))
        }
        ColorCapability::Basic16 => basic16_from_rgb(r, g, b),
    }
}

fn basic16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let rf = f32::from(r) / 255.0;
    let gf = f32::from(g) / 255.0;
    let bf = f32::from(b) / 255.0;

    let max = rf.max(gf.max(bf));
    let min = rf.min(gf.min(bf));
    let delta = max - min;
    let light = (max + min) / 2.0;

    if delta < 0.08 {
        return match light {
            l if l < 0.20 => Color::Black,
            l if l < 0.40 => Color::DarkGray,
            l if l < 0.72 => Color::Gray,
            _ => Color::White,
        };
    }

    let hue = if (max - rf).abs() < f32::EPSILON {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if (max - gf).abs() < f32::EPSILON {
        60.0 * (((bf - rf) / delta) + 2.0)
    } else {
        60.0 * (((rf - gf) / delta) + 4.0)
    };

    let bright = light >= 0.55;
    let (dim, lit) = match hue {
        h if !(30.0..330.0).contains(&h) => (Color::Red, Color::LightRed),
        h if h < 90.0 => (Color::Yellow, Color::LightYellow),
        h if h < 150.0 => (Color::Green, Color::LightGreen),
        h if h < 210.0 => (Color::Cyan, Color::LightCyan),
        h if h < 270.0 => (Color::Blue, Color::LightBlue),
        _ => (Color::Magenta, Color::LightMagenta),
    };
    if bright { lit } else { dim }
}
