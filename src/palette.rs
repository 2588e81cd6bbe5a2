//! Display colours for colour classes. The search itself only
//! produces class indices; mapping them to something drawable
//! happens here, behind a trait so tests can substitute their
//! own palette and stay independent of the exact colours.
use crate::graph::Colour;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub trait Palette {
    /// Display colour for a colour class. Must be deterministic
    /// and distinct for every class index a search can produce.
    fn display_colour(&self, class: Colour) -> Rgb;
}

/// Steps around the hue circle by the golden angle, which keeps
/// consecutive classes far apart. Deterministic, so repeated
/// searches on the same graph display identically.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoldenAnglePalette;

const GOLDEN_ANGLE: f64 = 137.508;

impl Palette for GoldenAnglePalette {
    fn display_colour(&self, class: Colour) -> Rgb {
        let hue = (class as f64 * GOLDEN_ANGLE) % 360.0;
        hsv_to_rgb(hue, 0.75, 0.9)
    }
}

/// Map a whole colouring to display colours, one per vertex.
pub fn display_colours(colouring: &[Colour], palette: &impl Palette) -> Vec<Rgb> {
    colouring
        .iter()
        .map(|class| palette.display_colour(*class))
        .collect()
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    let chroma = value * saturation;
    let side = (hue / 60.0) % 2.0 - 1.0;
    let secondary = chroma * (1.0 - side.abs());
    let offset = value - chroma;

    let (r, g, b) = match hue as u32 / 60 {
        0 => (chroma, secondary, 0.0),
        1 => (secondary, chroma, 0.0),
        2 => (0.0, chroma, secondary),
        3 => (0.0, secondary, chroma),
        4 => (secondary, 0.0, chroma),
        _ => (chroma, 0.0, secondary),
    };

    Rgb {
        r: ((r + offset) * 255.0).round() as u8,
        g: ((g + offset) * 255.0).round() as u8,
        b: ((b + offset) * 255.0).round() as u8,
    }
}
