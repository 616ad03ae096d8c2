use hallboard_core::StatusDescriptor;
use ratatui::style::Color;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Mix `color` over `base` with opacity `alpha`. Non-RGB colors are returned as is.
pub fn blend(base: Color, color: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (base, color) {
        (Color::Rgb(br, bg, bb), Color::Rgb(cr, cg, cb)) => {
            let mix = |b: u8, c: u8| -> u8 {
                (f32::from(b) + (f32::from(c) - f32::from(b)) * alpha).round() as u8
            };
            Color::Rgb(mix(br, cr), mix(bg, cg), mix(bb, cb))
        }
        _ => color,
    }
}

/// Runtime theme, derived from the current room status
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub header_bg: Color,

    // Foreground colors
    pub fg0: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Status colors
    pub accent: Color,
    pub pulse: Color,
    pub text: Color,
    /// Edge fade over the scrolling region, already blended onto bg0
    pub fade: Color,
    pub gradient: [Color; 8],

    // Semantic colors
    pub highlight: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_status(hallboard_core::StatusKey::Available.descriptor())
    }
}

impl Theme {
    const BG0: Color = Color::Rgb(0x11, 0x18, 0x27);
    const BG1: Color = Color::Rgb(0x1f, 0x29, 0x37);
    const FG0: Color = Color::Rgb(0xf9, 0xfa, 0xfb);
    const GREY0: Color = Color::Rgb(0x6b, 0x72, 0x80);
    const GREY1: Color = Color::Rgb(0x9c, 0xa3, 0xaf);

    /// Build the theme for a status. Unparseable colors fall back to the
    /// neutral palette.
    pub fn for_status(status: &StatusDescriptor) -> Self {
        let color = |hex: &str, fallback: Color| parse_hex_color(hex).unwrap_or(fallback);

        let accent = color(status.gradient[0], Self::FG0);
        let mut gradient = [accent; 8];
        for (slot, hex) in gradient.iter_mut().zip(status.gradient.iter()) {
            *slot = color(hex, accent);
        }

        Self {
            bg0: Self::BG0,
            bg1: Self::BG1,
            header_bg: color(status.header_bg, Self::BG1),
            fg0: Self::FG0,
            grey0: Self::GREY0,
            grey1: Self::GREY1,
            accent,
            pulse: color(status.pulse_color, accent),
            text: color(status.text_color, Self::FG0),
            fade: blend(Self::BG0, color(status.fade_color, accent), status.fade_alpha),
            gradient,
            highlight: Color::Rgb(0xfb, 0xbf, 0x24),
            warning: Color::Rgb(0xf9, 0x73, 0x16),
        }
    }
}
