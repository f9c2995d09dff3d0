//! Report types shared by the CLI subcommands.
//!
//! Each report is serde-serializable for `--json` output and knows how to
//! render itself as human-readable text.

use serde::Serialize;

use dominant_color::{readable_text_color, tints_and_shades, wcag_level, Cmyk, Hsl, Rgb};

/// HSL components for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct HslValues {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// CMYK components for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct CmykValues {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

/// One color in every representation the CLI prints.
#[derive(Debug, Clone, Serialize)]
pub struct ColorEntry {
    pub hex: String,
    pub rgb: String,
    pub hsl: HslValues,
    pub cmyk: CmykValues,
}

impl ColorEntry {
    pub fn new(color: Rgb) -> Self {
        let hsl = Hsl::from(color);
        let cmyk = Cmyk::from(color);
        Self {
            hex: color.to_hex(),
            rgb: color.css_rgb(),
            hsl: HslValues {
                h: hsl.h,
                s: hsl.s,
                l: hsl.l,
            },
            cmyk: CmykValues {
                c: cmyk.c,
                m: cmyk.m,
                y: cmyk.y,
                k: cmyk.k,
            },
        }
    }

    pub fn render_line(&self) -> String {
        format!(
            "{}  {}  hsl({}, {}%, {}%)  cmyk({}%, {}%, {}%, {}%)",
            self.hex,
            self.rgb,
            self.hsl.h,
            self.hsl.s,
            self.hsl.l,
            self.cmyk.c,
            self.cmyk.m,
            self.cmyk.y,
            self.cmyk.k
        )
    }
}

/// An extracted (or generated) palette.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteReport {
    pub count: usize,
    pub colors: Vec<ColorEntry>,
}

impl PaletteReport {
    pub fn new(palette: &[Rgb]) -> Self {
        Self {
            count: palette.len(),
            colors: palette.iter().map(|&color| ColorEntry::new(color)).collect(),
        }
    }

    pub fn render_text(&self) -> String {
        if self.colors.is_empty() {
            return "(empty palette: no opaque pixels were sampled)".to_string();
        }
        self.colors
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{:>2}. {}", i + 1, entry.render_line()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Full inspection of a single color.
#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    #[serde(flatten)]
    pub entry: ColorEntry,
    pub luminance: f64,
    pub relative_luminance: f64,
    pub readable_text: String,
}

impl InfoReport {
    pub fn new(color: Rgb) -> Self {
        Self {
            entry: ColorEntry::new(color),
            luminance: color.luminance(),
            relative_luminance: color.relative_luminance(),
            readable_text: readable_text_color(color).to_hex(),
        }
    }

    pub fn render_text(&self) -> String {
        format!(
            "{}\nluminance: {:.4}\nrelative luminance (WCAG): {:.4}\nreadable text color: {}",
            self.entry.render_line(),
            self.luminance,
            self.relative_luminance,
            self.readable_text
        )
    }
}

/// WCAG contrast check between two colors.
#[derive(Debug, Clone, Serialize)]
pub struct ContrastReport {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub aa: bool,
    pub aa_large: bool,
    pub aaa: bool,
}

impl ContrastReport {
    pub fn new(foreground: Rgb, background: Rgb) -> Self {
        let level = wcag_level(foreground, background);
        Self {
            foreground: foreground.to_hex(),
            background: background.to_hex(),
            ratio: level.ratio,
            aa: level.aa,
            aa_large: level.aa_large,
            aaa: level.aaa,
        }
    }

    pub fn render_text(&self) -> String {
        let verdict = |pass: bool| if pass { "pass" } else { "fail" };
        format!(
            "{} on {}\ncontrast ratio: {}\nAA (4.5): {}\nAA large (3.0): {}\nAAA (7.0): {}",
            self.foreground,
            self.background,
            self.ratio,
            verdict(self.aa),
            verdict(self.aa_large),
            verdict(self.aaa)
        )
    }
}

/// Tints and shades of a base color.
#[derive(Debug, Clone, Serialize)]
pub struct ShadesReport {
    pub base: String,
    pub tints: Vec<String>,
    pub shades: Vec<String>,
}

impl ShadesReport {
    pub fn new(color: Rgb, steps: usize) -> Self {
        let scale = tints_and_shades(color, steps);
        Self {
            base: color.to_hex(),
            tints: scale.tints.iter().map(|c| c.to_hex()).collect(),
            shades: scale.shades.iter().map(|c| c.to_hex()).collect(),
        }
    }

    pub fn render_text(&self) -> String {
        format!(
            "base: {}\ntints:  {}\nshades: {}",
            self.base,
            self.tints.join(" "),
            self.shades.join(" ")
        )
    }
}
