//! Design-system theme.
//!
//! Holds the palette, typography, shape and breakpoints of the shell and renders
//! them into the stylesheet inlined in every page. Palette entries derive their
//! `light`, `dark` and contrast-text variants from a single main color.
//!
//! # Example
//!
//! ```rust,ignore
//! let theme = Theme::default();
//! assert_eq!(theme.palette.primary.main.to_hex(), "#4a148c");
//! let css = theme.stylesheet();
//! ```

use std::fmt;

use crate::config::ThemeConfig;
use crate::error::ThemeError;

/// Tonal offset used to derive `light`/`dark` variants.
const TONAL_OFFSET: f64 = 0.2;

/// Minimum contrast ratio for white text on a palette color.
const CONTRAST_THRESHOLD: f64 = 3.0;

/// Base spacing unit in pixels.
const SPACING_UNIT: u16 = 8;

/// Box shadows for the elevations the shell uses.
const SHADOW_3: &str = "0px 3px 3px -2px rgba(0,0,0,0.2),0px 3px 4px 0px rgba(0,0,0,0.14),0px 1px 8px 0px rgba(0,0,0,0.12)";
const SHADOW_4: &str = "0px 2px 4px -1px rgba(0,0,0,0.2),0px 4px 5px 0px rgba(0,0,0,0.14),0px 1px 10px 0px rgba(0,0,0,0.12)";
const SHADOW_16: &str = "0px 8px 10px -5px rgba(0,0,0,0.2),0px 16px 24px 2px rgba(0,0,0,0.14),0px 6px 30px 5px rgba(0,0,0,0.12)";

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`. `field` names the config key in the error.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, ThemeError> {
        let invalid = || ThemeError::InvalidColor {
            field,
            value: value.to_string(),
        };

        let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(hex[i..=i].repeat(2).as_str());
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Move each channel `coef` of the way towards white.
    #[must_use]
    pub fn lighten(self, coef: f64) -> Self {
        let coef = coef.clamp(0.0, 1.0);
        let mix = |c: u8| truncate_channel(f64::from(c) + (255.0 - f64::from(c)) * coef);
        Self::rgb(mix(self.r), mix(self.g), mix(self.b))
    }

    /// Scale each channel by `1 - coef`.
    #[must_use]
    pub fn darken(self, coef: f64) -> Self {
        let coef = coef.clamp(0.0, 1.0);
        let mix = |c: u8| truncate_channel(f64::from(c) * (1.0 - coef));
        Self::rgb(mix(self.r), mix(self.g), mix(self.b))
    }

    /// WCAG relative luminance in `[0, 1]`.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let linear = |c: u8| {
            let c = f64::from(c) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Channels are truncated, not rounded, so derived shades match MUI's `recomposeColor`.
#[allow(clippy::cast_sign_loss)]
fn truncate_channel(v: f64) -> u8 {
    v.trunc().clamp(0.0, 255.0) as u8
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (la, lb) = (a.relative_luminance(), b.relative_luminance());
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

// ─────────────────────────────────────────────────────────────────────────────
// Palette
// ─────────────────────────────────────────────────────────────────────────────

/// Text color that reads on top of a palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastText {
    Light,
    Dark,
}

impl ContrastText {
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Light => "#fff",
            Self::Dark => "rgba(0, 0, 0, 0.87)",
        }
    }
}

/// A palette entry derived from its main color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub main: Color,
    pub light: Color,
    pub dark: Color,
    pub contrast_text: ContrastText,
}

impl PaletteColor {
    #[must_use]
    pub fn from_main(main: Color) -> Self {
        let contrast_text = if contrast_ratio(main, Color::WHITE) >= CONTRAST_THRESHOLD {
            ContrastText::Light
        } else {
            ContrastText::Dark
        };

        Self {
            main,
            light: main.lighten(TONAL_OFFSET),
            dark: main.darken(TONAL_OFFSET * 1.5),
            contrast_text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    pub default: Color,
    pub paper: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub background: Background,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typography {
    pub font_family: String,
    pub h6_font_weight: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// Corner radius in pixels.
    pub border_radius: u16,
}

// ─────────────────────────────────────────────────────────────────────────────
// Breakpoints
// ─────────────────────────────────────────────────────────────────────────────

/// Named viewport widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

/// Breakpoint widths in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            xs: 0,
            sm: 600,
            md: 900,
            lg: 1200,
            xl: 1536,
        }
    }
}

impl Breakpoints {
    #[must_use]
    pub fn width(&self, bp: Breakpoint) -> u16 {
        match bp {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// Media query matching widths at or above `bp`.
    #[must_use]
    pub fn up(&self, bp: Breakpoint) -> String {
        format!("@media (min-width:{}px)", self.width(bp))
    }

    /// Media query matching widths strictly below `bp`.
    #[must_use]
    pub fn down(&self, bp: Breakpoint) -> String {
        match self.width(bp) {
            // Nothing is narrower than zero.
            0 => "@media not all".to_string(),
            w => format!("@media (max-width:{}.95px)", w - 1),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
    pub shape: Shape,
    pub breakpoints: Breakpoints,
}

impl Default for Theme {
    fn default() -> Self {
        // The default config holds known-good literals.
        match Self::from_config(&ThemeConfig::default()) {
            Ok(theme) => theme,
            Err(e) => unreachable!("default theme is valid: {e}"),
        }
    }
}

impl Theme {
    /// Validate configured values and derive the full theme.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let font_family = config.font_family.trim();
        if font_family.is_empty() || font_family.contains(['<', '>', '{', '}', ';']) {
            return Err(ThemeError::InvalidFontFamily(config.font_family.clone()));
        }

        Ok(Self {
            palette: Palette {
                primary: PaletteColor::from_main(Color::parse("primary", &config.primary)?),
                secondary: PaletteColor::from_main(Color::parse(
                    "secondary",
                    &config.secondary,
                )?),
                background: Background {
                    default: Color::parse("background", &config.background)?,
                    paper: Color::WHITE,
                },
            },
            typography: Typography {
                font_family: font_family.to_string(),
                h6_font_weight: 600,
            },
            shape: Shape {
                border_radius: config.border_radius,
            },
            breakpoints: Breakpoints::default(),
        })
    }

    /// Spacing in pixels for `factor` units.
    #[must_use]
    pub fn spacing(&self, factor: u16) -> u16 {
        factor * SPACING_UNIT
    }

    /// Render the stylesheet inlined into every page.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        let p = &self.palette;
        let mut css = format!(
            ":root{{\
--ps-primary:{pm};--ps-primary-light:{pl};--ps-primary-dark:{pd};--ps-primary-contrast:{pc};\
--ps-secondary:{sm};--ps-secondary-light:{sl};--ps-secondary-dark:{sd};--ps-secondary-contrast:{sc};\
--ps-background:{bg};--ps-paper:{paper};\
--ps-font-family:{font};--ps-h6-weight:{h6};--ps-radius:{radius}px}}\n",
            pm = p.primary.main,
            pl = p.primary.light,
            pd = p.primary.dark,
            pc = p.primary.contrast_text.css(),
            sm = p.secondary.main,
            sl = p.secondary.light,
            sd = p.secondary.dark,
            sc = p.secondary.contrast_text.css(),
            bg = p.background.default,
            paper = p.background.paper,
            font = self.typography.font_family,
            h6 = self.typography.h6_font_weight,
            radius = self.shape.border_radius,
        );

        css.push_str(&self.baseline_rules());
        css.push_str(&self.component_rules());
        css.push_str(&self.responsive_rules());
        css
    }

    fn baseline_rules(&self) -> String {
        format!(
            "html{{-webkit-font-smoothing:antialiased;-moz-osx-font-smoothing:grayscale;box-sizing:border-box;text-size-adjust:100%}}\n\
*,*::before,*::after{{box-sizing:inherit}}\n\
body{{margin:0;color:rgba(0,0,0,0.87);background-color:var(--ps-background);font-family:var(--ps-font-family);font-size:1rem;line-height:1.5}}\n\
a{{color:inherit}}\n\
h1,h2,h3{{margin:0 0 {gap}px}}\n",
            gap = self.spacing(2),
        )
    }

    fn component_rules(&self) -> String {
        format!(
            ".ps-shell{{display:flex;min-height:100vh;flex-direction:column}}\n\
.ps-appbar{{position:sticky;top:0;z-index:1100;background-color:var(--ps-primary);color:var(--ps-primary-contrast);box-shadow:{shadow4}}}\n\
.ps-toolbar{{display:flex;align-items:center;justify-content:space-between;min-height:56px;padding:0 {pad_xs}px}}\n\
.ps-brand{{display:flex;align-items:center;gap:{gap1}px}}\n\
.ps-h6{{margin:0;font-size:1.25rem;font-weight:var(--ps-h6-weight);line-height:1.6;text-decoration:none;color:inherit}}\n\
.ps-nav-desktop{{display:flex;gap:{gap2}px}}\n\
.ps-nav-link{{text-decoration:none;color:inherit;font-weight:500}}\n\
.ps-menu-button{{display:inline-flex;align-items:center;justify-content:center;padding:8px;border-radius:50%;cursor:pointer;color:inherit}}\n\
.ps-drawer-toggle{{position:absolute;opacity:0;pointer-events:none}}\n\
.ps-drawer-toggle:focus-visible ~ .ps-appbar .ps-menu-button{{outline:2px solid currentColor;outline-offset:2px}}\n\
.ps-drawer{{position:fixed;inset:0;z-index:1200;visibility:hidden}}\n\
.ps-drawer-toggle:checked ~ .ps-drawer{{visibility:visible}}\n\
.ps-drawer-backdrop{{position:fixed;inset:0;background-color:rgba(0,0,0,0.5);opacity:0;transition:opacity 225ms}}\n\
.ps-drawer-toggle:checked ~ .ps-drawer .ps-drawer-backdrop{{opacity:1}}\n\
.ps-drawer-panel{{position:fixed;top:0;right:0;height:100%;width:250px;overflow-y:auto;background-color:var(--ps-paper);box-shadow:{shadow16};transform:translateX(100%);transition:transform 225ms}}\n\
.ps-drawer-toggle:checked ~ .ps-drawer .ps-drawer-panel{{transform:none}}\n\
.ps-list{{list-style:none;margin:0;padding:{gap1}px 0}}\n\
.ps-list-item{{display:block;padding:{gap1}px {gap2}px;text-decoration:none;color:rgba(0,0,0,0.87)}}\n\
.ps-list-item:hover{{background-color:rgba(0,0,0,0.04)}}\n\
.ps-container{{width:100%;max-width:{lg}px;margin:{mt}px auto {mb}px;padding:0 {pad_xs}px;flex-grow:1}}\n\
.ps-card{{background-color:var(--ps-paper);border-radius:var(--ps-radius);box-shadow:{shadow3}}}\n\
.ps-card-header{{padding:{gap2}px {gap2}px 0}}\n\
.ps-card-content{{padding:{gap2}px}}\n\
.ps-button{{display:inline-flex;align-items:center;gap:{gap1}px;padding:6px {gap2}px;border:0;border-radius:var(--ps-radius);font:inherit;font-weight:500;text-decoration:none;cursor:pointer}}\n\
.ps-button-primary{{background-color:var(--ps-primary);color:var(--ps-primary-contrast)}}\n\
.ps-button-primary:hover{{background-color:var(--ps-primary-dark)}}\n\
.ps-button-secondary{{background-color:var(--ps-secondary);color:var(--ps-secondary-contrast)}}\n\
.ps-button-secondary:hover{{background-color:var(--ps-secondary-dark)}}\n\
.ps-button-outlined{{background-color:transparent;color:var(--ps-primary);box-shadow:inset 0 0 0 1px var(--ps-primary-light)}}\n\
.ps-actions{{display:flex;flex-wrap:wrap;gap:{gap1}px;margin-top:{gap2}px}}\n\
.ps-fab{{position:fixed;bottom:80px;right:30px;display:inline-flex;align-items:center;justify-content:center;width:56px;height:56px;border-radius:50%;background-color:var(--ps-secondary);color:var(--ps-secondary-contrast);box-shadow:{shadow3}}}\n\
.ps-fab:hover{{background-color:var(--ps-secondary-dark)}}\n\
.ps-footer{{padding:{gap2}px;margin-top:auto;background-color:var(--ps-primary);color:#fff;text-align:center;box-shadow:0 -2px 6px rgba(0,0,0,0.1)}}\n\
.ps-body2{{margin:0;font-size:0.875rem;line-height:1.43}}\n\
.ps-icon{{width:1.5rem;height:1.5rem;fill:currentColor}}\n",
            shadow3 = SHADOW_3,
            shadow4 = SHADOW_4,
            shadow16 = SHADOW_16,
            gap1 = self.spacing(1),
            gap2 = self.spacing(2),
            pad_xs = self.spacing(2),
            mt = self.spacing(4),
            mb = self.spacing(6),
            lg = self.breakpoints.lg,
        )
    }

    /// Mobile (below `sm`) shows the menu button and hides the desktop links
    /// and the floating button; wider viewports do the opposite.
    fn responsive_rules(&self) -> String {
        let bp = &self.breakpoints;
        format!(
            "{down}{{.ps-nav-desktop{{display:none}}.ps-fab{{display:none}}}}\n\
{up}{{.ps-menu-button{{display:none}}.ps-drawer-toggle{{display:none}}.ps-toolbar{{min-height:64px;padding:0 {pad}px}}.ps-container{{padding:0 {pad}px}}}}\n",
            down = bp.down(Breakpoint::Sm),
            up = bp.up(Breakpoint::Sm),
            pad = self.spacing(3),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long_hex() {
        assert_eq!(Color::parse("primary", "#4a148c").unwrap(), Color::rgb(0x4a, 0x14, 0x8c));
        assert_eq!(Color::parse("primary", "#FFF").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("primary", "  #000000 ").unwrap(), Color::BLACK);
    }

    #[test]
    fn test_parse_rejects_malformed_colors() {
        for bad in ["4a148c", "#4a148", "#gggggg", "#", "", "red", "#12345678"] {
            let err = Color::parse("secondary", bad).unwrap_err();
            assert_eq!(
                err,
                ThemeError::InvalidColor {
                    field: "secondary",
                    value: bad.to_string()
                },
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_lighten_and_darken() {
        let c = Color::rgb(100, 0, 200);
        // 177.5, 127.5 and 227.5 truncate down.
        assert_eq!(c.lighten(0.5), Color::rgb(177, 127, 227));
        assert_eq!(c.darken(0.5), Color::rgb(50, 0, 100));
        assert_eq!(c.lighten(1.0), Color::WHITE);
        assert_eq!(c.darken(1.0), Color::BLACK);
    }

    #[test]
    fn test_contrast_ratio_extremes() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9);
        assert!((contrast_ratio(Color::WHITE, Color::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_palette_contrast_text() {
        let theme = Theme::default();
        // Deep purple carries white text, orange carries dark text.
        assert_eq!(theme.palette.primary.contrast_text, ContrastText::Light);
        assert_eq!(theme.palette.secondary.contrast_text, ContrastText::Dark);
    }

    #[test]
    fn test_default_theme_values() {
        let theme = Theme::default();
        assert_eq!(theme.palette.primary.main.to_hex(), "#4a148c");
        assert_eq!(theme.palette.secondary.main.to_hex(), "#ff6f00");
        assert_eq!(theme.palette.background.default.to_hex(), "#f3f3f3");
        assert_eq!(theme.typography.font_family, r#""Poppins", "Roboto", sans-serif"#);
        assert_eq!(theme.typography.h6_font_weight, 600);
        assert_eq!(theme.shape.border_radius, 12);
        assert_eq!(
            theme.palette.primary.dark,
            theme.palette.primary.main.darken(TONAL_OFFSET * 1.5)
        );
    }

    #[test]
    fn test_light_variant_uses_plain_tonal_offset() {
        let theme = Theme::default();
        // #4a148c lightened by 0.2: 110.2, 67.0, 163.0.
        assert_eq!(theme.palette.primary.light, Color::rgb(110, 67, 163));
        assert_eq!(theme.palette.primary.light.to_hex(), "#6e43a3");
        assert!(theme.stylesheet().contains("--ps-primary-light:#6e43a3"));
    }

    #[test]
    fn test_breakpoint_queries() {
        let bp = Breakpoints::default();
        assert_eq!(bp.down(Breakpoint::Sm), "@media (max-width:599.95px)");
        assert_eq!(bp.up(Breakpoint::Sm), "@media (min-width:600px)");
        assert_eq!(bp.down(Breakpoint::Xs), "@media not all");
    }

    #[test]
    fn test_invalid_font_family_rejected() {
        let config = ThemeConfig {
            font_family: "Roboto;}</style>".to_string(),
            ..ThemeConfig::default()
        };
        assert!(matches!(
            Theme::from_config(&config),
            Err(ThemeError::InvalidFontFamily(_))
        ));
    }

    #[test]
    fn test_stylesheet_contains_theme_values() {
        let css = Theme::default().stylesheet();
        assert!(css.contains("--ps-primary:#4a148c"));
        assert!(css.contains("--ps-secondary:#ff6f00"));
        assert!(css.contains("--ps-background:#f3f3f3"));
        assert!(css.contains("--ps-radius:12px"));
        assert!(css.contains("--ps-h6-weight:600"));
        assert!(css.contains("@media (max-width:599.95px){.ps-nav-desktop{display:none}.ps-fab{display:none}}"));
        assert!(css.contains(".ps-drawer-panel{position:fixed;top:0;right:0;height:100%;width:250px"));
        assert!(css.contains("@media (min-width:600px){.ps-menu-button{display:none}.ps-drawer-toggle{display:none}"));
        assert!(css.contains(".ps-drawer-toggle:focus-visible ~ .ps-appbar .ps-menu-button{outline"));
        assert!(!css.contains('<'));
    }
}
