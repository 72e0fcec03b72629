//! Visual token registry for the deck.
//!
//! A [`Theme`] is constructed once by the application shell and borrowed
//! read-only everywhere else. Components never see concrete color values:
//! they reference tokens by [`Tone`] name and the theme resolves names to
//! values when the stylesheet is emitted at mount time.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// Semantic visual-token name.
///
/// The set is closed: component code can only ask for tones that exist,
/// so no raw color value ever appears outside the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Ink,
    Deep,
    Primary,
    Teal,
    Cyan,
    Aqua,
    Foam,
    Mist,
    Paper,
    Danger,
    DangerDark,
    Slate,
}

impl Tone {
    pub const ALL: [Tone; 12] = [
        Tone::Ink,
        Tone::Deep,
        Tone::Primary,
        Tone::Teal,
        Tone::Cyan,
        Tone::Aqua,
        Tone::Foam,
        Tone::Mist,
        Tone::Paper,
        Tone::Danger,
        Tone::DangerDark,
        Tone::Slate,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Tone::Ink => "ink",
            Tone::Deep => "deep",
            Tone::Primary => "primary",
            Tone::Teal => "teal",
            Tone::Cyan => "cyan",
            Tone::Aqua => "aqua",
            Tone::Foam => "foam",
            Tone::Mist => "mist",
            Tone::Paper => "paper",
            Tone::Danger => "danger",
            Tone::DangerDark => "danger-dark",
            Tone::Slate => "slate",
        }
    }

    /// CSS custom-property reference for this tone, e.g. `var(--deck-primary)`.
    #[must_use]
    pub fn css_var(self) -> String {
        format!("var(--deck-{})", self.name())
    }
}

/// An opaque sRGB color value.
///
/// Serialized as a lowercase `#rrggbb` string inside chart payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form used in stylesheets and chart payloads.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn parse_hex(text: &str) -> DeckResult<Self> {
        let digits = text
            .strip_prefix('#')
            .ok_or_else(|| DeckError::InvalidData(format!("color '{text}' must start with '#'")))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(DeckError::InvalidData(format!(
                "color '{text}' must be a #rrggbb hex value"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| {
                DeckError::InvalidData(format!("color '{text}' has a non-hex channel"))
            })
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.hex()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Color::parse_hex(&text).map_err(|err| err.to_string())
    }
}

/// Constructed-once visual configuration.
///
/// The default carries the water-motif palette of the deck: ink and deep
/// navies for text, a teal-to-foam gradient family for accents, and a
/// danger pair for decline markers.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    tokens: IndexMap<Tone, Color>,
    pub font_family: String,
    pub radius_px: u8,
    pub side_panel_width_px: u16,
}

impl Default for Theme {
    fn default() -> Self {
        let mut tokens = IndexMap::with_capacity(Tone::ALL.len());
        tokens.insert(Tone::Ink, Color::rgb(0x0a, 0x25, 0x40));
        tokens.insert(Tone::Deep, Color::rgb(0x0d, 0x3b, 0x66));
        tokens.insert(Tone::Primary, Color::rgb(0x1a, 0x6b, 0x8a));
        tokens.insert(Tone::Teal, Color::rgb(0x48, 0xb4, 0xa0));
        tokens.insert(Tone::Cyan, Color::rgb(0x26, 0xc6, 0xda));
        tokens.insert(Tone::Aqua, Color::rgb(0x80, 0xde, 0xea));
        tokens.insert(Tone::Foam, Color::rgb(0xb2, 0xeb, 0xf2));
        tokens.insert(Tone::Mist, Color::rgb(0xe0, 0xf7, 0xfa));
        tokens.insert(Tone::Paper, Color::rgb(0xf8, 0xfd, 0xff));
        tokens.insert(Tone::Danger, Color::rgb(0xe5, 0x73, 0x73));
        tokens.insert(Tone::DangerDark, Color::rgb(0xc6, 0x28, 0x28));
        tokens.insert(Tone::Slate, Color::rgb(0x60, 0x7d, 0x8b));

        Self {
            tokens,
            font_family:
                "'Noto Sans JP', 'Hiragino Kaku Gothic ProN', 'Yu Gothic', sans-serif".to_string(),
            radius_px: 14,
            side_panel_width_px: 300,
        }
    }
}

impl Theme {
    #[must_use]
    pub fn color(&self, tone: Tone) -> Color {
        // The default table is complete; an override can only replace an
        // existing entry, so the fallback is unreachable in practice.
        self.tokens
            .get(&tone)
            .copied()
            .unwrap_or(Color::rgb(0x0a, 0x25, 0x40))
    }

    /// Replaces the value of an existing token.
    pub fn set_color(&mut self, tone: Tone, color: Color) {
        self.tokens.insert(tone, color);
    }

    #[must_use]
    pub fn tokens(&self) -> impl Iterator<Item = (Tone, Color)> + '_ {
        self.tokens.iter().map(|(tone, color)| (*tone, *color))
    }

    /// Emits the full stylesheet: token custom properties in insertion
    /// order, followed by the component rule body.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        let mut css = String::with_capacity(12 * 1024);
        css.push_str(":root {\n");
        for (tone, color) in &self.tokens {
            css.push_str(&format!("  --deck-{}: {};\n", tone.name(), color.hex()));
        }
        css.push_str(&format!("  --deck-font: {};\n", self.font_family));
        css.push_str(&format!("  --deck-radius: {}px;\n", self.radius_px));
        css.push_str(&format!(
            "  --deck-panel-width: {}px;\n",
            self.side_panel_width_px
        ));
        css.push_str("}\n\n");
        css.push_str(COMPONENT_RULES);
        css
    }
}

const COMPONENT_RULES: &str = r#"* { box-sizing: border-box; }
body {
  margin: 0 0 0 var(--deck-panel-width);
  padding: 2.4rem 3rem 4rem;
  font-family: var(--deck-font);
  color: var(--deck-ink);
  background: linear-gradient(180deg, var(--deck-paper) 0%, #ffffff 55%);
  line-height: 1.7;
}

.side-panel {
  position: fixed;
  top: 0;
  bottom: 0;
  left: 0;
  width: var(--deck-panel-width);
  padding: 2rem 1.4rem;
  background: linear-gradient(180deg, var(--deck-ink) 0%, var(--deck-deep) 100%);
  color: var(--deck-mist);
  overflow-y: auto;
}
.side-panel-brand { font-size: 1.45rem; font-weight: 700; letter-spacing: 0.05em; }
.side-panel-tagline { margin-top: 0.4rem; font-size: 0.82rem; color: var(--deck-aqua); white-space: pre-line; }
.side-panel-nav { margin-top: 2rem; padding: 0; list-style: none; }
.side-panel-nav li { margin: 0.3rem 0; }
.side-panel-nav a {
  display: block;
  padding: 0.55rem 0.8rem;
  border-radius: 8px;
  color: var(--deck-foam);
  text-decoration: none;
}
.side-panel-nav a:hover { background: rgba(128, 222, 234, 0.14); }
.side-panel-footer { margin-top: 2.5rem; font-size: 0.72rem; color: var(--deck-slate); white-space: pre-line; }

.hero {
  position: relative;
  overflow: hidden;
  padding: 3.2rem 3rem 4.6rem;
  border-radius: var(--deck-radius);
  background: linear-gradient(135deg, var(--deck-ink) 0%, var(--deck-deep) 45%, var(--deck-primary) 100%);
  color: #ffffff;
  margin-bottom: 2.2rem;
}
.hero-title { margin: 0; font-size: 2.5rem; font-weight: 800; letter-spacing: 0.04em; }
.hero-subtitle { margin: 0.7rem 0 0; font-size: 1.15rem; color: var(--deck-aqua); font-weight: 600; }
.hero-description { margin: 1rem 0 0; max-width: 46rem; font-size: 0.95rem; color: var(--deck-foam); }
.hero-wave { position: absolute; left: 0; right: 0; bottom: -2px; width: 100%; height: 70px; }
.hero-wave path { animation: deck-drift 9s ease-in-out infinite alternate; }
@keyframes deck-drift {
  from { transform: translateX(0); }
  to { transform: translateX(-36px); }
}

.section-heading {
  margin: 2.6rem 0 1rem;
  font-size: 1.45rem;
  font-weight: 700;
  color: var(--deck-deep);
  border-left: 5px solid var(--deck-cyan);
  padding-left: 0.7rem;
}
.lead { max-width: 52rem; color: var(--deck-slate); }

.page-grid { display: grid; gap: 1.1rem; margin: 1.2rem 0; }

.metric-card {
  background: #ffffff;
  border: 1px solid var(--deck-foam);
  border-radius: var(--deck-radius);
  padding: 1.3rem 1.5rem;
  box-shadow: 0 6px 18px rgba(13, 59, 102, 0.07);
}
.metric-label { font-size: 0.8rem; font-weight: 600; color: var(--deck-slate); letter-spacing: 0.08em; }
.metric-value { margin-top: 0.3rem; font-size: 2.3rem; font-weight: 800; color: var(--deck-primary); }
.metric-desc { margin-top: 0.35rem; font-size: 0.85rem; color: var(--deck-slate); }

.timeline-card {
  display: flex;
  gap: 1.2rem;
  align-items: flex-start;
  background: #ffffff;
  border: 1px solid var(--deck-foam);
  border-left: 6px solid var(--deck-aqua);
  border-radius: var(--deck-radius);
  padding: 1.2rem 1.4rem;
  margin: 0.8rem 0;
}
.timeline-card.current {
  border-left-color: var(--deck-cyan);
  background: linear-gradient(120deg, var(--deck-mist) 0%, #ffffff 60%);
  box-shadow: 0 8px 22px rgba(38, 198, 218, 0.18);
}
.timeline-year {
  flex: 0 0 auto;
  padding: 0.35rem 0.8rem;
  border-radius: 999px;
  background: var(--deck-mist);
  color: var(--deck-deep);
  font-weight: 700;
  font-size: 0.85rem;
}
.timeline-card.current .timeline-year { background: var(--deck-cyan); color: #ffffff; }
.timeline-title { font-size: 1.15rem; font-weight: 700; color: var(--deck-deep); }
.timeline-stage {
  display: inline-block;
  margin-top: 0.25rem;
  padding: 0.1rem 0.6rem;
  border-radius: 999px;
  background: var(--deck-foam);
  color: var(--deck-primary);
  font-size: 0.75rem;
  font-weight: 600;
}
.timeline-desc { margin: 0.5rem 0 0; font-size: 0.88rem; color: var(--deck-slate); }

.concept-card {
  background: #ffffff;
  border: 1px solid var(--deck-foam);
  border-left: 5px solid var(--deck-teal);
  border-radius: var(--deck-radius);
  padding: 1.1rem 1.3rem;
}
.concept-card.centered { text-align: center; border-left: 1px solid var(--deck-foam); border-top: 5px solid var(--deck-teal); }
.concept-icon { font-size: 1.7rem; }
.concept-title { margin-top: 0.3rem; font-weight: 700; color: var(--deck-deep); }
.concept-body { margin-top: 0.4rem; font-size: 0.87rem; color: var(--deck-slate); }

.philosophy-card {
  background: #ffffff;
  border: 1px solid var(--deck-foam);
  border-radius: var(--deck-radius);
  padding: 1.2rem 1.4rem;
  text-align: center;
}
.philosophy-card.highlight {
  border: 2px solid var(--deck-cyan);
  background: linear-gradient(160deg, var(--deck-mist) 0%, #ffffff 70%);
}
.philosophy-eyebrow { font-size: 0.72rem; font-weight: 700; letter-spacing: 0.12em; color: var(--deck-cyan); }
.philosophy-title { margin-top: 0.25rem; font-size: 1.25rem; font-weight: 800; color: var(--deck-primary); }
.philosophy-desc { margin-top: 0.45rem; font-size: 0.85rem; color: var(--deck-slate); }

.narrative-box {
  background: linear-gradient(135deg, var(--deck-ink) 0%, var(--deck-deep) 100%);
  color: var(--deck-mist);
  border-radius: var(--deck-radius);
  padding: 1.8rem 2rem;
  margin: 1.6rem 0;
}
.narrative-box p { margin: 0.6rem 0; font-size: 0.95rem; }
.narrative-emphasis { margin-top: 1rem; font-size: 1.18rem; font-weight: 700; color: var(--deck-aqua); }

.stat-highlight {
  background: linear-gradient(150deg, var(--deck-primary) 0%, var(--deck-teal) 100%);
  color: #ffffff;
  border-radius: var(--deck-radius);
  padding: 1.2rem 1rem;
  text-align: center;
}
.stat-number { font-size: 2.1rem; font-weight: 800; }
.stat-label { margin-top: 0.2rem; font-size: 0.82rem; color: var(--deck-mist); }

.team-card {
  background: #ffffff;
  border: 1px solid var(--deck-foam);
  border-top: 4px solid var(--deck-aqua);
  border-radius: var(--deck-radius);
  padding: 0.9rem 1rem;
  text-align: center;
}
.team-name { font-weight: 700; color: var(--deck-deep); }
.team-keywords { margin-top: 0.3rem; font-size: 0.8rem; color: var(--deck-slate); }

.quote-block {
  margin: 1.4rem auto;
  max-width: 44rem;
  padding: 1.3rem 1.8rem;
  border-left: 5px solid var(--deck-aqua);
  background: var(--deck-paper);
  border-radius: 0 var(--deck-radius) var(--deck-radius) 0;
  font-size: 1.2rem;
  font-weight: 700;
  color: var(--deck-deep);
  text-align: center;
}
.quote-source { margin-top: 0.5rem; font-size: 0.8rem; font-weight: 400; color: var(--deck-slate); }

.subcopy-card {
  background: linear-gradient(135deg, var(--deck-deep) 0%, var(--deck-primary) 100%);
  color: var(--deck-foam);
  border-radius: var(--deck-radius);
  padding: 1.1rem 1.3rem;
  text-align: center;
  font-weight: 600;
}

.formula-row { display: flex; align-items: center; justify-content: center; gap: 0.5rem; flex-wrap: wrap; margin: 1.2rem 0; }
.formula-row .philosophy-card { flex: 1; min-width: 160px; max-width: 260px; }
.formula-operator { font-size: 2rem; font-weight: 700; color: var(--deck-primary); }

.story-step { display: flex; gap: 1rem; align-items: flex-start; }
.story-badge {
  flex: 0 0 auto;
  margin-top: 0.6rem;
  padding: 0.3rem 0.8rem;
  border-radius: 999px;
  background: linear-gradient(135deg, var(--deck-primary), var(--deck-teal));
  color: #ffffff;
  font-size: 0.8rem;
  font-weight: 700;
}
.story-body {
  flex: 1;
  background: #ffffff;
  border-left: 4px solid var(--deck-primary);
  border-radius: 0 12px 12px 0;
  padding: 1.2rem 1.5rem;
  margin-bottom: 0.3rem;
  box-shadow: 0 1px 6px rgba(10, 37, 64, 0.06);
}
.story-step.current .story-badge { background: linear-gradient(135deg, var(--deck-teal), var(--deck-cyan)); }
.story-step.current .story-body {
  border-left-color: var(--deck-teal);
  background: linear-gradient(135deg, var(--deck-mist) 0%, #ffffff 50%);
}
.story-name { font-size: 1.2rem; font-weight: 800; color: var(--deck-ink); }
.story-stage { margin-left: 0.4rem; font-size: 0.85rem; font-weight: 600; color: var(--deck-primary); }
.story-detail { margin: 0.4rem 0 0; font-size: 0.85rem; color: var(--deck-slate); }
.story-arrow { text-align: center; color: var(--deck-primary); font-size: 0.8rem; margin: 0.1rem 0; }

.structure-stack { max-width: 640px; margin: 0 auto 1.5rem; }
.structure-tier {
  border-radius: var(--deck-radius);
  padding: 1.1rem;
  text-align: center;
  font-weight: 700;
  color: var(--deck-deep);
}
.structure-tier.apex {
  background: linear-gradient(135deg, var(--deck-deep), var(--deck-primary));
  color: #ffffff;
  font-size: 1.15rem;
  font-weight: 800;
  letter-spacing: 0.06em;
}
.structure-tier.statement {
  background: linear-gradient(135deg, var(--deck-primary), var(--deck-teal));
  color: #ffffff;
  font-size: 0.95rem;
}
.structure-tier.principles {
  background: linear-gradient(135deg, var(--deck-mist), var(--deck-foam));
  border: 2px solid var(--deck-aqua);
  color: var(--deck-ink);
}
.structure-tier.themes { background: #ffffff; border: 2px solid var(--deck-cyan); font-size: 0.95rem; }
.structure-tier.plain { background: #ffffff; border: 1px solid var(--deck-foam); font-weight: 600; font-size: 0.9rem; }
.structure-tier-sub { display: block; font-size: 0.78rem; font-weight: 400; color: var(--deck-slate); }
.structure-connector { width: 0; height: 20px; margin: 0.4rem auto; border-left: 2px solid var(--deck-aqua); }

.principle-row {
  display: grid;
  grid-template-columns: 80px 1fr;
  gap: 1rem;
  background: #ffffff;
  border-left: 5px solid var(--deck-primary);
  border-radius: var(--deck-radius);
  padding: 1.4rem 1.5rem;
  margin-bottom: 0.8rem;
  box-shadow: 0 2px 10px rgba(10, 37, 64, 0.06);
}
.principle-row.tinted { background: linear-gradient(135deg, var(--deck-mist) 0%, #ffffff 60%); }
.principle-side { text-align: center; }
.principle-glyph { font-size: 2rem; margin-bottom: 0.3rem; }
.principle-badge {
  display: inline-block;
  padding: 0.2rem 0.7rem;
  border-radius: 12px;
  background: linear-gradient(135deg, var(--deck-deep), var(--deck-primary));
  color: #ffffff;
  font-size: 0.75rem;
  font-weight: 700;
}
.principle-title { font-size: 1.15rem; font-weight: 800; color: var(--deck-ink); }
.principle-trait { margin-top: 0.1rem; font-size: 0.78rem; font-weight: 600; color: var(--deck-primary); }
.principle-meaning { margin: 0.4rem 0 0; font-size: 0.88rem; color: var(--deck-slate); line-height: 1.65; }
.principle-check {
  margin-top: 0.5rem;
  padding: 0.5rem 0.8rem;
  border-radius: 8px;
  background: var(--deck-paper);
  font-size: 0.82rem;
  font-style: italic;
  color: var(--deck-deep);
}

.split-columns { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; margin: 1.2rem 0; }
.split-columns .concept-card { margin-bottom: 0.6rem; }
.column-heading {
  margin-bottom: 0.6rem;
  padding-bottom: 0.3rem;
  border-bottom: 2px solid var(--deck-cyan);
  font-size: 0.95rem;
  font-weight: 700;
  color: var(--deck-deep);
}
.column-heading.danger { color: var(--deck-danger-dark); border-bottom-color: var(--deck-danger); }

.detail-item {
  background: var(--deck-paper);
  border-left: 3px solid var(--deck-aqua);
  border-radius: 8px;
  padding: 0.8rem 1rem;
}
.detail-item strong { display: block; font-size: 0.88rem; color: var(--deck-deep); }
.detail-item span { font-size: 0.78rem; color: var(--deck-slate); }

.note-box {
  background: var(--deck-paper);
  border: 1px solid var(--deck-foam);
  border-left: 5px solid var(--deck-aqua);
  border-radius: 8px;
  padding: 0.9rem 1.2rem;
  margin: 1rem 0;
  font-size: 0.88rem;
  color: var(--deck-slate);
}
.note-box p { margin: 0.25rem 0; }

.wave-divider { margin: 2.4rem 0 1.2rem; height: 34px; }
.wave-divider svg { width: 100%; height: 100%; }

.chart-embed { margin: 1.6rem 0; }
.chart-embed figcaption { font-weight: 700; color: var(--deck-deep); margin-bottom: 0.5rem; }
.chart-host {
  min-height: 280px;
  border: 1px dashed var(--deck-foam);
  border-radius: var(--deck-radius);
  background: #ffffff;
}

details.fold {
  margin: 1rem 0;
  border: 1px solid var(--deck-foam);
  border-radius: 8px;
  padding: 0.6rem 1rem;
  background: #ffffff;
}
details.fold summary { cursor: pointer; font-weight: 600; color: var(--deck-primary); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_covers_every_tone() {
        let theme = Theme::default();
        for tone in Tone::ALL {
            // Lookup must not fall back for any known tone.
            assert_eq!(theme.color(tone), theme.tokens[&tone]);
        }
    }

    #[test]
    fn stylesheet_declares_every_token_custom_property() {
        let css = Theme::default().stylesheet();
        for tone in Tone::ALL {
            assert!(
                css.contains(&format!("--deck-{}:", tone.name())),
                "stylesheet is missing --deck-{}",
                tone.name()
            );
        }
        assert!(css.contains("--deck-primary: #1a6b8a;"));
        assert!(css.contains(".side-panel"));
    }

    #[test]
    fn hex_round_trips() {
        let color = Color::rgb(0x1a, 0x6b, 0x8a);
        assert_eq!(color.hex(), "#1a6b8a");
        assert_eq!(Color::parse_hex("#1a6b8a").expect("parse"), color);
    }

    #[test]
    fn parse_hex_rejects_malformed_input() {
        assert!(Color::parse_hex("1a6b8a").is_err());
        assert!(Color::parse_hex("#1a6b").is_err());
        assert!(Color::parse_hex("#1a6bgz").is_err());
    }
}
