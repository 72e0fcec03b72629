//! Workshop analysis page: keyword frequency across the eight teams and the
//! value categories they want preserved.

use crate::chart::{
    BarOptions, BarOrientation, ChartSpec, Paint, PalettePolicy, RadarOptions, ValueLabels,
    build_bar, build_radar,
};
use crate::components::{
    ComponentSpec, Hero, NarrativeBox, QuoteBlock, StatHighlight, TeamCard, layout,
};
use crate::error::DeckResult;
use crate::pages::{emit, grid_of};
use crate::render::{Fragment, Surface};
use crate::theme::{Color, Tone};

/// Keyword frequency over all team discussions, most frequent first.
const KEYWORDS: [(&str, f64); 10] = [
    ("オープン", 28.0),
    ("ウェルカム", 24.0),
    ("受け入れる", 22.0),
    ("つながり", 18.0),
    ("水", 16.0),
    ("歴史", 14.0),
    ("人の温かさ", 12.0),
    ("食", 10.0),
    ("自然", 9.0),
    ("チャレンジ", 7.0),
];

/// Importance score per value category, on a 0-100 scale.
const CATEGORY_SCORES: [(&str, f64); 6] = [
    ("水", 95.0),
    ("人", 88.0),
    ("歴史", 82.0),
    ("規模感", 75.0),
    ("食", 70.0),
    ("立地", 78.0),
];

const CATEGORY_DETAILS: [(&str, &str); 6] = [
    ("💧 水", "湧水・源兵衛川・柿田川。三島の原点。"),
    ("👥 人", "温かさ・オープンさ。よそ者を受け入れるDNA。"),
    ("🏯 歴史", "三嶋大社・宿場町。千年を超える積層。"),
    ("📐 規模感", "大きすぎず小さすぎない。ちょうどいいサイズ。"),
    ("🍽 食", "うなぎ・みしまコロッケ。食文化の豊かさ。"),
    ("📍 立地", "東京から1時間。富士山・伊豆・箱根への玄関口。"),
];

const TEAMS: [(&str, &str); 8] = [
    ("第1班", "水・オープン・歴史・つながり"),
    ("第2班", "ウェルカム・チャレンジ・食・自然"),
    ("第3班", "受け入れる・水・人の温かさ・規模感"),
    ("第4班", "オープン・つながり・歴史・立地"),
    ("第5班", "ウェルカム・水・自然・人の温かさ"),
    ("第6班", "オープン・受け入れる・食・チャレンジ"),
    ("第7班", "ウェルカム・オープン・つながり・水"),
    ("第8班", "受け入れる・歴史・人の温かさ・つながり"),
];

pub(crate) fn render(surface: &mut dyn Surface) -> DeckResult<()> {
    emit(
        surface,
        &ComponentSpec::Hero(
            Hero::new("ワークショップ分析")
                .with_subtitle("Workshop Analysis")
                .with_description("8チームのワークショップから浮かび上がった三島の本質。"),
        ),
    )?;

    surface.fragment(&grid_of(
        2,
        &[
            ComponentSpec::Stat(StatHighlight::new("8", "参加チーム数")),
            ComponentSpec::Stat(StatHighlight::new("160+", "抽出キーワード数")),
        ],
    )?)?;

    emit(surface, &ComponentSpec::Divider)?;
    emit(
        surface,
        &ComponentSpec::Quote(QuoteBlock::new(
            "第7班が生み出した象徴フレーズ：「ウェルカム・オープンな街、私たちの三島」",
        )),
    )?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("キーワード頻度分析"))?;
    surface.fragment(&layout::lead(
        "全チームの議論から抽出されたキーワードの出現頻度。",
    ))?;
    surface.chart(&keyword_chart()?)?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("変えたくない三島の良さ"))?;
    surface.fragment(&layout::lead(
        "ワークショップで「守りたい」と挙がった6つの価値カテゴリ。",
    ))?;
    surface.chart(&category_radar()?)?;

    surface.fragment(&layout::section_heading("カテゴリ詳細"))?;
    surface.fragment(&layout::grid(
        3,
        CATEGORY_DETAILS
            .iter()
            .map(|(label, body)| detail_item(label, body)),
    ))?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("8チーム共通キーワード分析"))?;
    surface.fragment(&layout::lead(
        "各チームから抽出されたキーワードを分類。共通項が浮かび上がる。",
    ))?;
    let teams: Vec<ComponentSpec> = TEAMS
        .iter()
        .map(|(name, keywords)| ComponentSpec::Team(TeamCard::new(*name, *keywords)))
        .collect();
    surface.fragment(&grid_of(4, &teams)?)?;

    emit(
        surface,
        &ComponentSpec::Narrative(
            NarrativeBox::new()
                .with_paragraph(
                    "8チームすべてに共通するのは「オープン」「ウェルカム」「受け入れる」というキーワード。",
                )
                .with_paragraph(
                    "三島の本質は「開かれた水の街」であり、それは宿場町としてよそ者を迎え入れてきた歴史的DNAに根差している。",
                )
                .with_paragraph(
                    "この行動原理をセセラギズムとして言語化し、次の10年の指針とする。",
                ),
        ),
    )?;

    Ok(())
}

/// Horizontal bar chart of keyword frequency, shaded deep-to-foam down
/// the ranking.
pub fn keyword_chart() -> DeckResult<ChartSpec> {
    let categories: Vec<&str> = KEYWORDS.iter().map(|(label, _)| *label).collect();
    let counts: Vec<f64> = KEYWORDS.iter().map(|(_, count)| *count).collect();

    build_bar(
        &categories,
        &counts,
        BarOptions::default()
            .with_title("ワークショップ キーワード頻度")
            .with_orientation(BarOrientation::Horizontal)
            .with_palette(PalettePolicy::Sequence {
                paints: frequency_ramp(),
            })
            .with_value_labels(ValueLabels::Auto)
            .with_hover_template("{category} 出現回数: {value}回")
            .with_axis_titles("キーワード", "出現回数")
            .with_value_range(0.0, 34.0)
            .with_height(450),
    )
}

/// Radar of the six value categories on a 0-100 importance scale.
pub fn category_radar() -> DeckResult<ChartSpec> {
    let categories: Vec<&str> = CATEGORY_SCORES.iter().map(|(label, _)| *label).collect();
    let scores: Vec<f64> = CATEGORY_SCORES.iter().map(|(_, score)| *score).collect();

    build_radar(
        &categories,
        &scores,
        RadarOptions::default()
            .with_series_name("重要度スコア")
            .with_fill_alpha(0.18)
            .with_hover_template("{category} 重要度: {value}"),
    )
}

/// One paint per keyword, blending theme tones with intermediate shades.
fn frequency_ramp() -> Vec<Paint> {
    vec![
        Paint::Token(Tone::Deep),
        Paint::Rgb(Color::rgb(0x11, 0x5e, 0x82)),
        Paint::Token(Tone::Primary),
        Paint::Rgb(Color::rgb(0x23, 0x8d, 0x96)),
        Paint::Rgb(Color::rgb(0x2b, 0xaa, 0x9e)),
        Paint::Token(Tone::Teal),
        Paint::Rgb(Color::rgb(0x66, 0xc2, 0xa5)),
        Paint::Token(Tone::Aqua),
        Paint::Rgb(Color::rgb(0xa0, 0xe4, 0xd0)),
        Paint::Token(Tone::Foam),
    ]
}

fn detail_item(label: &str, body: &str) -> Fragment {
    Fragment::element("div")
        .with_class("detail-item")
        .with_child(Fragment::element("strong").with_text(label).build())
        .with_child(Fragment::element("span").with_text(body).build())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_ramp_covers_every_bar() {
        assert_eq!(frequency_ramp().len(), KEYWORDS.len());
    }

    #[test]
    fn keywords_are_sorted_by_frequency() {
        for window in KEYWORDS.windows(2) {
            assert!(window[0].1 >= window[1].1);
        }
    }

    #[test]
    fn category_radar_closes_the_polygon() {
        let spec = category_radar().expect("radar should build");
        let points = &spec.series[0].points;
        assert_eq!(points.len(), CATEGORY_SCORES.len() + 1);
        assert_eq!(points[0].category, points[points.len() - 1].category);
    }
}
