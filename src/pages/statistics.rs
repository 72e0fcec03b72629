//! City statistics page: population, tourism and business trends, plus the
//! cultural assets behind them.

use rust_decimal::Decimal;

use crate::chart::{
    Annotation, AreaFill, BarOptions, ChartSpec, LineOptions, MarkerShape, Paint, PalettePolicy,
    ProjectedSegmentStyle, StrokeDash, TickFormat, ValueLabels, build_bar, build_line,
    build_line_with_projection, project_decimal_rates,
};
use crate::components::{
    ComponentSpec, ConceptCard, ConceptLayout, Hero, MetricCard, NarrativeBox, layout,
};
use crate::error::DeckResult;
use crate::pages::{emit, grid_of};
use crate::render::Surface;
use crate::theme::Tone;

/// Registered population (Japanese residents), one value per year from 2000
/// through 2025.
const ACTUAL_POPULATION: [f64; 26] = [
    110_300.0, 110_700.0, 110_500.0, 111_000.0, 111_300.0, 111_600.0, 112_100.0, 112_200.0,
    111_900.0, 111_300.0, 110_800.0, 110_600.0, 110_400.0, 110_200.0, 109_900.0, 109_500.0,
    109_000.0, 108_400.0, 108_000.0, 107_400.0, 106_800.0, 106_200.0, 105_500.0, 104_800.0,
    104_100.0, 103_359.0,
];

/// Annual visitors in thousands, 2015 through 2024.
const TOURISM: [f64; 10] = [
    5_200.0, 5_350.0, 5_500.0, 5_600.0, 5_400.0, 2_800.0, 3_500.0, 4_800.0, 5_300.0, 5_700.0,
];

/// Establishment counts from the economic census years.
const BUSINESS_YEARS: [&str; 8] = [
    "2006", "2009", "2012", "2014", "2016", "2019", "2021", "2024",
];
const BUSINESS_COUNTS: [f64; 8] = [
    5_500.0, 5_350.0, 5_200.0, 5_100.0, 5_000.0, 4_950.0, 4_850.0, 4_800.0,
];

const ASSETS: [(&str, &str, &str); 5] = [
    (
        "⛩",
        "三嶋大社",
        "伊豆国一宮。源頼朝が源氏再興を祈願した歴史ある神社。年間約150万人が参拝。",
    ),
    (
        "🏞",
        "源兵衛川",
        "市民の手で復活した清流。せせらぎの原点。世界水遺産に登録。",
    ),
    (
        "🌳",
        "白滝公園",
        "富士山の伏流水が湧き出す都市公園。夏でも冷たい湧水が市民の憩いの場。",
    ),
    (
        "🎶",
        "しゃぎり（祭囃子）",
        "三嶋大社の例大祭で奏でられる伝統芸能。街に響く三島のリズム。",
    ),
    (
        "💧",
        "柿田川湧水群",
        "東洋一の湧水量を誇る清流。国指定天然記念物。日量約100万トン。",
    ),
];

pub(crate) fn render(surface: &mut dyn Surface) -> DeckResult<()> {
    emit(
        surface,
        &ComponentSpec::Hero(
            Hero::new("三島市統計データ")
                .with_subtitle("Mishima City Statistics")
                .with_description(
                    "人口・観光・産業から見る三島の現在地。データが示す課題と可能性。",
                ),
        ),
    )?;

    surface.fragment(&layout::section_heading("人口推移と将来推計"))?;
    surface.fragment(&layout::lead(
        "住民基本台帳ベース（日本人住民）。2026年以降は近年の減少率をもとにした推計。",
    ))?;
    surface.chart(&population_chart()?)?;

    let projected = projected_population()?;
    let latest = ACTUAL_POPULATION[ACTUAL_POPULATION.len() - 1];
    let horizon = projected.last().copied().unwrap_or(latest);
    emit(
        surface,
        &ComponentSpec::Metric(
            MetricCard::new(
                "人口動態サマリ",
                format!(
                    "2025年 {}人 → 2035年 約{}人（推計）",
                    thousands(latest),
                    thousands(horizon)
                ),
            )
            .with_description(
                "ピーク（2007年 約112,200人）から2025年で約8,800人減（-7.9%）。近年は年-1.0〜-1.3%で加速。推計では2035年に10万人を割り込む可能性がある。移住促進・関係人口の拡大が今後のカギとなる。",
            ),
        ),
    )?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("観光客数推移（2015年 - 2024年）"))?;
    surface.chart(&tourism_chart()?)?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("事業所数推移"))?;
    surface.chart(&business_chart()?)?;
    surface.fragment(&grid_of(
        2,
        &[
            ComponentSpec::Metric(
                MetricCard::new("事業所数の動向", "約700減")
                    .with_value_tone(Tone::DangerDark)
                    .with_description(
                        "2006年の約5,500事業所から2024年には約4,800事業所に。約12.7%の減少。商店街の空洞化は全国的課題。一方で、新規創業・スタートアップの誘致、リノベーションまちづくりなど、新たな動きも芽生えている。",
                    ),
            ),
            ComponentSpec::Metric(
                MetricCard::new("セセラギズムが目指す効果", "外へ発信 → 内への還流")
                    .with_value_tone(Tone::Teal)
                    .with_description(
                        "三島の魅力を外へ発信することで、関係人口・交流人口の拡大、新規事業・移住者の獲得を促進する。",
                    ),
            ),
        ],
    )?)?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading(
        "三島の主要文化資産 ── 湧水の街のアイデンティティ",
    ))?;
    let assets: Vec<ComponentSpec> = ASSETS
        .iter()
        .map(|(icon, title, body)| {
            ComponentSpec::Concept(
                ConceptCard::new(*title, *body)
                    .with_icon(*icon)
                    .with_accent(Tone::Teal)
                    .with_layout(ConceptLayout::TopAccent),
            )
        })
        .collect();
    surface.fragment(&grid_of(5, &assets)?)?;

    emit(
        surface,
        &ComponentSpec::Narrative(
            NarrativeBox::new()
                .with_paragraph(
                    "三島は「湧水の街」としてのアイデンティティを軸に、歴史・文化・自然・食・人のつながりが豊かに重なり合う街である。",
                )
                .with_paragraph(
                    "人口減少や事業所数減少という課題に直面しながらも、コロナ禍からの観光回復が示すように、この街が持つ引力は衰えていない。",
                )
                .with_paragraph(
                    "セセラギズムは、この蓄積されたエネルギーを内から外へ解き放ち、新しい人・コト・ビジネスを呼び込む次の10年の推進力となる。",
                ),
        ),
    )?;

    Ok(())
}

/// Population line with a dashed ten-year projection hanging off the 2025
/// value.
pub fn population_chart() -> DeckResult<ChartSpec> {
    let actual_years: Vec<String> = (2000..=2025).map(|year| year.to_string()).collect();
    let projected_years: Vec<String> = (2026..=2035).map(|year| year.to_string()).collect();
    let projected = projected_population()?;

    build_line_with_projection(
        &actual_years,
        &ACTUAL_POPULATION,
        &projected_years,
        &projected,
        LineOptions::default()
            .with_series_name("実績")
            .with_stroke_width(2.5)
            .with_marker(MarkerShape::Circle, 4)
            .with_hover_template("{category}年 人口: {value}人（実績）")
            .with_axis_titles("年", "人口（人）")
            .with_value_range(90_000.0, 115_000.0)
            .with_tick_format(TickFormat::Thousands)
            .with_annotation(Annotation::VerticalMarker {
                category: "2025".to_owned(),
                label: "80周年".to_owned(),
            }),
        ProjectedSegmentStyle::default()
            .with_name("推計")
            .with_marker(MarkerShape::Diamond, 4)
            .with_hover_template("{category}年 人口: {value}人（推計）"),
    )
}

/// Visitor counts as bars, colored by whether the year cleared the
/// three-million mark.
pub fn tourism_chart() -> DeckResult<ChartSpec> {
    let years: Vec<String> = (2015..=2024).map(|year| year.to_string()).collect();
    let labels: Vec<String> = TOURISM
        .iter()
        .map(|count| format!("{:.1}M", count / 1_000.0))
        .collect();

    build_bar(
        &years,
        &TOURISM,
        BarOptions::default()
            .with_palette(PalettePolicy::Threshold {
                cutoff: 3_000.0,
                above: Paint::Token(Tone::Primary),
                below: Paint::Token(Tone::Danger),
            })
            .with_value_labels(ValueLabels::Custom { labels })
            .with_hover_template("{category}年 観光客数: {value}千人")
            .with_axis_titles("年", "観光客数（千人）")
            .with_annotation(Annotation::Callout {
                category: "2020".to_owned(),
                value: 2_800.0,
                text: "COVID-19 影響".to_owned(),
            })
            .with_height(380),
    )
}

pub fn business_chart() -> DeckResult<ChartSpec> {
    build_line(
        &BUSINESS_YEARS,
        &BUSINESS_COUNTS,
        LineOptions::default()
            .with_title("事業所数の推移")
            .with_stroke(Tone::Danger)
            .with_stroke_width(2.5)
            .with_dash(StrokeDash::Dotted)
            .with_marker(MarkerShape::Diamond, 8)
            .with_fill(AreaFill::ToZero { alpha: 0.08 })
            .with_hover_template("{category}年 事業所数: {value}")
            .with_axis_titles("年", "事業所数")
            .with_value_range(4_500.0, 5_700.0)
            .with_height(350),
    )
}

/// Ten projected year-end values from 2026, compounding the recent decline
/// rates against the 2025 population.
fn projected_population() -> DeckResult<Vec<f64>> {
    let latest = ACTUAL_POPULATION[ACTUAL_POPULATION.len() - 1];
    project_decimal_rates(latest, &decline_schedule())
}

/// Percent change per projected year. The decline eases from -1.2% toward
/// -0.8% over the decade.
fn decline_schedule() -> [Decimal; 10] {
    [
        Decimal::new(-12, 1),
        Decimal::new(-12, 1),
        Decimal::new(-11, 1),
        Decimal::new(-11, 1),
        Decimal::new(-10, 1),
        Decimal::new(-10, 1),
        Decimal::new(-9, 1),
        Decimal::new(-9, 1),
        Decimal::new(-8, 1),
        Decimal::new(-8, 1),
    ]
}

fn thousands(value: f64) -> String {
    let whole = value.round_ties_even() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(93_475.0), "93,475");
        assert_eq!(thousands(512.0), "512");
        assert_eq!(thousands(1_234_567.0), "1,234,567");
        assert_eq!(thousands(-8_800.0), "-8,800");
    }

    #[test]
    fn projection_dips_below_one_hundred_thousand() {
        let projected = projected_population().expect("schedule converts to f64");
        assert_eq!(projected.len(), 10);
        assert_eq!(projected.last().copied(), Some(93_475.0));
        assert!(projected.iter().any(|population| *population < 100_000.0));
    }

    #[test]
    fn tourism_labels_match_bar_count() {
        let spec = tourism_chart().expect("tourism chart should build");
        match &spec.series[0].style.value_labels {
            ValueLabels::Custom { labels } => {
                assert_eq!(labels.len(), TOURISM.len());
                assert_eq!(labels[0], "5.2M");
            }
            other => panic!("expected custom labels, got {other:?}"),
        }
    }
}
