use deck_rs::chart::{BarOrientation, ChartKind, PalettePolicy, StrokeDash};
use deck_rs::pages::{Page, statistics, survey, workshop};
use deck_rs::render::{HtmlSurface, NullSurface};

fn render_to_null(page: Page) -> NullSurface {
    let mut surface = NullSurface::default();
    page.render(&mut surface).expect("page renders cleanly");
    surface
}

fn render_to_html(page: Page) -> String {
    let mut surface = HtmlSurface::new();
    page.render(&mut surface).expect("page renders cleanly");
    surface.body_html().to_string()
}

#[test]
fn every_page_renders_without_errors() {
    for page in Page::ALL {
        render_to_null(page);
    }
}

#[test]
fn chart_counts_per_page() {
    assert_eq!(render_to_null(Page::VisionEvolution).charts, 0);
    assert_eq!(render_to_null(Page::Concept).charts, 0);
    assert_eq!(render_to_null(Page::Principles).charts, 0);
    assert_eq!(render_to_null(Page::Workshop).charts, 2);
    assert_eq!(render_to_null(Page::Survey).charts, 1);
    assert_eq!(render_to_null(Page::Statistics).charts, 3);
}

#[test]
fn vision_evolution_marks_one_current_milestone() {
    let html = render_to_html(Page::VisionEvolution);
    assert_eq!(html.matches("timeline-card current").count(), 1);
    assert_eq!(html.matches("story-step").count(), 4);
    assert_eq!(html.matches("story-step current").count(), 1);
    // The arrow labels the transition into a step, so the first step has
    // none.
    assert_eq!(html.matches("story-arrow").count(), 3);
}

#[test]
fn concept_page_highlights_only_the_formula_result() {
    let html = render_to_html(Page::Concept);
    assert_eq!(html.matches("philosophy-card highlight").count(), 1);
    assert!(html.contains("formula-operator"));
    assert!(html.contains("候補 5"));
    assert!(html.contains("<details class=\"fold\">"));
}

#[test]
fn principles_page_alternates_row_tinting() {
    let html = render_to_html(Page::Principles);
    assert_eq!(html.matches("principle-row").count(), 7);
    assert_eq!(html.matches("principle-row tinted").count(), 4);
    assert_eq!(html.matches("structure-connector").count(), 5);
}

#[test]
fn workshop_keyword_chart_is_horizontal_with_a_full_ramp() {
    let spec = workshop::keyword_chart().expect("keyword chart builds");
    assert_eq!(spec.kind, ChartKind::Bar);
    assert_eq!(spec.orientation, BarOrientation::Horizontal);
    assert_eq!(spec.series[0].points.len(), 10);
    match &spec.series[0].style.palette {
        PalettePolicy::Sequence { paints } => assert_eq!(paints.len(), 10),
        other => panic!("expected a sequence palette, got {other:?}"),
    }
}

#[test]
fn workshop_radar_covers_six_value_categories() {
    let spec = workshop::category_radar().expect("radar builds");
    assert_eq!(spec.kind, ChartKind::Radar);
    assert_eq!(spec.series[0].points.len(), 6 + 1);
    assert_eq!(spec.value_axis.range, Some((0.0, 100.0)));
}

#[test]
fn survey_score_chart_covers_the_full_distribution() {
    let spec = survey::score_chart().expect("score chart builds");
    assert_eq!(spec.series[0].points.len(), 8);
    let total: f64 = spec.series[0].points.iter().map(|point| point.value).sum();
    assert_eq!(total, 77.0);
}

#[test]
fn survey_page_carries_all_question_sections() {
    let html = render_to_html(Page::Survey);
    for heading in [
        "調査概要",
        "設問1：地域活性化の現状評価",
        "設問1・2：評価の内訳",
        "設問4：変えたくない三島の良さ",
        "設問3：20年後の理想の三島",
        "設問5：三島がもっと良くなるには",
        "設問6：三島商工会議所に期待すること",
        "設問7：自由意見",
    ] {
        assert!(html.contains(heading), "missing section: {heading}");
    }
    assert!(html.contains("split-columns"));
}

#[test]
fn population_chart_stitches_actual_into_projection() {
    let spec = statistics::population_chart().expect("population chart builds");
    assert_eq!(spec.series.len(), 2);

    let actual = &spec.series[0];
    let projected = &spec.series[1];
    assert_eq!(actual.points.len(), 26);
    assert_eq!(projected.points.len(), 11);
    assert_eq!(projected.points[0].category, "2025");
    assert_eq!(projected.points[0].value, 103_359.0);
    assert_eq!(projected.points[10].value, 93_475.0);
    assert_eq!(projected.style.dash, StrokeDash::Dashed);
    assert_eq!(actual.style.dash, StrokeDash::Solid);

    assert_eq!(spec.category_axis.categories.len(), 36);
    assert_eq!(spec.annotations.len(), 1);
}

#[test]
fn tourism_chart_splits_on_the_pandemic_threshold() {
    let spec = statistics::tourism_chart().expect("tourism chart builds");
    match spec.series[0].style.palette {
        PalettePolicy::Threshold { cutoff, .. } => assert_eq!(cutoff, 3_000.0),
        ref other => panic!("expected a threshold palette, got {other:?}"),
    }
    let below: Vec<&str> = spec.series[0]
        .points
        .iter()
        .filter(|point| point.value < 3_000.0)
        .map(|point| point.category.as_str())
        .collect();
    assert_eq!(below, ["2020"]);
}

#[test]
fn business_chart_is_a_dotted_declining_line() {
    let spec = statistics::business_chart().expect("business chart builds");
    assert_eq!(spec.kind, ChartKind::Line);
    assert_eq!(spec.series[0].style.dash, StrokeDash::Dotted);
    for window in spec.series[0].points.windows(2) {
        assert!(window[1].value <= window[0].value);
    }
}

#[test]
fn statistics_page_embeds_three_chart_payloads() {
    let html = render_to_html(Page::Statistics);
    assert_eq!(html.matches("data-deck-chart").count(), 3);
    assert!(html.contains("人口動態サマリ"));
    assert!(html.contains("約93,475人"));
}
