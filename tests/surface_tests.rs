use deck_rs::chart::{BarOptions, ChartSpec, build_bar};
use deck_rs::render::{Fragment, HtmlSurface, NullSurface, Surface};

fn sample_chart() -> ChartSpec {
    build_bar(
        &["水", "人", "歴史"],
        &[95.0, 88.0, 82.0],
        BarOptions::default()
            .with_title("サンプル")
            .with_hover_template("{category}: {value}"),
    )
    .expect("sample chart builds")
}

fn unescape(attr: &str) -> String {
    attr.replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[test]
fn fragments_serialize_in_emission_order() {
    let mut surface = HtmlSurface::new();
    surface
        .fragment(&Fragment::element("p").with_text("first").build())
        .expect("first fragment");
    surface
        .fragment(&Fragment::element("p").with_text("second").build())
        .expect("second fragment");

    assert_eq!(surface.body_html(), "<p>first</p>\n<p>second</p>\n");
}

#[test]
fn embedded_chart_payload_round_trips() {
    let spec = sample_chart();
    let mut surface = HtmlSurface::new();
    surface.chart(&spec).expect("chart embeds");

    let body = surface.body_html();
    assert!(body.contains("figure class=\"chart-embed\""));
    assert!(body.contains("<figcaption>サンプル</figcaption>"));

    let start = body
        .find("data-deck-chart=\"")
        .expect("payload attribute present")
        + "data-deck-chart=\"".len();
    let end = body[start..].find('"').expect("attribute closes") + start;
    let payload = unescape(&body[start..end]);

    let decoded: ChartSpec = serde_json::from_str(&payload).expect("payload is valid JSON");
    assert_eq!(decoded, spec);
}

#[test]
fn invalid_chart_specs_never_reach_the_stream() {
    let mut invalid = sample_chart();
    invalid.series[0].points.pop();

    let mut surface = HtmlSurface::new();
    surface
        .chart(&invalid)
        .expect_err("invalid spec is rejected");
    assert_eq!(surface.charts_embedded(), 0);
    assert!(surface.body_html().is_empty());

    let mut counting = NullSurface::default();
    counting
        .chart(&invalid)
        .expect_err("null surface validates too");
    assert_eq!(counting.charts, 0);
}

#[test]
fn document_envelope_wraps_the_stream() {
    let mut surface = HtmlSurface::new();
    surface
        .fragment(&Fragment::element("h1").with_text("本文").build())
        .expect("fragment emits");

    let document = surface.into_document("タイトル <deck>");
    assert!(document.starts_with("<!DOCTYPE html>\n<html lang=\"ja\">"));
    assert!(document.contains("<meta charset=\"utf-8\">"));
    assert!(document.contains("<title>タイトル &lt;deck&gt;</title>"));
    assert!(document.contains("<h1>本文</h1>"));
    assert!(document.contains("by deck-rs"));
    assert!(document.ends_with("</body>\n</html>\n"));
}

#[test]
fn document_language_is_overridable() {
    let surface = HtmlSurface::new().with_lang("en");
    let document = surface.into_document("title");
    assert!(document.contains("<html lang=\"en\">"));
}

#[test]
fn raw_fragments_bypass_escaping() {
    let mut surface = HtmlSurface::new();
    surface
        .fragment(
            &Fragment::element("style")
                .with_child(Fragment::raw(".hero > .hero-title { color: red; }"))
                .build(),
        )
        .expect("style emits");
    assert!(surface.body_html().contains(".hero > .hero-title"));
    assert!(!surface.body_html().contains("&gt;"));
}
