use deck_rs::DeckError;
use deck_rs::chart::{
    Annotation, BarOptions, BarOrientation, ChartKind, LineOptions, MarkerShape, Paint,
    PalettePolicy, ProjectedSegmentStyle, RadarOptions, SeriesPoint, StrokeDash, ValueLabels,
    build_bar, build_line, build_line_with_projection, build_radar, stitch_actual_and_projected,
};
use deck_rs::theme::Tone;

#[test]
fn bar_rejects_mismatched_series_lengths() {
    let err = build_bar(
        &["a", "b", "c"],
        &[1.0, 2.0],
        BarOptions::default().with_title("短い系列"),
    )
    .expect_err("two values for three categories must fail");

    match err {
        DeckError::SeriesLengthMismatch {
            chart,
            categories,
            values,
        } => {
            assert_eq!(chart, "短い系列");
            assert_eq!(categories, 3);
            assert_eq!(values, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn untitled_bar_reports_its_kind_in_errors() {
    let err = build_bar(&["a"], &[], BarOptions::default()).expect_err("must fail");
    match err {
        DeckError::SeriesLengthMismatch { chart, .. } => assert_eq!(chart, "bar"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn sequence_palette_must_cover_every_point() {
    let err = build_bar(
        &["a", "b", "c"],
        &[1.0, 2.0, 3.0],
        BarOptions::default().with_palette(PalettePolicy::Sequence {
            paints: vec![Paint::Token(Tone::Primary), Paint::Token(Tone::Teal)],
        }),
    )
    .expect_err("two paints for three bars must fail");

    match err {
        DeckError::PaintOverrideMismatch { points, paints, .. } => {
            assert_eq!(points, 3);
            assert_eq!(paints, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn custom_value_labels_must_cover_every_point() {
    let err = build_bar(
        &["a", "b"],
        &[1.0, 2.0],
        BarOptions::default().with_value_labels(ValueLabels::Custom {
            labels: vec!["only one".to_string()],
        }),
    )
    .expect_err("one label for two bars must fail");
    assert!(matches!(err, DeckError::InvalidData(_)));
}

#[test]
fn threshold_palette_builds_without_per_point_counts() {
    let spec = build_bar(
        &["2019", "2020", "2021"],
        &[5_400.0, 2_800.0, 3_500.0],
        BarOptions::default()
            .with_orientation(BarOrientation::Horizontal)
            .with_palette(PalettePolicy::Threshold {
                cutoff: 3_000.0,
                above: Paint::Token(Tone::Primary),
                below: Paint::Token(Tone::Danger),
            }),
    )
    .expect("threshold palette is length independent");

    assert_eq!(spec.kind, ChartKind::Bar);
    assert_eq!(spec.orientation, BarOrientation::Horizontal);
}

#[test]
fn annotations_must_sit_on_the_axis() {
    let err = build_bar(
        &["2020", "2021"],
        &[1.0, 2.0],
        BarOptions::default().with_annotation(Annotation::VerticalMarker {
            category: "2050".to_owned(),
            label: "どこにもない".to_owned(),
        }),
    )
    .expect_err("annotation off the axis must fail");

    match err {
        DeckError::UnknownCategory { category, .. } => assert_eq!(category, "2050"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn value_range_must_be_ordered() {
    let err = build_line(
        &["a", "b"],
        &[1.0, 2.0],
        LineOptions::default().with_value_range(10.0, 10.0),
    )
    .expect_err("degenerate range must fail");
    assert!(matches!(err, DeckError::InvalidData(_)));
}

#[test]
fn non_finite_values_are_rejected() {
    let err = build_line(&["a", "b"], &[1.0, f64::NAN], LineOptions::default())
        .expect_err("NaN must fail");
    assert!(matches!(err, DeckError::InvalidData(_)));
}

#[test]
fn line_applies_stroke_and_marker_options() {
    let spec = build_line(
        &["2006", "2024"],
        &[5_500.0, 4_800.0],
        LineOptions::default()
            .with_stroke(Tone::Danger)
            .with_stroke_width(2.5)
            .with_dash(StrokeDash::Dotted)
            .with_marker(MarkerShape::Diamond, 8),
    )
    .expect("line builds");

    let style = &spec.series[0].style;
    assert_eq!(style.stroke, Paint::Token(Tone::Danger));
    assert_eq!(style.stroke_width_px, 2.5);
    assert_eq!(style.dash, StrokeDash::Dotted);
    assert_eq!(style.marker, MarkerShape::Diamond);
    assert_eq!(style.marker_size_px, 8);
}

#[test]
fn radar_closes_the_polygon_with_the_first_point() {
    let spec = build_radar(
        &["水", "人", "歴史"],
        &[95.0, 88.0, 82.0],
        RadarOptions::default(),
    )
    .expect("radar builds");

    let points = &spec.series[0].points;
    assert_eq!(points.len(), 4);
    assert_eq!(points[0], points[3]);
    assert_eq!(
        spec.category_axis.categories.len(),
        points.len(),
        "axis mirrors the closed ring"
    );
}

#[test]
fn empty_radar_stays_empty() {
    let spec = build_radar::<&str>(&[], &[], RadarOptions::default()).expect("empty radar builds");
    assert!(spec.series[0].points.is_empty());
    assert!(spec.is_empty());
    assert_eq!(spec.value_bounds(), None);
}

#[test]
fn value_bounds_span_all_series() {
    let spec = build_line_with_projection(
        &["2024", "2025"],
        &[104_100.0, 103_359.0],
        &["2026"],
        &[102_119.0],
        LineOptions::default(),
        ProjectedSegmentStyle::default(),
    )
    .expect("projection chart builds");

    assert_eq!(spec.value_bounds(), Some((102_119.0, 104_100.0)));
}

#[test]
fn projection_chart_splits_into_two_series() {
    let spec = build_line_with_projection(
        &["2024", "2025"],
        &[104_100.0, 103_359.0],
        &["2026", "2027"],
        &[102_119.0, 100_894.0],
        LineOptions::default().with_series_name("実績"),
        ProjectedSegmentStyle::default().with_name("推計"),
    )
    .expect("projection chart builds");

    assert_eq!(spec.series.len(), 2);
    assert_eq!(spec.series[0].name.as_deref(), Some("実績"));
    assert_eq!(spec.series[1].name.as_deref(), Some("推計"));

    // The projected series starts from the last actual point so the line
    // is visually continuous.
    assert_eq!(spec.series[1].points.len(), 3);
    assert_eq!(spec.series[1].points[0], SeriesPoint::new("2025", 103_359.0));
    assert_eq!(spec.series[1].style.dash, StrokeDash::Dashed);

    // The axis covers both segments, with the boundary year listed once.
    assert_eq!(spec.category_axis.categories.len(), 4);
    assert_eq!(
        spec.category_axis
            .categories
            .iter()
            .filter(|category| category.as_str() == "2025")
            .count(),
        1
    );
}

#[test]
fn stitching_onto_an_empty_actual_series_fails() {
    let projected = vec![SeriesPoint::new("2026", 1.0)];
    let err = stitch_actual_and_projected(&[], &projected)
        .expect_err("no boundary point to stitch from");
    assert!(matches!(err, DeckError::InvalidData(_)));
}

#[test]
fn stitching_prepends_exactly_the_boundary_point() {
    let actual = vec![
        SeriesPoint::new("2024", 104_100.0),
        SeriesPoint::new("2025", 103_359.0),
    ];
    let projected = vec![SeriesPoint::new("2026", 102_119.0)];

    let stitched = stitch_actual_and_projected(&actual, &projected).expect("stitch succeeds");
    assert_eq!(stitched.len(), 2);
    assert_eq!(stitched[0], actual[1]);
    assert_eq!(stitched[1], projected[0]);
}
