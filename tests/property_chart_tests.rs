use deck_rs::chart::{
    BarOptions, Paint, PalettePolicy, RadarOptions, SeriesPoint, build_bar, build_radar, project,
    stitch_actual_and_projected,
};
use deck_rs::theme::Tone;
use proptest::prelude::*;

proptest! {
    #[test]
    fn projection_covers_the_whole_schedule(
        start in 1.0f64..1_000_000.0,
        rates in prop::collection::vec(-50.0f64..50.0, 0..20)
    ) {
        let projected = project(start, &rates);
        prop_assert_eq!(projected.len(), rates.len());
        prop_assert!(projected.iter().all(|value| value.is_finite()));
    }

    #[test]
    fn negative_rate_projections_never_rise(
        start in 100u32..1_000_000,
        rates in prop::collection::vec(-5.0f64..-0.1, 1..20)
    ) {
        // Values on the integer grid can round back up to the previous
        // value, but never above it.
        let start = f64::from(start);
        let projected = project(start, &rates);
        let mut previous = start;
        for value in projected {
            prop_assert!(value <= previous);
            previous = value;
        }
    }

    #[test]
    fn radar_always_closes_back_onto_its_first_point(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 1..10)
    ) {
        let categories: Vec<String> =
            (0..values.len()).map(|index| format!("c{index}")).collect();

        let spec = build_radar(&categories, &values, RadarOptions::default())
            .expect("finite values build");
        let points = &spec.series[0].points;
        prop_assert_eq!(points.len(), values.len() + 1);
        prop_assert_eq!(&points[0], &points[points.len() - 1]);
    }

    #[test]
    fn matching_sequence_palettes_always_validate(
        values in prop::collection::vec(0.0f64..10_000.0, 1..12)
    ) {
        let categories: Vec<String> =
            (0..values.len()).map(|index| format!("c{index}")).collect();
        let paints = vec![Paint::Token(Tone::Primary); values.len()];

        let spec = build_bar(
            &categories,
            &values,
            BarOptions::default().with_palette(PalettePolicy::Sequence { paints }),
        )
        .expect("aligned palette builds");
        prop_assert!(spec.validate().is_ok());
    }

    #[test]
    fn stitched_runs_share_exactly_one_boundary_point(
        actual_values in prop::collection::vec(0.0f64..1_000.0, 1..10),
        projected_values in prop::collection::vec(0.0f64..1_000.0, 0..10)
    ) {
        let actual: Vec<SeriesPoint> = actual_values
            .iter()
            .enumerate()
            .map(|(index, value)| SeriesPoint::new(format!("a{index}"), *value))
            .collect();
        let projected: Vec<SeriesPoint> = projected_values
            .iter()
            .enumerate()
            .map(|(index, value)| SeriesPoint::new(format!("p{index}"), *value))
            .collect();

        let stitched =
            stitch_actual_and_projected(&actual, &projected).expect("non-empty actual");
        prop_assert_eq!(stitched.len(), projected.len() + 1);
        prop_assert_eq!(&stitched[0], &actual[actual.len() - 1]);
        prop_assert_eq!(&stitched[1..], &projected[..]);
    }
}
