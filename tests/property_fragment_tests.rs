use deck_rs::components::layout;
use deck_rs::render::Fragment;
use proptest::prelude::*;

proptest! {
    #[test]
    fn text_nodes_never_emit_raw_angle_brackets(content in "\\PC*") {
        let html = Fragment::text(content).to_html();
        prop_assert!(!html.contains('<'));
        prop_assert!(!html.contains('>'));
    }

    #[test]
    fn attribute_values_never_break_out_of_their_quotes(value in "\\PC*") {
        let html = Fragment::element("div")
            .with_attr("data-x", value)
            .build()
            .to_html();
        // Opening and closing delimiter only; embedded quotes are escaped.
        prop_assert_eq!(html.matches('"').count(), 2);
    }

    #[test]
    fn escaping_round_trips_entity_free_content(
        content in "[^&<>]*"
    ) {
        let html = Fragment::text(content.clone()).to_html();
        let unescaped = html
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&");
        prop_assert_eq!(unescaped, content);
    }

    #[test]
    fn grid_always_declares_at_least_one_column(columns in 0usize..12) {
        let html = layout::grid(columns, Vec::new()).to_html();
        let declared = columns.max(1);
        let expected = format!("repeat({declared}, 1fr)");
        prop_assert!(html.contains(&expected));
    }
}
