//! Repeated layout shells used by page composition.
//!
//! These are conveniences over [`Fragment`], not components: they carry no
//! payload types and no validation of their own.

use crate::render::Fragment;

/// Equal-width grid with `columns` columns. Zero clamps to one.
#[must_use]
pub fn grid(columns: usize, cells: impl IntoIterator<Item = Fragment>) -> Fragment {
    let columns = columns.max(1);
    Fragment::element("div")
        .with_class("page-grid")
        .with_style(format!("grid-template-columns: repeat({columns}, 1fr);"))
        .with_children(cells)
        .build()
}

#[must_use]
pub fn section_heading(text: &str) -> Fragment {
    Fragment::element("h2")
        .with_class("section-heading")
        .with_text(text)
        .build()
}

#[must_use]
pub fn lead(text: &str) -> Fragment {
    Fragment::element("p").with_class("lead").with_text(text).build()
}

/// Bordered aside for methodology notes and short item lists.
#[must_use]
pub fn note_box<'a>(lines: impl IntoIterator<Item = &'a str>) -> Fragment {
    let mut aside = Fragment::element("div").with_class("note-box");
    for line in lines {
        aside = aside.with_child(Fragment::element("p").with_text(line).build());
    }
    aside.build()
}

/// Collapsible section, closed by default.
#[must_use]
pub fn fold(summary: &str, children: impl IntoIterator<Item = Fragment>) -> Fragment {
    Fragment::element("details")
        .with_class("fold")
        .with_child(Fragment::element("summary").with_text(summary).build())
        .with_children(children)
        .build()
}
