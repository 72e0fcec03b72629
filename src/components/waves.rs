//! Decorative wave markup shared by the hero banner and the divider.

use crate::render::Fragment;
use crate::theme::Tone;

const CREST_BACK: &str =
    "M0,70 C180,30 360,95 540,60 C720,25 900,85 1080,55 C1260,30 1380,65 1440,50 L1440,120 L0,120 Z";
const CREST_FRONT: &str =
    "M0,85 C200,55 420,100 640,75 C860,50 1080,95 1290,70 C1350,62 1410,68 1440,72 L1440,120 L0,120 Z";

pub(crate) fn hero_wave() -> Fragment {
    Fragment::element("svg")
        .with_class("hero-wave")
        .with_attr("viewBox", "0 0 1440 120")
        .with_attr("preserveAspectRatio", "none")
        .with_attr("aria-hidden", "true")
        .with_child(crest(CREST_BACK, Tone::Aqua, "0.35"))
        .with_child(crest(CREST_FRONT, Tone::Foam, "0.55"))
        .build()
}

pub(crate) fn divider() -> Fragment {
    Fragment::element("div")
        .with_class("wave-divider")
        .with_attr("aria-hidden", "true")
        .with_child(
            Fragment::element("svg")
                .with_attr("viewBox", "0 0 1440 120")
                .with_attr("preserveAspectRatio", "none")
                .with_child(crest(CREST_BACK, Tone::Cyan, "0.25"))
                .with_child(crest(CREST_FRONT, Tone::Aqua, "0.4"))
                .build(),
        )
        .build()
}

fn crest(d: &str, fill: Tone, opacity: &str) -> Fragment {
    Fragment::element("path")
        .with_attr("d", d)
        .with_attr("fill", fill.css_var())
        .with_attr("opacity", opacity)
        .build()
}
