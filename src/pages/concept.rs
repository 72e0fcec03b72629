//! Concept page: the "seseragi + ism" formula and its naming candidates.

use crate::components::{ComponentSpec, Hero, PhilosophyCard, SubcopyCard, layout, render_component};
use crate::error::DeckResult;
use crate::pages::{emit, grid_of};
use crate::render::{Fragment, Surface};

const PHILOSOPHY_CANDIDATES: [(&str, &str); 5] = [
    ("候補 1", "水のように、自分から動く。"),
    ("候補 2", "小さく湧いて、大きく響く。"),
    ("候補 3", "この街は、流れ続ける。"),
    ("候補 4", "湧き出す力を、解き放て。"),
    ("候補 5", "一滴が、うねりになる。"),
];

const SUBCOPY_CANDIDATES: [&str; 3] = [
    "セセラギズム 〜 湧き上がれ、鳴り響け 〜",
    "セセラギズム 〜 水脈が刻む、新しいビート 〜",
    "セセラギズム -PULSE-",
];

/// (name, reading, description)
const ALTERNATIVE_NAMES: [(&str, &str, &str); 4] = [
    ("ミシマリズム", "MISHIMAISM", "三島 + ism。地名を直接冠したバリエーション。"),
    ("MAKE WAVES MISHIMA", "メイクウェーブズ", "「波を起こせ」。英語圏にも響くグローバル案。"),
    ("MISHIMA SPRINGS", "ミシマスプリングス", "湧水（springs）と春（spring）の二重意味。"),
    ("ひらく三島", "ヒラクミシマ", "開く・拓く・啓く。シンプルで力強い日本語案。"),
];

pub(crate) fn render(surface: &mut dyn Surface) -> DeckResult<()> {
    emit(
        surface,
        &ComponentSpec::Hero(
            Hero::new("セセラギズム")
                .with_subtitle("SESERAGISM: せせらぎ + ism（主義・思想・運動）")
                .with_description("三島の行動原理を、水の流れに見立てて言語化した新概念。"),
        ),
    )?;

    surface.fragment(&layout::section_heading("コンセプトの構造"))?;
    surface.fragment(&formula_row()?)?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("セントラルフィロソフィー候補"))?;
    let candidates: Vec<ComponentSpec> = PHILOSOPHY_CANDIDATES
        .iter()
        .map(|(eyebrow, text)| {
            ComponentSpec::Philosophy(PhilosophyCard::new(*text).with_eyebrow(*eyebrow))
        })
        .collect();
    surface.fragment(&grid_of(5, &candidates)?)?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("サブコピー候補"))?;
    let subcopies: Vec<ComponentSpec> = SUBCOPY_CANDIDATES
        .iter()
        .map(|text| ComponentSpec::Subcopy(SubcopyCard::new(*text)))
        .collect();
    surface.fragment(&grid_of(1, &subcopies)?)?;

    emit(surface, &ComponentSpec::Divider)?;
    let alternatives: Vec<ComponentSpec> = ALTERNATIVE_NAMES
        .iter()
        .map(|(name, reading, desc)| {
            ComponentSpec::Philosophy(
                PhilosophyCard::new(*name)
                    .with_eyebrow(*reading)
                    .with_description(*desc),
            )
        })
        .collect();
    surface.fragment(&layout::fold(
        "派生・代替案を見る",
        [grid_of(4, &alternatives)?],
    ))?;

    Ok(())
}

/// The concept formula: せせらぎ + ism = セセラギズム, with the result
/// card highlighted.
fn formula_row() -> DeckResult<Fragment> {
    let seseragi = render_component(&ComponentSpec::Philosophy(
        PhilosophyCard::new("せせらぎ").with_description("三島のアイデンティティ 湧水・水辺・清流"),
    ))?;
    let ism = render_component(&ComponentSpec::Philosophy(
        PhilosophyCard::new("ism").with_description("主義・思想・運動 行動原理としての体系"),
    ))?;
    let result = render_component(&ComponentSpec::Philosophy(
        PhilosophyCard::new("セセラギズム")
            .with_description("三島の行動原理 水のように流れ、響かせる")
            .with_highlight(true),
    ))?;

    Ok(Fragment::element("div")
        .with_class("formula-row")
        .with_child(seseragi)
        .with_child(operator("+"))
        .with_child(ism)
        .with_child(operator("="))
        .with_child(result)
        .build())
}

fn operator(glyph: &str) -> Fragment {
    Fragment::element("div")
        .with_class("formula-operator")
        .with_text(glyph)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_highlights_only_the_result_card() {
        let html = formula_row().expect("formula renders").to_html();
        assert_eq!(html.matches("philosophy-card highlight").count(), 1);
        assert_eq!(html.matches("formula-operator").count(), 2);
    }
}
