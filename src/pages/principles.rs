//! Action principles page: the vision structure and the seven principles
//! derived from how a stream behaves.

use crate::components::{ComponentSpec, ConceptCard, Hero, NarrativeBox, layout};
use crate::error::DeckResult;
use crate::pages::{emit, grid_of};
use crate::render::{Fragment, Surface};

/// (variant class, heading, optional sub line), top tier first.
const STRUCTURE_TIERS: [(&str, &str, Option<&str>); 6] = [
    ("apex", "セセラギズム（哲学・世界観）", None),
    (
        "statement",
        "地域像：三島は10年後にどんなまちか（ビジョンステートメント）",
        None,
    ),
    ("principles", "7つの行動原則", None),
    ("themes", "重点テーマ①〜④", Some("各テーマが「セセラギズム」と接続")),
    ("plain", "アクションプラン（短期・中期・長期）", None),
    ("plain", "KPI・モニタリング", None),
];

const WATER_FEATURES: [(&str, &str, &str); 6] = [
    ("🌊", "止まらない", "常に流れ続ける。停滞しない。変化しながらも途切れない。"),
    ("💎", "小さいが力がある", "岩をも削る。小さな流れが持つ驚くべきパワー。"),
    ("🏞", "集まると大きな流れになる", "小川が大河に。個の力が集まり、うねりを生む。"),
    ("🔄", "どこにでも道を見つける", "障害物を避け、時には超えて。柔軟に前へ進む。"),
    ("🌿", "周りを潤す", "流れるだけで周囲に恵みを与える。存在自体が価値。"),
    ("🎵", "音を生む", "流れること自体がリズムになる。行動がビートを刻む。"),
];

/// (glyph, title, keyword badge, water trait, meaning, self-check)
const PRINCIPLES: [(&str, &str, &str, &str, &str, &str); 7] = [
    (
        "💧",
        "湧き出すことから",
        "主体性",
        "止まらない",
        "誰かを待たず、自ら動き出す",
        "自分から動けているだろうか",
    ),
    (
        "🤝",
        "受け入れることから",
        "開放性",
        "周りを潤す",
        "外から来る人・コト・アイデアを拒まない。潤し、潤される関係をつくる",
        "互いに潤し合えているだろうか",
    ),
    (
        "🌱",
        "小さく始めることから",
        "実行力",
        "小さいが力がある",
        "完璧を待たず、まず一筋の流れを生む",
        "まず一歩を踏み出せているだろうか",
    ),
    (
        "🔄",
        "道を見つけることから",
        "柔軟性",
        "どこにでも道を見つける",
        "障害があっても止まらない。しなやかに迂回する",
        "別の水路に目を向けているだろうか",
    ),
    (
        "🌊",
        "合流することから",
        "連携",
        "集まると大きな流れになる",
        "異なる業種・世代・立場がつながる場をつくる",
        "まだ出会えていない流れがないだろうか",
    ),
    (
        "🌿",
        "浸透を信じることから",
        "持続性",
        "浸透する",
        "すぐに成果が見えなくても、地道に染み込ませる",
        "地域に染み込んでいるだろうか",
    ),
    (
        "🎵",
        "響かせることから",
        "発信",
        "音を生む",
        "楽しみながら行動し、外に向けて鳴らす",
        "外に届いているだろうか",
    ),
];

pub(crate) fn render(surface: &mut dyn Surface) -> DeckResult<()> {
    emit(
        surface,
        &ComponentSpec::Hero(
            Hero::new("7つの行動原則")
                .with_subtitle("Action Principles of SESERAGISM")
                .with_description(
                    "せせらぎの水が持つ7つの特性を、三島の行動原理として言語化した指針。",
                ),
        ),
    )?;

    surface.fragment(&layout::section_heading("ビジョンの全体構造"))?;
    surface.fragment(&structure_stack())?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("せせらぎの本質的特性"))?;
    surface.fragment(&layout::lead(
        "水の流れが持つ6つの特性。そのすべてが三島の行動原理と重なる。",
    ))?;
    let features: Vec<ComponentSpec> = WATER_FEATURES
        .iter()
        .map(|(icon, title, body)| {
            ComponentSpec::Concept(ConceptCard::new(*title, *body).with_icon(*icon))
        })
        .collect();
    surface.fragment(&grid_of(3, &features)?)?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("せせらぎの特性 × 行動原則"))?;
    surface.fragment(&layout::lead("水の流れが教えてくれる、7つの行動のかたち。"))?;
    for (index, (glyph, title, keyword, water, meaning, check)) in PRINCIPLES.iter().enumerate() {
        surface.fragment(&principle_row(
            index + 1,
            glyph,
            title,
            keyword,
            water,
            meaning,
            check,
        ))?;
    }

    emit(surface, &ComponentSpec::Divider)?;
    emit(
        surface,
        &ComponentSpec::Narrative(
            NarrativeBox::new()
                .with_paragraph(
                    "7つの行動原則は、すべて「〜ことから」で結ばれている。押しつけではなく、一歩踏み出す姿勢の提案。",
                )
                .with_paragraph(
                    "せせらぎの水が自然と湧き出し、流れ、合流し、浸透し、音を奏でるように、三島の人と活動もまた、この7つの原則に沿って動き出す。",
                )
                .with_paragraph(
                    "迷ったときは、それぞれの判断基準に立ち返る。「自分から動けているだろうか」「外に届いているだろうか」その問いかけが、セセラギズムの羅針盤になる。",
                )
                .with_emphasis("水のように、自然体で、しなやかに。"),
        ),
    )?;

    Ok(())
}

/// The tiered vision structure, top tier to KPI level, joined by
/// vertical connectors.
fn structure_stack() -> Fragment {
    let mut stack = Fragment::element("div").with_class("structure-stack");
    for (index, (variant, heading, sub)) in STRUCTURE_TIERS.iter().enumerate() {
        if index > 0 {
            stack = stack.with_child(
                Fragment::element("div")
                    .with_class("structure-connector")
                    .build(),
            );
        }

        let mut tier = Fragment::element("div")
            .with_class("structure-tier")
            .with_class(*variant)
            .with_text(*heading);
        if let Some(sub) = sub {
            tier = tier.with_child(
                Fragment::element("span")
                    .with_class("structure-tier-sub")
                    .with_text(*sub)
                    .build(),
            );
        }
        stack = stack.with_child(tier.build());
    }
    stack.build()
}

fn principle_row(
    number: usize,
    glyph: &str,
    title: &str,
    keyword: &str,
    water: &str,
    meaning: &str,
    check: &str,
) -> Fragment {
    let mut row = Fragment::element("div").with_class("principle-row");
    // Odd-numbered rows carry the tinted background.
    if number % 2 == 1 {
        row = row.with_class("tinted");
    }

    row.with_child(
        Fragment::element("div")
            .with_class("principle-side")
            .with_child(
                Fragment::element("div")
                    .with_class("principle-glyph")
                    .with_text(glyph)
                    .build(),
            )
            .with_child(
                Fragment::element("span")
                    .with_class("principle-badge")
                    .with_text(keyword)
                    .build(),
            )
            .build(),
    )
    .with_child(
        Fragment::element("div")
            .with_child(
                Fragment::element("div")
                    .with_class("principle-title")
                    .with_text(format!("{number}. {title}"))
                    .build(),
            )
            .with_child(
                Fragment::element("div")
                    .with_class("principle-trait")
                    .with_text(format!("せせらぎの特性：{water}"))
                    .build(),
            )
            .with_child(
                Fragment::element("p")
                    .with_class("principle-meaning")
                    .with_text(meaning)
                    .build(),
            )
            .with_child(
                Fragment::element("div")
                    .with_class("principle-check")
                    .with_text(check)
                    .build(),
            )
            .build(),
    )
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_principle_title_ends_in_kotokara() {
        for (_, title, ..) in PRINCIPLES {
            assert!(title.ends_with("ことから"), "unexpected title: {title}");
        }
    }

    #[test]
    fn structure_stack_joins_six_tiers_with_five_connectors() {
        let html = structure_stack().to_html();
        assert_eq!(html.matches("structure-tier").count(), 6 + 1); // +1 for the sub line class
        assert_eq!(html.matches("structure-connector").count(), 5);
    }
}
