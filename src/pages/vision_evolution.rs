//! Vision evolution page: the 50th-to-80th anniversary arc.

use crate::components::{ComponentSpec, Hero, NarrativeBox, TimelineCard, layout};
use crate::error::DeckResult;
use crate::pages::{emit, grid_of};
use crate::render::{Fragment, Surface};

/// (year, theme, stage, description, active)
const MILESTONES: [(&str, &str, &str, &str, bool); 4] = [
    (
        "50周年",
        "街中がせせらぎ",
        "再生・復活",
        "市民活動での水の復活。水辺せせらぎの街としての刷新。",
        false,
    ),
    (
        "60周年",
        "新 四ツ辻文化の街",
        "交差・集積",
        "三島の歴史を踏襲して道が交錯し、人モノが交錯する街。",
        false,
    ),
    (
        "70周年",
        "つなぐ三島",
        "接続・継承",
        "過去の活動から未来へつなぎ、新しい未来へのメッセージ。",
        false,
    ),
    (
        "80周年",
        "セセラギズム",
        "放出・発信",
        "溜めたエネルギーを解き放つ。内から外へ、響かせる。",
        true,
    ),
];

/// (period, name, stage, arrow, detail); `arrow` labels the connector
/// leading into the step, so the first entry's arrow never renders.
const STORY_STEPS: [(&str, &str, &str, &str, &str); 4] = [
    (
        "50周年",
        "街中がせせらぎ",
        "再生・復活",
        "水の復活",
        "三島の原点である湧水と水辺を、市民活動の力で蘇らせた。「せせらぎの街・三島」というアイデンティティが確立された時代。",
    ),
    (
        "60周年",
        "新 四ツ辻文化の街",
        "交差・集積",
        "人とモノの交差",
        "宿場町としての歴史を踏まえ、道が交わり人とモノが集まる結節点としての三島を再定義。内外の交流が活性化。",
    ),
    (
        "70周年",
        "つなぐ三島",
        "接続・継承",
        "過去と未来の接続",
        "これまでの活動を未来へつなぎ、次の世代に受け渡すメッセージを発信。継承と連帯のステージ。",
    ),
    (
        "80周年",
        "セセラギズム",
        "放出・発信",
        "エネルギーを外へ",
        "50周年の「せせらぎ」を継承しつつ、「イズム＝思想・運動」として外に発信するステージへ。つないで溜め込んできたエネルギー、人、想いを、外に向けて解き放つ。",
    ),
];

pub(crate) fn render(surface: &mut dyn Surface) -> DeckResult<()> {
    emit(
        surface,
        &ComponentSpec::Hero(
            Hero::new("ビジョンの変遷")
                .with_subtitle("Vision Evolution: 50th - 80th Anniversary")
                .with_description(
                    "三島商工会議所が30年かけて紡いできた物語。再生から放出へ、内から外へ。",
                ),
        ),
    )?;

    let milestones: Vec<ComponentSpec> = MILESTONES
        .iter()
        .map(|(year, theme, stage, desc, active)| {
            ComponentSpec::Timeline(
                TimelineCard::new(*year, *theme, *stage, *desc).with_active(*active),
            )
        })
        .collect();
    surface.fragment(&grid_of(4, &milestones)?)?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("進化のストーリー"))?;
    surface.fragment(&layout::lead(
        "各周年ビジョンは、前のステージを土台に積み上げてきた。",
    ))?;

    for (index, (period, name, stage, arrow, detail)) in STORY_STEPS.iter().enumerate() {
        if index > 0 {
            surface.fragment(
                &Fragment::element("div")
                    .with_class("story-arrow")
                    .with_text(format!("▼ {arrow}"))
                    .build(),
            )?;
        }
        surface.fragment(&story_step(period, name, stage, detail, *period == "80周年"))?;
    }

    emit(surface, &ComponentSpec::Divider)?;
    emit(
        surface,
        &ComponentSpec::Narrative(
            NarrativeBox::new()
                .with_paragraph(
                    "50周年で「街中がせせらぎ」として水を復活させた三島。80周年では、その「せせらぎ」に「イズム（ism）」を加え、思想・運動として外の世界に発信するステージへ進化する。",
                )
                .with_emphasis("つないだ次に来るもの ＝ 蓄積 → 放出、内 → 外、響かせる"),
        ),
    )?;

    Ok(())
}

fn story_step(period: &str, name: &str, stage: &str, detail: &str, current: bool) -> Fragment {
    let mut step = Fragment::element("div").with_class("story-step");
    if current {
        step = step.with_class("current");
    }

    step.with_child(
        Fragment::element("div")
            .with_class("story-badge")
            .with_text(period)
            .build(),
    )
    .with_child(
        Fragment::element("div")
            .with_class("story-body")
            .with_child(
                Fragment::element("div")
                    .with_class("story-name")
                    .with_text(name)
                    .with_child(
                        Fragment::element("span")
                            .with_class("story-stage")
                            .with_text(format!("― {stage}"))
                            .build(),
                    )
                    .build(),
            )
            .with_child(
                Fragment::element("p")
                    .with_class("story-detail")
                    .with_text(detail)
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
    fn exactly_one_milestone_is_active() {
        let active = MILESTONES
            .iter()
            .filter(|(_, _, _, _, active)| *active)
            .count();
        assert_eq!(active, 1);
    }

    #[test]
    fn milestones_and_story_steps_cover_the_same_eras() {
        let milestone_years: Vec<&str> = MILESTONES.iter().map(|(year, ..)| *year).collect();
        let story_periods: Vec<&str> = STORY_STEPS.iter().map(|(period, ..)| *period).collect();
        assert_eq!(milestone_years, story_periods);
    }
}
