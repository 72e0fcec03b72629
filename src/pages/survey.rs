//! Survey analysis page: the 77-respondent online survey, question by
//! question.

use crate::chart::{BarOptions, ChartSpec, Paint, PalettePolicy, ValueLabels, build_bar};
use crate::components::{
    ComponentSpec, ConceptCard, ConceptLayout, Hero, MetricCard, NarrativeBox, PhilosophyCard,
    QuoteBlock, StatHighlight, layout, render_component,
};
use crate::error::DeckResult;
use crate::pages::{emit, grid_of};
use crate::render::{Fragment, Surface};
use crate::theme::{Color, Tone};

/// Q1 score distribution (score label, respondent count). No respondent
/// chose 1 or 10.
const SCORE_DISTRIBUTION: [(&str, f64); 8] = [
    ("2点", 1.0),
    ("3点", 5.0),
    ("4点", 2.0),
    ("5点", 13.0),
    ("6点", 11.0),
    ("7点", 23.0),
    ("8点", 20.0),
    ("9点", 2.0),
];

const STRENGTHS: [(&str, &str); 5] = [
    (
        "水と自然の豊かさ",
        "富士山の湧水やせせらぎをはじめとする自然環境が三島らしさの象徴",
    ),
    (
        "アクセスの良さ",
        "新幹線や高速道路により首都圏・伊豆方面との行き来が容易",
    ),
    (
        "歴史と文化の調和",
        "三嶋大社や伝統行事など、歴史的文化が現代にも息づく",
    ),
    (
        "住みやすさと安心感",
        "ほどよい規模感、落ち着いた生活環境が移住者や子育て世代にも支持",
    ),
    (
        "イベント・観光振興への期待",
        "地域資源を生かした観光まちづくりへの関心が高い",
    ),
];

const CONCERNS: [(&str, &str); 5] = [
    (
        "まちなかのにぎわい減少",
        "中心市街地の空洞化が進み、商業や人の流れの低下が課題",
    ),
    (
        "若者・子育て世代の流出",
        "若年層の定住促進が重要課題。魅力ある雇用と教育環境が必要",
    ),
    (
        "地域コミュニティの希薄化",
        "昔ながらの繋がりが弱まり、顔の見える関係づくりへの期待",
    ),
    (
        "交通・まちの利便性",
        "電車・バスの運行頻度や駅周辺整備を求める声",
    ),
    (
        "行政・商工会議所への期待",
        "ビジョンを示し行動するリーダー役への期待が大きい",
    ),
];

/// Q4: what must not change about Mishima. (icon, title, body)
const KEEPSAKES: [(&str, &str, &str); 10] = [
    (
        "💧",
        "水と緑の恵み",
        "湧水やせせらぎ、緑豊かな環境を「何よりも守りたい」とする意見が圧倒的",
    ),
    (
        "🏯",
        "歴史と文化の継承",
        "三嶋大社を中心とした伝統行事が地域アイデンティティとして根付く",
    ),
    (
        "🤝",
        "人の温かさ",
        "「人が優しい」「助け合いの心」— 三島らしさは人柄にある",
    ),
    (
        "📐",
        "まちのコンパクトさ",
        "「ほどよい大きさ」「移動が便利」— 生活圏の快適さ",
    ),
    (
        "🍝",
        "食文化と地元産品",
        "地場産の食材・飲食文化がまちのブランド力を支えている",
    ),
    (
        "🏔",
        "まちなみと景観",
        "富士山を望む風景や水辺の景観。自然と調和したまちなみ",
    ),
    (
        "🎶",
        "地域の祭りと行事",
        "夏祭りや大社の行事が「変えてはいけない三島の文化」",
    ),
    (
        "🏡",
        "安心できる暮らし",
        "治安の良さや穏やかな生活リズムが市民の誇り",
    ),
    (
        "👶",
        "子育てのしやすさ",
        "自然環境と教育環境のバランスをファミリー層が評価",
    ),
    (
        "❤️",
        "地元への愛着",
        "「三島が好き」「ずっと住みたい」— 住民の地元愛が最大の財産",
    ),
];

/// Q3: the ideal Mishima twenty years out. (icon, title, body)
const IDEALS: [(&str, &str, &str); 10] = [
    ("👪", "多世代共生のまち", "高齢者から子どもまでが支え合うコミュニティ"),
    ("🚶", "歩いて楽しいまち", "せせらぎや緑に囲まれた歩行者中心のスローシティ"),
    ("🍕", "グルメ観光都市", "サンセバスチャンのような食と自然の国際都市"),
    ("🔄", "共感経済のまち", "共感や協働で地域が循環する新しい経済モデル"),
    ("🎓", "若者が集うまち", "教育・文化・雇用の整備で若者の姿が街に"),
    ("☕", "サードプレイスの充実", "職場でも家庭でもない「居場所」がまちの魅力に"),
    ("🌿", "自然と調和した都市", "水・緑を軸にした持続可能なまちづくり"),
    ("🌍", "小規模でも世界に誇るまち", "規模の小ささを強みに質の高い文化・観光を"),
    ("📉", "人口減少対応型社会", "住民一人ひとりが豊かに暮らせる社会モデル"),
    ("😊", "顔の見える関係づくり", "「みんな顔馴染み」— 温かな関係性の重視"),
];

/// Q5: what would make Mishima better. (icon, title, body)
const IMPROVEMENTS: [(&str, &str, &str); 10] = [
    ("💼", "若者の定着支援", "就職・起業・住宅など地元で暮らし続けられる環境整備"),
    ("🏪", "商店街の再生", "空き店舗の活用、歩行者空間の整備でにぎわい回復"),
    ("🚌", "交通と移動の改善", "バス増便、駐輪場、歩道整備。誰もが動きやすいまちに"),
    ("🗺", "観光資源の活用", "自然・歴史・食文化を磨き上げて観光産業を強化"),
    ("⚡", "行政のスピード感", "官民連携を進め協働型行政への転換"),
    ("🙋", "市民参加の促進", "参加できる場を増やし住民主体の活動を広げる"),
    ("📚", "子育て・教育の充実", "学びや遊びの場を増やし子どもが育つまちへ"),
    ("💻", "デジタル活用の推進", "DXによる行政効率化や地域情報の共有"),
    ("🏢", "企業・働く場の魅力化", "地元企業の魅力発信や多様な働き方の推進"),
    ("🏷️", "三島ブランドの確立", "「三島らしさ」を観光・産業・文化の軸として明確に"),
];

/// Q6: what respondents expect of the chamber of commerce. (icon, title, body)
const EXPECTATIONS: [(&str, &str, &str); 10] = [
    ("👑", "地域のリーダー役", "まちの未来を導くリーダーシップを発揮"),
    ("🤝", "若者と企業の橋渡し", "若者が地元で働く・起業するための接点づくり"),
    ("🏢", "中小企業の支援強化", "経営相談、販路開拓、人材育成を地道に"),
    ("🌐", "地域間連携の促進", "伊豆・沼津・裾野と連携し広域経済圏を形成"),
    ("📣", "情報発信力の向上", "SNS・ウェブで「見える活動」への転換"),
    ("🗺", "観光産業の支援", "観光資源と企業をつなぐ仕組みづくり"),
    ("👩‍💼", "女性活躍の推進", "女性経営者のネットワークと多様な視点の活用"),
    ("🌱", "環境・SDGs推進", "環境配慮の経営支援や脱炭素の取組み"),
    ("🎪", "地域イベントの後押し", "市民や商店街のイベントへのサポート強化"),
    ("🤲", "共創のプラットフォーム", "市民・企業・行政が対等に議論できる場の提供"),
];

/// Q7 free-form opinions, clustered. (label, body)
const OPINIONS: [(&str, &str); 10] = [
    ("市民の声を反映して", "アンケートを一過性で終わらせず政策に反映を"),
    ("行政と商工会の連携強化", "縦割りをなくし地域全体で協働を"),
    ("観光・文化イベントの推進", "音楽、食、アートで交流人口の増加を"),
    ("空き店舗の利活用", "商店街や駅前の空きスペースを活動拠点に"),
    ("環境を守る意識", "開発よりも自然保全を優先する三島らしさ"),
    ("教育・学びの充実", "「地域で育てる教育」を求める声"),
    ("地域のつながり再生", "町内会や市民団体の「顔の見える関係づくり」"),
    ("移住・定住促進", "三島に住みたい人が増える仕組みづくり"),
    ("安心・安全な暮らし", "防災・防犯・医療の基盤整備"),
    ("持続可能なまち経営", "変化を恐れずリーダーシップと協働体制を"),
];

pub(crate) fn render(surface: &mut dyn Surface) -> DeckResult<()> {
    emit(
        surface,
        &ComponentSpec::Hero(
            Hero::new("アンケート分析")
                .with_subtitle("Survey Analysis")
                .with_description(
                    "まちづくり関係者・市民77名を対象としたオンラインアンケートの分析レポート。",
                ),
        ),
    )?;

    surface.fragment(&layout::section_heading("調査概要"))?;
    surface.fragment(&grid_of(
        4,
        &[
            ComponentSpec::Stat(StatHighlight::new("77名", "回答者数")),
            ComponentSpec::Stat(StatHighlight::new("6.4", "平均スコア（10点満点）")),
            ComponentSpec::Stat(StatHighlight::new("46名", "三島市在住者")),
            ComponentSpec::Stat(StatHighlight::new("38年", "平均三島市在住年数")),
        ],
    )?)?;
    surface.fragment(&layout::note_box([
        "実施期間：2025年10月6日（月）〜24日（金）",
        "対象：【当所】まちづくり委員、部会幹事、女性会、青年部",
        "【関係団体】三島商店街連盟、三島市観光協会会員、JC など",
    ]))?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("設問1：地域活性化の現状評価"))?;
    surface.fragment(&layout::lead(
        "「地域活性化について、現在の三島は何点だと思いますか？」（10点満点）",
    ))?;
    surface.chart(&score_chart()?)?;
    emit(
        surface,
        &ComponentSpec::Metric(
            MetricCard::new("スコア分析", "最頻値 7点 ・ 平均 6.4点").with_description(
                "回答者の約58%が7点以上と評価。「イベントや活動が活発」「プレイヤーが増えている」と現状を肯定的に捉える声が多い一方、「一部エリアに限られている」「空き店舗が目立つ」など改善余地を指摘する声も。",
            ),
        ),
    )?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("設問1・2：評価の内訳"))?;
    surface.fragment(&appraisal_columns()?)?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("設問4：変えたくない三島の良さ"))?;
    let keepsakes: Vec<ComponentSpec> = KEEPSAKES
        .iter()
        .map(|(icon, title, body)| {
            ComponentSpec::Concept(
                ConceptCard::new(*title, *body)
                    .with_icon(*icon)
                    .with_accent(Tone::Cyan)
                    .with_layout(ConceptLayout::TopAccent),
            )
        })
        .collect();
    surface.fragment(&grid_of(5, &keepsakes)?)?;
    emit(
        surface,
        &ComponentSpec::Quote(QuoteBlock::new(
            "「水と緑」が圧倒的1位。続いて歴史・文化、人の温かさ、コンパクトさ。三島のアイデンティティは「水」×「人」×「歴史」の三層構造。",
        )),
    )?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("設問3：20年後の理想の三島"))?;
    let ideals: Vec<ComponentSpec> = IDEALS
        .iter()
        .map(|(icon, title, body)| {
            ComponentSpec::Philosophy(
                PhilosophyCard::new(*title)
                    .with_eyebrow(*icon)
                    .with_description(*body),
            )
        })
        .collect();
    surface.fragment(&grid_of(5, &ideals)?)?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("設問5：三島がもっと良くなるには"))?;
    let improvements: Vec<ComponentSpec> = IMPROVEMENTS
        .iter()
        .map(|(icon, title, body)| {
            ComponentSpec::Concept(
                ConceptCard::new(*title, *body)
                    .with_icon(*icon)
                    .with_accent(Tone::Danger)
                    .with_layout(ConceptLayout::TopAccent),
            )
        })
        .collect();
    surface.fragment(&grid_of(5, &improvements)?)?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::section_heading("設問6：三島商工会議所に期待すること"))?;
    let expectations: Vec<ComponentSpec> = EXPECTATIONS
        .iter()
        .map(|(icon, title, body)| {
            ComponentSpec::Concept(
                ConceptCard::new(*title, *body)
                    .with_icon(*icon)
                    .with_accent(Tone::Teal)
                    .with_layout(ConceptLayout::TopAccent),
            )
        })
        .collect();
    surface.fragment(&grid_of(5, &expectations)?)?;

    emit(surface, &ComponentSpec::Divider)?;
    surface.fragment(&layout::fold(
        "設問7：自由意見",
        [layout::grid(
            2,
            OPINIONS.iter().map(|(label, body)| opinion_item(label, body)),
        )],
    ))?;

    emit(surface, &ComponentSpec::Divider)?;
    emit(
        surface,
        &ComponentSpec::Narrative(
            NarrativeBox::new()
                .with_paragraph(
                    "77名のまちづくり関係者・市民の声から、三島の本質が鮮明に浮かび上がった。",
                )
                .with_paragraph(
                    "「変えたくない良さ」の第1位は圧倒的に「水と緑」。続いて歴史・文化、人の温かさ、コンパクトさと続く。三島のアイデンティティは水 × 人 × 歴史の三層構造にある。",
                )
                .with_paragraph(
                    "一方で「もっと良くなるには」では、若者の定着支援、商店街の再生、三島ブランドの確立を求める声が目立つ。三島の良さは十分に認識されているが、それを外に向けて発信し、内に還流させる仕組みが足りない。",
                )
                .with_paragraph(
                    "この「内なる価値を外へ放出する」という方向性は、まさにセセラギズムが提唱する「蓄積 → 放出、内 → 外、響かせる」と一致している。",
                )
                .with_emphasis("水のアイデンティティ × 外への発信 ＝ セセラギズムの裏付け"),
        ),
    )?;

    Ok(())
}

/// Q1 score distribution, shaded red through deep green as scores rise.
pub fn score_chart() -> DeckResult<ChartSpec> {
    let categories: Vec<&str> = SCORE_DISTRIBUTION.iter().map(|(label, _)| *label).collect();
    let counts: Vec<f64> = SCORE_DISTRIBUTION.iter().map(|(_, count)| *count).collect();

    build_bar(
        &categories,
        &counts,
        BarOptions::default()
            .with_palette(PalettePolicy::Sequence {
                paints: score_ramp(),
            })
            .with_value_labels(ValueLabels::Auto)
            .with_hover_template("{category} 回答数: {value}名")
            .with_axis_titles("評価（点）", "回答数（名）")
            .with_height(350),
    )
}

fn score_ramp() -> Vec<Paint> {
    vec![
        Paint::Token(Tone::Danger),
        Paint::Rgb(Color::rgb(0xef, 0x9a, 0x9a)),
        Paint::Rgb(Color::rgb(0xff, 0xcc, 0x80)),
        Paint::Rgb(Color::rgb(0xff, 0xf5, 0x9d)),
        Paint::Rgb(Color::rgb(0xc5, 0xe1, 0xa5)),
        Paint::Rgb(Color::rgb(0x81, 0xc7, 0x84)),
        Paint::Rgb(Color::rgb(0x4c, 0xaf, 0x50)),
        Paint::Rgb(Color::rgb(0x2e, 0x7d, 0x32)),
    ]
}

/// Strengths and concerns side by side.
fn appraisal_columns() -> DeckResult<Fragment> {
    let mut strengths = Fragment::element("div").with_child(
        Fragment::element("div")
            .with_class("column-heading")
            .with_text("✅ 高評価のポイント")
            .build(),
    );
    for (title, body) in STRENGTHS {
        strengths = strengths.with_child(card_fragment(ConceptCard::new(title, body))?);
    }

    let mut concerns = Fragment::element("div").with_child(
        Fragment::element("div")
            .with_class("column-heading")
            .with_class("danger")
            .with_text("⚠ 課題意識")
            .build(),
    );
    for (title, body) in CONCERNS {
        concerns = concerns
            .with_child(card_fragment(ConceptCard::new(title, body).with_accent(Tone::Danger))?);
    }

    Ok(Fragment::element("div")
        .with_class("split-columns")
        .with_child(strengths.build())
        .with_child(concerns.build())
        .build())
}

fn card_fragment(card: ConceptCard) -> DeckResult<Fragment> {
    render_component(&ComponentSpec::Concept(card))
}

fn opinion_item(label: &str, body: &str) -> Fragment {
    Fragment::element("div")
        .with_class("detail-item")
        .with_child(Fragment::element("strong").with_text(label).build())
        .with_child(Fragment::element("span").with_text(body).build())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_counts_sum_to_all_respondents() {
        let total: f64 = SCORE_DISTRIBUTION.iter().map(|(_, count)| count).sum();
        assert_eq!(total, 77.0);
    }

    #[test]
    fn score_ramp_covers_every_score_bucket() {
        assert_eq!(score_ramp().len(), SCORE_DISTRIBUTION.len());
    }

    #[test]
    fn appraisal_columns_split_into_two() {
        let html = appraisal_columns().expect("columns should render").to_html();
        assert_eq!(html.matches("column-heading").count(), 2);
        assert!(html.contains("split-columns"));
    }
}
