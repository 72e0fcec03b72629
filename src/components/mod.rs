pub mod cards;
pub mod hero;
pub mod layout;
pub mod narrative;
pub mod timeline;
mod waves;

pub use cards::{
    ConceptCard, ConceptLayout, MetricCard, PhilosophyCard, StatHighlight, SubcopyCard, TeamCard,
};
pub use hero::Hero;
pub use narrative::{NarrativeBox, QuoteBlock};
pub use timeline::TimelineCard;

use crate::error::DeckResult;
use crate::render::Fragment;

/// Tagged parameter set for one component render.
///
/// A spec is constructed by a page declaration, rendered, and discarded;
/// nothing retains it between render cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentSpec {
    Hero(Hero),
    Metric(MetricCard),
    Timeline(TimelineCard),
    Concept(ConceptCard),
    Philosophy(PhilosophyCard),
    Narrative(NarrativeBox),
    Stat(StatHighlight),
    Team(TeamCard),
    Quote(QuoteBlock),
    Subcopy(SubcopyCard),
    /// Decorative separator; stateless and payload-free.
    Divider,
}

/// Renders one component spec to a markup fragment.
///
/// Pure: equal specs serialize to byte-identical fragments and nothing is
/// emitted anywhere as a side effect. Styling references theme tokens by
/// name only, so output does not depend on current token values. Contract
/// violations fail fast, naming the component and field.
pub fn render_component(spec: &ComponentSpec) -> DeckResult<Fragment> {
    match spec {
        ComponentSpec::Hero(hero) => hero.fragment(),
        ComponentSpec::Metric(card) => card.fragment(),
        ComponentSpec::Timeline(card) => card.fragment(),
        ComponentSpec::Concept(card) => card.fragment(),
        ComponentSpec::Philosophy(card) => card.fragment(),
        ComponentSpec::Narrative(narrative) => narrative.fragment(),
        ComponentSpec::Stat(stat) => stat.fragment(),
        ComponentSpec::Team(card) => card.fragment(),
        ComponentSpec::Quote(quote) => quote.fragment(),
        ComponentSpec::Subcopy(card) => card.fragment(),
        ComponentSpec::Divider => Ok(waves::divider()),
    }
}
