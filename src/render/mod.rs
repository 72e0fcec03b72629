mod fragment;
mod html_surface;
mod null_surface;

pub use fragment::{Element, Fragment};
pub use html_surface::HtmlSurface;
pub use null_surface::NullSurface;

use crate::chart::ChartSpec;
use crate::error::DeckResult;

/// Contract implemented by any output surface.
///
/// Pages emit an ordered stream of markup fragments and chart specs; the
/// surface decides what accumulation means. Emission order is the display
/// order, so surface code stays isolated from page and component logic.
pub trait Surface {
    fn fragment(&mut self, fragment: &Fragment) -> DeckResult<()>;
    fn chart(&mut self, spec: &ChartSpec) -> DeckResult<()>;
}
