use crate::chart::ChartSpec;
use crate::error::DeckResult;
use crate::render::{Fragment, Surface};

/// No-op surface used by tests and headless hosts.
///
/// It still validates chart specs so tests can catch contract breaks
/// before a real document assembler is involved.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub fragments: usize,
    pub charts: usize,
}

impl Surface for NullSurface {
    fn fragment(&mut self, _fragment: &Fragment) -> DeckResult<()> {
        self.fragments += 1;
        Ok(())
    }

    fn chart(&mut self, spec: &ChartSpec) -> DeckResult<()> {
        spec.validate()?;
        self.charts += 1;
        Ok(())
    }
}
