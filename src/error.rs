use thiserror::Error;

pub type DeckResult<T> = Result<T, DeckError>;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("missing required field: component={component}, field={field}")]
    MissingField {
        component: &'static str,
        field: &'static str,
    },

    #[error("series length mismatch in chart '{chart}': categories={categories}, values={values}")]
    SeriesLengthMismatch {
        chart: String,
        categories: usize,
        values: usize,
    },

    #[error("paint override length mismatch in chart '{chart}': points={points}, paints={paints}")]
    PaintOverrideMismatch {
        chart: String,
        points: usize,
        paints: usize,
    },

    #[error("category '{category}' is not on the axis of chart '{chart}'")]
    UnknownCategory { chart: String, category: String },

    #[error("page is not registered: {page}")]
    PageNotRegistered { page: &'static str },

    #[error("deck is not mounted: call mount() before rendering pages")]
    NotMounted,

    #[error("invalid data: {0}")]
    InvalidData(String),
}
