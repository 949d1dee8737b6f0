use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuggestionError {
    #[error("invalid search input: {0}")]
    InvalidArgument(String),

    #[error("could not reach the restaurant search provider: {0}")]
    Network(#[from] reqwest::Error),

    // Carries the structured error Yelp puts in a non-success body, or the
    // status line plus a body preview when the body is not in that shape.
    #[error("the restaurant search provider rejected the request ({code}): {description}")]
    Provider { code: String, description: String },

    #[error("no open restaurants matched the search, try a wider radius or price range")]
    EmptyResult,
}
