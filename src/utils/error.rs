use crate::prelude::*;
use crate::views::create_event::DraftError;
use crate::views::dates;

/// Semantic app error, templated into an error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Page not found.")]
    NotFound,
    #[error("Invalid request.")]
    BadRequest(#[from] DraftError),
}
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorHtml {
    pub title: String,
    pub message: String,
    pub year: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::BadRequest(e) = &self {
            tracing::debug!("bad request: {e}");
        }
        let html = ErrorHtml { title: "Error".into(), message: self.to_string(), year: dates::current_year() };
        (self.status(), html).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        let err = AppError::from(DraftError::InvalidTags("eof".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid request.");
    }
}
