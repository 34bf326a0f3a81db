use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Document has already been finalized")]
    ClosedDocument,
    #[error("No page has been started; call new_page first")]
    NoActivePage,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
