use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
