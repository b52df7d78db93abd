use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WidgetError {
    #[error("no element with class `{class}` to mount into")]
    ContainerNotFound { class: String },

    #[error("element with class `{class}` is never closed")]
    UnclosedContainer { class: String },

    #[error("markup error at byte {position}: {source}")]
    Markup {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("failed to write markup: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to serialize tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rendered markup is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
