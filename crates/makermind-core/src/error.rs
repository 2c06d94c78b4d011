use thiserror::Error;

#[derive(Debug, Error)]
pub enum MakerError {
    #[error("unknown day '{0}': expected Monday through Sunday")]
    UnknownDay(String),

    #[error("unknown view '{0}'")]
    UnknownView(String),

    #[error("unknown skill level '{0}': expected Novice, Intermediate or Expert")]
    UnknownSkillLevel(String),

    #[error("project not found in saved collection: {0}")]
    ProjectNotFound(String),

    #[error("storage error for key '{key}': {reason}")]
    Storage { key: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MakerError>;
