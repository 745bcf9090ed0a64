use thiserror::Error;

/// Reasons a route table refuses to build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route path `{path}` is registered by both `{first}` and `{second}`")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("route name `{name}` is used by both `{first_path}` and `{second_path}`")]
    DuplicateName {
        name: String,
        first_path: String,
        second_path: String,
    },

    #[error("route path `{path}` (route `{name}`) must start with `/`")]
    InvalidPath { path: String, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("no browser window available")]
    NoWindow,

    #[error("history refused location `{path}`: {reason}")]
    PushRejected { path: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no route is named `{0}`")]
    UnknownRouteName(String),

    #[error(transparent)]
    History(#[from] HistoryError),
}
