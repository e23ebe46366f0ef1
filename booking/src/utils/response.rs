use serde::Serialize;

/// Outcome of a shell action: the data to render plus the message the shell
/// shows in its confirmation dialog.
#[derive(Debug, Serialize)]
pub struct Notice<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorNotice {
    pub success: bool,
    pub error: ErrorBody,
}

pub fn success<T>(data: T, message: impl Into<String>) -> Notice<T>
where
    T: Serialize,
{
    Notice {
        success: true,
        data: Some(data),
        message: Some(message.into()),
    }
}

pub fn empty_success(message: impl Into<String>) -> Notice<()> {
    Notice {
        success: true,
        data: None,
        message: Some(message.into()),
    }
}

pub fn error(code: &str, message: impl Into<String>) -> ErrorNotice {
    ErrorNotice {
        success: false,
        error: ErrorBody {
            code: code.to_string(),
            message: message.into(),
        },
    }
}
