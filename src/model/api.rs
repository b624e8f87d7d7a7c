use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Value of the `rt` field carried by every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ResultStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FAIL")]
    Fail,
}

impl From<bool> for ResultStatus {
    fn from(success: bool) -> Self {
        if success {
            Self::Ok
        } else {
            Self::Fail
        }
    }
}

/// Response carrying nothing but the `rt` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    pub rt: ResultStatus,
}

impl From<bool> for StatusDto {
    fn from(success: bool) -> Self {
        Self {
            rt: ResultStatus::from(success),
        }
    }
}
