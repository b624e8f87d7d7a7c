use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::ResultStatus;

/// Login request body.
///
/// Other member fields sent by the client are ignored; missing fields default to empty
/// strings, which never match a stored member.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginDto {
    pub id: String,
    pub pwd: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResultDto {
    pub rt: ResultStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mem_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mem_name: Option<String>,
}

impl LoginResultDto {
    pub fn fail() -> Self {
        Self {
            rt: ResultStatus::Fail,
            mem_id: None,
            mem_name: None,
        }
    }
}
