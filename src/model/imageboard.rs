use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::ResultStatus;

/// A single board entry as returned by the list and view endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageboardDto {
    pub seq: i32,
    pub imageid: String,
    pub imagename: String,
    pub imageprice: i32,
    pub imageqty: i32,
    pub imagecontent: String,
    /// Storage key of the attached image, served under `/storage/{image1}`.
    pub image1: Option<String>,
    pub logtime: NaiveDate,
}

/// Text fields of the multipart write form.
///
/// The form may also carry an `img` file part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageboardWriteDto {
    pub image_id: String,
    pub image_name: String,
    pub image_price: i32,
    pub image_qty: i32,
    pub image_content: String,
}

/// Full multipart write form as documented in the OpenAPI schema.
///
/// The handler reads the parts one by one into `ImageboardWriteDto` and a separate file,
/// so this type is never constructed.
#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageboardWriteForm {
    pub image_id: Option<String>,
    pub image_name: Option<String>,
    pub image_price: Option<i32>,
    pub image_qty: Option<i32>,
    pub image_content: Option<String>,
    /// Optional image file, served afterwards under `/storage/{image1}`.
    #[schema(value_type = Option<String>, format = Binary)]
    pub img: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageboardListDto {
    pub rt: ResultStatus,
    /// Number of items on this page, not the number of rows in the board.
    pub total: usize,
    pub pg: i32,
    pub total_p: i32,
    pub start_page: i32,
    pub end_page: i32,
    pub items: Vec<ImageboardDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageboardViewDto {
    pub rt: ResultStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<ImageboardDto>,
}

impl ImageboardViewDto {
    pub fn found(item: ImageboardDto) -> Self {
        Self {
            rt: ResultStatus::Ok,
            total: Some(1),
            item: Some(item),
        }
    }

    pub fn not_found() -> Self {
        Self {
            rt: ResultStatus::Fail,
            total: None,
            item: None,
        }
    }
}
