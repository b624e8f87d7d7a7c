use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        imageboard::{
            ImageboardListDto, ImageboardViewDto, ImageboardWriteDto, ImageboardWriteForm,
        },
    },
    server::{
        controller::param::{PageParam, SeqParam},
        error::AppError,
        model::imageboard::UploadedFile,
        service::imageboard::ImageboardService,
        state::AppState,
    },
};

/// Tag for grouping image board endpoints in OpenAPI documentation
pub static IMAGEBOARD_TAG: &str = "imageboard";

/// Name of the multipart part carrying the image.
static IMAGE_FIELD: &str = "img";

/// Create a board entry from a multipart form.
///
/// Text fields `imageId`, `imageName`, `imagePrice`, `imageQty` and `imageContent` are
/// matched case-insensitively; missing ones default to empty or 0. An optional `img`
/// file part is stored under a generated key. The write date is always set by the server.
///
/// # Returns
/// - `200 OK` with `rt: "OK"` - Entry created
/// - `200 OK` with `rt: "FAIL"` - Price or quantity not a number, or the upload could not be stored
/// - `400 Bad Request` - Malformed multipart body
/// - `413 Payload Too Large` - Body over the configured upload limit
#[utoipa::path(
    post,
    path = "/imageboard/imageboardWrite",
    tag = IMAGEBOARD_TAG,
    request_body(content = ImageboardWriteForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Write result", body = StatusDto),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 413, description = "Upload too large", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn imageboard_write(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let Some((dto, file)) = read_write_form(multipart).await? else {
        return Ok((StatusCode::OK, Json(StatusDto::from(false))));
    };

    let entry = ImageboardService::new(&state.db, &state.storage)
        .write(dto, file)
        .await?;

    Ok((StatusCode::OK, Json(StatusDto::from(entry.is_some()))))
}

/// List one page of board entries, newest first.
///
/// Pages hold 5 entries and navigation blocks span 3 pages. `total` counts the entries
/// on this page; a page past the end is `rt: "OK"` with no items.
#[utoipa::path(
    get,
    path = "/imageboard/imageboardList",
    tag = IMAGEBOARD_TAG,
    params(PageParam),
    responses(
        (status = 200, description = "Page of board entries", body = ImageboardListDto),
        (status = 400, description = "Page is not an integer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn imageboard_list(
    State(state): State<AppState>,
    Query(param): Query<PageParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = ImageboardService::new(&state.db, &state.storage)
        .list(param.pg)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

#[utoipa::path(
    get,
    path = "/imageboard/imageboardView",
    tag = IMAGEBOARD_TAG,
    params(SeqParam),
    responses(
        (status = 200, description = "Board entry, or FAIL if it does not exist", body = ImageboardViewDto),
        (status = 400, description = "Missing or non-integer seq", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn imageboard_view(
    State(state): State<AppState>,
    Query(param): Query<SeqParam>,
) -> Result<impl IntoResponse, AppError> {
    let entry = ImageboardService::new(&state.db, &state.storage)
        .view(param.seq)
        .await?;

    let dto = match entry {
        Some(entry) => ImageboardViewDto::found(entry.into_dto()),
        None => ImageboardViewDto::not_found(),
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Delete a board entry.
///
/// The uploaded image, if any, is left in storage.
#[utoipa::path(
    get,
    path = "/imageboard/imageboardDelete",
    tag = IMAGEBOARD_TAG,
    params(SeqParam),
    responses(
        (status = 200, description = "OK if the entry was deleted, FAIL if it did not exist", body = StatusDto),
        (status = 400, description = "Missing or non-integer seq", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn imageboard_delete(
    State(state): State<AppState>,
    Query(param): Query<SeqParam>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = ImageboardService::new(&state.db, &state.storage)
        .delete(param.seq)
        .await?;

    Ok((StatusCode::OK, Json(StatusDto::from(deleted))))
}

/// Reads the write form into its text fields and optional file.
///
/// # Returns
/// - `Ok(Some(..))` - Form read
/// - `Ok(None)` - A numeric field held something other than an integer
/// - `Err(AppError::MultipartErr)` - Malformed body or body limit exceeded
async fn read_write_form(
    mut multipart: Multipart,
) -> Result<Option<(ImageboardWriteDto, Option<UploadedFile>)>, AppError> {
    let mut dto = ImageboardWriteDto::default();
    let mut file = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_ascii_lowercase();

        if name == IMAGE_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;

            // Browsers send an empty part when no file was picked.
            if file_name.is_empty() && data.is_empty() {
                continue;
            }

            file = Some(UploadedFile {
                file_name,
                data: data.to_vec(),
            });
            continue;
        }

        let value = field.text().await?;

        if !apply_text_field(&mut dto, &name, &value) {
            tracing::debug!("Rejected write form: field '{}' is not a number", name);
            return Ok(None);
        }
    }

    Ok(Some((dto, file)))
}

/// Copies one text part into the form DTO.
///
/// `name` must already be lowercased. Unknown fields, including client-sent `seq`,
/// `image1` and `logtime`, are ignored.
///
/// # Returns
/// - `false` - A numeric field could not be parsed
fn apply_text_field(dto: &mut ImageboardWriteDto, name: &str, value: &str) -> bool {
    match name {
        "imageid" => dto.image_id = value.to_string(),
        "imagename" => dto.image_name = value.to_string(),
        "imagecontent" => dto.image_content = value.to_string(),
        "imageprice" => match parse_number(value) {
            Some(price) => dto.image_price = price,
            None => return false,
        },
        "imageqty" => match parse_number(value) {
            Some(qty) => dto.image_qty = qty,
            None => return false,
        },
        _ => {}
    }

    true
}

/// Parses a numeric form value; a blank value counts as 0.
fn parse_number(value: &str) -> Option<i32> {
    let value = value.trim();

    if value.is_empty() {
        return Some(0);
    }

    value.parse().ok()
}
