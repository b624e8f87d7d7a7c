use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        member::{LoginDto, LoginResultDto},
    },
    server::{
        error::AppError, model::member::LoginParam, service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Check a member's id and password.
///
/// No session or token is issued; the client keeps the returned id and name itself.
/// Unknown ids and wrong passwords both answer `rt: "FAIL"`.
#[utoipa::path(
    post,
    path = "/login",
    tag = MEMBER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login result, OK with member id and name or FAIL", body = LoginResultDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db)
        .login(LoginParam::from(payload))
        .await?;

    let dto = match member {
        Some(member) => member.into_login_dto(),
        None => LoginResultDto::fail(),
    };

    Ok((StatusCode::OK, Json(dto)))
}
