use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, ResultStatus, StatusDto},
        imageboard::{
            ImageboardDto, ImageboardListDto, ImageboardViewDto, ImageboardWriteForm,
        },
        member::{LoginDto, LoginResultDto},
    },
    server::{
        config::Config,
        controller::{
            imageboard::{
                self, imageboard_delete, imageboard_list, imageboard_view, imageboard_write,
                IMAGEBOARD_TAG,
            },
            member::{self, login, MEMBER_TAG},
        },
        error::{config::ConfigError, AppError},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        member::login,
        imageboard::imageboard_write,
        imageboard::imageboard_list,
        imageboard::imageboard_view,
        imageboard::imageboard_delete,
    ),
    components(schemas(
        ErrorDto,
        ResultStatus,
        StatusDto,
        LoginDto,
        LoginResultDto,
        ImageboardDto,
        ImageboardWriteForm,
        ImageboardListDto,
        ImageboardViewDto,
    )),
    tags(
        (name = MEMBER_TAG, description = "Member login"),
        (name = IMAGEBOARD_TAG, description = "Image board entries"),
    )
)]
pub struct ApiDoc;

/// JSON endpoints.
///
/// The write route gets its own body limit so uploads can exceed axum's 2 MB default.
pub fn router(upload_max_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route(
            "/imageboard/imageboardWrite",
            post(imageboard_write).layer(DefaultBodyLimit::max(upload_max_bytes)),
        )
        .route("/imageboard/imageboardList", get(imageboard_list))
        .route("/imageboard/imageboardView", get(imageboard_view))
        .route("/imageboard/imageboardDelete", get(imageboard_delete))
}

/// Assembles the complete application: JSON endpoints, `/storage` file serving,
/// Swagger UI, CORS and request tracing.
pub fn app(config: &Config, state: AppState) -> Result<Router, AppError> {
    let origin = HeaderValue::from_str(&config.cors_origin).map_err(|_| {
        ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            value: config.cors_origin.clone(),
        }
    })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let storage = ServeDir::new(state.storage.root());

    let app = router(config.upload_max_bytes)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .nest_service("/storage", storage)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
