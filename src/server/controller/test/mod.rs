use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, upload::TempUploadDir};
use tower::ServiceExt;

use crate::server::{
    config::Config, router, service::storage::UploadStorage, state::AppState,
};


const BOUNDARY: &str = "imageboard-test-boundary";

/// Fully assembled application over an in-memory database and a scratch upload directory.
struct TestApp {
    app: Router,
    db: DatabaseConnection,
    uploads: TempUploadDir,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_upload_limit(1024 * 1024).await
    }

    async fn with_upload_limit(upload_max_bytes: usize) -> Self {
        let test = TestBuilder::new()
            .with_member_tables()
            .with_imageboard_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.unwrap();
        let uploads = TempUploadDir::new();

        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            upload_path: uploads.path().to_path_buf(),
            bind_address: "127.0.0.1:0".to_string(),
            cors_origin: "http://localhost:5173".to_string(),
            upload_max_bytes,
        };
        let state = AppState::new(db.clone(), UploadStorage::new(uploads.path()));
        let app = router::app(&config, state).unwrap();

        Self { app, db, uploads }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.app.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str) -> Response {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn post_form(&self, form: MultipartForm) -> Response {
        let request = Request::post("/imageboard/imageboardWrite")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(form.finish()))
            .unwrap();

        self.send(request).await
    }

    async fn post_json(&self, uri: &str, body: Value) -> Response {
        let request = Request::post(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }
}

async fn read_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Asserts a 200 response and returns its JSON body.
async fn read_json(response: Response) -> Value {
    assert_eq!(response.status(), StatusCode::OK);

    serde_json::from_slice(&read_bytes(response).await).unwrap()
}

/// Builder for `multipart/form-data` request bodies.
#[derive(Default)]
struct MultipartForm {
    body: Vec<u8>,
}

impl MultipartForm {
    fn new() -> Self {
        Self::default()
    }

    fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
        self
    }

    fn file(mut self, name: &str, file_name: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n",
                BOUNDARY, name, file_name
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Text fields of a complete, valid write form.
    fn entry(name: &str) -> Self {
        Self::new()
            .text("imageId", "img_1")
            .text("imageName", name)
            .text("imagePrice", "1500")
            .text("imageQty", "2")
            .text("imageContent", "Fresh")
    }

    fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        self.body
    }
}
