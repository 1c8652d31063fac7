#![allow(dead_code)]

use std::{
    io::Cursor,
    path::PathBuf,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use image::{DynamicImage, ImageFormat, RgbImage};
use nesventory_gemini_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::{Args, GeminiArgs, LogArgs, ServerArgs},
};
use nesventory_gemini_core::domain::{
    common::{DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL, entities::app_errors::CoreError},
    identification::{ports::LLMClient, services::Service},
};

pub struct StubLLMClient {
    reply: Result<String, CoreError>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubLLMClient {
    pub fn replying(reply: &str) -> Arc<Self> {
        Self::with(Ok(reply.to_string()))
    }

    pub fn failing(error: CoreError) -> Arc<Self> {
        Self::with(Err(error))
    }

    fn with(reply: Result<String, CoreError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }

    fn record(&self, prompt: String) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt);
        self.reply.clone()
    }
}

#[async_trait]
impl LLMClient for StubLLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        _image_data: Vec<u8>,
        _mime_type: String,
    ) -> Result<String, CoreError> {
        self.record(prompt)
    }

    async fn generate_with_text(&self, prompt: String) -> Result<String, CoreError> {
        self.record(prompt)
    }
}

pub fn args(dist_path: PathBuf) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            host_port: None,
            port: None,
            allowed_origins: vec!["*".to_string()],
            dist_path,
        },
        gemini: GeminiArgs {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    }
}

fn missing_dist() -> PathBuf {
    PathBuf::from("/nonexistent/nesventory-dist")
}

pub fn server_with(llm_client: Option<Arc<dyn LLMClient>>, dist_path: PathBuf) -> TestServer {
    let state = AppState::new(Arc::new(args(dist_path)), Service::new(llm_client));
    TestServer::new(router(state).unwrap()).unwrap()
}

pub fn unconfigured_server() -> TestServer {
    server_with(None, missing_dist())
}

pub fn stubbed_server(stub: &Arc<StubLLMClient>) -> TestServer {
    let client: Arc<dyn LLMClient> = stub.clone();
    server_with(Some(client), missing_dist())
}

pub fn encoded_image(format: ImageFormat) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(RgbImage::new(16, 16))
        .write_to(&mut buffer, format)
        .unwrap();
    buffer.into_inner()
}

pub fn file_form(data: Vec<u8>, file_name: &str, mime_type: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(data).file_name(file_name).mime_type(mime_type),
    )
}

pub fn jpeg_form() -> MultipartForm {
    file_form(encoded_image(ImageFormat::Jpeg), "village.jpg", "image/jpeg")
}
