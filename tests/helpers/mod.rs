#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tawau::application::ports::{
    AuthError, AuthGateway, AuthSession, BlobStore, BlobStoreError, DocumentRepository,
    ExtractorError, LlmClient, LlmClientError, ModelInfo, RepositoryError, TextExtractor,
    Translator, TranslatorError,
};
use tawau::application::services::{ChatService, SummaryService, UploadPipeline};
use tawau::domain::{
    BlobRef, DocumentId, DocumentRecord, NewDocumentRecord, WorkingFileSet,
};
use tawau::infrastructure::workspace::TempWorkspace;
use tawau::presentation::{create_router, AppState};

pub struct StaticExtractor {
    pub text: Option<String>,
}

#[async_trait]
impl TextExtractor for StaticExtractor {
    async fn extract(&self, _path: &Path) -> Result<String, ExtractorError> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => Err(ExtractorError::ParseFailed("mock extraction failure".to_string())),
        }
    }
}

pub struct RecordingLlm {
    pub response: String,
    pub fail_generate: bool,
    pub models: Vec<ModelInfo>,
    pub fail_list: bool,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl RecordingLlm {
    pub fn ok(response: &str) -> Self {
        Self {
            response: response.to_string(),
            fail_generate: false,
            models: vec![
                ModelInfo {
                    name: "models/embedding-001".to_string(),
                    supports_generation: false,
                },
                ModelInfo {
                    name: "models/gemini-2.5-flash-lite".to_string(),
                    supports_generation: true,
                },
            ],
            fail_list: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_generate: true,
            ..Self::ok("unused")
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, prompt)| prompt.clone())
            .collect()
    }

    pub fn models_used(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(model, _)| model.clone())
            .collect()
    }
}

#[async_trait]
impl LlmClient for RecordingLlm {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmClientError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));
        if self.fail_generate {
            Err(LlmClientError::ApiRequestFailed("mock llm failure".to_string()))
        } else {
            Ok(self.response.clone())
        }
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, LlmClientError> {
        if self.fail_list {
            Err(LlmClientError::ApiRequestFailed("mock listing failure".to_string()))
        } else {
            Ok(self.models.clone())
        }
    }
}

pub struct MemoryBlobStore {
    pub fail_original: bool,
    pub fail_translated: bool,
    pub uploads: Mutex<Vec<String>>,
    pub removed: Mutex<Vec<String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self {
            fail_original: false,
            fail_translated: false,
            uploads: Mutex::new(Vec::new()),
            removed: Mutex::new(Vec::new()),
        }
    }

    pub fn uploaded_paths(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn removed_paths(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn upload(
        &self,
        path: &str,
        _bytes: &[u8],
        _content_type: &str,
    ) -> Result<BlobRef, BlobStoreError> {
        if self.fail_original && path.starts_with("originals/") {
            return Err(BlobStoreError::UploadFailed("mock original failure".to_string()));
        }
        if self.fail_translated && path.starts_with("translated/") {
            return Err(BlobStoreError::UploadFailed("mock translated failure".to_string()));
        }
        self.uploads.lock().unwrap().push(path.to_string());
        Ok(BlobRef::new(path, self.public_url(path)))
    }

    fn public_url(&self, path: &str) -> String {
        format!("https://storage.test/object/public/files/{path}")
    }

    async fn remove(&self, paths: &[String]) -> Result<(), BlobStoreError> {
        self.removed.lock().unwrap().extend_from_slice(paths);
        Ok(())
    }
}

pub struct MemoryDocumentRepository {
    pub fail_insert: bool,
    pub records: Mutex<Vec<DocumentRecord>>,
}

impl MemoryDocumentRepository {
    pub fn new() -> Self {
        Self {
            fail_insert: false,
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn with_record(record: DocumentRecord) -> Self {
        let repo = Self::new();
        repo.records.lock().unwrap().push(record);
        repo
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn first_record(&self) -> Option<DocumentRecord> {
        self.records.lock().unwrap().first().cloned()
    }
}

#[async_trait]
impl DocumentRepository for MemoryDocumentRepository {
    async fn insert(&self, record: &NewDocumentRecord) -> Result<DocumentId, RepositoryError> {
        if self.fail_insert {
            return Err(RepositoryError::QueryFailed("mock insert failure".to_string()));
        }
        let id = DocumentId::new();
        self.records.lock().unwrap().push(DocumentRecord {
            id,
            owner_id: record.owner_id.clone(),
            original_title: record.original_title.clone(),
            translated_title: record.translated_title.clone(),
            original: record.original.clone(),
            translated: record.translated.clone(),
            summary: record.summary.summary.clone(),
            explanation: record.summary.explanation.clone(),
            extracted_text: record.extracted_text.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn get_by_id(&self, id: DocumentId) -> Result<Option<DocumentRecord>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn get_by_id_and_owner(
        &self,
        id: DocumentId,
        owner_id: &str,
    ) -> Result<Option<DocumentRecord>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id && r.owner_id == owner_id)
            .cloned())
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<DocumentRecord>, RepositoryError> {
        // Newest first: insertion order reversed.
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .rev()
            .cloned()
            .collect())
    }

    async fn delete(&self, id: DocumentId) -> Result<(), RepositoryError> {
        self.records.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub enum TranslatorBehavior {
    Succeed,
    Fail,
    Skip,
}

pub struct FakeTranslator(pub TranslatorBehavior);

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        files: &WorkingFileSet,
        _prompt_text: &str,
    ) -> Result<PathBuf, TranslatorError> {
        match self.0 {
            TranslatorBehavior::Succeed => {
                tokio::fs::write(files.output_path(), b"translated pdf").await?;
                Ok(files.output_path().to_path_buf())
            }
            TranslatorBehavior::Fail => Err(TranslatorError::NonZeroExit(1)),
            TranslatorBehavior::Skip => Err(TranslatorError::Skipped),
        }
    }
}

pub struct MockAuthGateway {
    pub fail: bool,
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn sign_up(
        &self,
        _client_name: &str,
        _email: &str,
        _password: &str,
    ) -> Result<String, AuthError> {
        if self.fail {
            return Err(AuthError::Provider("mock signup failure".to_string()));
        }
        Ok("user-123".to_string())
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<AuthSession, AuthError> {
        if self.fail {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(AuthSession {
            access_token: "token-abc".to_string(),
            user_id: "user-123".to_string(),
            email: email.to_string(),
            client_name: Some("Tester".to_string()),
        })
    }
}

pub struct TestAppConfig {
    pub extracted_text: Option<String>,
    pub llm: RecordingLlm,
    pub fail_original_upload: bool,
    pub fail_translated_upload: bool,
    pub translator: TranslatorBehavior,
    pub fail_insert: bool,
    pub auth_fails: bool,
}

impl Default for TestAppConfig {
    fn default() -> Self {
        Self {
            extracted_text: Some("Sample extracted text about distributed systems.".to_string()),
            llm: RecordingLlm::ok("generated text"),
            fail_original_upload: false,
            fail_translated_upload: false,
            translator: TranslatorBehavior::Succeed,
            fail_insert: false,
            auth_fails: false,
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub repo: Arc<MemoryDocumentRepository>,
    pub blobs: Arc<MemoryBlobStore>,
    pub llm: Arc<RecordingLlm>,
    pub scratch: tempfile::TempDir,
}

pub fn spawn_app(config: TestAppConfig) -> TestApp {
    let scratch = tempfile::tempdir().expect("create scratch dir");
    let workspace = Arc::new(TempWorkspace::new(scratch.path()).expect("init workspace"));

    let llm = Arc::new(config.llm);
    let blobs = Arc::new(MemoryBlobStore {
        fail_original: config.fail_original_upload,
        fail_translated: config.fail_translated_upload,
        ..MemoryBlobStore::new()
    });
    let repo = Arc::new(MemoryDocumentRepository {
        fail_insert: config.fail_insert,
        ..MemoryDocumentRepository::new()
    });

    let summaries = Arc::new(SummaryService::new(
        llm.clone(),
        "gemini-2.5-flash-lite".to_string(),
    ));
    let upload_pipeline = Arc::new(UploadPipeline::new(
        workspace,
        Arc::new(StaticExtractor {
            text: config.extracted_text,
        }),
        summaries,
        blobs.clone(),
        Arc::new(FakeTranslator(config.translator)),
        repo.clone(),
    ));
    let chat_service = Arc::new(ChatService::new(
        llm.clone(),
        repo.clone(),
        "gemini-pro".to_string(),
    ));

    let state = AppState {
        upload_pipeline,
        chat_service,
        auth_gateway: Arc::new(MockAuthGateway {
            fail: config.auth_fails,
        }),
        document_repository: repo.clone(),
        blob_store: blobs.clone(),
    };

    TestApp {
        router: create_router(state),
        repo,
        blobs,
        llm,
        scratch,
    }
}

pub fn sample_record(owner_id: &str, extracted_text: &str) -> DocumentRecord {
    DocumentRecord {
        id: DocumentId::new(),
        owner_id: owner_id.to_string(),
        original_title: "paper.pdf".to_string(),
        translated_title: "paper.pdf".to_string(),
        original: BlobRef::new(
            "originals/original_abc.pdf",
            "https://storage.test/object/public/files/originals/original_abc.pdf",
        ),
        translated: None,
        summary: "a summary".to_string(),
        explanation: vec!["an explanation".to_string()],
        extracted_text: extracted_text.to_string(),
        created_at: Utc::now(),
    }
}

const BOUNDARY: &str = "test-boundary-7d83a1";

pub fn multipart_upload_body(file: Option<&[u8]>, user_id: Option<&str>) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    if let Some(bytes) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; \
filename=\"paper.pdf\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    if let Some(user_id) = user_id {
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"user_id\"\r\n\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(user_id.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

pub async fn send_upload(
    router: &Router,
    file: Option<&[u8]>,
    user_id: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let (content_type, body) = multipart_upload_body(file, user_id);
    let request = Request::builder()
        .method("POST")
        .uri("/upload")
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    send(router, request).await
}

pub async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

pub async fn send_empty(router: &Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

/// Files left behind in the scratch directory after a request.
pub fn scratch_files(app: &TestApp) -> Vec<String> {
    std::fs::read_dir(app.scratch.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect()
}
