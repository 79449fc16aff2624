//! REST API Client
//!
//! Typed bindings to the backend, organized by domain. Every call runs
//! through the session [`Pipeline`] so loading and 403 handling stay global.

mod error;
mod label;
mod member;
mod project;
mod setting;
mod sprint;
mod task;
mod user;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_session::Pipeline;
use reqwest::{Method, Request, RequestBuilder, Url};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::config::AppConfig;

pub use error::ApiError;
pub use label::{CreateLabelArgs, LabelCreated};
pub use member::{AddMemberArgs, MemberAdded};
pub use project::ProjectArgs;
pub use sprint::{parse_date, CreateSprintArgs, SprintCreated};
pub use task::{LabelRef, TaskArgs, TaskFilter};
pub use user::{LoginArgs, ProfileUpdate, RegisterArgs};

pub type ApiResult<T> = Result<T, ApiError>;

/// Shared HTTP client: base URL, cookie credentials, request hooks
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    pipeline: Pipeline,
}

impl ApiClient {
    pub fn new(config: &AppConfig, pipeline: Pipeline) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Arc::from(config.api_base_url.as_str()),
            pipeline,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> ApiResult<Url> {
        Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ApiError::Request(format!("{}: {}", path, e)))
    }

    async fn request<Q, B, T>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> ApiResult<T>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.pipeline.run(self.send(method, path, query, body)).await
    }

    fn build<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> ApiResult<Request>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let mut builder = self.http.request(method, self.url(path)?);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        Ok(with_credentials(builder).build()?)
    }

    /// One round trip; building the request happens inside the pipeline too
    async fn send<Q, B, T>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> ApiResult<T>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build(method.clone(), path, query, body)?;
        let response = self.http.execute(request).await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::debug!("[API] {} {} -> {}", method, path, status.as_u16());
            return Err(ApiError::from_response(status.as_u16(), &text));
        }
        decode_body(&text)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request::<(), (), T>(Method::GET, path, None, None).await
    }

    /// GET with `query` serialized into the query string
    pub(crate) async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request::<Q, (), T>(Method::GET, path, Some(query), None).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request::<(), B, T>(Method::POST, path, None, Some(body)).await
    }

    /// POST without a body, ignoring the response payload
    pub(crate) async fn post_empty(&self, path: &str) -> ApiResult<()> {
        self.request::<(), (), IgnoredAny>(Method::POST, path, None, None)
            .await
            .map(|_| ())
    }

    pub(crate) async fn put<B>(&self, path: &str, body: &B) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.request::<(), B, IgnoredAny>(Method::PUT, path, None, Some(body))
            .await
            .map(|_| ())
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        self.request::<(), (), IgnoredAny>(Method::DELETE, path, None, None)
            .await
            .map(|_| ())
    }
}

/// Browsers only send the session cookie cross-origin with `credentials: include`
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    {
        builder.fetch_credentials_include()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        builder
    }
}

/// Empty bodies decode as JSON `null`
fn decode_body<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    let text = if text.trim().is_empty() { "null" } else { text };
    Ok(serde_json::from_str(text)?)
}

/// Get the API client from context
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&AppConfig::with_base_url(base), Pipeline::new())
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let api = client("http://localhost:5000/");
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(
            api.url("/task/by_project/4?label_id=2").unwrap().as_str(),
            "http://localhost:5000/task/by_project/4?label_id=2"
        );
    }

    #[test]
    fn test_bad_base_url_is_request_error() {
        let api = client("not a url");
        assert!(matches!(api.url("/user"), Err(ApiError::Request(_))));
    }

    #[test]
    fn test_decode_body() {
        let projects: Vec<Project> = decode_body(
            r#"[{"project_id": 1, "name": "Alpha", "description": "First", "created_by": 7, "is_owner": true}]"#,
        )
        .unwrap();
        assert_eq!(projects.len(), 1);
        assert!(projects[0].is_owner);

        assert!(decode_body::<IgnoredAny>("").is_ok());
        assert!(matches!(decode_body::<Vec<Project>>("{}"), Err(ApiError::Decode(_))));
    }
}
