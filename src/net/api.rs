//! REST API client for the post-sharing service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; pages turn the error into
//! one message string and never retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "csr")]
use super::types::{IMAGE_FIELD, PostEnvelope};
use super::types::{Attachment, Credentials, LoginResponse, Post, PostDraft, PostPage, SignupPayload, SignupResponse};
use crate::config::ClientConfig;
use crate::state::session::Session;

/// Pre-configured request client: base URL plus the bearer token captured
/// when it was built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, token: token.filter(|t| !t.is_empty()) }
    }

    /// Build a client for the current session. Build a fresh one per request
    /// so a login or logout in between is honored.
    pub fn from_session(config: &ClientConfig, session: &Session) -> Self {
        Self::new(config.api_base_url.clone(), session.token.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn login_url(&self) -> String {
        self.url("auth/login")
    }

    pub fn signup_url(&self) -> String {
        self.url("auth/signup")
    }

    pub fn create_post_url(&self) -> String {
        self.url("auth/createPost")
    }

    pub fn edit_post_url(&self, id: &str) -> String {
        self.url(&format!("auth/editPosts/{id}"))
    }

    pub fn delete_post_url(&self, id: &str) -> String {
        self.url(&format!("auth/deletePosts/{id}"))
    }

    pub fn posts_url(&self, page: u32, limit: u32) -> String {
        self.url(&format!("auth/posts?page={page}&limit={limit}"))
    }

    /// `Authorization` header value, absent when there is no token.
    pub fn authorization_header(&self) -> Option<String> {
        authorization_header(self.token.as_deref())
    }

    /// `POST /auth/login` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails, the server responds with
    /// a non-OK status, or the body cannot be decoded.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = self
                .authorize(gloo_net::http::Request::post(&self.login_url()))
                .json(credentials)
                .map_err(network_error)?;
            let resp = req.send().await.map_err(network_error)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /auth/signup` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails, the server responds with
    /// a non-OK status, or the body cannot be decoded.
    pub async fn signup(&self, payload: &SignupPayload) -> Result<SignupResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = self
                .authorize(gloo_net::http::Request::post(&self.signup_url()))
                .json(payload)
                .map_err(network_error)?;
            let resp = req.send().await.map_err(network_error)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /auth/createPost` as multipart with one `img` part per file.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the form cannot be built, the request fails,
    /// or the response is not a `{ post }` envelope.
    pub async fn create_post(&self, draft: &PostDraft, images: &[Attachment]) -> Result<Post, ApiError> {
        #[cfg(feature = "csr")]
        {
            let form = build_form(draft, images)?;
            let req = self
                .authorize(gloo_net::http::Request::post(&self.create_post_url()))
                .body(form)
                .map_err(network_error)?;
            let resp = req.send().await.map_err(network_error)?;
            let envelope: PostEnvelope = read_json(resp).await?;
            Ok(envelope.post)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (draft, images);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /auth/editPosts/:id`; existing images stay unless `images` is
    /// non-empty.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the form cannot be built, the request fails,
    /// or the response is not a `{ post }` envelope.
    pub async fn edit_post(&self, id: &str, draft: &PostDraft, images: &[Attachment]) -> Result<Post, ApiError> {
        #[cfg(feature = "csr")]
        {
            let form = build_form(draft, images)?;
            let req = self
                .authorize(gloo_net::http::Request::post(&self.edit_post_url(id)))
                .body(form)
                .map_err(network_error)?;
            let resp = req.send().await.map_err(network_error)?;
            let envelope: PostEnvelope = read_json(resp).await?;
            Ok(envelope.post)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, draft, images);
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE /auth/deletePosts/:id`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the status is not OK.
    pub async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self
                .authorize(gloo_net::http::Request::delete(&self.delete_post_url(id)))
                .send()
                .await
                .map_err(network_error)?;
            if !resp.ok() {
                return Err(status_error(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /auth/posts?page=P&limit=L`, decoded leniently.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the status is not OK.
    /// A body of the wrong shape is not an error; it yields an empty page.
    pub async fn fetch_posts(&self, page: u32, limit: u32) -> Result<PostPage, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self
                .authorize(gloo_net::http::Request::get(&self.posts_url(page, limit)))
                .send()
                .await
                .map_err(network_error)?;
            let body: serde_json::Value = read_json(resp).await?;
            Ok(PostPage::from_response(&body, page))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (page, limit);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "csr")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.authorization_header() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }
}

fn authorization_header(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(|t| format!("Bearer {t}"))
}

#[cfg(feature = "csr")]
fn network_error(e: impl std::fmt::Display) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "csr")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let body = resp.text().await.unwrap_or_default();
    ApiError::from_status(resp.status(), &body)
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
fn build_form(draft: &PostDraft, images: &[Attachment]) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(js_err)?;
    for (name, value) in draft.form_fields() {
        form.append_with_str(name, value).map_err(js_err)?;
    }
    for image in images {
        form.append_with_blob_and_filename(IMAGE_FIELD, &image.file, &image.name)
            .map_err(js_err)?;
    }
    Ok(form)
}
