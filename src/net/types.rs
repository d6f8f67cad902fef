//! Wire DTOs for the post-sharing REST API.
//!
//! DESIGN
//! ======
//! Field names follow the server's JSON (`_id`, `userId`, `img`) through serde
//! renames so the rest of the crate can use Rust naming.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/auth/login` and cached in the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "UserRecord")]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Any other profile fields the server sends; kept so the persisted
    /// session round-trips unchanged.
    #[serde(flatten)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}

/// Wire shape of a user. Servers send `id`, `_id`, or both; `id` wins.
#[derive(Deserialize)]
struct UserRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "_id", default)]
    object_id: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(flatten)]
    profile: serde_json::Map<String, serde_json::Value>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id.or(record.object_id).unwrap_or_default(),
            username: record.username,
            email: record.email,
            profile: record.profile,
        }
    }
}

/// A user-authored post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    /// Author's user id; compared against the session user for menu gating.
    #[serde(rename = "userId")]
    pub author_id: String,
    #[serde(rename = "username", default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub title: String,
    pub content: String,
    /// Image URLs in display order.
    #[serde(rename = "img", default)]
    pub images: Vec<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

impl Post {
    /// First attached image, used as the card cover.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// One page of posts from `GET /auth/posts`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostPage {
    pub items: Vec<Post>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl PostPage {
    /// Decode a list response leniently.
    ///
    /// A missing or non-array `posts` yields no items, malformed entries are
    /// skipped, and a missing `totalPages` reads as zero.
    pub fn from_response(body: &serde_json::Value, page: u32) -> Self {
        let items = body
            .get("posts")
            .and_then(serde_json::Value::as_array)
            .map(|posts| {
                posts
                    .iter()
                    .filter_map(|p| serde_json::from_value::<Post>(p.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();
        let total_pages = body
            .get("totalPages")
            .and_then(serde_json::Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0);
        Self { items, current_page: page, total_pages }
    }
}

/// Login form values and `POST /auth/login` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful `POST /auth/login` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "tocken")]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Signup form values as entered, including the confirmation field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// `POST /auth/signup` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<&SignupForm> for SignupPayload {
    fn from(form: &SignupForm) -> Self {
        Self {
            username: form.username.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
        }
    }
}

/// `POST /auth/signup` response; some servers sign the user in immediately.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "tocken")]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// `{ "post": ... }` envelope returned by create and edit.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PostEnvelope {
    pub post: Post,
}

/// Error body shape shared by all endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Text fields of a create/edit submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    /// Text parts of the multipart form, in submission order.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [("title", self.title.as_str()), ("content", self.content.as_str())]
    }
}

/// Form part name for each attached image file.
pub const IMAGE_FIELD: &str = "img";

/// An image file picked in the post form.
///
/// In the browser it carries the `File` handle for upload; native builds only
/// keep the name.
#[derive(Clone, Debug)]
pub struct Attachment {
    pub name: String,
    #[cfg(feature = "csr")]
    pub file: web_sys::File,
}

impl Attachment {
    #[cfg(feature = "csr")]
    pub fn from_file(file: web_sys::File) -> Self {
        Self { name: file.name(), file }
    }
}
