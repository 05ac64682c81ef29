//! Closed value sets stored on schemes and cases.
//!
//! - [`Access`] - Who may call the endpoint
//! - [`Method`] - HTTP method enumeration
//! - [`MimeType`] - Media type the endpoint consumes
//! - [`Status`] - HTTP status code a case exemplifies

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// Access rule of an endpoint or case.
///
/// ## Examples
///
/// ```
/// use draft_define::Access;
///
/// assert_eq!(Access::default(), Access::Public);
/// assert_eq!(Access::Admin.to_string(), "admin");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Access {
    /// Anyone may call the endpoint.
    #[default]
    Public,
    /// Any authenticated caller.
    Protected,
    /// Only the owner of the resource.
    Private,
    /// Administrators only.
    Admin,
}

/// HTTP methods.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use draft_define::Method;
///
/// assert_eq!(Method::from_str("PATCH").unwrap(), Method::Patch);
/// assert_eq!(Method::Post.to_string(), "POST");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    /// Also the default for a new scheme.
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

/// Media type an endpoint consumes.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum MimeType {
    #[default]
    #[serde(rename = "application/json")]
    #[strum(serialize = "application/json")]
    Json,
    #[serde(rename = "application/x-www-form-urlencoded")]
    #[strum(serialize = "application/x-www-form-urlencoded")]
    FormUrlEncoded,
    #[serde(rename = "multipart/form-data")]
    #[strum(serialize = "multipart/form-data")]
    Multipart,
    #[serde(rename = "text/plain")]
    #[strum(serialize = "text/plain")]
    Text,
    #[serde(rename = "application/xml")]
    #[strum(serialize = "application/xml")]
    Xml,
    #[serde(rename = "application/octet-stream")]
    #[strum(serialize = "application/octet-stream")]
    OctetStream,
}

/// HTTP status code of a case.
///
/// Serialized as a bare integer, and as its decimal string when used as a
/// JSON object key.
///
/// ## Examples
///
/// ```
/// use draft_define::Status;
///
/// assert_eq!(Status::NOT_FOUND.code(), 404);
/// assert_eq!(Status::from(201), Status::CREATED);
/// assert_eq!(Status::OK.to_string(), "200");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Status(pub u16);

impl Status {
    pub const OK: Status = Status(200);
    pub const CREATED: Status = Status(201);
    pub const ACCEPTED: Status = Status(202);
    pub const NO_CONTENT: Status = Status(204);
    pub const MOVED_PERMANENTLY: Status = Status(301);
    pub const FOUND: Status = Status(302);
    pub const NOT_MODIFIED: Status = Status(304);
    pub const BAD_REQUEST: Status = Status(400);
    pub const UNAUTHORIZED: Status = Status(401);
    pub const FORBIDDEN: Status = Status(403);
    pub const NOT_FOUND: Status = Status(404);
    pub const CONFLICT: Status = Status(409);
    pub const UNPROCESSABLE_ENTITY: Status = Status(422);
    pub const TOO_MANY_REQUESTS: Status = Status(429);
    pub const INTERNAL_SERVER_ERROR: Status = Status(500);
    pub const SERVICE_UNAVAILABLE: Status = Status(503);

    /// Returns the numeric code.
    pub fn code(self) -> u16 {
        self.0
    }
}

impl From<u16> for Status {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
