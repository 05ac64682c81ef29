//! Cases and the shared setter vocabulary.
//!
//! A [`SchemeCase`] is one named, status-tagged example of calling an
//! endpoint. The [`Configure`] trait gives endpoint defaults and individual
//! cases the same setters; which one is written is decided by the receiver:
//!
//! ```
//! use draft_define::prelude::*;
//!
//! let mut scheme = Scheme::new("/users");
//! scheme.access(Access::Public); // endpoint default
//!
//! scheme.case(Status::FORBIDDEN, "banned", |case| {
//!     case.access(Access::Admin); // this case only
//! });
//!
//! assert_eq!(scheme.defaults().access, Access::Public);
//! ```

use draft_reflect::Sample;
use serde::Serialize;

use crate::types::{Access, Method, MimeType, Status};

/// Example values for request and response headers.
///
/// Either side may be absent when no example was provided.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemeCaseHeaders {
    pub request: Option<Sample>,
    pub response: Option<Sample>,
}

/// Endpoint-level defaults snapshotted into every new case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defaults {
    pub access: Access,
    pub method: Method,
    pub consumes: MimeType,
    pub params: Option<Sample>,
    pub headers: SchemeCaseHeaders,
    pub body: Option<Sample>,
}

/// One named, status-tagged example of using an endpoint.
///
/// Cases start as a snapshot of the scheme's [`Defaults`] (see
/// [`Scheme::draft`](crate::Scheme::draft)); setters called on a case replace
/// its snapshotted values and never touch the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeCase {
    pub name: String,
    pub description: String,
    pub access: Access,
    pub status: Status,
    pub method: Method,
    pub consumes: MimeType,
    pub params: Option<Sample>,
    pub headers: SchemeCaseHeaders,
    pub body: Option<Sample>,
}

impl SchemeCase {
    /// Creates a case for `status` pre-populated from `defaults`.
    ///
    /// The description starts empty; it is never inherited.
    pub fn from_defaults(status: Status, name: impl Into<String>, defaults: &Defaults) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            access: defaults.access,
            status,
            method: defaults.method,
            consumes: defaults.consumes,
            params: defaults.params.clone(),
            headers: defaults.headers.clone(),
            body: defaults.body.clone(),
        }
    }
}

/// Mutable views of the fields a [`Configure`] setter may write.
#[doc(hidden)]
pub struct Slots<'a> {
    pub access: &'a mut Access,
    pub method: &'a mut Method,
    pub consumes: &'a mut MimeType,
    pub description: &'a mut String,
    pub params: &'a mut Option<Sample>,
    pub headers: &'a mut SchemeCaseHeaders,
    pub body: &'a mut Option<Sample>,
}

/// Setters shared by endpoint defaults and individual cases.
///
/// Every setter replaces the previous value of its target outright. Example
/// setters accept anything [`Serialize`]; a value serializing to `null`
/// (such as `None`) clears the slot, meaning "no example provided".
pub trait Configure {
    #[doc(hidden)]
    fn slots(&mut self) -> Slots<'_>;

    /// Sets the access rule.
    fn access(&mut self, access: Access) -> &mut Self {
        *self.slots().access = access;
        self
    }

    /// Sets the HTTP method.
    fn method(&mut self, method: Method) -> &mut Self {
        *self.slots().method = method;
        self
    }

    /// Sets the consumed media type.
    fn consumes(&mut self, consumes: MimeType) -> &mut Self {
        *self.slots().consumes = consumes;
        self
    }

    /// Sets the free-text description.
    fn description(&mut self, description: impl Into<String>) -> &mut Self {
        *self.slots().description = description.into();
        self
    }

    /// Sets the example request parameters.
    fn params(&mut self, params: impl Serialize) -> &mut Self {
        *self.slots().params = Sample::capture(&params);
        self
    }

    /// Sets the example request headers.
    fn request_headers(&mut self, headers: impl Serialize) -> &mut Self {
        self.slots().headers.request = Sample::capture(&headers);
        self
    }

    /// Sets the example response headers.
    fn response_headers(&mut self, headers: impl Serialize) -> &mut Self {
        self.slots().headers.response = Sample::capture(&headers);
        self
    }

    /// Sets the example body.
    fn body(&mut self, body: impl Serialize) -> &mut Self {
        *self.slots().body = Sample::capture(&body);
        self
    }
}

impl Configure for SchemeCase {
    fn slots(&mut self) -> Slots<'_> {
        Slots {
            access: &mut self.access,
            method: &mut self.method,
            consumes: &mut self.consumes,
            description: &mut self.description,
            params: &mut self.params,
            headers: &mut self.headers,
            body: &mut self.body,
        }
    }
}
