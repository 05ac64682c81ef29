//! The endpoint scheme builder.
//!
//! A [`Scheme`] goes through a single construction phase: endpoint metadata
//! and [`Defaults`] are set through `&mut self`, then cases are recorded.
//! Recording only needs `&self`, so a scheme shared between threads can
//! record cases concurrently while its defaults stay frozen.

use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

use crate::case::{Configure, Defaults, SchemeCase, Slots};
use crate::types::Status;

/// The description of one API endpoint: metadata, defaults and recorded cases.
///
/// ## Examples
///
/// ```
/// use draft_define::prelude::*;
/// use serde_json::json;
///
/// let mut scheme = Scheme::new("/users");
/// scheme
///     .name("List users")
///     .project("accounts")
///     .method(Method::Get)
///     .access(Access::Protected);
///
/// scheme.case(Status::OK, "ok", |case| {
///     case.body(json!([{ "id": 1, "name": "ann" }]));
/// });
/// scheme.case(Status::UNAUTHORIZED, "anonymous", |case| {
///     case.access(Access::Public);
/// });
///
/// assert_eq!(scheme.case_count(), 2);
/// assert_eq!(scheme.case_by_status(Status::UNAUTHORIZED).unwrap().name, "anonymous");
/// assert!(scheme.case_by_status(Status::NOT_FOUND).is_none());
/// ```
#[derive(Debug, Default)]
pub struct Scheme {
    pub(crate) url: String,
    pub(crate) name: String,
    pub(crate) project: String,
    pub(crate) description: String,
    pub(crate) defaults: Defaults,
    cases: Mutex<Vec<SchemeCase>>,
}

impl Scheme {
    /// Creates an empty scheme for the endpoint at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the relative URL of the endpoint.
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = url.into();
        self
    }

    /// Sets the display name of the endpoint.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Sets the project tag.
    pub fn project(&mut self, project: impl Into<String>) -> &mut Self {
        self.project = project.into();
        self
    }

    /// The endpoint-level defaults new cases start from.
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Snapshots the current defaults into a new, uncommitted case.
    ///
    /// Configure the returned case with the [`Configure`] setters, then hand
    /// it to [`commit`](Self::commit). Nothing is recorded until then.
    ///
    /// ## Examples
    ///
    /// ```
    /// use draft_define::prelude::*;
    ///
    /// let mut scheme = Scheme::new("/users");
    /// scheme.method(Method::Post);
    ///
    /// let mut case = scheme.draft(Status::CREATED, "created");
    /// assert_eq!(case.method, Method::Post);
    /// case.description("a new user was stored");
    ///
    /// assert_eq!(scheme.case_count(), 0);
    /// scheme.commit(case);
    /// assert_eq!(scheme.case_count(), 1);
    /// ```
    pub fn draft(&self, status: Status, name: impl Into<String>) -> SchemeCase {
        SchemeCase::from_defaults(status, name, &self.defaults)
    }

    /// Appends a configured case to the recorded list.
    pub fn commit(&self, case: SchemeCase) {
        debug!(status = %case.status, name = %case.name, "recorded case");
        self.lock_cases().push(case);
    }

    /// Records a case: drafts it from the defaults, lets `configure` refine
    /// it, then commits it.
    ///
    /// No lock is held while `configure` runs, so it may itself record
    /// further cases; those are committed before this one.
    pub fn case<F>(&self, status: Status, name: impl Into<String>, configure: F)
    where
        F: FnOnce(&mut SchemeCase),
    {
        let mut case = self.draft(status, name);
        configure(&mut case);
        self.commit(case);
    }

    /// All recorded cases, in commit order.
    pub fn cases(&self) -> Vec<SchemeCase> {
        self.lock_cases().clone()
    }

    /// The first recorded case with `status`, or `None` if there is none.
    pub fn case_by_status(&self, status: Status) -> Option<SchemeCase> {
        self.lock_cases().iter().find(|c| c.status == status).cloned()
    }

    /// Number of committed cases.
    pub fn case_count(&self) -> usize {
        self.lock_cases().len()
    }

    fn lock_cases(&self) -> MutexGuard<'_, Vec<SchemeCase>> {
        // Cases are only ever pushed whole, so a poisoned list is still consistent
        self.cases.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Configure for Scheme {
    fn slots(&mut self) -> Slots<'_> {
        let defaults = &mut self.defaults;
        Slots {
            access: &mut defaults.access,
            method: &mut defaults.method,
            consumes: &mut defaults.consumes,
            description: &mut self.description,
            params: &mut defaults.params,
            headers: &mut defaults.headers,
            body: &mut defaults.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Access, Method, MimeType};
    use draft_reflect::Sample;
    use serde_json::json;
    use std::thread;
    use tracing_test::traced_test;

    fn sample(value: serde_json::Value) -> Option<Sample> {
        Sample::capture(&value)
    }

    #[test]
    fn setters_without_a_case_write_defaults() {
        let mut scheme = Scheme::new("/orders");
        scheme
            .access(Access::Private)
            .method(Method::Put)
            .consumes(MimeType::Xml)
            .description("replace an order")
            .params(json!({ "id": 9 }))
            .request_headers(json!({ "X-Token": "t" }))
            .response_headers(json!({ "ETag": "abc" }))
            .body(json!({ "total": 10 }));

        let defaults = scheme.defaults();
        assert_eq!(defaults.access, Access::Private);
        assert_eq!(defaults.method, Method::Put);
        assert_eq!(defaults.consumes, MimeType::Xml);
        assert_eq!(defaults.params, sample(json!({ "id": 9 })));
        assert_eq!(defaults.headers.request, sample(json!({ "X-Token": "t" })));
        assert_eq!(defaults.headers.response, sample(json!({ "ETag": "abc" })));
        assert_eq!(defaults.body, sample(json!({ "total": 10 })));
        assert_eq!(scheme.description, "replace an order");
        assert_eq!(scheme.url, "/orders");
    }

    #[test]
    fn case_snapshots_defaults_at_record_time() {
        let mut scheme = Scheme::new("/users");
        scheme.access(Access::Public).body(json!({ "v": 1 }));
        scheme.case(Status::OK, "first", |_| {});

        scheme.access(Access::Admin).body(json!({ "v": 2 }));
        scheme.case(Status::OK, "second", |_| {});

        let cases = scheme.cases();
        assert_eq!(cases[0].access, Access::Public);
        assert_eq!(cases[0].body, sample(json!({ "v": 1 })));
        assert_eq!(cases[1].access, Access::Admin);
        assert_eq!(cases[1].body, sample(json!({ "v": 2 })));
    }

    #[test]
    fn overrides_stay_inside_their_case() {
        let mut scheme = Scheme::new("/users");
        scheme.method(Method::Get).access(Access::Public);

        scheme.case(Status::OK, "ok", |case| {
            case.method(Method::Head).access(Access::Admin).description("probe");
        });
        scheme.case(Status::NOT_FOUND, "missing", |_| {});

        assert_eq!(scheme.defaults().method, Method::Get);
        assert_eq!(scheme.defaults().access, Access::Public);
        assert_eq!(scheme.description, "");

        let missing = scheme.case_by_status(Status::NOT_FOUND).unwrap();
        assert_eq!(missing.method, Method::Get);
        assert_eq!(missing.access, Access::Public);
        assert_eq!(missing.description, "");
    }

    #[test]
    fn case_by_status_returns_first_match() {
        let scheme = Scheme::new("/users");
        scheme.case(Status::OK, "a", |_| {});
        scheme.case(Status::OK, "b", |_| {});

        assert_eq!(scheme.case_by_status(Status::OK).unwrap().name, "a");
        assert!(scheme.case_by_status(Status::CONFLICT).is_none());
    }

    #[test]
    fn draft_is_not_recorded_until_committed() {
        let scheme = Scheme::new("/users");
        let case = scheme.draft(Status::OK, "ok");
        assert_eq!(scheme.case_count(), 0);

        scheme.commit(case.clone());
        assert_eq!(scheme.cases(), vec![case]);
    }

    #[test]
    fn nested_recording_does_not_deadlock() {
        let scheme = Scheme::new("/users");
        scheme.case(Status::OK, "outer", |_| {
            scheme.case(Status::CREATED, "inner", |_| {});
        });

        let names: Vec<_> = scheme.cases().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["inner", "outer"]);
    }

    #[test]
    fn concurrent_recording_keeps_every_case() {
        let mut scheme = Scheme::new("/users");
        scheme.access(Access::Protected);

        thread::scope(|s| {
            for worker in 0..4u16 {
                let scheme = &scheme;
                s.spawn(move || {
                    for i in 0..25u16 {
                        scheme.case(Status(200 + worker), format!("w{worker}-{i}"), |case| {
                            case.body(json!({ "worker": worker, "i": i }));
                        });
                    }
                });
            }
        });

        let cases = scheme.cases();
        assert_eq!(cases.len(), 100);
        assert!(cases.iter().all(|c| c.access == Access::Protected));

        // per-thread order survives interleaving
        for worker in 0..4u16 {
            let names: Vec<_> = cases
                .iter()
                .filter(|c| c.status == Status(200 + worker))
                .map(|c| c.name.clone())
                .collect();
            let expected: Vec<_> = (0..25).map(|i| format!("w{worker}-{i}")).collect();
            assert_eq!(names, expected);
        }
    }

    #[test]
    #[traced_test]
    fn commit_emits_debug_event() {
        let scheme = Scheme::new("/users");
        scheme.case(Status::NOT_FOUND, "missing", |_| {});
        assert!(logs_contain("recorded case"));
        assert!(logs_contain("missing"));
    }
}
