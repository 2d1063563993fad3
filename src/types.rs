use serde::Serialize;

/// One failed test execution, in document order of the source report.
/// A spec without a title serializes as `"title": null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub file: String,
    pub title: Option<String>,
    pub error: String,
}
