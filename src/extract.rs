use crate::types::Failure;
use serde_json::Value;

const UNKNOWN_FILE: &str = "unknown";
const NO_MESSAGE: &str = "No error message";

/// Child sequence under `key`. Missing keys, non-object parents and
/// non-array values all read as empty.
fn items<'a>(parent: &'a Value, key: &str) -> &'a [Value] {
    parent
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// String field under `key`; anything else reads as absent.
fn text<'a>(parent: &'a Value, key: &str) -> Option<&'a str> {
    parent.get(key).and_then(Value::as_str)
}

/// Walk suites → specs → tests → results in document order and collect one
/// `Failure` per result whose status is `"failed"`. No sorting, no
/// deduplication; a retried spec contributes one entry per failed run.
pub fn extract_failures(report: &Value) -> Vec<Failure> {
    let mut failures = Vec::new();
    for suite in items(report, "suites") {
        let file = text(suite, "file").unwrap_or(UNKNOWN_FILE);
        for spec in items(suite, "specs") {
            let title = text(spec, "title");
            for test in items(spec, "tests") {
                for result in items(test, "results") {
                    if text(result, "status") != Some("failed") {
                        continue;
                    }
                    let error = result
                        .get("error")
                        .and_then(|e| e.get("message"))
                        .and_then(Value::as_str)
                        .unwrap_or(NO_MESSAGE);
                    failures.push(Failure {
                        file: file.to_string(),
                        title: title.map(str::to_owned),
                        error: error.to_string(),
                    });
                }
            }
        }
    }
    failures
}
