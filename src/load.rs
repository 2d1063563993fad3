use serde_json::Value;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Decode candidates in priority order. The first candidate whose decode
/// and JSON parse both succeed wins, even when a later one would also
/// yield valid (but different) JSON.
const CANDIDATES: [Candidate; 5] = [
    Candidate::Utf8,
    Candidate::Utf16,
    Candidate::Utf16Le,
    Candidate::Windows1252,
    Candidate::Latin1,
];

#[derive(Debug, Clone, Copy)]
enum Candidate {
    Utf8,
    // BOM-sniffed, little-endian when no BOM is present
    Utf16,
    Utf16Le,
    Windows1252,
    Latin1,
}

impl Candidate {
    fn name(self) -> &'static str {
        match self {
            Candidate::Utf8 => "utf-8",
            Candidate::Utf16 => "utf-16",
            Candidate::Utf16Le => "utf-16-le",
            Candidate::Windows1252 => "windows-1252",
            Candidate::Latin1 => "iso-8859-1",
        }
    }

    /// Strict decode: malformed input under this encoding yields `None`
    /// instead of replacement characters, so the next candidate gets a try.
    fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Candidate::Utf8 => encoding_rs::UTF_8
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(Cow::into_owned),
            Candidate::Utf16 => {
                let encoding = if bytes.starts_with(&[0xFE, 0xFF]) {
                    encoding_rs::UTF_16BE
                } else {
                    encoding_rs::UTF_16LE
                };
                encoding
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .map(Cow::into_owned)
            }
            Candidate::Utf16Le => encoding_rs::UTF_16LE
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(Cow::into_owned),
            Candidate::Windows1252 => encoding_rs::WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(Cow::into_owned),
            // encoding_rs aliases "latin1" to windows-1252, so the true
            // byte-to-U+00XX mapping lives here. Infallible.
            Candidate::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

/// Read `path` and parse it as JSON, trying each supported encoding in
/// priority order. Each attempt opens and reads the file independently.
/// Returns `None` when no candidate yields valid JSON; never errors.
pub fn load(path: &Path) -> Option<Value> {
    for candidate in CANDIDATES {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!("could not read {}: {err}", path.display());
                continue;
            }
        };
        let Some(text) = candidate.decode(&bytes) else {
            debug!("{} does not decode as {}", path.display(), candidate.name());
            continue;
        };
        let text = text.trim();
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        match serde_json::from_str(text) {
            Ok(value) => {
                debug!("decoded {} as {}", path.display(), candidate.name());
                return Some(value);
            }
            Err(err) => {
                debug!("{} content is not JSON: {err}", candidate.name());
            }
        }
    }
    None
}
