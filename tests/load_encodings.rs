use anyhow::Result;
use e2e_triage::load::load;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str =
    r#"{"suites":[{"file":"a.spec.ts","specs":[{"title":"t1","tests":[]}]}]}"#;

fn utf16le(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
}

fn utf16be(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(|u| u.to_be_bytes()).collect()
}

fn write_and_load(bytes: &[u8]) -> Result<Option<Value>> {
    let dir = tempdir()?;
    let path = dir.path().join("test-results.json");
    fs::write(&path, bytes)?;
    Ok(load(&path))
}

#[test]
fn plain_utf8_matches_direct_parse() -> Result<()> {
    let expected: Value = serde_json::from_str(SAMPLE)?;
    assert_eq!(write_and_load(SAMPLE.as_bytes())?, Some(expected));
    Ok(())
}

#[test]
fn utf8_bom_is_stripped() -> Result<()> {
    let expected: Value = serde_json::from_str(SAMPLE)?;
    let with_bom = format!("\u{feff}{SAMPLE}");
    assert_eq!(write_and_load(with_bom.as_bytes())?, Some(expected));
    Ok(())
}

#[test]
fn surrounding_whitespace_is_tolerated() -> Result<()> {
    let expected: Value = serde_json::from_str(SAMPLE)?;
    let padded = format!("\n  {SAMPLE}\n\n");
    assert_eq!(write_and_load(padded.as_bytes())?, Some(expected));
    Ok(())
}

#[test]
fn utf16_little_endian_with_bom() -> Result<()> {
    let expected: Value = serde_json::from_str(SAMPLE)?;
    let bytes = utf16le(&format!("\u{feff}{SAMPLE}"));
    assert_eq!(write_and_load(&bytes)?, Some(expected));
    Ok(())
}

#[test]
fn utf16_big_endian_with_bom() -> Result<()> {
    let expected: Value = serde_json::from_str(SAMPLE)?;
    let bytes = utf16be(&format!("\u{feff}{SAMPLE}"));
    assert_eq!(write_and_load(&bytes)?, Some(expected));
    Ok(())
}

#[test]
fn utf16_little_endian_without_bom() -> Result<()> {
    let expected: Value = serde_json::from_str(SAMPLE)?;
    assert_eq!(write_and_load(&utf16le(SAMPLE))?, Some(expected));
    Ok(())
}

#[test]
fn windows_1252_bytes_decode() -> Result<()> {
    // 0xE9 is é in windows-1252 and invalid as a lone UTF-8 byte
    let mut bytes = Vec::new();
    bytes.extend_from_slice(br#"{"suites":[{"file":"caf"#);
    bytes.push(0xE9);
    bytes.extend_from_slice(br#".spec.ts","specs":[]}]}"#);
    let value = write_and_load(&bytes)?.expect("windows-1252 content should load");
    assert_eq!(value["suites"][0]["file"], "caf\u{e9}.spec.ts");
    Ok(())
}

#[test]
fn garbage_under_every_encoding_is_none() -> Result<()> {
    assert_eq!(write_and_load(b"this is not json")?, None);
    Ok(())
}

#[test]
fn missing_file_is_none() -> Result<()> {
    let dir = tempdir()?;
    assert_eq!(load(&dir.path().join("test-results.json")), None);
    Ok(())
}
