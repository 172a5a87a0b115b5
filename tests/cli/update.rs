use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stdout};

const PLACEHOLDER: &str = "***** MISSING TRANSLATION *****";

#[test]
fn test_update_adds_placeholders_and_removes_unused_keys() -> Result<()> {
    let test = CliTest::with_template()?;
    test.write_file(
        "lang/de_DE.json",
        r#"{"code": "de_DE", "translations": {"hex.builtin.greeting": "Hallo", "hex.builtin.old": "Alt"}}"#,
    )?;

    let output = test.mode_command("update", &[]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_translations("lang/de_DE.json")?,
        json!({
            "hex.builtin.farewell": PLACEHOLDER,
            "hex.builtin.greeting": "Hallo",
        })
    );
    let out = stdout(&output);
    assert!(out.contains("Removed unused key 'hex.builtin.old' from translation 'de_DE'"));
    assert!(out.contains("Processed 1 translation file: 1 key added, 1 key removed"));
    Ok(())
}

#[test]
fn test_update_writes_sorted_four_space_json() -> Result<()> {
    let test = CliTest::with_template()?;
    test.write_file(
        "lang/ja_JP.json",
        r#"{"translations": {"hex.builtin.greeting": "こんにちは"}, "code": "ja_JP", "name": "日本語"}"#,
    )?;

    let output = test.mode_command("update", &[]).output()?;
    assert_eq!(output.status.code(), Some(0));

    let expected = r#"{
    "code": "ja_JP",
    "name": "日本語",
    "translations": {
        "hex.builtin.farewell": "***** MISSING TRANSLATION *****",
        "hex.builtin.greeting": "こんにちは"
    }
}"#;
    assert_eq!(test.read_file("lang/ja_JP.json")?, expected);
    Ok(())
}

#[test]
fn test_update_is_idempotent() -> Result<()> {
    let test = CliTest::with_template()?;
    test.write_file(
        "lang/de_DE.json",
        r#"{"code": "de_DE", "translations": {"hex.builtin.old": "Alt"}}"#,
    )?;

    let first = test.mode_command("update", &[]).output()?;
    assert_eq!(first.status.code(), Some(0));
    let after_first = test.read_file("lang/de_DE.json")?;

    let second = test.mode_command("update", &[]).output()?;
    assert_eq!(second.status.code(), Some(0));
    assert_eq!(test.read_file("lang/de_DE.json")?, after_first);
    assert!(stdout(&second).contains("0 keys added, 0 keys removed"));
    Ok(())
}

#[test]
fn test_update_only_requested_language() -> Result<()> {
    let test = CliTest::with_template()?;
    let fr = r#"{"code": "fr_FR", "translations": {}}"#;
    test.write_file("lang/de_DE.json", r#"{"code": "de_DE", "translations": {}}"#)?;
    test.write_file("lang/fr_FR.json", fr)?;

    let output = test.mode_command("update", &["de_DE"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_translations("lang/de_DE.json")?,
        json!({
            "hex.builtin.farewell": PLACEHOLDER,
            "hex.builtin.greeting": PLACEHOLDER,
        })
    );
    assert_eq!(test.read_file("lang/fr_FR.json")?, fr);
    Ok(())
}

#[test]
fn test_update_with_empty_template() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lang/en_US.json", r#"{"code": "en_US", "translations": {}}"#)?;
    test.write_file(
        "lang/de_DE.json",
        r#"{"code": "de_DE", "translations": {"a": "x"}}"#,
    )?;

    let output = test.mode_command("update", &[]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_translations("lang/de_DE.json")?, json!({}));
    Ok(())
}

#[test]
fn test_update_placeholder_flag() -> Result<()> {
    let test = CliTest::with_template()?;
    test.write_file("lang/de_DE.json", r#"{"code": "de_DE", "translations": {}}"#)?;

    let output = test
        .mode_command("update", &["--placeholder", "TODO"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_translations("lang/de_DE.json")?,
        json!({
            "hex.builtin.farewell": "TODO",
            "hex.builtin.greeting": "TODO",
        })
    );
    Ok(())
}

#[test]
fn test_update_leaves_template_untouched() -> Result<()> {
    let test = CliTest::with_template()?;
    test.write_file("lang/de_DE.json", r#"{"code": "de_DE", "translations": {}}"#)?;

    let output = test.mode_command("update", &[]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("lang/en_US.json")?, crate::TEMPLATE);
    Ok(())
}
