use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_check_complete_translations() -> Result<()> {
    let test = CliTest::with_template()?;
    let de = r#"{"code": "de_DE", "translations": {"hex.builtin.farewell": "Tschüss", "hex.builtin.greeting": "Hallo"}}"#;
    test.write_file("lang/de_DE.json", de)?;

    let output = test.mode_command("check", &[]).output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Using langtool in check mode"));
    assert!(out.contains("Processing file 'de_DE.json'"));
    assert!(out.contains("Checked 1 translation file - no missing translations"));
    assert_eq!(test.read_file("lang/de_DE.json")?, de);
    Ok(())
}

#[test]
fn test_check_missing_key_exits_with_two() -> Result<()> {
    let test = CliTest::with_template()?;
    let de = r#"{"code": "de_DE", "translations": {"hex.builtin.greeting": "Hallo"}}"#;
    test.write_file("lang/de_DE.json", de)?;

    let output = test.mode_command("check", &[]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains(
        "error: Translation de_DE is missing translation for key 'hex.builtin.farewell'"
    ));
    assert_eq!(test.read_file("lang/de_DE.json")?, de);
    Ok(())
}

#[test]
fn test_check_aborts_whole_batch() -> Result<()> {
    let test = CliTest::with_template()?;
    test.write_file(
        "lang/de_DE.json",
        r#"{"code": "de_DE", "translations": {}}"#,
    )?;
    test.write_file(
        "lang/fr_FR.json",
        r#"{"code": "fr_FR", "translations": {}}"#,
    )?;

    let output = test.mode_command("check", &[]).output()?;

    assert_eq!(output.status.code(), Some(2));
    let out = stdout(&output);
    assert!(
        out.contains("Translation de_DE is missing translation for key 'hex.builtin.greeting'")
    );
    assert!(!out.contains("fr_FR"));
    Ok(())
}

#[test]
fn test_check_unused_key_is_only_a_warning() -> Result<()> {
    let test = CliTest::with_template()?;
    let de = r#"{"code": "de_DE", "translations": {"hex.builtin.farewell": "Tschüss", "hex.builtin.greeting": "Hallo", "hex.builtin.old": "Alt"}}"#;
    test.write_file("lang/de_DE.json", de)?;

    let output = test.mode_command("check", &[]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains(
        "warning: Translation de_DE contains unused key 'hex.builtin.old' with value 'Alt'"
    ));
    assert_eq!(test.read_file("lang/de_DE.json")?, de);
    Ok(())
}

#[test]
fn test_check_language_filter() -> Result<()> {
    let test = CliTest::with_template()?;
    test.write_file(
        "lang/de_DE.json",
        r#"{"code": "de_DE", "translations": {}}"#,
    )?;
    test.write_file(
        "lang/fr_FR.json",
        r#"{"code": "fr_FR", "translations": {"hex.builtin.farewell": "Au revoir", "hex.builtin.greeting": "Bonjour"}}"#,
    )?;

    let output = test.mode_command("check", &["fr_FR"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Processing file 'fr_FR.json'"));
    assert!(!out.contains("de_DE.json"));
    Ok(())
}

#[test]
fn test_check_malformed_file_is_fatal() -> Result<()> {
    let test = CliTest::with_template()?;
    test.write_file("lang/de_DE.json", r#"{"code": "de_DE", "translations": "#)?;

    let output = test.mode_command("check", &[]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(crate::stderr(&output).contains("Failed to parse language file"));
    Ok(())
}
