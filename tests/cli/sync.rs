use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const APP_VUE: &str = r#"<template>
  <div>
    <h1>{{ $t('hello') }}</h1>
    <p>{{ $t('i18n.foo.bar') }}</p>
  </div>
</template>
"#;

fn setup_app(test: &CliTest) -> Result<()> {
    test.write_file("src/App.vue", APP_VUE)
}

#[test]
fn test_creates_default_locale_with_prefixed_keys() -> Result<()> {
    let test = CliTest::new()?;
    setup_app(&test)?;

    let (output, stdout, _) = run(test.sync_command(&["--key", "i18n"]))?;

    assert!(output.status.success());
    assert_eq!(
        stdout,
        "\nFound: 2\n\nLocale file: en_US.json\n  Added: 2\n  Total: 2\n"
    );
    assert_snapshot!(test.read_file("locales/en_US.json")?, @r#"{"hello":"hello","foo":{"bar":"foo.bar"}}"#);
    Ok(())
}

#[test]
fn test_preserves_translations_and_drops_unused() -> Result<()> {
    let test = CliTest::new()?;
    setup_app(&test)?;
    test.write_file("locales/fr_FR.json", r#"{"hello":"Bonjour","unused":"x"}"#)?;

    let (output, stdout, _) = run(test.sync_command(&["--key", "i18n"]))?;

    assert!(output.status.success());
    assert!(stdout.contains("Locale file: fr_FR.json\n  Added: 1\n  Total: 2\n"));
    assert_snapshot!(test.read_file("locales/fr_FR.json")?, @r#"{"hello":"Bonjour","foo":{"bar":"foo.bar"}}"#);
    // No default locale is created when a locale already exists.
    assert!(!test.root().join("locales/en_US.json").exists());
    Ok(())
}

#[test]
fn test_keep_unused_keeps_nested_entries() -> Result<()> {
    let test = CliTest::new()?;
    setup_app(&test)?;
    test.write_file(
        "locales/en_US.json",
        r#"{"old":{"title":"Old title","items":["a","b"]},"foo":{"baz":"Baz"}}"#,
    )?;

    let (output, stdout, _) = run(test.sync_command(&["--key", "i18n", "--keep-unused"]))?;

    assert!(output.status.success());
    assert!(stdout.contains("  Added: 2\n  Total: 6\n"));
    assert_snapshot!(test.read_file("locales/en_US.json")?, @r#"{"old":{"title":"Old title","items":["a","b"]},"foo":{"baz":"Baz","bar":"foo.bar"},"hello":"hello"}"#);
    Ok(())
}

#[test]
fn test_targets_create_missing_files() -> Result<()> {
    let test = CliTest::new()?;
    setup_app(&test)?;

    let (output, stdout, _) = run(test.sync_command(&["--key", "i18n", "--target", "en_US", "ru_RU"]))?;

    assert!(output.status.success());
    assert!(stdout.contains("Locale file: en_US.json"));
    assert!(stdout.contains("Locale file: ru_RU.json"));
    for file in ["locales/en_US.json", "locales/ru_RU.json"] {
        assert_eq!(
            test.read_file(file)?,
            r#"{"hello":"hello","foo":{"bar":"foo.bar"}}"#
        );
    }
    Ok(())
}

#[test]
fn test_targets_leave_other_locales_alone() -> Result<()> {
    let test = CliTest::new()?;
    setup_app(&test)?;
    test.write_file("locales/de_DE.json", r#"{"x":"y"}"#)?;

    let (output, stdout, _) = run(test.sync_command(&["-t", "ja"]))?;

    assert!(output.status.success());
    assert!(!stdout.contains("de_DE.json"));
    assert_eq!(test.read_file("locales/de_DE.json")?, r#"{"x":"y"}"#);
    assert_eq!(
        test.read_file("locales/ja.json")?,
        r#"{"hello":"hello","i18n.foo.bar":"i18n.foo.bar"}"#
    );
    Ok(())
}

#[test]
fn test_second_run_is_byte_identical() -> Result<()> {
    let test = CliTest::new()?;
    setup_app(&test)?;
    test.write_file("locales/en_US.json", r#"{"hello":"Hi","stale":{"a":"b"}}"#)?;

    let (first, _, _) = run(test.sync_command(&["--key", "i18n", "--keep-unused"]))?;
    assert!(first.status.success());
    let after_first = test.read_file("locales/en_US.json")?;

    let (second, stdout, _) = run(test.sync_command(&["--key", "i18n", "--keep-unused"]))?;
    assert!(second.status.success());

    assert_eq!(test.read_file("locales/en_US.json")?, after_first);
    assert!(stdout.contains("  Added: 0\n  Total: 3\n"));
    Ok(())
}

#[test]
fn test_plain_key_inside_prefixed_branch_settles() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/Menu.vue", "{{ $t('menu') }} {{ $t('i18n.menu.home') }}")?;

    let (output, stdout, _) = run(test.sync_command(&["--key", "i18n"]))?;
    assert!(output.status.success());
    assert_eq!(
        stdout,
        "\nFound: 1\n\nLocale file: en_US.json\n  Added: 1\n  Total: 1\n"
    );
    assert_snapshot!(test.read_file("locales/en_US.json")?, @r#"{"menu":{"home":"menu.home"}}"#);

    let (output, stdout, _) = run(test.sync_command(&["--key", "i18n"]))?;
    assert!(output.status.success());
    assert!(stdout.contains("  Added: 0\n  Total: 1\n"));
    Ok(())
}

#[test]
fn test_fill_and_default_locale() -> Result<()> {
    let test = CliTest::new()?;
    setup_app(&test)?;

    let (output, _, _) = run(test.sync_command(&[
        "--key",
        "i18n",
        "--fill",
        "",
        "--def-locale",
        "fr_FR",
    ]))?;

    assert!(output.status.success());
    assert_snapshot!(test.read_file("locales/fr_FR.json")?, @r#"{"hello":"","foo":{"bar":""}}"#);
    Ok(())
}

#[test]
fn test_plain_keys_keep_their_dots() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/main.js",
        r#"export const title = i18n.t("Hello. World"); const m = i18n.t('menu.home');"#,
    )?;

    let (output, _, _) = run(test.sync_command(&[]))?;

    assert!(output.status.success());
    assert_snapshot!(test.read_file("locales/en_US.json")?, @r#"{"Hello. World":"Hello. World","menu.home":"menu.home"}"#);
    Ok(())
}

#[test]
fn test_verbose_lists_added_keys() -> Result<()> {
    let test = CliTest::new()?;
    setup_app(&test)?;

    let (output, stdout, _) = run(test.sync_command(&["--key", "i18n", "--verbose"]))?;

    assert!(output.status.success());
    assert!(stdout.contains("Found: 2 (in 1 source file)"));
    assert!(stdout.contains("    + hello\n    + i18n.foo.bar\n"));
    Ok(())
}

#[test]
fn test_invalid_locale_json_fails() -> Result<()> {
    let test = CliTest::new()?;
    setup_app(&test)?;
    test.write_file("locales/en_US.json", "{ not json")?;

    let (output, _, stderr) = run(test.sync_command(&[]))?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.starts_with("Error: Failed to parse JSON file"));
    assert_eq!(test.read_file("locales/en_US.json")?, "{ not json");
    Ok(())
}

#[test]
fn test_non_object_locale_is_replaced_with_warning() -> Result<()> {
    let test = CliTest::new()?;
    setup_app(&test)?;
    test.write_file("locales/en_US.json", r#"["legacy"]"#)?;

    let (output, _, stderr) = run(test.sync_command(&[]))?;

    assert!(output.status.success());
    assert!(stderr.contains("does not contain a JSON object"));
    assert_eq!(
        test.read_file("locales/en_US.json")?,
        r#"{"hello":"hello","i18n.foo.bar":"i18n.foo.bar"}"#
    );
    Ok(())
}

#[test]
fn test_missing_source_option_fails() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["-l", "locales"]);
    let (output, _, stderr) = run(cmd)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.starts_with("Error: Missing source pattern"));
    assert!(!test.root().join("locales").exists());
    Ok(())
}
