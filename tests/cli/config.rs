use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_config_file_supplies_options() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".locsyncrc.json",
        r#"{
            "sources": ["src/**/*.vue"],
            "localesDir": "lang",
            "keyPrefix": "i18n",
            "targets": ["en_US"]
        }"#,
    )?;
    test.write_file("src/components/Nav.vue", "<a>{{ $t('i18n.nav.home') }}</a>")?;

    let (output, stdout, _) = run(test.command())?;

    assert!(output.status.success());
    assert!(stdout.contains("Found: 1"));
    assert_eq!(
        test.read_file("lang/en_US.json")?,
        r#"{"nav":{"home":"nav.home"}}"#
    );
    Ok(())
}

#[test]
fn test_cli_arguments_override_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".locsyncrc.json",
        r#"{ "sources": ["nowhere"], "localesDir": "lang", "fill": "TODO" }"#,
    )?;
    test.write_file("src/App.vue", "{{ $t('title') }}")?;

    let (output, _, _) = run(test.sync_command(&["--fill", "TBD"]))?;

    assert!(output.status.success());
    assert_eq!(test.read_file("locales/en_US.json")?, r#"{"title":"TBD"}"#);
    assert!(!test.root().join("lang").exists());
    Ok(())
}

#[test]
fn test_explicit_config_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "conf/sync.json",
        r#"{ "sources": ["src"], "localesDir": "locales", "defaultLocale": "ja" }"#,
    )?;
    test.write_file("src/App.vue", "{{ $t('title') }}")?;

    let mut cmd = test.command();
    cmd.args(["--config", "conf/sync.json"]);
    let (output, _, _) = run(cmd)?;

    assert!(output.status.success());
    assert_eq!(test.read_file("locales/ja.json")?, r#"{"title":"title"}"#);
    Ok(())
}

#[test]
fn test_invalid_config_file_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locsyncrc.json", "{ broken")?;

    let (output, _, stderr) = run(test.sync_command(&[]))?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.starts_with("Error: Failed to parse config file"));
    Ok(())
}
