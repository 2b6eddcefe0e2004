//! CLI argument definitions using clap.
//!
//! Every option except `--config` and `--verbose` can also be set in
//! `.locsyncrc.json`; command-line values take precedence.

use std::path::PathBuf;

use clap::Parser;

const EXAMPLES: &str = r#"Examples:
  locsync -v "./src/**/*.vue" -v "./src/**/*.js" -l "./src/locales/"
      Extract all missing translations to json locale files.

  locsync -v "./src/**/*.vue" -l "./src/locales/" --key "i18n"
      Key-based translations start with "i18n", e.g. $t("i18n.some.dot.string").
      Other translations are stored as plain strings and their dots are not
      turned into nested objects.

  locsync -v "./src/**/*.vue" -l "./src/locales/" --def-locale "fr_FR"
      If the locale directory is empty, create it and save translations to fr_FR.json.

  locsync -v "./src/**/*.vue" -l "./src/locales/" --fill ""
      Keep new translations empty.

  locsync -v "./src/**/*.vue" -l "./src/locales/" --target "en_US" "ru_RU"
      Save translations only to en_US.json and ru_RU.json. Missing files are created."#;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
pub struct Arguments {
    /// Source files to scan: glob patterns or directories, e.g. "./src/**/*.vue"
    #[arg(short = 'v', long = "vue", value_name = "PATTERN", num_args = 1..)]
    pub sources: Vec<String>,

    /// Directory holding the locale json files, e.g. "./src/locales/"
    #[arg(short = 'l', long = "locales", value_name = "DIR")]
    pub locales_dir: Option<PathBuf>,

    /// Prefix for key-based translations (omit to store every key as a plain string)
    #[arg(long = "key", value_name = "PREFIX")]
    pub key_prefix: Option<String>,

    /// Locale file to create when no locale is found [default: en_US]
    #[arg(long = "def-locale", value_name = "NAME")]
    pub default_locale: Option<String>,

    /// Keep old unused keys in locales
    #[arg(long)]
    pub keep_unused: bool,

    /// Fill new translations with this string instead of their keys
    #[arg(long, value_name = "STRING")]
    pub fill: Option<String>,

    /// Locales to process (default: every locale file found)
    #[arg(short = 't', long = "target", value_name = "LOCALE", num_args = 1..)]
    pub targets: Vec<String>,

    /// Config file to use instead of looking up .locsyncrc.json
    #[arg(long, value_name = "PATH", env = "LOCSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// List added keys and scanning warnings
    #[arg(long)]
    pub verbose: bool,
}
