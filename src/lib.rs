//! locsync - sync vue-i18n translation keys into locale JSON files
//!
//! locsync scans Vue/JS sources for translation keys (`$t('...')`, `v-t`,
//! `<i18n path>`), then adds missing keys to every locale JSON file while
//! keeping existing translations, and optionally drops keys that are no
//! longer used.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, console report)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, reconciliation and locale file storage

pub mod cli;
pub mod config;
pub mod core;
