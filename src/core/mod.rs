//! Core sync engine.
//!
//! ## Pipeline
//!
//! 1. **Scan**: expand source patterns into files (`scan`)
//! 2. **Extract**: collect translation keys from each file (`extract`)
//! 3. **Target**: classify keys and compute defaults into a `TargetKeySet`
//!    (`classify`, `defaults`, `target`)
//! 4. **Reconcile**: per locale file, merge targets into the flattened
//!    document and rebuild it (`flat`, `reconcile`)
//! 5. **Store**: load and write locale files (`store`)
//!
//! `sync` drives the steps and returns structured reports. Printing is left
//! to the caller, which can follow along through `SyncProgress`.

pub mod classify;
pub mod defaults;
pub mod extract;
pub mod flat;
pub mod key_path;
pub mod reconcile;
pub mod scan;
pub mod store;
pub mod sync;
pub mod target;

pub use classify::{Namespace, Partition, PrefixRule, partition};
pub use defaults::DefaultResolver;
pub use extract::{KeyExtractor, PatternExtractor, extract_keys};
pub use flat::{
    Container, FlatMap, NestedKeySet, deep_merge, flatten, nested_keys_of, restore_shape,
    unflatten,
};
pub use key_path::KeyPath;
pub use reconcile::{Reconciled, Reconciler};
pub use scan::{ScanResult, scan_sources};
pub use sync::{FileReport, SyncOptions, SyncPlan, SyncProgress, SyncReport, sync, sync_locale};
pub use target::{TargetEntry, TargetKeySet};
