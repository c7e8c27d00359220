//! Ten-pin bowling scoring (workspace facade crate).
//!
//! Re-exports the workspace crates under one name; the implementation lives
//! in dedicated crates under `crates/`.

pub use tenpin_core as core;
pub use tenpin_record as record;
pub use tenpin_types as types;
