pub mod sync;

pub use sync::{SyncReport, Syncer};
