//! Repository Layer
//!
//! Key-value storage capabilities and the snapshot adapter that mirrors the
//! library's collections into them.

mod traits;
mod memory;
mod browser;
mod id_gen;
mod snapshot;

pub use traits::{IdGenerator, KeyValueStorage};
pub use memory::MemoryStorage;
pub use browser::BrowserStorage;
pub use id_gen::{SequentialIds, UuidGenerator};
pub use snapshot::{load_collection, save_collection};
