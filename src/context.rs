//! Application Context
//!
//! The prompt library is built once at startup and shared through the Leptos
//! Context API. Components read it through `with` and mutate it through
//! `update`, which also bumps a version signal so dependent views re-render.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::library::PromptLibrary;
use crate::repository::{BrowserStorage, UuidGenerator};

pub type BrowserLibrary = PromptLibrary<BrowserStorage, UuidGenerator>;

#[derive(Clone, Copy)]
pub struct LibraryContext {
    library: StoredValue<BrowserLibrary, LocalStorage>,
    /// Incremented after every mutation - read
    pub version: ReadSignal<u32>,
    /// Incremented after every mutation - write
    set_version: WriteSignal<u32>,
}

impl LibraryContext {
    pub fn new(library: BrowserLibrary) -> Self {
        let (version, set_version) = signal(0u32);
        Self {
            library: StoredValue::new_local(library),
            version,
            set_version,
        }
    }

    /// Read the library, subscribing the caller to changes
    pub fn with<R>(&self, f: impl FnOnce(&BrowserLibrary) -> R) -> R {
        self.version.track();
        self.library.with_value(f)
    }

    /// Mutate the library and notify readers. `None` once the owner is disposed.
    pub fn update<R>(&self, f: impl FnOnce(&mut BrowserLibrary) -> R) -> Option<R> {
        let result = self.library.try_update_value(f);
        if result.is_some() {
            self.set_version.update(|v| *v += 1);
        }
        result
    }
}

/// Build the context and provide it to all children
pub fn provide_library(library: BrowserLibrary) -> LibraryContext {
    let ctx = LibraryContext::new(library);
    provide_context(ctx);
    ctx
}

/// Get the library context
pub fn use_library() -> LibraryContext {
    expect_context::<LibraryContext>()
}
