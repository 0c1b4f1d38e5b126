//! Prompt Library App
//!
//! Opens the library from local storage and shares it with the view tree.

use leptos::prelude::*;

use prompt_library::context::{provide_library, LibraryContext};
use prompt_library::repository::{BrowserStorage, UuidGenerator};
use prompt_library::{LibraryConfig, PromptLibrary};

#[component]
pub fn App() -> impl IntoView {
    let storage = match BrowserStorage::local() {
        Ok(storage) => storage,
        Err(e) => {
            log::error!("Local storage unavailable: {}", e);
            return view! { <p class="storage-error">{e.to_string()}</p> }.into_any();
        }
    };

    let library = PromptLibrary::open(storage, UuidGenerator, LibraryConfig::default());
    let ctx = provide_library(library);

    on_cleanup(move || flush(ctx));

    view! {
        <main class="prompt-library">
            <h1>"Prompt Library"</h1>
            <p class="library-count">
                {move || ctx.with(|lib| format!("{} prompts, {} folders", lib.prompts().len(), lib.folders().len()))}
            </p>
        </main>
    }
    .into_any()
}

fn flush(ctx: LibraryContext) {
    if let Some(Err(e)) = ctx.update(|lib| lib.flush()) {
        log::error!("Flush on teardown failed: {}", e);
    }
}
