use std::sync::Arc;

use leptos::prelude::*;

use crate::routes::{AppRoutes, Navigation};
use crate::shared::store::{HttpStore, StoreContext};
use crate::system::session::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    // Navigation handle for the whole app.
    provide_context(Navigation::new());

    // The store client is injected here once; pages resolve it from context,
    // so tests can substitute the in-memory store for the HTTP one.
    provide_context(StoreContext(Arc::new(HttpStore::new())));

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
