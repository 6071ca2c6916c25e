use contracts::system::session::SessionUser;
use leptos::prelude::*;

use super::storage;

/// Session context provider component. Restores the identity persisted by the
/// login flow; bill pages read it, only the login/logout helpers write it.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(storage::get_user());

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the session identity
pub fn use_session() -> ReadSignal<Option<SessionUser>> {
    use_context::<ReadSignal<Option<SessionUser>>>()
        .expect("SessionProvider not found in component tree")
}

/// Hook to access the session setter. Resolve it at component setup, not
/// inside event handlers.
pub fn use_session_setter() -> WriteSignal<Option<SessionUser>> {
    use_context::<WriteSignal<Option<SessionUser>>>()
        .expect("SessionProvider not found in component tree")
}

/// Helper: record the identity and open the session
pub fn do_login(set_session: WriteSignal<Option<SessionUser>>, user: SessionUser) {
    storage::save_user(&user);
    set_session.set(Some(user));
}

/// Helper: close the session
pub fn do_logout(set_session: WriteSignal<Option<SessionUser>>) {
    storage::clear_user();
    set_session.set(None);
}
