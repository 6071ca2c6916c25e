use contracts::system::session::SessionUser;
use web_sys::window;

const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the session identity to localStorage
pub fn save_user(user: &SessionUser) {
    let Ok(json) = serde_json::to_string(user) else {
        return;
    };
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(USER_KEY, &json);
    }
}

/// Get the session identity from localStorage
pub fn get_user() -> Option<SessionUser> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Clear the session identity
pub fn clear_user() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(USER_KEY);
    }
}
