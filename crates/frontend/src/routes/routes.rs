use leptos::prelude::*;

use crate::domain::a001_bill::ui::list::BillsList;
use crate::domain::a001_bill::ui::new_bill::NewBill;
use crate::system::pages::login::LoginPage;
use crate::system::session::use_session;

pub const ROUTE_LOGIN: &str = "/";
pub const ROUTE_BILLS: &str = "#employee/bills";
pub const ROUTE_NEW_BILL: &str = "#employee/bill/new";

/// Navigation handle: swaps the rendered view for the given pathname.
/// Provided once at app root; pages call `navigate` after a successful
/// action, never during one.
#[derive(Clone, Copy)]
pub struct Navigation {
    pathname: RwSignal<String>,
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            pathname: RwSignal::new(ROUTE_BILLS.to_string()),
        }
    }

    pub fn pathname(&self) -> String {
        self.pathname.get()
    }

    pub fn navigate(&self, pathname: &str) {
        self.pathname.set(pathname.to_string());
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_navigation() -> Navigation {
    use_context::<Navigation>().expect("Navigation not found in component tree")
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();
    let navigation = use_navigation();

    // Router-less switch: no session shows the login page, otherwise the
    // pathname signal picks the employee view.
    view! {
        {move || match session.get() {
            None => view! { <LoginPage /> }.into_any(),
            Some(user) => match navigation.pathname().as_str() {
                ROUTE_NEW_BILL => view! { <NewBill user=user /> }.into_any(),
                _ => view! { <BillsList /> }.into_any(),
            },
        }}
    }
}
