pub mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::{use_navigation, ROUTE_LOGIN, ROUTE_NEW_BILL};
use crate::shared::store::use_store;
use crate::system::session::context::{do_logout, use_session_setter};

use state::BillsListState;

#[component]
pub fn BillsList() -> impl IntoView {
    let (state, set_state) = signal(BillsListState::default());
    let store = use_store();
    let navigation = use_navigation();
    let set_session = use_session_setter();

    // One fetch at mount; errors land in the banner, never silently dropped.
    spawn_local(async move {
        let result = store.list_bills().await;
        if let Err(e) = &result {
            log::error!("bills fetch failed: {e}");
        }
        set_state.update(|s| s.apply_fetch_result(result));
    });

    let handle_new_bill = move |_| navigation.navigate(ROUTE_NEW_BILL);
    let handle_logout = move |_| {
        do_logout(set_session);
        navigation.navigate(ROUTE_LOGIN);
    };

    view! {
        <div class="layout" data-testid="bills-page">
            <div class="content-header">
                <h1 data-testid="content-title">"Mes notes de frais"</h1>
                <button
                    type="button"
                    class="btn btn-primary"
                    data-testid="btn-new-bill"
                    on:click=handle_new_bill
                >
                    "Nouvelle note de frais"
                </button>
                <button type="button" class="btn" data-testid="layout-disconnect" on:click=handle_logout>
                    "Se déconnecter"
                </button>
            </div>

            {move || state.get().error.map(|e| view! {
                <div class="error" data-testid="error-message">{e}</div>
            })}

            <table class="table">
                <thead>
                    <tr>
                        <th>"Type"</th>
                        <th>"Nom"</th>
                        <th>"Date"</th>
                        <th>"Montant"</th>
                        <th>"Statut"</th>
                        <th>"Justificatif"</th>
                    </tr>
                </thead>
                <tbody data-testid="tbody">
                    <For
                        each=move || state.get().rows
                        key=|row| row.id.clone()
                        children=move |row| {
                            view! {
                                <tr>
                                    <td>{row.expense_type}</td>
                                    <td>{row.name}</td>
                                    <td>{row.date}</td>
                                    <td>{row.amount}</td>
                                    <td>{row.status}</td>
                                    <td>
                                        {row.file_url.map(|url| view! {
                                            <a href=url target="_blank" data-testid="icon-eye">"Voir"</a>
                                        })}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
