use contracts::enums::ExpenseType;
use contracts::system::session::SessionUser;
use leptos::prelude::*;

use super::view_model::NewBillViewModel;
use crate::routes::use_navigation;
use crate::shared::store::use_store;

#[component]
pub fn NewBill(user: SessionUser) -> impl IntoView {
    let store = use_store();
    let navigation = use_navigation();
    let vm = NewBillViewModel::new(store, user, navigation);

    // Align the snapshot with the select's initial option.
    vm.form
        .update(|f| f.expense_type = ExpenseType::Transports.label().to_string());

    let vm_clone = vm.clone();

    let on_change_file = {
        let vm = vm_clone.clone();
        move |ev: leptos::ev::Event| {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let accepted = vm.change_file_command(file.name(), Some(file));
            if !accepted {
                // Refused file must not stay selected in the input.
                input.set_value("");
            }
        }
    };

    let on_submit = {
        let vm = vm_clone.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.submit_command();
        }
    };

    view! {
        <div class="layout" data-testid="new-bill-page">
            <div class="content-header">
                <h1 data-testid="content-title">"Envoyer une note de frais"</h1>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! {
                    <div class="error" data-testid="error-message">{e}</div>
                })
            }

            <form data-testid="form-new-bill" on:submit=on_submit>
                <div class="form-group">
                    <label for="expense-type">"Type de dépense"</label>
                    <select
                        id="expense-type"
                        class="form-control"
                        data-testid="expense-type"
                        required
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().expense_type
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.expense_type = event_target_value(&ev))
                        }
                    >
                        {ExpenseType::all()
                            .into_iter()
                            .map(|t| view! { <option value=t.label()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="expense-name">"Nom de la dépense"</label>
                    <input
                        type="text"
                        id="expense-name"
                        class="form-control"
                        data-testid="expense-name"
                        placeholder="Vol Paris Londres"
                        required
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="datepicker">"Date"</label>
                    <input
                        type="date"
                        id="datepicker"
                        class="form-control"
                        data-testid="datepicker"
                        required
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().date
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.date = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="amount">"Montant TTC"</label>
                    <input
                        type="number"
                        id="amount"
                        class="form-control"
                        data-testid="amount"
                        placeholder="348"
                        min="0"
                        required
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().amount
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.amount = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="vat">"TVA"</label>
                    <input
                        type="number"
                        id="vat"
                        class="form-control"
                        data-testid="vat"
                        placeholder="70"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().vat
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.vat = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="pct">"%"</label>
                    <input
                        type="number"
                        id="pct"
                        class="form-control"
                        data-testid="pct"
                        placeholder="20"
                        min="0"
                        max="100"
                        required
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().pct
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.pct = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="commentary">"Commentaire"</label>
                    <textarea
                        id="commentary"
                        class="form-control"
                        data-testid="commentary"
                        rows="3"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().commentary
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.commentary = event_target_value(&ev))
                        }
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="file">"Justificatif"</label>
                    <input
                        type="file"
                        id="file"
                        class="form-control"
                        data-testid="file"
                        required
                        on:change=on_change_file
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.receipt.get().map(|r| view! {
                            <span class="file-name" data-testid="file-name">{r.file_name}</span>
                        })
                    }
                </div>

                <button type="submit" class="btn btn-primary" data-testid="btn-send-bill">
                    "Envoyer"
                </button>
            </form>
        </div>
    }
}
