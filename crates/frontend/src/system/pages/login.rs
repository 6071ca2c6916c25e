use contracts::system::session::SessionUser;
use leptos::prelude::*;

use crate::routes::{use_navigation, ROUTE_BILLS};
use crate::system::session::context;

/// Employee login page. Authentication proper lives on the backend; this
/// page only records the session identity the bill pages read.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let navigation = use_navigation();
    let set_session = context::use_session_setter();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get().trim().to_string();
        if email_val.is_empty() || password.get().is_empty() {
            set_error_message.set(Some("Email et mot de passe sont obligatoires".to_string()));
            return;
        }

        context::do_login(set_session, SessionUser::employee(email_val));
        navigation.navigate(ROUTE_BILLS);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Billed"</h1>
                <h2>"Employé"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form data-testid="form-employee" on:submit=on_submit>
                    <div class="form-group">
                        <label for="employee-email">"Votre email"</label>
                        <input
                            type="email"
                            id="employee-email"
                            data-testid="employee-email-input"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="employee-password">"Votre mot de passe"</label>
                        <input
                            type="password"
                            id="employee-password"
                            data-testid="employee-password-input"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <button type="submit" data-testid="employee-login-button" class="btn btn-primary">
                        "Se connecter"
                    </button>
                </form>
            </div>
        </div>
    }
}
