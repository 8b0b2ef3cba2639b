//! Sign-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::forms::{SigninErrors, SigninForm};
use crate::net::auth;
use crate::net::client::ApiClient;
use crate::state::session::SessionStore;

/// Username/password sign-in form. Field errors render under their
/// inputs; backend failures render as a root error above the submit
/// button. Successful sign-in lands on the product list.
#[component]
pub fn SigninPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(SigninErrors::default());
    let root_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SigninForm {
            username: username.get(),
            password: password.get(),
        };
        match form.validate() {
            Err(field_errors) => errors.set(field_errors),
            Ok(payload) => {
                errors.set(SigninErrors::default());
                root_error.set(None);
                submitting.set(true);
                let api = api.clone();
                let session = session.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match auth::handle_login(&api, &session, &payload).await {
                        Ok(_) => {
                            submitting.set(false);
                            navigate("/products", NavigateOptions::default());
                        }
                        Err(e) => {
                            root_error.set(Some(e.form_message()));
                            submitting.set(false);
                        }
                    }
                });
            }
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h1>"Sign in"</h1>
                <label class="field">
                    "Username"
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    {move || {
                        errors.get().username.map(|e| view! { <span class="field__error">{e}</span> })
                    }}
                </label>
                <label class="field">
                    "Password"
                    <input
                        class="field__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {move || {
                        errors.get().password.map(|e| view! { <span class="field__error">{e}</span> })
                    }}
                </label>
                {move || root_error.get().map(|e| view! { <span class="form-error">{e}</span> })}
                <button
                    class="btn btn--primary btn--full"
                    type="submit"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <a class="auth-card__switch" href="/signup">
                    "No account yet? Sign up"
                </a>
            </form>
        </div>
    }
}
