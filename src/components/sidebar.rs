//! Application shell navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionStore;

/// Sidebar with entity navigation and sign-out. Highlights the link for
/// the current route subtree.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let on_logout = move |_| {
        session.logout();
        navigate("/signin", NavigateOptions::default());
    };

    view! {
        <aside class="sidebar">
            <span class="sidebar__logo">"Catalog Admin"</span>
            <nav class="sidebar__nav">
                <a
                    class="sidebar__link"
                    class=("sidebar__link--active", move || {
                        pathname.get().starts_with("/products")
                    })
                    href="/products"
                >
                    "Products"
                </a>
                <a
                    class="sidebar__link"
                    class=("sidebar__link--active", move || {
                        pathname.get().starts_with("/attributes")
                    })
                    href="/attributes"
                >
                    "Attributes"
                </a>
            </nav>
            <button class="sidebar__logout" on:click=on_logout>
                "Sign out"
            </button>
        </aside>
    }
}
