//! Protected application shell gating all authenticated routes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::components::spinner::Spinner;
use crate::state::session::SessionStore;

/// Three-state gate in front of the authenticated subtree.
///
/// Restores the session from durable storage once on mount; until that
/// settles only a spinner renders. Unauthenticated visitors are
/// redirected to `/signin` (replacing the history entry); authenticated
/// ones get the sidebar shell around the routed page.
#[component]
pub fn ProtectedLayout() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = session.state();
    let navigate = use_navigate();

    // Runs once: the restore reads nothing reactive.
    Effect::new(move || session.initialize());

    // Replace-redirect once the restore settles unauthenticated.
    Effect::new(move || {
        let s = state.get();
        if !s.is_loading && !s.is_authenticated {
            navigate(
                "/signin",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show
            when=move || {
                let s = state.get();
                !s.is_loading && s.is_authenticated
            }
            fallback=|| view! { <Spinner/> }
        >
            <div class="layout">
                <Sidebar/>
                <main class="layout__content">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
