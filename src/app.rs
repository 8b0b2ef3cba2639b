//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment, WildcardSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::protected_layout::ProtectedLayout;
use crate::config;
use crate::net::client::ApiClient;
use crate::pages::attribute_form::AttributeFormPage;
use crate::pages::attributes_list::AttributesListPage;
use crate::pages::product_form::ProductFormPage;
use crate::pages::products_list::ProductsListPage;
use crate::pages::signin::SigninPage;
use crate::pages::signup::SignupPage;
use crate::state::session::SessionStore;
use crate::util::browser;
use crate::util::storage::LocalStorage;

/// Root component: wires the session store and HTTP client into context
/// and declares the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new(Arc::new(LocalStorage));

    // 401 handling: drop the session and hard-redirect to signin. The
    // failed request still surfaces its error to the caller.
    let token_source = {
        let session = session.clone();
        Arc::new(move || session.token())
    };
    let on_unauthorized = {
        let session = session.clone();
        Arc::new(move || {
            session.logout();
            browser::redirect_to("/signin");
        })
    };
    let api = ApiClient::new(config::api_base_url(), token_source, on_unauthorized);

    provide_context(session);
    provide_context(api);

    view! {
        <Title text="Catalog Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("signin") view=SigninPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                    <Route path=StaticSegment("products") view=ProductsListPage/>
                    <Route
                        path=(StaticSegment("products"), StaticSegment("new"))
                        view=ProductFormPage
                    />
                    <Route
                        path=(StaticSegment("products"), ParamSegment("id"), StaticSegment("edit"))
                        view=ProductFormPage
                    />
                    <Route path=StaticSegment("attributes") view=AttributesListPage/>
                    <Route
                        path=(StaticSegment("attributes"), StaticSegment("new"))
                        view=AttributeFormPage
                    />
                    <Route
                        path=(
                            StaticSegment("attributes"),
                            ParamSegment("id"),
                            StaticSegment("edit"),
                        )
                        view=AttributeFormPage
                    />
                    <Route
                        path=WildcardSegment("any")
                        view=|| {
                            let options = NavigateOptions {
                                replace: true,
                                ..Default::default()
                            };
                            view! { <Redirect path="/products" options=options/> }
                        }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
