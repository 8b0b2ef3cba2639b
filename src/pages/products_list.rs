//! Product list page: searchable, sortable table with a delete flow.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_modal::ConfirmModal;
use crate::components::spinner::Spinner;
use crate::net::client::ApiClient;
use crate::net::products;
use crate::net::types::{Product, ProductFilters, ProductSortField, SortOrder};

/// Product listing. Every filter change re-fetches the page; fetch
/// failures render as a banner instead of an empty table. Deleting asks
/// for confirmation, then re-fetches the list.
#[component]
pub fn ProductsListPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let filters = RwSignal::new(ProductFilters::initial());
    let delete_error = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<Product>);
    let deleting = RwSignal::new(false);

    let items = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let filters = filters.get();
            async move { products::list(&api, &filters).await }
        }
    });

    let toggle_sort = move |field: ProductSortField| {
        filters.update(|f| f.toggle_sort(field));
    };

    let sort_indicator = move |field: ProductSortField| {
        let f = filters.get();
        if f.sort_by == Some(field) {
            match f.sort_order {
                Some(SortOrder::Desc) => " \u{25be}",
                _ => " \u{25b4}",
            }
        } else {
            ""
        }
    };

    let confirm_delete = Callback::new({
        let api = api.clone();
        move |()| {
            let Some(product) = selected.get_untracked() else {
                return;
            };
            let api = api.clone();
            deleting.set(true);
            leptos::task::spawn_local(async move {
                match products::delete(&api, &product.id).await {
                    Ok(()) => {
                        delete_error.set(None);
                        selected.set(None);
                        items.refetch();
                    }
                    Err(e) => delete_error.set(Some(e.form_message())),
                }
                deleting.set(false);
            });
        }
    });

    let cancel_delete = Callback::new(move |()| selected.set(None));

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h1>"Products"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| navigate("/products/new", NavigateOptions::default())
                >
                    "New product"
                </button>
            </header>

            <div class="list-page__filters">
                <input
                    class="field__input"
                    type="search"
                    placeholder="Search products..."
                    prop:value=move || filters.get().search.clone().unwrap_or_default()
                    on:input=move |ev| filters.update(|f| f.set_search(event_target_value(&ev)))
                />
            </div>

            {move || {
                delete_error.get().map(|e| view! {
                    <div class="banner banner--error">
                        <span>{e}</span>
                        <button class="banner__dismiss" on:click=move |_| delete_error.set(None)>
                            "Dismiss"
                        </button>
                    </div>
                })
            }}

            <Suspense fallback=move || view! { <Spinner/> }>
                {move || {
                    items.get().map(|result| match result {
                        Err(e) => view! {
                            <div class="banner banner--error">
                                <span>{e.form_message()}</span>
                            </div>
                        }
                        .into_any(),
                        Ok(page) if page.data.is_empty() => view! {
                            <p class="list-page__empty">"No products found."</p>
                        }
                        .into_any(),
                        Ok(page) => view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th
                                            class="data-table__sortable"
                                            on:click=move |_| toggle_sort(ProductSortField::Name)
                                        >
                                            "Name"
                                            {move || sort_indicator(ProductSortField::Name)}
                                        </th>
                                        <th>"Description"</th>
                                        <th
                                            class="data-table__sortable"
                                            on:click=move |_| toggle_sort(ProductSortField::Price)
                                        >
                                            "Price"
                                            {move || sort_indicator(ProductSortField::Price)}
                                        </th>
                                        <th
                                            class="data-table__sortable"
                                            on:click=move |_| toggle_sort(ProductSortField::Stock)
                                        >
                                            "Stock"
                                            {move || sort_indicator(ProductSortField::Stock)}
                                        </th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {page
                                        .data
                                        .into_iter()
                                        .map(|product| {
                                            let edit_path =
                                                format!("/products/{}/edit", product.id);
                                            let target = product.clone();
                                            view! {
                                                <tr>
                                                    <td>{product.name}</td>
                                                    <td>{product.description}</td>
                                                    <td>{format!("{:.2}", product.price)}</td>
                                                    <td>{product.stock}</td>
                                                    <td class="data-table__actions">
                                                        <a class="link" href=edit_path>
                                                            "Edit"
                                                        </a>
                                                        <button
                                                            class="link link--danger"
                                                            on:click=move |_| {
                                                                selected.set(Some(target.clone()));
                                                            }
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>

            {move || {
                selected.get().map(|product| view! {
                    <ConfirmModal
                        title="Delete product"
                        message=format!("Delete \"{}\"? This cannot be undone.", product.name)
                        busy=deleting
                        on_confirm=confirm_delete
                        on_cancel=cancel_delete
                    />
                })
            }}
        </div>
    }
}
