//! Attribute list page: search, type filter, sortable table, delete flow.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_modal::ConfirmModal;
use crate::components::spinner::Spinner;
use crate::net::attributes;
use crate::net::client::ApiClient;
use crate::net::types::{Attribute, AttributeFilters, AttributeSortField, AttributeType, SortOrder};

/// Attribute listing. Adds a type filter on top of the common search and
/// sort behavior; otherwise mirrors the product list.
#[component]
pub fn AttributesListPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let filters = RwSignal::new(AttributeFilters::initial());
    let delete_error = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<Attribute>);
    let deleting = RwSignal::new(false);

    let items = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let filters = filters.get();
            async move { attributes::list(&api, &filters).await }
        }
    });

    let toggle_sort = move |field: AttributeSortField| {
        filters.update(|f| f.toggle_sort(field));
    };

    let sort_indicator = move |field: AttributeSortField| {
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
            let Some(attribute) = selected.get_untracked() else {
                return;
            };
            let api = api.clone();
            deleting.set(true);
            leptos::task::spawn_local(async move {
                match attributes::delete(&api, &attribute.id).await {
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
                <h1>"Attributes"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| navigate("/attributes/new", NavigateOptions::default())
                >
                    "New attribute"
                </button>
            </header>

            <div class="list-page__filters">
                <input
                    class="field__input"
                    type="search"
                    placeholder="Search attributes..."
                    prop:value=move || filters.get().search.clone().unwrap_or_default()
                    on:input=move |ev| filters.update(|f| f.set_search(event_target_value(&ev)))
                />
                <select
                    class="field__input field__input--select"
                    prop:value=move || {
                        filters.get().kind.map(AttributeType::as_str).unwrap_or("")
                    }
                    on:change=move |ev| {
                        let kind = AttributeType::parse(&event_target_value(&ev));
                        filters.update(|f| f.set_kind(kind));
                    }
                >
                    <option value="">"All types"</option>
                    {AttributeType::ALL
                        .into_iter()
                        .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
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
                            <p class="list-page__empty">"No attributes found."</p>
                        }
                        .into_any(),
                        Ok(page) => view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th
                                            class="data-table__sortable"
                                            on:click=move |_| toggle_sort(AttributeSortField::Name)
                                        >
                                            "Name"
                                            {move || sort_indicator(AttributeSortField::Name)}
                                        </th>
                                        <th
                                            class="data-table__sortable"
                                            on:click=move |_| toggle_sort(AttributeSortField::Type)
                                        >
                                            "Type"
                                            {move || sort_indicator(AttributeSortField::Type)}
                                        </th>
                                        <th>"Values"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {page
                                        .data
                                        .into_iter()
                                        .map(|attribute| {
                                            let edit_path =
                                                format!("/attributes/{}/edit", attribute.id);
                                            let target = attribute.clone();
                                            view! {
                                                <tr>
                                                    <td>{attribute.name}</td>
                                                    <td>
                                                        <span class="chip">
                                                            {attribute.kind.label()}
                                                        </span>
                                                    </td>
                                                    <td>
                                                        <div class="chip-row">
                                                            {attribute
                                                                .values
                                                                .into_iter()
                                                                .map(|value| {
                                                                    view! {
                                                                        <span class="chip chip--muted">
                                                                            {value}
                                                                        </span>
                                                                    }
                                                                })
                                                                .collect::<Vec<_>>()}
                                                        </div>
                                                    </td>
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
                selected.get().map(|attribute| view! {
                    <ConfirmModal
                        title="Delete attribute"
                        message=format!("Delete \"{}\"? This cannot be undone.", attribute.name)
                        busy=deleting
                        on_confirm=confirm_delete
                        on_cancel=cancel_delete
                    />
                })
            }}
        </div>
    }
}
