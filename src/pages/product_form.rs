//! Product create/edit form with a dynamic attribute-row editor.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use uuid::Uuid;

use crate::components::spinner::Spinner;
use crate::forms::{ProductForm, ProductFormErrors};
use crate::net::client::ApiClient;
use crate::net::products;
use crate::net::types::UpdateProductPayload;

/// One editable attribute row with a stable key for keyed iteration.
#[derive(Clone)]
struct AttributeRow {
    key: Uuid,
    name: RwSignal<String>,
    value: RwSignal<String>,
}

impl AttributeRow {
    fn new(name: &str, value: &str) -> Self {
        Self {
            key: Uuid::new_v4(),
            name: RwSignal::new(name.to_owned()),
            value: RwSignal::new(value.to_owned()),
        }
    }
}

/// Create or edit a product. With an `:id` route param the product is
/// fetched first and the form pre-filled; a failed fetch bails back to
/// the list. Submission validates client-side, then creates or updates
/// and returns to the list.
#[component]
pub fn ProductFormPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let params = use_params_map();

    let product_id = Memo::new(move |_| params.read().get("id"));

    let loading = RwSignal::new(product_id.get_untracked().is_some());
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let attributes = RwSignal::new(Vec::<AttributeRow>::new());
    let errors = RwSignal::new(ProductFormErrors::default());
    let root_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Pre-fill when editing; bail back to the list if the fetch fails.
    {
        let api = api.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            let Some(id) = product_id.get() else {
                return;
            };
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match products::get(&api, &id).await {
                    Ok(product) => {
                        name.set(product.name);
                        description.set(product.description);
                        price.set(product.price.to_string());
                        stock.set(product.stock.to_string());
                        attributes.set(
                            product
                                .attributes
                                .iter()
                                .map(|a| AttributeRow::new(&a.name, &a.value))
                                .collect(),
                        );
                        loading.set(false);
                    }
                    Err(e) => {
                        log::warn!("product load failed: {e}");
                        navigate("/products", NavigateOptions::default());
                    }
                }
            });
        });
    }

    let submit = {
        let api = api.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let form = ProductForm {
                name: name.get(),
                description: description.get(),
                price: price.get(),
                stock: stock.get(),
                attributes: attributes
                    .get()
                    .iter()
                    .map(|row| (row.name.get(), row.value.get()))
                    .collect(),
            };
            match form.validate() {
                Err(field_errors) => errors.set(field_errors),
                Ok(payload) => {
                    errors.set(ProductFormErrors::default());
                    root_error.set(None);
                    submitting.set(true);
                    let api = api.clone();
                    let navigate = navigate.clone();
                    let id = product_id.get_untracked();
                    leptos::task::spawn_local(async move {
                        let result = if let Some(id) = id {
                            products::update(&api, &UpdateProductPayload {
                                id,
                                fields: payload,
                            })
                            .await
                            .map(|_| ())
                        } else {
                            products::create(&api, &payload).await.map(|_| ())
                        };
                        match result {
                            Ok(()) => {
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
        }
    };

    let add_row = move |_| attributes.update(|rows| rows.push(AttributeRow::new("", "")));

    let cancel = move |_| navigate("/products", NavigateOptions::default());

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
            <header class="list-page__header">
                <h1>
                    {move || if product_id.get().is_some() { "Edit product" } else { "New product" }}
                </h1>
            </header>

            <form class="entity-form" on:submit=submit.clone()>
                <label class="field">
                    "Name"
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    {move || {
                        errors.get().name.map(|e| view! { <span class="field__error">{e}</span> })
                    }}
                </label>
                <label class="field">
                    "Description"
                    <textarea
                        class="field__input field__input--area"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="field">
                    "Price"
                    <input
                        class="field__input"
                        type="number"
                        step="0.01"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                    {move || {
                        errors.get().price.map(|e| view! { <span class="field__error">{e}</span> })
                    }}
                </label>
                <label class="field">
                    "Stock"
                    <input
                        class="field__input"
                        type="number"
                        prop:value=move || stock.get()
                        on:input=move |ev| stock.set(event_target_value(&ev))
                    />
                    {move || {
                        errors.get().stock.map(|e| view! { <span class="field__error">{e}</span> })
                    }}
                </label>

                <h2 class="entity-form__subtitle">"Attributes"</h2>
                <div class="entity-form__rows">
                    <For
                        each=move || attributes.get()
                        key=|row| row.key
                        children=move |row| {
                            let row_name = row.name;
                            let row_value = row.value;
                            let row_key = row.key;
                            view! {
                                <div class="attribute-row">
                                    <input
                                        class="field__input"
                                        type="text"
                                        placeholder="Name"
                                        prop:value=move || row_name.get()
                                        on:input=move |ev| row_name.set(event_target_value(&ev))
                                    />
                                    <input
                                        class="field__input"
                                        type="text"
                                        placeholder="Value"
                                        prop:value=move || row_value.get()
                                        on:input=move |ev| row_value.set(event_target_value(&ev))
                                    />
                                    <button
                                        type="button"
                                        class="link link--danger"
                                        on:click=move |_| {
                                            attributes.update(|rows| {
                                                rows.retain(|r| r.key != row_key);
                                            });
                                        }
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        }
                    />
                    <button type="button" class="btn" on:click=add_row>
                        "Add attribute"
                    </button>
                </div>

                {move || root_error.get().map(|e| view! { <span class="form-error">{e}</span> })}

                <div class="entity-form__actions">
                    <button type="button" class="btn" on:click=cancel.clone()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || submitting.get()
                    >
                        {move || {
                            if submitting.get() {
                                "Saving..."
                            } else if product_id.get().is_some() {
                                "Save"
                            } else {
                                "Create"
                            }
                        }}
                    </button>
                </div>
            </form>
        </Show>
    }
}
