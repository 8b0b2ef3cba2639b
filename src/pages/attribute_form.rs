//! Attribute create/edit form with a values editor for select types.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use uuid::Uuid;

use crate::components::spinner::Spinner;
use crate::forms::{AttributeForm, AttributeFormErrors};
use crate::net::attributes;
use crate::net::client::ApiClient;
use crate::net::types::{AttributeType, UpdateAttributePayload};

/// One editable value row with a stable key for keyed iteration.
#[derive(Clone)]
struct ValueRow {
    key: Uuid,
    text: RwSignal<String>,
}

impl ValueRow {
    fn new(text: &str) -> Self {
        Self {
            key: Uuid::new_v4(),
            text: RwSignal::new(text.to_owned()),
        }
    }
}

/// Create or edit an attribute. The values editor only appears for the
/// `select` type; other types submit an empty value list.
#[component]
pub fn AttributeFormPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let params = use_params_map();

    let attribute_id = Memo::new(move |_| params.read().get("id"));

    let loading = RwSignal::new(attribute_id.get_untracked().is_some());
    let name = RwSignal::new(String::new());
    let kind = RwSignal::new(AttributeType::default());
    let values = RwSignal::new(Vec::<ValueRow>::new());
    let errors = RwSignal::new(AttributeFormErrors::default());
    let root_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Pre-fill when editing; bail back to the list if the fetch fails.
    {
        let api = api.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            let Some(id) = attribute_id.get() else {
                return;
            };
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match attributes::get(&api, &id).await {
                    Ok(attribute) => {
                        name.set(attribute.name);
                        kind.set(attribute.kind);
                        values.set(
                            attribute.values.iter().map(|v| ValueRow::new(v)).collect(),
                        );
                        loading.set(false);
                    }
                    Err(e) => {
                        log::warn!("attribute load failed: {e}");
                        navigate("/attributes", NavigateOptions::default());
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
            let form = AttributeForm {
                name: name.get(),
                kind: kind.get(),
                values: values.get().iter().map(|row| row.text.get()).collect(),
            };
            match form.validate() {
                Err(field_errors) => errors.set(field_errors),
                Ok(payload) => {
                    errors.set(AttributeFormErrors::default());
                    root_error.set(None);
                    submitting.set(true);
                    let api = api.clone();
                    let navigate = navigate.clone();
                    let id = attribute_id.get_untracked();
                    leptos::task::spawn_local(async move {
                        let result = if let Some(id) = id {
                            attributes::update(&api, &UpdateAttributePayload {
                                id,
                                fields: payload,
                            })
                            .await
                            .map(|_| ())
                        } else {
                            attributes::create(&api, &payload).await.map(|_| ())
                        };
                        match result {
                            Ok(()) => {
                                submitting.set(false);
                                navigate("/attributes", NavigateOptions::default());
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

    let add_value = move |_| values.update(|rows| rows.push(ValueRow::new("")));

    let cancel = move |_| navigate("/attributes", NavigateOptions::default());

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
            <header class="list-page__header">
                <h1>
                    {move || {
                        if attribute_id.get().is_some() { "Edit attribute" } else { "New attribute" }
                    }}
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
                    "Type"
                    <select
                        class="field__input field__input--select"
                        prop:value=move || kind.get().as_str()
                        on:change=move |ev| {
                            if let Some(parsed) = AttributeType::parse(&event_target_value(&ev)) {
                                kind.set(parsed);
                            }
                        }
                    >
                        {AttributeType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <Show when=move || kind.get() == AttributeType::Select>
                    <h2 class="entity-form__subtitle">"Values"</h2>
                    <div class="entity-form__rows">
                        <For
                            each=move || values.get()
                            key=|row| row.key
                            children=move |row| {
                                let row_text = row.text;
                                let row_key = row.key;
                                view! {
                                    <div class="attribute-row">
                                        <input
                                            class="field__input"
                                            type="text"
                                            placeholder="Value"
                                            prop:value=move || row_text.get()
                                            on:input=move |ev| {
                                                row_text.set(event_target_value(&ev));
                                            }
                                        />
                                        <button
                                            type="button"
                                            class="link link--danger"
                                            on:click=move |_| {
                                                values.update(|rows| {
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
                        <button type="button" class="btn" on:click=add_value>
                            "Add value"
                        </button>
                    </div>
                </Show>

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
                            } else if attribute_id.get().is_some() {
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
