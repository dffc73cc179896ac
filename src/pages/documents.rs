//! Document screen: list, view dialog, create/edit dialog, delete.
//!
//! Open to every authenticated role.

use leptos::prelude::*;

use crate::net::resources;
use crate::net::types::{Document, DocumentForm, split_tags};
use crate::state::auth::AuthState;
use crate::util::dialog;

/// Document type options, `(valor, etiqueta)`.
const KIND_OPTIONS: &[(&str, &str)] = &[
    ("guia", "Guía"),
    ("tarea", "Tarea"),
    ("examen", "Examen"),
    ("otro", "Otro"),
];

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let documents = LocalResource::new(|| resources::list_documents());

    let error = RwSignal::new(None::<String>);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<String>);
    let viewing = RwSignal::new(None::<Document>);
    let form = RwSignal::new(DocumentForm::default());
    let tags_input = RwSignal::new(String::new());

    let open_create = move |_| {
        let author_id = auth.with_untracked(|s| s.user.as_ref().map_or(0, |u| u.id));
        editing.set(None);
        form.set(DocumentForm {
            author_id,
            ..DocumentForm::default()
        });
        tags_input.set(String::new());
        error.set(None);
        show_form.set(true);
    };

    let on_edit = Callback::new(move |doc: Document| {
        let author_id = auth.with_untracked(|s| s.user.as_ref().map_or(0, |u| u.id));
        editing.set(Some(doc.id));
        tags_input.set(doc.tags.join(", "));
        form.set(DocumentForm {
            title: doc.title,
            kind: doc.kind,
            content: doc.content,
            tags: Vec::new(),
            author_id,
        });
        error.set(None);
        show_form.set(true);
    });

    let on_view = Callback::new(move |doc: Document| viewing.set(Some(doc)));
    let on_close_view = Callback::new(move |()| viewing.set(None));
    let on_cancel = Callback::new(move |()| show_form.set(false));

    let on_submit = Callback::new(move |()| {
        let mut payload = form.get();
        payload.tags = split_tags(&tags_input.get());
        if payload.title.trim().is_empty() {
            error.set(Some("El título es obligatorio".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let documents = documents.clone();
            let target = editing.get();
            leptos::task::spawn_local(async move {
                let result = match target {
                    Some(id) => resources::update_document(&id, &payload).await,
                    None => resources::create_document(&payload).await,
                };
                match result {
                    Ok(()) => {
                        show_form.set(false);
                        documents.refetch();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    });

    let on_delete = Callback::new(move |id: String| {
        if !dialog::confirm("¿Está seguro de eliminar este documento?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let documents = documents.clone();
            leptos::task::spawn_local(async move {
                match resources::delete_document(&id).await {
                    Ok(()) => documents.refetch(),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="documents-page">
            <header class="page-header">
                <h1>"Documentos"</h1>
                <button class="btn btn--primary" on:click=open_create>
                    "+ Nuevo Documento"
                </button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Cargando..."</p> }>
                {move || {
                    documents
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Título"</th>
                                                <th>"Tipo"</th>
                                                <th>"Autor"</th>
                                                <th>"Fecha"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|doc| {
                                                    let view_target = doc.clone();
                                                    let edit_target = doc.clone();
                                                    let delete_id = doc.id.clone();
                                                    view! {
                                                        <tr>
                                                            <td>{doc.title.clone()}</td>
                                                            <td>{doc.kind.clone()}</td>
                                                            <td>{doc.author_name.clone()}</td>
                                                            <td>
                                                                {doc.created_at.clone().unwrap_or_else(|| "-".to_owned())}
                                                            </td>
                                                            <td>
                                                                <button
                                                                    class="btn"
                                                                    on:click=move |_| on_view.run(view_target.clone())
                                                                >
                                                                    "Ver"
                                                                </button>
                                                                <button
                                                                    class="btn"
                                                                    on:click=move |_| on_edit.run(edit_target.clone())
                                                                >
                                                                    "Editar"
                                                                </button>
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| on_delete.run(delete_id.clone())
                                                                >
                                                                    "Eliminar"
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="page-error">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || viewing.get().is_some()>
                {move || {
                    viewing
                        .get()
                        .map(|doc| view! { <ViewDialog doc=doc on_close=on_close_view/> })
                }}
            </Show>

            <Show when=move || show_form.get()>
                <DocumentDialog
                    form=form
                    tags_input=tags_input
                    editing=editing
                    on_cancel=on_cancel
                    on_submit=on_submit
                />
            </Show>
        </div>
    }
}

/// Read-only dialog showing a document's content and tags.
#[component]
fn ViewDialog(doc: Document, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{doc.title.clone()}</h2>
                <p class="dialog__meta">{doc.kind.clone()} " · " {doc.author_name.clone()}</p>
                <pre class="dialog__content">{doc.content.clone()}</pre>
                <p class="dialog__tags">{doc.tags.join(", ")}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cerrar"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Create/edit dialog. Tags are entered comma-separated and split on
/// submit.
#[component]
fn DocumentDialog(
    form: RwSignal<DocumentForm>,
    tags_input: RwSignal<String>,
    editing: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>
                    {move || {
                        if editing.get().is_some() { "Editar Documento" } else { "Nuevo Documento" }
                    }}
                </h2>
                <label class="dialog__label">
                    "Título"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| {
                            form.update(|f| f.title = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Tipo"
                    <select
                        class="dialog__input"
                        prop:value=move || form.with(|f| f.kind.clone())
                        on:change=move |ev| {
                            form.update(|f| f.kind = event_target_value(&ev));
                        }
                    >
                        {KIND_OPTIONS
                            .iter()
                            .map(|(value, label)| {
                                view! { <option value=*value>{*label}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Contenido"
                    <textarea
                        class="dialog__input"
                        prop:value=move || form.with(|f| f.content.clone())
                        on:input=move |ev| {
                            form.update(|f| f.content = event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Etiquetas (separadas por coma)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || tags_input.get()
                        on:input=move |ev| tags_input.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        "Guardar"
                    </button>
                </div>
            </div>
        </div>
    }
}
