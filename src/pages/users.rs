//! User administration screen: account table with create, edit, and
//! delete.

use leptos::prelude::*;

use crate::net::resources;
use crate::net::types::{UserAccount, UserForm};
use crate::util::dialog;

/// Role options for the account form, `(rol_id, nombre)`.
const ROLE_OPTIONS: &[(&str, &str)] = &[
    ("1", "admin"),
    ("2", "profesor"),
    ("3", "estudiante"),
    ("4", "administrativo"),
];

fn role_id_for(name: &str) -> Option<String> {
    ROLE_OPTIONS
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(id, _)| (*id).to_owned())
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let users = LocalResource::new(|| resources::list_users());
    let error = RwSignal::new(None::<String>);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);
    let form = RwSignal::new(UserForm::default());

    let open_create = move |_| {
        editing.set(None);
        form.set(UserForm {
            role_id: ROLE_OPTIONS[0].0.to_owned(),
            ..UserForm::default()
        });
        error.set(None);
        show_form.set(true);
    };

    let on_edit = Callback::new(move |account: UserAccount| {
        editing.set(Some(account.id));
        form.set(UserForm {
            first_name: account.first_name,
            last_name: account.last_name,
            email: account.email,
            username: account.username,
            password: String::new(),
            role_id: account
                .role_name
                .as_deref()
                .and_then(role_id_for)
                .unwrap_or_default(),
        });
        error.set(None);
        show_form.set(true);
    });

    let on_cancel = Callback::new(move |()| show_form.set(false));

    let on_submit = Callback::new(move |()| {
        let payload = form.get();
        let missing = payload.username.trim().is_empty()
            || payload.first_name.trim().is_empty()
            || (editing.get().is_none() && payload.password.trim().is_empty());
        if missing {
            error.set(Some("Complete los campos obligatorios".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let users = users.clone();
            let target = editing.get();
            leptos::task::spawn_local(async move {
                let result = match target {
                    Some(id) => resources::update_user(id, &payload).await,
                    None => resources::create_user(&payload).await,
                };
                match result {
                    Ok(()) => {
                        show_form.set(false);
                        users.refetch();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    });

    let on_delete = Callback::new(move |id: i64| {
        if !dialog::confirm("¿Está seguro de eliminar este usuario?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let users = users.clone();
            leptos::task::spawn_local(async move {
                match resources::delete_user(id).await {
                    Ok(()) => users.refetch(),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="users-page">
            <header class="page-header">
                <h1>"Usuarios"</h1>
                <button class="btn btn--primary" on:click=open_create>
                    "+ Nuevo Usuario"
                </button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Cargando..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Nombre"</th>
                                                <th>"Email"</th>
                                                <th>"Usuario"</th>
                                                <th>"Rol"</th>
                                                <th>"Estado"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|account| {
                                                    let edit_target = account.clone();
                                                    view! {
                                                        <tr>
                                                            <td>
                                                                {format!(
                                                                    "{} {}",
                                                                    account.first_name,
                                                                    account.last_name,
                                                                )}
                                                            </td>
                                                            <td>{account.email.clone()}</td>
                                                            <td>{account.username.clone()}</td>
                                                            <td>
                                                                {account.role_name.clone().unwrap_or_default()}
                                                            </td>
                                                            <td>
                                                                {if account.active { "Activo" } else { "Inactivo" }}
                                                            </td>
                                                            <td>
                                                                <button
                                                                    class="btn"
                                                                    on:click=move |_| on_edit.run(edit_target.clone())
                                                                >
                                                                    "Editar"
                                                                </button>
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| on_delete.run(account.id)
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

            <Show when=move || show_form.get()>
                <UserDialog form=form editing=editing on_cancel=on_cancel on_submit=on_submit/>
            </Show>
        </div>
    }
}

/// Create/edit dialog. An empty password on edit leaves the stored one
/// unchanged.
#[component]
fn UserDialog(
    form: RwSignal<UserForm>,
    editing: RwSignal<Option<i64>>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>
                    {move || {
                        if editing.get().is_some() { "Editar Usuario" } else { "Nuevo Usuario" }
                    }}
                </h2>
                <label class="dialog__label">
                    "Nombre"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.first_name.clone())
                        on:input=move |ev| {
                            form.update(|f| f.first_name = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Apellido"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.last_name.clone())
                        on:input=move |ev| {
                            form.update(|f| f.last_name = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            form.update(|f| f.email = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Usuario"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| {
                            form.update(|f| f.username = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Contraseña"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| {
                            form.update(|f| f.password = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Rol"
                    <select
                        class="dialog__input"
                        prop:value=move || form.with(|f| f.role_id.clone())
                        on:change=move |ev| {
                            form.update(|f| f.role_id = event_target_value(&ev));
                        }
                    >
                        {ROLE_OPTIONS
                            .iter()
                            .map(|(id, name)| view! { <option value=*id>{*name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
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
