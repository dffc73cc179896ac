//! Enrollment management screen: enrollments table with an optional
//! per-student filter, enroll dialog, and unenroll.

use leptos::prelude::*;

use crate::net::resources;
use crate::net::types::{Course, EnrollmentForm, UserAccount};
use crate::routes::roles;
use crate::util::dialog;

#[component]
pub fn StudentsPage() -> impl IntoView {
    // Empty string = all students; otherwise a student id.
    let filter = RwSignal::new(String::new());
    let enrollments = LocalResource::new(move || {
        let selected = filter.get();
        async move {
            match selected.parse::<i64>() {
                Ok(student_id) => resources::list_student_enrollments(student_id).await,
                Err(_) => resources::list_enrollments().await,
            }
        }
    });
    let students = LocalResource::new(|| resources::list_users());
    let courses = LocalResource::new(|| resources::list_courses());

    let error = RwSignal::new(None::<String>);
    let show_form = RwSignal::new(false);
    let form = RwSignal::new(EnrollmentForm::default());

    let open_create = move |_| {
        form.set(EnrollmentForm::default());
        error.set(None);
        show_form.set(true);
    };

    let on_cancel = Callback::new(move |()| show_form.set(false));

    let on_submit = Callback::new(move |()| {
        let payload = form.get();
        if payload.student_id.is_empty() || payload.course_id.is_empty() {
            error.set(Some("Seleccione estudiante y curso".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let enrollments = enrollments.clone();
            leptos::task::spawn_local(async move {
                match resources::create_enrollment(&payload).await {
                    Ok(()) => {
                        show_form.set(false);
                        enrollments.refetch();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    });

    let on_unenroll = Callback::new(move |id: i64| {
        if !dialog::confirm("¿Está seguro de eliminar esta inscripción?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let enrollments = enrollments.clone();
            leptos::task::spawn_local(async move {
                match resources::delete_enrollment(id).await {
                    Ok(()) => enrollments.refetch(),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="students-page">
            <header class="page-header">
                <h1>"Estudiantes"</h1>
                <button class="btn btn--primary" on:click=open_create>
                    "+ Nueva Inscripción"
                </button>
            </header>

            <label class="page-filter">
                "Estudiante"
                <select
                    prop:value=move || filter.get()
                    on:change=move |ev| filter.set(event_target_value(&ev))
                >
                    <option value="">"Todos"</option>
                    {move || {
                        students
                            .get()
                            .map(|result| {
                                student_options(&result.unwrap_or_default())
                            })
                    }}
                </select>
            </label>

            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Cargando..."</p> }>
                {move || {
                    enrollments
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Estudiante"</th>
                                                <th>"Código"</th>
                                                <th>"Materia"</th>
                                                <th>"Semestre"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|enrollment| {
                                                    view! {
                                                        <tr>
                                                            <td>{enrollment.student_name.clone()}</td>
                                                            <td>{enrollment.subject_code.clone()}</td>
                                                            <td>{enrollment.subject_name.clone()}</td>
                                                            <td>{enrollment.semester.clone()}</td>
                                                            <td>
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| on_unenroll.run(enrollment.id)
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
                <EnrollDialog
                    form=form
                    students=students
                    courses=courses
                    on_cancel=on_cancel
                    on_submit=on_submit
                />
            </Show>
        </div>
    }
}

fn student_options(accounts: &[UserAccount]) -> Vec<impl IntoView + use<>> {
    accounts
        .iter()
        .filter(|u| u.role_name.as_deref() == Some(roles::ESTUDIANTE))
        .map(|u| {
            view! {
                <option value=u.id
                    .to_string()>{format!("{} {}", u.first_name, u.last_name)}</option>
            }
        })
        .collect()
}

/// Enroll dialog: student and course selects over the already loaded
/// lists.
#[component]
fn EnrollDialog(
    form: RwSignal<EnrollmentForm>,
    students: LocalResource<Result<Vec<UserAccount>, crate::net::api::ApiError>>,
    courses: LocalResource<Result<Vec<Course>, crate::net::api::ApiError>>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Nueva Inscripción"</h2>
                <label class="dialog__label">
                    "Estudiante"
                    <select
                        class="dialog__input"
                        prop:value=move || form.with(|f| f.student_id.clone())
                        on:change=move |ev| {
                            form.update(|f| f.student_id = event_target_value(&ev));
                        }
                    >
                        <option value="">"Seleccione..."</option>
                        {move || {
                            students.get().map(|result| student_options(&result.unwrap_or_default()))
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Curso"
                    <select
                        class="dialog__input"
                        prop:value=move || form.with(|f| f.course_id.clone())
                        on:change=move |ev| {
                            form.update(|f| f.course_id = event_target_value(&ev));
                        }
                    >
                        <option value="">"Seleccione..."</option>
                        {move || {
                            courses
                                .get()
                                .map(|result| {
                                    result
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|c| {
                                            view! {
                                                <option value=c.id
                                                    .to_string()>
                                                    {format!("{} - {}", c.subject_code, c.subject_name)}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </select>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        "Inscribir"
                    </button>
                </div>
            </div>
        </div>
    }
}
