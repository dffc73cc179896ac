//! Course administration screen.
//!
//! Also the landing page for estudiantes, who reach it through the
//! `cursos.ver` permission or the role redirect.

use leptos::prelude::*;

use crate::net::resources;
use crate::net::types::{Course, CourseForm};
use crate::util::dialog;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let courses = LocalResource::new(|| resources::list_courses());
    let error = RwSignal::new(None::<String>);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);
    let form = RwSignal::new(CourseForm::default());

    let open_create = move |_| {
        editing.set(None);
        form.set(CourseForm::default());
        error.set(None);
        show_form.set(true);
    };

    let on_edit = Callback::new(move |course: Course| {
        editing.set(Some(course.id));
        form.set(CourseForm {
            subject_id: course.subject_id.to_string(),
            teacher_id: course.teacher_id.to_string(),
            semester: course.semester,
            academic_year: course.academic_year.to_string(),
            capacity: course.capacity.to_string(),
        });
        error.set(None);
        show_form.set(true);
    });

    let on_cancel = Callback::new(move |()| show_form.set(false));

    let on_submit = Callback::new(move |()| {
        let payload = form.get();
        if payload.subject_id.trim().is_empty() || payload.teacher_id.trim().is_empty() {
            error.set(Some("Complete los campos obligatorios".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let courses = courses.clone();
            let target = editing.get();
            leptos::task::spawn_local(async move {
                let result = match target {
                    Some(id) => resources::update_course(id, &payload).await,
                    None => resources::create_course(&payload).await,
                };
                match result {
                    Ok(()) => {
                        show_form.set(false);
                        courses.refetch();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    });

    let on_delete = Callback::new(move |id: i64| {
        if !dialog::confirm("¿Está seguro de eliminar este curso?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let courses = courses.clone();
            leptos::task::spawn_local(async move {
                match resources::delete_course(id).await {
                    Ok(()) => courses.refetch(),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="courses-page">
            <header class="page-header">
                <h1>"Cursos"</h1>
                <button class="btn btn--primary" on:click=open_create>
                    "+ Nuevo Curso"
                </button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Cargando..."</p> }>
                {move || {
                    courses
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Código"</th>
                                                <th>"Materia"</th>
                                                <th>"Semestre"</th>
                                                <th>"Año"</th>
                                                <th>"Cupo"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|course| {
                                                    let edit_target = course.clone();
                                                    view! {
                                                        <tr>
                                                            <td>{course.subject_code.clone()}</td>
                                                            <td>{course.subject_name.clone()}</td>
                                                            <td>{course.semester.clone()}</td>
                                                            <td>{course.academic_year}</td>
                                                            <td>{course.capacity}</td>
                                                            <td>
                                                                <button
                                                                    class="btn"
                                                                    on:click=move |_| on_edit.run(edit_target.clone())
                                                                >
                                                                    "Editar"
                                                                </button>
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| on_delete.run(course.id)
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
                <CourseDialog form=form editing=editing on_cancel=on_cancel on_submit=on_submit/>
            </Show>
        </div>
    }
}

/// Create/edit dialog for a course.
#[component]
fn CourseDialog(
    form: RwSignal<CourseForm>,
    editing: RwSignal<Option<i64>>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>
                    {move || if editing.get().is_some() { "Editar Curso" } else { "Nuevo Curso" }}
                </h2>
                <label class="dialog__label">
                    "Materia (id)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.subject_id.clone())
                        on:input=move |ev| {
                            form.update(|f| f.subject_id = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Profesor (id)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.teacher_id.clone())
                        on:input=move |ev| {
                            form.update(|f| f.teacher_id = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Semestre"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.semester.clone())
                        on:input=move |ev| {
                            form.update(|f| f.semester = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Año académico"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.academic_year.clone())
                        on:input=move |ev| {
                            form.update(|f| f.academic_year = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Cupo máximo"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.capacity.clone())
                        on:input=move |ev| {
                            form.update(|f| f.capacity = event_target_value(&ev));
                        }
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
