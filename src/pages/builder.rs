//! Resume builder page: list, create, delete, and export resumes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Premium-gated route. The list is fetched on mount; create prepends the new
//! resume, delete asks for confirmation, and download is offered only for
//! completed documents.

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;

use leptos::prelude::*;

use crate::net::types::Resume;
use crate::util::format::format_date;

/// Validate and normalize a new resume title.
fn validate_resume_title(title: &str) -> Result<String, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Please enter a title for your resume.");
    }
    Ok(title.to_owned())
}

/// Badge text for a resume's lifecycle status.
fn status_label(resume: &Resume) -> &'static str {
    if resume.is_completed() { "Complete" } else { "Draft" }
}

/// Resume builder page.
#[component]
pub fn ResumeBuilderPage() -> impl IntoView {
    let resumes = RwSignal::new(Vec::<Resume>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);
    let new_title = RwSignal::new(String::new());
    let creating = RwSignal::new(false);

    // Fetch the list once on mount.
    #[cfg(feature = "browser")]
    leptos::task::spawn_local(async move {
        match crate::net::resumes::list().await {
            Ok(items) => resumes.set(items),
            Err(err) => error.set(err.summary()),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "browser"))]
    loading.set(false);

    let on_open_create = move |_| {
        show_create.set(true);
        new_title.set(String::new());
    };
    let on_cancel_create = move |_| {
        show_create.set(false);
        new_title.set(String::new());
        error.set(String::new());
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if creating.get() {
            return;
        }
        let title = match validate_resume_title(&new_title.get()) {
            Ok(title) => title,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        creating.set(true);
        error.set(String::new());

        #[cfg(feature = "browser")]
        leptos::task::spawn_local(async move {
            match crate::net::resumes::create(&title).await {
                Ok(resume) => {
                    resumes.update(|items| items.insert(0, resume));
                    new_title.set(String::new());
                    show_create.set(false);
                }
                Err(err) => error.set(err.summary()),
            }
            creating.set(false);
        });
        #[cfg(not(feature = "browser"))]
        {
            let _ = &title;
            creating.set(false);
        }
    };

    let on_delete = move |id: i64| {
        #[cfg(feature = "browser")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message("Are you sure you want to delete this resume?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::resumes::delete(id).await {
                    Ok(()) => resumes.update(|items| items.retain(|resume| resume.id != id)),
                    Err(err) => error.set(err.summary()),
                }
            });
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = id;
        }
    };

    let on_download = move |id: i64, title: String| {
        #[cfg(feature = "browser")]
        leptos::task::spawn_local(async move {
            match crate::net::resumes::download(id).await {
                Ok(bytes) => {
                    let filename = crate::util::download::download_filename(&title);
                    crate::util::download::save_pdf(&bytes, &filename);
                }
                Err(err) => error.set(err.summary()),
            }
        });
        #[cfg(not(feature = "browser"))]
        {
            let _ = (id, title);
        }
    };

    view! {
        <div class="builder-page">
            <Show
                when=move || !loading.get()
                fallback=move || {
                    view! {
                        <div class="builder-page__loading">
                            <div class="loading-spinner"></div>
                            <p>"Loading your resumes..."</p>
                        </div>
                    }
                }
            >
                <header class="builder-page__header">
                    <div>
                        <h1>"Resume Builder"</h1>
                        <p>"Create professional resumes with our premium builder"</p>
                    </div>
                    <button class="btn btn--primary" on:click=on_open_create>
                        "Create New Resume"
                    </button>
                </header>

                <Show when=move || !error.get().is_empty()>
                    <div class="builder-page__error">
                        <p>{move || error.get()}</p>
                    </div>
                </Show>

                <Show when=move || show_create.get()>
                    <div class="dialog-backdrop" on:click=on_cancel_create>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h2>"Create New Resume"</h2>
                            <form on:submit=on_create>
                                <label class="dialog__label">
                                    "Resume Title"
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        placeholder="e.g., Software Engineer Resume"
                                        prop:value=move || new_title.get()
                                        on:input=move |ev| new_title.set(event_target_value(&ev))
                                    />
                                </label>
                                <div class="dialog__actions">
                                    <button class="btn" type="button" on:click=on_cancel_create>
                                        "Cancel"
                                    </button>
                                    <button
                                        class="btn btn--primary"
                                        type="submit"
                                        disabled=move || creating.get()
                                    >
                                        {move || if creating.get() { "Creating..." } else { "Create Resume" }}
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                </Show>

                <Show
                    when=move || !resumes.with(Vec::is_empty)
                    fallback=move || {
                        view! {
                            <div class="builder-page__empty">
                                <h3>"No resumes yet"</h3>
                                <p>"Create your first professional resume to get started."</p>
                                <button class="btn btn--primary" on:click=on_open_create>
                                    "Create Your First Resume"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="builder-page__grid">
                        <For
                            each=move || resumes.get()
                            key=|resume| resume.id
                            children=move |resume| {
                                let id = resume.id;
                                let title = resume.title.clone();
                                let completed = resume.is_completed();
                                view! {
                                    <div class="resume-card">
                                        <div class="resume-card__meta">
                                            <h3>{resume.title.clone()}</h3>
                                            <p>"Created " {format_date(&resume.created_at).to_owned()}</p>
                                            <p>"Last updated " {format_date(&resume.updated_at).to_owned()}</p>
                                            <span
                                                class="resume-card__status"
                                                class:resume-card__status--complete=completed
                                            >
                                                {status_label(&resume)}
                                            </span>
                                        </div>
                                        <div class="resume-card__actions">
                                            <Show when=move || completed>
                                                {
                                                    let title = title.clone();
                                                    view! {
                                                        <button
                                                            class="btn btn--outline"
                                                            on:click=move |_| on_download(id, title.clone())
                                                        >
                                                            "Download"
                                                        </button>
                                                    }
                                                }
                                            </Show>
                                            <button
                                                class="resume-card__delete"
                                                on:click=move |_| on_delete(id)
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
