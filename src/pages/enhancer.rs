//! Resume enhancer page: PDF upload, AI enhancement, blob download.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth-required route. File validation happens client-side before any
//! network call; the upload itself is a multipart POST and the result offers
//! the enhanced PDF as a download.

#[cfg(test)]
#[path = "enhancer_test.rs"]
mod enhancer_test;

use leptos::prelude::*;

use crate::net::types::EnhancedResume;
use crate::util::format::format_megabytes;

#[cfg(any(test, feature = "browser"))]
const MAX_UPLOAD_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// Validate a picked file before upload: PDF only, capped at 10 MB.
///
/// Drag-and-drop sources sometimes omit the MIME type, so a `.pdf` name is
/// accepted when the type is empty.
#[cfg(any(test, feature = "browser"))]
fn validate_upload(name: &str, mime: &str, size_bytes: f64) -> Result<(), &'static str> {
    let is_pdf =
        mime == "application/pdf" || (mime.is_empty() && name.to_ascii_lowercase().ends_with(".pdf"));
    if !is_pdf {
        return Err("Please select a PDF file.");
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err("File size must be less than 10MB.");
    }
    Ok(())
}

/// A validated file waiting for upload.
#[derive(Clone, Debug, PartialEq)]
struct PendingUpload {
    name: String,
    size_bytes: f64,
    #[cfg(feature = "browser")]
    file: web_sys::File,
}

/// Resume enhancer page.
#[component]
pub fn ResumeEnhancerPage() -> impl IntoView {
    let pending = RwSignal::new_local(None::<PendingUpload>);
    let enhanced = RwSignal::new(None::<EnhancedResume>);
    let error = RwSignal::new(String::new());
    let uploading = RwSignal::new(false);
    let drag_active = RwSignal::new(false);

    #[cfg(feature = "browser")]
    let select_file = move |file: web_sys::File| {
        match validate_upload(&file.name(), &file.type_(), file.size()) {
            Ok(()) => {
                error.set(String::new());
                pending.set(Some(PendingUpload {
                    name: file.name(),
                    size_bytes: file.size(),
                    file,
                }));
            }
            Err(message) => {
                error.set(message.to_owned());
                pending.set(None);
            }
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "browser")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                select_file(file);
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = &ev;
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(true);
    };
    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        #[cfg(feature = "browser")]
        {
            let file = ev
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                select_file(file);
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if uploading.get() {
            return;
        }
        if pending.with(|p| p.is_none()) {
            error.set("Please select a file to upload.".to_owned());
            return;
        }
        uploading.set(true);
        error.set(String::new());

        #[cfg(feature = "browser")]
        leptos::task::spawn_local(async move {
            let Some(file) = pending.with_untracked(|p| p.as_ref().map(|p| p.file.clone())) else {
                uploading.set(false);
                return;
            };
            match crate::net::enhancer::enhance(&file).await {
                Ok(result) => enhanced.set(Some(result)),
                Err(err) => error.set(err.summary()),
            }
            uploading.set(false);
        });
        #[cfg(not(feature = "browser"))]
        uploading.set(false);
    };

    let on_download = move |_| {
        let Some(id) = enhanced.with(|e| e.as_ref().map(|e| e.id)) else {
            return;
        };

        #[cfg(feature = "browser")]
        leptos::task::spawn_local(async move {
            match crate::net::enhancer::download(id).await {
                Ok(bytes) => {
                    crate::util::download::save_pdf(&bytes, &format!("enhanced_resume_{id}.pdf"));
                }
                Err(err) => error.set(err.summary()),
            }
        });
        #[cfg(not(feature = "browser"))]
        {
            let _ = id;
        }
    };

    let on_reset = move |_| {
        pending.set(None);
        enhanced.set(None);
        error.set(String::new());
    };

    view! {
        <div class="enhancer-page">
            <header class="enhancer-page__header">
                <h1>"AI Resume Enhancer"</h1>
                <p>
                    "Upload your existing resume and let our AI enhance it with better formatting, keywords, and content suggestions."
                </p>
            </header>

            <Show
                when=move || enhanced.get().is_some()
                fallback=move || {
                    view! {
                        <form class="enhancer-page__form" on:submit=on_submit>
                            <div
                                class="enhancer-page__dropzone"
                                class:enhancer-page__dropzone--active=move || drag_active.get()
                                class:enhancer-page__dropzone--selected=move || pending.with(|p| p.is_some())
                                on:dragenter=on_drag_over
                                on:dragover=on_drag_over
                                on:dragleave=on_drag_leave
                                on:drop=on_drop
                            >
                                <input
                                    class="enhancer-page__file-input"
                                    type="file"
                                    accept=".pdf"
                                    disabled=move || uploading.get()
                                    on:change=on_file_change
                                />
                                <Show
                                    when=move || pending.with(|p| p.is_some())
                                    fallback=move || {
                                        view! {
                                            <p class="enhancer-page__prompt">
                                                "Drop your resume here, or click to browse"
                                            </p>
                                            <p class="enhancer-page__hint">"PDF files only, max 10MB"</p>
                                        }
                                    }
                                >
                                    <p class="enhancer-page__file-name">
                                        {move || pending.with(|p| p.as_ref().map(|p| p.name.clone()))}
                                    </p>
                                    <p class="enhancer-page__file-size">
                                        "File size: "
                                        {move || {
                                            pending
                                                .with(|p| p.as_ref().map(|p| format_megabytes(p.size_bytes)))
                                        }}
                                    </p>
                                </Show>
                            </div>

                            <Show when=move || !error.get().is_empty()>
                                <div class="enhancer-page__error">
                                    <p>{move || error.get()}</p>
                                </div>
                            </Show>

                            <button
                                class="btn btn--primary enhancer-page__submit"
                                type="submit"
                                disabled=move || pending.with(|p| p.is_none()) || uploading.get()
                            >
                                {move || {
                                    if uploading.get() { "Enhancing Resume..." } else { "Enhance My Resume" }
                                }}
                            </button>
                        </form>

                        <div class="enhancer-page__pitch">
                            <h3>"What our AI will do:"</h3>
                            <ul>
                                <li>"Optimize formatting and layout"</li>
                                <li>"Add relevant keywords"</li>
                                <li>"Improve content structure"</li>
                                <li>"Ensure ATS compatibility"</li>
                            </ul>
                        </div>
                    }
                }
            >
                <div class="enhancer-page__result">
                    <h2>"Resume Enhanced Successfully!"</h2>
                    <p>
                        "Your resume has been enhanced with AI-powered improvements. Download your enhanced resume below."
                    </p>

                    <Show when=move || !error.get().is_empty()>
                        <div class="enhancer-page__error">
                            <p>{move || error.get()}</p>
                        </div>
                    </Show>

                    <div class="enhancer-page__result-actions">
                        <button class="btn btn--primary" on:click=on_download>
                            "Download Enhanced Resume"
                        </button>
                        <button class="btn btn--outline" on:click=on_reset>
                            "Enhance Another Resume"
                        </button>
                    </div>

                    <Show when=move || enhanced.with(|e| e.as_ref().is_some_and(|e| !e.improvements.is_empty()))>
                        <div class="enhancer-page__improvements">
                            <h3>"Improvements Made:"</h3>
                            <ul>
                                {move || {
                                    enhanced
                                        .get()
                                        .map(|result| {
                                            result
                                                .improvements
                                                .into_iter()
                                                .map(|improvement| {
                                                    view! {
                                                        <li>
                                                            <h4>{improvement.title}</h4>
                                                            <p>{improvement.description}</p>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        })
                                }}
                            </ul>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
