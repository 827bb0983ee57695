use crate::error::AppError;
use dioxus::prelude::*;
use gallery_state::{GalleryLoader, GalleryState, ImageRecord};

/// Static gallery payload, served by `dx serve` alongside the app bundle
const GALLERY_SOURCE_URL: &str = "http://localhost:8080/assets/gallery.json";

/// The gallery page: selection header, loading/error states, and the
/// display-order grid with drag-and-drop reordering
///
/// All gallery data lives in a single [`GalleryState`] signal and is only
/// mutated through its operations; this component re-derives its view after
/// each one. The drag signals below are pure gesture bookkeeping: a drop is
/// translated into exactly one `reorder` call once it is finalized.
#[component]
pub fn GalleryScreen() -> Element {
    let mut state = use_signal(GalleryState::new);
    let mut load_error = use_signal(|| None::<String>);
    let mut dragged_id = use_signal(|| None::<i64>);
    let mut drop_target_id = use_signal(|| None::<i64>);

    let mut reload = move || {
        // In-flight guard: a second load request is skipped entirely.
        if !state.write().begin_load() {
            return;
        }
        load_error.set(None);
        spawn(async move {
            let result = GalleryLoader::new(GALLERY_SOURCE_URL).load().await;
            if let Err(e) = state.write().complete_load(result) {
                let err = AppError::from(e);
                log::error!("{}", err);
                load_error.set(Some(err.user_message()));
            }
        });
    };

    // Load on mount
    use_effect(move || {
        reload();
    });

    // Finalize a drop: resolve the dragged and target records to natural
    // order indices and emit one reorder. A drag whose endpoints no longer
    // resolve (record deleted mid-gesture, drop outside any tile) is a no-op.
    let mut finish_drop = move || {
        let source_id = dragged_id();
        let target_id = drop_target_id();
        dragged_id.set(None);
        drop_target_id.set(None);

        let (Some(source_id), Some(target_id)) = (source_id, target_id) else {
            return;
        };
        if source_id == target_id {
            return;
        }

        let mut gallery = state.write();
        let Some(source) = gallery.records().iter().position(|r| r.id == source_id) else {
            return;
        };
        let Some(dest) = gallery.records().iter().position(|r| r.id == target_id) else {
            return;
        };
        let into_featured_slot = gallery.records()[dest].featured;
        gallery.reorder(source, dest, into_featured_slot);
    };

    let selected = state.read().selection_count();
    let loading = state.read().is_loading();
    let view: Vec<ImageRecord> = state.read().ordered_view().cloned().collect();

    rsx! {
        // Header: title, or selection count plus the delete action
        div { style: "display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid #e0e0e0; margin-bottom: 32px; padding-bottom: 16px;",
            if selected > 0 {
                div { style: "display: flex; align-items: center; gap: 8px;",
                    input { r#type: "checkbox", checked: true, readonly: true }
                    label { style: "font-size: 18px; font-weight: 700; color: #333;",
                        if selected > 1 {
                            "{selected} Files Selected"
                        } else {
                            "{selected} File Selected"
                        }
                    }
                }
                button {
                    style: "background: none; border: none; color: #cc0000; font-size: 16px; font-weight: 500; cursor: pointer;",
                    onclick: move |_| state.write().delete_selected(),
                    if selected > 1 {
                        "Delete Files"
                    } else {
                        "Delete File"
                    }
                }
            } else {
                p { style: "font-size: 18px; font-weight: 700; color: #333; margin: 0;",
                    "Gallery"
                }
            }
        }

        if loading {
            p { style: "font-size: 18px; padding-bottom: 16px;", "Loading..." }
        }

        if let Some(message) = load_error() {
            div { style: "display: flex; align-items: center; gap: 12px; background: #ffe6e6; border: 1px solid #f5b5b5; border-radius: 8px; padding: 12px 16px; margin-bottom: 16px; color: #a00;",
                span { "{message}" }
                button {
                    style: "padding: 6px 12px; border: 1px solid #a00; border-radius: 6px; background: white; color: #a00; cursor: pointer;",
                    onclick: move |_| reload(),
                    "Retry"
                }
            }
        }

        div { class: "grid-gallery",
            for record in view {
                GalleryTile {
                    key: "{record.id}",
                    checked: state.read().is_selected(record.id),
                    is_drop_target: drop_target_id() == Some(record.id),
                    record,
                    on_toggle: move |(id, checked)| state.write().set_selected(id, checked),
                    on_drag_start: move |id| dragged_id.set(Some(id)),
                    on_drag_enter: move |id| drop_target_id.set(Some(id)),
                    on_drag_leave: move |_| drop_target_id.set(None),
                    on_drop: move |_| finish_drop(),
                }
            }

            if !loading {
                div { class: "add-tile",
                    p { style: "font-size: 20px; font-weight: 500; margin: 0;", "Add Image" }
                }
            }
        }
    }
}

/// A single gallery tile: image, hover checkbox, drag handlers
///
/// The featured record renders in the enlarged slot via the `featured`
/// class; everything else about the tile is identical.
#[component]
fn GalleryTile(
    record: ImageRecord,
    checked: bool,
    is_drop_target: bool,
    on_toggle: EventHandler<(i64, bool)>,
    on_drag_start: EventHandler<i64>,
    on_drag_enter: EventHandler<i64>,
    on_drag_leave: EventHandler<()>,
    on_drop: EventHandler<()>,
) -> Element {
    let id = record.id;
    let class = if record.featured {
        "tile featured"
    } else {
        "tile"
    };
    let highlight = if is_drop_target {
        "outline: 3px dashed #0066cc; outline-offset: -3px;"
    } else {
        ""
    };

    rsx! {
        div {
            class: "{class}",
            style: "{highlight}",
            draggable: "true",
            ondragstart: move |_| on_drag_start.call(id),
            ondragenter: move |evt| {
                evt.prevent_default();
                on_drag_enter.call(id);
            },
            ondragover: move |evt| evt.prevent_default(),
            ondragleave: move |_| on_drag_leave.call(()),
            ondrop: move |evt| {
                evt.prevent_default();
                on_drop.call(());
            },
            div { class: "checkbox-area",
                input {
                    r#type: "checkbox",
                    checked,
                    onchange: move |evt| on_toggle.call((id, evt.checked())),
                }
            }
            img { src: "{record.image}", alt: "gallery" }
            div { class: "overlay" }
        }
    }
}
