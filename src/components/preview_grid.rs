use leptos::prelude::*;

use crate::preview::EntryId;
use crate::services::preview_service::use_preview_state;

/// Container holding one tile per entry of the current selection.
#[component]
pub fn PreviewGrid() -> impl IntoView {
    let state = use_preview_state();

    let tiles = move || {
        state.board.with(|board| {
            board
                .entries()
                .iter()
                .map(|entry| (entry.id, entry.file_name.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div id="image-container" class="image-container flex flex-wrap gap-3">
            <For
                each=tiles
                key=|(id, _)| *id
                children=move |(id, file_name)| view! { <PreviewTile id=id file_name=file_name /> }
            />
        </div>
    }
}

/// One thumbnail. Its image source follows the board entry with the same id,
/// so reads finishing in any order land on the right tile.
#[component]
pub fn PreviewTile(
    id: EntryId,
    #[prop(into)]
    file_name: String,
) -> impl IntoView {
    let state = use_preview_state();

    let source = Memo::new(move |_| {
        state.board.with(|board| board.entry(id).map(|entry| entry.source.clone()))
    });

    let src = move || source.get().and_then(|s| s.src().map(String::from));
    let pending = move || source.get().is_some_and(|s| s.is_pending());

    let base_class = "image-wrapper w-32 h-32 rounded overflow-hidden bg-gray-800 border border-gray-700";
    let tile_class = move || {
        if pending() {
            format!("{base_class} animate-pulse")
        } else {
            base_class.to_string()
        }
    };

    view! {
        <div
            class=tile_class
            data-entry-id=id.value().to_string()
        >
            <img class="w-full h-full object-cover" src=src alt=file_name.clone() title=file_name />
        </div>
    }
}
