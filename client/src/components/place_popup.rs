//! Marker popup: place title, description, category and rating.

use leptos::prelude::*;
use tripmap::marker::PopupContent;
use tripmap::projection::Point;

/// Popup box anchored so its bottom-center sits on `tip`.
#[component]
pub fn PlacePopup(content: PopupContent, tip: Point, on_close: Callback<()>) -> impl IntoView {
    let style = format!(
        "position: absolute; left: {:.1}px; top: {:.1}px; transform: translate(-50%, -100%);",
        tip.x, tip.y
    );
    let rating = content.rating_label();
    view! {
        <div class="place-popup" style=style>
            <button class="place-popup__close" title="Close" on:click=move |_| on_close.run(())>
                "×"
            </button>
            <h3 class="place-popup__title">{content.title}</h3>
            <p class="place-popup__description">{content.description}</p>
            <div class="place-popup__meta">
                <span class="place-popup__category">{content.category}</span>
                <span class="place-popup__rating">{rating}</span>
            </div>
        </div>
    }
}
