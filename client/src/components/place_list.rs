//! Side list of itinerary places with select toggles.

#[cfg(test)]
#[path = "place_list_test.rs"]
mod place_list_test;

use std::collections::HashSet;

use leptos::prelude::*;

use crate::net::types::Place;

/// Reactive "is `name` selected" check. Each row binds one per attribute.
pub(crate) fn selected_check(
    selected: Signal<HashSet<String>>,
    name: String,
) -> impl Fn() -> bool + Send + Sync + 'static {
    move || selected.with(|s| s.contains(&name))
}

#[component]
pub fn PlaceList(
    #[prop(into)] places: Signal<Vec<Place>>,
    #[prop(into)] selected: Signal<HashSet<String>>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <ul class="place-list">
            <For
                each=move || places.get()
                key=|place| place.place_name.clone()
                children=move |place| {
                    let name = place.place_name.clone();
                    let row_selected = selected_check(selected, name.clone());
                    let box_checked = selected_check(selected, name.clone());
                    let rating = format!("★ {}", place.rating);
                    view! {
                        <li class="place-list__item" class:place-list__item--selected=row_selected>
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=box_checked
                                    on:change=move |_| on_toggle.run(name.clone())
                                />
                                <span class="place-list__name">{place.place_name}</span>
                            </label>
                            <span class="place-list__category">{place.category}</span>
                            <span class="place-list__rating">{rating}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
