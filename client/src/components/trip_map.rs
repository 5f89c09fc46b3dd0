//! Interactive trip map: tiles, one marker per place, popups, zoom controls,
//! and pointer-drag panning.
//!
//! DESIGN
//! ======
//! All geometry comes from `tripmap`: the component lays places out, keeps a
//! `tripmap::scene::TripMap` per mounted instance (so a remount refits), and
//! renders the composed `MapScene` as absolutely positioned DOM nodes.
//! Marker clicks flow through `MapScene::activate`, which reports the place
//! name to `on_place_click` when one was supplied.

#[cfg(test)]
#[path = "trip_map_test.rs"]
mod trip_map_test;

use std::collections::HashSet;

use leptos::prelude::*;
use tripmap::layout::layout_builtin;
use tripmap::projection::Point;
use tripmap::scene::{MapScene, TripMap as MapModel};
use tripmap::tiles::TileSource;
use tripmap::viewport::MapSize;

use crate::components::place_popup::PlacePopup;
use crate::net::types::Place;

pub(crate) fn container_style(size: MapSize) -> String {
    format!(
        "position: relative; overflow: hidden; touch-action: none; width: {}px; height: {}px;",
        size.width, size.height
    )
}

/// Absolute placement of a `width` x `height` box with its top-left at `at`.
pub(crate) fn box_style(at: Point, (width, height): (f64, f64)) -> String {
    format!(
        "position: absolute; left: {:.1}px; top: {:.1}px; width: {width}px; height: {height}px;",
        at.x, at.y
    )
}

/// Pan offset for a pointer moving from `from` to `to`: the map follows the
/// pointer, so the view center moves the other way.
pub(crate) fn drag_offset(from: Point, to: Point) -> Point {
    from.sub(to)
}

fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

pub(crate) fn zoom_label(scene: Option<&MapScene>) -> String {
    scene.map_or_else(String::new, |s| format!("z{}", s.view.zoom))
}

#[component]
pub fn TripMap(
    /// Itinerary places; coordinates are recomputed by layout.
    #[prop(into)]
    places: Signal<Vec<Place>>,
    /// Selected `place_name`s.
    #[prop(into)]
    selected: Signal<HashSet<String>>,
    /// Receives the place name of a clicked marker.
    #[prop(optional)]
    on_place_click: Option<Callback<String>>,
    #[prop(optional)] size: Option<MapSize>,
    /// Tile server; OpenStreetMap when omitted.
    #[prop(optional)]
    tiles: Option<TileSource>,
) -> impl IntoView {
    let size = size.unwrap_or_default();
    let mut map = MapModel::new(size).starting_at(&layout_builtin(&places.get_untracked()));
    if let Some(source) = tiles {
        map = map.with_source(source);
    }
    let model = StoredValue::new(map);
    // Bumped after zoom or pan so the scene recomposes.
    let view_rev = RwSignal::new(0_u32);
    let drag_from = StoredValue::new(None::<Point>);
    let open_popup = RwSignal::new(None::<String>);

    let placed = Memo::new(move |_| layout_builtin(&places.get()));
    let scene = Memo::new(move |_| {
        view_rev.track();
        let placed = placed.get();
        let selected = selected.get();
        model.try_update_value(|map| {
            map.sync(&placed);
            map.scene(&placed, &selected)
        })
    });

    // A popup for a place that left the list closes with it.
    Effect::new(move || {
        let Some(name) = open_popup.get() else {
            return;
        };
        if scene.with(|s| s.as_ref().is_none_or(|s| s.marker(&name).is_none())) {
            open_popup.set(None);
        }
    });

    let activate = move |name: String| {
        let forward = on_place_click.map(|cb| move |place_name: &str| cb.run(place_name.to_owned()));
        let handler = forward.as_ref().map(|f| f as &dyn Fn(&str));
        let found = scene.with_untracked(|s| s.as_ref().is_some_and(|s| s.activate(&name, handler)));
        if found {
            open_popup.set(Some(name));
        }
    };

    let zoom_by = move |delta: i8| {
        model.update_value(|map| {
            if delta > 0 { map.zoom_in() } else { map.zoom_out() }
        });
        view_rev.update(|rev| *rev += 1);
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        drag_from.set_value(Some(pointer_point(&ev)));
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let Some(from) = drag_from.get_value() else {
            return;
        };
        let to = pointer_point(&ev);
        let offset = drag_offset(from, to);
        if offset == Point::default() {
            return;
        }
        drag_from.set_value(Some(to));
        model.update_value(|map| map.pan_by(offset));
        view_rev.update(|rev| *rev += 1);
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        drag_from.set_value(None);
    };

    view! {
        <div
            class="trip-map"
            style=container_style(size)
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
            on:pointerleave=on_pointer_up
        >
            <div class="trip-map__tiles">
                {move || {
                    scene
                        .get()
                        .map(|s| {
                            s.tiles
                                .into_iter()
                                .map(|tile| {
                                    view! {
                                        <img
                                            class="trip-map__tile"
                                            src=tile.url
                                            alt=""
                                            draggable="false"
                                            style=box_style(tile.screen, (256.0, 256.0))
                                        />
                                    }
                                })
                                .collect_view()
                        })
                }}
            </div>
            <div class="trip-map__markers">
                {move || {
                    scene
                        .get()
                        .map(|s| {
                            s.markers
                                .into_iter()
                                .map(|sm| {
                                    let icon = sm.marker.icon();
                                    let name = sm.marker.place_name.clone();
                                    let class = format!(
                                        "trip-map__marker trip-map__marker--{}",
                                        sm.marker.variant.as_str(),
                                    );
                                    view! {
                                        <img
                                            class="trip-map__shadow"
                                            src=icon.shadow_url
                                            alt=""
                                            draggable="false"
                                            style=box_style(sm.icon_origin, icon.shadow_size)
                                        />
                                        <img
                                            class=class
                                            src=icon.icon_url
                                            draggable="false"
                                            alt=name.clone()
                                            title=name.clone()
                                            style=box_style(sm.icon_origin, icon.icon_size)
                                            on:click=move |_| activate(name.clone())
                                        />
                                    }
                                })
                                .collect_view()
                        })
                }}
            </div>
            {move || {
                let name = open_popup.get()?;
                let current = scene.get()?;
                let sm = current.marker(&name)?.clone();
                let tip = sm.marker.icon().popup_tip(sm.anchor);
                Some(
                    view! {
                        <PlacePopup
                            content=sm.marker.popup
                            tip=tip
                            on_close=Callback::new(move |()| open_popup.set(None))
                        />
                    },
                )
            }}
            <div class="trip-map__zoom">
                <button class="trip-map__zoom-in" title="Zoom in" on:click=move |_| zoom_by(1)>
                    "+"
                </button>
                <button class="trip-map__zoom-out" title="Zoom out" on:click=move |_| zoom_by(-1)>
                    "−"
                </button>
                <span class="trip-map__zoom-level">{move || zoom_label(scene.get().as_ref())}</span>
            </div>
            <div
                class="trip-map__attribution"
                inner_html=move || scene.get().map(|s| s.attribution).unwrap_or_default()
            ></div>
        </div>
    }
}
