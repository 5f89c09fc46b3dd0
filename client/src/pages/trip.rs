//! Trip page: city picker, interactive map, and place list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing route. It needs no sign-in; the header only reflects the
//! in-memory session and offers sign-in / sign-out.

#[cfg(test)]
#[path = "trip_test.rs"]
mod trip_test;

use leptos::prelude::*;
use tripmap::cities::CityCatalog;

use crate::components::place_list::PlaceList;
use crate::components::trip_map::TripMap;
use crate::net::types::CitySummary;
use crate::state::auth::{AuthChange, AuthState};
use crate::state::trip::TripState;
use crate::util::auth::on_auth_state_change;

/// "chikmagalur" -> "Chikmagalur".
pub fn city_label(key: &str) -> String {
    let mut chars = key.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// City keys for the picker: the server's list, or the built-in catalog
/// until it arrives.
pub fn city_options(fetched: &[CitySummary]) -> Vec<String> {
    if fetched.is_empty() {
        CityCatalog::builtin().keys().map(str::to_owned).collect()
    } else {
        fetched.iter().map(|c| c.key.clone()).collect()
    }
}

pub fn selection_summary(selected: usize, total: usize, loading: bool) -> String {
    match (selected, total) {
        (_, 0) if loading => "Loading places...".to_owned(),
        (_, 0) => "No places for this city yet".to_owned(),
        (0, _) => format!("{total} places"),
        _ => format!("{selected} of {total} selected"),
    }
}

#[component]
pub fn TripPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let trip = expect_context::<RwSignal<TripState>>();

    let notice = RwSignal::new(auth.try_update(AuthState::take_notice).flatten());

    // Auth-state watcher: log changes, clear the selection on sign-out.
    let subscription = on_auth_state_change(
        auth,
        move |change, #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))] session| {
            #[cfg(feature = "hydrate")]
            log::info!("auth state change: {} (session: {})", change.as_str(), session.is_some());
            if change == AuthChange::SignedOut {
                trip.update(TripState::clear_selection);
                notice.set(None);
            }
        },
    );
    on_cleanup(move || subscription.unsubscribe());

    // Refresh the cached user behind an existing session once per mount.
    #[cfg(feature = "hydrate")]
    if let Some(token) = auth.with_untracked(|s| s.access_token().map(str::to_owned)) {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_current_user(&token).await {
                Some(user) => {
                    auth.update(|s| {
                        s.user_updated(user);
                    });
                }
                None => log::warn!("session token rejected by /api/auth/me"),
            }
        });
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_cities().await {
            Ok(cities) => trip.update(|t| t.cities = cities),
            Err(e) => log::warn!("city list unavailable: {e}"),
        }
    });

    let city = Memo::new(move |_| trip.with(|t| t.city.clone()));
    Effect::new(move || {
        #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
        let city = city.get();
        trip.update(TripState::begin_fetch);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_places(&city).await;
            trip.update(|t| {
                if t.city != city {
                    return;
                }
                match result {
                    Ok(places) => t.set_places(places),
                    Err(e) => t.set_error(e),
                }
            });
        });
    });

    let places = Signal::derive(move || trip.with(|t| t.places.clone()));
    let selected = Signal::derive(move || trip.with(|t| t.selected.clone()));
    let on_toggle = Callback::new(move |name: String| {
        trip.update(|t| {
            t.toggle(&name);
        });
    });

    let on_sign_out = move |_| {
        #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
        let Some(token) = auth.with_untracked(|s| s.access_token().map(str::to_owned)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::sign_out(&token).await {
                log::warn!("sign out failed: {e}");
            }
            auth.update(|s| {
                s.sign_out();
            });
        });
    };

    view! {
        <div class="trip-page">
            <header class="trip-header">
                <h1 class="trip-header__title">"Trip Planner"</h1>
                <select
                    class="trip-header__city"
                    prop:value=move || city.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        trip.update(|t| {
                            t.set_city(&value);
                        });
                    }
                >
                    {move || {
                        trip.with(|t| city_options(&t.cities))
                            .into_iter()
                            .map(|key| {
                                let label = city_label(&key);
                                view! { <option value=key>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <div class="trip-header__account">
                    <Show
                        when=move || auth.with(AuthState::is_signed_in)
                        fallback=|| {
                            view! {
                                <a class="trip-header__link" href="/auth?mode=login">"Sign In"</a>
                                <a class="trip-header__link" href="/auth?mode=signup">"Sign Up"</a>
                            }
                        }
                    >
                        <span class="trip-header__user">
                            {move || {
                                auth.with(|s| s.user.as_ref().map(|u| u.display_name().to_owned()))
                                    .unwrap_or_default()
                            }}
                        </span>
                        <button class="trip-header__link" on:click=on_sign_out>"Sign Out"</button>
                    </Show>
                </div>
            </header>
            <Show when=move || notice.get().is_some()>
                <p class="trip-notice" on:click=move |_| notice.set(None)>
                    {move || notice.get().unwrap_or_default()}
                </p>
            </Show>
            <Show when=move || trip.with(|t| t.error.is_some())>
                <p class="trip-error">{move || trip.with(|t| t.error.clone()).unwrap_or_default()}</p>
            </Show>
            <main class="trip-body">
                <TripMap places=places selected=selected on_place_click=on_toggle/>
                <aside class="trip-sidebar">
                    <p class="trip-sidebar__summary">
                        {move || trip.with(|t| selection_summary(t.selected.len(), t.places.len(), t.loading))}
                    </p>
                    <PlaceList places=places selected=selected on_toggle=on_toggle/>
                </aside>
            </main>
        </div>
    }
}
