//! Sign-in / sign-up page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mode comes from `?mode=login|signup` (default login). Local checks only
//! cover empty fields and password confirmation; everything else, including
//! password rules, is the identity provider's call and its message is shown
//! as-is.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::{AuthResponse, SignUpRequest};
use crate::state::auth::AuthState;
use crate::util::auth::should_leave_auth_page;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    /// Anything other than `signup` means login.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("signup") => Self::Signup,
            _ => Self::Login,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Welcome Back",
            Self::Signup => "Create Account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Signup => "Sign Up",
        }
    }

    pub fn switch_prompt(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account? Sign up",
            Self::Signup => "Already have an account? Sign in",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub phone: String,
    pub date_of_birth: String,
}

impl AuthForm {
    pub fn sign_up_request(&self) -> SignUpRequest {
        SignUpRequest {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            full_name: self.full_name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            date_of_birth: self.date_of_birth.trim().to_owned(),
        }
    }
}

/// Local form checks run before any network call.
///
/// # Errors
///
/// Returns the message to show when a check fails.
pub fn validate(mode: AuthMode, form: &AuthForm) -> Result<(), &'static str> {
    if form.email.trim().is_empty() || form.password.is_empty() {
        return Err("Please fill in all fields");
    }
    if mode == AuthMode::Signup && form.password != form.confirm_password {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Message carried to the trip page after a successful submit.
pub fn success_notice(mode: AuthMode, response: &AuthResponse) -> &'static str {
    match (mode, response.session.is_some()) {
        (AuthMode::Login, _) => "Welcome back!",
        (AuthMode::Signup, true) => "Account created successfully!",
        (AuthMode::Signup, false) => "Account created. Check your email to confirm it, then sign in.",
    }
}

pub fn failure_message(raw: String) -> String {
    if raw.trim().is_empty() { "An error occurred".to_owned() } else { raw }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let mode = Memo::new(move |_| AuthMode::from_query(query.with(|q| q.get("mode")).as_deref()));

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let date_of_birth = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = Memo::new(move |_| auth.with(|s| s.loading));

    // Signed in (now or already): go to the trip page.
    Effect::new(move || {
        if should_leave_auth_page(&auth.get()) {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = mode.get();
        let form = AuthForm {
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            full_name: full_name.get(),
            phone: phone.get(),
            date_of_birth: date_of_birth.get(),
        };
        if let Err(msg) = validate(current, &form) {
            message.set(msg.to_owned());
            return;
        }
        auth.update(AuthState::begin_request);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match current {
                AuthMode::Login => crate::net::api::sign_in(form.email.trim(), &form.password).await,
                AuthMode::Signup => crate::net::api::sign_up(&form.sign_up_request()).await,
            };
            match result {
                Ok(response) => {
                    let notice = success_notice(current, &response);
                    log::info!("{} succeeded", current.as_str());
                    if response.session.is_none() {
                        message.set(notice.to_owned());
                    }
                    auth.update(|state| {
                        state.notice = Some(notice.to_owned());
                        state.apply_auth_response(response);
                    });
                }
                Err(e) => {
                    auth.update(AuthState::request_failed);
                    message.set(failure_message(e));
                }
            }
        });
    };

    let is_signup = move || mode.get() == AuthMode::Signup;

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href="/" class="auth-card__close" title="Back to trip">"×"</a>
                <h1>{move || mode.get().title()}</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">"Email"</label>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-label">"Password"</label>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=is_signup>
                        <label class="auth-label">"Confirm Password"</label>
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                        <label class="auth-label">"Full Name (optional)"</label>
                        <input
                            class="auth-input"
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                        <label class="auth-label">"Phone (optional)"</label>
                        <input
                            class="auth-input"
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                        <label class="auth-label">"Date of Birth (optional)"</label>
                        <input
                            class="auth-input"
                            type="date"
                            prop:value=move || date_of_birth.get()
                            on:input=move |ev| date_of_birth.set(event_target_value(&ev))
                        />
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Loading..." } else { mode.get().submit_label() }}
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message">{move || message.get()}</p>
                </Show>
                <a
                    class="auth-switch"
                    href=move || format!("/auth?mode={}", mode.get().toggled().as_str())
                >
                    {move || mode.get().switch_prompt()}
                </a>
            </div>
        </div>
    }
}
