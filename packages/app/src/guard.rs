//! Route guard: keeps each section of the app reachable only in the right
//! session state.
//!
//! The policy is a pure function over the route's class and the session
//! state, so it is testable without a renderer. The `RouteGuard` layout
//! component re-evaluates it on every navigation and session change.

use dioxus::prelude::*;

use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::session::{use_session, SessionState};

/// Coarse location classes the redirect policy operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Landing and other screens open to everyone.
    Public,
    /// Login and the rest of the sign-in flow.
    Auth,
    /// The phone-verification screen.
    VerifyPhone,
    /// Screens requiring a fully verified, authenticated user.
    Protected,
}

/// Where the guard sends the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Landing,
    Login,
    VerifyPhone,
    Home,
}

impl Destination {
    /// Class of the screen this destination lands on.
    pub fn class(self) -> RouteClass {
        match self {
            Destination::Landing => RouteClass::Public,
            Destination::Login => RouteClass::Auth,
            Destination::VerifyPhone => RouteClass::VerifyPhone,
            Destination::Home => RouteClass::Protected,
        }
    }

    fn route(self) -> Route {
        match self {
            Destination::Landing => Route::Landing {},
            Destination::Login => Route::Login {},
            Destination::VerifyPhone => Route::VerifyPhone {},
            Destination::Home => Route::Trips {},
        }
    }
}

/// The redirect policy.
///
/// No decision is made while the initial credential check is still loading.
/// Idempotent: applied to its own destination, the policy yields `None`.
pub fn redirect_for(
    class: RouteClass,
    state: &SessionState,
    loading: bool,
) -> Option<Destination> {
    if loading {
        return None;
    }

    if !state.is_authenticated() {
        return match class {
            RouteClass::Protected => Some(Destination::Landing),
            // Nothing to verify without an account.
            RouteClass::VerifyPhone => Some(Destination::Login),
            RouteClass::Public | RouteClass::Auth => None,
        };
    }

    if state.needs_phone_verification() {
        return (class != RouteClass::VerifyPhone).then_some(Destination::VerifyPhone);
    }

    match class {
        RouteClass::Protected => None,
        _ => Some(Destination::Home),
    }
}

/// Top-level layout applying the redirect policy to every route.
#[component]
pub fn RouteGuard() -> Element {
    let session = use_session();
    let route = use_route::<Route>();
    let navigator = use_navigator();

    if *session.loading.read() {
        return rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-50",
                LoadingSpinner {}
            }
        };
    }

    let state = session.state.read().clone();
    if let Some(destination) = redirect_for(route.class(), &state, false) {
        navigator.replace(destination.route());
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSES: [RouteClass; 4] = [
        RouteClass::Public,
        RouteClass::Auth,
        RouteClass::VerifyPhone,
        RouteClass::Protected,
    ];

    fn states() -> Vec<SessionState> {
        vec![
            SessionState::signed_out(),
            SessionState::signed_in("42", true),
            SessionState::signed_in("42", false),
        ]
    }

    #[test]
    fn test_signed_out_protected_goes_to_landing() {
        let state = SessionState::signed_out();
        assert_eq!(
            redirect_for(RouteClass::Protected, &state, false),
            Some(Destination::Landing)
        );
    }

    #[test]
    fn test_signed_out_verify_phone_goes_to_login() {
        let state = SessionState::signed_out();
        assert_eq!(
            redirect_for(RouteClass::VerifyPhone, &state, false),
            Some(Destination::Login)
        );
    }

    #[test]
    fn test_signed_out_public_and_auth_stay_put() {
        let state = SessionState::signed_out();
        assert_eq!(redirect_for(RouteClass::Public, &state, false), None);
        assert_eq!(redirect_for(RouteClass::Auth, &state, false), None);
    }

    #[test]
    fn test_pending_verification_forces_verify_screen() {
        let state = SessionState::signed_in("42", true);
        for class in CLASSES {
            let expected = if class == RouteClass::VerifyPhone {
                None
            } else {
                Some(Destination::VerifyPhone)
            };
            assert_eq!(redirect_for(class, &state, false), expected, "{class:?}");
        }
    }

    #[test]
    fn test_verified_user_is_sent_home_from_everywhere_else() {
        let state = SessionState::signed_in("42", false);
        assert_eq!(
            redirect_for(RouteClass::Public, &state, false),
            Some(Destination::Home)
        );
        assert_eq!(
            redirect_for(RouteClass::Auth, &state, false),
            Some(Destination::Home)
        );
        assert_eq!(
            redirect_for(RouteClass::VerifyPhone, &state, false),
            Some(Destination::Home)
        );
        assert_eq!(redirect_for(RouteClass::Protected, &state, false), None);
    }

    #[test]
    fn test_no_redirect_while_loading() {
        for state in states() {
            for class in CLASSES {
                assert_eq!(redirect_for(class, &state, true), None);
            }
        }
    }

    /// Re-running the policy against its own destination must never produce
    /// a second redirect, for every class and state combination.
    #[test]
    fn test_policy_is_idempotent() {
        for state in states() {
            for class in CLASSES {
                if let Some(destination) = redirect_for(class, &state, false) {
                    assert_eq!(
                        redirect_for(destination.class(), &state, false),
                        None,
                        "redirect loop from {class:?} via {destination:?} in {state:?}"
                    );
                }
            }
        }
    }
}
