//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AppLayout;
use crate::guard::{RouteClass, RouteGuard};
use crate::pages::auth::{Login, VerifyPhone};
use crate::pages::member::{Board, Chat, ChatRoom, Profile, TripDetail, Trips};
use crate::pages::public::Landing;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(RouteGuard)]
        // Public routes
        #[route("/")]
        Landing {},

        // Auth flow
        #[route("/login")]
        Login {},

        #[route("/verify-phone")]
        VerifyPhone {},

        // Protected routes
        #[nest("/app")]
            #[layout(AppLayout)]
                #[route("/trips")]
                Trips {},

                #[route("/trips/:id")]
                TripDetail { id: String },

                #[route("/board")]
                Board {},

                #[route("/chat")]
                Chat {},

                #[route("/chat/:id")]
                ChatRoom { id: String },

                #[route("/profile")]
                Profile {},
}

impl Route {
    /// Location class the redirect policy operates on.
    pub fn class(&self) -> RouteClass {
        match self {
            Route::Landing {} => RouteClass::Public,
            Route::Login {} => RouteClass::Auth,
            Route::VerifyPhone {} => RouteClass::VerifyPhone,
            Route::Trips {}
            | Route::TripDetail { .. }
            | Route::Board {}
            | Route::Chat {}
            | Route::ChatRoom { .. }
            | Route::Profile {} => RouteClass::Protected,
        }
    }
}
