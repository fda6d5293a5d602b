use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::page::page;
use climbunity_core::entities::*;

pub fn home(
    username: Option<&str>,
    flash: Option<FlashMessage>,
    venues: &[Venue],
    routes: &[Route],
    version: &str,
) -> Markup {
    page(
        "Climbunity",
        username,
        flash,
        html! {
            div class="home" {
                h1 { "Climbunity" }
                p { "Find venues, log your sends and meet other climbers." }
            }
            div class="venues" {
                h3 { "Venues" }
                @if venues.is_empty() {
                    p class="no-results" { "No venues yet." }
                } @else {
                    ul class="venue-list" {
                        @for v in venues {
                            li {
                                a href=(format!("/venue/{}", v.id)) { (v.name) }
                                " "
                                span class="address" { (v.address) }
                            }
                        }
                    }
                }
            }
            div class="routes" {
                h3 { "Routes" }
                @if routes.is_empty() {
                    p class="no-results" { "No routes yet." }
                } @else {
                    ul class="route-list" {
                        @for r in routes {
                            li {
                                a href=(format!("/route/{}", r.id)) { (r.name) }
                                " "
                                span class="grade" { (r.grade) }
                            }
                        }
                    }
                }
            }
            footer {
                p { small { "v" (version) } }
            }
        },
    )
}
