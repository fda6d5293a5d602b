use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::page::page;
use climbunity_core::entities::*;

pub fn new_venue(username: &str, flash: Option<FlashMessage>) -> Markup {
    page(
        "New Venue",
        Some(username),
        flash,
        html! {
            h2 { "Add a venue" }
            (venue_form("/new_venue", None))
        },
    )
}

fn venue_form(action: &str, venue: Option<&Venue>) -> Markup {
    html! {
        form class="venue" action=(action) method="POST" {
            fieldset {
                label {
                    "Venue Name:"
                    br;
                    input type="text" name="name"
                        value=(venue.map(|v| v.name.as_str()).unwrap_or(""))
                        required maxlength="80";
                }
                br;
                label {
                    "Address:"
                    br;
                    input type="text" name="address"
                        value=(venue.map(|v| v.address.as_str()).unwrap_or(""))
                        required maxlength="80";
                }
                br;
                label {
                    "Hours of Operation:"
                    br;
                    input type="text" name="open_hours"
                        value=(venue.and_then(|v| v.opening_hours.as_deref()).unwrap_or(""))
                        maxlength="500";
                }
                br;
                label {
                    "Description:"
                    br;
                    input type="text" name="description"
                        value=(venue.and_then(|v| v.description.as_deref()).unwrap_or(""))
                        maxlength="500";
                }
                br;
                input type="submit" value="Submit";
            }
        }
    }
}

pub fn venue_detail(
    username: Option<&str>,
    flash: Option<FlashMessage>,
    venue: &Venue,
    routes: &[Route],
) -> Markup {
    page(
        &venue.name,
        username,
        flash,
        html! {
            div class="details venue" {
                h2 { (venue.name) }
                p class="address" { (venue.address) }
                @if let Some(ref hours) = venue.opening_hours {
                    h4 { "Hours" }
                    p { (hours) }
                }
                @if let Some(ref description) = venue.description {
                    p class="description" { (description) }
                }
            }
            div class="routes" {
                h3 { "Routes" }
                @if routes.is_empty() {
                    p class="no-results" { "No routes have been set here yet." }
                } @else {
                    ul class="route-list" {
                        @for r in routes {
                            li {
                                a href=(format!("/route/{}", r.id)) { (r.name) }
                                " "
                                span class="grade" { (r.grade) }
                                @if username.is_some() {
                                    form class="inline" action=(format!("/delete_route/{}", r.id)) method="POST" {
                                        input type="submit" value="delete route";
                                    }
                                }
                            }
                        }
                    }
                }
            }
            @if username.is_some() {
                div class="manage" {
                    h3 { "Edit venue" }
                    (venue_form(&format!("/venue/{}", venue.id), Some(venue)))
                    form class="delete" action=(format!("/delete_venue/{}", venue.id)) method="POST" {
                        input type="submit" value="delete venue";
                    }
                }
            }
        },
    )
}
