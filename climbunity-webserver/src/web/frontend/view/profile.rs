use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::{appointment_list, page::page, style_checkboxes};
use climbunity_core::entities::*;

pub fn all_users(username: Option<&str>, users: &[User]) -> Markup {
    page(
        "Climbers",
        username,
        None,
        html! {
            main {
                h3 { "Climbers" }
                @if users.is_empty() {
                    p class="no-results" { "Nobody has signed up yet." }
                } @else {
                    ul class="user-list" {
                        @for u in users {
                            li {
                                a href=(format!("/profile/{}", u.id)) { (u.username) }
                            }
                        }
                    }
                }
            }
        },
    )
}

#[allow(clippy::too_many_arguments)]
pub fn user_profile(
    username: Option<&str>,
    flash: Option<FlashMessage>,
    user: &User,
    ascents: &[Ascent],
    ascended_routes: &[Route],
    projects: &[Route],
    appointments: &[(Appointment, Venue)],
    is_own_profile: bool,
) -> Markup {
    page(
        &user.username,
        username,
        flash,
        html! {
            div class="details profile" {
                h2 { (user.username) }
                p class="name" { (user.full_name()) }
                p class="address" { (user.address) }
                p class="gear" {
                    @if user.has_gear { "Brings their own gear." } @else { "Borrows gear." }
                }
                @if !user.styles.is_empty() {
                    h4 { "Climbs" }
                    ul class="styles" {
                        @for s in &user.styles {
                            li { (s) }
                        }
                    }
                }
                @if is_own_profile {
                    a href=(format!("/edit_profile/{}", user.id)) { "edit profile" }
                }
            }
            div class="ascents" {
                h3 { "Ascents" }
                @if ascents.is_empty() {
                    p class="no-results" { "No ascents logged yet." }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "Route"  }
                                th { "Date"   }
                                th { "Type"   }
                                th { "Rating" }
                            }
                        }
                        tbody {
                            @for (ascent, route) in ascents.iter().zip(ascended_routes) {
                                tr {
                                    td {
                                        a href=(format!("/route/{}", route.id)) { (route.name) }
                                    }
                                    td { (format_date(ascent.sent_on)) }
                                    td { (ascent.send_type.label()) }
                                    td { (ascent.rating) }
                                    @if is_own_profile {
                                        td {
                                            form class="inline" action=(format!("/delete_ascent/{}", ascent.id)) method="POST" {
                                                input type="submit" value="delete";
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div class="projects" {
                h3 { "Project list" }
                @if projects.is_empty() {
                    p class="no-results" { "No projects yet." }
                } @else {
                    ul class="route-list" {
                        @for route in projects {
                            li {
                                a href=(format!("/route/{}", route.id)) { (route.name) }
                                " "
                                span class="grade" { (route.grade) }
                                @if is_own_profile {
                                    form class="inline" action=(format!("/remove_from_project_list/{}", route.id)) method="POST" {
                                        input type="submit" value="remove";
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div class="appointments" {
                h3 { "Appointments" }
                (appointment_list(appointments, username))
            }
        },
    )
}

pub fn edit_profile(flash: Option<FlashMessage>, user: &User, styles: &[Style]) -> Markup {
    page(
        "Edit Profile",
        Some(&user.username),
        flash,
        html! {
            h2 { "Edit your profile" }
            form class="profile" action=(format!("/edit_profile/{}", user.id)) method="POST" {
                fieldset {
                    label {
                        "First Name:"
                        br;
                        input type="text" name="first_name" value=(user.first_name)
                            required maxlength="50";
                    }
                    br;
                    label {
                        "Last Name:"
                        br;
                        input type="text" name="last_name" value=(user.last_name) maxlength="50";
                    }
                    br;
                    label {
                        "Address:"
                        br;
                        input type="text" name="address" value=(user.address)
                            required maxlength="200";
                    }
                    br;
                    label class="checkbox" {
                        input type="checkbox" name="has_gear" value="true" checked[user.has_gear];
                        "Have your own gear?"
                    }
                    br;
                    "Select your climbing styles:"
                    br;
                    (style_checkboxes("styles", styles, &user.styles))
                    br;
                    input type="submit" value="Edit Profile";
                }
            }
        },
    )
}
