use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::{page::page, venue_select};
use climbunity_core::entities::*;

pub fn new_appointment(
    username: &str,
    flash: Option<FlashMessage>,
    venues: &[Venue],
    users: &[User],
) -> Markup {
    page(
        "New Appointment",
        Some(username),
        flash,
        html! {
            h2 { "Schedule an appointment" }
            form class="appointment" action="/new_appointment" method="POST" {
                fieldset {
                    label {
                        "Appointment Date and Time:"
                        br;
                        input type="datetime-local" name="appointment_datetime" required;
                    }
                    br;
                    label {
                        "Venue:"
                        br;
                        (venue_select(venues, None))
                    }
                    br;
                    "Additional guests:"
                    br;
                    @for u in users {
                        @if u.username != username {
                            label class="checkbox" {
                                input type="checkbox" name="guests" value=(u.id);
                                (u.username)
                            }
                        }
                    }
                    br;
                    input type="submit" value="Submit";
                }
            }
        },
    )
}

pub fn appointment_list(appointments: &[(Appointment, Venue)], username: Option<&str>) -> Markup {
    html! {
        @if appointments.is_empty() {
            p class="no-results" { "No appointments scheduled." }
        } @else {
            ul class="appointment-list" {
                @for (appointment, venue) in appointments {
                    li {
                        span class="time" { (appointment.scheduled_at) }
                        " at "
                        a href=(format!("/venue/{}", venue.id)) { (venue.name) }
                        " ("
                        (appointment.attendants.len())
                        " attending)"
                        @if username.is_some() {
                            form class="inline" action=(format!("/join_appointment/{}", appointment.id)) method="POST" {
                                input type="submit" value="join";
                            }
                            form class="inline" action=(format!("/delete_appointment/{}", appointment.id)) method="POST" {
                                input type="submit" value="delete";
                            }
                        }
                    }
                }
            }
        }
    }
}
