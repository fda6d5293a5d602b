use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::page::page;
use climbunity_core::entities::*;

pub fn log_ascent(
    username: &str,
    flash: Option<FlashMessage>,
    route: &Route,
    venue: &Venue,
) -> Markup {
    page(
        "Log Ascent",
        Some(username),
        flash,
        html! {
            h2 { "Log an ascent of " (route.name) " at " (venue.name) }
            form class="ascent" action=(format!("/log_ascent/{}", route.id)) method="POST" {
                fieldset {
                    label {
                        "Date of ascent:"
                        br;
                        input type="date" name="ascent_date" required;
                    }
                    br;
                    label {
                        "Type of ascent:"
                        br;
                        select name="ascent_type" {
                            @for send_type in SendType::all() {
                                option value=(send_type) { (send_type.label()) }
                            }
                        }
                    }
                    br;
                    "Personal route rating:"
                    br;
                    @for value in 0..=5 {
                        label class="radio" {
                            input type="radio" name="rating" value=(value) required;
                            (value)
                        }
                    }
                    br;
                    label {
                        "Comments:"
                        br;
                        input type="text" name="comments" maxlength="1000";
                    }
                    br;
                    input type="submit" value="Submit";
                }
            }
        },
    )
}
