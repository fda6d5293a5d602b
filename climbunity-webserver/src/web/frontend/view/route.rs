use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::{page::page, style_checkboxes, venue_select};
use climbunity_core::entities::*;

pub fn new_route(
    username: &str,
    flash: Option<FlashMessage>,
    venues: &[Venue],
    users: &[User],
    styles: &[Style],
    tags: &[Tag],
) -> Markup {
    page(
        "New Route",
        Some(username),
        flash,
        html! {
            h2 { "Add a route" }
            form class="route" action="/new_route" method="POST" {
                fieldset {
                    label {
                        "Route Name:"
                        br;
                        input type="text" name="name" required maxlength="80";
                    }
                    br;
                    label {
                        "Gym / Crag:"
                        br;
                        (venue_select(venues, None))
                    }
                    br;
                    label {
                        "Route Setter:"
                        br;
                        select name="setter_id" {
                            option value="" { "-- none --" }
                            @for u in users {
                                option value=(u.id) { (u.username) }
                            }
                        }
                    }
                    br;
                    label {
                        "Route Grade:"
                        br;
                        input type="text" name="grade" maxlength="10";
                    }
                    br;
                    label {
                        "Photo:"
                        br;
                        input type="text" name="photo" placeholder="file name of an uploaded image";
                    }
                    br;
                    label {
                        "Route Set Date:"
                        br;
                        input type="date" name="route_set_date";
                    }
                    br;
                    label {
                        "Projected Route Takedown Date:"
                        br;
                        input type="date" name="route_takedown_date";
                    }
                    br;
                    "What type of route is this?"
                    br;
                    (style_checkboxes("styles", styles, &[]))
                    br;
                    "Apply tags to this route:"
                    br;
                    @for tag in tags {
                        label class="checkbox" {
                            input type="checkbox" name="tags" value=(tag.label);
                            (tag.label)
                        }
                    }
                    br;
                    input type="submit" value="Submit";
                }
            }
        },
    )
}

#[allow(clippy::too_many_arguments)]
pub fn route_detail(
    username: Option<&str>,
    flash: Option<FlashMessage>,
    route: &Route,
    venue: &Venue,
    setter: Option<&User>,
    ascents: &[(Ascent, String)],
    avg_rating: AvgRatingValue,
    is_project: bool,
) -> Markup {
    page(
        &route.name,
        username,
        flash,
        html! {
            div class="details route" {
                h2 { (route.name) }
                p class="grade" { "Grade: " (route.grade) }
                p class="venue" {
                    "At "
                    a href=(format!("/venue/{}", venue.id)) { (venue.name) }
                }
                @if let Some(setter) = setter {
                    p class="setter" { "Set by " (setter.username) }
                }
                img src=(format!("/static/img/{}", route.photo)) alt=(route.name);
                @if let Some(set_on) = route.set_on {
                    p { "Set on " (format_date(set_on)) }
                }
                @if let Some(takedown_on) = route.takedown_on {
                    p { "Scheduled takedown: " (format_date(takedown_on)) }
                }
                @if !route.styles.is_empty() {
                    h4 { "Styles" }
                    ul class="styles" {
                        @for s in &route.styles {
                            li { (s) }
                        }
                    }
                }
                @if !route.tags.is_empty() {
                    h4 { "Tags" }
                    ul class="tags" {
                        @for t in &route.tags {
                            li { (format!("#{t}")) }
                        }
                    }
                }
            }
            div class="ascents" {
                h3 { "Ascents" }
                @if ascents.is_empty() {
                    p class="no-results" { "Nobody has logged an ascent yet." }
                } @else {
                    p class="rating" { "Average rating: " (avg_rating) }
                    table {
                        thead {
                            tr {
                                th { "Climber" }
                                th { "Date"    }
                                th { "Type"    }
                                th { "Rating"  }
                                th { "Comment" }
                            }
                        }
                        tbody {
                            @for (ascent, climber) in ascents {
                                tr {
                                    td { (climber) }
                                    td { (format_date(ascent.sent_on)) }
                                    td { (ascent.send_type.label()) }
                                    td { (ascent.rating) }
                                    td { (ascent.comment.as_deref().unwrap_or("")) }
                                }
                            }
                        }
                    }
                }
            }
            @if username.is_some() {
                div class="manage" {
                    a href=(format!("/log_ascent/{}", route.id)) { "log an ascent" }
                    @if is_project {
                        form class="inline" action=(format!("/remove_from_project_list/{}", route.id)) method="POST" {
                            input type="submit" value="remove from project list";
                        }
                    } @else {
                        form class="inline" action=(format!("/add_to_project_list/{}", route.id)) method="POST" {
                            input type="submit" value="add to project list";
                        }
                    }
                    form class="delete" action=(format!("/delete_route/{}", route.id)) method="POST" {
                        input type="submit" value="delete route";
                    }
                }
            }
        },
    )
}
