use maud::{html, Markup};

use climbunity_core::entities::*;

mod appointment;
mod ascent;
mod home;
mod login;
mod page;
mod profile;
mod route;
mod venue;

pub use appointment::*;
pub use ascent::*;
pub use home::*;
pub use login::*;
use page::*;
pub use profile::*;
pub use route::*;
pub use venue::*;

fn venue_select(venues: &[Venue], selected: Option<&Id>) -> Markup {
    html! {
        select name="venue_id" required {
            @for v in venues {
                option value=(v.id) selected[selected == Some(&v.id)] { (v.name) }
            }
        }
    }
}

fn style_checkboxes(field: &str, styles: &[Style], checked: &[String]) -> Markup {
    html! {
        @for style in styles {
            label class="checkbox" {
                input
                    type="checkbox"
                    name=(field)
                    value=(style.label)
                    checked[checked.contains(&style.label)];
                (style.label)
            }
        }
    }
}
