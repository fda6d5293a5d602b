use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::{page::page, style_checkboxes};
use climbunity_core::entities::Style;

pub fn login(flash: Option<FlashMessage>, next: Option<&str>) -> Markup {
    page(
        "Login",
        None,
        flash,
        html! {
          form class="login" action="/login" method="POST" {
              fieldset {
                label {
                    "Username:"
                    br;
                    input type="text" name="username" placeholder="Username";
                }
                br;
                label {
                    "Password:"
                    br;
                    input type="password" name="password" placeholder="Password";
                }
                br;
                @if let Some(next) = next {
                    input type="hidden" name="next" value=(next);
                }
                input type="submit" value="login";
                a href="/signup" { "sign up" }
              }
          }
        },
    )
}

pub fn signup(flash: Option<FlashMessage>, styles: &[Style]) -> Markup {
    page(
        "Sign Up",
        None,
        flash,
        html! {
          form class="signup" action="/signup" method="POST" {
              fieldset {
                label {
                    "Username:"
                    br;
                    input type="text" name="username" required maxlength="50";
                }
                br;
                label {
                    "Password:"
                    br;
                    input type="password" name="password" required minlength="8";
                }
                br;
                label {
                    "Email:"
                    br;
                    input type="email" name="email" required maxlength="200";
                }
                br;
                label {
                    "First Name:"
                    br;
                    input type="text" name="first_name" required maxlength="50";
                }
                br;
                label {
                    "Last Name:"
                    br;
                    input type="text" name="last_name" maxlength="50";
                }
                br;
                label {
                    "Address:"
                    br;
                    input type="text" name="address" required maxlength="200";
                }
                br;
                label class="checkbox" {
                    input type="checkbox" name="has_gear" value="true";
                    "Have your own gear?"
                }
                br;
                "Select your climbing styles:"
                br;
                (style_checkboxes("styles", styles, &[]))
                br;
                input type="submit" value="Sign Up";
              }
          }
        },
    )
}
