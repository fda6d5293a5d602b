use maud::{html, Markup, DOCTYPE};
use rocket::request::FlashMessage;

const MAIN_CSS_URL: &str = "/main.css";

pub fn page(
    title: &str,
    username: Option<&str>,
    flash: Option<FlashMessage>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
            title {(title)}
            link rel="stylesheet" href=(MAIN_CSS_URL);
        }
        body {
            (flash_msg(flash))
            (header(username))
            (content)
        }
    }
}

fn flash_msg(flash: Option<FlashMessage>) -> Markup {
    html! {
        @if let Some(msg) = flash {
            div class=(format!("flash {}", msg.kind())) {
                (msg.message())
            }
        }
    }
}

fn header(username: Option<&str>) -> Markup {
    html! {
    header {
        @if let Some(username) = username {
            div class="msg" { "You are logged in as " span class="username" { (username) } }
            nav {
                a href="/" { "home" }
                a href="/users" { "climbers" }
                a href="/new_venue" { "add venue" }
                a href="/new_route" { "add route" }
                a href="/new_appointment" { "new appointment" }
                form class="logout" action="/logout" method="POST" {
                    input type="submit" value="logout";
                }
            }
        }
        @ else {
            nav {
                a href="/" { "home" }
                a href="/users" { "climbers" }
                a href="/login" { "login" }
                a href="/signup" { "sign up" }
            }
        }
    }
    }
}
