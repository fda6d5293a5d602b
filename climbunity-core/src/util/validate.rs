use lazy_static::lazy_static;
use regex::Regex;

pub use fast_chemail::is_valid_email;

lazy_static! {
    static ref USERNAME_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9_]{3,50}$").expect("valid username regex");
}

pub fn is_valid_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(username)
}
