use time::Date;

use super::prelude::*;

pub const MAX_COMMENT_LEN: usize = 1000;

#[derive(Debug, Clone)]
pub struct NewAscent {
    pub sent_on: Date,
    /// Raw form value, parsed into a [`SendType`].
    pub send_type: String,
    /// Raw form value, validated against the 0..=5 range.
    pub rating: i8,
    pub comment: Option<String>,
}

pub fn log_ascent<R>(repo: &R, user_id: &Id, route_id: &str, a: NewAscent) -> Result<Id>
where
    R: AscentRepo + RouteRepo + UserRepo,
{
    let route = repo.get_route(route_id)?;
    let user = repo.get_user(user_id.as_str())?;
    let send_type = a.send_type.parse::<SendType>()?;
    let rating = RatingValue::from(a.rating);
    // Out-of-range ratings are rejected before anything is persisted.
    if !rating.is_valid() {
        return Err(Error::RatingValue);
    }
    if let Some(ref comment) = a.comment {
        if comment.len() > MAX_COMMENT_LEN {
            return Err(Error::Comment);
        }
    }
    let new_ascent = Ascent {
        id: Id::new(),
        route_id: route.id,
        user_id: user.id,
        sent_on: a.sent_on,
        send_type,
        rating,
        comment: a.comment.filter(|s| !s.trim().is_empty()),
        created_at: Timestamp::now(),
    };
    repo.create_ascent(&new_ascent)?;
    Ok(new_ascent.id)
}
