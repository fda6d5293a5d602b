use super::prelude::*;

/// Only the climbing user (or an admin) may delete an ascent.
pub fn delete_ascent<R>(repo: &R, logged_in: &User, id: &str) -> Result<()>
where
    R: AscentRepo,
{
    let ascent = repo.get_ascent(id)?;
    if ascent.user_id != logged_in.id && !logged_in.is_admin {
        return Err(Error::Forbidden);
    }
    repo.delete_ascent(ascent.id.as_str())?;
    Ok(())
}
