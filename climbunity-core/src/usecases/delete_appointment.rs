use super::prelude::*;

/// Only the creator (or an admin) may delete an appointment.
/// All attendant memberships are cleared along with the row.
pub fn delete_appointment<R>(repo: &R, logged_in: &User, id: &str) -> Result<()>
where
    R: AppointmentRepo,
{
    let appointment = repo.get_appointment(id)?;
    if appointment.created_by != logged_in.id && !logged_in.is_admin {
        return Err(Error::Forbidden);
    }
    repo.delete_appointment(appointment.id.as_str())?;
    Ok(())
}
