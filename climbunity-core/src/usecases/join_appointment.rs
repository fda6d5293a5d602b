use super::prelude::*;

/// Adds the user to the appointment's attendant set.
/// Joining an appointment twice is a no-op.
pub fn join_appointment<R>(repo: &R, user_id: &Id, appointment_id: &str) -> Result<()>
where
    R: AppointmentRepo + UserRepo,
{
    let appointment = repo.get_appointment(appointment_id)?;
    let user = repo.get_user(user_id.as_str())?;
    repo.add_appointment_attendant(appointment.id.as_str(), user.id.as_str())?;
    Ok(())
}
