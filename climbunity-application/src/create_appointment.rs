use super::*;
use usecases::NewAppointment;

/// Creates an appointment and the attendant memberships of the
/// creator and all named guests within a single transaction.
pub fn create_appointment(
    connections: &sqlite::Connections,
    created_by: &Id,
    new_appointment: NewAppointment,
) -> Result<Id> {
    let mut connection = connections.exclusive()?;
    let id = connection.transaction(|conn| {
        usecases::create_appointment(conn, created_by, new_appointment).map_err(|err| {
            warn!("Failed to store newly created appointment: {err}");
            err
        })
    })?;
    Ok(id)
}
