use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id           : Id,
    pub created_by   : Id,
    pub venue_id     : Id,
    // Stored with second precision.
    pub scheduled_at : Timestamp,
    pub created_at   : Timestamp,
    /// Users attending, including the creator.
    pub attendants   : Vec<Id>,
}

impl Appointment {
    pub fn is_attended_by(&self, user_id: &Id) -> bool {
        self.attendants.iter().any(|id| id == user_id)
    }
}
