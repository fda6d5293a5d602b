use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub id            : Id,
    pub name          : String,
    pub address       : String,
    pub opening_hours : Option<String>,
    pub description   : Option<String>,
}
