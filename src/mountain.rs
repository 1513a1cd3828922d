//! The record stored by the tables and ranked by the organiser.

/// A named mountain with a difficulty grade and a track length. The name
/// is the primary key everywhere a mountain is stored in a table; equality
/// over the whole record is what duplicate detection relies on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mountain {
    pub name: String,
    pub difficulty: u32,
    pub length: u32,
}

impl Mountain {
    pub fn new(name: &str, difficulty: u32, length: u32) -> Self {
        Self {
            name: name.to_owned(),
            difficulty,
            length,
        }
    }
}
