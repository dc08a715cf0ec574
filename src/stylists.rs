use crate::types::{Stylist, StylistId};

pub const UNKNOWN_STYLIST: &str = "unknown";

#[derive(Debug, Clone, Default)]
pub struct StylistRegistry {
    stylists: Vec<Stylist>,
}

impl StylistRegistry {
    pub fn new(stylists: Vec<Stylist>) -> Self {
        Self { stylists }
    }

    pub fn all(&self) -> &[Stylist] {
        &self.stylists
    }

    pub fn name_of(&self, id: StylistId) -> &str {
        self.stylists
            .iter()
            .find(|stylist| stylist.id == id)
            .map(|stylist| stylist.name.as_str())
            .unwrap_or(UNKNOWN_STYLIST)
    }
}
