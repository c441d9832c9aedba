use std::fmt;
use crate::models::listing::ListingStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeColor {
    Yellow,
    Green,
    Red,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: BadgeColor,
}

impl StatusBadge {
    const PENDING: StatusBadge = StatusBadge { label: "Pendiente", color: BadgeColor::Yellow };
    const APPROVED: StatusBadge = StatusBadge { label: "Aprobado", color: BadgeColor::Green };
    const REJECTED: StatusBadge = StatusBadge { label: "Rechazado", color: BadgeColor::Red };

    pub fn for_status(status: ListingStatus) -> Self {
        match status {
            ListingStatus::Approved => Self::APPROVED,
            ListingStatus::Rejected => Self::REJECTED,
            ListingStatus::Pending | ListingStatus::Unknown => Self::PENDING,
        }
    }
}

impl fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.label)
    }
}
