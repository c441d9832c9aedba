use std::fmt;
use crate::controller::portal_controller::{PortalData, Tab};
use crate::models::user::{Role, SessionUser};
use crate::views::bookings::BookingsTab;
use crate::views::listings::{BusinessesTab, HotelsTab};
use crate::views::overview::summarize;

pub mod badge;
pub mod bookings;
pub mod listings;
pub mod overview;

pub fn portal_title(role: Role) -> &'static str {
    match role {
        Role::HotelOwner => "Portal de Hoteles",
        Role::BusinessOwner => "Portal de Restaurantes",
        _ => "Portal de Administración",
    }
}

/// A ready portal: header, tab bar, load errors and the active tab.
pub struct PortalScreen<'a> {
    pub user: &'a SessionUser,
    pub tabs: &'a [Tab],
    pub active: Tab,
    pub data: &'a PortalData,
}

impl fmt::Display for PortalScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", portal_title(self.user.role))?;
        writeln!(f, "Bienvenido, {} {}", self.user.first_name, self.user.last_name)?;
        writeln!(f)?;

        let tab_bar: Vec<String> = self
            .tabs
            .iter()
            .map(|tab| {
                if *tab == self.active {
                    format!("[{}]", tab.label())
                } else {
                    tab.label().to_string()
                }
            })
            .collect();
        writeln!(f, "{}", tab_bar.join("  "))?;
        writeln!(f)?;

        for error in self.data.errors() {
            writeln!(f, "! {}", error)?;
        }

        match self.active {
            Tab::Overview => write!(f, "{}", summarize(self.data, self.user.role)),
            Tab::Hotels => write!(f, "{}", HotelsTab(&self.data.hotels.items)),
            Tab::Businesses => write!(f, "{}", BusinessesTab(&self.data.businesses.items)),
            Tab::Bookings => write!(f, "{}", BookingsTab(&self.data.bookings.items)),
        }
    }
}
