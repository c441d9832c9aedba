use std::fmt;
use crate::controller::portal_controller::PortalData;
use crate::models::listing::{Business, Hotel, Listing};
use crate::models::user::Role;
use crate::views::badge::StatusBadge;

pub const RECENT_ACTIVITY_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricColor {
    Blue,
    Yellow,
    Red,
    Green,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: usize,
    pub color: MetricColor,
}

#[derive(Debug, PartialEq)]
pub enum Activity<'a> {
    Recent {
        hotels: &'a [Hotel],
        businesses: &'a [Business],
    },
    /// Nothing to show yet; the actions the role can take to get started.
    GetStarted(Vec<&'static str>),
}

#[derive(Debug, PartialEq)]
pub struct OverviewSummary<'a> {
    pub metrics: Vec<MetricCard>,
    pub activity: Activity<'a>,
}

fn pending<T: Listing>(listings: &[T]) -> usize {
    listings.iter().filter(|listing| listing.is_pending()).count()
}

fn recent<T>(listings: &[T]) -> &[T] {
    &listings[..listings.len().min(RECENT_ACTIVITY_LIMIT)]
}

pub fn summarize(data: &PortalData, role: Role) -> OverviewSummary<'_> {
    let hotels = &data.hotels.items;
    let businesses = &data.businesses.items;
    let bookings = &data.bookings.items;

    let mut metrics = Vec::new();
    if role.manages_hotels() {
        metrics.push(MetricCard { title: "Total Hoteles", value: hotels.len(), color: MetricColor::Blue });
        metrics.push(MetricCard { title: "Hoteles Pendientes", value: pending(hotels), color: MetricColor::Yellow });
    }
    if role.manages_businesses() {
        metrics.push(MetricCard { title: "Total Restaurantes", value: businesses.len(), color: MetricColor::Red });
        metrics.push(MetricCard {
            title: "Restaurantes Pendientes",
            value: pending(businesses),
            color: MetricColor::Yellow,
        });
    }
    metrics.push(MetricCard { title: "Total Reservas", value: bookings.len(), color: MetricColor::Green });

    let activity = if hotels.is_empty() && businesses.is_empty() && bookings.is_empty() {
        let mut actions = Vec::new();
        if role.manages_hotels() {
            actions.push("Registrar Hotel");
        }
        if role.manages_businesses() {
            actions.push("Registrar Restaurante");
        }
        Activity::GetStarted(actions)
    } else {
        Activity::Recent {
            hotels: recent(hotels),
            businesses: recent(businesses),
        }
    };

    OverviewSummary { metrics, activity }
}

impl fmt::Display for OverviewSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for metric in &self.metrics {
            writeln!(f, "{:<26}{:>6}", metric.title, metric.value)?;
        }
        writeln!(f)?;
        writeln!(f, "Actividad Reciente")?;

        match &self.activity {
            Activity::GetStarted(actions) => {
                writeln!(f, "  Aún no tienes actividad. Comienza registrando tu primer negocio.")?;
                for action in actions {
                    writeln!(f, "  > {}", action)?;
                }
            }
            Activity::Recent { hotels, businesses } => {
                for hotel in hotels.iter() {
                    writeln!(f, "  Hotel: {} {}", hotel.name(), StatusBadge::for_status(hotel.status()))?;
                }
                for business in businesses.iter() {
                    writeln!(f, "  Restaurante: {} {}", business.name(), StatusBadge::for_status(business.status()))?;
                }
            }
        }
        Ok(())
    }
}
