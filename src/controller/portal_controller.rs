use std::fmt;
use std::str::FromStr;
use futures::future::{self, Either};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};
use crate::helpers::normalize::{normalize_collection, Collection, ResourceKind};
use crate::models::booking::Booking;
use crate::models::listing::{Business, Hotel};
use crate::models::user::{Role, SessionUser};
use crate::repositories::api_repo::ApiConnectionRepo;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Redirect {
    Unauthenticated,
    Unauthorized(Role),
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Redirect::Unauthenticated => f.write_str("Inicia sesión para acceder al portal"),
            Redirect::Unauthorized(role) => write!(f, "El rol {} no tiene acceso al portal", role),
        }
    }
}

/// Decides whether a session may see the portal at all. Runs before
/// anything is requested.
pub fn authorize(
    user: Option<&SessionUser>,
    is_logged_in: bool,
) -> Result<&SessionUser, Redirect> {
    let user = match user {
        Some(user) if is_logged_in => user,
        _ => return Err(Redirect::Unauthenticated),
    };
    if !user.role.can_access_portal() {
        return Err(Redirect::Unauthorized(user.role));
    }
    Ok(user)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Overview,
    Hotels,
    Businesses,
    Bookings,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Resumen",
            Tab::Hotels => "Mis Hoteles",
            Tab::Businesses => "Mis Restaurantes",
            Tab::Bookings => "Reservas",
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overview" | "resumen" => Ok(Tab::Overview),
            "hotels" | "hoteles" => Ok(Tab::Hotels),
            "businesses" | "restaurantes" => Ok(Tab::Businesses),
            "bookings" | "reservas" => Ok(Tab::Bookings),
            other => Err(format!("unknown tab '{}'", other)),
        }
    }
}

pub fn available_tabs(role: Role) -> Vec<Tab> {
    let mut tabs = vec![Tab::Overview];
    if role.manages_hotels() {
        tabs.push(Tab::Hotels);
    }
    if role.manages_businesses() {
        tabs.push(Tab::Businesses);
    }
    tabs.push(Tab::Bookings);
    tabs
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct PortalData {
    pub hotels: Collection<Hotel>,
    pub businesses: Collection<Business>,
    pub bookings: Collection<Booking>,
}

impl PortalData {
    pub fn errors(&self) -> Vec<&str> {
        [&self.hotels.error, &self.businesses.error, &self.bookings.error]
            .into_iter()
            .filter_map(|error| error.as_deref())
            .collect()
    }
}

async fn load_collection<T: DeserializeOwned>(
    api_repo: &ApiConnectionRepo,
    kind: ResourceKind,
    token: &str,
) -> Collection<T> {
    return match api_repo.fetch_owned(kind.path(), token).await {
        Ok(payload) => {
            let collection = normalize_collection(payload, kind);
            info!("Loaded {} {}", collection.len(), kind.key());
            collection
        }
        Err(e) => {
            warn!("Something went wrong loading {} due to: {:#}", kind.key(), e);
            Collection::failed(kind)
        }
    };
}

/// Issues the role's requests together and waits for all of them to settle.
/// A failed request only empties its own collection.
pub async fn load_portal_data(
    api_repo: &ApiConnectionRepo,
    role: Role,
    token: &str,
) -> PortalData {
    let hotels = if role.manages_hotels() {
        Either::Left(load_collection::<Hotel>(api_repo, ResourceKind::Hotels, token))
    } else {
        Either::Right(future::ready(Collection::<Hotel>::not_requested()))
    };
    let businesses = if role.manages_businesses() {
        Either::Left(load_collection::<Business>(api_repo, ResourceKind::Businesses, token))
    } else {
        Either::Right(future::ready(Collection::<Business>::not_requested()))
    };
    let bookings = load_collection::<Booking>(api_repo, ResourceKind::Bookings, token);

    let (hotels, businesses, bookings) = futures::join!(hotels, businesses, bookings);

    PortalData {
        hotels,
        businesses,
        bookings,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PortalState {
    Redirect(Redirect),
    Loading,
    Ready(PortalData),
}

pub struct PortalView {
    user: Option<SessionUser>,
    state: PortalState,
}

impl PortalView {
    pub fn mount(
        user: Option<SessionUser>,
        is_logged_in: bool,
    ) -> Self {
        let state = match authorize(user.as_ref(), is_logged_in) {
            Ok(_) => PortalState::Loading,
            Err(redirect) => PortalState::Redirect(redirect),
        };
        Self { user, state }
    }

    pub fn state(&self) -> &PortalState {
        &self.state
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Moves `Loading` to `Ready`. Any other state is left alone.
    pub async fn load(
        &mut self,
        api_repo: &ApiConnectionRepo,
        token: &str,
    ) {
        let role = match (&self.state, &self.user) {
            (PortalState::Loading, Some(user)) => user.role,
            _ => return,
        };
        let data = load_portal_data(api_repo, role, token).await;
        self.state = PortalState::Ready(data);
    }

    pub fn tabs(&self) -> Vec<Tab> {
        return match (&self.state, &self.user) {
            (PortalState::Redirect(_), _) | (_, None) => Vec::new(),
            (_, Some(user)) => available_tabs(user.role),
        };
    }

    /// The requested tab when the role has it, the overview otherwise.
    pub fn select_tab(&self, requested: Tab) -> Tab {
        if self.tabs().contains(&requested) {
            requested
        } else {
            Tab::Overview
        }
    }
}
