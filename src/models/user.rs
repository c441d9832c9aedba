use std::fmt;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError};
use crate::models::RecordId;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    #[serde(alias = "customer")]
    Customer,
    #[serde(alias = "hotel_owner", alias = "hotelowner")]
    HotelOwner,
    #[serde(alias = "business_owner", alias = "businessowner")]
    BusinessOwner,
    #[serde(alias = "admin")]
    Admin,
}

impl Role {
    pub fn manages_hotels(&self) -> bool {
        matches!(self, Role::HotelOwner | Role::Admin)
    }

    pub fn manages_businesses(&self) -> bool {
        matches!(self, Role::BusinessOwner | Role::Admin)
    }

    pub fn can_access_portal(&self) -> bool {
        matches!(self, Role::HotelOwner | Role::BusinessOwner | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Customer => "Customer",
            Role::HotelOwner => "HotelOwner",
            Role::BusinessOwner => "BusinessOwner",
            Role::Admin => "Admin",
        };
        f.write_str(label)
    }
}

/// The user half of a session, as returned by the auth endpoints.
#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SessionUser {
    #[serde(default)]
    pub id: RecordId,
    pub email: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct CurrentUserResponse {
    pub user: SessionUser,
    #[serde(default)]
    pub message: Option<String>,
}
