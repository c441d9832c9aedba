use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, DisplayFromStr, PickFirst};
use crate::models::RecordId;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Pending,
    Approved,
    Rejected,
    /// Absent or unrecognized on the wire. Not counted as pending.
    #[default]
    #[serde(other)]
    Unknown,
}

#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Hotel {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub id: RecordId,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub name: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub description: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub location: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub address: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub status: ListingStatus,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    pub price: Option<f64>,
}

#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Business {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub id: RecordId,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub name: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub description: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub location: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub address: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub status: ListingStatus,
}

pub trait Listing {
    fn name(&self) -> &str;
    fn status(&self) -> ListingStatus;

    fn is_pending(&self) -> bool {
        self.status() == ListingStatus::Pending
    }
}

impl Listing for Hotel {
    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> ListingStatus {
        self.status
    }
}

impl Listing for Business {
    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> ListingStatus {
        self.status
    }
}
