use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, DisplayFromStr, PickFirst};
use crate::models::listing::ListingStatus;
use crate::models::RecordId;

#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Booking {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub id: RecordId,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub customer_email: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub hotel_name: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub hotel_location: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub check_in: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub check_out: String,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub status: ListingStatus,
}

impl Booking {
    pub fn customer_label(&self) -> &str {
        match self.customer_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Cliente",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;

    #[test]
    fn missing_customer_name_falls_back() {
        let booking: Booking = serde_json::from_value(json!({
            "id": 5,
            "customer_email": "x@y.com",
            "total_price": 900,
            "status": "approved",
        }))
        .unwrap();
        assert_eq!(booking.customer_label(), "Cliente");
        assert_eq!(booking.total_price, Some(900.0));
        assert_eq!(booking.status, ListingStatus::Approved);
    }
}
