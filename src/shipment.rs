use crate::address::{AddressBlock, PostalAddress};
use crate::error::LabelError;
use serde::{Deserialize, Serialize};

/// The request body the label form posts:
/// `{"shipment": {"to_address": {...}, "from_address": {...}}}`.
/// Only the destination is needed to draw a local label; the sender comes from
/// configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    pub shipment: Option<Shipment>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shipment {
    pub to_address: Option<PostalAddress>,
    pub from_address: Option<PostalAddress>,
}

impl ShipmentRequest {
    pub fn from_json(json: &str) -> Result<ShipmentRequest, LabelError> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// The normalized destination address. Fails if the request has no
    /// destination or the destination has nothing printable in it.
    pub fn destination(&self) -> Result<AddressBlock, LabelError> {
        let to_address = self
            .shipment
            .as_ref()
            .and_then(|shipment| shipment.to_address.as_ref())
            .ok_or_else(|| LabelError::invalid_input("request has no shipment.to_address"))?;

        let block = to_address.to_block();
        if block.is_empty() {
            return Err(LabelError::invalid_input(
                "destination address has no printable lines",
            ));
        }
        Ok(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_destination() {
        let request = ShipmentRequest::from_json(
            r#"{
                "shipment": {
                    "to_address": {
                        "name": "Jane Doe",
                        "street1": "123 Main St",
                        "street2": "",
                        "city": "Springfield",
                        "state": "IL",
                        "zip": "62701"
                    },
                    "parcel": { "weight": 10 }
                }
            }"#,
        )
        .expect("valid request");
        let destination = request.destination().expect("has destination");
        assert_eq!(
            destination.lines(),
            &["Jane Doe", "123 Main St", "Springfield, IL 62701"]
        );
    }

    #[test]
    fn missing_to_address_is_invalid_input() {
        let request = ShipmentRequest::from_json(r#"{ "shipment": {} }"#).expect("valid json");
        assert!(matches!(
            request.destination(),
            Err(LabelError::InvalidInput(_))
        ));

        let request = ShipmentRequest::from_json("{}").expect("valid json");
        assert!(matches!(
            request.destination(),
            Err(LabelError::InvalidInput(_))
        ));
    }

    #[test]
    fn blank_to_address_is_invalid_input() {
        let request =
            ShipmentRequest::from_json(r#"{ "shipment": { "to_address": { "name": "  " } } }"#)
                .expect("valid json");
        assert!(matches!(
            request.destination(),
            Err(LabelError::InvalidInput(_))
        ));
    }
}
