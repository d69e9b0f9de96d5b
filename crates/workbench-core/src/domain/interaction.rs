use crate::domain::ids::InteractionId;
use crate::error::CoreError;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionType {
    Chat,
    Email,
    Call,
}

impl InteractionType {
    pub const ALL: [InteractionType; 3] = [
        InteractionType::Chat,
        InteractionType::Email,
        InteractionType::Call,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionType::Chat => "CHAT",
            InteractionType::Email => "EMAIL",
            InteractionType::Call => "CALL",
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        InteractionType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::InvalidInteractionType(trimmed.to_string()))
    }
}

/// A stored interaction. `product_id` and `customer_id` are guaranteed present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInteraction {
    pub id: InteractionId,
    pub product_id: i64,
    pub customer_id: i64,
    pub customer_rating: Option<i32>,
    pub feedback: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub responses_from_customer_support: Option<String>,
    pub interaction_type: Option<InteractionType>,
    pub message: Option<String>,
}

/// An interaction on its way into the store.
///
/// Both ingest paths produce this shape. The required ids are optional here so
/// that a payload missing them can still be represented; `insert_all` rejects it.
/// An `id` sent by a client is not part of this type and is dropped on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInteractionNew {
    pub product_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub customer_rating: Option<i32>,
    pub feedback: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub responses_from_customer_support: Option<String>,
    pub interaction_type: Option<InteractionType>,
    pub message: Option<String>,
}

impl CustomerInteractionNew {
    pub fn into_stored(self, id: InteractionId) -> Result<CustomerInteraction, CoreError> {
        let product_id = self.product_id.ok_or(CoreError::MissingProductId)?;
        let customer_id = self.customer_id.ok_or(CoreError::MissingCustomerId)?;
        Ok(CustomerInteraction {
            id,
            product_id,
            customer_id,
            customer_rating: self.customer_rating,
            feedback: self.feedback,
            timestamp: self.timestamp.map(|ts| ts.trunc_subsecs(6)),
            responses_from_customer_support: self.responses_from_customer_support,
            interaction_type: self.interaction_type,
            message: self.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interaction_type_parses_case_insensitively() {
        assert_eq!("chat".parse::<InteractionType>(), Ok(InteractionType::Chat));
        assert_eq!(" EMAIL ".parse::<InteractionType>(), Ok(InteractionType::Email));
        assert_eq!("Call".parse::<InteractionType>(), Ok(InteractionType::Call));
        assert_eq!(
            "fax".parse::<InteractionType>(),
            Err(CoreError::InvalidInteractionType("fax".to_string()))
        );
    }

    #[test]
    fn stored_interaction_serializes_camel_case() {
        let interaction = CustomerInteraction {
            id: InteractionId(7),
            product_id: 10,
            customer_id: 20,
            customer_rating: Some(4),
            feedback: None,
            timestamp: None,
            responses_from_customer_support: Some("Thanks!".to_string()),
            interaction_type: Some(InteractionType::Chat),
            message: None,
        };
        let value = serde_json::to_value(&interaction).expect("serialize");
        assert_eq!(value["id"], 7);
        assert_eq!(value["productId"], 10);
        assert_eq!(value["customerId"], 20);
        assert_eq!(value["responsesFromCustomerSupport"], "Thanks!");
        assert_eq!(value["interactionType"], "CHAT");
        assert!(value["timestamp"].is_null());
    }

    #[test]
    fn new_interaction_ignores_client_id() {
        let json = r#"{"id": 99, "productId": 1, "customerId": 2, "interactionType": "CALL"}"#;
        let parsed: CustomerInteractionNew = serde_json::from_str(json).expect("decode");
        assert_eq!(parsed.product_id, Some(1));
        assert_eq!(parsed.customer_id, Some(2));
        assert_eq!(parsed.interaction_type, Some(InteractionType::Call));
        assert_eq!(parsed.feedback, None);
    }

    #[test]
    fn into_stored_requires_ids() {
        let input = CustomerInteractionNew {
            product_id: Some(1),
            ..Default::default()
        };
        assert_eq!(
            input.into_stored(InteractionId(1)).unwrap_err(),
            CoreError::MissingCustomerId
        );
    }
}
