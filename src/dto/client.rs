//! Request/response shapes for the client registry.
//!
//! Requests are mapped onto entities only after validation has passed;
//! the mapping itself cannot fail.

use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::entities::client::{self, ClientStatus};

/// Payload for registering a new client.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateClientRequest {
    #[validate(length(min = 3, max = 255))]
    pub name: String,
    pub cpf: String,
    #[validate(length(min = 1))]
    pub primary_phone: String,
    #[serde(default)]
    pub secondary_phone: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,

    // Address fields, all optional at registration
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub complement: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    #[validate(length(equal = 2))]
    pub state: Option<String>,
}

impl CreateClientRequest {
    /// Maps the validated payload onto a fresh entity.
    ///
    /// Identifier and timestamps stay `NotSet`: assigning them is the
    /// store layer's job. Status is not settable at registration and
    /// always starts out active.
    pub fn into_active_model(self) -> client::ActiveModel {
        client::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            cpf: Set(self.cpf),
            primary_phone: Set(self.primary_phone),
            secondary_phone: Set(self.secondary_phone),
            email: Set(self.email),
            status: Set(ClientStatus::Active),
            zip_code: Set(self.zip_code),
            street: Set(self.street),
            number: Set(self.number),
            complement: Set(self.complement),
            neighborhood: Set(self.neighborhood),
            city: Set(self.city),
            state: Set(self.state),
            created_at: NotSet,
            updated_at: NotSet,
            deleted_at: NotSet,
        }
    }
}

/// Partial update for an existing client.
///
/// Every field is an `Option` so "not supplied" stays distinguishable from
/// "supplied as empty"; absent fields keep their stored value. CPF is fixed
/// at registration and cannot be changed here.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateClientRequest {
    #[validate(length(min = 3, max = 255))]
    pub name: Option<String>,
    pub primary_phone: Option<String>,
    pub secondary_phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub status: Option<ClientStatus>,
    pub zip_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    #[validate(length(equal = 2))]
    pub state: Option<String>,
}

impl UpdateClientRequest {
    /// Overwrites only the supplied fields on a copy of the stored entity.
    pub fn merge_into(self, current: client::Model) -> client::Model {
        let mut merged = current;
        if let Some(name) = self.name {
            merged.name = name;
        }
        if let Some(primary_phone) = self.primary_phone {
            merged.primary_phone = primary_phone;
        }
        if let Some(secondary_phone) = self.secondary_phone {
            merged.secondary_phone = Some(secondary_phone);
        }
        if let Some(email) = self.email {
            merged.email = Some(email);
        }
        if let Some(status) = self.status {
            merged.status = status;
        }
        if let Some(zip_code) = self.zip_code {
            merged.zip_code = Some(zip_code);
        }
        if let Some(street) = self.street {
            merged.street = Some(street);
        }
        if let Some(number) = self.number {
            merged.number = Some(number);
        }
        if let Some(complement) = self.complement {
            merged.complement = Some(complement);
        }
        if let Some(neighborhood) = self.neighborhood {
            merged.neighborhood = Some(neighborhood);
        }
        if let Some(city) = self.city {
            merged.city = Some(city);
        }
        if let Some(state) = self.state {
            merged.state = Some(state);
        }
        merged
    }
}

/// Externally visible client representation.
///
/// Address fields are internal; timestamps are rendered RFC 3339 with an
/// explicit UTC offset, and unset optional fields are omitted entirely.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientResponse {
    pub id: i32,
    pub name: String,
    pub cpf: String,
    pub primary_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<client::Model> for ClientResponse {
    fn from(model: client::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            cpf: model.cpf,
            primary_phone: model.primary_phone,
            secondary_phone: model.secondary_phone,
            email: model.email,
            status: model.status.as_str().to_string(),
            created_at: model.created_at.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sea_orm::ActiveValue;

    fn stored_client() -> client::Model {
        client::Model {
            id: 7,
            name: "Ana Silva".to_string(),
            cpf: "11122233344".to_string(),
            primary_phone: "11999990000".to_string(),
            secondary_phone: None,
            email: Some("ana@example.com".to_string()),
            status: ClientStatus::Active,
            zip_code: Some("01310100".to_string()),
            street: Some("Avenida Paulista".to_string()),
            number: Some("1000".to_string()),
            complement: None,
            neighborhood: Some("Bela Vista".to_string()),
            city: Some("Sao Paulo".to_string()),
            state: Some("SP".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 3, 2, 8, 30, 0).unwrap(),
            deleted_at: None,
        }
    }

    fn create_request() -> CreateClientRequest {
        CreateClientRequest {
            name: "Ana Silva".to_string(),
            cpf: "11122233344".to_string(),
            primary_phone: "11999990000".to_string(),
            secondary_phone: None,
            email: None,
            zip_code: None,
            street: None,
            number: None,
            complement: None,
            neighborhood: None,
            city: None,
            state: None,
        }
    }

    #[test]
    fn create_mapping_forces_active_status() {
        let model = create_request().into_active_model();
        assert_eq!(model.status, Set(ClientStatus::Active));
    }

    #[test]
    fn create_mapping_leaves_store_owned_fields_unset() {
        let model = create_request().into_active_model();
        assert!(matches!(model.id, ActiveValue::NotSet));
        assert!(matches!(model.created_at, ActiveValue::NotSet));
        assert!(matches!(model.updated_at, ActiveValue::NotSet));
        assert!(matches!(model.deleted_at, ActiveValue::NotSet));
    }

    #[test]
    fn create_mapping_copies_provided_fields_and_keeps_absent_ones_empty() {
        let mut request = create_request();
        request.email = Some("ana@example.com".to_string());
        let model = request.into_active_model();
        assert_eq!(model.name, Set("Ana Silva".to_string()));
        assert_eq!(model.email, Set(Some("ana@example.com".to_string())));
        assert_eq!(model.zip_code, Set(None));
    }

    #[test]
    fn merge_overwrites_only_present_fields() {
        let current = stored_client();
        let update = UpdateClientRequest {
            name: Some("New Name".to_string()),
            ..Default::default()
        };

        let merged = update.merge_into(current.clone());

        assert_eq!(merged.name, "New Name");
        assert_eq!(
            merged,
            client::Model {
                name: "New Name".to_string(),
                ..current
            }
        );
    }

    #[test]
    fn merge_is_idempotent() {
        let update = UpdateClientRequest {
            name: Some("New Name".to_string()),
            status: Some(ClientStatus::Inactive),
            zip_code: Some("22041011".to_string()),
            ..Default::default()
        };

        let once = update.clone().merge_into(stored_client());
        let twice = update.merge_into(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn merge_distinguishes_absent_from_empty() {
        let update = UpdateClientRequest {
            secondary_phone: Some(String::new()),
            ..Default::default()
        };

        let merged = update.merge_into(stored_client());

        // Explicitly supplied empty string overwrites; absent email survives.
        assert_eq!(merged.secondary_phone, Some(String::new()));
        assert_eq!(merged.email, Some("ana@example.com".to_string()));
    }

    #[test]
    fn response_omits_unset_optional_fields() {
        let mut model = stored_client();
        model.email = None;
        model.secondary_phone = None;

        let body = serde_json::to_value(ClientResponse::from(model)).unwrap();
        let object = body.as_object().unwrap();

        assert!(!object.contains_key("email"));
        assert!(!object.contains_key("secondary_phone"));
        assert_eq!(object["status"], "active");
    }

    #[test]
    fn response_timestamps_carry_an_explicit_utc_offset() {
        let response = ClientResponse::from(stored_client());
        assert_eq!(response.created_at, "2024-03-01T12:00:00+00:00");
        assert_eq!(response.updated_at, "2024-03-02T08:30:00+00:00");
    }

    #[test]
    fn response_does_not_expose_address_fields() {
        let body = serde_json::to_value(ClientResponse::from(stored_client())).unwrap();
        let object = body.as_object().unwrap();
        assert!(!object.contains_key("zip_code"));
        assert!(!object.contains_key("street"));
    }
}
