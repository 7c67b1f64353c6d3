//! Complex types shared by applications, service principals, users and groups.

use crate::serialization::Base64Bytes;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

graph_model! {
    /// A client secret registered on an application or service principal.
    pub struct PasswordCredential {
        "customKeyIdentifier" => custom_key_identifier, set_custom_key_identifier: Base64Bytes;
        "displayName" => display_name, set_display_name: String;
        "endDateTime" => end_date_time, set_end_date_time: DateTime<FixedOffset>;
        /// First characters of the secret; the full value is never returned.
        "hint" => hint, set_hint: String;
        "keyId" => key_id, set_key_id: Uuid;
        /// Only populated in the response that creates the secret.
        "secretText" => secret_text, set_secret_text: String;
        "startDateTime" => start_date_time, set_start_date_time: DateTime<FixedOffset>;
    }
}

graph_model! {
    /// A certificate registered on an application or service principal.
    pub struct KeyCredential {
        "customKeyIdentifier" => custom_key_identifier, set_custom_key_identifier: Base64Bytes;
        "displayName" => display_name, set_display_name: String;
        "endDateTime" => end_date_time, set_end_date_time: DateTime<FixedOffset>;
        "key" => key, set_key: Base64Bytes;
        "keyId" => key_id, set_key_id: Uuid;
        "startDateTime" => start_date_time, set_start_date_time: DateTime<FixedOffset>;
        "type" => r#type, set_type: String;
        "usage" => usage, set_usage: String;
    }
}

graph_model! {
    pub struct AppRole {
        "allowedMemberTypes" => allowed_member_types, set_allowed_member_types: Vec<String>;
        "description" => description, set_description: String;
        "displayName" => display_name, set_display_name: String;
        "id" => id, set_id: Uuid;
        "isEnabled" => is_enabled, set_is_enabled: bool;
        "origin" => origin, set_origin: String;
        /// Value carried in the `roles` claim of issued tokens.
        "value" => value, set_value: String;
    }
}

graph_model! {
    pub struct AddIn {
        "id" => id, set_id: Uuid;
        "properties" => properties, set_properties: Vec<KeyValue>;
        "type" => r#type, set_type: String;
    }
}

graph_model! {
    pub struct KeyValue {
        "key" => key, set_key: String;
        "value" => value, set_value: String;
    }
}

graph_model! {
    pub struct InformationalUrl {
        "logoUrl" => logo_url, set_logo_url: String;
        "marketingUrl" => marketing_url, set_marketing_url: String;
        "privacyStatementUrl" => privacy_statement_url, set_privacy_statement_url: String;
        "supportUrl" => support_url, set_support_url: String;
        "termsOfServiceUrl" => terms_of_service_url, set_terms_of_service_url: String;
    }
}

graph_model! {
    pub struct VerifiedPublisher {
        "addedDateTime" => added_date_time, set_added_date_time: DateTime<FixedOffset>;
        "displayName" => display_name, set_display_name: String;
        "verifiedPublisherId" => verified_publisher_id, set_verified_publisher_id: String;
    }
}

graph_model! {
    pub struct AssignedLicense {
        "disabledPlans" => disabled_plans, set_disabled_plans: Vec<Uuid>;
        "skuId" => sku_id, set_sku_id: Uuid;
    }
}

graph_model! {
    pub struct AssignedLabel {
        "displayName" => display_name, set_display_name: String;
        "labelId" => label_id, set_label_id: String;
    }
}

graph_model! {
    /// Open type: attribute sets live entirely in additional data.
    pub struct CustomSecurityAttributeValue {}
}
