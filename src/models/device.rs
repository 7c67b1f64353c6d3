use super::DirectoryObject;
use chrono::{DateTime, FixedOffset};

graph_model! {
    /// A device registered in the directory.
    pub struct Device: DirectoryObject {
        odata_type: "#microsoft.graph.device",
        "accountEnabled" => account_enabled, set_account_enabled: bool;
        "approximateLastSignInDateTime" => approximate_last_sign_in_date_time, set_approximate_last_sign_in_date_time: DateTime<FixedOffset>;
        "complianceExpirationDateTime" => compliance_expiration_date_time, set_compliance_expiration_date_time: DateTime<FixedOffset>;
        "deviceCategory" => device_category, set_device_category: String;
        "deviceId" => device_id, set_device_id: String;
        "deviceOwnership" => device_ownership, set_device_ownership: String;
        "displayName" => display_name, set_display_name: String;
        "isCompliant" => is_compliant, set_is_compliant: bool;
        "isManaged" => is_managed, set_is_managed: bool;
        "manufacturer" => manufacturer, set_manufacturer: String;
        "mdmAppId" => mdm_app_id, set_mdm_app_id: String;
        "model" => model, set_model: String;
        "operatingSystem" => operating_system, set_operating_system: String;
        "operatingSystemVersion" => operating_system_version, set_operating_system_version: String;
        "physicalIds" => physical_ids, set_physical_ids: Vec<String>;
        "profileType" => profile_type, set_profile_type: String;
        "registrationDateTime" => registration_date_time, set_registration_date_time: DateTime<FixedOffset>;
        "systemLabels" => system_labels, set_system_labels: Vec<String>;
        /// `Workplace`, `AzureAd` or `ServerAd`.
        "trustType" => trust_type, set_trust_type: String;
    }
}
