use super::{AnyDirectoryObject, AssignedLabel, AssignedLicense, DirectoryObject};
use chrono::{DateTime, FixedOffset};

graph_model! {
    /// A Microsoft 365 group or security group.
    pub struct Group: DirectoryObject {
        odata_type: "#microsoft.graph.group",
        "assignedLabels" => assigned_labels, set_assigned_labels: Vec<AssignedLabel>;
        "assignedLicenses" => assigned_licenses, set_assigned_licenses: Vec<AssignedLicense>;
        "classification" => classification, set_classification: String;
        "createdDateTime" => created_date_time, set_created_date_time: DateTime<FixedOffset>;
        "description" => description, set_description: String;
        "displayName" => display_name, set_display_name: String;
        "expirationDateTime" => expiration_date_time, set_expiration_date_time: DateTime<FixedOffset>;
        /// `Unified` for Microsoft 365 groups, `DynamicMembership` for rule-based ones.
        "groupTypes" => group_types, set_group_types: Vec<String>;
        "hasMembersWithLicenseErrors" => has_members_with_license_errors, set_has_members_with_license_errors: bool;
        "isAssignableToRole" => is_assignable_to_role, set_is_assignable_to_role: bool;
        "licenseProcessingState" => license_processing_state, set_license_processing_state: LicenseProcessingState;
        "mail" => mail, set_mail: String;
        "mailEnabled" => mail_enabled, set_mail_enabled: bool;
        "mailNickname" => mail_nickname, set_mail_nickname: String;
        "members" => members, set_members: Vec<AnyDirectoryObject>;
        "membershipRule" => membership_rule, set_membership_rule: String;
        "membershipRuleProcessingState" => membership_rule_processing_state, set_membership_rule_processing_state: String;
        "owners" => owners, set_owners: Vec<AnyDirectoryObject>;
        "preferredDataLocation" => preferred_data_location, set_preferred_data_location: String;
        "proxyAddresses" => proxy_addresses, set_proxy_addresses: Vec<String>;
        "renewedDateTime" => renewed_date_time, set_renewed_date_time: DateTime<FixedOffset>;
        "securityEnabled" => security_enabled, set_security_enabled: bool;
        "securityIdentifier" => security_identifier, set_security_identifier: String;
        "theme" => theme, set_theme: String;
        "uniqueName" => unique_name, set_unique_name: String;
        "visibility" => visibility, set_visibility: String;
    }
}

graph_model! {
    pub struct LicenseProcessingState {
        "state" => state, set_state: String;
    }
}
