use super::{
    AnyDirectoryObject, AssignedLicense, CustomSecurityAttributeValue, DirectoryObject, Event,
};
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

graph_model! {
    /// A user account.
    pub struct User: DirectoryObject {
        odata_type: "#microsoft.graph.user",
        "aboutMe" => about_me, set_about_me: String;
        "accountEnabled" => account_enabled, set_account_enabled: bool;
        "ageGroup" => age_group, set_age_group: String;
        "assignedLicenses" => assigned_licenses, set_assigned_licenses: Vec<AssignedLicense>;
        "assignedPlans" => assigned_plans, set_assigned_plans: Vec<AssignedPlan>;
        "birthday" => birthday, set_birthday: DateTime<FixedOffset>;
        "businessPhones" => business_phones, set_business_phones: Vec<String>;
        "city" => city, set_city: String;
        "companyName" => company_name, set_company_name: String;
        "country" => country, set_country: String;
        "createdDateTime" => created_date_time, set_created_date_time: DateTime<FixedOffset>;
        "creationType" => creation_type, set_creation_type: String;
        "customSecurityAttributes" => custom_security_attributes, set_custom_security_attributes: CustomSecurityAttributeValue;
        "department" => department, set_department: String;
        "displayName" => display_name, set_display_name: String;
        "employeeHireDate" => employee_hire_date, set_employee_hire_date: DateTime<FixedOffset>;
        "employeeId" => employee_id, set_employee_id: String;
        "employeeType" => employee_type, set_employee_type: String;
        "events" => events, set_events: Vec<Event>;
        "givenName" => given_name, set_given_name: String;
        "identities" => identities, set_identities: Vec<ObjectIdentity>;
        "jobTitle" => job_title, set_job_title: String;
        "lastPasswordChangeDateTime" => last_password_change_date_time, set_last_password_change_date_time: DateTime<FixedOffset>;
        "mail" => mail, set_mail: String;
        "mailNickname" => mail_nickname, set_mail_nickname: String;
        /// The user or contact this user reports to.
        "manager" => manager, set_manager: AnyDirectoryObject;
        "mobilePhone" => mobile_phone, set_mobile_phone: String;
        "officeLocation" => office_location, set_office_location: String;
        "onPremisesImmutableId" => on_premises_immutable_id, set_on_premises_immutable_id: String;
        "onPremisesSyncEnabled" => on_premises_sync_enabled, set_on_premises_sync_enabled: bool;
        "otherMails" => other_mails, set_other_mails: Vec<String>;
        "passwordPolicies" => password_policies, set_password_policies: String;
        "passwordProfile" => password_profile, set_password_profile: PasswordProfile;
        "postalCode" => postal_code, set_postal_code: String;
        "preferredLanguage" => preferred_language, set_preferred_language: String;
        "proxyAddresses" => proxy_addresses, set_proxy_addresses: Vec<String>;
        "securityIdentifier" => security_identifier, set_security_identifier: String;
        "showInAddressList" => show_in_address_list, set_show_in_address_list: bool;
        "surname" => surname, set_surname: String;
        "usageLocation" => usage_location, set_usage_location: String;
        "userPrincipalName" => user_principal_name, set_user_principal_name: String;
        /// `Member` or `Guest`.
        "userType" => user_type, set_user_type: String;
    }
}

graph_model! {
    pub struct PasswordProfile {
        "forceChangePasswordNextSignIn" => force_change_password_next_sign_in, set_force_change_password_next_sign_in: bool;
        "forceChangePasswordNextSignInWithMfa" => force_change_password_next_sign_in_with_mfa, set_force_change_password_next_sign_in_with_mfa: bool;
        "password" => password, set_password: String;
    }
}

graph_model! {
    /// A sign-in identity of a user.
    pub struct ObjectIdentity {
        "issuer" => issuer, set_issuer: String;
        "issuerAssignedId" => issuer_assigned_id, set_issuer_assigned_id: String;
        "signInType" => sign_in_type, set_sign_in_type: String;
    }
}

graph_model! {
    pub struct AssignedPlan {
        "assignedDateTime" => assigned_date_time, set_assigned_date_time: DateTime<FixedOffset>;
        "capabilityStatus" => capability_status, set_capability_status: String;
        "service" => service, set_service: String;
        "servicePlanId" => service_plan_id, set_service_plan_id: Uuid;
    }
}
