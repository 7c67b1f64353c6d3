//! Application registrations and their settings.

use super::enums::NativeAuthenticationApisEnabled;
use super::{
    AddIn, AnyDirectoryObject, AppRole, DirectoryObject, InformationalUrl, KeyCredential,
    PasswordCredential, VerifiedPublisher,
};
use crate::serialization::Base64Bytes;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

graph_model! {
    /// An application registration.
    pub struct Application: DirectoryObject {
        odata_type: "#microsoft.graph.application",
        "addIns" => add_ins, set_add_ins: Vec<AddIn>;
        /// Settings for an application that exposes a web API.
        "api" => api, set_api: ApiApplication;
        /// Client identifier assigned by the service. Not nullable, read-only.
        "appId" => app_id, set_app_id: String;
        "appRoles" => app_roles, set_app_roles: Vec<AppRole>;
        "createdDateTime" => created_date_time, set_created_date_time: DateTime<FixedOffset>;
        "createdOnBehalfOf" => created_on_behalf_of, set_created_on_behalf_of: AnyDirectoryObject;
        "defaultRedirectUri" => default_redirect_uri, set_default_redirect_uri: String;
        "description" => description, set_description: String;
        "disabledByMicrosoftStatus" => disabled_by_microsoft_status, set_disabled_by_microsoft_status: String;
        "displayName" => display_name, set_display_name: String;
        "groupMembershipClaims" => group_membership_claims, set_group_membership_claims: String;
        "identifierUris" => identifier_uris, set_identifier_uris: Vec<String>;
        "info" => info, set_info: InformationalUrl;
        "isDeviceOnlyAuthSupported" => is_device_only_auth_supported, set_is_device_only_auth_supported: bool;
        "isFallbackPublicClient" => is_fallback_public_client, set_is_fallback_public_client: bool;
        "keyCredentials" => key_credentials, set_key_credentials: Vec<KeyCredential>;
        /// Main logo, raw image bytes.
        "logo" => logo, set_logo: Base64Bytes;
        "nativeAuthenticationApisEnabled" => native_authentication_apis_enabled, set_native_authentication_apis_enabled: NativeAuthenticationApisEnabled;
        "notes" => notes, set_notes: String;
        "owners" => owners, set_owners: Vec<AnyDirectoryObject>;
        "passwordCredentials" => password_credentials, set_password_credentials: Vec<PasswordCredential>;
        "publicClient" => public_client, set_public_client: PublicClientApplication;
        "publisherDomain" => publisher_domain, set_publisher_domain: String;
        "requiredResourceAccess" => required_resource_access, set_required_resource_access: Vec<RequiredResourceAccess>;
        "serviceManagementReference" => service_management_reference, set_service_management_reference: String;
        /// Which account types may sign in, e.g. `AzureADMyOrg`.
        "signInAudience" => sign_in_audience, set_sign_in_audience: String;
        "spa" => spa, set_spa: SpaApplication;
        "tags" => tags, set_tags: Vec<String>;
        "tokenEncryptionKeyId" => token_encryption_key_id, set_token_encryption_key_id: Uuid;
        "uniqueName" => unique_name, set_unique_name: String;
        "verifiedPublisher" => verified_publisher, set_verified_publisher: VerifiedPublisher;
        "web" => web, set_web: WebApplication;
    }
}

graph_model! {
    pub struct ApiApplication {
        "acceptMappedClaims" => accept_mapped_claims, set_accept_mapped_claims: bool;
        "knownClientApplications" => known_client_applications, set_known_client_applications: Vec<Uuid>;
        "oauth2PermissionScopes" => oauth2_permission_scopes, set_oauth2_permission_scopes: Vec<PermissionScope>;
        "preAuthorizedApplications" => pre_authorized_applications, set_pre_authorized_applications: Vec<PreAuthorizedApplication>;
        /// 1 or 2; `None` lets the service pick.
        "requestedAccessTokenVersion" => requested_access_token_version, set_requested_access_token_version: i32;
    }
}

graph_model! {
    /// A delegated permission exposed by a web API.
    pub struct PermissionScope {
        "adminConsentDescription" => admin_consent_description, set_admin_consent_description: String;
        "adminConsentDisplayName" => admin_consent_display_name, set_admin_consent_display_name: String;
        "id" => id, set_id: Uuid;
        "isEnabled" => is_enabled, set_is_enabled: bool;
        "origin" => origin, set_origin: String;
        "type" => r#type, set_type: String;
        "userConsentDescription" => user_consent_description, set_user_consent_description: String;
        "userConsentDisplayName" => user_consent_display_name, set_user_consent_display_name: String;
        "value" => value, set_value: String;
    }
}

graph_model! {
    pub struct PreAuthorizedApplication {
        "appId" => app_id, set_app_id: String;
        "delegatedPermissionIds" => delegated_permission_ids, set_delegated_permission_ids: Vec<String>;
    }
}

graph_model! {
    pub struct WebApplication {
        "homePageUrl" => home_page_url, set_home_page_url: String;
        "implicitGrantSettings" => implicit_grant_settings, set_implicit_grant_settings: ImplicitGrantSettings;
        "logoutUrl" => logout_url, set_logout_url: String;
        "redirectUris" => redirect_uris, set_redirect_uris: Vec<String>;
        "redirectUriSettings" => redirect_uri_settings, set_redirect_uri_settings: Vec<RedirectUriSettings>;
    }
}

graph_model! {
    pub struct ImplicitGrantSettings {
        "enableAccessTokenIssuance" => enable_access_token_issuance, set_enable_access_token_issuance: bool;
        "enableIdTokenIssuance" => enable_id_token_issuance, set_enable_id_token_issuance: bool;
    }
}

graph_model! {
    pub struct RedirectUriSettings {
        "index" => index, set_index: i32;
        "uri" => uri, set_uri: String;
    }
}

graph_model! {
    pub struct SpaApplication {
        "redirectUris" => redirect_uris, set_redirect_uris: Vec<String>;
    }
}

graph_model! {
    pub struct PublicClientApplication {
        "redirectUris" => redirect_uris, set_redirect_uris: Vec<String>;
    }
}

graph_model! {
    /// Permissions an application requires on one resource application.
    pub struct RequiredResourceAccess {
        "resourceAccess" => resource_access, set_resource_access: Vec<ResourceAccess>;
        "resourceAppId" => resource_app_id, set_resource_app_id: String;
    }
}

graph_model! {
    pub struct ResourceAccess {
        "id" => id, set_id: Uuid;
        /// `Scope` for delegated permissions, `Role` for app roles.
        "type" => r#type, set_type: String;
    }
}
