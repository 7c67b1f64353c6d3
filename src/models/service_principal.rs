use super::{
    AddIn, AnyDirectoryObject, AppRole, CustomSecurityAttributeValue, DirectoryObject,
    InformationalUrl, KeyCredential, PasswordCredential, PermissionScope, VerifiedPublisher,
};
use uuid::Uuid;

graph_model! {
    /// The instance of an application in a tenant.
    pub struct ServicePrincipal: DirectoryObject {
        odata_type: "#microsoft.graph.servicePrincipal",
        "accountEnabled" => account_enabled, set_account_enabled: bool;
        "addIns" => add_ins, set_add_ins: Vec<AddIn>;
        "alternativeNames" => alternative_names, set_alternative_names: Vec<String>;
        "appDescription" => app_description, set_app_description: String;
        "appDisplayName" => app_display_name, set_app_display_name: String;
        "appId" => app_id, set_app_id: String;
        "appOwnerOrganizationId" => app_owner_organization_id, set_app_owner_organization_id: Uuid;
        "appRoleAssignmentRequired" => app_role_assignment_required, set_app_role_assignment_required: bool;
        "appRoles" => app_roles, set_app_roles: Vec<AppRole>;
        "customSecurityAttributes" => custom_security_attributes, set_custom_security_attributes: CustomSecurityAttributeValue;
        "description" => description, set_description: String;
        "displayName" => display_name, set_display_name: String;
        "homepage" => homepage, set_homepage: String;
        "info" => info, set_info: InformationalUrl;
        "keyCredentials" => key_credentials, set_key_credentials: Vec<KeyCredential>;
        "loginUrl" => login_url, set_login_url: String;
        "logoutUrl" => logout_url, set_logout_url: String;
        "notes" => notes, set_notes: String;
        "notificationEmailAddresses" => notification_email_addresses, set_notification_email_addresses: Vec<String>;
        "oauth2PermissionScopes" => oauth2_permission_scopes, set_oauth2_permission_scopes: Vec<PermissionScope>;
        "owners" => owners, set_owners: Vec<AnyDirectoryObject>;
        "passwordCredentials" => password_credentials, set_password_credentials: Vec<PasswordCredential>;
        "preferredSingleSignOnMode" => preferred_single_sign_on_mode, set_preferred_single_sign_on_mode: String;
        "preferredTokenSigningKeyThumbprint" => preferred_token_signing_key_thumbprint, set_preferred_token_signing_key_thumbprint: String;
        "replyUrls" => reply_urls, set_reply_urls: Vec<String>;
        "samlSingleSignOnSettings" => saml_single_sign_on_settings, set_saml_single_sign_on_settings: SamlSingleSignOnSettings;
        "servicePrincipalNames" => service_principal_names, set_service_principal_names: Vec<String>;
        /// `Application`, `ManagedIdentity`, `Legacy` or `SocialIdp`.
        "servicePrincipalType" => service_principal_type, set_service_principal_type: String;
        "signInAudience" => sign_in_audience, set_sign_in_audience: String;
        "tags" => tags, set_tags: Vec<String>;
        "tokenEncryptionKeyId" => token_encryption_key_id, set_token_encryption_key_id: Uuid;
        "verifiedPublisher" => verified_publisher, set_verified_publisher: VerifiedPublisher;
    }
}

graph_model! {
    pub struct SamlSingleSignOnSettings {
        "relayState" => relay_state, set_relay_state: String;
    }
}
