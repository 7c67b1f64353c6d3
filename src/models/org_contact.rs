use super::{AnyDirectoryObject, DirectoryObject};
use chrono::{DateTime, FixedOffset};

graph_model! {
    /// An organizational contact synchronized from on-premises.
    pub struct OrgContact: DirectoryObject {
        odata_type: "#microsoft.graph.orgContact",
        "companyName" => company_name, set_company_name: String;
        "department" => department, set_department: String;
        "displayName" => display_name, set_display_name: String;
        "givenName" => given_name, set_given_name: String;
        "jobTitle" => job_title, set_job_title: String;
        "mail" => mail, set_mail: String;
        "mailNickname" => mail_nickname, set_mail_nickname: String;
        "manager" => manager, set_manager: AnyDirectoryObject;
        "onPremisesLastSyncDateTime" => on_premises_last_sync_date_time, set_on_premises_last_sync_date_time: DateTime<FixedOffset>;
        "onPremisesSyncEnabled" => on_premises_sync_enabled, set_on_premises_sync_enabled: bool;
        "proxyAddresses" => proxy_addresses, set_proxy_addresses: Vec<String>;
        "surname" => surname, set_surname: String;
    }
}
