use super::{Application, Device, Entity, Group, OrgContact, ServicePrincipal, User};
use chrono::{DateTime, FixedOffset};

graph_model! {
    /// An object stored in the directory.
    pub struct DirectoryObject: Entity {
        odata_type: "#microsoft.graph.directoryObject",
        /// When the object was soft-deleted. Only set on items in the recycle bin.
        "deletedDateTime" => deleted_date_time, set_deleted_date_time: DateTime<FixedOffset>;
    }
}

graph_union! {
    /// Any directory object, resolved from `@odata.type`.
    ///
    /// Navigation properties such as `owners` or `manager` hold these since
    /// the service returns mixed object kinds.
    pub enum AnyDirectoryObject: DirectoryObject = "#microsoft.graph.directoryObject" {
        "#microsoft.graph.application" => Application,
        "#microsoft.graph.device" => Device,
        "#microsoft.graph.group" => Group,
        "#microsoft.graph.orgContact" => OrgContact,
        "#microsoft.graph.servicePrincipal" => ServicePrincipal,
        "#microsoft.graph.user" => User,
    }
}
