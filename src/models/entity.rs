use super::{
    Application, Calendar, Device, DeviceConfiguration, DirectoryObject, Event, Group, OrgContact,
    OutlookItem, ServicePrincipal, User, WindowsUpdateForBusinessConfiguration,
};

graph_model! {
    /// Root of every addressable resource.
    pub struct Entity {
        /// Unique identifier, assigned by the service.
        "id" => id, set_id: String;
    }
}

graph_union! {
    /// Any entity, resolved from `@odata.type`.
    pub enum AnyEntity: Entity {
        "#microsoft.graph.application" => Application,
        "#microsoft.graph.calendar" => Calendar,
        "#microsoft.graph.device" => Device,
        "#microsoft.graph.deviceConfiguration" => DeviceConfiguration,
        "#microsoft.graph.directoryObject" => DirectoryObject,
        "#microsoft.graph.event" => Event,
        "#microsoft.graph.group" => Group,
        "#microsoft.graph.orgContact" => OrgContact,
        "#microsoft.graph.outlookItem" => OutlookItem,
        "#microsoft.graph.servicePrincipal" => ServicePrincipal,
        "#microsoft.graph.user" => User,
        "#microsoft.graph.windowsUpdateForBusinessConfiguration" => WindowsUpdateForBusinessConfiguration,
    }
}
