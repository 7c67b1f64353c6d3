//! Generated API surface.
//!
//! One file per resource family:
//!
//! - [`enums`] – wire enumerations and flag sets
//! - [`entity`] – `Entity` and the `AnyEntity` union
//! - [`directory_object`] – `DirectoryObject` and the `AnyDirectoryObject` union
//! - [`application`], [`service_principal`], [`user`], [`group`],
//!   [`org_contact`], [`device`] – directory objects and their complex types
//! - [`shared`] – complex types used across several directory objects
//! - [`event`] – calendars, calendar items and recipients
//! - [`device_configuration`] – Intune configuration profiles

pub mod application;
pub mod device;
pub mod device_configuration;
pub mod directory_object;
pub mod entity;
pub mod enums;
pub mod event;
pub mod group;
pub mod org_contact;
pub mod service_principal;
pub mod shared;
pub mod user;

pub use application::*;
pub use device::*;
pub use device_configuration::*;
pub use directory_object::*;
pub use entity::*;
pub use enums::*;
pub use event::*;
pub use group::*;
pub use org_contact::*;
pub use service_principal::*;
pub use shared::*;
pub use user::*;

// ────────────────────────────────────────────────────────────────────────────
// Union conversions
// ────────────────────────────────────────────────────────────────────────────

impl TryFrom<AnyEntity> for AnyDirectoryObject {
    type Error = AnyEntity;

    /// Narrow to a directory object; anything else is handed back unchanged.
    fn try_from(entity: AnyEntity) -> Result<Self, AnyEntity> {
        Ok(match entity {
            AnyEntity::DirectoryObject(m) => Self::DirectoryObject(m),
            AnyEntity::Application(m) => Self::Application(m),
            AnyEntity::Device(m) => Self::Device(m),
            AnyEntity::Group(m) => Self::Group(m),
            AnyEntity::OrgContact(m) => Self::OrgContact(m),
            AnyEntity::ServicePrincipal(m) => Self::ServicePrincipal(m),
            AnyEntity::User(m) => Self::User(m),
            other => return Err(other),
        })
    }
}

impl From<AnyDirectoryObject> for AnyEntity {
    fn from(object: AnyDirectoryObject) -> Self {
        match object {
            AnyDirectoryObject::DirectoryObject(m) => Self::DirectoryObject(m),
            AnyDirectoryObject::Application(m) => Self::Application(m),
            AnyDirectoryObject::Device(m) => Self::Device(m),
            AnyDirectoryObject::Group(m) => Self::Group(m),
            AnyDirectoryObject::OrgContact(m) => Self::OrgContact(m),
            AnyDirectoryObject::ServicePrincipal(m) => Self::ServicePrincipal(m),
            AnyDirectoryObject::User(m) => Self::User(m),
        }
    }
}

impl TryFrom<AnyEntity> for AnyDeviceConfiguration {
    type Error = AnyEntity;

    fn try_from(entity: AnyEntity) -> Result<Self, AnyEntity> {
        Ok(match entity {
            AnyEntity::DeviceConfiguration(m) => Self::DeviceConfiguration(m),
            AnyEntity::WindowsUpdateForBusinessConfiguration(m) => {
                Self::WindowsUpdateForBusinessConfiguration(m)
            }
            other => return Err(other),
        })
    }
}

impl From<AnyDeviceConfiguration> for AnyEntity {
    fn from(config: AnyDeviceConfiguration) -> Self {
        match config {
            AnyDeviceConfiguration::DeviceConfiguration(m) => Self::DeviceConfiguration(m),
            AnyDeviceConfiguration::WindowsUpdateForBusinessConfiguration(m) => {
                Self::WindowsUpdateForBusinessConfiguration(m)
            }
        }
    }
}
