//! Wire enumerations used by the models.

wire_enum! {
    /// Role of an attendee in a meeting.
    pub enum AttendeeType {
        Required => "required",
        Optional => "optional",
        Resource => "resource",
    }
}

wire_enum! {
    pub enum ResponseType {
        None => "none",
        Organizer => "organizer",
        TentativelyAccepted => "tentativelyAccepted",
        Accepted => "accepted",
        Declined => "declined",
        NotResponded => "notResponded",
    }
}

wire_enum! {
    pub enum Importance {
        Low => "low",
        Normal => "normal",
        High => "high",
    }
}

wire_enum! {
    pub enum Sensitivity {
        Normal => "normal",
        Personal => "personal",
        Private => "private",
        Confidential => "confidential",
    }
}

wire_enum! {
    /// Availability shown for the time span of an event.
    pub enum FreeBusyStatus {
        Unknown => "unknown",
        Free => "free",
        Tentative => "tentative",
        Busy => "busy",
        Oof => "oof",
        WorkingElsewhere => "workingElsewhere",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    pub enum OnlineMeetingProviderType {
        Unknown => "unknown",
        SkypeForBusiness => "skypeForBusiness",
        SkypeForConsumer => "skypeForConsumer",
        TeamsForBusiness => "teamsForBusiness",
    }
}

wire_enum! {
    /// Color theme that tells calendars apart in a client.
    pub enum CalendarColor {
        Auto => "auto",
        LightBlue => "lightBlue",
        LightGreen => "lightGreen",
        LightOrange => "lightOrange",
        LightGray => "lightGray",
        LightYellow => "lightYellow",
        LightTeal => "lightTeal",
        LightPink => "lightPink",
        LightBrown => "lightBrown",
        LightRed => "lightRed",
        MaxColor => "maxColor",
    }
}

wire_enum! {
    pub enum BodyType {
        Text => "text",
        Html => "html",
    }
}

wire_enum! {
    /// Which native authentication APIs an application may call.
    pub enum NativeAuthenticationApisEnabled {
        None => "none",
        All => "all",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    pub enum Enablement {
        NotConfigured => "notConfigured",
        Enabled => "enabled",
        Disabled => "disabled",
    }
}

wire_enum! {
    /// How Windows Update installs updates on a device.
    pub enum AutomaticUpdateMode {
        UserDefined => "userDefined",
        NotifyDownload => "notifyDownload",
        AutoInstallAtMaintenanceTime => "autoInstallAtMaintenanceTime",
        AutoInstallAndRebootAtMaintenanceTime => "autoInstallAndRebootAtMaintenanceTime",
        AutoInstallAndRebootAtScheduledTime => "autoInstallAndRebootAtScheduledTime",
        AutoInstallAndRebootWithoutEndUserControl => "autoInstallAndRebootWithoutEndUserControl",
    }
}

wire_enum! {
    pub enum WindowsUpdateType {
        UserDefined => "userDefined",
        All => "all",
        BusinessReadyOnly => "businessReadyOnly",
        WindowsInsiderBuildFast => "windowsInsiderBuildFast",
        WindowsInsiderBuildSlow => "windowsInsiderBuildSlow",
        WindowsInsiderBuildRelease => "windowsInsiderBuildRelease",
    }
}

wire_enum! {
    pub enum WindowsDeliveryOptimizationMode {
        UserDefined => "userDefined",
        HttpOnly => "httpOnly",
        HttpWithPeeringNat => "httpWithPeeringNat",
        HttpWithPeeringPrivateGroup => "httpWithPeeringPrivateGroup",
        HttpWithInternetPeering => "httpWithInternetPeering",
        SimpleDownload => "simpleDownload",
        BypassMode => "bypassMode",
    }
}

wire_flags! {
    /// Weeks of the month on which scheduled updates may install.
    pub struct WindowsUpdateForBusinessUpdateWeeks {
        const USER_DEFINED = 1 => "userDefined";
        const FIRST_WEEK = 2 => "firstWeek";
        const SECOND_WEEK = 4 => "secondWeek";
        const THIRD_WEEK = 8 => "thirdWeek";
        const FOURTH_WEEK = 16 => "fourthWeek";
        const EVERY_WEEK = 32 => "everyWeek";
        const UNKNOWN_FUTURE_VALUE = 64 => "unknownFutureValue";
    }
}
