use super::Entity;
use super::enums::{
    AutomaticUpdateMode, Enablement, WindowsDeliveryOptimizationMode,
    WindowsUpdateForBusinessUpdateWeeks, WindowsUpdateType,
};
use chrono::{DateTime, FixedOffset, NaiveDate};

graph_model! {
    /// Base of every Intune device configuration profile.
    pub struct DeviceConfiguration: Entity {
        "createdDateTime" => created_date_time, set_created_date_time: DateTime<FixedOffset>;
        "description" => description, set_description: String;
        "displayName" => display_name, set_display_name: String;
        "lastModifiedDateTime" => last_modified_date_time, set_last_modified_date_time: DateTime<FixedOffset>;
        "version" => version, set_version: i32;
    }
}

graph_model! {
    /// Windows Update for Business ring settings.
    pub struct WindowsUpdateForBusinessConfiguration: DeviceConfiguration {
        odata_type: "#microsoft.graph.windowsUpdateForBusinessConfiguration",
        "allowWindows11Upgrade" => allow_windows11_upgrade, set_allow_windows11_upgrade: bool;
        "automaticUpdateMode" => automatic_update_mode, set_automatic_update_mode: AutomaticUpdateMode;
        "businessReadyUpdatesOnly" => business_ready_updates_only, set_business_ready_updates_only: WindowsUpdateType;
        "deadlineForFeatureUpdatesInDays" => deadline_for_feature_updates_in_days, set_deadline_for_feature_updates_in_days: i32;
        "deadlineForQualityUpdatesInDays" => deadline_for_quality_updates_in_days, set_deadline_for_quality_updates_in_days: i32;
        "deadlineGracePeriodInDays" => deadline_grace_period_in_days, set_deadline_grace_period_in_days: i32;
        "deliveryOptimizationMode" => delivery_optimization_mode, set_delivery_optimization_mode: WindowsDeliveryOptimizationMode;
        "driversExcluded" => drivers_excluded, set_drivers_excluded: bool;
        "featureUpdatesDeferralPeriodInDays" => feature_updates_deferral_period_in_days, set_feature_updates_deferral_period_in_days: i32;
        "featureUpdatesPaused" => feature_updates_paused, set_feature_updates_paused: bool;
        "featureUpdatesPauseExpiryDateTime" => feature_updates_pause_expiry_date_time, set_feature_updates_pause_expiry_date_time: DateTime<FixedOffset>;
        "featureUpdatesPauseStartDate" => feature_updates_pause_start_date, set_feature_updates_pause_start_date: NaiveDate;
        "featureUpdatesRollbackWindowInDays" => feature_updates_rollback_window_in_days, set_feature_updates_rollback_window_in_days: i32;
        "microsoftUpdateServiceAllowed" => microsoft_update_service_allowed, set_microsoft_update_service_allowed: bool;
        "postponeRebootUntilAfterDeadline" => postpone_reboot_until_after_deadline, set_postpone_reboot_until_after_deadline: bool;
        "qualityUpdatesDeferralPeriodInDays" => quality_updates_deferral_period_in_days, set_quality_updates_deferral_period_in_days: i32;
        "qualityUpdatesPaused" => quality_updates_paused, set_quality_updates_paused: bool;
        "qualityUpdatesPauseExpiryDateTime" => quality_updates_pause_expiry_date_time, set_quality_updates_pause_expiry_date_time: DateTime<FixedOffset>;
        "qualityUpdatesPauseStartDate" => quality_updates_pause_start_date, set_quality_updates_pause_start_date: NaiveDate;
        "skipChecksBeforeRestart" => skip_checks_before_restart, set_skip_checks_before_restart: bool;
        /// Weeks of the month updates may install; a flag set.
        "updateWeeks" => update_weeks, set_update_weeks: WindowsUpdateForBusinessUpdateWeeks;
        "userPauseAccess" => user_pause_access, set_user_pause_access: Enablement;
        "userWindowsUpdateScanAccess" => user_windows_update_scan_access, set_user_windows_update_scan_access: Enablement;
    }
}

graph_union! {
    /// Any device configuration profile, resolved from `@odata.type`.
    pub enum AnyDeviceConfiguration: DeviceConfiguration = "#microsoft.graph.deviceConfiguration" {
        "#microsoft.graph.windowsUpdateForBusinessConfiguration" => WindowsUpdateForBusinessConfiguration,
    }
}
