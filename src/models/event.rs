//! Calendars and calendar items.

use super::Entity;
use super::enums::{
    AttendeeType, BodyType, CalendarColor, FreeBusyStatus, Importance, OnlineMeetingProviderType,
    ResponseType, Sensitivity,
};
use chrono::{DateTime, FixedOffset};

graph_model! {
    /// Common base of mail, calendar and contact items. Never instantiated
    /// with its own discriminator.
    pub struct OutlookItem: Entity {
        "categories" => categories, set_categories: Vec<String>;
        /// Version of the item; changes on every modification.
        "changeKey" => change_key, set_change_key: String;
        "createdDateTime" => created_date_time, set_created_date_time: DateTime<FixedOffset>;
        "lastModifiedDateTime" => last_modified_date_time, set_last_modified_date_time: DateTime<FixedOffset>;
    }
}

graph_model! {
    /// A calendar event.
    pub struct Event: OutlookItem {
        odata_type: "#microsoft.graph.event",
        "allowNewTimeProposals" => allow_new_time_proposals, set_allow_new_time_proposals: bool;
        "attendees" => attendees, set_attendees: Vec<Attendee>;
        "body" => body, set_body: ItemBody;
        "bodyPreview" => body_preview, set_body_preview: String;
        "end" => end, set_end: DateTimeTimeZone;
        "hasAttachments" => has_attachments, set_has_attachments: bool;
        "hideAttendees" => hide_attendees, set_hide_attendees: bool;
        "iCalUId" => i_cal_u_id, set_i_cal_u_id: String;
        "importance" => importance, set_importance: Importance;
        "isAllDay" => is_all_day, set_is_all_day: bool;
        "isCancelled" => is_cancelled, set_is_cancelled: bool;
        "isDraft" => is_draft, set_is_draft: bool;
        "isOnlineMeeting" => is_online_meeting, set_is_online_meeting: bool;
        "isOrganizer" => is_organizer, set_is_organizer: bool;
        "isReminderOn" => is_reminder_on, set_is_reminder_on: bool;
        "onlineMeetingUrl" => online_meeting_url, set_online_meeting_url: String;
        "organizer" => organizer, set_organizer: AnyRecipient;
        "originalStart" => original_start, set_original_start: DateTime<FixedOffset>;
        "reminderMinutesBeforeStart" => reminder_minutes_before_start, set_reminder_minutes_before_start: i32;
        "responseRequested" => response_requested, set_response_requested: bool;
        "responseStatus" => response_status, set_response_status: ResponseStatus;
        "sensitivity" => sensitivity, set_sensitivity: Sensitivity;
        "seriesMasterId" => series_master_id, set_series_master_id: String;
        "showAs" => show_as, set_show_as: FreeBusyStatus;
        "start" => start, set_start: DateTimeTimeZone;
        "subject" => subject, set_subject: String;
        "transactionId" => transaction_id, set_transaction_id: String;
        "webLink" => web_link, set_web_link: String;
    }
}

graph_model! {
    /// A container of events.
    pub struct Calendar: Entity {
        odata_type: "#microsoft.graph.calendar",
        /// Providers usable for online meetings in this calendar. Members the
        /// crate does not know are dropped on read.
        "allowedOnlineMeetingProviders" => allowed_online_meeting_providers, set_allowed_online_meeting_providers: Vec<OnlineMeetingProviderType>;
        "canEdit" => can_edit, set_can_edit: bool;
        "canShare" => can_share, set_can_share: bool;
        "canViewPrivateItems" => can_view_private_items, set_can_view_private_items: bool;
        "changeKey" => change_key, set_change_key: String;
        "color" => color, set_color: CalendarColor;
        "defaultOnlineMeetingProvider" => default_online_meeting_provider, set_default_online_meeting_provider: OnlineMeetingProviderType;
        "hexColor" => hex_color, set_hex_color: String;
        "isDefaultCalendar" => is_default_calendar, set_is_default_calendar: bool;
        "isRemovable" => is_removable, set_is_removable: bool;
        "isTallyingResponses" => is_tallying_responses, set_is_tallying_responses: bool;
        "name" => name, set_name: String;
        "owner" => owner, set_owner: EmailAddress;
    }
}

graph_model! {
    pub struct Recipient {
        "emailAddress" => email_address, set_email_address: EmailAddress;
    }
}

graph_model! {
    pub struct AttendeeBase: Recipient {
        odata_type: "#microsoft.graph.attendeeBase",
        "type" => r#type, set_type: AttendeeType;
    }
}

graph_model! {
    pub struct Attendee: AttendeeBase {
        odata_type: "#microsoft.graph.attendee",
        /// Alternate time the attendee proposed, if any.
        "proposedNewTime" => proposed_new_time, set_proposed_new_time: TimeSlot;
        "status" => status, set_status: ResponseStatus;
    }
}

graph_union! {
    /// Any recipient, resolved from `@odata.type`.
    pub enum AnyRecipient: Recipient = "#microsoft.graph.recipient" {
        "#microsoft.graph.attendee" => Attendee,
        "#microsoft.graph.attendeeBase" => AttendeeBase,
    }
}

graph_model! {
    pub struct EmailAddress {
        "address" => address, set_address: String;
        "name" => name, set_name: String;
    }
}

graph_model! {
    pub struct ResponseStatus {
        "response" => response, set_response: ResponseType;
        "time" => time, set_time: DateTime<FixedOffset>;
    }
}

graph_model! {
    pub struct TimeSlot {
        "end" => end, set_end: DateTimeTimeZone;
        "start" => start, set_start: DateTimeTimeZone;
    }
}

graph_model! {
    /// A wall-clock time with the zone it is expressed in.
    ///
    /// `dateTime` has no offset (`2024-03-01T08:30:00.0000000`), so it stays a
    /// string; the zone name decides its meaning.
    pub struct DateTimeTimeZone {
        "dateTime" => date_time, set_date_time: String;
        "timeZone" => time_zone, set_time_zone: String;
    }
}

graph_model! {
    pub struct ItemBody {
        "content" => content, set_content: String;
        "contentType" => content_type, set_content_type: BodyType;
    }
}
