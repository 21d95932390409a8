//! Grandfathered casing exceptions.
//!
//! A small number of fields were published with camelCase names before the
//! field-casing rule was introduced. They cannot be renamed without breaking
//! existing clients, so the casing rule downgrades them from failure to
//! warning. The table is an explicit, hand-maintained allow-list: new
//! violations must not silently join it.

use std::collections::{BTreeMap, BTreeSet};

/// `(version, type name, field names)` triples exempt from the field-casing
/// failure.
const GRANDFATHERED: &[(&str, &str, &[&str])] = &[
    (
        "v0",
        "ConfigurationMessage",
        &[
            "readReceipts",
            "unidentifiedDeliveryIndicators",
            "typingIndicators",
            "linkPreviews",
        ],
    ),
    ("v0", "HangupMessage", &["deviceId"]),
    ("v0", "JsonAccount", &["deviceId"]),
    (
        "v0",
        "JsonAttachment",
        &["contentType", "storedFilename", "customFilename", "voiceNote"],
    ),
    (
        "v0",
        "JsonCallMessage",
        &[
            "destinationDeviceId",
            "isMultiRing",
            "offerMessage",
            "answerMessage",
            "busyMessage",
            "hangupMessage",
            "iceUpdateMessages",
        ],
    ),
    ("v0", "JsonTypingMessage", &["groupId"]),
    ("v0", "JsonStickerPackOperationMessage", &["packKey", "packID"]),
    ("v0", "JsonQuotedAttachment", &["contentType", "fileName"]),
    (
        "v0",
        "JsonSticker",
        &["deviceId", "packID", "packKey", "stickerID"],
    ),
    ("v0", "RemoteDelete", &["targetSentTimestamp"]),
    ("v0", "Success", &["needsSync"]),
    ("v1", "AcceptInvitationRequest", &["groupID"]),
    ("v1", "ApproveMembershipRequest", &["groupID"]),
    ("v1", "GroupList", &["legacyGroups"]),
    ("v1", "GetGroupRequest", &["groupID"]),
    (
        "v1",
        "JsonDataMessage",
        &[
            "endSession",
            "profileKeyUpdate",
            "remoteDelete",
            "groupV2",
            "expiresInSeconds",
            "viewOnce",
        ],
    ),
    (
        "v1",
        "JsonGroupV2Info",
        &[
            "pendingMembers",
            "accessControl",
            "pendingMemberDetail",
            "requestingMembers",
            "inviteLink",
            "memberDetail",
        ],
    ),
    (
        "v1",
        "JsonMessageEnvelope",
        &[
            "dataMessage",
            "syncMessage",
            "sourceDevice",
            "timestampISO",
            "isUnidentifiedSender",
            "hasLegacyMessage",
            "hasContent",
            "callMessage",
            "serverTimestamp",
            "serverDeliveredTimestamp",
        ],
    ),
    (
        "v1",
        "JsonSendMessageResult",
        &["identityFailure", "networkFailure", "unregisteredFailure"],
    ),
    ("v1", "RemoveLinkedDeviceRequest", &["deviceId"]),
    (
        "v1",
        "SendRequest",
        &["recipientAddress", "recipientGroupId", "messageBody"],
    ),
    ("v1", "ReactRequest", &["recipientAddress", "recipientGroupId"]),
    ("v1", "JsonGroupInfo", &["avatarId", "groupId"]),
    ("v1", "JsonBlockedListMessage", &["groupIds"]),
    (
        "v1",
        "JsonSentTranscriptMessage",
        &[
            "expirationStartTimestamp",
            "unidentifiedStatus",
            "isRecipientUpdate",
        ],
    ),
    ("v1", "JsonMessageRequestResponseMessage", &["groupId"]),
    (
        "v1",
        "JsonGroupJoinInfo",
        &["groupID", "memberCount", "addFromInviteLink", "pendingAdminApproval"],
    ),
    ("v1", "SetProfile", &["avatarFile"]),
    ("v1", "LeaveGroupRequest", &["groupID"]),
    ("v1", "DeviceInfo", &["lastSeen"]),
    ("v1", "JsonReaction", &["targetAuthor", "targetSentTimestamp"]),
    (
        "v1",
        "JsonSyncMessage",
        &[
            "blockedList",
            "readMessages",
            "stickerPackOperations",
            "contactsComplete",
            "fetchType",
            "messageRequestResponse",
            "viewOnceOpen",
        ],
    ),
    (
        "v1",
        "UpdateGroupRequest",
        &[
            "updateTimer",
            "addMembers",
            "removeMembers",
            "updateRole",
            "updateAccessControl",
            "resetLink",
            "groupID",
        ],
    ),
    ("v1", "JsonVerifiedMessage", &["identityKey"]),
];

/// Immutable lookup table of grandfathered casing exceptions, injected into
/// the casing rule at construction time so tests can supply their own tables.
#[derive(Debug, Clone, Default)]
pub struct CasingOverrides {
    entries: BTreeMap<(String, String), BTreeSet<String>>,
}

impl CasingOverrides {
    /// An empty table: every violation is a failure.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The published historical allow-list.
    pub fn grandfathered() -> Self {
        let mut overrides = Self::default();
        for (version, type_name, fields) in GRANDFATHERED {
            for field in *fields {
                overrides.insert(version, type_name, field);
            }
        }
        overrides
    }

    /// Add an exception for a `(version, type, field)` triple.
    pub fn insert(&mut self, version: &str, type_name: &str, field_name: &str) {
        self.entries
            .entry((version.to_string(), type_name.to_string()))
            .or_default()
            .insert(field_name.to_string());
    }

    /// Whether the triple is exempt from the casing failure.
    pub fn contains(&self, version: &str, type_name: &str, field_name: &str) -> bool {
        self.entries
            .get(&(version.to_string(), type_name.to_string()))
            .is_some_and(|fields| fields.contains(field_name))
    }
}
