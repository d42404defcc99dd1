use super::{FieldUsage, StaticAccessPath, StaticField, SuggestionData};
use crate::fields::model::{FieldType, UsageFrequency};

pub(super) static FIELDS: &[StaticField] = &[
    StaticField {
        id: "accountId",
        name: "Account Id",
        description: "Stable unique identifier of the user",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "accountId",
            value_type: FieldType::String,
            frequency: UsageFrequency::High,
        }],
        examples: &["5b10ac8d82e05b22cc7d4ef5"],
        common_usage: &[&["accountId", "displayName"]],
    },
    StaticField {
        id: "displayName",
        name: "Display Name",
        description: "Name shown in the tracker UI",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "displayName",
            value_type: FieldType::String,
            frequency: UsageFrequency::High,
        }],
        examples: &["Mia Krystosek"],
        common_usage: &[&["displayName", "emailAddress"]],
    },
    StaticField {
        id: "emailAddress",
        name: "Email Address",
        description: "Email address, subject to privacy settings",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "emailAddress",
            value_type: FieldType::String,
            frequency: UsageFrequency::Medium,
        }],
        examples: &["mia@example.com"],
        common_usage: &[&["displayName", "emailAddress"]],
    },
    StaticField {
        id: "active",
        name: "Active",
        description: "Whether the account is active",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "active",
            value_type: FieldType::String,
            frequency: UsageFrequency::Medium,
        }],
        examples: &["true"],
        common_usage: &[&["displayName", "active"]],
    },
    StaticField {
        id: "timeZone",
        name: "Time Zone",
        description: "Preferred time zone of the user",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "timeZone",
            value_type: FieldType::String,
            frequency: UsageFrequency::Low,
        }],
        examples: &["Europe/Berlin"],
        common_usage: &[&["displayName", "timeZone"]],
    },
    StaticField {
        id: "groups",
        name: "Groups",
        description: "Groups the user belongs to",
        field_type: FieldType::Array,
        access_paths: &[
            StaticAccessPath {
                path: "groups.items[].name",
                value_type: FieldType::String,
                frequency: UsageFrequency::Low,
            },
            StaticAccessPath {
                path: "groups.size",
                value_type: FieldType::String,
                frequency: UsageFrequency::Low,
            },
        ],
        examples: &["jira-software-users"],
        common_usage: &[&["displayName", "groups.items[].name"]],
    },
];

pub(super) static SUGGESTION_DATA: SuggestionData = SuggestionData {
    typo_corrections: &[
        ("email", "emailAddress"),
        ("mail", "emailAddress"),
        ("displayname", "displayName"),
        ("display", "displayName"),
        ("account", "accountId"),
        ("timezone", "timeZone"),
    ],
    usage_statistics: &[
        (
            "accountId",
            FieldUsage {
                frequency: UsageFrequency::High,
                availability: 1.0,
            },
        ),
        (
            "displayName",
            FieldUsage {
                frequency: UsageFrequency::High,
                availability: 1.0,
            },
        ),
        (
            "emailAddress",
            FieldUsage {
                frequency: UsageFrequency::Medium,
                availability: 0.75,
            },
        ),
        (
            "active",
            FieldUsage {
                frequency: UsageFrequency::Medium,
                availability: 1.0,
            },
        ),
        (
            "timeZone",
            FieldUsage {
                frequency: UsageFrequency::Low,
                availability: 0.9,
            },
        ),
        (
            "groups",
            FieldUsage {
                frequency: UsageFrequency::Low,
                availability: 0.5,
            },
        ),
    ],
    contextual_suggestions: &["displayName", "accountId", "emailAddress", "active"],
    custom_field_patterns: &[("department", "customfield_*_department")],
    last_analyzed: "2026-05-12T00:00:00Z",
};
