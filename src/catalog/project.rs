use super::{FieldUsage, StaticAccessPath, StaticField, SuggestionData};
use crate::fields::model::{FieldType, UsageFrequency};

pub(super) static FIELDS: &[StaticField] = &[
    StaticField {
        id: "key",
        name: "Key",
        description: "Short unique project key",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "key",
            value_type: FieldType::String,
            frequency: UsageFrequency::High,
        }],
        examples: &["PLAT", "OPS"],
        common_usage: &[&["key", "name"]],
    },
    StaticField {
        id: "name",
        name: "Name",
        description: "Human-readable project name",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "name",
            value_type: FieldType::String,
            frequency: UsageFrequency::High,
        }],
        examples: &["Platform Engineering"],
        common_usage: &[&["key", "name"]],
    },
    StaticField {
        id: "lead",
        name: "Lead",
        description: "Project lead",
        field_type: FieldType::Object,
        access_paths: &[
            StaticAccessPath {
                path: "lead.displayName",
                value_type: FieldType::String,
                frequency: UsageFrequency::Medium,
            },
            StaticAccessPath {
                path: "lead.accountId",
                value_type: FieldType::String,
                frequency: UsageFrequency::Low,
            },
        ],
        examples: &["lead.displayName"],
        common_usage: &[&["name", "lead.displayName"]],
    },
    StaticField {
        id: "projectTypeKey",
        name: "Project Type",
        description: "Product family the project belongs to",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "projectTypeKey",
            value_type: FieldType::String,
            frequency: UsageFrequency::Medium,
        }],
        examples: &["software", "service_desk"],
        common_usage: &[&["key", "projectTypeKey"]],
    },
    StaticField {
        id: "projectCategory",
        name: "Category",
        description: "Administrative grouping of projects",
        field_type: FieldType::Object,
        access_paths: &[StaticAccessPath {
            path: "projectCategory.name",
            value_type: FieldType::String,
            frequency: UsageFrequency::Low,
        }],
        examples: &["Internal"],
        common_usage: &[&["name", "projectCategory.name"]],
    },
    StaticField {
        id: "description",
        name: "Description",
        description: "Project description",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "description",
            value_type: FieldType::String,
            frequency: UsageFrequency::Low,
        }],
        examples: &[],
        common_usage: &[&["name", "description"]],
    },
    StaticField {
        id: "archived",
        name: "Archived",
        description: "Whether the project is archived",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "archived",
            value_type: FieldType::String,
            frequency: UsageFrequency::Low,
        }],
        examples: &["false"],
        common_usage: &[&["key", "archived"]],
    },
];

pub(super) static SUGGESTION_DATA: SuggestionData = SuggestionData {
    typo_corrections: &[
        ("ke", "key"),
        ("nam", "name"),
        ("led", "lead"),
        ("leed", "lead"),
        ("categroy", "projectCategory"),
        ("type", "projectTypeKey"),
    ],
    usage_statistics: &[
        (
            "key",
            FieldUsage {
                frequency: UsageFrequency::High,
                availability: 1.0,
            },
        ),
        (
            "name",
            FieldUsage {
                frequency: UsageFrequency::High,
                availability: 1.0,
            },
        ),
        (
            "lead",
            FieldUsage {
                frequency: UsageFrequency::Medium,
                availability: 0.9,
            },
        ),
        (
            "projectTypeKey",
            FieldUsage {
                frequency: UsageFrequency::Medium,
                availability: 1.0,
            },
        ),
        (
            "projectCategory",
            FieldUsage {
                frequency: UsageFrequency::Low,
                availability: 0.4,
            },
        ),
        (
            "description",
            FieldUsage {
                frequency: UsageFrequency::Low,
                availability: 0.7,
            },
        ),
    ],
    contextual_suggestions: &["key", "name", "lead", "projectTypeKey", "projectCategory"],
    custom_field_patterns: &[("budget", "customfield_*_budget"), ("owner", "customfield_*_owner")],
    last_analyzed: "2026-05-12T00:00:00Z",
};
