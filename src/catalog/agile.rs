use super::{FieldUsage, StaticAccessPath, StaticField, SuggestionData};
use crate::fields::model::{FieldType, UsageFrequency};

pub(super) static FIELDS: &[StaticField] = &[
    StaticField {
        id: "sprint",
        name: "Sprint",
        description: "Sprint the work item is scheduled in",
        field_type: FieldType::Object,
        access_paths: &[
            StaticAccessPath {
                path: "sprint.name",
                value_type: FieldType::String,
                frequency: UsageFrequency::High,
            },
            StaticAccessPath {
                path: "sprint.state",
                value_type: FieldType::String,
                frequency: UsageFrequency::High,
            },
            StaticAccessPath {
                path: "sprint.startDate",
                value_type: FieldType::String,
                frequency: UsageFrequency::Medium,
            },
            StaticAccessPath {
                path: "sprint.endDate",
                value_type: FieldType::String,
                frequency: UsageFrequency::Medium,
            },
        ],
        examples: &["Sprint 42", "active"],
        common_usage: &[&["sprint.name", "sprint.state"]],
    },
    StaticField {
        id: "board",
        name: "Board",
        description: "Board the sprint or backlog belongs to",
        field_type: FieldType::Object,
        access_paths: &[
            StaticAccessPath {
                path: "board.name",
                value_type: FieldType::String,
                frequency: UsageFrequency::Medium,
            },
            StaticAccessPath {
                path: "board.type",
                value_type: FieldType::String,
                frequency: UsageFrequency::Medium,
            },
        ],
        examples: &["scrum", "kanban"],
        common_usage: &[&["board.name", "board.type"]],
    },
    StaticField {
        id: "epic",
        name: "Epic",
        description: "Epic grouping the work item",
        field_type: FieldType::Object,
        access_paths: &[
            StaticAccessPath {
                path: "epic.name",
                value_type: FieldType::String,
                frequency: UsageFrequency::Medium,
            },
            StaticAccessPath {
                path: "epic.key",
                value_type: FieldType::String,
                frequency: UsageFrequency::Medium,
            },
            StaticAccessPath {
                path: "epic.done",
                value_type: FieldType::String,
                frequency: UsageFrequency::Low,
            },
        ],
        examples: &["Checkout rewrite"],
        common_usage: &[&["epic.key", "epic.name"]],
    },
    StaticField {
        id: "rank",
        name: "Rank",
        description: "Global backlog ordering value",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "rank",
            value_type: FieldType::String,
            frequency: UsageFrequency::Low,
        }],
        examples: &["0|i0051c:"],
        common_usage: &[&["rank", "sprint.name"]],
    },
    StaticField {
        id: "storyPoints",
        name: "Story Points",
        description: "Estimated effort in points",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "storyPoints",
            value_type: FieldType::String,
            frequency: UsageFrequency::Medium,
        }],
        examples: &["3", "8"],
        common_usage: &[&["storyPoints", "sprint.name"]],
    },
];

pub(super) static SUGGESTION_DATA: SuggestionData = SuggestionData {
    typo_corrections: &[
        ("sprnt", "sprint"),
        ("spint", "sprint"),
        ("eipc", "epic"),
        ("epik", "epic"),
        ("storypoints", "storyPoints"),
        ("points", "storyPoints"),
        ("bord", "board"),
    ],
    usage_statistics: &[
        (
            "sprint",
            FieldUsage {
                frequency: UsageFrequency::High,
                availability: 0.9,
            },
        ),
        (
            "sprint.name",
            FieldUsage {
                frequency: UsageFrequency::High,
                availability: 0.9,
            },
        ),
        (
            "board",
            FieldUsage {
                frequency: UsageFrequency::Medium,
                availability: 1.0,
            },
        ),
        (
            "epic",
            FieldUsage {
                frequency: UsageFrequency::Medium,
                availability: 0.65,
            },
        ),
        (
            "rank",
            FieldUsage {
                frequency: UsageFrequency::Low,
                availability: 0.95,
            },
        ),
        (
            "storyPoints",
            FieldUsage {
                frequency: UsageFrequency::Medium,
                availability: 0.7,
            },
        ),
    ],
    contextual_suggestions: &["sprint", "epic", "board", "storyPoints", "rank"],
    custom_field_patterns: &[
        ("sprint", "customfield_*_sprint"),
        ("epic", "customfield_*_epic_link"),
        ("story point", "customfield_*_story_points"),
        ("rank", "customfield_*_rank"),
    ],
    last_analyzed: "2026-05-12T00:00:00Z",
};
