use super::{FieldUsage, StaticAccessPath, StaticField, SuggestionData};
use crate::fields::model::{FieldType, UsageFrequency};

pub(super) static FIELDS: &[StaticField] = &[
    StaticField {
        id: "summary",
        name: "Summary",
        description: "One-line title of the issue",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "summary",
            value_type: FieldType::String,
            frequency: UsageFrequency::High,
        }],
        examples: &["Fix login timeout on mobile"],
        common_usage: &[&["summary", "status.name"]],
    },
    StaticField {
        id: "status",
        name: "Status",
        description: "Current workflow state of the issue",
        field_type: FieldType::Object,
        access_paths: &[
            StaticAccessPath {
                path: "status.name",
                value_type: FieldType::String,
                frequency: UsageFrequency::High,
            },
            StaticAccessPath {
                path: "status.statusCategory.key",
                value_type: FieldType::String,
                frequency: UsageFrequency::Medium,
            },
            StaticAccessPath {
                path: "status.statusCategory.name",
                value_type: FieldType::String,
                frequency: UsageFrequency::Low,
            },
        ],
        examples: &["In Progress", "Done"],
        common_usage: &[&["status.name"], &["status.statusCategory.key"]],
    },
    StaticField {
        id: "assignee",
        name: "Assignee",
        description: "User currently assigned to the issue",
        field_type: FieldType::Object,
        access_paths: &[
            StaticAccessPath {
                path: "assignee.displayName",
                value_type: FieldType::String,
                frequency: UsageFrequency::High,
            },
            StaticAccessPath {
                path: "assignee.accountId",
                value_type: FieldType::String,
                frequency: UsageFrequency::Medium,
            },
            StaticAccessPath {
                path: "assignee.emailAddress",
                value_type: FieldType::String,
                frequency: UsageFrequency::Low,
            },
        ],
        examples: &["assignee.displayName"],
        common_usage: &[&["assignee.displayName", "status.name"]],
    },
    StaticField {
        id: "reporter",
        name: "Reporter",
        description: "User who created the issue",
        field_type: FieldType::Object,
        access_paths: &[
            StaticAccessPath {
                path: "reporter.displayName",
                value_type: FieldType::String,
                frequency: UsageFrequency::Medium,
            },
            StaticAccessPath {
                path: "reporter.accountId",
                value_type: FieldType::String,
                frequency: UsageFrequency::Low,
            },
        ],
        examples: &["reporter.displayName"],
        common_usage: &[&["reporter.displayName"]],
    },
    StaticField {
        id: "priority",
        name: "Priority",
        description: "Relative importance of the issue",
        field_type: FieldType::Object,
        access_paths: &[
            StaticAccessPath {
                path: "priority.name",
                value_type: FieldType::String,
                frequency: UsageFrequency::High,
            },
            StaticAccessPath {
                path: "priority.id",
                value_type: FieldType::String,
                frequency: UsageFrequency::Low,
            },
        ],
        examples: &["Highest", "Low"],
        common_usage: &[&["priority.name", "status.name"]],
    },
    StaticField {
        id: "issuetype",
        name: "Issue Type",
        description: "Classification of the issue (bug, task, story)",
        field_type: FieldType::Object,
        access_paths: &[
            StaticAccessPath {
                path: "issuetype.name",
                value_type: FieldType::String,
                frequency: UsageFrequency::High,
            },
            StaticAccessPath {
                path: "issuetype.subtask",
                value_type: FieldType::String,
                frequency: UsageFrequency::Low,
            },
        ],
        examples: &["Bug", "Story"],
        common_usage: &[&["issuetype.name", "summary"]],
    },
    StaticField {
        id: "description",
        name: "Description",
        description: "Long-form body of the issue",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "description",
            value_type: FieldType::String,
            frequency: UsageFrequency::Medium,
        }],
        examples: &[],
        common_usage: &[&["summary", "description"]],
    },
    StaticField {
        id: "labels",
        name: "Labels",
        description: "Free-form tags attached to the issue",
        field_type: FieldType::Array,
        access_paths: &[StaticAccessPath {
            path: "labels",
            value_type: FieldType::Array,
            frequency: UsageFrequency::Medium,
        }],
        examples: &["backend", "tech-debt"],
        common_usage: &[&["labels", "status.name"]],
    },
    StaticField {
        id: "created",
        name: "Created",
        description: "Creation timestamp",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "created",
            value_type: FieldType::String,
            frequency: UsageFrequency::Medium,
        }],
        examples: &["2026-03-14T09:26:53.000+0000"],
        common_usage: &[&["created", "updated"]],
    },
    StaticField {
        id: "updated",
        name: "Updated",
        description: "Last modification timestamp",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "updated",
            value_type: FieldType::String,
            frequency: UsageFrequency::Medium,
        }],
        examples: &["2026-03-15T17:02:11.000+0000"],
        common_usage: &[&["created", "updated"]],
    },
    StaticField {
        id: "duedate",
        name: "Due Date",
        description: "Date the issue is due",
        field_type: FieldType::String,
        access_paths: &[StaticAccessPath {
            path: "duedate",
            value_type: FieldType::String,
            frequency: UsageFrequency::Low,
        }],
        examples: &["2026-04-01"],
        common_usage: &[&["duedate", "priority.name"]],
    },
    StaticField {
        id: "project",
        name: "Project",
        description: "Project the issue belongs to",
        field_type: FieldType::Object,
        access_paths: &[
            StaticAccessPath {
                path: "project.key",
                value_type: FieldType::String,
                frequency: UsageFrequency::High,
            },
            StaticAccessPath {
                path: "project.name",
                value_type: FieldType::String,
                frequency: UsageFrequency::Medium,
            },
        ],
        examples: &["PLAT"],
        common_usage: &[&["project.key", "issuetype.name"]],
    },
    StaticField {
        id: "components",
        name: "Components",
        description: "Project components the issue touches",
        field_type: FieldType::Array,
        access_paths: &[StaticAccessPath {
            path: "components[].name",
            value_type: FieldType::String,
            frequency: UsageFrequency::Low,
        }],
        examples: &["auth-service"],
        common_usage: &[&["components[].name", "status.name"]],
    },
    StaticField {
        id: "fixVersions",
        name: "Fix Versions",
        description: "Releases the issue is planned to ship in",
        field_type: FieldType::Array,
        access_paths: &[
            StaticAccessPath {
                path: "fixVersions[].name",
                value_type: FieldType::String,
                frequency: UsageFrequency::Low,
            },
            StaticAccessPath {
                path: "fixVersions[].released",
                value_type: FieldType::String,
                frequency: UsageFrequency::Low,
            },
        ],
        examples: &["2.14.0"],
        common_usage: &[&["fixVersions[].name", "status.name"]],
    },
    StaticField {
        id: "resolution",
        name: "Resolution",
        description: "How the issue was resolved",
        field_type: FieldType::Object,
        access_paths: &[StaticAccessPath {
            path: "resolution.name",
            value_type: FieldType::String,
            frequency: UsageFrequency::Low,
        }],
        examples: &["Fixed", "Won't Do"],
        common_usage: &[&["resolution.name", "status.name"]],
    },
];

pub(super) static SUGGESTION_DATA: SuggestionData = SuggestionData {
    typo_corrections: &[
        ("stat", "status"),
        ("statu", "status"),
        ("staus", "status"),
        ("sumary", "summary"),
        ("summry", "summary"),
        ("asignee", "assignee"),
        ("assigne", "assignee"),
        ("assine", "assignee"),
        ("priorty", "priority"),
        ("prioirty", "priority"),
        ("descripton", "description"),
        ("lables", "labels"),
        ("reportr", "reporter"),
        ("duedat", "duedate"),
        ("issuetyp", "issuetype"),
    ],
    usage_statistics: &[
        (
            "summary",
            FieldUsage {
                frequency: UsageFrequency::High,
                availability: 1.0,
            },
        ),
        (
            "status",
            FieldUsage {
                frequency: UsageFrequency::High,
                availability: 1.0,
            },
        ),
        (
            "status.name",
            FieldUsage {
                frequency: UsageFrequency::High,
                availability: 1.0,
            },
        ),
        (
            "assignee",
            FieldUsage {
                frequency: UsageFrequency::High,
                availability: 0.82,
            },
        ),
        (
            "assignee.displayName",
            FieldUsage {
                frequency: UsageFrequency::Medium,
                availability: 0.82,
            },
        ),
        (
            "priority",
            FieldUsage {
                frequency: UsageFrequency::Medium,
                availability: 0.95,
            },
        ),
        (
            "issuetype",
            FieldUsage {
                frequency: UsageFrequency::High,
                availability: 1.0,
            },
        ),
        (
            "reporter",
            FieldUsage {
                frequency: UsageFrequency::Medium,
                availability: 0.99,
            },
        ),
        (
            "labels",
            FieldUsage {
                frequency: UsageFrequency::Medium,
                availability: 0.55,
            },
        ),
        (
            "description",
            FieldUsage {
                frequency: UsageFrequency::Medium,
                availability: 0.88,
            },
        ),
        (
            "created",
            FieldUsage {
                frequency: UsageFrequency::Medium,
                availability: 1.0,
            },
        ),
        (
            "updated",
            FieldUsage {
                frequency: UsageFrequency::Low,
                availability: 1.0,
            },
        ),
        (
            "duedate",
            FieldUsage {
                frequency: UsageFrequency::Low,
                availability: 0.3,
            },
        ),
        (
            "resolution",
            FieldUsage {
                frequency: UsageFrequency::Low,
                availability: 0.6,
            },
        ),
    ],
    contextual_suggestions: &[
        "summary",
        "status",
        "assignee",
        "priority",
        "issuetype",
        "reporter",
        "labels",
        "description",
        "created",
        "updated",
    ],
    custom_field_patterns: &[
        ("sprint", "customfield_*_sprint"),
        ("epic", "customfield_*_epic_link"),
        ("story point", "customfield_*_story_points"),
        ("team", "customfield_*_team"),
        ("severity", "customfield_*_severity"),
    ],
    last_analyzed: "2026-05-12T00:00:00Z",
};
