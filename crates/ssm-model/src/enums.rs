// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Closed enumerations of wire strings ("allowed values").
//!
//! Model fields constrained to one of these sets still store a `String`,
//! so values the service adds later deserialize without error. Every
//! `with_*` setter of such a field also accepts the enum, because each
//! enum converts into its wire string.

string_enum! {
    /// Severity assigned to an association for compliance reporting.
    AssociationComplianceSeverity {
        Critical => "CRITICAL",
        High => "HIGH",
        Medium => "MEDIUM",
        Low => "LOW",
        Unspecified => "UNSPECIFIED",
    }
}

string_enum! {
    /// Who reports association compliance.
    AssociationSyncCompliance {
        /// The system reports compliance after each run.
        Auto => "AUTO",
        /// Compliance is reported through `PutComplianceItems`.
        Manual => "MANUAL",
    }
}

string_enum! {
    AssociationStatusName {
        Pending => "Pending",
        Success => "Success",
        Failed => "Failed",
    }
}

string_enum! {
    /// Kind of source a document attachment is taken from.
    AttachmentsSourceKey {
        SourceUrl => "SourceUrl",
        S3FileUrl => "S3FileUrl",
        AttachmentReference => "AttachmentReference",
    }
}

string_enum! {
    AutomationExecutionFilterKey {
        DocumentNamePrefix => "DocumentNamePrefix",
        ExecutionStatus => "ExecutionStatus",
        ExecutionId => "ExecutionId",
        ParentExecutionId => "ParentExecutionId",
        CurrentAction => "CurrentAction",
        StartTimeBefore => "StartTimeBefore",
        StartTimeAfter => "StartTimeAfter",
        AutomationType => "AutomationType",
    }
}

string_enum! {
    /// Status of an automation execution or of one of its steps.
    AutomationExecutionStatus {
        Pending => "Pending",
        InProgress => "InProgress",
        Waiting => "Waiting",
        Success => "Success",
        TimedOut => "TimedOut",
        Cancelling => "Cancelling",
        Cancelled => "Cancelled",
        Failed => "Failed",
    }
}

string_enum! {
    AutomationType {
        CrossAccount => "CrossAccount",
        Local => "Local",
    }
}

string_enum! {
    CommandFilterKey {
        InvokedAfter => "InvokedAfter",
        InvokedBefore => "InvokedBefore",
        Status => "Status",
        ExecutionStage => "ExecutionStage",
        DocumentName => "DocumentName",
    }
}

string_enum! {
    /// Status of a command on a single instance.
    CommandInvocationStatus {
        Pending => "Pending",
        InProgress => "InProgress",
        Delayed => "Delayed",
        Success => "Success",
        Cancelled => "Cancelled",
        TimedOut => "TimedOut",
        Failed => "Failed",
        Cancelling => "Cancelling",
    }
}

string_enum! {
    /// Status of a single plugin within a command invocation.
    CommandPluginStatus {
        Pending => "Pending",
        InProgress => "InProgress",
        Success => "Success",
        TimedOut => "TimedOut",
        Cancelled => "Cancelled",
        Failed => "Failed",
    }
}

string_enum! {
    /// Aggregate status of a command across all of its targets.
    CommandStatus {
        Pending => "Pending",
        InProgress => "InProgress",
        Success => "Success",
        Cancelled => "Cancelled",
        Failed => "Failed",
        TimedOut => "TimedOut",
        Cancelling => "Cancelling",
    }
}

string_enum! {
    DocumentFormat {
        Yaml => "YAML",
        Json => "JSON",
        Text => "TEXT",
    }
}

string_enum! {
    /// Hash algorithm used for document content.
    ///
    /// `Sha1` is deprecated by the service but still accepted.
    DocumentHashType {
        Sha256 => "Sha256",
        Sha1 => "Sha1",
    }
}

string_enum! {
    DocumentParameterType {
        String => "String",
        StringList => "StringList",
    }
}

string_enum! {
    DocumentStatus {
        Creating => "Creating",
        Active => "Active",
        Updating => "Updating",
        Deleting => "Deleting",
        Failed => "Failed",
    }
}

string_enum! {
    DocumentType {
        Command => "Command",
        Policy => "Policy",
        Automation => "Automation",
        Session => "Session",
        Package => "Package",
        ApplicationConfiguration => "ApplicationConfiguration",
        ApplicationConfigurationSchema => "ApplicationConfigurationSchema",
        DeploymentStrategy => "DeploymentStrategy",
        ChangeCalendar => "ChangeCalendar",
    }
}

string_enum! {
    /// How an automation execution advances between steps.
    ExecutionMode {
        Auto => "Auto",
        Interactive => "Interactive",
    }
}

string_enum! {
    /// Which side caused a failed batch entry.
    Fault {
        Client => "Client",
        Server => "Server",
        Unknown => "Unknown",
    }
}

string_enum! {
    InstanceInformationFilterKey {
        InstanceIds => "InstanceIds",
        AgentVersion => "AgentVersion",
        PingStatus => "PingStatus",
        PlatformTypes => "PlatformTypes",
        ActivationIds => "ActivationIds",
        IamRole => "IamRole",
        ResourceType => "ResourceType",
        AssociationStatus => "AssociationStatus",
    }
}

string_enum! {
    InventoryQueryOperatorType {
        Equal => "Equal",
        NotEqual => "NotEqual",
        BeginWith => "BeginWith",
        LessThan => "LessThan",
        GreaterThan => "GreaterThan",
        Exists => "Exists",
    }
}

string_enum! {
    /// Command state changes that trigger a notification.
    NotificationEvent {
        All => "All",
        InProgress => "InProgress",
        Success => "Success",
        TimedOut => "TimedOut",
        Cancelled => "Cancelled",
        Failed => "Failed",
    }
}

string_enum! {
    NotificationType {
        /// One notification for the command as a whole.
        Command => "Command",
        /// One notification per instance.
        Invocation => "Invocation",
    }
}

string_enum! {
    OperatingSystem {
        Windows => "WINDOWS",
        AmazonLinux => "AMAZON_LINUX",
        AmazonLinux2 => "AMAZON_LINUX_2",
        Ubuntu => "UBUNTU",
        RedhatEnterpriseLinux => "REDHAT_ENTERPRISE_LINUX",
        Suse => "SUSE",
        Centos => "CENTOS",
        OracleLinux => "ORACLE_LINUX",
        Debian => "DEBIAN",
    }
}

string_enum! {
    /// Storage tier of a parameter.
    ParameterTier {
        Standard => "Standard",
        Advanced => "Advanced",
        /// The service picks the tier per request.
        IntelligentTiering => "Intelligent-Tiering",
    }
}

string_enum! {
    ParameterType {
        String => "String",
        StringList => "StringList",
        SecureString => "SecureString",
    }
}

string_enum! {
    /// What to do with a rejected patch.
    PatchAction {
        /// Install it when another package depends on it.
        AllowAsDependency => "ALLOW_AS_DEPENDENCY",
        Block => "BLOCK",
    }
}

string_enum! {
    PatchComplianceLevel {
        Critical => "CRITICAL",
        High => "HIGH",
        Medium => "MEDIUM",
        Low => "LOW",
        Informational => "INFORMATIONAL",
        Unspecified => "UNSPECIFIED",
    }
}

string_enum! {
    /// Attribute a patch filter matches on.
    PatchFilterKey {
        PatchSet => "PATCH_SET",
        Product => "PRODUCT",
        ProductFamily => "PRODUCT_FAMILY",
        Classification => "CLASSIFICATION",
        MsrcSeverity => "MSRC_SEVERITY",
        PatchId => "PATCH_ID",
        Section => "SECTION",
        Priority => "PRIORITY",
        Severity => "SEVERITY",
    }
}

string_enum! {
    PatchOperationType {
        Scan => "Scan",
        Install => "Install",
    }
}

string_enum! {
    /// Connection state of the agent on a managed instance.
    PingStatus {
        Online => "Online",
        ConnectionLost => "ConnectionLost",
        Inactive => "Inactive",
    }
}

string_enum! {
    PlatformType {
        Windows => "Windows",
        Linux => "Linux",
    }
}

string_enum! {
    RebootOption {
        RebootIfNeeded => "RebootIfNeeded",
        NoReboot => "NoReboot",
    }
}

string_enum! {
    ResourceType {
        ManagedInstance => "ManagedInstance",
        Document => "Document",
        Ec2Instance => "EC2Instance",
    }
}

string_enum! {
    /// Resource kinds that accept tags.
    ResourceTypeForTagging {
        Document => "Document",
        ManagedInstance => "ManagedInstance",
        MaintenanceWindow => "MaintenanceWindow",
        Parameter => "Parameter",
        PatchBaseline => "PatchBaseline",
        OpsItem => "OpsItem",
    }
}

string_enum! {
    SessionFilterKey {
        InvokedAfter => "InvokedAfter",
        InvokedBefore => "InvokedBefore",
        Target => "Target",
        Owner => "Owner",
        Status => "Status",
        SessionId => "SessionId",
    }
}

string_enum! {
    SessionState {
        Active => "Active",
        History => "History",
    }
}

string_enum! {
    SessionStatus {
        Connected => "Connected",
        Connecting => "Connecting",
        Disconnected => "Disconnected",
        Terminated => "Terminated",
        Terminating => "Terminating",
        Failed => "Failed",
    }
}

string_enum! {
    /// Signal sent to a running automation execution.
    SignalType {
        Approve => "Approve",
        Reject => "Reject",
        StartStep => "StartStep",
        StopStep => "StopStep",
        Resume => "Resume",
    }
}

string_enum! {
    StopType {
        Complete => "Complete",
        Cancel => "Cancel",
    }
}
