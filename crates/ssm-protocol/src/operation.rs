// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Binding of request shapes to service operations.

use serde::Serialize;
use serde::de::DeserializeOwned;
use ssm_model::*;

/// A request shape that names its service operation.
///
/// The operation name goes into the `X-Amz-Target` header, and `Output` is
/// the result shape the response body decodes into.
pub trait SsmOperation: Serialize {
    /// Operation name, e.g. `SendCommand`.
    const NAME: &'static str;

    /// Result shape of the operation.
    type Output: DeserializeOwned + Default;
}

macro_rules! operations {
    ($($name:literal: $request:ident => $output:ident),+ $(,)?) => {
        $(
            impl SsmOperation for $request {
                const NAME: &'static str = $name;
                type Output = $output;
            }
        )+

        /// Names of every bound operation.
        pub const OPERATION_NAMES: &[&str] = &[$($name),+];
    };
}

operations! {
    // Tagging
    "AddTagsToResource": AddTagsToResourceRequest => AddTagsToResourceResult,
    "RemoveTagsFromResource": RemoveTagsFromResourceRequest => RemoveTagsFromResourceResult,
    "ListTagsForResource": ListTagsForResourceRequest => ListTagsForResourceResult,
    // Run Command
    "SendCommand": SendCommandRequest => SendCommandResult,
    "ListCommands": ListCommandsRequest => ListCommandsResult,
    "ListCommandInvocations": ListCommandInvocationsRequest => ListCommandInvocationsResult,
    "GetCommandInvocation": GetCommandInvocationRequest => GetCommandInvocationResult,
    "CancelCommand": CancelCommandRequest => CancelCommandResult,
    // State Manager
    "CreateAssociation": CreateAssociationRequest => CreateAssociationResult,
    "CreateAssociationBatch": CreateAssociationBatchRequest => CreateAssociationBatchResult,
    "UpdateAssociation": UpdateAssociationRequest => UpdateAssociationResult,
    "DeleteAssociation": DeleteAssociationRequest => DeleteAssociationResult,
    // Documents
    "CreateDocument": CreateDocumentRequest => CreateDocumentResult,
    "DescribeDocument": DescribeDocumentRequest => DescribeDocumentResult,
    "DeleteDocument": DeleteDocumentRequest => DeleteDocumentResult,
    // Parameter Store
    "PutParameter": PutParameterRequest => PutParameterResult,
    "GetParameter": GetParameterRequest => GetParameterResult,
    "GetParameters": GetParametersRequest => GetParametersResult,
    "GetParametersByPath": GetParametersByPathRequest => GetParametersByPathResult,
    "DeleteParameter": DeleteParameterRequest => DeleteParameterResult,
    "DeleteParameters": DeleteParametersRequest => DeleteParametersResult,
    "LabelParameterVersion": LabelParameterVersionRequest => LabelParameterVersionResult,
    // Patch Manager
    "CreatePatchBaseline": CreatePatchBaselineRequest => CreatePatchBaselineResult,
    "DescribeAvailablePatches": DescribeAvailablePatchesRequest => DescribeAvailablePatchesResult,
    "DescribeInstancePatchStates": DescribeInstancePatchStatesRequest => DescribeInstancePatchStatesResult,
    // Automation
    "StartAutomationExecution": StartAutomationExecutionRequest => StartAutomationExecutionResult,
    "GetAutomationExecution": GetAutomationExecutionRequest => GetAutomationExecutionResult,
    "StopAutomationExecution": StopAutomationExecutionRequest => StopAutomationExecutionResult,
    "SendAutomationSignal": SendAutomationSignalRequest => SendAutomationSignalResult,
    "DescribeAutomationExecutions": DescribeAutomationExecutionsRequest => DescribeAutomationExecutionsResult,
    // Inventory
    "PutInventory": PutInventoryRequest => PutInventoryResult,
    "GetInventory": GetInventoryRequest => GetInventoryResult,
    // Fleet
    "DescribeInstanceInformation": DescribeInstanceInformationRequest => DescribeInstanceInformationResult,
    // Session Manager
    "StartSession": StartSessionRequest => StartSessionResult,
    "ResumeSession": ResumeSessionRequest => ResumeSessionResult,
    "TerminateSession": TerminateSessionRequest => TerminateSessionResult,
    "DescribeSessions": DescribeSessionsRequest => DescribeSessionsResult,
}
