//! Error handling utilities for MCP server

use rmcp::ErrorData;
use waypoint_core::PlannerError;

/// Helper to convert planner errors to MCP errors.
///
/// Errors the caller can fix (bad input, unknown IDs, nothing selected,
/// cyclic references) are reported as invalid parameters; everything else
/// is an internal error.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        PlannerError::InvalidInput { .. }
        | PlannerError::PlanNotFound { .. }
        | PlannerError::TaskNotFound { .. }
        | PlannerError::NoActivePlan
        | PlannerError::CyclicDependency { .. }
        | PlannerError::Serialization { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_caller_errors_are_invalid_params() {
        let err = to_mcp_error("Failed to show plan", &PlannerError::NoActivePlan);
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.starts_with("Failed to show plan: No active plan"));
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err = to_mcp_error(
            "Failed to create plan",
            &PlannerError::Configuration {
                message: "Task join error".to_string(),
            },
        );
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
