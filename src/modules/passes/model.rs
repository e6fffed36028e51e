use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::codec::{ChildPass, PassStatus};

/// Request to mint a pass token for a child at a school.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct IssuePassDto {
    #[validate(range(min = 1, message = "child_id must be a positive integer"))]
    pub child_id: u64,
    #[validate(range(min = 1, message = "school_id must be a positive integer"))]
    pub school_id: u64,
    pub status: PassStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IssuePassResponse {
    pub token: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ScanPassDto {
    /// The scanned token text
    #[validate(length(min = 1, message = "token must not be empty"))]
    pub token: String,
}

/// Decoded scan result returned to staff.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScanPassResponse {
    pub child_id: u64,
    pub school_id: u64,
    pub status: PassStatus,
}

impl From<ChildPass> for ScanPassResponse {
    fn from(pass: ChildPass) -> Self {
        Self {
            child_id: pass.child_id,
            school_id: pass.school_id,
            status: pass.status,
        }
    }
}
