//! The pass token wire format.
//!
//! One encode/decode pair owns the grammar
//! `"child-" INT "-" INT "-" STATUS` with `INT = [1-9][0-9]*`, so the
//! producer and consumer formats cannot drift apart. Decoding is total:
//! a token either parses completely or is rejected with the field that
//! failed.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Verification status carried inside a pass token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PassStatus {
    Pending,
    Verified,
    Rejected,
}

impl PassStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassStatus::Pending => "pending",
            PassStatus::Verified => "verified",
            PassStatus::Rejected => "rejected",
        }
    }

    /// Wire names are canonical lowercase; matching is case-sensitive.
    fn from_wire(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PassStatus::Pending),
            "verified" => Some(PassStatus::Verified),
            "rejected" => Some(PassStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for PassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a scanned token failed to decode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PassTokenError {
    #[error("Pass token must start with \"child-\"")]
    MissingPrefix,
    #[error("Pass token must contain a child id, a school id, and a status")]
    WrongFieldCount,
    #[error("Pass token child id must be a positive integer")]
    InvalidChildId,
    #[error("Pass token school id must be a positive integer")]
    InvalidSchoolId,
    #[error("Unknown pass status \"{0}\"")]
    UnknownStatus(String),
}

pub const TOKEN_PREFIX: &str = "child-";

/// Decoded form of the scannable token: which child, at which school,
/// with which verification status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChildPass {
    pub child_id: u64,
    pub school_id: u64,
    pub status: PassStatus,
}

impl ChildPass {
    /// Render the canonical wire form `child-<child>-<school>-<status>`.
    ///
    /// Ids print without padding and statuses use their canonical names,
    /// so distinct passes never encode to the same string.
    pub fn encode(&self) -> String {
        format!(
            "{}{}-{}-{}",
            TOKEN_PREFIX,
            self.child_id,
            self.school_id,
            self.status.as_str()
        )
    }

    /// Parse the wire form, strictly.
    ///
    /// Exactly three hyphen-delimited fields must follow the prefix;
    /// trailing or missing fields are rejected, not truncated or padded.
    pub fn decode(token: &str) -> Result<Self, PassTokenError> {
        let rest = token
            .strip_prefix(TOKEN_PREFIX)
            .ok_or(PassTokenError::MissingPrefix)?;

        let mut fields = rest.split('-');
        let (child, school, status) =
            match (fields.next(), fields.next(), fields.next(), fields.next()) {
                (Some(child), Some(school), Some(status), None) => (child, school, status),
                _ => return Err(PassTokenError::WrongFieldCount),
            };

        let child_id = parse_id(child).ok_or(PassTokenError::InvalidChildId)?;
        let school_id = parse_id(school).ok_or(PassTokenError::InvalidSchoolId)?;
        let status = PassStatus::from_wire(status)
            .ok_or_else(|| PassTokenError::UnknownStatus(status.to_string()))?;

        Ok(Self {
            child_id,
            school_id,
            status,
        })
    }
}

/// `[1-9][0-9]*` only: no signs, no whitespace, no leading zeros.
/// `str::parse` alone would accept `+3` and `03`, which the grammar
/// forbids.
fn parse_id(field: &str) -> Option<u64> {
    if field.is_empty() || field.starts_with('0') || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUSES: [PassStatus; 3] =
        [PassStatus::Pending, PassStatus::Verified, PassStatus::Rejected];

    #[test]
    fn test_encode_canonical_form() {
        let pass = ChildPass {
            child_id: 3,
            school_id: 8,
            status: PassStatus::Verified,
        };
        assert_eq!(pass.encode(), "child-3-8-verified");
    }

    #[test]
    fn test_round_trip() {
        for &status in &STATUSES {
            for &child_id in &[1u64, 7, 42, 9_000_000_000] {
                for &school_id in &[1u64, 8, 315] {
                    let pass = ChildPass {
                        child_id,
                        school_id,
                        status,
                    };
                    assert_eq!(ChildPass::decode(&pass.encode()), Ok(pass));
                }
            }
        }
    }

    #[test]
    fn test_decode_example() {
        assert_eq!(
            ChildPass::decode("child-3-8-verified"),
            Ok(ChildPass {
                child_id: 3,
                school_id: 8,
                status: PassStatus::Verified,
            })
        );
    }

    #[test]
    fn test_missing_field_rejected() {
        assert_eq!(
            ChildPass::decode("child-3-verified"),
            Err(PassTokenError::WrongFieldCount)
        );
    }

    #[test]
    fn test_trailing_field_rejected() {
        assert_eq!(
            ChildPass::decode("child-3-8-verified-extra"),
            Err(PassTokenError::WrongFieldCount)
        );
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert_eq!(
            ChildPass::decode("child-3-8-unknown"),
            Err(PassTokenError::UnknownStatus("unknown".to_string()))
        );
    }

    #[test]
    fn test_status_is_case_sensitive() {
        assert_eq!(
            ChildPass::decode("child-3-8-Verified"),
            Err(PassTokenError::UnknownStatus("Verified".to_string()))
        );
    }

    #[test]
    fn test_empty_child_id_rejected() {
        assert_eq!(
            ChildPass::decode("child--8-verified"),
            Err(PassTokenError::InvalidChildId)
        );
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert_eq!(
            ChildPass::decode("CHILD-3-8-verified"),
            Err(PassTokenError::MissingPrefix)
        );
    }

    #[test]
    fn test_signed_and_padded_ids_rejected() {
        assert_eq!(
            ChildPass::decode("child-+3-8-verified"),
            Err(PassTokenError::InvalidChildId)
        );
        assert_eq!(
            ChildPass::decode("child-03-8-verified"),
            Err(PassTokenError::InvalidChildId)
        );
        assert_eq!(
            ChildPass::decode("child-3-0-verified"),
            Err(PassTokenError::InvalidSchoolId)
        );
    }

    #[test]
    fn test_whitespace_rejected() {
        assert_eq!(
            ChildPass::decode("child- 3-8-verified"),
            Err(PassTokenError::InvalidChildId)
        );
        assert_eq!(
            ChildPass::decode("child-3 -8-verified"),
            Err(PassTokenError::InvalidChildId)
        );
    }

    #[test]
    fn test_empty_and_prefix_only_rejected() {
        assert_eq!(ChildPass::decode(""), Err(PassTokenError::MissingPrefix));
        assert_eq!(
            ChildPass::decode("child-"),
            Err(PassTokenError::WrongFieldCount)
        );
    }
}
