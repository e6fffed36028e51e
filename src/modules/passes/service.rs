use tracing::{info, instrument};

use crate::metrics;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::codec::ChildPass;
use super::model::{IssuePassDto, IssuePassResponse};

pub struct PassService;

impl PassService {
    /// Mint the canonical token for a (child, school, status) triple.
    #[instrument]
    pub fn issue(dto: &IssuePassDto) -> IssuePassResponse {
        let pass = ChildPass {
            child_id: dto.child_id,
            school_id: dto.school_id,
            status: dto.status,
        };

        metrics::track_pass_issued(pass.status.as_str());
        info!(
            child_id = pass.child_id,
            school_id = pass.school_id,
            status = %pass.status,
            "Pass token issued"
        );

        IssuePassResponse {
            token: pass.encode(),
        }
    }

    /// Decode a scanned token on behalf of `scanner_key`.
    ///
    /// The limiter is consulted before the parse so a scanner hammering
    /// the endpoint fails fast; a malformed token reports the field that
    /// failed.
    #[instrument(skip(state, token))]
    pub fn scan(state: &AppState, scanner_key: &str, token: &str) -> Result<ChildPass, AppError> {
        if !state.scan_limiter.should_allow(scanner_key) {
            return Err(AppError::too_many_requests(
                "Too many scan attempts. Wait before scanning again.".to_string(),
            ));
        }

        match ChildPass::decode(token) {
            Ok(pass) => {
                metrics::track_pass_scanned("decoded");
                Ok(pass)
            }
            Err(err) => {
                metrics::track_pass_scanned("malformed");
                Err(AppError::bad_request(err))
            }
        }
    }
}
