use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::passes::codec::PassStatus;
use crate::modules::passes::model::{
    IssuePassDto, IssuePassResponse, ScanPassDto, ScanPassResponse,
};
use crate::modules::verification::model::{
    CodeConfirmedResponse, CodeRequestedResponse, ConfirmCodeDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::verification::controller::request_code,
        crate::modules::verification::controller::confirm_code,
        crate::modules::passes::controller::issue_pass,
        crate::modules::passes::controller::scan_pass,
    ),
    components(
        schemas(
            ConfirmCodeDto,
            CodeRequestedResponse,
            CodeConfirmedResponse,
            IssuePassDto,
            IssuePassResponse,
            ScanPassDto,
            ScanPassResponse,
            PassStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Verification", description = "Email verification code endpoints"),
        (name = "Passes", description = "Child pass token endpoints")
    ),
    info(
        title = "Wardpass API",
        version = "0.1.0",
        description = "Verification and access control for per-child school records, built with Rust and Axum.",
        contact(
            name = "API Support",
            email = "support@wardpass.app"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
