//! OpenAPI document for the staging API.

use crate::config::DeploymentInfo;
use crate::handlers::health::{HealthFailure, HealthReport};
use crate::model::{SampleData, SampleDataInput};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Staging API", version = "v1"),
    paths(
        crate::handlers::data::list,
        crate::handlers::data::read,
        crate::handlers::data::create,
        crate::handlers::data::update,
        crate::handlers::data::delete,
        crate::handlers::health::health,
        crate::handlers::health::info,
    ),
    components(schemas(SampleData, SampleDataInput, HealthReport, HealthFailure, DeploymentInfo)),
    tags((name = "data"), (name = "health"))
)]
pub struct ApiDoc;

/// Document with the deployment branch in its description.
pub fn document(deployment: &DeploymentInfo) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.description = Some(format!("Branch: {}", deployment.branch_label()));
    doc
}
