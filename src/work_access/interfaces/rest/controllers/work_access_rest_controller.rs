use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};

use crate::work_access::{
    domain::{
        model::{
            commands::grant_work_system_access_command::{
                GrantWorkSystemAccessCommand, GrantWorkSystemAccessCommandParts,
            },
            enums::work_access_domain_error::WorkAccessDomainError,
            queries::{
                check_work_system_access_query::CheckWorkSystemAccessQuery,
                list_work_systems_query::ListWorkSystemsQuery,
            },
        },
        services::{
            work_access_command_service::WorkAccessCommandService,
            work_access_query_service::WorkAccessQueryService,
        },
    },
    interfaces::rest::resources::{
        check_work_system_access_response_resource::{
            CheckWorkSystemAccessResponseResource, WorkSystemAccessViewResource,
        },
        grant_work_system_access_response_resource::GrantWorkSystemAccessResponseResource,
        work_access_error_response_resource::WorkAccessErrorResponseResource,
        work_system_summary_resource::WorkSystemSummaryResource,
    },
};

#[derive(Clone)]
pub struct WorkAccessRestControllerState {
    pub command_service: Arc<dyn WorkAccessCommandService>,
    pub query_service: Arc<dyn WorkAccessQueryService>,
}

pub fn router(state: WorkAccessRestControllerState) -> Router {
    Router::new()
        .route("/work-systems", get(list_work_systems))
        .route(
            "/work-systems/:work_system_id/access",
            get(check_work_system_access),
        )
        .route(
            "/work-systems/:work_system_id/access",
            post(grant_work_system_access),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/work-systems",
    tag = "work-access",
    responses(
        (status = 200, description = "Active work systems in display order", body = [WorkSystemSummaryResource]),
        (status = 503, description = "Storage unavailable", body = WorkAccessErrorResponseResource)
    )
)]
pub async fn list_work_systems(
    State(state): State<WorkAccessRestControllerState>,
) -> Result<Json<Vec<WorkSystemSummaryResource>>, (StatusCode, Json<WorkAccessErrorResponseResource>)>
{
    let systems = state
        .query_service
        .handle_list_work_systems(ListWorkSystemsQuery::new())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        systems
            .into_iter()
            .map(|system| WorkSystemSummaryResource {
                id: system.id.to_string(),
                name: system.name,
                display_order: system.display_order,
            })
            .collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/work-systems/{work_system_id}/access",
    tag = "work-access",
    params(
        ("work_system_id" = String, Path, description = "Work system id"),
        ("x-user-id" = String, Header, description = "Authenticated staff user id, set by the gateway")
    ),
    responses(
        (status = 200, description = "Access decision with blockers", body = CheckWorkSystemAccessResponseResource),
        (status = 400, description = "Invalid id", body = WorkAccessErrorResponseResource),
        (status = 401, description = "Missing caller identity", body = WorkAccessErrorResponseResource),
        (status = 404, description = "Unknown user or work system", body = WorkAccessErrorResponseResource),
        (status = 503, description = "Storage unavailable", body = WorkAccessErrorResponseResource)
    )
)]
pub async fn check_work_system_access(
    State(state): State<WorkAccessRestControllerState>,
    Path(work_system_id): Path<String>,
    headers: HeaderMap,
) -> Result<
    Json<CheckWorkSystemAccessResponseResource>,
    (StatusCode, Json<WorkAccessErrorResponseResource>),
> {
    let user_id = caller_user_id(&headers)?;

    let query =
        CheckWorkSystemAccessQuery::new(user_id, work_system_id).map_err(map_domain_error)?;

    let result = state
        .query_service
        .handle_check_access(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CheckWorkSystemAccessResponseResource {
        allowed: result.decision.allowed,
        blockers: result.decision.blockers,
        system: WorkSystemAccessViewResource {
            id: result.system.id.to_string(),
            name: result.system.name,
            url: result.system.url,
        },
    }))
}

#[utoipa::path(
    post,
    path = "/work-systems/{work_system_id}/access",
    tag = "work-access",
    params(
        ("work_system_id" = String, Path, description = "Work system id"),
        ("x-user-id" = String, Header, description = "Authenticated staff user id, set by the gateway"),
        ("x-forwarded-for" = Option<String>, Header, description = "Client ip recorded on the audit entry"),
        ("user-agent" = Option<String>, Header, description = "Client user agent recorded on the audit entry")
    ),
    responses(
        (status = 200, description = "Access granted, target url returned", body = GrantWorkSystemAccessResponseResource),
        (status = 400, description = "Invalid id", body = WorkAccessErrorResponseResource),
        (status = 401, description = "Missing caller identity", body = WorkAccessErrorResponseResource),
        (status = 403, description = "Access denied with blockers", body = GrantWorkSystemAccessResponseResource),
        (status = 404, description = "Unknown user or work system", body = WorkAccessErrorResponseResource),
        (status = 503, description = "Storage unavailable", body = WorkAccessErrorResponseResource)
    )
)]
pub async fn grant_work_system_access(
    State(state): State<WorkAccessRestControllerState>,
    Path(work_system_id): Path<String>,
    headers: HeaderMap,
) -> Result<
    (StatusCode, Json<GrantWorkSystemAccessResponseResource>),
    (StatusCode, Json<WorkAccessErrorResponseResource>),
> {
    let user_id = caller_user_id(&headers)?;

    let command = GrantWorkSystemAccessCommand::new(GrantWorkSystemAccessCommandParts {
        user_id,
        work_system_id,
        ip_address: optional_header(&headers, "x-forwarded-for"),
        user_agent: optional_header(&headers, "user-agent"),
    })
    .map_err(map_domain_error)?;

    let result = state
        .command_service
        .handle_grant_access(command)
        .await
        .map_err(map_domain_error)?;

    let status = if result.granted {
        StatusCode::OK
    } else {
        StatusCode::FORBIDDEN
    };

    Ok((
        status,
        Json(GrantWorkSystemAccessResponseResource {
            granted: result.granted,
            url: result.url,
            blockers: result.blockers,
        }),
    ))
}

fn caller_user_id(
    headers: &HeaderMap,
) -> Result<String, (StatusCode, Json<WorkAccessErrorResponseResource>)> {
    headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(WorkAccessErrorResponseResource {
                    message: "missing x-user-id header".to_string(),
                }),
            )
        })
}

fn optional_header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn map_domain_error(
    error: WorkAccessDomainError,
) -> (StatusCode, Json<WorkAccessErrorResponseResource>) {
    let status = match error {
        WorkAccessDomainError::InvalidUserId | WorkAccessDomainError::InvalidWorkSystemId => {
            StatusCode::BAD_REQUEST
        }
        WorkAccessDomainError::UserNotFound | WorkAccessDomainError::WorkSystemNotFound => {
            StatusCode::NOT_FOUND
        }
        WorkAccessDomainError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        status,
        Json(WorkAccessErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
