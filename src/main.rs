use axum::Router;
use dotenvy::dotenv;
use staff_portal_api::{
    config::app_config::AppConfig,
    work_access::{
        build_work_access_router,
        interfaces::rest::resources::{
            check_work_system_access_response_resource::{
                CheckWorkSystemAccessResponseResource, WorkSystemAccessViewResource,
            },
            grant_work_system_access_response_resource::GrantWorkSystemAccessResponseResource,
            work_access_error_response_resource::WorkAccessErrorResponseResource,
            work_system_summary_resource::WorkSystemSummaryResource,
        },
    },
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        staff_portal_api::work_access::interfaces::rest::controllers::work_access_rest_controller::list_work_systems,
        staff_portal_api::work_access::interfaces::rest::controllers::work_access_rest_controller::check_work_system_access,
        staff_portal_api::work_access::interfaces::rest::controllers::work_access_rest_controller::grant_work_system_access
    ),
    components(
        schemas(
            WorkSystemSummaryResource,
            WorkSystemAccessViewResource,
            CheckWorkSystemAccessResponseResource,
            GrantWorkSystemAccessResponseResource,
            WorkAccessErrorResponseResource
        )
    ),
    tags(
        (name = "work-access", description = "Work-system access evaluation bounded context")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "staff_portal_api=info".to_string()),
        )
        .init();

    let config = AppConfig::from_env();

    let work_access_router = build_work_access_router(&config)
        .await
        .expect("failed to build work access router");

    let app = Router::new()
        .merge(work_access_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!("listening on http://localhost:{}", config.port);
    info!(
        "swagger ui available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
