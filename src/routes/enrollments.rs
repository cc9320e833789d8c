use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, web};
use tokio_util::sync::CancellationToken;

use super::lifecycle::{self, lifecycle_resources};
use super::response::respond_created;
use crate::models::enrollments::entities::Enrollment;
use crate::models::enrollments::requests::CreateEnrollmentRequest;
use crate::services::EnrollmentService;
use crate::storage::Storage;

pub async fn create_enrollment(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    body: web::Json<CreateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = EnrollmentService::new(storage.get_ref().clone());
    respond_created(
        service.create_enrollment(body.into_inner(), &cancel).await,
        "Enrollment created",
    )
}

// 配置路由
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        lifecycle_resources::<Enrollment>(web::scope("/api/v1/enrollments"))
            .service(
                web::resource("")
                    .route(web::get().to(lifecycle::list_all::<Enrollment>))
                    .route(web::post().to(create_enrollment)),
            )
            .route("/{id}", web::get().to(lifecycle::get_one::<Enrollment>)),
    );
}
