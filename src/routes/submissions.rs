use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, web};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::lifecycle::{self, lifecycle_resources};
use super::response::{respond, respond_created};
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::{
    CreateSubmissionRequest, GradeSubmissionRequest, UpdateSubmissionRequest,
};
use crate::services::SubmissionService;
use crate::storage::Storage;

pub async fn create_submission(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    body: web::Json<CreateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = SubmissionService::new(storage.get_ref().clone());
    respond_created(
        service.create_submission(body.into_inner(), &cancel).await,
        "Submission created",
    )
}

pub async fn update_submission(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    submission_id: web::Path<Uuid>,
    body: web::Json<UpdateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = SubmissionService::new(storage.get_ref().clone());
    respond(
        service
            .update_submission(submission_id.into_inner(), body.into_inner(), &cancel)
            .await,
        "Submission updated",
    )
}

pub async fn grade_submission(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    submission_id: web::Path<Uuid>,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = SubmissionService::new(storage.get_ref().clone());
    respond(
        service
            .grade_submission(submission_id.into_inner(), body.into_inner(), &cancel)
            .await,
        "Submission graded",
    )
}

// 配置路由
pub fn configure_submission_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        lifecycle_resources::<Submission>(web::scope("/api/v1/submissions"))
            .service(
                web::resource("")
                    .route(web::get().to(lifecycle::list_all::<Submission>))
                    .route(web::post().to(create_submission)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(lifecycle::get_one::<Submission>))
                    .route(web::put().to(update_submission)),
            )
            .route("/{id}/grade", web::put().to(grade_submission)),
    );
}
