use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, web};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::lifecycle::{self, lifecycle_resources};
use super::response::{respond, respond_created};
use crate::models::evaluations::entities::Evaluation;
use crate::models::evaluations::requests::{
    CreateEvaluationRequest, PublishEvaluationRequest, UpdateEvaluationRequest,
};
use crate::services::{EvaluationService, QueryFacade};
use crate::storage::Storage;

pub async fn create_evaluation(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    body: web::Json<CreateEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = EvaluationService::new(storage.get_ref().clone());
    respond_created(
        service.create_evaluation(body.into_inner(), &cancel).await,
        "Evaluation created",
    )
}

pub async fn update_evaluation(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    evaluation_id: web::Path<Uuid>,
    body: web::Json<UpdateEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = EvaluationService::new(storage.get_ref().clone());
    respond(
        service
            .update_evaluation(evaluation_id.into_inner(), body.into_inner(), &cancel)
            .await,
        "Evaluation updated",
    )
}

pub async fn publish_evaluation(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    evaluation_id: web::Path<Uuid>,
    body: Option<web::Json<PublishEvaluationRequest>>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = EvaluationService::new(storage.get_ref().clone());
    let request = body.map(web::Json::into_inner).unwrap_or_default();
    respond(
        service
            .publish(evaluation_id.into_inner(), request, &cancel)
            .await,
        "Evaluation published",
    )
}

pub async fn unpublish_evaluation(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    evaluation_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = EvaluationService::new(storage.get_ref().clone());
    respond(
        service.unpublish(evaluation_id.into_inner(), &cancel).await,
        "Evaluation unpublished",
    )
}

pub async fn list_open_evaluations(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(facade.open_evaluations(&cancel).await, "Listed")
}

pub async fn list_evaluation_submissions(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    evaluation_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(
        facade
            .submissions_by_evaluation(evaluation_id.into_inner(), &cancel)
            .await,
        "Listed",
    )
}

// 配置路由
pub fn configure_evaluation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        lifecycle_resources::<Evaluation>(web::scope("/api/v1/evaluations"))
            .route("/open", web::get().to(list_open_evaluations))
            .service(
                web::resource("")
                    .route(web::get().to(lifecycle::list_all::<Evaluation>))
                    .route(web::post().to(create_evaluation)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(lifecycle::get_one::<Evaluation>))
                    .route(web::put().to(update_evaluation)),
            )
            .route("/{id}/publish", web::post().to(publish_evaluation))
            .route("/{id}/unpublish", web::post().to(unpublish_evaluation))
            .route(
                "/{id}/submissions",
                web::get().to(list_evaluation_submissions),
            ),
    );
}
