use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, web};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::lifecycle::{self, lifecycle_resources};
use super::response::{respond, respond_created};
use crate::models::course_modules::entities::CourseModule;
use crate::models::course_modules::requests::{
    CreateCourseModuleRequest, UpdateCourseModuleRequest,
};
use crate::services::{CourseModuleService, QueryFacade};
use crate::storage::Storage;

pub async fn create_module(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    body: web::Json<CreateCourseModuleRequest>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = CourseModuleService::new(storage.get_ref().clone());
    respond_created(
        service.create_module(body.into_inner(), &cancel).await,
        "Module created",
    )
}

pub async fn update_module(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    module_id: web::Path<Uuid>,
    body: web::Json<UpdateCourseModuleRequest>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = CourseModuleService::new(storage.get_ref().clone());
    respond(
        service
            .update_module(module_id.into_inner(), body.into_inner(), &cancel)
            .await,
        "Module updated",
    )
}

pub async fn list_module_resources(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    module_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(
        facade
            .resources_by_module(module_id.into_inner(), &cancel)
            .await,
        "Listed",
    )
}

// 配置路由
pub fn configure_module_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        lifecycle_resources::<CourseModule>(web::scope("/api/v1/modules"))
            .service(
                web::resource("")
                    .route(web::get().to(lifecycle::list_all::<CourseModule>))
                    .route(web::post().to(create_module)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(lifecycle::get_one::<CourseModule>))
                    .route(web::put().to(update_module)),
            )
            .route("/{id}/resources", web::get().to(list_module_resources)),
    );
}
