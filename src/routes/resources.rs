use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, web};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::lifecycle::{self, lifecycle_resources};
use super::response::{respond, respond_created};
use crate::models::resources::entities::Resource;
use crate::models::resources::requests::{CreateResourceRequest, UpdateResourceRequest};
use crate::services::ResourceService;
use crate::storage::Storage;

pub async fn create_resource(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    body: web::Json<CreateResourceRequest>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = ResourceService::new(storage.get_ref().clone());
    respond_created(
        service.create_resource(body.into_inner(), &cancel).await,
        "Resource created",
    )
}

pub async fn update_resource(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    resource_id: web::Path<Uuid>,
    body: web::Json<UpdateResourceRequest>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = ResourceService::new(storage.get_ref().clone());
    respond(
        service
            .update_resource(resource_id.into_inner(), body.into_inner(), &cancel)
            .await,
        "Resource updated",
    )
}

// 配置路由
pub fn configure_resource_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        lifecycle_resources::<Resource>(web::scope("/api/v1/resources"))
            .service(
                web::resource("")
                    .route(web::get().to(lifecycle::list_all::<Resource>))
                    .route(web::post().to(create_resource)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(lifecycle::get_one::<Resource>))
                    .route(web::put().to(update_resource)),
            ),
    );
}
