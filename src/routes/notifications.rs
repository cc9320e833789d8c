use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, web};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::lifecycle::{self, lifecycle_resources};
use super::response::{respond, respond_created};
use crate::config::AppConfig;
use crate::models::notifications::entities::Notification;
use crate::models::notifications::requests::{CreateNotificationRequest, PendingListParams};
use crate::services::NotificationService;
use crate::storage::Storage;

pub async fn create_notification(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    body: web::Json<CreateNotificationRequest>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = NotificationService::new(storage.get_ref().clone());
    respond_created(
        service.create_notification(body.into_inner(), &cancel).await,
        "Notification created",
    )
}

pub async fn get_notification(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    notification_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = NotificationService::new(storage.get_ref().clone());
    respond(
        service
            .get_with_recipients(notification_id.into_inner(), &cancel)
            .await,
        "Found",
    )
}

pub async fn list_pending(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    query: web::Query<PendingListParams>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = NotificationService::new(storage.get_ref().clone());
    let max_items = AppConfig::get().pending_limit(query.max_items);
    respond(service.list_pending(max_items, &cancel).await, "Listed")
}

pub async fn mark_delivered(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    recipient_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = NotificationService::new(storage.get_ref().clone());
    respond(
        service
            .mark_delivered(recipient_id.into_inner(), &cancel)
            .await,
        "Delivery recorded",
    )
}

pub async fn mark_read(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    recipient_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = NotificationService::new(storage.get_ref().clone());
    respond(
        service.mark_read(recipient_id.into_inner(), &cancel).await,
        "Read recorded",
    )
}

// 配置路由
pub fn configure_notification_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        lifecycle_resources::<Notification>(web::scope("/api/v1/notifications"))
            .route("/pending", web::get().to(list_pending))
            .route(
                "/recipients/{id}/delivered",
                web::post().to(mark_delivered),
            )
            .route("/recipients/{id}/read", web::post().to(mark_read))
            .service(
                web::resource("")
                    .route(web::get().to(lifecycle::list_all::<Notification>))
                    .route(web::post().to(create_notification)),
            )
            .route("/{id}", web::get().to(get_notification)),
    );
}
