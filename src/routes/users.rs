use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, web};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::lifecycle::{self, lifecycle_resources};
use super::response::{respond, respond_created};
use crate::models::notifications::requests::RecipientListParams;
use crate::models::users::entities::User;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use crate::services::{NotificationService, QueryFacade, UserService};
use crate::storage::Storage;

pub async fn create_user(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    body: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = UserService::new(storage.get_ref().clone());
    respond_created(
        service.create_user(body.into_inner(), &cancel).await,
        "User created",
    )
}

pub async fn update_user(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    user_id: web::Path<Uuid>,
    body: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = UserService::new(storage.get_ref().clone());
    respond(
        service
            .update_user(user_id.into_inner(), body.into_inner(), &cancel)
            .await,
        "User updated",
    )
}

pub async fn list_user_enrollments(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    user_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(
        facade.enrollments_by_user(user_id.into_inner(), &cancel).await,
        "Listed",
    )
}

pub async fn list_taught_courses(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    user_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(
        facade
            .courses_by_instructor(user_id.into_inner(), &cancel)
            .await,
        "Listed",
    )
}

pub async fn list_user_submissions(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    user_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(
        facade
            .submissions_by_student(user_id.into_inner(), &cancel)
            .await,
        "Listed",
    )
}

pub async fn list_uploaded_resources(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    user_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(
        facade
            .resources_by_uploader(user_id.into_inner(), &cancel)
            .await,
        "Listed",
    )
}

pub async fn list_user_notifications(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    user_id: web::Path<Uuid>,
    query: web::Query<RecipientListParams>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = NotificationService::new(storage.get_ref().clone());
    respond(
        service
            .recipients_for_user(user_id.into_inner(), query.only_unread, &cancel)
            .await,
        "Listed",
    )
}

pub async fn count_unread_notifications(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    user_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = NotificationService::new(storage.get_ref().clone());
    respond(
        service.count_unread(user_id.into_inner(), &cancel).await,
        "Counted",
    )
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        lifecycle_resources::<User>(web::scope("/api/v1/users"))
            .service(
                web::resource("")
                    .route(web::get().to(lifecycle::list_all::<User>))
                    .route(web::post().to(create_user)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(lifecycle::get_one::<User>))
                    .route(web::put().to(update_user)),
            )
            .route("/{id}/enrollments", web::get().to(list_user_enrollments))
            .route("/{id}/courses", web::get().to(list_taught_courses))
            .route("/{id}/submissions", web::get().to(list_user_submissions))
            .route("/{id}/resources", web::get().to(list_uploaded_resources))
            .route(
                "/{id}/notifications",
                web::get().to(list_user_notifications),
            )
            .route(
                "/{id}/notifications/unread-count",
                web::get().to(count_unread_notifications),
            ),
    );
}
