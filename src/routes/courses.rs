use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, web};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::lifecycle::{self, lifecycle_resources};
use super::response::{respond, respond_created};
use crate::models::courses::entities::Course;
use crate::models::courses::requests::{CreateCourseRequest, UpdateCourseRequest};
use crate::services::{CourseService, QueryFacade};
use crate::storage::Storage;

pub async fn create_course(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    body: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = CourseService::new(storage.get_ref().clone());
    respond_created(
        service.create_course(body.into_inner(), &cancel).await,
        "Course created",
    )
}

pub async fn update_course(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    course_id: web::Path<Uuid>,
    body: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let service = CourseService::new(storage.get_ref().clone());
    respond(
        service
            .update_course(course_id.into_inner(), body.into_inner(), &cancel)
            .await,
        "Course updated",
    )
}

pub async fn list_published_courses(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(facade.published_courses(&cancel).await, "Listed")
}

pub async fn get_course_content(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    course_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(
        facade
            .course_with_content(course_id.into_inner(), &cancel)
            .await,
        "Found",
    )
}

pub async fn list_course_modules(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    course_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(
        facade.modules_by_course(course_id.into_inner(), &cancel).await,
        "Listed",
    )
}

pub async fn list_course_resources(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    course_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(
        facade
            .resources_by_course(course_id.into_inner(), &cancel)
            .await,
        "Listed",
    )
}

pub async fn list_course_enrollments(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    course_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(
        facade
            .enrollments_by_course(course_id.into_inner(), &cancel)
            .await,
        "Listed",
    )
}

pub async fn list_course_users(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    course_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(
        facade.users_by_course(course_id.into_inner(), &cancel).await,
        "Listed",
    )
}

pub async fn list_course_evaluations(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    course_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(
        facade
            .evaluations_by_course(course_id.into_inner(), &cancel)
            .await,
        "Listed",
    )
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        lifecycle_resources::<Course>(web::scope("/api/v1/courses"))
            .route("/published", web::get().to(list_published_courses))
            .service(
                web::resource("")
                    .route(web::get().to(lifecycle::list_all::<Course>))
                    .route(web::post().to(create_course)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(lifecycle::get_one::<Course>))
                    .route(web::put().to(update_course)),
            )
            .route("/{id}/content", web::get().to(get_course_content))
            .route("/{id}/modules", web::get().to(list_course_modules))
            .route("/{id}/resources", web::get().to(list_course_resources))
            .route("/{id}/enrollments", web::get().to(list_course_enrollments))
            .route("/{id}/users", web::get().to(list_course_users))
            .route("/{id}/evaluations", web::get().to(list_course_evaluations)),
    );
}
