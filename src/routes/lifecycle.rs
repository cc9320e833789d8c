//! 各实体族共用的列表与状态切换处理程序

use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use ts_rs::TS;
use uuid::Uuid;

use super::response::respond;
use crate::models::Lifecycle;
use crate::services::lifecycle::{Transition, transition_and_commit};
use crate::services::QueryFacade;
use crate::storage::Storage;

pub async fn list_all<T>(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
) -> ActixResult<HttpResponse>
where
    T: Lifecycle + Serialize + TS,
{
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(facade.list_all::<T>(&cancel).await, "Listed")
}

pub async fn list_active<T>(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
) -> ActixResult<HttpResponse>
where
    T: Lifecycle + Serialize + TS,
{
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(facade.list_active::<T>(&cancel).await, "Listed")
}

pub async fn list_inactive<T>(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
) -> ActixResult<HttpResponse>
where
    T: Lifecycle + Serialize + TS,
{
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(facade.list_inactive::<T>(&cancel).await, "Listed")
}

pub async fn get_one<T>(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    id: web::Path<Uuid>,
) -> ActixResult<HttpResponse>
where
    T: Lifecycle + Serialize + TS,
{
    let cancel = shutdown.child_token();
    let facade = QueryFacade::new(storage.get_ref().clone());
    respond(facade.get::<T>(id.into_inner(), &cancel).await, "Found")
}

async fn apply_transition<T: Lifecycle>(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    id: Uuid,
    kind: Transition,
) -> ActixResult<HttpResponse> {
    let cancel = shutdown.child_token();
    let result = transition_and_commit::<T>(storage.get_ref().clone(), id, kind, &cancel).await;
    let message = match result {
        Ok(true) => "State changed",
        _ => "State unchanged",
    };
    respond(result, message)
}

pub async fn deactivate<T: Lifecycle>(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    apply_transition::<T>(storage, shutdown, id.into_inner(), Transition::Deactivate).await
}

pub async fn reactivate<T: Lifecycle>(
    storage: web::Data<Arc<dyn Storage>>,
    shutdown: web::Data<CancellationToken>,
    id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    apply_transition::<T>(storage, shutdown, id.into_inner(), Transition::Reactivate).await
}

/// 为实体族注册通用路由：列表、按状态列表、详情与状态切换
pub fn lifecycle_resources<T>(scope: actix_web::Scope) -> actix_web::Scope
where
    T: Lifecycle + Serialize + TS,
{
    scope
        .route("/active", web::get().to(list_active::<T>))
        .route("/inactive", web::get().to(list_inactive::<T>))
        .route("/{id}/deactivate", web::post().to(deactivate::<T>))
        .route("/{id}/reactivate", web::post().to(reactivate::<T>))
}
