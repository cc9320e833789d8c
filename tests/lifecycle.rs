mod common;

use learnhub::errors::PlatformError;
use learnhub::models::courses::entities::Course;
use learnhub::models::users::entities::User;
use learnhub::services::{CourseService, LifecycleManager, QueryFacade, UserService};
use learnhub::storage::{EntityStore, UnitOfWork};
use uuid::Uuid;

use common::{classroom, create_student, token};

#[tokio::test]
async fn test_deactivate_then_reactivate_restores_state() {
    let room = classroom().await;
    let service = CourseService::new(room.storage.clone());
    let facade = QueryFacade::new(room.storage.clone());

    let before: Course = facade.get(room.course.id, &token()).await.unwrap();
    assert!(service.deactivate(room.course.id, &token()).await.unwrap());

    let inactive: Course = facade.get(room.course.id, &token()).await.unwrap();
    assert!(!inactive.is_active);
    assert!(inactive.updated_at.is_some());

    assert!(service.reactivate(room.course.id, &token()).await.unwrap());
    let after: Course = facade.get(room.course.id, &token()).await.unwrap();

    assert!(after.is_active);
    assert_eq!(after.title, before.title);
    assert_eq!(after.code, before.code);
    assert_eq!(after.instructor_id, before.instructor_id);
    assert_eq!(after.is_published, before.is_published);
    assert_eq!(after.created_at, before.created_at);
}

#[tokio::test]
async fn test_repeated_transition_is_noop() {
    let room = classroom().await;
    let service = CourseService::new(room.storage.clone());
    let facade = QueryFacade::new(room.storage.clone());

    assert!(service.deactivate(room.course.id, &token()).await.unwrap());
    let first: Course = facade.get(room.course.id, &token()).await.unwrap();

    assert!(!service.deactivate(room.course.id, &token()).await.unwrap());
    let second: Course = facade.get(room.course.id, &token()).await.unwrap();
    assert_eq!(first, second);

    // 已激活实体的重新激活同样是空操作
    let users = UserService::new(room.storage.clone());
    assert!(!users.reactivate(room.instructor.id, &token()).await.unwrap());
}

#[tokio::test]
async fn test_transition_on_unknown_id_returns_false() {
    let room = classroom().await;
    let service = CourseService::new(room.storage.clone());
    assert!(!service.deactivate(Uuid::new_v4(), &token()).await.unwrap());
    assert!(!service.reactivate(Uuid::new_v4(), &token()).await.unwrap());
}

#[tokio::test]
async fn test_manager_stages_without_committing() {
    let room = classroom().await;
    let manager = LifecycleManager::<User>::new(room.storage.clone());
    let store = EntityStore::<User>::new(room.storage.clone());

    let mut uow = UnitOfWork::begin(room.storage.clone());
    assert!(
        manager
            .deactivate(&mut uow, room.instructor.id, &token())
            .await
            .unwrap()
    );
    assert_eq!(uow.pending().len(), 1);

    // 提交前读取仍看到激活状态
    let still_active = store
        .get_active_by_id(room.instructor.id, &token())
        .await
        .unwrap();
    assert!(still_active.is_some());

    assert_eq!(uow.commit(&token()).await.unwrap(), 1);
    assert!(
        store
            .get_active_by_id(room.instructor.id, &token())
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        store
            .get_by_id_any_state(room.instructor.id, &token())
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_state_partitioned_listings() {
    let room = classroom().await;
    let student = create_student(&room.storage, "ada@example.com").await;
    let users = UserService::new(room.storage.clone());
    let facade = QueryFacade::new(room.storage.clone());

    users.deactivate(student.id, &token()).await.unwrap();

    let all: Vec<User> = facade.list_all(&token()).await.unwrap();
    let active: Vec<User> = facade.list_active(&token()).await.unwrap();
    let inactive: Vec<User> = facade.list_inactive(&token()).await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, room.instructor.id);
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].id, student.id);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let room = classroom().await;
    let facade = QueryFacade::new(room.storage.clone());
    let err = facade.get::<Course>(Uuid::new_v4(), &token()).await.unwrap_err();
    assert_eq!(err, PlatformError::not_found("Course not found"));
}
