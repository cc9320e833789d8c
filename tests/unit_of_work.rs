mod common;

use chrono::Utc;
use learnhub::errors::PlatformError;
use learnhub::models::notifications::entities::{Notification, NotificationRecipient};
use learnhub::models::users::{entities::User, requests::CreateUserRequest};
use learnhub::services::{QueryFacade, UserService};
use learnhub::storage::{EntityStore, UnitOfWork};
use learnhub::utils::time;
use uuid::Uuid;

use common::{create_student, memory_storage, token};

fn notification() -> Notification {
    let now = time::now();
    Notification {
        id: Uuid::new_v4(),
        title: "Batch".to_string(),
        message: "staged".to_string(),
        payload: None,
        channel: "ui".to_string(),
        sender_id: None,
        course_id: None,
        context_type: None,
        context_id: None,
        sent_at: Some(now),
        expires_at: None,
        is_active: true,
        created_at: now,
        updated_at: None,
    }
}

fn recipient(notification_id: Uuid, user_id: Uuid) -> NotificationRecipient {
    NotificationRecipient {
        id: Uuid::new_v4(),
        notification_id,
        user_id,
        is_delivered: false,
        delivered_at: None,
        is_read: false,
        read_at: None,
        is_active: true,
        created_at: time::now(),
        updated_at: None,
    }
}

#[tokio::test]
async fn test_rejected_write_rolls_back_whole_batch() {
    let storage = memory_storage().await;
    let ada = create_student(&storage, "ada@example.com").await;
    let notifications = EntityStore::<Notification>::new(storage.clone());
    let recipients = EntityStore::<NotificationRecipient>::new(storage.clone());

    let parent = notification();
    let mut uow = UnitOfWork::begin(storage.clone());
    notifications.stage(&mut uow, parent.clone());
    recipients.stage(&mut uow, recipient(parent.id, ada.id));
    // 指向不存在的用户，外键拒绝
    recipients.stage(&mut uow, recipient(parent.id, Uuid::new_v4()));

    let err = uow.commit(&token()).await.unwrap_err();
    assert!(matches!(err, PlatformError::PersistenceConflict(_)));

    assert!(
        notifications
            .get_by_id_any_state(parent.id, &token())
            .await
            .unwrap()
            .is_none()
    );
    assert!(recipients.list_all(&token()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cancelled_commit_persists_nothing() {
    let storage = memory_storage().await;
    let notifications = EntityStore::<Notification>::new(storage.clone());

    let mut uow = UnitOfWork::begin(storage.clone());
    notifications.stage(&mut uow, notification());

    let cancel = token();
    cancel.cancel();
    let err = uow.commit(&cancel).await.unwrap_err();
    assert!(matches!(err, PlatformError::Cancelled(_)));

    assert!(notifications.list_all(&token()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cancelled_operation_stages_nothing() {
    let storage = memory_storage().await;
    let service = UserService::new(storage.clone());

    let cancel = token();
    cancel.cancel();
    let err = service
        .create_user(
            CreateUserRequest {
                email: "ada@example.com".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                role: None,
            },
            &cancel,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, PlatformError::Cancelled(_)));

    let users: Vec<User> = QueryFacade::new(storage.clone())
        .list_all(&token())
        .await
        .unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_empty_unit_of_work_commits_nothing() {
    let storage = memory_storage().await;
    let uow = UnitOfWork::begin(storage.clone());
    assert!(uow.is_empty());
    assert_eq!(uow.commit(&token()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_staged_writes_apply_in_order() {
    let storage = memory_storage().await;
    let ada = create_student(&storage, "ada@example.com").await;
    let notifications = EntityStore::<Notification>::new(storage.clone());
    let recipients = EntityStore::<NotificationRecipient>::new(storage.clone());

    let parent = notification();
    let mut child = recipient(parent.id, ada.id);
    let mut uow = UnitOfWork::begin(storage.clone());
    notifications.stage(&mut uow, parent.clone());
    recipients.stage(&mut uow, child.clone());
    child.mark_read(Utc::now());
    recipients.stage_update(&mut uow, child.clone());

    assert_eq!(uow.commit(&token()).await.unwrap(), 3);
    let stored = recipients
        .get_active_by_id(child.id, &token())
        .await
        .unwrap()
        .unwrap();
    assert!(stored.is_read);
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let storage = memory_storage().await;
    create_student(&storage, "ada@example.com").await;

    let err = UserService::new(storage.clone())
        .create_user(
            CreateUserRequest {
                email: "ada@example.com".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Again".to_string(),
                role: None,
            },
            &token(),
        )
        .await
        .unwrap_err();
    assert_eq!(err, PlatformError::conflict("Email already registered"));
}
