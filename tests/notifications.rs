mod common;

use std::time::Duration;

use learnhub::errors::PlatformError;
use learnhub::models::notifications::requests::CreateNotificationRequest;
use learnhub::models::users::entities::UserRole;
use learnhub::services::{NotificationService, UserService};
use uuid::Uuid;

use common::{create_student, create_user, memory_storage, token};

fn announcement(title: &str) -> CreateNotificationRequest {
    CreateNotificationRequest {
        title: title.to_string(),
        message: "Lecture moved to room 204".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_target_all_reaches_every_active_user() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "teacher@example.com", UserRole::Instructor).await;
    let ada = create_student(&storage, "ada@example.com").await;
    let grace = create_student(&storage, "grace@example.com").await;
    let gone = create_student(&storage, "gone@example.com").await;
    UserService::new(storage.clone())
        .deactivate(gone.id, &token())
        .await
        .unwrap();

    let service = NotificationService::new(storage.clone());
    let mut request = announcement("Room change");
    request.target_all = true;
    request.sender_id = Some(teacher.id);
    let detail = service.create_notification(request, &token()).await.unwrap();

    assert_eq!(detail.notification.channel, "ui");
    assert!(detail.notification.sent_at.is_some());
    assert_eq!(detail.recipients.len(), 3);
    let mut reached: Vec<Uuid> = detail.recipients.iter().map(|r| r.user_id).collect();
    reached.sort();
    let mut expected = vec![teacher.id, ada.id, grace.id];
    expected.sort();
    assert_eq!(reached, expected);
    assert!(
        detail
            .recipients
            .iter()
            .all(|r| !r.is_delivered && !r.is_read && r.is_active)
    );

    let stored = service
        .get_with_recipients(detail.notification.id, &token())
        .await
        .unwrap();
    assert_eq!(stored.recipients.len(), 3);
}

#[tokio::test]
async fn test_explicit_recipients_drop_unknown_ids() {
    let storage = memory_storage().await;
    let ada = create_student(&storage, "ada@example.com").await;
    let grace = create_student(&storage, "grace@example.com").await;

    let service = NotificationService::new(storage.clone());
    let mut request = announcement("Quiz graded");
    request.channel = Some("email".to_string());
    request.recipient_ids = Some(vec![grace.id, Uuid::new_v4(), ada.id, grace.id]);
    let detail = service.create_notification(request, &token()).await.unwrap();

    assert_eq!(detail.notification.channel, "email");
    let reached: Vec<Uuid> = detail.recipients.iter().map(|r| r.user_id).collect();
    assert_eq!(reached, vec![grace.id, ada.id]);
}

#[tokio::test]
async fn test_notification_without_recipients() {
    let storage = memory_storage().await;
    let service = NotificationService::new(storage.clone());
    let mut request = announcement("Draft");
    request.channel = Some("  ".to_string());

    let detail = service.create_notification(request, &token()).await.unwrap();
    assert_eq!(detail.notification.channel, "ui");
    assert!(detail.recipients.is_empty());
}

#[tokio::test]
async fn test_blank_title_is_rejected() {
    let storage = memory_storage().await;
    let service = NotificationService::new(storage.clone());
    let err = service
        .create_notification(announcement(" "), &token())
        .await
        .unwrap_err();
    assert_eq!(err, PlatformError::invalid_argument("Title is required"));
}

#[tokio::test]
async fn test_read_and_delivered_are_independent() {
    let storage = memory_storage().await;
    let ada = create_student(&storage, "ada@example.com").await;
    let service = NotificationService::new(storage.clone());

    let mut request = announcement("Welcome");
    request.recipient_ids = Some(vec![ada.id]);
    let detail = service.create_notification(request, &token()).await.unwrap();
    let recipient_id = detail.recipients[0].id;

    assert_eq!(service.count_unread(ada.id, &token()).await.unwrap(), 1);
    assert!(service.mark_read(recipient_id, &token()).await.unwrap());
    assert!(!service.mark_read(recipient_id, &token()).await.unwrap());
    assert_eq!(service.count_unread(ada.id, &token()).await.unwrap(), 0);

    let stored = service
        .recipients_for_user(ada.id, false, &token())
        .await
        .unwrap();
    assert!(stored[0].is_read);
    assert!(stored[0].read_at.is_some());
    assert!(!stored[0].is_delivered);
    assert!(stored[0].delivered_at.is_none());

    assert!(service.mark_delivered(recipient_id, &token()).await.unwrap());
    assert!(!service.mark_delivered(recipient_id, &token()).await.unwrap());
    assert!(service.list_pending(10, &token()).await.unwrap().is_empty());

    let err = service
        .mark_read(Uuid::new_v4(), &token())
        .await
        .unwrap_err();
    assert_eq!(err, PlatformError::not_found("Recipient not found"));
}

#[tokio::test]
async fn test_pending_list_is_oldest_first_and_bounded() {
    let storage = memory_storage().await;
    let ada = create_student(&storage, "ada@example.com").await;
    let service = NotificationService::new(storage.clone());

    let mut created = Vec::new();
    for title in ["first", "second", "third"] {
        let mut request = announcement(title);
        request.recipient_ids = Some(vec![ada.id]);
        let detail = service.create_notification(request, &token()).await.unwrap();
        created.push(detail.recipients[0].id);
        // 保证毫秒级时间戳递增
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let pending = service.list_pending(2, &token()).await.unwrap();
    let ids: Vec<Uuid> = pending.iter().map(|r| r.id).collect();
    assert_eq!(ids, created[..2].to_vec());

    assert!(service.list_pending(0, &token()).await.unwrap().is_empty());

    service.mark_delivered(created[0], &token()).await.unwrap();
    let pending = service.list_pending(10, &token()).await.unwrap();
    let ids: Vec<Uuid> = pending.iter().map(|r| r.id).collect();
    assert_eq!(ids, created[1..].to_vec());

    // 最新的在前
    let inbox = service
        .recipients_for_user(ada.id, true, &token())
        .await
        .unwrap();
    assert_eq!(inbox.first().map(|r| r.id), Some(created[2]));
    assert_eq!(inbox.len(), 3);
}
