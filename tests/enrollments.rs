mod common;

use learnhub::errors::PlatformError;
use learnhub::models::enrollments::{
    entities::{Enrollment, EnrollmentStatus},
    requests::CreateEnrollmentRequest,
};
use learnhub::services::{CourseService, EnrollmentService, QueryFacade, UserService};
use uuid::Uuid;

use common::{classroom, create_student, enroll, token};

fn request(course_id: Uuid, user_id: Uuid) -> CreateEnrollmentRequest {
    CreateEnrollmentRequest { course_id, user_id }
}

#[tokio::test]
async fn test_enrollment_is_created_active() {
    let room = classroom().await;
    let student = create_student(&room.storage, "ada@example.com").await;

    let enrollment = enroll(&room.storage, &room.course, &student).await;
    assert_eq!(enrollment.status, EnrollmentStatus::Active);
    assert!(enrollment.is_active);
    assert!(enrollment.unenrolled_at.is_none());
    assert_eq!(enrollment.enrolled_at, enrollment.created_at);
}

#[tokio::test]
async fn test_duplicate_enrollment_is_conflict() {
    let room = classroom().await;
    let student = create_student(&room.storage, "ada@example.com").await;
    let service = EnrollmentService::new(room.storage.clone());

    service
        .create_enrollment(request(room.course.id, student.id), &token())
        .await
        .unwrap();
    let err = service
        .create_enrollment(request(room.course.id, student.id), &token())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        PlatformError::conflict("User already enrolled in this course")
    );

    let facade = QueryFacade::new(room.storage.clone());
    let active = facade
        .enrollments_by_course(room.course.id, &token())
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
}

#[tokio::test]
async fn test_reenroll_after_deactivation() {
    let room = classroom().await;
    let student = create_student(&room.storage, "ada@example.com").await;
    let service = EnrollmentService::new(room.storage.clone());

    let first = enroll(&room.storage, &room.course, &student).await;
    assert!(service.deactivate(first.id, &token()).await.unwrap());

    let second = service
        .create_enrollment(request(room.course.id, student.id), &token())
        .await
        .unwrap();
    assert_ne!(first.id, second.id);

    let facade = QueryFacade::new(room.storage.clone());
    let history: Vec<Enrollment> = facade.list_all(&token()).await.unwrap();
    assert_eq!(history.len(), 2);
}

#[tokio::test]
async fn test_enrollment_requires_existing_active_parties() {
    let room = classroom().await;
    let student = create_student(&room.storage, "ada@example.com").await;
    let service = EnrollmentService::new(room.storage.clone());

    let err = service
        .create_enrollment(request(room.course.id, Uuid::new_v4()), &token())
        .await
        .unwrap_err();
    assert!(matches!(err, PlatformError::NotFound(_)));

    let err = service
        .create_enrollment(request(Uuid::new_v4(), student.id), &token())
        .await
        .unwrap_err();
    assert!(matches!(err, PlatformError::NotFound(_)));

    UserService::new(room.storage.clone())
        .deactivate(student.id, &token())
        .await
        .unwrap();
    let err = service
        .create_enrollment(request(room.course.id, student.id), &token())
        .await
        .unwrap_err();
    assert_eq!(err, PlatformError::invalid_state("User is inactive"));

    let other = create_student(&room.storage, "grace@example.com").await;
    CourseService::new(room.storage.clone())
        .deactivate(room.course.id, &token())
        .await
        .unwrap();
    let err = service
        .create_enrollment(request(room.course.id, other.id), &token())
        .await
        .unwrap_err();
    assert_eq!(err, PlatformError::invalid_state("Course is inactive"));
}

#[tokio::test]
async fn test_users_by_course_follows_active_enrollments() {
    let room = classroom().await;
    let ada = create_student(&room.storage, "ada@example.com").await;
    let grace = create_student(&room.storage, "grace@example.com").await;
    let ada_enrollment = enroll(&room.storage, &room.course, &ada).await;
    enroll(&room.storage, &room.course, &grace).await;

    let facade = QueryFacade::new(room.storage.clone());
    assert_eq!(
        facade
            .users_by_course(room.course.id, &token())
            .await
            .unwrap()
            .len(),
        2
    );

    EnrollmentService::new(room.storage.clone())
        .deactivate(ada_enrollment.id, &token())
        .await
        .unwrap();
    let users = facade.users_by_course(room.course.id, &token()).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, grace.id);

    let by_user = facade.enrollments_by_user(ada.id, &token()).await.unwrap();
    assert!(by_user.is_empty());
}

// 去重检查与写入之间不加锁：并发的两次选课都会成功
#[tokio::test]
async fn test_concurrent_duplicate_enrollments_both_succeed() {
    let room = classroom().await;
    let student = create_student(&room.storage, "ada@example.com").await;
    let service = EnrollmentService::new(room.storage.clone());
    let cancel = token();

    let (first, second) = tokio::join!(
        service.create_enrollment(request(room.course.id, student.id), &cancel),
        service.create_enrollment(request(room.course.id, student.id), &cancel),
    );

    let first = first.unwrap();
    let second = second.unwrap();
    assert_ne!(first.id, second.id);

    let facade = QueryFacade::new(room.storage.clone());
    let active = facade
        .enrollments_by_course(room.course.id, &cancel)
        .await
        .unwrap();
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|e| e.user_id == student.id));
}
