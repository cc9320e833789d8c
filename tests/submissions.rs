mod common;

use chrono::{Duration, Utc};
use learnhub::errors::PlatformError;
use learnhub::models::Patch;
use learnhub::models::submissions::{
    entities::SubmissionStatus,
    requests::{CreateSubmissionRequest, GradeSubmissionRequest, UpdateSubmissionRequest},
};
use learnhub::services::{EvaluationService, QueryFacade, SubmissionService};
use uuid::Uuid;

use common::{classroom, create_student, enroll, in_one_hour, published_evaluation, token};

fn request(evaluation_id: Uuid, student_id: Uuid) -> CreateSubmissionRequest {
    CreateSubmissionRequest {
        evaluation_id,
        student_id,
        content: "print('hello')".to_string(),
        file_url: None,
        attempt_number: None,
    }
}

#[tokio::test]
async fn test_submission_scenario_numbers_attempts() {
    let room = classroom().await;
    let student = create_student(&room.storage, "ada@example.com").await;
    enroll(&room.storage, &room.course, &student).await;
    let evaluation = published_evaluation(&room.storage, &room.course, Some(in_one_hour())).await;
    let service = SubmissionService::new(room.storage.clone());

    let first = service
        .create_submission(request(evaluation.id, student.id), &token())
        .await
        .unwrap();
    assert_eq!(first.attempt_number, 1);
    assert!(!first.is_late);
    assert_eq!(first.status, SubmissionStatus::Submitted);
    assert!(first.score.is_none());

    let second = service
        .create_submission(request(evaluation.id, student.id), &token())
        .await
        .unwrap();
    assert_eq!(second.attempt_number, 2);
}

#[tokio::test]
async fn test_submission_after_close_is_late() {
    let room = classroom().await;
    let student = create_student(&room.storage, "ada@example.com").await;
    enroll(&room.storage, &room.course, &student).await;
    let closed = Utc::now() - Duration::seconds(1);
    let evaluation = published_evaluation(&room.storage, &room.course, Some(closed)).await;

    let submission = SubmissionService::new(room.storage.clone())
        .create_submission(request(evaluation.id, student.id), &token())
        .await
        .unwrap();
    assert!(submission.is_late);
}

#[tokio::test]
async fn test_submission_without_close_is_never_late() {
    let room = classroom().await;
    let student = create_student(&room.storage, "ada@example.com").await;
    enroll(&room.storage, &room.course, &student).await;
    let evaluation = published_evaluation(&room.storage, &room.course, None).await;

    let submission = SubmissionService::new(room.storage.clone())
        .create_submission(request(evaluation.id, student.id), &token())
        .await
        .unwrap();
    assert!(!submission.is_late);
}

#[tokio::test]
async fn test_submission_preconditions() {
    let room = classroom().await;
    let student = create_student(&room.storage, "ada@example.com").await;
    let evaluation = published_evaluation(&room.storage, &room.course, None).await;
    let service = SubmissionService::new(room.storage.clone());

    // 未选课
    let err = service
        .create_submission(request(evaluation.id, student.id), &token())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        PlatformError::invalid_state("Student is not enrolled in the evaluation's course")
    );

    enroll(&room.storage, &room.course, &student).await;

    // 未发布
    EvaluationService::new(room.storage.clone())
        .unpublish(evaluation.id, &token())
        .await
        .unwrap();
    let err = service
        .create_submission(request(evaluation.id, student.id), &token())
        .await
        .unwrap_err();
    assert_eq!(err, PlatformError::invalid_state("Evaluation is not published"));

    let err = service
        .create_submission(request(Uuid::new_v4(), student.id), &token())
        .await
        .unwrap_err();
    assert_eq!(err, PlatformError::not_found("Evaluation not found"));

    let mut blank = request(evaluation.id, student.id);
    blank.content = "   ".to_string();
    let err = service.create_submission(blank, &token()).await.unwrap_err();
    assert!(matches!(err, PlatformError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_explicit_attempt_number_is_kept() {
    let room = classroom().await;
    let student = create_student(&room.storage, "ada@example.com").await;
    enroll(&room.storage, &room.course, &student).await;
    let evaluation = published_evaluation(&room.storage, &room.course, None).await;
    let service = SubmissionService::new(room.storage.clone());

    let mut explicit = request(evaluation.id, student.id);
    explicit.attempt_number = Some(5);
    let fifth = service.create_submission(explicit, &token()).await.unwrap();
    assert_eq!(fifth.attempt_number, 5);

    let next = service
        .create_submission(request(evaluation.id, student.id), &token())
        .await
        .unwrap();
    assert_eq!(next.attempt_number, 6);
}

// 尝试次数的读取与写入之间不加锁：并发的首次提交都取得 1
#[tokio::test]
async fn test_concurrent_first_submissions_share_attempt_number() {
    let room = classroom().await;
    let student = create_student(&room.storage, "ada@example.com").await;
    enroll(&room.storage, &room.course, &student).await;
    let evaluation = published_evaluation(&room.storage, &room.course, None).await;
    let service = SubmissionService::new(room.storage.clone());
    let cancel = token();

    let (first, second) = tokio::join!(
        service.create_submission(request(evaluation.id, student.id), &cancel),
        service.create_submission(request(evaluation.id, student.id), &cancel),
    );

    let first = first.unwrap();
    let second = second.unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(first.attempt_number, 1);
    assert_eq!(second.attempt_number, 1);

    let listed = QueryFacade::new(room.storage.clone())
        .submissions_by_evaluation(evaluation.id, &cancel)
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn test_attempts_continue_past_deactivated_submissions() {
    let room = classroom().await;
    let student = create_student(&room.storage, "ada@example.com").await;
    enroll(&room.storage, &room.course, &student).await;
    let evaluation = published_evaluation(&room.storage, &room.course, None).await;
    let service = SubmissionService::new(room.storage.clone());

    let first = service
        .create_submission(request(evaluation.id, student.id), &token())
        .await
        .unwrap();
    service.deactivate(first.id, &token()).await.unwrap();

    let second = service
        .create_submission(request(evaluation.id, student.id), &token())
        .await
        .unwrap();
    assert_eq!(second.attempt_number, 2);

    let facade = QueryFacade::new(room.storage.clone());
    let listed = facade
        .submissions_by_evaluation(evaluation.id, &token())
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, second.id);
}

#[tokio::test]
async fn test_grading_and_content_patch() {
    let room = classroom().await;
    let student = create_student(&room.storage, "ada@example.com").await;
    enroll(&room.storage, &room.course, &student).await;
    let evaluation = published_evaluation(&room.storage, &room.course, None).await;
    let service = SubmissionService::new(room.storage.clone());

    let submission = service
        .create_submission(request(evaluation.id, student.id), &token())
        .await
        .unwrap();

    let graded = service
        .grade_submission(
            submission.id,
            GradeSubmissionRequest {
                score: Patch::Set(Some(8.5)),
                feedback: Patch::Set(Some("Good".to_string())),
                status: Patch::Set(SubmissionStatus::Graded),
            },
            &token(),
        )
        .await
        .unwrap();
    assert_eq!(graded.score, Some(8.5));
    assert_eq!(graded.status, SubmissionStatus::Graded);
    assert_eq!(graded.attempt_number, submission.attempt_number);
    assert_eq!(graded.is_late, submission.is_late);

    let err = service
        .grade_submission(
            submission.id,
            GradeSubmissionRequest {
                score: Patch::Set(Some(-1.0)),
                ..Default::default()
            },
            &token(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, PlatformError::InvalidArgument(_)));

    let updated = service
        .update_submission(
            submission.id,
            UpdateSubmissionRequest {
                content: Patch::Set("print('bye')".to_string()),
                file_url: Patch::Unchanged,
            },
            &token(),
        )
        .await
        .unwrap();
    assert_eq!(updated.content, "print('bye')");
    // 未携带的字段保持不变
    assert_eq!(updated.feedback.as_deref(), Some("Good"));
    assert_eq!(updated.score, Some(8.5));

    let err = service
        .grade_submission(Uuid::new_v4(), GradeSubmissionRequest::default(), &token())
        .await
        .unwrap_err();
    assert!(matches!(err, PlatformError::NotFound(_)));
}
