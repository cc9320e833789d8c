mod common;

use chrono::{Duration, Utc};
use learnhub::errors::PlatformError;
use learnhub::models::Patch;
use learnhub::models::course_modules::requests::{
    CreateCourseModuleRequest, UpdateCourseModuleRequest,
};
use learnhub::models::courses::requests::{CreateCourseRequest, UpdateCourseRequest};
use learnhub::models::course_modules::entities::CourseModule;
use learnhub::models::evaluations::entities::Evaluation;
use learnhub::models::evaluations::requests::{
    CreateEvaluationRequest, PublishEvaluationRequest, UpdateEvaluationRequest,
};
use learnhub::models::resources::requests::{CreateResourceRequest, UpdateResourceRequest};
use learnhub::services::{
    CourseModuleService, CourseService, EvaluationService, QueryFacade, ResourceService,
};
use uuid::Uuid;

use common::{classroom, create_course, published_evaluation, token};

fn module_request(course_id: Uuid, title: &str, order_index: i32) -> CreateCourseModuleRequest {
    CreateCourseModuleRequest {
        course_id,
        title: title.to_string(),
        order_index,
        description: None,
    }
}

fn evaluation_request(course_id: Uuid) -> CreateEvaluationRequest {
    CreateEvaluationRequest {
        course_id,
        title: "Midterm".to_string(),
        description: None,
        total_points: 100.0,
        open_at: None,
        close_at: None,
        time_limit_minutes: Some(90),
    }
}

#[tokio::test]
async fn test_course_starts_unpublished_and_patches() {
    let room = classroom().await;
    assert!(!room.course.is_published);

    let service = CourseService::new(room.storage.clone());
    let with_description = service
        .update_course(
            room.course.id,
            UpdateCourseRequest {
                description: Patch::Set(Some("Intro to programming".to_string())),
                is_published: Patch::Set(true),
                ..Default::default()
            },
            &token(),
        )
        .await
        .unwrap();
    assert!(with_description.is_published);
    assert_eq!(with_description.title, room.course.title);

    let cleared = service
        .update_course(
            room.course.id,
            UpdateCourseRequest {
                description: Patch::Set(None),
                ..Default::default()
            },
            &token(),
        )
        .await
        .unwrap();
    assert!(cleared.description.is_none());
    assert!(cleared.is_published);

    let facade = QueryFacade::new(room.storage.clone());
    let published = facade.published_courses(&token()).await.unwrap();
    assert_eq!(published.len(), 1);
    let taught = facade
        .courses_by_instructor(room.instructor.id, &token())
        .await
        .unwrap();
    assert_eq!(taught.len(), 1);
}

#[tokio::test]
async fn test_course_requires_active_instructor() {
    let room = classroom().await;
    let service = CourseService::new(room.storage.clone());

    let err = service
        .create_course(
            CreateCourseRequest {
                title: "Ghost".to_string(),
                code: "GH1".to_string(),
                description: None,
                instructor_id: Uuid::new_v4(),
            },
            &token(),
        )
        .await
        .unwrap_err();
    assert_eq!(err, PlatformError::not_found("Instructor not found"));

    let err = service
        .create_course(
            CreateCourseRequest {
                title: " ".to_string(),
                code: "GH1".to_string(),
                description: None,
                instructor_id: room.instructor.id,
            },
            &token(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, PlatformError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_module_order_index_is_unique_per_course() {
    let room = classroom().await;
    let other_course = create_course(&room.storage, &room.instructor, "CS102").await;
    let service = CourseModuleService::new(room.storage.clone());

    let first = service
        .create_module(module_request(room.course.id, "Basics", 1), &token())
        .await
        .unwrap();
    let err = service
        .create_module(module_request(room.course.id, "Again", 1), &token())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        PlatformError::conflict("OrderIndex 1 already used in this course")
    );

    // 其他课程不受影响
    service
        .create_module(module_request(other_course.id, "Basics", 1), &token())
        .await
        .unwrap();

    // 更新为自身当前序号不冲突
    let renamed = service
        .update_module(
            first.id,
            UpdateCourseModuleRequest {
                title: Patch::Set("Foundations".to_string()),
                order_index: Patch::Set(1),
                ..Default::default()
            },
            &token(),
        )
        .await
        .unwrap();
    assert_eq!(renamed.title, "Foundations");

    // 停用后序号可被复用
    service.deactivate(first.id, &token()).await.unwrap();
    service
        .create_module(module_request(room.course.id, "Replacement", 1), &token())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_course_content_orders_modules() {
    let room = classroom().await;
    let modules = CourseModuleService::new(room.storage.clone());
    let third = modules
        .create_module(module_request(room.course.id, "Third", 3), &token())
        .await
        .unwrap();
    let first = modules
        .create_module(module_request(room.course.id, "First", 1), &token())
        .await
        .unwrap();

    let resources = ResourceService::new(room.storage.clone());
    let slides = resources
        .create_resource(
            CreateResourceRequest {
                resource_type: "slides".to_string(),
                name: "Week 1".to_string(),
                url: "https://files.example.com/w1.pdf".to_string(),
                uploaded_by_id: room.instructor.id,
                course_id: Some(room.course.id),
                module_id: Some(first.id),
            },
            &token(),
        )
        .await
        .unwrap();
    let renamed = resources
        .update_resource(
            slides.id,
            UpdateResourceRequest {
                name: Patch::Set("Week 1 slides".to_string()),
                ..Default::default()
            },
            &token(),
        )
        .await
        .unwrap();
    assert_eq!(renamed.url, slides.url);

    EvaluationService::new(room.storage.clone())
        .create_evaluation(evaluation_request(room.course.id), &token())
        .await
        .unwrap();

    let content = QueryFacade::new(room.storage.clone())
        .course_with_content(room.course.id, &token())
        .await
        .unwrap();
    let order: Vec<Uuid> = content.modules.iter().map(|m| m.id).collect();
    assert_eq!(order, vec![first.id, third.id]);
    assert_eq!(content.resources.len(), 1);
    assert_eq!(content.resources[0].name, "Week 1 slides");
    assert_eq!(content.evaluations.len(), 1);

    let by_module = QueryFacade::new(room.storage.clone())
        .resources_by_module(first.id, &token())
        .await
        .unwrap();
    assert_eq!(by_module.len(), 1);
}

#[tokio::test]
async fn test_resource_module_must_belong_to_course() {
    let room = classroom().await;
    let other_course = create_course(&room.storage, &room.instructor, "CS102").await;
    let module = CourseModuleService::new(room.storage.clone())
        .create_module(module_request(other_course.id, "Elsewhere", 1), &token())
        .await
        .unwrap();

    let err = ResourceService::new(room.storage.clone())
        .create_resource(
            CreateResourceRequest {
                resource_type: "link".to_string(),
                name: "Docs".to_string(),
                url: "https://docs.example.com".to_string(),
                uploaded_by_id: room.instructor.id,
                course_id: Some(room.course.id),
                module_id: Some(module.id),
            },
            &token(),
        )
        .await
        .unwrap_err();
    assert_eq!(
        err,
        PlatformError::invalid_state("Module does not belong to the given course")
    );
}

#[tokio::test]
async fn test_evaluation_argument_rules() {
    let room = classroom().await;
    let service = EvaluationService::new(room.storage.clone());

    let mut zero_points = evaluation_request(room.course.id);
    zero_points.total_points = 0.0;
    assert!(matches!(
        service.create_evaluation(zero_points, &token()).await,
        Err(PlatformError::InvalidArgument(_))
    ));

    let now = Utc::now();
    let mut inverted = evaluation_request(room.course.id);
    inverted.open_at = Some(now);
    inverted.close_at = Some(now - Duration::hours(1));
    assert_eq!(
        service.create_evaluation(inverted, &token()).await.unwrap_err(),
        PlatformError::invalid_argument("CloseAt must be later than OpenAt")
    );

    let evaluation = service
        .create_evaluation(evaluation_request(room.course.id), &token())
        .await
        .unwrap();
    assert!(!evaluation.is_published);

    let updated = service
        .update_evaluation(
            evaluation.id,
            UpdateEvaluationRequest {
                time_limit_minutes: Patch::Set(None),
                ..Default::default()
            },
            &token(),
        )
        .await
        .unwrap();
    assert!(updated.time_limit_minutes.is_none());
    assert_eq!(updated.total_points, 100.0);
}

#[tokio::test]
async fn test_open_evaluations_respect_window_and_publication() {
    let room = classroom().await;
    let open = published_evaluation(&room.storage, &room.course, None).await;
    let closed =
        published_evaluation(&room.storage, &room.course, Some(Utc::now() - Duration::hours(1)))
            .await;
    EvaluationService::new(room.storage.clone())
        .create_evaluation(evaluation_request(room.course.id), &token())
        .await
        .unwrap();

    let listed = QueryFacade::new(room.storage.clone())
        .open_evaluations(&token())
        .await
        .unwrap();
    let ids: Vec<Uuid> = listed.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![open.id]);
    assert!(!ids.contains(&closed.id));

    // 重复发布保持原窗口
    let republished = EvaluationService::new(room.storage.clone())
        .publish(open.id, Default::default(), &token())
        .await
        .unwrap();
    assert!(republished.is_published);
    assert!(republished.close_at.is_none());
}

// 调用方给出的时间截断到毫秒，返回值与重新读取的结果一致
#[tokio::test]
async fn test_evaluation_window_matches_stored_value() {
    let room = classroom().await;
    let service = EvaluationService::new(room.storage.clone());
    let facade = QueryFacade::new(room.storage.clone());
    let precise = Utc::now() + Duration::hours(1) + Duration::nanoseconds(123_456);

    let mut create = evaluation_request(room.course.id);
    create.close_at = Some(precise);
    let created = service.create_evaluation(create, &token()).await.unwrap();
    let stored = facade.get::<Evaluation>(created.id, &token()).await.unwrap();
    assert_eq!(created, stored);

    let updated = service
        .update_evaluation(
            created.id,
            UpdateEvaluationRequest {
                open_at: Patch::Set(Some(precise - Duration::hours(2))),
                close_at: Patch::Set(Some(precise + Duration::hours(1))),
                ..Default::default()
            },
            &token(),
        )
        .await
        .unwrap();
    let stored = facade.get::<Evaluation>(created.id, &token()).await.unwrap();
    assert_eq!(updated, stored);

    let published = service
        .publish(
            created.id,
            PublishEvaluationRequest {
                open_at: None,
                close_at: Some(precise + Duration::hours(2)),
            },
            &token(),
        )
        .await
        .unwrap();
    let stored = facade.get::<Evaluation>(created.id, &token()).await.unwrap();
    assert_eq!(published, stored);
    assert_eq!(stored.close_at.unwrap().timestamp_subsec_nanos() % 1_000_000, 0);
}

#[tokio::test]
async fn test_updates_trim_text_fields() {
    let room = classroom().await;
    let modules = CourseModuleService::new(room.storage.clone());
    let module = modules
        .create_module(module_request(room.course.id, "Basics", 1), &token())
        .await
        .unwrap();

    let renamed = modules
        .update_module(
            module.id,
            UpdateCourseModuleRequest {
                title: Patch::Set("  Foundations  ".to_string()),
                ..Default::default()
            },
            &token(),
        )
        .await
        .unwrap();
    assert_eq!(renamed.title, "Foundations");
    let stored = QueryFacade::new(room.storage.clone())
        .get::<CourseModule>(module.id, &token())
        .await
        .unwrap();
    assert_eq!(stored.title, "Foundations");

    let course = CourseService::new(room.storage.clone())
        .update_course(
            room.course.id,
            UpdateCourseRequest {
                title: Patch::Set(" Algorithms ".to_string()),
                code: Patch::Set(" CS201 ".to_string()),
                ..Default::default()
            },
            &token(),
        )
        .await
        .unwrap();
    assert_eq!(course.title, "Algorithms");
    assert_eq!(course.code, "CS201");

    let evaluations = EvaluationService::new(room.storage.clone());
    let evaluation = evaluations
        .create_evaluation(evaluation_request(room.course.id), &token())
        .await
        .unwrap();
    let retitled = evaluations
        .update_evaluation(
            evaluation.id,
            UpdateEvaluationRequest {
                title: Patch::Set("\tFinal\n".to_string()),
                ..Default::default()
            },
            &token(),
        )
        .await
        .unwrap();
    assert_eq!(retitled.title, "Final");
}
