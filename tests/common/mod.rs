#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio_util::sync::CancellationToken;

use learnhub::config::DatabaseConfig;
use learnhub::models::courses::{entities::Course, requests::CreateCourseRequest};
use learnhub::models::enrollments::{entities::Enrollment, requests::CreateEnrollmentRequest};
use learnhub::models::evaluations::{
    entities::Evaluation,
    requests::{CreateEvaluationRequest, PublishEvaluationRequest},
};
use learnhub::models::users::{
    entities::{User, UserRole},
    requests::CreateUserRequest,
};
use learnhub::services::{CourseService, EnrollmentService, EvaluationService, UserService};
use learnhub::storage::Storage;
use learnhub::storage::sea_orm_storage::SeaOrmStorage;

/// 每个测试独立的内存数据库
pub async fn memory_storage() -> Arc<dyn Storage> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    let storage = SeaOrmStorage::connect(&config)
        .await
        .expect("in-memory storage should connect");
    Arc::new(storage)
}

pub fn token() -> CancellationToken {
    CancellationToken::new()
}

pub async fn create_user(storage: &Arc<dyn Storage>, email: &str, role: UserRole) -> User {
    UserService::new(storage.clone())
        .create_user(
            CreateUserRequest {
                email: email.to_string(),
                first_name: "Test".to_string(),
                last_name: email.split('@').next().unwrap_or("user").to_string(),
                role: Some(role),
            },
            &token(),
        )
        .await
        .expect("user should be created")
}

pub async fn create_student(storage: &Arc<dyn Storage>, email: &str) -> User {
    create_user(storage, email, UserRole::Student).await
}

pub async fn create_course(storage: &Arc<dyn Storage>, instructor: &User, code: &str) -> Course {
    CourseService::new(storage.clone())
        .create_course(
            CreateCourseRequest {
                title: format!("Course {code}"),
                code: code.to_string(),
                description: None,
                instructor_id: instructor.id,
            },
            &token(),
        )
        .await
        .expect("course should be created")
}

pub async fn enroll(storage: &Arc<dyn Storage>, course: &Course, user: &User) -> Enrollment {
    EnrollmentService::new(storage.clone())
        .create_enrollment(
            CreateEnrollmentRequest {
                course_id: course.id,
                user_id: user.id,
            },
            &token(),
        )
        .await
        .expect("enrollment should be created")
}

/// 创建并发布测评
pub async fn published_evaluation(
    storage: &Arc<dyn Storage>,
    course: &Course,
    close_at: Option<DateTime<Utc>>,
) -> Evaluation {
    let service = EvaluationService::new(storage.clone());
    let evaluation = service
        .create_evaluation(
            CreateEvaluationRequest {
                course_id: course.id,
                title: "Quiz 1".to_string(),
                description: None,
                total_points: 10.0,
                open_at: None,
                close_at: None,
                time_limit_minutes: None,
            },
            &token(),
        )
        .await
        .expect("evaluation should be created");

    service
        .publish(
            evaluation.id,
            PublishEvaluationRequest {
                open_at: None,
                close_at,
            },
            &token(),
        )
        .await
        .expect("evaluation should be published")
}

/// 常用场景：一名讲师、一门课程
pub struct Classroom {
    pub storage: Arc<dyn Storage>,
    pub instructor: User,
    pub course: Course,
}

pub async fn classroom() -> Classroom {
    let storage = memory_storage().await;
    let instructor = create_user(&storage, "teacher@example.com", UserRole::Instructor).await;
    let course = create_course(&storage, &instructor, "CS101").await;
    Classroom {
        storage,
        instructor,
        course,
    }
}

pub fn in_one_hour() -> DateTime<Utc> {
    Utc::now() + Duration::hours(1)
}
