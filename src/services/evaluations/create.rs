use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

use super::EvaluationService;
use crate::errors::{PlatformError, Result};
use crate::models::evaluations::{entities::Evaluation, requests::CreateEvaluationRequest};
use crate::services::guards::require_active;
use crate::storage::UnitOfWork;
use crate::utils::time;
use crate::utils::validate::{require_positive, require_text, validate_window};

pub async fn create_evaluation(
    service: &EvaluationService,
    request: CreateEvaluationRequest,
    cancel: &CancellationToken,
) -> Result<Evaluation> {
    require_text(&request.title, "Title")?;
    require_positive(request.total_points, "TotalPoints")?;
    validate_window(request.open_at, request.close_at)?;
    if request.time_limit_minutes.is_some_and(|minutes| minutes <= 0) {
        return Err(PlatformError::invalid_argument(
            "TimeLimitMinutes must be greater than 0",
        ));
    }

    let course = require_active(&service.courses, request.course_id, "Course", cancel).await?;

    let evaluation = Evaluation {
        id: Uuid::new_v4(),
        course_id: course.id,
        title: request.title.trim().to_string(),
        description: request.description,
        total_points: request.total_points,
        open_at: request.open_at.map(time::truncate),
        close_at: request.close_at.map(time::truncate),
        time_limit_minutes: request.time_limit_minutes,
        is_published: false,
        is_active: true,
        created_at: time::now(),
        updated_at: None,
    };

    let mut uow = UnitOfWork::begin(service.storage());
    service.evaluations.stage(&mut uow, evaluation.clone());
    uow.commit(cancel).await?;

    info!("Evaluation {} created in course {}", evaluation.id, course.id);
    Ok(evaluation)
}
