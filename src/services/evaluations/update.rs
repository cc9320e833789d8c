use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::EvaluationService;
use crate::errors::{PlatformError, Result};
use crate::models::evaluations::{entities::Evaluation, requests::UpdateEvaluationRequest};
use crate::services::guards::require_existing;
use crate::storage::UnitOfWork;
use crate::utils::time;
use crate::utils::validate::{require_positive, require_text, validate_window};

pub async fn update_evaluation(
    service: &EvaluationService,
    evaluation_id: Uuid,
    request: UpdateEvaluationRequest,
    cancel: &CancellationToken,
) -> Result<Evaluation> {
    let mut evaluation =
        require_existing(&service.evaluations, evaluation_id, "Evaluation", cancel).await?;

    if let Some(title) = request.title.as_set() {
        require_text(title, "Title")?;
    }
    if let Some(&total_points) = request.total_points.as_set() {
        require_positive(total_points, "TotalPoints")?;
    }
    if let Some(Some(minutes)) = request.time_limit_minutes.as_set()
        && *minutes <= 0
    {
        return Err(PlatformError::invalid_argument(
            "TimeLimitMinutes must be greater than 0",
        ));
    }

    request.title.map(|v| v.trim().to_string()).apply_to(&mut evaluation.title);
    request.description.apply_to(&mut evaluation.description);
    request.total_points.apply_to(&mut evaluation.total_points);
    request
        .open_at
        .map(|at| at.map(time::truncate))
        .apply_to(&mut evaluation.open_at);
    request
        .close_at
        .map(|at| at.map(time::truncate))
        .apply_to(&mut evaluation.close_at);
    request
        .time_limit_minutes
        .apply_to(&mut evaluation.time_limit_minutes);

    // 窗口在合并后的值上校验
    validate_window(evaluation.open_at, evaluation.close_at)?;
    evaluation.updated_at = Some(time::now());

    let mut uow = UnitOfWork::begin(service.storage());
    service.evaluations.stage_update(&mut uow, evaluation.clone());
    uow.commit(cancel).await?;

    Ok(evaluation)
}
