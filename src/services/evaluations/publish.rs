use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

use super::EvaluationService;
use crate::errors::{PlatformError, Result};
use crate::models::evaluations::{entities::Evaluation, requests::PublishEvaluationRequest};
use crate::services::guards::require_existing;
use crate::storage::UnitOfWork;
use crate::utils::time;
use crate::utils::validate::validate_window;

pub async fn publish_evaluation(
    service: &EvaluationService,
    evaluation_id: Uuid,
    request: PublishEvaluationRequest,
    cancel: &CancellationToken,
) -> Result<Evaluation> {
    let mut evaluation =
        require_existing(&service.evaluations, evaluation_id, "Evaluation", cancel).await?;
    if !evaluation.is_active {
        return Err(PlatformError::invalid_state(
            "Inactive evaluation cannot be published",
        ));
    }

    if let Some(open_at) = request.open_at {
        evaluation.open_at = Some(time::truncate(open_at));
    }
    if let Some(close_at) = request.close_at {
        evaluation.close_at = Some(time::truncate(close_at));
    }
    validate_window(evaluation.open_at, evaluation.close_at)?;

    evaluation.is_published = true;
    evaluation.updated_at = Some(time::now());

    let mut uow = UnitOfWork::begin(service.storage());
    service.evaluations.stage_update(&mut uow, evaluation.clone());
    uow.commit(cancel).await?;

    info!("Evaluation {} published", evaluation.id);
    Ok(evaluation)
}

pub async fn unpublish_evaluation(
    service: &EvaluationService,
    evaluation_id: Uuid,
    cancel: &CancellationToken,
) -> Result<Evaluation> {
    let mut evaluation =
        require_existing(&service.evaluations, evaluation_id, "Evaluation", cancel).await?;

    evaluation.is_published = false;
    evaluation.updated_at = Some(time::now());

    let mut uow = UnitOfWork::begin(service.storage());
    service.evaluations.stage_update(&mut uow, evaluation.clone());
    uow.commit(cancel).await?;

    info!("Evaluation {} unpublished", evaluation.id);
    Ok(evaluation)
}
