use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

use super::SubmissionService;
use crate::errors::{PlatformError, Result};
use crate::models::submissions::{entities::Submission, requests::GradeSubmissionRequest};
use crate::services::guards::require_existing;
use crate::storage::UnitOfWork;
use crate::utils::time;

pub async fn grade_submission(
    service: &SubmissionService,
    submission_id: Uuid,
    request: GradeSubmissionRequest,
    cancel: &CancellationToken,
) -> Result<Submission> {
    if let Some(Some(score)) = request.score.as_set()
        && (!score.is_finite() || *score < 0.0)
    {
        return Err(PlatformError::invalid_argument(
            "Score must be a non-negative number",
        ));
    }

    let mut submission =
        require_existing(&service.submissions, submission_id, "Submission", cancel).await?;

    request.score.apply_to(&mut submission.score);
    request.feedback.apply_to(&mut submission.feedback);
    request.status.apply_to(&mut submission.status);
    submission.updated_at = Some(time::now());

    let mut uow = UnitOfWork::begin(service.storage());
    service.submissions.stage_update(&mut uow, submission.clone());
    uow.commit(cancel).await?;

    info!(
        "Submission {} graded: score {:?}, status {}",
        submission.id, submission.score, submission.status
    );
    Ok(submission)
}
