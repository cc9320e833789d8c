use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::SubmissionService;
use crate::errors::Result;
use crate::models::submissions::{entities::Submission, requests::UpdateSubmissionRequest};
use crate::services::guards::require_existing;
use crate::storage::UnitOfWork;
use crate::utils::time;
use crate::utils::validate::require_text;

pub async fn update_submission(
    service: &SubmissionService,
    submission_id: Uuid,
    request: UpdateSubmissionRequest,
    cancel: &CancellationToken,
) -> Result<Submission> {
    if let Some(content) = request.content.as_set() {
        require_text(content, "Content")?;
    }

    let mut submission =
        require_existing(&service.submissions, submission_id, "Submission", cancel).await?;

    request.content.apply_to(&mut submission.content);
    request.file_url.apply_to(&mut submission.file_url);
    submission.updated_at = Some(time::now());

    let mut uow = UnitOfWork::begin(service.storage());
    service.submissions.stage_update(&mut uow, submission.clone());
    uow.commit(cancel).await?;

    Ok(submission)
}
