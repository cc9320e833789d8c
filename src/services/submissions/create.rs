use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

use super::SubmissionService;
use crate::errors::{PlatformError, Result};
use crate::models::submissions::{
    entities::{Submission, SubmissionStatus},
    requests::CreateSubmissionRequest,
};
use crate::services::guards::require_active;
use crate::storage::{Field, UnitOfWork};
use crate::utils::time;
use crate::utils::validate::require_text;

pub async fn create_submission(
    service: &SubmissionService,
    request: CreateSubmissionRequest,
    cancel: &CancellationToken,
) -> Result<Submission> {
    require_text(&request.content, "Content")?;

    let evaluation =
        require_active(&service.evaluations, request.evaluation_id, "Evaluation", cancel).await?;
    if !evaluation.accepts_submissions() {
        return Err(PlatformError::invalid_state("Evaluation is not published"));
    }

    let student = require_active(&service.users, request.student_id, "Student", cancel).await?;

    let enrolled = service
        .enrollments
        .count(
            service
                .enrollments
                .query()
                .active()
                .filter(Field::CourseId, evaluation.course_id)
                .filter(Field::UserId, student.id),
            cancel,
        )
        .await?;
    if enrolled == 0 {
        warn!(
            "Submission rejected: student {} not enrolled in course {}",
            student.id, evaluation.course_id
        );
        return Err(PlatformError::invalid_state(
            "Student is not enrolled in the evaluation's course",
        ));
    }

    // 调用方给出正数序号时直接采用，否则顺延
    let attempt_number = match request.attempt_number {
        Some(n) if n > 0 => n,
        _ => {
            service
                .latest_attempt_number(evaluation.id, student.id, cancel)
                .await?
                .unwrap_or(0)
                + 1
        }
    };

    let submitted_at = time::now();
    let submission = Submission {
        id: Uuid::new_v4(),
        evaluation_id: evaluation.id,
        student_id: student.id,
        attempt_number,
        content: request.content,
        file_url: request.file_url,
        submitted_at,
        is_late: time::is_late(evaluation.close_at, submitted_at),
        score: None,
        feedback: None,
        status: SubmissionStatus::Submitted,
        is_active: true,
        created_at: submitted_at,
        updated_at: None,
    };

    let mut uow = UnitOfWork::begin(service.storage());
    service.submissions.stage(&mut uow, submission.clone());
    uow.commit(cancel).await?;

    info!(
        "Submission {} created: evaluation {}, student {}, attempt {}, late {}",
        submission.id,
        submission.evaluation_id,
        submission.student_id,
        submission.attempt_number,
        submission.is_late
    );
    Ok(submission)
}
