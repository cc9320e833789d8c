use serde::Deserialize;
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct CreateEnrollmentRequest {
    pub course_id: Uuid,
    pub user_id: Uuid,
}
