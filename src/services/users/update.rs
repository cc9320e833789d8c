use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

use super::UserService;
use crate::errors::{PlatformError, Result};
use crate::models::users::{entities::User, requests::UpdateUserRequest};
use crate::services::guards::require_existing;
use crate::storage::{Field, UnitOfWork};
use crate::utils::time;
use crate::utils::validate::{require_text, validate_email};

pub async fn update_user(
    service: &UserService,
    user_id: Uuid,
    request: UpdateUserRequest,
    cancel: &CancellationToken,
) -> Result<User> {
    let mut user = require_existing(&service.users, user_id, "User", cancel).await?;

    if let Some(email) = request.email.as_set() {
        let email = email.trim();
        validate_email(email)?;
        if email != user.email {
            let owners = service
                .users
                .find(service.users.query().filter(Field::Email, email), cancel)
                .await?;
            if owners.iter().any(|owner| owner.id != user.id) {
                return Err(PlatformError::conflict("Email already registered"));
            }
            user.email = email.to_string();
        }
    }
    if let Some(first_name) = request.first_name.as_set() {
        require_text(first_name, "FirstName")?;
    }
    if let Some(last_name) = request.last_name.as_set() {
        require_text(last_name, "LastName")?;
    }

    request.first_name.map(|v| v.trim().to_string()).apply_to(&mut user.first_name);
    request.last_name.map(|v| v.trim().to_string()).apply_to(&mut user.last_name);
    request.role.apply_to(&mut user.role);
    user.updated_at = Some(time::now());

    let mut uow = UnitOfWork::begin(service.storage());
    service.users.stage_update(&mut uow, user.clone());
    uow.commit(cancel).await?;

    info!("User {} updated", user.id);
    Ok(user)
}
