use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

use super::UserService;
use crate::errors::{PlatformError, Result};
use crate::models::users::{entities::User, requests::CreateUserRequest};
use crate::storage::{Field, UnitOfWork};
use crate::utils::time;
use crate::utils::validate::{require_text, validate_email};

pub async fn create_user(
    service: &UserService,
    request: CreateUserRequest,
    cancel: &CancellationToken,
) -> Result<User> {
    let email = request.email.trim().to_string();
    validate_email(&email)?;
    require_text(&request.first_name, "FirstName")?;
    require_text(&request.last_name, "LastName")?;

    // 邮箱在所有状态的用户中唯一
    let taken = service
        .users
        .count(service.users.query().filter(Field::Email, email.as_str()), cancel)
        .await?;
    if taken > 0 {
        warn!("User creation rejected, email already registered: {}", email);
        return Err(PlatformError::conflict("Email already registered"));
    }

    let user = User {
        id: Uuid::new_v4(),
        email,
        first_name: request.first_name.trim().to_string(),
        last_name: request.last_name.trim().to_string(),
        role: request.role.unwrap_or_default(),
        is_active: true,
        created_at: time::now(),
        updated_at: None,
    };

    let mut uow = UnitOfWork::begin(service.storage());
    service.users.stage(&mut uow, user.clone());
    uow.commit(cancel).await?;

    info!("User {} created with role {}", user.id, user.role);
    Ok(user)
}
