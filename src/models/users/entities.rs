use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// 用户角色
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "user.ts")]
pub enum UserRole {
    #[default]
    Student,    // 学生
    Instructor, // 讲师
    Admin,      // 管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const INSTRUCTOR: &'static str = "instructor";
    pub const ADMIN: &'static str = "admin";
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: student, instructor, admin"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Instructor => write!(f, "{}", UserRole::INSTRUCTOR),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::INSTRUCTOR => Ok(UserRole::Instructor),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

crate::impl_lifecycle!(User, User);

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_text() {
        for role in [UserRole::Student, UserRole::Instructor, UserRole::Admin] {
            assert_eq!(role.to_string().parse::<UserRole>(), Ok(role));
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result: Result<UserRole, _> = serde_json::from_str(r#""teacher""#);
        assert!(result.is_err());
    }
}
