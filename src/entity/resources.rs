//! 学习资源实体

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::models::resources::entities::{Resource};
use crate::utils::time::{from_millis, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "resources")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub resource_type: String,
    pub name: String,
    pub url: String,
    pub uploaded_at: i64,
    pub uploaded_by_id: Uuid,
    pub course_id: Option<Uuid>,
    pub module_id: Option<Uuid>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UploadedById",
        to = "super::users::Column::Id"
    )]
    UploadedBy,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::course_modules::Entity",
        from = "Column::ModuleId",
        to = "super::course_modules::Column::Id"
    )]
    Module,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UploadedBy.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::course_modules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_resource(self) -> Resource {
        Resource {
            id: self.id,
            resource_type: self.resource_type,
            name: self.name,
            url: self.url,
            uploaded_at: from_millis(self.uploaded_at),
            uploaded_by_id: self.uploaded_by_id,
            course_id: self.course_id,
            module_id: self.module_id,
            is_active: self.is_active,
            created_at: from_millis(self.created_at),
            updated_at: self.updated_at.map(from_millis),
        }
    }
}

// 业务模型转换为完整赋值的 ActiveModel（插入与整行更新共用）
impl From<Resource> for ActiveModel {
    fn from(value: Resource) -> Self {
        Self {
            id: Set(value.id),
            resource_type: Set(value.resource_type),
            name: Set(value.name),
            url: Set(value.url),
            uploaded_at: Set(to_millis(value.uploaded_at)),
            uploaded_by_id: Set(value.uploaded_by_id),
            course_id: Set(value.course_id),
            module_id: Set(value.module_id),
            is_active: Set(value.is_active),
            created_at: Set(to_millis(value.created_at)),
            updated_at: Set(value.updated_at.map(to_millis)),
        }
    }
}
