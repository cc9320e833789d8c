//! 记录查询描述
//!
//! 业务层通过 `RecordQuery` 描述"按状态分区 + 关系字段过滤 + 排序 + 条数"的读取，
//! 具体的 SQL 由存储实现生成。

use uuid::Uuid;

use super::EntityKind;

/// 生命周期状态分区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateScope {
    #[default]
    Any,
    Active,
    Inactive,
}

/// 可过滤的关系/属性字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    InstructorId,
    IsPublished,
    CourseId,
    OrderIndex,
    ModuleId,
    UploadedById,
    UserId,
    EvaluationId,
    StudentId,
    NotificationId,
    IsDelivered,
    IsRead,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Uuid(Uuid),
    Text(String),
    Bool(bool),
    Int(i32),
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        FieldValue::Uuid(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CreatedAt,
    OrderIndex,
    AttemptNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordQuery {
    pub kind: EntityKind,
    pub ids: Option<Vec<Uuid>>,
    pub scope: StateScope,
    pub filters: Vec<(Field, FieldValue)>,
    pub order: Vec<(SortKey, SortDirection)>,
    pub limit: Option<u64>,
}

impl RecordQuery {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            ids: None,
            scope: StateScope::Any,
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    pub fn by_id(self, id: Uuid) -> Self {
        self.by_ids(vec![id])
    }

    pub fn by_ids(mut self, ids: Vec<Uuid>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn scope(mut self, scope: StateScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn active(self) -> Self {
        self.scope(StateScope::Active)
    }

    pub fn inactive(self) -> Self {
        self.scope(StateScope::Inactive)
    }

    pub fn filter(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        self.filters.push((field, value.into()));
        self
    }

    pub fn order_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.order.push((key, direction));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates_filters() {
        let course_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let query = RecordQuery::new(EntityKind::Enrollment)
            .active()
            .filter(Field::CourseId, course_id)
            .filter(Field::UserId, user_id)
            .limit(1);

        assert_eq!(query.scope, StateScope::Active);
        assert_eq!(
            query.filters,
            vec![
                (Field::CourseId, FieldValue::Uuid(course_id)),
                (Field::UserId, FieldValue::Uuid(user_id)),
            ]
        );
        assert_eq!(query.limit, Some(1));
        assert!(query.ids.is_none());
    }

    #[test]
    fn test_default_scope_covers_any_state() {
        let query = RecordQuery::new(EntityKind::User).by_id(Uuid::nil());
        assert_eq!(query.scope, StateScope::Any);
        assert_eq!(query.ids, Some(vec![Uuid::nil()]));
    }
}
