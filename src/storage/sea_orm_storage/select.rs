//! 记录读取
//!
//! 把 `RecordQuery` 翻译为对应实体的 `Select`。

use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    Value,
};

use super::SeaOrmStorage;
use crate::entity;
use crate::errors::{PlatformError, Result};
use crate::storage::{
    EntityKind, Field, FieldValue, Record, RecordQuery, SortDirection, SortKey, StateScope,
};

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Uuid(v) => v.into(),
            FieldValue::Text(v) => v.into(),
            FieldValue::Bool(v) => v.into(),
            FieldValue::Int(v) => v.into(),
        }
    }
}

/// 可按 `RecordQuery` 查询的实体
pub(super) trait RecordEntity: EntityTrait {
    const KIND: EntityKind;

    fn id_column() -> Self::Column;
    fn active_column() -> Self::Column;
    fn created_at_column() -> Self::Column;
    fn field_column(field: Field) -> Option<Self::Column>;
    fn sort_column(key: SortKey) -> Option<Self::Column>;
    fn into_record(model: Self::Model) -> Record;
}

macro_rules! record_entity {
    (
        $module:ident => $kind:ident via $into:ident,
        fields { $($field:ident => $column:ident),* $(,)? },
        sorts { $($sort:ident => $sort_column:ident),* $(,)? }
    ) => {
        impl RecordEntity for entity::$module::Entity {
            const KIND: EntityKind = EntityKind::$kind;

            fn id_column() -> Self::Column {
                entity::$module::Column::Id
            }

            fn active_column() -> Self::Column {
                entity::$module::Column::IsActive
            }

            fn created_at_column() -> Self::Column {
                entity::$module::Column::CreatedAt
            }

            #[allow(unreachable_patterns)]
            fn field_column(field: Field) -> Option<Self::Column> {
                match field {
                    $(Field::$field => Some(entity::$module::Column::$column),)*
                    _ => None,
                }
            }

            #[allow(unreachable_patterns)]
            fn sort_column(key: SortKey) -> Option<Self::Column> {
                match key {
                    SortKey::CreatedAt => Some(entity::$module::Column::CreatedAt),
                    $(SortKey::$sort => Some(entity::$module::Column::$sort_column),)*
                    _ => None,
                }
            }

            fn into_record(model: Self::Model) -> Record {
                Record::$kind(model.$into())
            }
        }
    };
}

record_entity! {
    users => User via into_user,
    fields { Email => Email },
    sorts {}
}

record_entity! {
    courses => Course via into_course,
    fields { InstructorId => InstructorId, IsPublished => IsPublished },
    sorts {}
}

record_entity! {
    course_modules => CourseModule via into_course_module,
    fields { CourseId => CourseId, OrderIndex => OrderIndex },
    sorts { OrderIndex => OrderIndex }
}

record_entity! {
    resources => Resource via into_resource,
    fields { CourseId => CourseId, ModuleId => ModuleId, UploadedById => UploadedById },
    sorts {}
}

record_entity! {
    enrollments => Enrollment via into_enrollment,
    fields { CourseId => CourseId, UserId => UserId },
    sorts {}
}

record_entity! {
    evaluations => Evaluation via into_evaluation,
    fields { CourseId => CourseId, IsPublished => IsPublished },
    sorts {}
}

record_entity! {
    submissions => Submission via into_submission,
    fields { EvaluationId => EvaluationId, StudentId => StudentId },
    sorts { AttemptNumber => AttemptNumber }
}

record_entity! {
    notifications => Notification via into_notification,
    fields { CourseId => CourseId },
    sorts {}
}

record_entity! {
    notification_recipients => NotificationRecipient via into_notification_recipient,
    fields {
        NotificationId => NotificationId,
        UserId => UserId,
        IsDelivered => IsDelivered,
        IsRead => IsRead,
    },
    sorts {}
}

/// 构建查询；未指定排序时按创建时间升序
fn build_select<E: RecordEntity>(query: &RecordQuery) -> Result<Select<E>> {
    let mut select = E::find();

    if let Some(ids) = &query.ids {
        select = select.filter(E::id_column().is_in(ids.iter().copied()));
    }

    match query.scope {
        StateScope::Active => select = select.filter(E::active_column().eq(true)),
        StateScope::Inactive => select = select.filter(E::active_column().eq(false)),
        StateScope::Any => {}
    }

    for (field, value) in &query.filters {
        let column = E::field_column(*field).ok_or_else(|| {
            PlatformError::database_operation(format!("{} 不支持按 {field:?} 过滤", E::KIND))
        })?;
        select = select.filter(column.eq(value.clone()));
    }

    if query.order.is_empty() {
        select = select.order_by_asc(E::created_at_column());
    }
    for (key, direction) in &query.order {
        let column = E::sort_column(*key).ok_or_else(|| {
            PlatformError::database_operation(format!("{} 不支持按 {key:?} 排序", E::KIND))
        })?;
        select = match direction {
            SortDirection::Asc => select.order_by_asc(column),
            SortDirection::Desc => select.order_by_desc(column),
        };
    }

    if let Some(limit) = query.limit {
        select = select.limit(limit);
    }

    Ok(select)
}

impl SeaOrmStorage {
    pub(super) async fn fetch_records_impl<E>(&self, query: &RecordQuery) -> Result<Vec<Record>>
    where
        E: RecordEntity,
        E::Model: Send + Sync,
    {
        let models = build_select::<E>(query)?
            .all(&self.db)
            .await
            .map_err(|e| PlatformError::database_operation(format!("查询 {} 失败: {e}", E::KIND)))?;

        Ok(models.into_iter().map(E::into_record).collect())
    }

    pub(super) async fn count_records_impl<E>(&self, query: &RecordQuery) -> Result<u64>
    where
        E: RecordEntity,
        E::Model: Send + Sync,
    {
        build_select::<E>(query)?
            .count(&self.db)
            .await
            .map_err(|e| PlatformError::database_operation(format!("统计 {} 失败: {e}", E::KIND)))
    }
}
