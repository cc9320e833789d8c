//! 生命周期能力
//!
//! 所有持久化实体都带有 `id` / `is_active` / `created_at` / `updated_at` 四个字段，
//! 只能在激活与停用两种状态之间切换，不做物理删除。

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::storage::{EntityKind, Record};

pub trait Lifecycle: Clone + Send + Sync + 'static {
    /// 实体所属的存储类别
    const KIND: EntityKind;

    fn id(&self) -> Uuid;
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> Option<DateTime<Utc>>;
    /// 记录一次状态变更的时间
    fn touch(&mut self, at: DateTime<Utc>);

    fn into_record(self) -> Record;
    fn from_record(record: Record) -> Option<Self>;
}

/// 为带标准生命周期字段的实体生成 `Lifecycle` 实现
#[macro_export]
macro_rules! impl_lifecycle {
    ($ty:ty, $variant:ident) => {
        impl $crate::models::common::Lifecycle for $ty {
            const KIND: $crate::storage::EntityKind = $crate::storage::EntityKind::$variant;

            fn id(&self) -> uuid::Uuid {
                self.id
            }

            fn is_active(&self) -> bool {
                self.is_active
            }

            fn set_active(&mut self, active: bool) {
                self.is_active = active;
            }

            fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
                self.created_at
            }

            fn updated_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.updated_at
            }

            fn touch(&mut self, at: chrono::DateTime<chrono::Utc>) {
                self.updated_at = Some(at);
            }

            fn into_record(self) -> $crate::storage::Record {
                $crate::storage::Record::$variant(self)
            }

            fn from_record(record: $crate::storage::Record) -> Option<Self> {
                match record {
                    $crate::storage::Record::$variant(entity) => Some(entity),
                    _ => None,
                }
            }
        }
    };
}
