use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{Record, Storage};
use crate::errors::Result;
use crate::utils::cancel::ensure_not_cancelled;

/// 暂存的写操作
#[derive(Debug, Clone, PartialEq)]
pub enum StagedWrite {
    Insert(Record),
    Update(Record),
}

impl StagedWrite {
    pub fn record(&self) -> &Record {
        match self {
            StagedWrite::Insert(record) | StagedWrite::Update(record) => record,
        }
    }
}

/// 工作单元
///
/// 一次业务操作的所有写入先暂存在这里，`commit` 时在一个事务内按暂存顺序落库。
/// `commit` 消耗自身，同一批次不会被提交两次；未提交即丢弃等同于放弃全部写入。
pub struct UnitOfWork {
    storage: Arc<dyn Storage>,
    writes: Vec<StagedWrite>,
}

impl UnitOfWork {
    pub fn begin(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            writes: Vec::new(),
        }
    }

    pub fn stage_insert(&mut self, record: Record) {
        self.writes.push(StagedWrite::Insert(record));
    }

    pub fn stage_update(&mut self, record: Record) {
        self.writes.push(StagedWrite::Update(record));
    }

    pub fn pending(&self) -> &[StagedWrite] {
        &self.writes
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// 原子提交全部暂存写入，返回受影响行数
    pub async fn commit(self, cancel: &CancellationToken) -> Result<u64> {
        ensure_not_cancelled(cancel)?;
        if self.writes.is_empty() {
            return Ok(0);
        }

        let staged = self.writes.len();
        let affected = self.storage.apply(self.writes, cancel).await?;
        debug!("Unit of work committed: {} staged, {} affected", staged, affected);
        Ok(affected)
    }
}
