//! 内存存储基础设施

use std::sync::{Arc, Mutex, MutexGuard};

use crate::app::users::model::{seed_users, User};
use crate::core::error::CoreError;

/// 进程内的用户记录序列，按插入顺序保存
#[derive(Debug, Clone)]
pub struct MemoryStore {
    records: Arc<Mutex<Vec<User>>>,
}

impl MemoryStore {
    pub fn new(records: Vec<User>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    /// 以两条种子记录初始化
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>, CoreError> {
        self.records
            .lock()
            .map_err(|e| CoreError::Internal(format!("用户存储锁已中毒: {}", e)))
    }

    pub fn len(&self) -> Result<usize, CoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, CoreError> {
        Ok(self.lock()?.is_empty())
    }

    pub fn push(&self, user: User) -> Result<(), CoreError> {
        self.lock()?.push(user);
        Ok(())
    }

    /// 当前所有记录的副本
    pub fn snapshot(&self) -> Result<Vec<User>, CoreError> {
        Ok(self.lock()?.clone())
    }

    /// 在一次加锁内对记录序列执行操作
    pub fn with_records<R>(&self, f: impl FnOnce(&mut Vec<User>) -> R) -> Result<R, CoreError> {
        let mut records = self.lock()?;
        Ok(f(&mut records))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store() {
        let store = MemoryStore::seeded();
        assert_eq!(store.len().unwrap(), 2);
        let users = store.snapshot().unwrap();
        assert_eq!(users[0], User::new(1, "John Doe", 30.0));
        assert_eq!(users[1], User::new(2, "Jane Doe", 25.0));
    }

    #[test]
    fn test_clones_share_records() {
        let store = MemoryStore::new(Vec::new());
        let other = store.clone();
        assert!(store.is_empty().unwrap());

        other.push(User::new(1, "Sam", 40.0)).unwrap();
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let store = MemoryStore::seeded();
        let mut copy = store.snapshot().unwrap();
        copy[0].name = "Changed".to_string();
        assert_eq!(store.snapshot().unwrap()[0].name, "John Doe");
    }

    #[test]
    fn test_poisoned_lock_maps_to_internal_error() {
        let store = MemoryStore::seeded();
        let poisoned = store.clone();
        let _ = std::thread::spawn(move || {
            let _ = poisoned.with_records(|_| -> () { panic!("故意制造中毒") });
        })
        .join();

        assert!(matches!(store.len(), Err(CoreError::Internal(_))));
    }
}
