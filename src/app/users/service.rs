//! 用户业务服务

use tracing::debug;

use super::model::{present_age, present_name, CreateUserRequest, UpdateUserRequest, User};
use crate::config::LockingMode;
use crate::core::error::CoreError;
use crate::infrastructure::MemoryStore;

#[derive(Debug, Clone)]
pub struct UserService {
    store: MemoryStore,
    locking: LockingMode,
}

impl UserService {
    pub fn new(store: MemoryStore, locking: LockingMode) -> Self {
        Self { store, locking }
    }

    /// 新用户的 ID 为当前记录数 + 1
    pub fn create_user(&self, req: CreateUserRequest) -> Result<User, CoreError> {
        let (name, age) = match (present_name(req.name), present_age(req.age)) {
            (Some(name), Some(age)) => (name, age),
            _ => return Err(CoreError::Validation),
        };

        let user = match self.locking {
            LockingMode::Serialized => self.store.with_records(|records| {
                let user = User::new(records.len() as u64 + 1, name, age);
                records.push(user.clone());
                user
            })?,
            LockingMode::Unsynchronized => {
                // 读取长度与追加之间会释放锁
                let user = self.reserve(name, age)?;
                self.append(user.clone())?;
                user
            }
        };

        debug!("创建用户: {:?}", user);
        Ok(user)
    }

    /// 按当前长度分配 ID，尚未写入存储
    fn reserve(&self, name: String, age: f64) -> Result<User, CoreError> {
        let id = self.store.len()? as u64 + 1;
        Ok(User::new(id, name, age))
    }

    fn append(&self, user: User) -> Result<(), CoreError> {
        self.store.push(user)
    }

    pub fn list_users(&self) -> Result<Vec<User>, CoreError> {
        self.store.snapshot()
    }

    pub fn get_user(&self, raw_id: &str) -> Result<User, CoreError> {
        let id = parse_id(raw_id).ok_or(CoreError::NotFound)?;
        self.store
            .with_records(|records| records.iter().find(|u| u.id == id).cloned())?
            .ok_or(CoreError::NotFound)
    }

    /// 只有非空的 name 和非零的 age 会覆盖原值
    pub fn update_user(&self, raw_id: &str, req: UpdateUserRequest) -> Result<User, CoreError> {
        let id = parse_id(raw_id).ok_or(CoreError::NotFound)?;
        let name = present_name(req.name);
        let age = present_age(req.age);

        self.store
            .with_records(|records| {
                let user = records.iter_mut().find(|u| u.id == id)?;
                if let Some(name) = name {
                    user.name = name;
                }
                if let Some(age) = age {
                    user.age = age;
                }
                Some(user.clone())
            })?
            .ok_or(CoreError::NotFound)
    }

    pub fn delete_user(&self, raw_id: &str) -> Result<(), CoreError> {
        let id = parse_id(raw_id).ok_or(CoreError::NotFound)?;
        let removed = self.store.with_records(|records| {
            records
                .iter()
                .position(|u| u.id == id)
                .map(|index| records.remove(index))
        })?;

        match removed {
            Some(user) => {
                debug!("删除用户: {:?}", user);
                Ok(())
            }
            None => Err(CoreError::NotFound),
        }
    }
}

/// 宽松地解析十进制 ID
///
/// 跳过前导空白，允许一个符号位，取最长的数字前缀（`"3abc"` 解析为 3）。
/// 没有数字、负数或溢出时返回 `None`，这样的 ID 不会匹配任何记录。
pub fn parse_id(raw: &str) -> Option<u64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || negative {
        return None;
    }
    rest[..digits].parse().ok()
}
