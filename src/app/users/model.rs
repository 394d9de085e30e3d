//! 用户数据模型

use serde::{Deserialize, Serialize, Serializer};

/// 能以整数无损表示的最大值 (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(serialize_with = "serialize_age")]
    pub age: f64,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, age: f64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}

/// 创建用户请求，两个字段都可能缺失，由服务层校验
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<f64>,
}

/// 更新用户请求
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<f64>,
}

/// 空字符串视为未提供
pub(crate) fn present_name(name: Option<String>) -> Option<String> {
    name.filter(|n| !n.is_empty())
}

/// 0 视为未提供
pub(crate) fn present_age(age: Option<f64>) -> Option<f64> {
    age.filter(|a| *a != 0.0)
}

/// 整数年龄按整数输出，`40` 不会变成 `40.0`
fn serialize_age<S: Serializer>(age: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if age.fract() == 0.0 && age.abs() < MAX_EXACT_INTEGER {
        if *age >= 0.0 {
            serializer.serialize_u64(*age as u64)
        } else {
            serializer.serialize_i64(*age as i64)
        }
    } else {
        serializer.serialize_f64(*age)
    }
}

/// 启动时的种子数据
pub fn seed_users() -> Vec<User> {
    vec![User::new(1, "John Doe", 30.0), User::new(2, "Jane Doe", 25.0)]
}
