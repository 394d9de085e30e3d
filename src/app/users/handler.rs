//! 用户处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};

use super::{
    model::{CreateUserRequest, UpdateUserRequest, User},
    service::UserService,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

impl AppState {
    pub fn new(user_service: UserService) -> Self {
        Self { user_service }
    }
}

/// 没有 JSON Content-Type 的请求按空对象处理，其余解析错误交给框架
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> Result<T, CoreError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(CoreError::Rejected(rejection)),
    }
}

pub async fn home() -> &'static str {
    "Hello World!"
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, CoreError> {
    let users = state.user_service.list_users()?;
    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), CoreError> {
    let user = state.user_service.create_user(body_or_default(payload)?)?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, CoreError> {
    let user = state.user_service.get_user(&id)?;
    Ok(Json(user))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<User>, CoreError> {
    let user = state.user_service.update_user(&id, body_or_default(payload)?)?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, CoreError> {
    state.user_service.delete_user(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
