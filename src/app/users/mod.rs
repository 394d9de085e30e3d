pub mod handler;
pub mod model;
pub mod service;

pub use handler::AppState;
pub use model::User;
pub use service::UserService;
