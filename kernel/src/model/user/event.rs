use crate::model::role::Role;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateUser {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub phone: Option<String>,
}
