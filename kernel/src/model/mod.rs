pub mod auth;
pub mod booking;
pub mod id;
pub mod review;
pub mod role;
pub mod student;
pub mod subject;
pub mod tutor;
pub mod user;
