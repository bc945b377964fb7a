pub mod auth;
pub mod booking;
pub mod review;
pub mod student;
pub mod subject;
pub mod tutor;
pub mod user;
