pub mod auth;
pub mod booking;
pub mod health;
pub mod review;
pub mod student;
pub mod subject;
pub mod tutor;
