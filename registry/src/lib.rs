use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::review::ReviewRepositoryImpl;
use adapter::repository::student::StudentRepositoryImpl;
use adapter::repository::subject::SubjectRepositoryImpl;
use adapter::repository::tutor::TutorRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::repository::auth::AuthRepository;
use kernel::repository::booking::BookingRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::review::ReviewRepository;
use kernel::repository::student::StudentRepository;
use kernel::repository::subject::SubjectRepository;
use kernel::repository::tutor::TutorRepository;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    subject_repository: Arc<dyn SubjectRepository>,
    tutor_repository: Arc<dyn TutorRepository>,
    student_repository: Arc<dyn StudentRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    review_repository: Arc<dyn ReviewRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            app_config.auth.clone(),
        ));
        let subject_repository = Arc::new(SubjectRepositoryImpl::new(pool.clone()));
        let tutor_repository = Arc::new(TutorRepositoryImpl::new(pool.clone()));
        let student_repository = Arc::new(StudentRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let review_repository = Arc::new(ReviewRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            user_repository,
            auth_repository,
            subject_repository,
            tutor_repository,
            student_repository,
            booking_repository,
            review_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn subject_repository(&self) -> Arc<dyn SubjectRepository> {
        self.subject_repository.clone()
    }

    pub fn tutor_repository(&self) -> Arc<dyn TutorRepository> {
        self.tutor_repository.clone()
    }

    pub fn student_repository(&self) -> Arc<dyn StudentRepository> {
        self.student_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn review_repository(&self) -> Arc<dyn ReviewRepository> {
        self.review_repository.clone()
    }
}
