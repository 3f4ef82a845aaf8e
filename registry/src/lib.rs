use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::event::EventRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::portfolio::PortfolioRepositoryImpl;
use adapter::repository::service::ServiceRepositoryImpl;
use adapter::repository::stats::StatsRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use adapter::storage::ImageStorage;
use kernel::repository::auth::AuthRepository;
use kernel::repository::booking::BookingRepository;
use kernel::repository::event::EventRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::portfolio::PortfolioRepository;
use kernel::repository::service::ServiceRepository;
use kernel::repository::stats::StatsRepository;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    event_repository: Arc<dyn EventRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    service_repository: Arc<dyn ServiceRepository>,
    portfolio_repository: Arc<dyn PortfolioRepository>,
    stats_repository: Arc<dyn StatsRepository>,
    image_storage: Arc<ImageStorage>,
}

impl AppRegistry {
    pub fn new(
        pool: ConnectionPool,
        redis_client: Arc<RedisClient>,
        app_config: AppConfig,
    ) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let event_repository = Arc::new(EventRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let service_repository = Arc::new(ServiceRepositoryImpl::new(pool.clone()));
        let portfolio_repository = Arc::new(PortfolioRepositoryImpl::new(pool.clone()));
        let stats_repository = Arc::new(StatsRepositoryImpl::new(pool));
        let image_storage = Arc::new(ImageStorage::new(&app_config.storage));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            event_repository,
            booking_repository,
            service_repository,
            portfolio_repository,
            stats_repository,
            image_storage,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn event_repository(&self) -> Arc<dyn EventRepository> {
        self.event_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn service_repository(&self) -> Arc<dyn ServiceRepository> {
        self.service_repository.clone()
    }

    pub fn portfolio_repository(&self) -> Arc<dyn PortfolioRepository> {
        self.portfolio_repository.clone()
    }

    pub fn stats_repository(&self) -> Arc<dyn StatsRepository> {
        self.stats_repository.clone()
    }

    pub fn image_storage(&self) -> Arc<ImageStorage> {
        self.image_storage.clone()
    }
}
