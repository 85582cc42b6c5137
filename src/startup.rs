//! Application Startup
//!
//! Storage selection, seeding, router assembly and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{middleware, Router};
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{
    CountriesService, CountriesServiceImpl, PersonsService, PersonsServiceImpl,
};
use crate::config::{CorsSettings, SeedSettings, Settings, StorageBackend};
use crate::domain::{Country, CountryRepository, Person, PersonRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    InMemoryCountryRepository, InMemoryPersonRepository, PgCountryRepository, PgPersonRepository,
};
use crate::presentation::http::routes;
use crate::presentation::middleware::{create_cors_layer, create_trace_layer, track_metrics};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub persons: Arc<dyn PersonsService>,
    pub countries: Arc<dyn CountriesService>,
    /// Present only with the PostgreSQL backend; used by readiness checks.
    pub db: Option<PgPool>,
}

impl AppState {
    /// Wire both services over one pair of repositories.
    pub fn from_repositories<P, C>(person_repo: P, country_repo: C, db: Option<PgPool>) -> Self
    where
        P: PersonRepository + 'static,
        C: CountryRepository + 'static,
    {
        let country_repo = Arc::new(country_repo);

        Self {
            persons: Arc::new(PersonsServiceImpl::new(
                Arc::new(person_repo),
                country_repo.clone(),
            )),
            countries: Arc::new(CountriesServiceImpl::new(country_repo)),
            db,
        }
    }

    /// Empty process-local state.
    pub fn in_memory() -> Self {
        Self::from_repositories(
            InMemoryPersonRepository::new(),
            InMemoryCountryRepository::new(),
            None,
        )
    }
}

/// Router with all middleware applied
pub fn build_router(state: AppState, cors: &CorsSettings) -> Router {
    routes::create_router(state)
        .route_layer(middleware::from_fn(track_metrics))
        .layer(create_trace_layer())
        .layer(create_cors_layer(cors))
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let state = match settings.database.backend {
            StorageBackend::Postgres => {
                let db = database::create_pool(&settings.database)
                    .await
                    .context("Failed to create database pool")?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&db)
                        .await
                        .context("Failed to run migrations")?;
                    tracing::info!("Database migrations applied");
                }

                let person_repo = PgPersonRepository::new(db.clone());
                let country_repo = PgCountryRepository::new(db.clone());
                seed(&settings.seed, &person_repo, &country_repo).await?;

                AppState::from_repositories(person_repo, country_repo, Some(db))
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");

                let person_repo = InMemoryPersonRepository::new();
                let country_repo = InMemoryCountryRepository::new();
                seed(&settings.seed, &person_repo, &country_repo).await?;

                AppState::from_repositories(person_repo, country_repo, None)
            }
        };

        let router = build_router(state, &settings.cors);

        // Bind to address
        let addr: SocketAddr = settings
            .server_addr()
            .parse()
            .with_context(|| format!("Invalid server address {}", settings.server_addr()))?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Load configured seed files into the repositories. Countries go first so
/// seeded persons resolve their country names.
async fn seed<P, C>(seed: &SeedSettings, person_repo: &P, country_repo: &C) -> Result<()>
where
    P: PersonRepository,
    C: CountryRepository,
{
    if let Some(path) = &seed.countries_path {
        let countries: Vec<Country> = database::load_seed_file(path).await?;
        database::seed_countries(country_repo, countries).await?;
    }

    if let Some(path) = &seed.persons_path {
        let persons: Vec<Person> = database::load_seed_file(path).await?;
        database::seed_persons(person_repo, persons).await?;
    }

    Ok(())
}
