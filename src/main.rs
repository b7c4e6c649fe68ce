use std::{env, sync::Arc};

use config::Config;
use repositories::PostgresRepo;
use routes::{configure_cors, create_router};
use services::{
    filter::PostFilterService, posts::UserPostsService, sorter::PostSorterService,
    user::UserService,
};
use sqlx::{postgres::PgPoolOptions, PgPool};

pub use self::errors::{Error, Result};

mod config;
mod errors;
mod handlers;
mod models;
mod repositories;
mod routes;
mod services;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub config: Config,
    pub posts_service: UserPostsService,
    pub filter_service: PostFilterService,
    pub sorter_service: PostSorterService,
    pub users_service: UserService,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "friendface_backend=debug,tower_http=info".into()),
        )
        .init();

    let config = Config::init();

    let pool = match PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            println!("✅ Connection to the database is successful!");
            pool
        }
        Err(err) => {
            println!("🔥 Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    let repo = Arc::new(PostgresRepo::new(pool.clone()));

    let app_state = AppState {
        db_pool: pool,
        config: config.clone(),
        posts_service: UserPostsService::new(repo.clone()),
        filter_service: PostFilterService::new(repo.clone()),
        sorter_service: PostSorterService::new(repo.clone()),
        users_service: UserService::new(repo),
    };

    let app = create_router(Arc::new(app_state)).layer(configure_cors(&config.cors_origin));

    let listener = tokio::net::TcpListener::bind(format!(
        "[::]:{}",
        env::var("PORT").unwrap_or_else(|_| "8080".to_string())
    ))
    .await
    .unwrap();
    axum::serve(listener, app).await.unwrap();
}
