use rowdy_cup_actix::auth::SessionStore;
use rowdy_cup_actix::events::{self, EventBus};
use rowdy_cup_actix::storage::{self, SqlStorage};
use rowdy_cup_actix::{args, controller, db_prefill};
use rowdy_cup_core::view::index::{DEFAULT_INDEX_TITLE, render_index_template};
use deadpool_postgres::Config as PgConfig;
use sql_middleware::middleware::{ConfigAndPool, DatabaseType};
use tracing_subscriber::EnvFilter;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = args::args_checks();
    let args_for_web = args.clone();

    let config_and_pool = init_config_and_pool(&args).await?;
    run_startup_tasks(&args, &config_and_pool).await?;

    let storage = SqlStorage::new(config_and_pool.clone());
    let event_bus = EventBus::default();
    let sessions = Data::new(SessionStore::new(args.admin_password.clone()));

    tracing::info!("serving on {}", args.bind);

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(storage.clone()))
            .app_data(Data::new(event_bus.clone()))
            .app_data(sessions.clone())
            .app_data(Data::new(args_for_web.clone()))
            .route("/", web::get().to(index))
            .route("/scorecard", web::get().to(controller::score::scorecard))
            .route("/scorecards", web::get().to(controller::score::scorecards))
            .route(
                "/standings",
                web::get().to(controller::standings::standings),
            )
            .route("/api/login", web::post().to(controller::entry::login))
            .route("/api/scores", web::post().to(controller::entry::enter_score))
            .route("/events", web::get().to(events::event_stream))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static").show_files_listing()) // Serve the static files
    })
    .bind(args.bind.as_str())?
    .run()
    .await?;
    Ok(())
}

async fn index(args: Data<args::CleanArgs>) -> impl Responder {
    let title = args.title.as_deref().unwrap_or(DEFAULT_INDEX_TITLE);
    let markup = render_index_template(title);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

async fn init_config_and_pool(
    args: &args::CleanArgs,
) -> Result<ConfigAndPool, Box<dyn std::error::Error>> {
    if args.db_type == DatabaseType::Postgres {
        let mut postgres_config = PgConfig::new();
        postgres_config.dbname = Some(args.db_name.clone());
        postgres_config.host.clone_from(&args.db_host);
        postgres_config.port = args.db_port;
        postgres_config.user.clone_from(&args.db_user);
        postgres_config.password.clone_from(&args.db_password);

        let postgres_options = PostgresOptions::new(postgres_config);
        Ok(ConfigAndPool::new_postgres(postgres_options).await?)
    } else {
        let sqlite_options = SqliteOptions::new(args.db_name.clone());
        Ok(ConfigAndPool::new_sqlite(sqlite_options).await?)
    }
}

async fn run_startup_tasks(
    args: &args::CleanArgs,
    config_and_pool: &ConfigAndPool,
) -> Result<(), Box<dyn std::error::Error>> {
    storage::create_tables(config_and_pool).await?;

    if args.db_startup_script.is_some() {
        storage::execute_batch_sql(config_and_pool, &args.combined_sql_script).await?;
    }

    if let Some(json_data) = &args.db_populate_json {
        db_prefill::db_prefill(json_data, config_and_pool).await?;
    }

    Ok(())
}
