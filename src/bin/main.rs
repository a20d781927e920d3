// Movie Finder server
//
// Renders the browser page with Leptos on actix-web, answers the
// `/api` server functions from a shared MovieSearchService and serves the
// hydration bundle plus public assets.

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use std::io::{Error, ErrorKind};
    use std::sync::Arc;

    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use movie_finder::web_app::api::config::AppConfig;
    use movie_finder::web_app::api::search::{self, MovieSearchService};
    use movie_finder::web_app::api::tmdb::TmdbClient;
    use movie_finder::web_app::app::App as MovieFinderApp;

    // .env first so RUST_LOG from it applies
    dotenv::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Refusing to start: {}", e);
        Error::new(ErrorKind::InvalidInput, e)
    })?;

    let catalog = TmdbClient::from_config(&config).map_err(|e| {
        tracing::error!("Refusing to start: {}", e);
        Error::new(ErrorKind::Other, e)
    })?;
    let store = connect_store(&config.database_url).await;

    let service = Arc::new(MovieSearchService::new(
        Arc::new(catalog),
        store,
        config.trending_limit,
    ));
    search::init_service(service.clone());

    let conf = leptos_config::get_configuration(None)
        .map_err(|e| Error::new(ErrorKind::InvalidInput, e.to_string()))?;
    let site = conf.leptos_options;
    let addr = site.site_addr;

    tracing::info!(
        "Movie Finder listening on http://{} (trending limit {})",
        addr,
        config.trending_limit
    );

    HttpServer::new(move || {
        let site = site.clone();
        let site_root = site.site_root.to_string();
        let routes = generate_route_list(MovieFinderApp);

        App::new()
            .app_data(web::Data::from(service.clone()))
            .app_data(web::Data::new(site.clone()))
            .route("/api/{tail:.*}", handle_server_fns())
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(routes, move || shell(site.clone()))
            // no-movie.svg, hero.svg
            .service(Files::new("/", site_root))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();
}

/// HTML document around the app
#[cfg(feature = "ssr")]
fn shell(options: leptos_config::LeptosOptions) -> impl leptos::prelude::IntoView {
    use leptos::prelude::*;
    use leptos_meta::MetaTags;
    use movie_finder::web_app::app::App as MovieFinderApp;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options />
                <MetaTags/>
            </head>
            <body class="bg-slate-950">
                <MovieFinderApp/>
            </body>
        </html>
    }
}

/// PostgreSQL store when the database is usable, otherwise in memory so
/// the listing keeps working without search counts being persisted.
#[cfg(feature = "ssr")]
async fn connect_store(
    database_url: &str,
) -> std::sync::Arc<dyn movie_finder::web_app::api::search_counts::SearchCountStore> {
    use movie_finder::web_app::api::db;
    use movie_finder::web_app::api::search_counts::{InMemorySearchCountStore, PgSearchCountStore};
    use std::sync::Arc;

    let pool = match db::create_pool(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to connect to database, search counts kept in memory: {}", e);
            return Arc::new(InMemorySearchCountStore::new());
        }
    };

    if let Err(e) = db::ensure_schema(&pool).await {
        tracing::error!("Failed to prepare search count schema, search counts kept in memory: {}", e);
        return Arc::new(InMemorySearchCountStore::new());
    }

    tracing::info!("Connected to search count database");
    Arc::new(PgSearchCountStore::new(pool))
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("movie_finder needs the 'ssr' feature; start it with `cargo leptos watch`");
}
