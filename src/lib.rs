#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_multipart::form::MultipartFormConfig;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::db::{establish_connection_pool, run_migrations};
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;
#[cfg(feature = "server")]
use crate::routes::{
    about, blog, certificate, company_intro, contact, feature, header_link,
    json_error_handler, multipart_error_handler, project, query_error_handler, service,
    statistic, story, team,
};
#[cfg(feature = "server")]
use crate::uploads::{PUBLIC_PREFIX, UploadStorage};

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod uploads;

/// Registers the shared state, the `/api` handlers and the static uploads
/// directory on an application.
#[cfg(feature = "server")]
pub fn configure(
    cfg: &mut web::ServiceConfig,
    repo: DieselRepository,
    storage: UploadStorage,
    server_config: ServerConfig,
) {
    let multipart_config = MultipartFormConfig::default()
        .total_limit(server_config.max_upload_size)
        .error_handler(multipart_error_handler);

    cfg.app_data(web::Data::new(repo))
        .app_data(web::Data::new(storage.clone()))
        .app_data(web::Data::new(server_config))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(multipart_config)
        .service(
            web::scope("/api")
                .service(header_link::list_header_links)
                .service(header_link::create_header_link)
                .service(header_link::update_header_link)
                .service(header_link::delete_header_link)
                .service(statistic::list_statistics)
                .service(statistic::create_statistic)
                .service(statistic::update_statistic)
                .service(statistic::delete_statistic)
                .service(about::get_about)
                .service(about::save_about)
                .service(company_intro::get_company_intro)
                .service(company_intro::save_company_intro)
                .service(company_intro::add_company_intro_image)
                .service(company_intro::remove_company_intro_image)
                .service(service::list_services)
                .service(service::create_service)
                .service(service::update_service)
                .service(service::delete_service)
                .service(feature::list_feature_sections)
                .service(feature::create_feature_section)
                .service(feature::update_feature_section)
                .service(feature::add_feature_item)
                .service(feature::delete_feature_item)
                // The background routes must win over `/projects/{id}`.
                .service(project::get_projects_background)
                .service(project::set_projects_background)
                .service(project::list_projects)
                .service(project::get_project)
                .service(project::create_project)
                .service(project::update_project)
                .service(project::delete_project)
                .service(blog::list_blogs)
                .service(blog::get_blog)
                .service(blog::create_blog)
                .service(blog::update_blog)
                .service(blog::delete_blog)
                .service(certificate::list_certificates)
                .service(certificate::create_certificate)
                .service(certificate::update_certificate)
                .service(certificate::delete_certificate)
                .service(team::list_team_members)
                .service(team::create_team_member)
                .service(team::update_team_member)
                .service(team::delete_team_member)
                .service(story::list_stories)
                .service(story::create_story)
                .service(story::update_story)
                .service(contact::list_contacts)
                .service(contact::create_contact),
        )
        .service(Files::new(PUBLIC_PREFIX, storage.root().to_path_buf()));
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    run_migrations(&pool)
        .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;

    let repo = DieselRepository::new(pool);

    let storage = UploadStorage::new(&server_config.upload_dir);
    storage.ensure_root()?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving on {}:{} with uploads in {}",
        bind_address.0,
        bind_address.1,
        storage.root().display()
    );

    HttpServer::new(move || {
        let repo = repo.clone();
        let storage = storage.clone();
        let server_config = server_config.clone();
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(move |cfg| configure(cfg, repo, storage, server_config))
    })
    .bind(bind_address)?
    .run()
    .await
}
