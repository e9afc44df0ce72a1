use actix_cors::Cors;
use actix_web::{middleware::Logger as ActixLogger, web, App, HttpResponse, HttpServer, Responder};
use dotenvy::dotenv;
use gomarket_cart::{logger::setup_logger, CartStore, FileStore, Product};
use log::{error, info};
use std::{env as stdenv, path::Path, process::exit, sync::Arc};

mod env;
use crate::env::*;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

async fn get_cart(store: web::Data<CartStore>) -> impl Responder {
    HttpResponse::Ok().json(store.products().await)
}

async fn post_add(store: web::Data<CartStore>, item: web::Json<Product>) -> impl Responder {
    store.add_to_cart(item.0).await;
    HttpResponse::Ok().json(store.products().await)
}

async fn post_increment(store: web::Data<CartStore>, id: web::Path<String>) -> impl Responder {
    store.increment(&id).await;
    HttpResponse::Ok().json(store.products().await)
}

async fn post_decrement(store: web::Data<CartStore>, id: web::Path<String>) -> impl Responder {
    store.decrement(&id).await;
    HttpResponse::Ok().json(store.products().await)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize the logger
    setup_logger();

    // Load .env and log error if not found
    load_env_file();
    dotenv().ok();

    info!("PID: {}", std::process::id());

    let target_port = load_env_var("PORT", "3333");
    let target_host = load_env_var("HOST", "127.0.0.1");
    let target_server = format!("{}:{}", target_host, target_port);

    // Plain bind probe before actix claims the port
    if std::net::TcpListener::bind(&target_server).is_err() {
        error!("Port {} is already in use.", target_port);
        exit(52);
    }

    let storage_path = load_env_var("CART_FILE", "gomarket-cart.json");
    let store = CartStore::new(Arc::new(FileStore::new(storage_path)));
    store.load().await;
    let store = web::Data::new(store);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(ActixLogger::default())
            .wrap(cors)
            .app_data(store.clone())
            .configure(|cfg| {
                cfg.route("/health", web::get().to(health))
                    .route("/cart", web::get().to(get_cart))
                    .route("/cart", web::post().to(post_add))
                    .route("/cart/{id}/increment", web::post().to(post_increment))
                    .route("/cart/{id}/decrement", web::post().to(post_decrement));
            })
    })
    .bind(&target_server)?
    .run();

    info!("Server running at http://{}", target_server);

    let execution = server.await;

    info!("Worker stopped with PID: {}", std::process::id());

    if let Err(e) = execution {
        error!("Failed to start the server: {:?}", e);
        return Err(e);
    }

    Ok(())
}
