use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

use aperture_store::api::create_api_router;
use aperture_store::entities::{primary_setup, setup_schema};
use aperture_store::services::checkout::PaymentClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("Databse url must be set");
    let db: DatabaseConnection = Database::connect(&database_url).await.unwrap();
    setup_schema(&db).await;

    let shared_db = Arc::new(db);

    primary_setup(shared_db.clone()).await;

    let payments = Arc::new(PaymentClient::from_env().unwrap());

    let app = create_api_router(shared_db, payments);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();
    println!("Running at {:?}", listener);
    axum::serve(listener, app).await.unwrap();
}
