use axum::serve;
use kiranfolio_backend::routes::make_app;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let app = make_app();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let listener = TcpListener::bind(("127.0.0.1", port)).await;

    match listener {
        Ok(res) => {
            info!("Listening on http://127.0.0.1:{port}");
            serve(res, app).await.unwrap()
        }
        Err(err) => panic!("{}", err),
    }
}
