use axum::serve;
use paddock_api::routes::make_app;
use paddock_api::utils::config::Config;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let config = Config::init();
    let bind_addr = config.bind_addr.clone();
    let app = make_app(config);

    let listener = TcpListener::bind(&bind_addr).await;
    info!("Listening on http://{bind_addr}");

    match listener {
        Ok(res) => serve(res, app).await.unwrap(),
        Err(err) => panic!("{}", err),
    }
}
