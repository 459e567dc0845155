use dotenv::dotenv;
use halfway::engine::Engine;
use halfway::server::serve;

#[tokio::main]
async fn main() {
    dotenv().ok();

    serve(Engine::new()).await;
}
