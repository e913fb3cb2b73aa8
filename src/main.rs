#[actix_web::main]
async fn main() -> std::io::Result<()> {
    textbook_background_server::run().await
}
