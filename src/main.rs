use kgl_procurement::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run().await
}
