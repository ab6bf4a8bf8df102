use anyhow::Result;
use folio::app::handler;

#[tokio::main]
async fn main() -> Result<()> {
    handler::init().await
}
