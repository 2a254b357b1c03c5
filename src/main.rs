use anyhow::Result;

mod app;
mod logging;
mod plot;
mod recording;
mod transcription;
mod wav;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
