//! Moodline API server binary

use std::sync::Arc;

use moodline::{
    FileStateStore, GeminiClassifier, JournalConfig, KeywordClassifier, MoodClassifier,
    MoodJournal, StateStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodline=info,moodline_server=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("🌤️  Moodline API initializing...");

    let classifier: Arc<dyn MoodClassifier> = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Arc::new(GeminiClassifier::new(key)),
        _ => {
            tracing::warn!("⚠️  No GEMINI_API_KEY set - falling back to keyword classifier");
            Arc::new(KeywordClassifier::new())
        }
    };

    let data_dir = std::env::var("MOODLINE_DATA_DIR")
        .map(std::path::PathBuf::from)
        .ok()
        .or_else(FileStateStore::default_dir)
        .unwrap_or_else(|| std::path::PathBuf::from("./moodline-data"));
    tracing::info!("💾 Persisting journal state under {}", data_dir.display());
    let store: Arc<dyn StateStore> = Arc::new(FileStateStore::new(data_dir));

    let journal = MoodJournal::load(classifier, store, JournalConfig::default()).await?;

    // Catch up on a week boundary crossed while the server was down
    {
        let journal = journal.clone();
        tokio::spawn(async move {
            journal.evaluate_triggers().await;
        });
    }

    let addr = std::env::var("MOODLINE_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("✅ Moodline API ready on {}", addr);

    axum::serve(listener, moodline_server::app(journal)).await?;
    Ok(())
}
