use clap::Parser;
use quizgen::db::Store;
use quizgen::openai::OpenAiClient;
use quizgen::AppState;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// OpenAI API key. Startup aborts when it is missing.
    #[clap(env, hide_env_values = true)]
    openai_api_key: String,

    /// MongoDB connection string.
    #[arg(long, env, default_value = "mongodb://localhost:27017/chat-gpt-app")]
    mongodb_uri: String,

    /// The port to listen on.
    #[arg(short, long, env, default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,tower_http=debug,quizgen=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    // An unreachable database is logged inside connect but does not stop the
    // listener; store operations fail per-request until it comes back.
    let store = Store::connect(&args.mongodb_uri).await?;
    let openai = OpenAiClient::new(args.openai_api_key);

    let app = quizgen::router(AppState { store, openai });

    let address = std::net::SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, app).await?;

    Ok(())
}
