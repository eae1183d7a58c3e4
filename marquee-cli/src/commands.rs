//! CLI command implementations

use clap::Subcommand;
use marquee_core::{MarqueeConfig, MarqueeError, RuntimeMode, ServerComponents, TrendingRecord};
use marquee_search::{Movie, MovieQuery};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to (overrides MARQUEE_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (overrides MARQUEE_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Search once and print the results
    Search {
        /// Search text; empty lists popular movies
        #[arg(default_value = "")]
        query: String,
    },
    /// Print the most searched terms
    Trending {
        /// Number of entries (overrides MARQUEE_TRENDING_LIMIT)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// - `MarqueeError::Search` / `MarqueeError::Analytics` - A client could not be built
/// - `WebError::ServerStartFailed` - The web server could not bind or serve
pub async fn handle_command(
    command: Commands,
    mut config: MarqueeConfig,
    mode: RuntimeMode,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let components = ServerComponents::build(&config, mode)?;
            marquee_web::run_server(config, components).await?;
        }
        Commands::Search { query } => search(&config, mode, &query).await?,
        Commands::Trending { limit } => {
            trending(&config, mode, limit.unwrap_or(config.search.trending_limit)).await?;
        }
    }

    Ok(())
}

/// Runs one search and records its top hit, like the web controller does.
///
/// # Errors
/// - `MarqueeError::Search` / `MarqueeError::Analytics` - A client could not be built
async fn search(
    config: &MarqueeConfig,
    mode: RuntimeMode,
    text: &str,
) -> Result<(), MarqueeError> {
    let (search, analytics) = ServerComponents::collaborators(config, mode)?;
    let query = MovieQuery::from_term(text);

    let movies = match search.fetch(&query).await {
        Ok(movies) => movies,
        Err(e) => {
            tracing::warn!(%query, error = %e, "Search failed");
            println!("{}", e.user_message());
            return Ok(());
        }
    };

    println!("{query}");
    println!("{:-<72}", "");
    for movie in &movies {
        println!("{}", movie_row(movie));
    }

    if let (Some(term), Some(top)) = (query.term(), movies.first())
        && let Err(e) = analytics.record_search(term, top).await
    {
        tracing::warn!(backend = analytics.name(), error = %e, "Failed to record search");
    }

    Ok(())
}

/// Prints the trending list.
///
/// # Errors
/// - `MarqueeError::Search` / `MarqueeError::Analytics` - A client could not be built
async fn trending(
    config: &MarqueeConfig,
    mode: RuntimeMode,
    limit: usize,
) -> Result<(), MarqueeError> {
    let (_, analytics) = ServerComponents::collaborators(config, mode)?;
    let records = analytics.trending(limit).await;

    if records.is_empty() {
        println!("No trending searches yet.");
        return Ok(());
    }

    for (index, record) in records.iter().enumerate() {
        println!("{}", trending_row(index + 1, record));
    }
    Ok(())
}

fn movie_row(movie: &Movie) -> String {
    format!(
        "{:<44} {:>5}  {:<4} {:>4}",
        movie.title,
        movie.rating_label(),
        movie.original_language,
        movie.release_year()
    )
}

fn trending_row(rank: usize, record: &TrendingRecord) -> String {
    format!(
        "{rank:>2}. {} ({} searches) - {}",
        record.search_term, record.count, record.title
    )
}
