use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use catalog::{parse_rating_text, CatalogEntry, MovieId};
use pipeline::CatalogQuery;
use recommender::{Candidate, RecommendationRequest};
use server::{load_catalog, CatalogService};

/// ReelCatalog - movie catalog browser
#[derive(Parser)]
#[command(name = "reel-catalog")]
#[command(about = "Browse, filter, rate and get recommendations from a movie catalog", long_about = None)]
struct Cli {
    /// JSON catalog file to use instead of the built-in seed
    #[arg(short, long, global = true, env = "CATALOG_FILE")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List movies, optionally filtered
    Movies {
        /// Case-insensitive text matched against title, overview and tags
        #[arg(short, long)]
        query: Option<String>,

        /// Exact genre label
        #[arg(short, long)]
        genre: Option<String>,

        /// Minimum rating, inclusive
        #[arg(long)]
        min_rating: Option<String>,
    },

    /// Show one movie
    Show {
        #[arg(long)]
        id: MovieId,
    },

    /// List all genre labels
    Genres,

    /// Recommend movies, optionally based on one you liked
    Recommend {
        /// Movie id to base recommendations on
        #[arg(long)]
        based_on: Option<String>,

        /// Only recommend movies with this genre label
        #[arg(short, long)]
        genre: Option<String>,

        /// Number of recommendations to return
        #[arg(short, long)]
        limit: Option<String>,

        /// Show score and explanation for each recommendation
        #[arg(long)]
        explain: bool,
    },

    /// Submit one or more ratings for a movie
    Rate {
        #[arg(long)]
        id: MovieId,

        /// Rating between 0 and 5; repeat to submit several in order
        #[arg(long, required = true, allow_negative_numbers = true)]
        rating: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let store = load_catalog(cli.catalog.as_deref()).with_context(|| match &cli.catalog {
        Some(path) => format!("Failed to load catalog from {}", path.display()),
        None => "Failed to load the built-in catalog".to_string(),
    })?;
    tracing::info!("Loaded {} movies in {:?}", store.len(), start.elapsed());

    let service = CatalogService::new(Arc::new(store));

    match cli.command {
        Commands::Movies {
            query,
            genre,
            min_rating,
        } => handle_movies(&service, query, genre, min_rating),
        Commands::Show { id } => handle_show(&service, id)?,
        Commands::Genres => handle_genres(&service),
        Commands::Recommend {
            based_on,
            genre,
            limit,
            explain,
        } => handle_recommend(&service, based_on, genre, limit, explain),
        Commands::Rate { id, rating } => handle_rate(&service, id, &rating)?,
    }

    Ok(())
}

/// Handle the 'movies' command
fn handle_movies(
    service: &CatalogService,
    query: Option<String>,
    genre: Option<String>,
    min_rating: Option<String>,
) {
    let query = CatalogQuery::from_params(
        query.as_deref(),
        genre.as_deref(),
        min_rating.as_deref(),
    );
    let movies = service.search(&query);

    if movies.is_empty() {
        println!("{}", "No movies match.".yellow());
        return;
    }

    println!("{}", format!("{} movies:", movies.len()).bold().blue());
    for movie in &movies {
        print_movie_line(movie);
    }
}

/// Handle the 'show' command
fn handle_show(service: &CatalogService, id: MovieId) -> Result<()> {
    let movie = service
        .movie(id)
        .ok_or_else(|| anyhow!("Movie {} not found", id))?;

    println!("{}", format!("{} ({})", movie.title, movie.year).bold().blue());
    println!("{}Id: {}", "• ".green(), movie.id);
    println!("{}Genres: {}", "• ".green(), movie.genre.join(", "));
    println!("{}Rating: {:.1}", "• ".green(), movie.rating);
    if !movie.tags.is_empty() {
        println!("{}Tags: {}", "• ".green(), movie.tags.join(", "));
    }
    if !movie.overview.is_empty() {
        println!();
        println!("{}", movie.overview);
    }
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(service: &CatalogService) {
    for genre in service.genres() {
        println!("{}", genre);
    }
}

/// Handle the 'recommend' command
fn handle_recommend(
    service: &CatalogService,
    based_on: Option<String>,
    genre: Option<String>,
    limit: Option<String>,
    explain: bool,
) {
    let request = RecommendationRequest::from_params(
        based_on.as_deref(),
        genre.as_deref(),
        limit.as_deref(),
    );

    if let Some(anchor_id) = request.anchor_id {
        match service.movie(anchor_id) {
            Some(anchor) => println!("Based on {}", anchor.title.bold()),
            None => println!(
                "{}",
                format!("Movie {} not found, ranking by rating", anchor_id).yellow()
            ),
        }
    }
    let candidates = service.recommend_scored(&request);
    print_recommendations(&candidates, explain);
}

/// Handle the 'rate' command
fn handle_rate(service: &CatalogService, id: MovieId, ratings: &[String]) -> Result<()> {
    let movie = service
        .movie(id)
        .ok_or_else(|| anyhow!("Movie {} not found", id))?;
    println!(
        "{} starts at {:.1}",
        movie.title.bold(),
        movie.rating
    );

    let mut rejected = 0;
    for raw in ratings {
        match service.rate(id, parse_rating_text(raw)) {
            Ok(updated) => println!(
                "{} submitted {}, rating is now {:.1}",
                "✓".green(),
                raw,
                updated.rating
            ),
            Err(e) => {
                rejected += 1;
                println!("{} submitted {}: {}", "✗".red(), raw, e);
            }
        }
    }

    if rejected > 0 {
        bail!("{} of {} ratings were rejected", rejected, ratings.len());
    }
    Ok(())
}

fn print_movie_line(movie: &CatalogEntry) {
    println!(
        "{:>4}  {} ({}) [{}] {:.1}",
        movie.id.to_string().green(),
        movie.title,
        movie.year,
        movie.genre.join(", "),
        movie.rating
    );
}

/// Print ranked recommendations
fn print_recommendations(candidates: &[Candidate], explain: bool) {
    if candidates.is_empty() {
        println!("{}", "No recommendations.".yellow());
        return;
    }

    println!("{}", "Recommendations:".bold().blue());
    for (rank, candidate) in candidates.iter().enumerate() {
        let movie = &candidate.entry;
        println!(
            "{}. {} ({}) [{}] - Score: {:.1}",
            (rank + 1).to_string().green(),
            movie.title,
            movie.year,
            movie.genre.join(", "),
            candidate.score
        );
        if explain {
            println!(
                "   {} {}",
                format!("{:?}:", candidate.source).dimmed(),
                candidate.explanation
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("reel-catalog").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_rate_accepts_negative_submissions() {
        let cli = parse(&["rate", "--id", "1", "--rating", "-1", "--rating", "4.5"]);
        match cli.command {
            Commands::Rate { id, rating } => {
                assert_eq!(id, 1);
                assert_eq!(rating, vec!["-1", "4.5"]);
            }
            _ => panic!("expected rate command"),
        }
    }

    #[test]
    fn test_rate_requires_a_rating() {
        let result = Cli::try_parse_from(["reel-catalog", "rate", "--id", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_submission_is_rejected() {
        let service = CatalogService::new(Arc::new(catalog::CatalogStore::seeded().unwrap()));
        let result = handle_rate(&service, 1, &["-1".to_string()]);
        assert!(result.is_err());
        assert_eq!(service.movie(1).unwrap().rating, 4.7);
    }

    #[test]
    fn test_global_catalog_option() {
        let cli = parse(&["genres", "--catalog", "movies.json"]);
        assert_eq!(cli.catalog, Some(PathBuf::from("movies.json")));
    }
}
