use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid Riot ID format. Use format: Name#TAG")]
    InvalidRiotId,

    #[error("Invalid region '{0}'. Valid regions: europe, americas, asia, sea")]
    InvalidRegion(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("No recent matches found for this player")]
    NoRecentMatches,

    #[error("Match not found: {0}")]
    MatchNotFound(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}
