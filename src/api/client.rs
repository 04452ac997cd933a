use crate::config::Config;
use crate::error::AppError;
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::endpoints::Region;
use super::models::*;

const MAX_RETRIES: u32 = 3;

enum FetchError {
    NotFound,
    RateLimited,
    Http(String),
}

pub struct RiotApiClient {
    api_key: String,
    region: Region,
    // Riot development keys allow 20 req/sec.
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl RiotApiClient {
    pub fn new(config: &Config, region: Region) -> Self {
        let quota = Quota::per_second(NonZeroU32::new(20).unwrap());
        RiotApiClient {
            api_key: config.api_key.clone(),
            region,
            limiter: RateLimiter::direct(quota),
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, FetchError> {
        while self.limiter.check().is_err() {
            thread::sleep(Duration::from_millis(25));
        }

        let mut retry_count = 0;

        loop {
            let response = ureq::get(url)
                .set("X-Riot-Token", &self.api_key)
                .set("User-Agent", "league_stats/0.1.0")
                .call();

            match response {
                Ok(resp) => {
                    return resp
                        .into_string()
                        .map_err(|e| FetchError::Http(e.to_string()));
                }
                Err(ureq::Error::Status(404, _)) => return Err(FetchError::NotFound),
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(FetchError::RateLimited);
                    }
                    let wait_ms = 2000 * (retry_count + 1) as u64;
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(e) => return Err(FetchError::Http(e.to_string())),
            }
        }
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, AppError> {
        serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))
    }

    pub fn get_account(&self, game_name: &str, tag_line: &str) -> Result<AccountDto, AppError> {
        let url = self.region.account_url(game_name, tag_line);
        let body = self.execute_request(&url).map_err(|e| match e {
            FetchError::NotFound => {
                AppError::PlayerNotFound(format!("{}#{}", game_name, tag_line))
            }
            FetchError::RateLimited => AppError::RateLimited,
            FetchError::Http(msg) => AppError::HttpError(msg),
        })?;
        Self::decode(&body)
    }

    pub fn get_summoner(&self, puuid: &str) -> Result<SummonerDto, AppError> {
        let url = self.region.summoner_url(puuid);
        let body = self.execute_request(&url).map_err(|e| match e {
            FetchError::NotFound => AppError::PlayerNotFound(puuid.to_string()),
            FetchError::RateLimited => AppError::RateLimited,
            FetchError::Http(msg) => AppError::HttpError(msg),
        })?;
        Self::decode(&body)
    }

    pub fn get_match_ids(&self, puuid: &str, count: usize) -> Result<Vec<String>, AppError> {
        let url = self.region.match_ids_url(puuid, count.min(100));
        let body = self.execute_request(&url).map_err(|e| match e {
            FetchError::NotFound => AppError::NoRecentMatches,
            FetchError::RateLimited => AppError::RateLimited,
            FetchError::Http(msg) => AppError::HttpError(msg),
        })?;
        Self::decode(&body)
    }

    pub fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError> {
        let url = self.region.match_url(match_id);
        let body = self.match_body(match_id, &url)?;
        Self::decode(&body)
    }

    /// Full match document without model filtering, for raw JSON output.
    pub fn get_match_raw(&self, match_id: &str) -> Result<serde_json::Value, AppError> {
        let url = self.region.match_url(match_id);
        let body = self.match_body(match_id, &url)?;
        Self::decode(&body)
    }

    fn match_body(&self, match_id: &str, url: &str) -> Result<String, AppError> {
        self.execute_request(url).map_err(|e| match e {
            FetchError::NotFound => AppError::MatchNotFound(match_id.to_string()),
            FetchError::RateLimited => AppError::RateLimited,
            FetchError::Http(msg) => AppError::HttpError(msg),
        })
    }
}
