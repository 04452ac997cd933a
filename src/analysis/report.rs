use std::collections::BTreeMap;

use serde::Serialize;

use crate::api::models::{MatchDto, ParticipantDto};

const DDRAGON_VERSION: &str = "14.25.1";

/// Aggregated statistics over one batch of matches. Pure data, shaped for
/// direct JSON serialization: snake_case at the top level, camelCase inside
/// the nested entries, ranked lists as [key, count] pairs.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsReport {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: String,
    pub total_kills: i64,
    pub total_deaths: i64,
    pub total_assists: i64,
    pub kda_ratio: String,
    pub most_played_champions: Vec<(String, u32)>,
    pub most_played_roles: Vec<(String, u32)>,
    pub avg_game_duration: String,
    pub avg_stats: AvgStats,
    pub multikills: Multikills,
    pub objectives: Objectives,
    pub champion_stats: BTreeMap<String, ChampionReport>,
    pub role_stats: BTreeMap<String, RoleReport>,
    pub most_common_items: Vec<(i32, u32)>,
    pub cs_trend: Vec<CsTrendPoint>,
    pub position_stats: Vec<PositionSample>,
}

/// Per-game averages, pre-formatted to display precision.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AvgStats {
    pub kills: String,
    pub deaths: String,
    pub assists: String,
    pub cs: String,
    pub gold: String,
    pub vision_score: String,
    pub damage_dealt: String,
    pub damage_taken: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Multikills {
    pub double_kills: i64,
    pub triple_kills: i64,
    pub quadra_kills: i64,
    pub penta_kills: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Objectives {
    pub turret_kills: i64,
    pub inhibitor_kills: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChampionReport {
    pub games: u32,
    pub win_rate: f64,
    pub avg_kills: f64,
    pub avg_deaths: f64,
    pub avg_assists: f64,
    pub avg_cs: f64,
    pub avg_damage: f64,
    pub avg_gold: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleReport {
    pub games: u32,
    pub win_rate: f64,
    pub avg_kills: f64,
    pub avg_deaths: f64,
    pub avg_assists: f64,
    pub avg_cs: f64,
}

/// One creep-score-per-minute sample, tagged for trend plotting.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CsTrendPoint {
    pub game_id: String,
    pub cs_per_min: f64,
    /// Epoch milliseconds of the game start.
    pub timestamp: i64,
}

/// Damage share for one game at a known individual position.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionSample {
    pub position: String,
    pub team_damage_percentage: f64,
    pub damage_dealt_to_champions: i64,
}

/// One row of the recent-match history shown next to the aggregate report.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub match_id: String,
    pub champion_name: String,
    pub champion_icon: String,
    pub win: bool,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub kda: String,
    pub cs: i32,
    pub game_mode: String,
    pub game_duration: String,
    pub game_date: String,
}

impl MatchSummary {
    pub fn from_match(m: &MatchDto, participant: &ParticipantDto) -> Self {
        // Per-match KDA clamps the denominator instead of falling back to
        // kills+assists; the aggregate ratio in StatsReport does the latter.
        let kda = (participant.kills + participant.assists) as f64
            / participant.deaths.max(1) as f64;

        MatchSummary {
            match_id: m.metadata.match_id.clone(),
            champion_name: participant.champion_name.clone(),
            champion_icon: champion_icon_url(&participant.champion_name),
            win: participant.win,
            kills: participant.kills,
            deaths: participant.deaths,
            assists: participant.assists,
            kda: format!("{:.2}", kda),
            cs: participant.creep_score(),
            game_mode: m.info.game_mode.clone(),
            game_duration: format_clock(m.info.game_duration),
            game_date: format_game_date(m.info.game_start_timestamp),
        }
    }
}

/// Build the recent-match rows for the player, in fetch order. Entries the
/// player is absent from (or that failed to fetch) produce no row.
pub fn match_summaries(matches: &[Option<MatchDto>], puuid: &str) -> Vec<MatchSummary> {
    matches
        .iter()
        .flatten()
        .filter_map(|m| {
            m.info
                .participants
                .iter()
                .find(|p| p.puuid == puuid)
                .map(|p| MatchSummary::from_match(m, p))
        })
        .collect()
}

/// The full player answer: identity header, per-match summaries, and the
/// flattened aggregate report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlayerReport {
    #[serde(rename = "summonerName")]
    pub summoner_name: String,
    #[serde(rename = "tagLine")]
    pub tag_line: String,
    pub region: String,
    #[serde(rename = "summonerLevel")]
    pub summoner_level: i64,
    pub matches: Vec<MatchSummary>,
    #[serde(flatten)]
    pub stats: StatsReport,
}

pub fn champion_icon_url(champion_name: &str) -> String {
    format!(
        "https://ddragon.leagueoflegends.com/cdn/{}/img/champion/{}.png",
        DDRAGON_VERSION, champion_name
    )
}

/// `m:ss` with zero-padded seconds, from whole seconds.
pub fn format_clock(seconds: i64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Same clock format from a fractional mean duration, flooring both parts.
pub fn format_clock_f64(seconds: f64) -> String {
    format!("{}:{:02}", (seconds / 60.0) as i64, (seconds % 60.0) as i64)
}

pub fn format_game_date(timestamp_ms: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(timestamp_ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}
