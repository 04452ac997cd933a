use clap::Parser;
use indicatif::ProgressBar;

use league_stats::analysis::aggregator::aggregate;
use league_stats::analysis::report::{match_summaries, PlayerReport};
use league_stats::api::client::RiotApiClient;
use league_stats::api::endpoints::Region;
use league_stats::api::models::MatchDto;
use league_stats::config::Config;
use league_stats::display::output::{
    display_error, display_info, display_match_detail, display_player_report, display_success,
};
use league_stats::error::AppError;

#[derive(Parser, Debug)]
#[command(name = "League Stats")]
#[command(about = "Summarize a player's recent League of Legends matches", long_about = None)]
struct Args {
    /// Riot ID in the format Name#TAG
    #[arg(required_unless_present = "match_id")]
    riot_id: Option<String>,

    /// Region group: europe, americas, asia or sea (default: europe)
    #[arg(short, long)]
    region: Option<String>,

    /// Number of recent matches to analyze (max: 100)
    #[arg(short, long, default_value = "20")]
    matches: usize,

    /// Look up a single match by ID instead of a player
    #[arg(long = "match", value_name = "MATCH_ID")]
    match_id: Option<String>,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region;
    }

    let region = Region::from_code(&config.region)?;
    let client = RiotApiClient::new(&config, region);

    if let Some(match_id) = args.match_id.as_deref() {
        return lookup_match(&client, match_id, args.json);
    }

    let riot_id = args.riot_id.ok_or(AppError::InvalidRiotId)?;
    let (game_name, tag_line) = split_riot_id(&riot_id)?;
    let verbose = !args.json;

    if verbose {
        display_info(&format!(
            "Fetching data for {} in region {}",
            riot_id, region.display_name
        ));
        display_info("Step 1: Resolving Riot ID...");
    }
    let account = client.get_account(game_name, tag_line)?;
    if verbose {
        display_success(&format!("Found PUUID: {}", &account.puuid[0..8]));
        display_info("Step 2: Getting summoner info...");
    }
    let summoner = client.get_summoner(&account.puuid)?;
    if verbose {
        display_success(&format!("Summoner Level: {}", summoner.summoner_level));
        display_info("Step 3: Fetching match IDs...");
    }

    let match_ids = client.get_match_ids(&account.puuid, args.matches.min(100))?;
    if match_ids.is_empty() {
        return Err(AppError::NoRecentMatches.into());
    }
    if verbose {
        display_success(&format!("Found {} matches to analyze", match_ids.len()));
    }

    // Draws on stderr, so it is safe in --json mode too.
    let pb = ProgressBar::new(match_ids.len() as u64);
    pb.set_message("Fetching match details");

    let mut matches: Vec<Option<MatchDto>> = Vec::with_capacity(match_ids.len());
    for match_id in &match_ids {
        let doc = match client.get_match(match_id) {
            Ok(doc) => Some(doc),
            Err(AppError::RateLimited) => return Err(AppError::RateLimited.into()),
            // A match that fails to fetch enters the batch as a null entry.
            Err(_) => None,
        };
        matches.push(doc);
        pb.inc(1);
    }
    pb.finish_with_message("✓ Match data fetched");

    let stats = aggregate(&matches, &account.puuid);
    let summaries = match_summaries(&matches, &account.puuid);

    let report = PlayerReport {
        summoner_name: account.game_name,
        tag_line: account.tag_line,
        region: region.code.to_string(),
        summoner_level: summoner.summoner_level,
        matches: summaries,
        stats,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_player_report(&report, region.display_name);
    }

    Ok(())
}

fn lookup_match(client: &RiotApiClient, match_id: &str, json: bool) -> anyhow::Result<()> {
    if json {
        let doc = client.get_match_raw(match_id)?;
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        let doc = client.get_match(match_id)?;
        display_match_detail(&doc);
    }
    Ok(())
}

fn split_riot_id(riot_id: &str) -> Result<(&str, &str), AppError> {
    match riot_id.split_once('#') {
        Some((game_name, tag_line)) if !game_name.is_empty() && !tag_line.is_empty() => {
            Ok((game_name, tag_line))
        }
        _ => Err(AppError::InvalidRiotId),
    }
}
