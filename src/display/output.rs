use crate::analysis::report::{format_game_date, MatchSummary, PlayerReport, StatsReport};
use crate::api::models::MatchDto;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    date: String,
    champion: String,
    result: String,
    #[tabled(rename = "K/D/A")]
    kda: String,
    #[tabled(rename = "CS")]
    cs: String,
    mode: String,
    duration: String,
}

#[derive(Tabled)]
struct ChampionRow {
    champion: String,
    games: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
    #[tabled(rename = "K/D/A")]
    kda: String,
    #[tabled(rename = "CS")]
    cs: String,
    damage: String,
    gold: String,
}

#[derive(Tabled)]
struct RoleRow {
    role: String,
    games: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
    #[tabled(rename = "K/D/A")]
    kda: String,
    #[tabled(rename = "CS")]
    cs: String,
}

#[derive(Tabled)]
struct ItemRow {
    rank: String,
    #[tabled(rename = "item id")]
    item_id: String,
    #[tabled(rename = "bought")]
    count: String,
}

#[derive(Tabled)]
struct TrendRow {
    date: String,
    #[tabled(rename = "match")]
    match_id: String,
    #[tabled(rename = "CS/min")]
    cs_per_min: String,
}

#[derive(Tabled)]
struct ParticipantRow {
    champion: String,
    position: String,
    #[tabled(rename = "K/D/A")]
    kda: String,
    damage: String,
    result: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_player_report(report: &PlayerReport, region_name: &str) {
    println!(
        "\n{}",
        format!(
            "📊 {}#{} — {} (Level {})",
            report.summoner_name, report.tag_line, region_name, report.summoner_level
        )
        .bold()
        .cyan()
    );
    println!("{}\n", "=".repeat(70).cyan());

    display_overview(&report.stats);
    display_match_history(&report.matches);
    display_champion_stats(&report.stats);
    display_role_stats(&report.stats);
    display_items(&report.stats);
    display_cs_trend(&report.stats);
}

fn display_overview(stats: &StatsReport) {
    println!(
        "{} {} W / {} L over {} games ({} WR)",
        "📈 Overall:".bold(),
        stats.wins.to_string().green(),
        stats.losses.to_string().red(),
        stats.games_played,
        stats.win_rate.as_str().yellow()
    );
    println!(
        "   KDA {} ({} / {} / {}), avg game {}",
        stats.kda_ratio.bold(),
        stats.total_kills,
        stats.total_deaths,
        stats.total_assists,
        stats.avg_game_duration
    );

    let avg = &stats.avg_stats;
    println!(
        "   Per game: {} kills, {} deaths, {} assists, {} CS, {} gold",
        avg.kills, avg.deaths, avg.assists, avg.cs, avg.gold
    );
    println!(
        "   Per game: {} vision score, {} damage dealt, {} damage taken",
        avg.vision_score, avg.damage_dealt, avg.damage_taken
    );

    let mk = &stats.multikills;
    if mk.double_kills + mk.triple_kills + mk.quadra_kills + mk.penta_kills > 0 {
        println!(
            "   Multikills: {} double, {} triple, {} quadra, {} penta",
            mk.double_kills, mk.triple_kills, mk.quadra_kills, mk.penta_kills
        );
    }
    println!(
        "   Objectives: {} turrets, {} inhibitors\n",
        stats.objectives.turret_kills, stats.objectives.inhibitor_kills
    );
}

pub fn display_match_history(matches: &[MatchSummary]) {
    if matches.is_empty() {
        return;
    }

    println!(
        "{}",
        format!("🗡️ MATCH HISTORY (Last {} Games)", matches.len())
            .bold()
            .cyan()
    );

    let rows: Vec<MatchRow> = matches
        .iter()
        .enumerate()
        .map(|(idx, m)| MatchRow {
            number: format!("{}", idx + 1),
            date: m.game_date.clone(),
            champion: m.champion_name.clone(),
            result: if m.win {
                "WIN".green().to_string()
            } else {
                "LOSS".red().to_string()
            },
            kda: format!("{}/{}/{} ({})", m.kills, m.deaths, m.assists, m.kda),
            cs: format!("{}", m.cs),
            mode: m.game_mode.clone(),
            duration: m.game_duration.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn display_champion_stats(stats: &StatsReport) {
    if stats.champion_stats.is_empty() {
        return;
    }

    println!("{}", "🏆 CHAMPION PERFORMANCE".bold().cyan());

    // Most-played first; the map itself is alphabetical.
    let mut entries: Vec<_> = stats.champion_stats.iter().collect();
    entries.sort_by(|a, b| b.1.games.cmp(&a.1.games));

    let rows: Vec<ChampionRow> = entries
        .iter()
        .map(|(name, c)| ChampionRow {
            champion: (*name).clone(),
            games: format!("{}", c.games),
            win_rate: format!("{:.1}%", c.win_rate),
            kda: format!("{:.1}/{:.1}/{:.1}", c.avg_kills, c.avg_deaths, c.avg_assists),
            cs: format!("{:.1}", c.avg_cs),
            damage: format!("{:.0}", c.avg_damage),
            gold: format!("{:.0}", c.avg_gold),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn display_role_stats(stats: &StatsReport) {
    if stats.role_stats.is_empty() {
        return;
    }

    println!("{}", "🗺️ ROLE PERFORMANCE".bold().cyan());

    let rows: Vec<RoleRow> = stats
        .most_played_roles
        .iter()
        .filter_map(|(role, _)| stats.role_stats.get(role).map(|r| (role, r)))
        .map(|(role, r)| RoleRow {
            role: role.clone(),
            games: format!("{}", r.games),
            win_rate: format!("{:.1}%", r.win_rate),
            kda: format!("{:.1}/{:.1}/{:.1}", r.avg_kills, r.avg_deaths, r.avg_assists),
            cs: format!("{:.1}", r.avg_cs),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn display_items(stats: &StatsReport) {
    if stats.most_common_items.is_empty() {
        return;
    }

    println!("{}", "🛒 MOST COMMON ITEMS".bold().cyan());

    let rows: Vec<ItemRow> = stats
        .most_common_items
        .iter()
        .enumerate()
        .map(|(idx, (item_id, count))| ItemRow {
            rank: format!("#{}", idx + 1),
            item_id: format!("{}", item_id),
            count: format!("{}", count),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn display_cs_trend(stats: &StatsReport) {
    if stats.cs_trend.is_empty() {
        return;
    }

    println!("{}", "🌾 CS/MIN TREND (oldest first)".bold().cyan());

    let rows: Vec<TrendRow> = stats
        .cs_trend
        .iter()
        .map(|point| TrendRow {
            date: format_game_date(point.timestamp),
            match_id: point.game_id.clone(),
            cs_per_min: format!("{:.2}", point.cs_per_min),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_match_detail(m: &MatchDto) {
    println!(
        "\n{}",
        format!(
            "🗡️ {} — {} ({}), {}",
            m.metadata.match_id,
            m.info.game_mode,
            crate::analysis::report::format_clock(m.info.game_duration),
            format_game_date(m.info.game_start_timestamp)
        )
        .bold()
        .cyan()
    );

    let rows: Vec<ParticipantRow> = m
        .info
        .participants
        .iter()
        .map(|p| ParticipantRow {
            champion: p.champion_name.clone(),
            position: p.team_position.clone(),
            kda: format!("{}/{}/{}", p.kills, p.deaths, p.assists),
            damage: format!("{}", p.total_damage_dealt_to_champions),
            result: if p.win {
                "WIN".green().to_string()
            } else {
                "LOSS".red().to_string()
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}
