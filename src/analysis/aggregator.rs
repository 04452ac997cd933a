use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::api::models::{MatchDto, ParticipantDto};

use super::report::{
    format_clock_f64, AvgStats, ChampionReport, CsTrendPoint, Multikills, Objectives,
    PositionSample, RoleReport, StatsReport,
};

const KNOWN_ROLES: [&str; 5] = ["TOP", "JUNGLE", "MIDDLE", "BOTTOM", "UTILITY"];

/// Reduce a batch of raw match documents into a statistics report for one
/// player. Failed fetches (`None`) and matches the player is absent from are
/// skipped; missing optional fields have already defaulted during
/// deserialization. An empty or all-invalid batch yields the zero report.
pub fn aggregate(matches: &[Option<MatchDto>], puuid: &str) -> StatsReport {
    let mut acc = StatsAccumulator::new();

    for m in matches.iter().flatten() {
        let participant = m.info.participants.iter().find(|p| p.puuid == puuid);
        if let Some(p) = participant {
            acc.ingest(m, p);
        }
    }

    acc.finish()
}

#[derive(Debug, Default)]
struct Totals {
    games: u32,
    wins: u32,
    kills: i64,
    deaths: i64,
    assists: i64,
    gold: i64,
    cs: i64,
    vision_score: i64,
    damage_dealt: i64,
    damage_taken: i64,
    time_played: i64,
    turret_kills: i64,
    inhibitor_kills: i64,
    double_kills: i64,
    triple_kills: i64,
    quadra_kills: i64,
    penta_kills: i64,
}

#[derive(Debug, Default)]
struct ChampionAcc {
    games: u32,
    wins: u32,
    kills: i64,
    deaths: i64,
    assists: i64,
    cs: i64,
    damage: i64,
    gold: i64,
}

#[derive(Debug, Default)]
struct RoleAcc {
    games: u32,
    wins: u32,
    kills: i64,
    deaths: i64,
    assists: i64,
    cs: i64,
}

#[derive(Debug)]
struct FreqEntry {
    /// Insertion rank, so ranked output can break count ties in
    /// first-seen order instead of map iteration order.
    first_seen: usize,
    count: u32,
}

/// Occurrence counter with stable ranked output.
#[derive(Debug)]
struct FreqCounter<K: Eq + Hash + Clone> {
    counts: HashMap<K, FreqEntry>,
}

impl<K: Eq + Hash + Clone> FreqCounter<K> {
    fn new() -> Self {
        FreqCounter {
            counts: HashMap::new(),
        }
    }

    fn bump(&mut self, key: K) {
        let first_seen = self.counts.len();
        self.counts
            .entry(key)
            .or_insert(FreqEntry {
                first_seen,
                count: 0,
            })
            .count += 1;
    }

    /// Keys by descending count, ties in first-seen order, truncated to
    /// `limit` when given.
    fn ranked(&self, limit: Option<usize>) -> Vec<(K, u32)> {
        let mut entries: Vec<(&K, &FreqEntry)> = self.counts.iter().collect();
        entries.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        entries
            .into_iter()
            .map(|(k, e)| (k.clone(), e.count))
            .collect()
    }
}

struct StatsAccumulator {
    totals: Totals,
    champion_stats: HashMap<String, ChampionAcc>,
    role_stats: HashMap<String, RoleAcc>,
    champions_played: FreqCounter<String>,
    roles_played: FreqCounter<String>,
    item_frequency: FreqCounter<i32>,
    cs_trend: Vec<CsTrendPoint>,
    position_stats: Vec<PositionSample>,
}

impl StatsAccumulator {
    fn new() -> Self {
        let mut role_stats = HashMap::new();
        for role in KNOWN_ROLES {
            role_stats.insert(role.to_string(), RoleAcc::default());
        }

        StatsAccumulator {
            totals: Totals::default(),
            champion_stats: HashMap::new(),
            role_stats,
            champions_played: FreqCounter::new(),
            roles_played: FreqCounter::new(),
            item_frequency: FreqCounter::new(),
            cs_trend: Vec::new(),
            position_stats: Vec::new(),
        }
    }

    fn ingest(&mut self, m: &MatchDto, p: &ParticipantDto) {
        let cs = p.creep_score();

        self.totals.games += 1;
        self.totals.kills += p.kills as i64;
        self.totals.deaths += p.deaths as i64;
        self.totals.assists += p.assists as i64;
        self.totals.gold += p.gold_earned as i64;
        self.totals.cs += cs as i64;
        self.totals.vision_score += p.vision_score as i64;
        self.totals.damage_dealt += p.total_damage_dealt_to_champions;
        self.totals.damage_taken += p.total_damage_taken;
        self.totals.time_played += m.info.game_duration;
        self.totals.turret_kills += p.turret_kills as i64;
        self.totals.inhibitor_kills += p.inhibitor_kills as i64;
        self.totals.double_kills += p.double_kills as i64;
        self.totals.triple_kills += p.triple_kills as i64;
        self.totals.quadra_kills += p.quadra_kills as i64;
        self.totals.penta_kills += p.penta_kills as i64;
        if p.win {
            self.totals.wins += 1;
        }

        let duration_minutes = m.info.game_duration as f64 / 60.0;
        let cs_per_min = if duration_minutes > 0.0 {
            cs as f64 / duration_minutes
        } else {
            0.0
        };
        self.cs_trend.push(CsTrendPoint {
            game_id: m.metadata.match_id.clone(),
            cs_per_min: (cs_per_min * 100.0).round() / 100.0,
            timestamp: m.info.game_start_timestamp,
        });

        if p.individual_position != "UNKNOWN" {
            let damage_share = p.challenges.as_ref().and_then(|c| c.team_damage_percentage);
            if let Some(share) = damage_share {
                self.position_stats.push(PositionSample {
                    position: p.individual_position.clone(),
                    team_damage_percentage: share,
                    damage_dealt_to_champions: p.total_damage_dealt_to_champions,
                });
            }
        }

        let champion = self
            .champion_stats
            .entry(p.champion_name.clone())
            .or_default();
        champion.games += 1;
        if p.win {
            champion.wins += 1;
        }
        champion.kills += p.kills as i64;
        champion.deaths += p.deaths as i64;
        champion.assists += p.assists as i64;
        champion.cs += cs as i64;
        champion.damage += p.total_damage_dealt_to_champions;
        champion.gold += p.gold_earned as i64;

        for item_id in p.items() {
            if item_id > 0 {
                self.item_frequency.bump(item_id);
            }
        }

        if let Some(role) = self.role_stats.get_mut(&p.team_position) {
            role.games += 1;
            if p.win {
                role.wins += 1;
            }
            role.kills += p.kills as i64;
            role.deaths += p.deaths as i64;
            role.assists += p.assists as i64;
            role.cs += cs as i64;
        }

        self.champions_played.bump(p.champion_name.clone());
        self.roles_played.bump(p.team_position.clone());
    }

    fn finish(self) -> StatsReport {
        let totals = self.totals;
        let games = totals.games;

        let win_rate = if games > 0 {
            totals.wins as f64 / games as f64 * 100.0
        } else {
            0.0
        };
        let kda = if totals.deaths > 0 {
            (totals.kills + totals.assists) as f64 / totals.deaths as f64
        } else {
            (totals.kills + totals.assists) as f64
        };
        let avg_duration = if games > 0 {
            totals.time_played as f64 / games as f64
        } else {
            0.0
        };

        let champion_stats: BTreeMap<String, ChampionReport> = self
            .champion_stats
            .into_iter()
            .map(|(name, acc)| {
                let report = ChampionReport {
                    games: acc.games,
                    win_rate: ratio_percent(acc.wins, acc.games),
                    avg_kills: per_game(acc.kills, acc.games),
                    avg_deaths: per_game(acc.deaths, acc.games),
                    avg_assists: per_game(acc.assists, acc.games),
                    avg_cs: per_game(acc.cs, acc.games),
                    avg_damage: per_game(acc.damage, acc.games),
                    avg_gold: per_game(acc.gold, acc.games),
                };
                (name, report)
            })
            .collect();

        // Roles the player never queued are tracked during the pass but
        // absent from the report.
        let role_stats: BTreeMap<String, RoleReport> = self
            .role_stats
            .into_iter()
            .filter(|(_, acc)| acc.games > 0)
            .map(|(name, acc)| {
                let report = RoleReport {
                    games: acc.games,
                    win_rate: ratio_percent(acc.wins, acc.games),
                    avg_kills: per_game(acc.kills, acc.games),
                    avg_deaths: per_game(acc.deaths, acc.games),
                    avg_assists: per_game(acc.assists, acc.games),
                    avg_cs: per_game(acc.cs, acc.games),
                };
                (name, report)
            })
            .collect();

        let mut cs_trend = self.cs_trend;
        cs_trend.sort_by_key(|point| point.timestamp);

        StatsReport {
            games_played: games,
            wins: totals.wins,
            losses: games - totals.wins,
            win_rate: format!("{:.1}%", win_rate),
            total_kills: totals.kills,
            total_deaths: totals.deaths,
            total_assists: totals.assists,
            kda_ratio: format!("{:.2}", kda),
            most_played_champions: self.champions_played.ranked(Some(3)),
            most_played_roles: self.roles_played.ranked(None),
            avg_game_duration: format_clock_f64(avg_duration),
            avg_stats: AvgStats {
                kills: format!("{:.1}", per_game(totals.kills, games)),
                deaths: format!("{:.1}", per_game(totals.deaths, games)),
                assists: format!("{:.1}", per_game(totals.assists, games)),
                cs: format!("{:.1}", per_game(totals.cs, games)),
                gold: format!("{:.0}", per_game(totals.gold, games)),
                vision_score: format!("{:.1}", per_game(totals.vision_score, games)),
                damage_dealt: format!("{:.0}", per_game(totals.damage_dealt, games)),
                damage_taken: format!("{:.0}", per_game(totals.damage_taken, games)),
            },
            multikills: Multikills {
                double_kills: totals.double_kills,
                triple_kills: totals.triple_kills,
                quadra_kills: totals.quadra_kills,
                penta_kills: totals.penta_kills,
            },
            objectives: Objectives {
                turret_kills: totals.turret_kills,
                inhibitor_kills: totals.inhibitor_kills,
            },
            champion_stats,
            role_stats,
            most_common_items: self.item_frequency.ranked(Some(10)),
            cs_trend,
            position_stats: self.position_stats,
        }
    }
}

fn per_game(total: i64, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        total as f64 / games as f64
    }
}

fn ratio_percent(wins: u32, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        wins as f64 / games as f64 * 100.0
    }
}
