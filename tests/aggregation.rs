use league_stats::analysis::aggregator::aggregate;
use league_stats::analysis::report::match_summaries;
use league_stats::api::models::{ChallengesDto, MatchDto, MatchInfo, MatchMetadata, ParticipantDto};

const PLAYER: &str = "puuid-player";

fn participant(champion: &str, win: bool, kills: i32, deaths: i32, assists: i32) -> ParticipantDto {
    ParticipantDto {
        puuid: PLAYER.to_string(),
        champion_name: champion.to_string(),
        win,
        kills,
        deaths,
        assists,
        ..Default::default()
    }
}

fn match_doc(
    id: &str,
    duration: i64,
    timestamp: i64,
    participants: Vec<ParticipantDto>,
) -> Option<MatchDto> {
    Some(MatchDto {
        metadata: MatchMetadata {
            match_id: id.to_string(),
        },
        info: MatchInfo {
            game_duration: duration,
            game_start_timestamp: timestamp,
            game_mode: "CLASSIC".to_string(),
            participants,
        },
    })
}

fn ahri_scenario() -> Vec<Option<MatchDto>> {
    let mut first = participant("Ahri", true, 5, 2, 7);
    first.total_minions_killed = 150;
    first.neutral_minions_killed = 30;
    first.team_position = "MIDDLE".to_string();
    first.gold_earned = 12_000;

    let mut second = participant("Ahri", false, 1, 6, 3);
    second.total_minions_killed = 100;
    second.neutral_minions_killed = 20;
    second.team_position = "MIDDLE".to_string();
    second.gold_earned = 9_000;

    vec![
        match_doc("EUW1_1", 1800, 2_000, vec![first]),
        match_doc("EUW1_2", 1500, 1_000, vec![second]),
    ]
}

#[test]
fn ahri_scenario_totals_and_derived_fields() {
    let report = aggregate(&ahri_scenario(), PLAYER);

    assert_eq!(report.games_played, 2);
    assert_eq!(report.wins, 1);
    assert_eq!(report.losses, 1);
    assert_eq!(report.win_rate, "50.0%");
    assert_eq!(report.total_kills, 6);
    assert_eq!(report.total_deaths, 8);
    assert_eq!(report.total_assists, 10);
    // (6 + 10) / 8
    assert_eq!(report.kda_ratio, "2.00");
    // (1800 + 1500) / 2 = 1650s
    assert_eq!(report.avg_game_duration, "27:30");

    assert_eq!(report.avg_stats.kills, "3.0");
    assert_eq!(report.avg_stats.deaths, "4.0");
    assert_eq!(report.avg_stats.assists, "5.0");
    assert_eq!(report.avg_stats.cs, "150.0");
    assert_eq!(report.avg_stats.gold, "10500");

    let ahri = &report.champion_stats["Ahri"];
    assert_eq!(ahri.games, 2);
    assert_eq!(ahri.win_rate, 50.0);
    assert_eq!(ahri.avg_kills, 3.0);
    assert_eq!(ahri.avg_deaths, 4.0);
    assert_eq!(ahri.avg_cs, 150.0);

    assert_eq!(report.most_played_champions, vec![("Ahri".to_string(), 2)]);
    assert_eq!(report.most_played_roles, vec![("MIDDLE".to_string(), 2)]);
}

#[test]
fn wins_plus_losses_equals_games_played() {
    let matches = ahri_scenario();
    let report = aggregate(&matches, PLAYER);
    assert_eq!(report.wins + report.losses, report.games_played);

    let valid = matches
        .iter()
        .flatten()
        .filter(|m| m.info.participants.iter().any(|p| p.puuid == PLAYER))
        .count() as u32;
    assert_eq!(report.games_played, valid);
}

#[test]
fn absent_participant_contributes_nothing() {
    let mut matches = ahri_scenario();
    let stranger = ParticipantDto {
        puuid: "puuid-other".to_string(),
        champion_name: "Zed".to_string(),
        win: true,
        kills: 10,
        ..Default::default()
    };
    matches.push(match_doc("EUW1_3", 1700, 3_000, vec![stranger]));

    let report = aggregate(&matches, PLAYER);
    assert_eq!(report.games_played, 2);
    assert_eq!(report.total_kills, 6);
    assert!(!report.champion_stats.contains_key("Zed"));
}

#[test]
fn null_and_invalid_only_batch_is_the_zero_report() {
    let stranger = ParticipantDto {
        puuid: "puuid-other".to_string(),
        ..Default::default()
    };
    let matches = vec![None, match_doc("EUW1_9", 1000, 1, vec![stranger]), None];

    let report = aggregate(&matches, PLAYER);
    assert_eq!(report.games_played, 0);
    assert_eq!(report.win_rate, "0.0%");
    assert_eq!(report.kda_ratio, "0.00");
    assert_eq!(report.avg_game_duration, "0:00");
    assert!(report.most_played_champions.is_empty());
    assert!(report.most_played_roles.is_empty());
    assert!(report.most_common_items.is_empty());
    assert!(report.champion_stats.is_empty());
    assert!(report.role_stats.is_empty());
    assert!(report.cs_trend.is_empty());
    assert!(report.position_stats.is_empty());
}

#[test]
fn kda_with_zero_deaths_is_kills_plus_assists() {
    let matches = vec![match_doc(
        "EUW1_1",
        1800,
        1,
        vec![participant("Lux", true, 4, 0, 9)],
    )];
    let report = aggregate(&matches, PLAYER);
    assert_eq!(report.kda_ratio, "13.00");
}

#[test]
fn most_played_champions_caps_at_three_with_first_seen_ties() {
    let matches = vec![
        match_doc("M1", 1800, 1, vec![participant("Ahri", true, 0, 0, 0)]),
        match_doc("M2", 1800, 2, vec![participant("Lux", true, 0, 0, 0)]),
        match_doc("M3", 1800, 3, vec![participant("Zed", true, 0, 0, 0)]),
        match_doc("M4", 1800, 4, vec![participant("Jinx", true, 0, 0, 0)]),
    ];
    let report = aggregate(&matches, PLAYER);

    // All tied at one game: first three seen win, in order.
    assert_eq!(
        report.most_played_champions,
        vec![
            ("Ahri".to_string(), 1),
            ("Lux".to_string(), 1),
            ("Zed".to_string(), 1)
        ]
    );
    // The per-champion map still carries all four.
    assert_eq!(report.champion_stats.len(), 4);
}

#[test]
fn item_frequency_ranks_stably_and_skips_empty_slots() {
    let mut first = participant("Ahri", true, 0, 0, 0);
    first.item0 = 3055;
    first.item1 = 1001;
    first.item6 = 3364; // trinket slot counts too

    let mut second = participant("Ahri", false, 0, 0, 0);
    second.item0 = 1001;
    // All other slots stay 0 and must never be counted.

    let matches = vec![
        match_doc("M1", 1800, 1, vec![first]),
        match_doc("M2", 1800, 2, vec![second]),
    ];
    let report = aggregate(&matches, PLAYER);

    assert_eq!(
        report.most_common_items,
        vec![(1001, 2), (3055, 1), (3364, 1)]
    );
    assert!(report.most_common_items.iter().all(|(id, _)| *id != 0));
}

#[test]
fn most_common_items_caps_at_ten() {
    let mut p = participant("Ahri", true, 0, 0, 0);
    p.item0 = 1;
    p.item1 = 2;
    p.item2 = 3;
    p.item3 = 4;
    p.item4 = 5;
    p.item5 = 6;
    p.item6 = 7;

    let mut q = participant("Ahri", true, 0, 0, 0);
    q.item0 = 8;
    q.item1 = 9;
    q.item2 = 10;
    q.item3 = 11;
    q.item4 = 12;

    let matches = vec![
        match_doc("M1", 1800, 1, vec![p]),
        match_doc("M2", 1800, 2, vec![q]),
    ];
    let report = aggregate(&matches, PLAYER);

    assert_eq!(report.most_common_items.len(), 10);
    assert_eq!(
        report.most_common_items,
        (1..=10).map(|id| (id, 1)).collect::<Vec<_>>()
    );
}

#[test]
fn role_entries_appear_iff_games_were_played_there() {
    let mut mid = participant("Ahri", true, 1, 1, 1);
    mid.team_position = "MIDDLE".to_string();
    let mut odd = participant("Teemo", false, 0, 1, 0);
    odd.team_position = "ARAM".to_string(); // not one of the five

    let matches = vec![
        match_doc("M1", 1800, 1, vec![mid]),
        match_doc("M2", 1800, 2, vec![odd]),
    ];
    let report = aggregate(&matches, PLAYER);

    assert_eq!(report.role_stats.len(), 1);
    assert!(report.role_stats.contains_key("MIDDLE"));
    assert_eq!(report.role_stats["MIDDLE"].games, 1);
    assert_eq!(report.role_stats["MIDDLE"].win_rate, 100.0);

    // The frequency list still sees every label, known or not.
    assert_eq!(
        report.most_played_roles,
        vec![("MIDDLE".to_string(), 1), ("ARAM".to_string(), 1)]
    );
}

#[test]
fn cs_trend_is_sorted_by_timestamp_and_guards_zero_duration() {
    let mut newest = participant("Ahri", true, 0, 0, 0);
    newest.total_minions_killed = 180;
    let mut oldest = participant("Ahri", true, 0, 0, 0);
    oldest.total_minions_killed = 120;
    let broken = participant("Ahri", true, 0, 0, 0);

    let matches = vec![
        match_doc("NEW", 1800, 3_000, vec![newest]),
        match_doc("OLD", 1500, 1_000, vec![oldest]),
        match_doc("BROKEN", 0, 2_000, vec![broken]),
    ];
    let report = aggregate(&matches, PLAYER);

    let ids: Vec<&str> = report.cs_trend.iter().map(|p| p.game_id.as_str()).collect();
    assert_eq!(ids, vec!["OLD", "BROKEN", "NEW"]);
    assert_eq!(report.cs_trend[0].cs_per_min, 4.8);
    assert_eq!(report.cs_trend[1].cs_per_min, 0.0);
    assert_eq!(report.cs_trend[2].cs_per_min, 6.0);
}

#[test]
fn position_samples_need_known_position_and_challenge_metric() {
    let mut with_both = participant("Ahri", true, 0, 0, 0);
    with_both.individual_position = "MIDDLE".to_string();
    with_both.total_damage_dealt_to_champions = 25_000;
    with_both.challenges = Some(ChallengesDto {
        team_damage_percentage: Some(0.31),
    });

    let mut unknown_position = participant("Ahri", true, 0, 0, 0);
    unknown_position.challenges = Some(ChallengesDto {
        team_damage_percentage: Some(0.5),
    });

    let mut no_metric = participant("Ahri", true, 0, 0, 0);
    no_metric.individual_position = "TOP".to_string();

    let matches = vec![
        match_doc("M1", 1800, 1, vec![with_both]),
        match_doc("M2", 1800, 2, vec![unknown_position]),
        match_doc("M3", 1800, 3, vec![no_metric]),
    ];
    let report = aggregate(&matches, PLAYER);

    assert_eq!(report.position_stats.len(), 1);
    let sample = &report.position_stats[0];
    assert_eq!(sample.position, "MIDDLE");
    assert_eq!(sample.team_damage_percentage, 0.31);
    assert_eq!(sample.damage_dealt_to_champions, 25_000);
}

#[test]
fn aggregation_is_idempotent_down_to_serialized_bytes() {
    let matches = ahri_scenario();
    let first = aggregate(&matches, PLAYER);
    let second = aggregate(&matches, PLAYER);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn report_serializes_with_the_expected_key_shapes() {
    let report = aggregate(&ahri_scenario(), PLAYER);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["games_played"], 2);
    assert_eq!(json["win_rate"], "50.0%");
    assert_eq!(json["champion_stats"]["Ahri"]["winRate"], 50.0);
    assert_eq!(json["champion_stats"]["Ahri"]["avgKills"], 3.0);
    assert_eq!(json["role_stats"]["MIDDLE"]["avgCs"], 150.0);
    assert_eq!(json["cs_trend"][0]["csPerMin"], 4.8);
    assert_eq!(json["most_played_champions"][0][0], "Ahri");
    assert_eq!(json["most_played_champions"][0][1], 2);
    assert_eq!(json["multikills"]["double_kills"], 0);
    assert_eq!(json["objectives"]["turret_kills"], 0);
}

#[test]
fn match_summaries_format_each_fetched_game() {
    let matches = ahri_scenario();
    let summaries = match_summaries(&matches, PLAYER);

    assert_eq!(summaries.len(), 2);
    let first = &summaries[0];
    assert_eq!(first.match_id, "EUW1_1");
    assert_eq!(first.champion_name, "Ahri");
    assert!(first.win);
    assert_eq!(first.kda, "6.00"); // (5 + 7) / 2
    assert_eq!(first.cs, 180);
    assert_eq!(first.game_duration, "30:00");
    assert!(first.champion_icon.ends_with("/img/champion/Ahri.png"));

    let second = &summaries[1];
    assert_eq!(second.kda, "0.67"); // (1 + 3) / 6
    assert_eq!(second.game_duration, "25:00");
}

#[test]
fn aggregate_accepts_json_decoded_documents() {
    let doc: MatchDto = serde_json::from_str(
        r#"{
            "metadata": {"matchId": "NA1_77"},
            "info": {
                "gameDuration": 1200,
                "gameStartTimestamp": 1700000000000,
                "gameMode": "ARAM",
                "participants": [
                    {
                        "puuid": "puuid-player",
                        "championName": "Sona",
                        "teamPosition": "UTILITY",
                        "win": true,
                        "kills": 2,
                        "assists": 20,
                        "totalMinionsKilled": 40,
                        "item0": 6620
                    },
                    {"puuid": "puuid-other", "championName": "Zed", "win": false}
                ]
            }
        }"#,
    )
    .unwrap();

    let report = aggregate(&[Some(doc)], PLAYER);
    assert_eq!(report.games_played, 1);
    assert_eq!(report.win_rate, "100.0%");
    assert_eq!(report.kda_ratio, "22.00");
    assert_eq!(report.role_stats["UTILITY"].avg_assists, 20.0);
    assert_eq!(report.most_common_items, vec![(6620, 1)]);
    assert!(!report.champion_stats.contains_key("Zed"));
}
