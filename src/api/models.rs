use serde::Deserialize;

fn unknown_position() -> String {
    "UNKNOWN".to_string()
}

// Account V1 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
}

// Summoner V4 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub puuid: String,
    #[serde(default)]
    pub summoner_level: i64,
    #[serde(default)]
    pub profile_icon_id: i32,
}

// Match V5 response
#[derive(Debug, Deserialize, Clone)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Seconds.
    #[serde(default)]
    pub game_duration: i64,
    /// Epoch milliseconds.
    #[serde(default)]
    pub game_start_timestamp: i64,
    #[serde(default)]
    pub game_mode: String,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    #[serde(default)]
    pub puuid: String,
    #[serde(default)]
    pub champion_name: String,
    /// TOP, JUNGLE, MIDDLE, BOTTOM, UTILITY or UNKNOWN.
    #[serde(default = "unknown_position")]
    pub team_position: String,
    #[serde(default = "unknown_position")]
    pub individual_position: String,
    #[serde(default)]
    pub win: bool,
    #[serde(default)]
    pub kills: i32,
    #[serde(default)]
    pub deaths: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub gold_earned: i32,
    #[serde(default)]
    pub total_minions_killed: i32,
    #[serde(default)]
    pub neutral_minions_killed: i32,
    #[serde(default)]
    pub vision_score: i32,
    #[serde(default)]
    pub total_damage_dealt_to_champions: i64,
    #[serde(default)]
    pub total_damage_taken: i64,
    #[serde(default)]
    pub turret_kills: i32,
    #[serde(default)]
    pub inhibitor_kills: i32,
    #[serde(default)]
    pub double_kills: i32,
    #[serde(default)]
    pub triple_kills: i32,
    #[serde(default)]
    pub quadra_kills: i32,
    #[serde(default)]
    pub penta_kills: i32,
    // 6 equipment slots plus the trinket slot, 0 = empty.
    #[serde(default)]
    pub item0: i32,
    #[serde(default)]
    pub item1: i32,
    #[serde(default)]
    pub item2: i32,
    #[serde(default)]
    pub item3: i32,
    #[serde(default)]
    pub item4: i32,
    #[serde(default)]
    pub item5: i32,
    #[serde(default)]
    pub item6: i32,
    #[serde(default)]
    pub challenges: Option<ChallengesDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChallengesDto {
    #[serde(default)]
    pub team_damage_percentage: Option<f64>,
}

// Matches the deserialization defaults: zeroed numerics, UNKNOWN positions.
impl Default for ParticipantDto {
    fn default() -> Self {
        ParticipantDto {
            puuid: String::new(),
            champion_name: String::new(),
            team_position: unknown_position(),
            individual_position: unknown_position(),
            win: false,
            kills: 0,
            deaths: 0,
            assists: 0,
            gold_earned: 0,
            total_minions_killed: 0,
            neutral_minions_killed: 0,
            vision_score: 0,
            total_damage_dealt_to_champions: 0,
            total_damage_taken: 0,
            turret_kills: 0,
            inhibitor_kills: 0,
            double_kills: 0,
            triple_kills: 0,
            quadra_kills: 0,
            penta_kills: 0,
            item0: 0,
            item1: 0,
            item2: 0,
            item3: 0,
            item4: 0,
            item5: 0,
            item6: 0,
            challenges: None,
        }
    }
}

impl ParticipantDto {
    /// Minion plus neutral-monster kills.
    pub fn creep_score(&self) -> i32 {
        self.total_minions_killed + self.neutral_minions_killed
    }

    pub fn items(&self) -> [i32; 7] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_defaults_cover_missing_fields() {
        let p: ParticipantDto = serde_json::from_str(r#"{"puuid": "abc"}"#).unwrap();
        assert_eq!(p.kills, 0);
        assert_eq!(p.team_position, "UNKNOWN");
        assert_eq!(p.individual_position, "UNKNOWN");
        assert_eq!(p.creep_score(), 0);
        assert!(p.challenges.is_none());
    }

    #[test]
    fn creep_score_combines_minions_and_neutrals() {
        let p: ParticipantDto = serde_json::from_str(
            r#"{"puuid": "abc", "totalMinionsKilled": 150, "neutralMinionsKilled": 30}"#,
        )
        .unwrap();
        assert_eq!(p.creep_score(), 180);
    }

    #[test]
    fn match_document_parses_required_shape() {
        let m: MatchDto = serde_json::from_str(
            r#"{
                "metadata": {"matchId": "EUW1_42"},
                "info": {
                    "gameDuration": 1800,
                    "gameStartTimestamp": 1700000000000,
                    "gameMode": "CLASSIC",
                    "participants": [{"puuid": "abc", "championName": "Ahri", "win": true}]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(m.metadata.match_id, "EUW1_42");
        assert_eq!(m.info.participants.len(), 1);
        assert!(m.info.participants[0].win);
    }

    #[test]
    fn challenges_metric_is_optional_inside_block() {
        let p: ParticipantDto =
            serde_json::from_str(r#"{"puuid": "abc", "challenges": {}}"#).unwrap();
        assert!(p.challenges.unwrap().team_damage_percentage.is_none());
    }
}
