use crate::error::AppError;

/// Riot routing for one region group: platform host for summoner data,
/// regional host for account and match data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub platform: &'static str,
    pub routing: &'static str,
    pub display_name: &'static str,
}

const REGIONS: [Region; 4] = [
    Region {
        code: "europe",
        platform: "euw1",
        routing: "europe",
        display_name: "Europe West",
    },
    Region {
        code: "americas",
        platform: "na1",
        routing: "americas",
        display_name: "North America",
    },
    Region {
        code: "asia",
        platform: "kr",
        routing: "asia",
        display_name: "Korea",
    },
    Region {
        code: "sea",
        platform: "jp1",
        routing: "sea",
        display_name: "Japan",
    },
];

impl Region {
    pub fn from_code(code: &str) -> Result<Region, AppError> {
        REGIONS
            .iter()
            .find(|r| r.code == code)
            .copied()
            .ok_or_else(|| AppError::InvalidRegion(code.to_string()))
    }

    pub fn account_url(&self, game_name: &str, tag_line: &str) -> String {
        format!(
            "https://{}.api.riotgames.com/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.routing, game_name, tag_line
        )
    }

    pub fn summoner_url(&self, puuid: &str) -> String {
        format!(
            "https://{}.api.riotgames.com/lol/summoner/v4/summoners/by-puuid/{}",
            self.platform, puuid
        )
    }

    pub fn match_ids_url(&self, puuid: &str, count: usize) -> String {
        format!(
            "https://{}.api.riotgames.com/lol/match/v5/matches/by-puuid/{}/ids?start=0&count={}",
            self.routing, puuid, count
        )
    }

    pub fn match_url(&self, match_id: &str) -> String {
        format!(
            "https://{}.api.riotgames.com/lol/match/v5/matches/{}",
            self.routing, match_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_region_codes() {
        let region = Region::from_code("americas").unwrap();
        assert_eq!(region.platform, "na1");
        assert_eq!(region.routing, "americas");
    }

    #[test]
    fn rejects_unknown_region_code() {
        assert!(matches!(
            Region::from_code("moon"),
            Err(AppError::InvalidRegion(_))
        ));
    }

    #[test]
    fn match_urls_use_regional_routing() {
        let region = Region::from_code("europe").unwrap();
        assert_eq!(
            region.match_url("EUW1_123"),
            "https://europe.api.riotgames.com/lol/match/v5/matches/EUW1_123"
        );
        assert!(region
            .match_ids_url("puuid-1", 20)
            .contains("by-puuid/puuid-1/ids?start=0&count=20"));
    }

    #[test]
    fn summoner_url_uses_platform_host() {
        let region = Region::from_code("sea").unwrap();
        assert!(region.summoner_url("p").starts_with("https://jp1."));
    }
}
