use serde::Serialize;

/// Body of the HLTB search POST.
///
/// Mirrors the shape the website sends; the filter options are fixed
/// to "no filter, sort by popularity".
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_type: String,
    pub search_terms: Vec<String>,
    pub search_page: u32,
    pub size: u32,
    pub search_options: SearchOptions,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub games: GameSearchOptions,
    pub users: UserSearchOptions,
    pub filter: String,
    pub sort: u32,
    pub randomizer: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameSearchOptions {
    pub user_id: u64,
    pub platform: String,
    pub sort_category: String,
    pub range_category: String,
    pub range_time: RangeTime,
    pub gameplay: Gameplay,
    pub range_year: RangeYear,
    pub modifier: String,
}

/// Serialized as `{"min": null, "max": null}` when unbounded
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RangeTime {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Gameplay {
    pub perspective: String,
    pub flow: String,
    pub genre: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RangeYear {
    pub min: String,
    pub max: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchOptions {
    pub sort_category: String,
}

impl Default for GameSearchOptions {
    fn default() -> Self {
        Self {
            user_id: 0,
            platform: String::new(),
            sort_category: "popular".to_string(),
            range_category: "main".to_string(),
            range_time: RangeTime::default(),
            gameplay: Gameplay::default(),
            range_year: RangeYear::default(),
            modifier: String::new(),
        }
    }
}

impl Default for UserSearchOptions {
    fn default() -> Self {
        Self {
            sort_category: "postcount".to_string(),
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            games: GameSearchOptions::default(),
            users: UserSearchOptions::default(),
            filter: String::new(),
            sort: 0,
            randomizer: 0,
        }
    }
}

impl SearchRequest {
    /// First page of game results for a title, split on whitespace
    pub fn for_title(title: &str, size: u32) -> Self {
        Self {
            search_type: "games".to_string(),
            search_terms: title.split_whitespace().map(str::to_string).collect(),
            search_page: 1,
            size,
            search_options: SearchOptions::default(),
        }
    }

    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let request = SearchRequest::for_title("  The   Witcher 3 ", 20);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "searchType": "games",
                "searchTerms": ["The", "Witcher", "3"],
                "searchPage": 1,
                "size": 20,
                "searchOptions": {
                    "games": {
                        "userId": 0,
                        "platform": "",
                        "sortCategory": "popular",
                        "rangeCategory": "main",
                        "rangeTime": {"min": null, "max": null},
                        "gameplay": {"perspective": "", "flow": "", "genre": ""},
                        "rangeYear": {"min": "", "max": ""},
                        "modifier": ""
                    },
                    "users": {"sortCategory": "postcount"},
                    "filter": "",
                    "sort": 0,
                    "randomizer": 0
                }
            })
        );
    }
}
