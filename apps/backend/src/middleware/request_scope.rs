//! Scorebook resource named by a request path, for log fields.
//!
//! Middleware runs before routing, so ids are read from the raw path
//! rather than from `match_info`.

/// Area of the API a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Health,
    Players,
    Games,
    Plays,
    Stats,
    Commands,
    Other,
}

impl Area {
    pub fn as_str(self) -> &'static str {
        match self {
            Area::Health => "health",
            Area::Players => "players",
            Area::Games => "games",
            Area::Plays => "plays",
            Area::Stats => "stats",
            Area::Commands => "commands",
            Area::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestScope {
    pub area: Area,
    pub game_id: Option<String>,
    pub play_id: Option<String>,
}

impl RequestScope {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut scope = RequestScope {
            area: Area::Other,
            game_id: None,
            play_id: None,
        };

        match segments.as_slice() {
            ["health"] => scope.area = Area::Health,
            ["api", "players", ..] => scope.area = Area::Players,
            ["api", "commands", ..] => scope.area = Area::Commands,
            ["api", "games"] | ["api", "games", "lookup"] => scope.area = Area::Games,
            ["api", "games", game_id, rest @ ..] => {
                scope.game_id = Some((*game_id).to_string());
                scope.area = match rest {
                    [] => Area::Games,
                    ["plays"] => Area::Plays,
                    ["plays", play_id] => {
                        scope.play_id = Some((*play_id).to_string());
                        Area::Plays
                    }
                    ["stats"] => Area::Stats,
                    _ => Area::Other,
                };
            }
            _ => {}
        }
        scope
    }

    pub fn game_id_or_dash(&self) -> &str {
        self.game_id.as_deref().unwrap_or("-")
    }
}
