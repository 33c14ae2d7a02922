//! Team catalogues competitors pick from in multi-game modes.

use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// A team catalogue.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum League {
    /// Formula 1 constructors, used by round-robin tournaments.
    #[strum(to_string = "formula1", serialize = "f1")]
    Formula1,
    /// NBA franchises, used by best-of-seven series.
    Nba,
}

/// NBA conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum Conference {
    /// Eastern conference.
    East,
    /// Western conference.
    West,
}

/// A selectable team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct Team {
    /// Stable identifier used in team selection.
    id: &'static str,
    /// Display name.
    name: &'static str,
    /// Conference, NBA only.
    conference: Option<Conference>,
}

const fn constructor(id: &'static str, name: &'static str) -> Team {
    Team {
        id,
        name,
        conference: None,
    }
}

const fn franchise(id: &'static str, name: &'static str, conference: Conference) -> Team {
    Team {
        id,
        name,
        conference: Some(conference),
    }
}

static FORMULA1: [Team; 10] = [
    constructor("mercedes", "Mercedes"),
    constructor("ferrari", "Ferrari"),
    constructor("redbull", "Red Bull"),
    constructor("mclaren", "McLaren"),
    constructor("alpine", "Alpine"),
    constructor("astonmartin", "Aston Martin"),
    constructor("alfaromeo", "Kick Sauber"),
    constructor("haas", "Haas"),
    constructor("williams", "Williams"),
    constructor("racingbulls", "Racing Bulls"),
];

static NBA: [Team; 30] = [
    franchise("celtics", "Boston Celtics", Conference::East),
    franchise("nets", "Brooklyn Nets", Conference::East),
    franchise("knicks", "New York Knicks", Conference::East),
    franchise("76ers", "Philadelphia 76ers", Conference::East),
    franchise("raptors", "Toronto Raptors", Conference::East),
    franchise("bulls", "Chicago Bulls", Conference::East),
    franchise("cavaliers", "Cleveland Cavaliers", Conference::East),
    franchise("pistons", "Detroit Pistons", Conference::East),
    franchise("pacers", "Indiana Pacers", Conference::East),
    franchise("bucks", "Milwaukee Bucks", Conference::East),
    franchise("hawks", "Atlanta Hawks", Conference::East),
    franchise("hornets", "Charlotte Hornets", Conference::East),
    franchise("heat", "Miami Heat", Conference::East),
    franchise("magic", "Orlando Magic", Conference::East),
    franchise("wizards", "Washington Wizards", Conference::East),
    franchise("nuggets", "Denver Nuggets", Conference::West),
    franchise("timberwolves", "Minnesota Timberwolves", Conference::West),
    franchise("thunder", "Oklahoma City Thunder", Conference::West),
    franchise("blazers", "Portland Trail Blazers", Conference::West),
    franchise("jazz", "Utah Jazz", Conference::West),
    franchise("warriors", "Golden State Warriors", Conference::West),
    franchise("clippers", "LA Clippers", Conference::West),
    franchise("lakers", "Los Angeles Lakers", Conference::West),
    franchise("suns", "Phoenix Suns", Conference::West),
    franchise("kings", "Sacramento Kings", Conference::West),
    franchise("mavericks", "Dallas Mavericks", Conference::West),
    franchise("rockets", "Houston Rockets", Conference::West),
    franchise("grizzlies", "Memphis Grizzlies", Conference::West),
    franchise("pelicans", "New Orleans Pelicans", Conference::West),
    franchise("spurs", "San Antonio Spurs", Conference::West),
];

impl League {
    /// All teams in the league.
    pub fn teams(self) -> &'static [Team] {
        match self {
            League::Formula1 => &FORMULA1,
            League::Nba => &NBA,
        }
    }

    /// Looks a team up by id.
    #[instrument]
    pub fn find(self, id: &str) -> Option<&'static Team> {
        self.teams().iter().find(|team| team.id == id)
    }
}
