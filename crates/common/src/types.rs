use serde::Deserialize;

/// Key holding the list of homework records in an API response.
pub const HOMEWORKS_KEY: &str = "homeworks";
/// Key holding the cursor timestamp in an API response.
pub const CURRENT_DATE_KEY: &str = "current_date";
/// Key holding the homework name in a homework record.
pub const HOMEWORK_NAME_KEY: &str = "homework_name";
/// Key holding the review status in a homework record.
pub const STATUS_KEY: &str = "status";

/// Review outcome reported by the API for a homework.
///
/// Deserializes from the raw `status` string; any other value is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    /// All recognized verdicts.
    pub const ALL: [Verdict; 3] = [Verdict::Approved, Verdict::Reviewing, Verdict::Rejected];

    /// Raw status string as the API sends it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Approved => "approved",
            Verdict::Reviewing => "reviewing",
            Verdict::Rejected => "rejected",
        }
    }

    /// Display text shown to the student.
    pub fn text(&self) -> &'static str {
        match self {
            Verdict::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Verdict::Reviewing => "Работа взята на проверку ревьюером.",
            Verdict::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// API response that passed shape validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewResponse {
    /// Homework records, most recent first.
    pub homeworks: Vec<serde_json::Value>,
    /// Cursor for the next poll. Its type is not validated.
    pub current_date: serde_json::Value,
}

impl ReviewResponse {
    /// Most recent homework record, if any.
    pub fn latest(&self) -> Option<&serde_json::Value> {
        self.homeworks.first()
    }

    /// Cursor as unix seconds, when the API sent an integer.
    pub fn current_date_secs(&self) -> Option<i64> {
        self.current_date.as_i64()
    }
}
