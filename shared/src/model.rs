use std::collections::HashMap;
use std::fmt;

use serde_json::{Map, Value};

use crate::error::LoadError;

pub const DEFAULT_RULE_CATEGORY: &str = "General";
pub const DEFAULT_UPDATE_MEMBER: &str = "Member";

/// A member row. Identity is its position in the loaded list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Member {
    pub first_name: String,
    pub last_name: String,
    /// Category label as published (trimmed, original case).
    pub category: String,
    pub points: i64,
    pub roles: Vec<String>,
}

impl Member {
    /// First and last name joined by a space, skipping empty parts.
    pub fn display_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Lowercased category, used as the theme lookup key.
    pub fn category_key(&self) -> String {
        self.category.to_lowercase()
    }

    /// Avatar letter: first character of the display name, uppercased.
    pub fn initial(&self) -> char {
        self.display_name()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?')
    }

    fn from_record(record: &Map<String, Value>) -> Self {
        let roles = text_field(record, &["Role", "role"])
            .split(',')
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(str::to_owned)
            .collect();

        Self {
            first_name: text_field(record, &["First", "first"]),
            last_name: text_field(record, &["Last", "last"]),
            category: text_field(record, &["Class", "class"]),
            points: field(record, &["Points", "points"])
                .and_then(number_value)
                .map(truncate_points)
                .unwrap_or(0),
            roles,
        }
    }
}

/// Signed point change attached to an update. Keeps the published text so
/// an explicit sign survives display untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointsDelta {
    raw: String,
    value: i64,
}

impl PointsDelta {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim().to_string();
        let value = parse_number(&raw).map(truncate_points).unwrap_or(0);
        Self { raw, value }
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Number(n) => match n.as_i64() {
                Some(whole) => Self::parse(&whole.to_string()),
                None => {
                    let text = n.as_f64().map(number_text).unwrap_or_else(|| n.to_string());
                    Self::parse(&text)
                }
            },
            _ => Self::default(),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Text for display: an explicit `+`/`-` is kept, anything else is shown as a gain.
    pub fn display(&self) -> String {
        if self.raw.starts_with('+') || self.raw.starts_with('-') {
            self.raw.clone()
        } else if self.raw.is_empty() {
            "+0".to_string()
        } else {
            format!("+{}", self.raw)
        }
    }

    pub fn unit(&self) -> &'static str {
        points_unit(self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateEvent {
    /// Timestamp exactly as published; parsed lazily for display and ordering.
    pub timestamp: String,
    pub member_name: String,
    pub delta: PointsDelta,
    pub description: String,
}

impl UpdateEvent {
    fn from_record(record: &Map<String, Value>) -> Self {
        let member_name = text_field(record, &["Member", "member"]);
        Self {
            timestamp: text_field(record, &["Timestamp", "timestamp"]),
            member_name: if member_name.is_empty() {
                DEFAULT_UPDATE_MEMBER.to_string()
            } else {
                member_name
            },
            delta: field(record, &["Points", "points"])
                .map(PointsDelta::from_value)
                .unwrap_or_default(),
            description: text_field(record, &["Description", "description"]),
        }
    }
}

/// What a rule pays out: a number of points, or a free-text reward.
#[derive(Debug, Clone, PartialEq)]
pub enum Reward {
    Points(f64),
    Text(String),
}

impl Reward {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => n
                .as_f64()
                .filter(|v| v.is_finite())
                .map(Self::Points)
                .unwrap_or_else(|| Self::Text(n.to_string())),
            Value::String(s) => {
                let s = s.trim();
                match parse_number(s) {
                    Some(v) => Self::Points(v),
                    None => Self::Text(s.to_string()),
                }
            }
            other => Self::Text(scalar_text(other)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Points(_) => "points",
            Self::Text(_) => "reward",
        }
    }
}

impl Default for Reward {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points(v) => f.write_str(&number_text(*v)),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rule {
    pub category: String,
    pub text: String,
    pub reward: Reward,
}

impl Rule {
    fn from_record(record: &Map<String, Value>) -> Self {
        let category = text_field(record, &["Category", "category"]);
        Self {
            category: if category.is_empty() {
                DEFAULT_RULE_CATEGORY.to_string()
            } else {
                category
            },
            text: text_field(record, &["Rule", "rule"]),
            reward: field(record, &["Points", "Points/Reward", "points"])
                .map(Reward::from_value)
                .unwrap_or_default(),
        }
    }
}

/// Result of one successful load. Members are ordered by points, highest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub members: Vec<Member>,
    pub updates: Vec<UpdateEvent>,
    pub rules: Vec<Rule>,
}

impl Snapshot {
    /// Parse and normalize an endpoint response body.
    ///
    /// Missing or `null` collections become empty. Records that are not JSON
    /// objects are skipped; malformed fields inside a record fall back to zero
    /// or an empty string.
    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        let root: Value =
            serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))?;
        let Value::Object(root) = root else {
            return Err(LoadError::Parse("expected a JSON object".into()));
        };

        let mut members = collect(&root, "members", Member::from_record)?;
        members.sort_by(|a, b| b.points.cmp(&a.points));

        Ok(Self {
            members,
            updates: collect(&root, "updates", UpdateEvent::from_record)?,
            rules: collect(&root, "rules", Rule::from_record)?,
        })
    }

    /// Display name to category key, for theming updates by who earned them.
    pub fn category_keys_by_name(&self) -> HashMap<String, String> {
        self.members
            .iter()
            .filter_map(|member| {
                let name = member.display_name();
                (!name.is_empty()).then(|| (name, member.category_key()))
            })
            .collect()
    }
}

/// `"point"` for a magnitude of exactly one, `"points"` otherwise.
pub fn points_unit(points: i64) -> &'static str {
    if points.unsigned_abs() == 1 {
        "point"
    } else {
        "points"
    }
}

fn collect<T>(
    root: &Map<String, Value>,
    key: &str,
    build: fn(&Map<String, Value>) -> T,
) -> Result<Vec<T>, LoadError> {
    match root.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items
            .iter()
            .filter_map(Value::as_object)
            .map(build)
            .collect()),
        Some(_) => Err(LoadError::Parse(format!("`{key}` is not an array"))),
    }
}

/// First present, non-null, non-blank value among `keys`.
fn field<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| match value {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
}

fn text_field(record: &Map<String, Value>, keys: &[&str]) -> String {
    field(record, keys).map(scalar_text).unwrap_or_default()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn number_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whole values print without a fraction. Beyond 2^53 an `f64` is no longer
/// exact as an integer, so those keep plain float formatting.
fn number_text(value: f64) -> String {
    const EXACT_LIMIT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() < EXACT_LIMIT {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

fn truncate_points(value: f64) -> i64 {
    value.trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::{PointsDelta, Reward, Snapshot, points_unit};
    use crate::error::LoadError;

    const BODY: &str = r#"{
        "members": [
            {"First": "Bob", "Last": "Smith", "Class": "Gold", "Points": 12, "Role": "Treasurer"},
            {"First": "Ann", "Last": "Lee", "class": "eta", "Points": "40", "role": "President, Rush Chair ,"},
            {"First": "Cal", "Last": "Ortiz", "Points": "n/a"},
            "not a record"
        ],
        "updates": [
            {"Timestamp": "2025-09-01T12:00:00Z", "Member": "Ann Lee", "Points": 5, "Description": "Philanthropy"},
            {"Timestamp": "2025-09-02T12:00:00Z", "Points": "-3", "Description": "Late"}
        ],
        "rules": [
            {"Category": "Service", "Rule": "Volunteer an hour", "Points": 2},
            {"Rule": "Win intramurals", "Points/Reward": "Pizza party"}
        ]
    }"#;

    #[test]
    fn normalizes_members_and_sorts_by_points() {
        let snapshot = Snapshot::from_json(BODY).expect("body should parse");
        let names: Vec<_> = snapshot.members.iter().map(|m| m.display_name()).collect();
        assert_eq!(names, vec!["Ann Lee", "Bob Smith", "Cal Ortiz"]);

        let ann = &snapshot.members[0];
        assert_eq!(ann.points, 40);
        assert_eq!(ann.category_key(), "eta");
        assert_eq!(ann.roles, vec!["President", "Rush Chair"]);

        let cal = &snapshot.members[2];
        assert_eq!(cal.points, 0, "non-numeric points degrade to zero");
        assert!(cal.category.is_empty());
        assert!(cal.roles.is_empty());
    }

    #[test]
    fn normalizes_updates_with_member_fallback() {
        let snapshot = Snapshot::from_json(BODY).expect("body should parse");
        assert_eq!(snapshot.updates.len(), 2);
        assert_eq!(snapshot.updates[0].member_name, "Ann Lee");
        assert_eq!(snapshot.updates[0].delta.display(), "+5");
        assert_eq!(snapshot.updates[1].member_name, "Member");
        assert_eq!(snapshot.updates[1].delta.value(), -3);
    }

    #[test]
    fn normalizes_rules_with_numeric_and_text_rewards() {
        let snapshot = Snapshot::from_json(BODY).expect("body should parse");
        assert_eq!(snapshot.rules[0].category, "Service");
        assert_eq!(snapshot.rules[0].reward, Reward::Points(2.0));
        assert_eq!(snapshot.rules[0].reward.label(), "points");
        assert_eq!(snapshot.rules[1].category, "General");
        assert_eq!(snapshot.rules[1].reward, Reward::Text("Pizza party".into()));
        assert_eq!(snapshot.rules[1].reward.label(), "reward");
    }

    #[test]
    fn missing_and_null_collections_are_empty() {
        let snapshot =
            Snapshot::from_json(r#"{"members": null, "updates": []}"#).expect("body should parse");
        assert!(snapshot.members.is_empty());
        assert!(snapshot.updates.is_empty());
        assert!(snapshot.rules.is_empty());
    }

    #[test]
    fn rejects_invalid_json_and_non_object_roots() {
        assert!(matches!(Snapshot::from_json("<html>"), Err(LoadError::Parse(_))));
        assert!(matches!(Snapshot::from_json("[1, 2]"), Err(LoadError::Parse(_))));
        assert!(matches!(
            Snapshot::from_json(r#"{"rules": {"a": 1}}"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn category_lookup_uses_display_names() {
        let snapshot = Snapshot::from_json(BODY).expect("body should parse");
        let keys = snapshot.category_keys_by_name();
        assert_eq!(keys.get("Ann Lee").map(String::as_str), Some("eta"));
        assert_eq!(keys.get("Bob Smith").map(String::as_str), Some("gold"));
        assert_eq!(keys.get("Cal Ortiz").map(String::as_str), Some(""));
    }

    #[test]
    fn delta_display_defaults_to_positive() {
        assert_eq!(PointsDelta::parse("5").display(), "+5");
        assert_eq!(PointsDelta::parse("+5").display(), "+5");
        assert_eq!(PointsDelta::parse("-2").display(), "-2");
        assert_eq!(PointsDelta::parse("").display(), "+0");
        assert_eq!(PointsDelta::parse("-2").value(), -2);
    }

    #[test]
    fn unit_is_singular_only_for_magnitude_one() {
        assert_eq!(points_unit(1), "point");
        assert_eq!(points_unit(-1), "point");
        assert_eq!(points_unit(0), "points");
        assert_eq!(points_unit(12), "points");
        assert_eq!(PointsDelta::parse("-1").unit(), "point");
    }

    #[test]
    fn reward_display_drops_trailing_zero_fraction() {
        assert_eq!(Reward::Points(5.0).to_string(), "5");
        assert_eq!(Reward::Points(2.5).to_string(), "2.5");
        assert_eq!(Reward::Text("Pizza".into()).to_string(), "Pizza");
    }

    #[test]
    fn reward_display_keeps_huge_whole_numbers() {
        let snapshot = Snapshot::from_json(
            r#"{"rules": [
                {"Rule": "x", "Points": "1e20"},
                {"Rule": "y", "Points": 12345678901234567890},
                {"Rule": "z", "Points": -4.0}
            ]}"#,
        )
        .expect("body should parse");
        let shown: Vec<_> = snapshot.rules.iter().map(|r| r.reward.to_string()).collect();
        assert_eq!(shown[0], "100000000000000000000");
        assert_ne!(shown[1], i64::MAX.to_string());
        assert!(shown[1].starts_with("123456789012345"), "got {}", shown[1]);
        assert_eq!(shown[2], "-4");
    }

    #[test]
    fn float_deltas_show_as_whole_numbers() {
        let snapshot = Snapshot::from_json(
            r#"{"updates": [
                {"Member": "Ann Lee", "Points": 5.0},
                {"Member": "Ann Lee", "Points": -2.0},
                {"Member": "Ann Lee", "Points": 1.5}
            ]}"#,
        )
        .expect("body should parse");
        let shown: Vec<_> = snapshot.updates.iter().map(|u| u.delta.display()).collect();
        assert_eq!(shown, vec!["+5", "-2", "+1.5"]);
        assert_eq!(snapshot.updates[0].delta.value(), 5);
        assert_eq!(snapshot.updates[1].delta.unit(), "points");
    }
}
