//! Route requests as submitted by the form

use serde::{Deserialize, Serialize};

use crate::{Error, NodeId};

/// Raw form fields, every value as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteForm {
    pub start: Option<String>,
    pub end: Option<String>,
    pub time_of_day: Option<String>,
    pub traffic_level: Option<String>,
    pub weather: Option<String>,
}

/// Validated route request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: NodeId,
    pub end: NodeId,
    pub time_of_day: i64,
    pub traffic_level: i64,
    pub weather: String,
}

impl RouteRequest {
    /// Parses the submitted form.
    ///
    /// Ranges of `time_of_day` and `traffic_level` are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if a field is missing or an integer
    /// field does not parse
    pub fn parse(form: &RouteForm) -> Result<Self, Error> {
        Ok(Self {
            start: parse_integer("start", form.start.as_deref())?,
            end: parse_integer("end", form.end.as_deref())?,
            time_of_day: parse_integer("time_of_day", form.time_of_day.as_deref())?,
            traffic_level: parse_integer("traffic_level", form.traffic_level.as_deref())?,
            weather: form
                .weather
                .clone()
                .ok_or_else(|| Error::InvalidInput("missing field 'weather'".to_string()))?,
        })
    }
}

impl TryFrom<&RouteForm> for RouteRequest {
    type Error = Error;

    fn try_from(form: &RouteForm) -> Result<Self, Self::Error> {
        Self::parse(form)
    }
}

fn parse_integer(field: &str, value: Option<&str>) -> Result<i64, Error> {
    let value = value.ok_or_else(|| Error::InvalidInput(format!("missing field '{field}'")))?;
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("'{field}' is not an integer: {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(start: &str) -> RouteForm {
        RouteForm {
            start: Some(start.to_string()),
            end: Some("2".to_string()),
            time_of_day: Some("8".to_string()),
            traffic_level: Some(" 2 ".to_string()),
            weather: Some("clear".to_string()),
        }
    }

    #[test]
    fn test_parse_valid_form() {
        let request = RouteRequest::parse(&form("1")).unwrap();
        assert_eq!(
            request,
            RouteRequest {
                start: 1,
                end: 2,
                time_of_day: 8,
                traffic_level: 2,
                weather: "clear".to_string(),
            }
        );
    }

    #[test]
    fn test_non_integer_is_invalid_input() {
        for bad in ["abc", "1.5", ""] {
            assert!(matches!(
                RouteRequest::parse(&form(bad)),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_missing_field_is_invalid_input() {
        let mut missing = form("1");
        missing.weather = None;
        assert!(matches!(
            RouteRequest::try_from(&missing),
            Err(Error::InvalidInput(_))
        ));
    }
}
