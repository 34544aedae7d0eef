use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::Error;

/// Label encoder for the weather category.
///
/// A category is encoded as its position in `classes`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeatherEncoder {
    classes: Vec<String>,
}

impl WeatherEncoder {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads an encoder artifact: `{"classes": ["clear", "fog", "rain"]}`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed, or lists no classes
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to open weather encoder '{}': {}", path.display(), e),
            )
        })?;
        let encoder: Self = serde_json::from_reader(BufReader::new(file))?;
        if encoder.classes.is_empty() {
            return Err(Error::InvalidData(format!(
                "Weather encoder '{}' has no classes",
                path.display()
            )));
        }
        Ok(encoder)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Encodes a weather category
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnseenCategory`] if the category was not known at training time
    #[allow(clippy::cast_precision_loss)]
    pub fn transform(&self, weather: &str) -> Result<f64, Error> {
        self.classes
            .iter()
            .position(|class| class == weather)
            .map(|idx| idx as f64)
            .ok_or_else(|| Error::UnseenCategory(weather.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_known_classes() {
        let encoder = WeatherEncoder::new(["clear", "fog", "rain"]);
        assert_eq!(encoder.transform("clear").unwrap(), 0.0);
        assert_eq!(encoder.transform("rain").unwrap(), 2.0);
    }

    #[test]
    fn test_transform_unseen_class() {
        let encoder = WeatherEncoder::new(["clear", "fog"]);
        assert!(matches!(
            encoder.transform("hail"),
            Err(Error::UnseenCategory(category)) if category == "hail"
        ));
        // categories are case sensitive
        assert!(encoder.transform("Clear").is_err());
    }
}
