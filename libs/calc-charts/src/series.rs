//! Chart input decoding and label synthesis
//!
//! `datos` arrives either as a flat numeric series or as a structured
//! `{values, labels}` form. Labels missing or shorter than the values are
//! synthesized per chart kind (`Dato N`, `Punto N`, `Categoría N`).

use serde::{Deserialize, Serialize};

/// Chart input as it arrives on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartData {
    /// Structured form with parallel values and optional labels
    Labeled {
        values: Vec<f64>,
        #[serde(default)]
        labels: Option<Vec<String>>,
    },
    /// Flat numeric series
    Series(Vec<f64>),
}

impl ChartData {
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Labeled { values, .. } => values,
            Self::Series(values) => values,
        }
    }

    /// Label for position `index`, synthesizing `{prefix} {index+1}` when
    /// no explicit label covers it
    pub fn label(&self, index: usize, prefix: &str) -> String {
        if let Self::Labeled {
            labels: Some(labels),
            ..
        } = self
        {
            if let Some(label) = labels.get(index) {
                return label.clone();
            }
        }
        format!("{} {}", prefix, index + 1)
    }
}

impl From<Vec<f64>> for ChartData {
    fn from(values: Vec<f64>) -> Self {
        Self::Series(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_series_decodes() {
        let data: ChartData = serde_json::from_value(json!([10, 20, 30])).unwrap();
        assert_eq!(data.values(), &[10.0, 20.0, 30.0]);
        assert_eq!(data.label(0, "Dato"), "Dato 1");
        assert_eq!(data.label(2, "Punto"), "Punto 3");
    }

    #[test]
    fn test_labeled_form_decodes() {
        let data: ChartData =
            serde_json::from_value(json!({"values": [1, 2], "labels": ["Enero", "Febrero"]}))
                .unwrap();
        assert_eq!(data.values(), &[1.0, 2.0]);
        assert_eq!(data.label(0, "Dato"), "Enero");
        assert_eq!(data.label(1, "Dato"), "Febrero");
    }

    #[test]
    fn test_short_labels_are_synthesized() {
        let data: ChartData =
            serde_json::from_value(json!({"values": [1, 2, 3], "labels": ["A"]})).unwrap();
        assert_eq!(data.label(0, "Categoría"), "A");
        assert_eq!(data.label(1, "Categoría"), "Categoría 2");
        assert_eq!(data.label(2, "Categoría"), "Categoría 3");
    }

    #[test]
    fn test_missing_labels_field() {
        let data: ChartData = serde_json::from_value(json!({"values": [5]})).unwrap();
        assert_eq!(data.label(0, "Punto"), "Punto 1");
    }
}
