//! Bundled example datasets.

/// A named example CSV with the column worth analysing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub id: &'static str,
    pub description: &'static str,
    /// Text column to analyse.
    pub column: &'static str,
    /// Raw CSV content.
    pub csv: &'static str,
}

const PRESETS: &[Preset] = &[
    Preset {
        id: "service-feedback",
        description: "Free-text comments left after contacting a public service",
        column: "comment",
        csv: include_str!("../../presets/service_feedback.csv"),
    },
    Preset {
        id: "consultation-responses",
        description: "Responses to a local transport consultation",
        column: "response",
        csv: include_str!("../../presets/consultation_responses.csv"),
    },
];

/// All bundled presets.
#[must_use]
pub fn presets() -> &'static [Preset] {
    PRESETS
}

#[must_use]
pub fn find_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::parse_csv;

    #[test]
    fn every_preset_parses_and_has_its_column() {
        for preset in presets() {
            let table = parse_csv(preset.csv.as_bytes())
                .unwrap_or_else(|e| panic!("preset {} failed to parse: {e}", preset.id));
            let texts = table
                .extract_column(preset.column)
                .unwrap_or_else(|e| panic!("preset {} missing column: {e}", preset.id));
            assert!(!texts.is_empty(), "preset {} has no text", preset.id);
        }
    }

    #[test]
    fn find_preset_by_id() {
        assert_eq!(find_preset("service-feedback").unwrap().column, "comment");
        assert!(find_preset("nope").is_none());
    }

    #[test]
    fn service_feedback_skips_blank_comment() {
        let preset = find_preset("service-feedback").unwrap();
        let table = parse_csv(preset.csv.as_bytes()).unwrap();
        assert_eq!(table.row_count(), 10);
        assert_eq!(table.extract_column("comment").unwrap().len(), 9);
    }
}
