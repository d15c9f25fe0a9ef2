use serde::{Deserialize, Serialize};

/// The type of a recognized named entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    /// People, including fictional.
    Person,
    /// Nationalities or religious or political groups.
    Norp,
    /// Buildings, airports, highways, bridges, etc.
    Fac,
    /// Companies, agencies, institutions, etc.
    Org,
    /// Countries, cities, states.
    Gpe,
    /// Non-GPE locations, mountain ranges, bodies of water.
    Loc,
    /// Objects, vehicles, foods, etc. (not services).
    Product,
    /// Named hurricanes, battles, wars, sports events, etc.
    Event,
    /// Titles of books, songs, etc.
    WorkOfArt,
    /// Named documents made into laws.
    Law,
    /// Any named language.
    Language,
    /// Absolute or relative dates or periods.
    Date,
    /// Times smaller than a day.
    Time,
    Percent,
    /// Monetary values, including unit.
    Money,
    /// Measurements, as of weight or distance.
    Quantity,
    /// "first", "second", etc.
    Ordinal,
    /// Numerals that do not fall under another type.
    Cardinal,
}

impl Label {
    pub const ALL: [Label; 18] = [
        Label::Person,
        Label::Norp,
        Label::Fac,
        Label::Org,
        Label::Gpe,
        Label::Loc,
        Label::Product,
        Label::Event,
        Label::WorkOfArt,
        Label::Law,
        Label::Language,
        Label::Date,
        Label::Time,
        Label::Percent,
        Label::Money,
        Label::Quantity,
        Label::Ordinal,
        Label::Cardinal,
    ];

    /// Labels whose values are free-form names. These get substring-aware deduplication and are
    /// the only ones considered for related topics.
    pub const NAMEABLE: [Label; 11] = [
        Label::Person,
        Label::Norp,
        Label::Fac,
        Label::Org,
        Label::Gpe,
        Label::Loc,
        Label::Product,
        Label::Event,
        Label::WorkOfArt,
        Label::Law,
        Label::Language,
    ];

    pub fn is_nameable(self) -> bool {
        Self::NAMEABLE.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Person => "PERSON",
            Label::Norp => "NORP",
            Label::Fac => "FAC",
            Label::Org => "ORG",
            Label::Gpe => "GPE",
            Label::Loc => "LOC",
            Label::Product => "PRODUCT",
            Label::Event => "EVENT",
            Label::WorkOfArt => "WORK_OF_ART",
            Label::Law => "LAW",
            Label::Language => "LANGUAGE",
            Label::Date => "DATE",
            Label::Time => "TIME",
            Label::Percent => "PERCENT",
            Label::Money => "MONEY",
            Label::Quantity => "QUANTITY",
            Label::Ordinal => "ORDINAL",
            Label::Cardinal => "CARDINAL",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_serializes_in_screaming_snake_case() {
        let json = serde_json::to_string(&Label::WorkOfArt).expect("label should serialize");
        assert_eq!(json, "\"WORK_OF_ART\"");

        let parsed: Label = serde_json::from_str("\"GPE\"").expect("label should deserialize");
        assert_eq!(parsed, Label::Gpe);
    }

    #[test]
    fn label_rejects_unknown_variant() {
        let parsed = serde_json::from_str::<Label>("\"ANIMAL\"");

        assert!(parsed.is_err());
    }

    #[test]
    fn display_matches_serialized_name() {
        for label in Label::ALL {
            let json = serde_json::to_string(&label).expect("label should serialize");
            assert_eq!(json, format!("\"{}\"", label));
        }
    }

    #[test]
    fn numeric_labels_are_not_nameable() {
        assert!(Label::Person.is_nameable());
        assert!(Label::Language.is_nameable());
        assert!(!Label::Date.is_nameable());
        assert!(!Label::Cardinal.is_nameable());
    }
}
