use serde::{Deserialize, Serialize};

/// Expense categories an employee can file a bill under.
///
/// Serialized as the display labels the backend stores, so the wire form of
/// `RestaurantsEtBars` is `"Restaurants et bars"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseType {
    #[serde(rename = "Transports")]
    Transports,
    #[serde(rename = "Restaurants et bars")]
    RestaurantsEtBars,
    #[serde(rename = "Hôtel et logement")]
    HotelEtLogement,
    #[serde(rename = "Services en ligne")]
    ServicesEnLigne,
    #[serde(rename = "IT et électronique")]
    ItEtElectronique,
    #[serde(rename = "Equipement et matériel")]
    EquipementEtMateriel,
    #[serde(rename = "Fournitures de bureau")]
    FournituresDeBureau,
}

impl ExpenseType {
    /// Human-readable label, also the stored wire form.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseType::Transports => "Transports",
            ExpenseType::RestaurantsEtBars => "Restaurants et bars",
            ExpenseType::HotelEtLogement => "Hôtel et logement",
            ExpenseType::ServicesEnLigne => "Services en ligne",
            ExpenseType::ItEtElectronique => "IT et électronique",
            ExpenseType::EquipementEtMateriel => "Equipement et matériel",
            ExpenseType::FournituresDeBureau => "Fournitures de bureau",
        }
    }

    /// All categories, in the order the select element lists them.
    pub fn all() -> Vec<ExpenseType> {
        vec![
            ExpenseType::Transports,
            ExpenseType::RestaurantsEtBars,
            ExpenseType::HotelEtLogement,
            ExpenseType::ServicesEnLigne,
            ExpenseType::ItEtElectronique,
            ExpenseType::EquipementEtMateriel,
            ExpenseType::FournituresDeBureau,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.label() == label)
    }
}

impl std::fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for t in ExpenseType::all() {
            assert_eq!(ExpenseType::from_label(t.label()), Some(t));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(ExpenseType::from_label("Cadeaux"), None);
        assert_eq!(ExpenseType::from_label(""), None);
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&ExpenseType::RestaurantsEtBars).unwrap();
        assert_eq!(json, "\"Restaurants et bars\"");
        let back: ExpenseType = serde_json::from_str("\"Transports\"").unwrap();
        assert_eq!(back, ExpenseType::Transports);
    }
}
