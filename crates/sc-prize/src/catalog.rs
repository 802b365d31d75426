//! Tier catalog: the configured set of ticket prices
//!
//! The four reference tiers live here as data. Catalogs can also be loaded
//! from JSON or YAML documents; every tier is validated on load, so a catalog
//! that exists is a catalog that can be drawn from.

use serde::{Deserialize, Serialize};

use crate::error::{PrizeError, PrizeResult};
use crate::tier::{PriceTier, PrizeOutcome, brl_label};

const NO_WIN: &str = "Tente novamente!";
const BREAK_EVEN: &str = "Recuperou o valor!";
const TRIPLE: &str = "Triplicou!";
const BIG_PRIZE: &str = "Grande prêmio!";
const JACKPOT: &str = "JACKPOT!";

type StaticTier = (f64, &'static str, [(f64, f64, &'static str); 5]);

/// Reference tiers: (price, label, [(amount, probability, message)])
const STANDARD_TIERS: [StaticTier; 4] = [
    (
        5.0,
        "R$ 5,00",
        [
            (0.0, 0.75, NO_WIN),
            (5.0, 0.15, BREAK_EVEN),
            (15.0, 0.08, TRIPLE),
            (50.0, 0.019, BIG_PRIZE),
            (250.0, 0.001, JACKPOT),
        ],
    ),
    (
        10.0,
        "R$ 10,00",
        [
            (0.0, 0.70, NO_WIN),
            (10.0, 0.18, BREAK_EVEN),
            (30.0, 0.10, TRIPLE),
            (100.0, 0.019, BIG_PRIZE),
            (500.0, 0.001, JACKPOT),
        ],
    ),
    (
        25.0,
        "R$ 25,00",
        [
            (0.0, 0.65, NO_WIN),
            (25.0, 0.20, BREAK_EVEN),
            (75.0, 0.12, TRIPLE),
            (250.0, 0.029, BIG_PRIZE),
            (1000.0, 0.001, JACKPOT),
        ],
    ),
    (
        50.0,
        "R$ 50,00",
        [
            (0.0, 0.60, NO_WIN),
            (50.0, 0.22, BREAK_EVEN),
            (150.0, 0.15, TRIPLE),
            (500.0, 0.029, BIG_PRIZE),
            (2500.0, 0.001, JACKPOT),
        ],
    ),
];

/// Serialized form of a catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub tiers: Vec<TierDocument>,
}

/// Serialized form of a single tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierDocument {
    pub value: f64,
    /// Defaults to "R$ x,xx" when absent
    #[serde(default)]
    pub label: Option<String>,
    #[serde(alias = "prizes")]
    pub payout_table: Vec<PrizeOutcome>,
}

/// Ordered set of price tiers, unique by price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierCatalog {
    tiers: Vec<PriceTier>,
}

impl TierCatalog {
    /// Build a catalog from validated tiers
    pub fn new(tiers: Vec<PriceTier>) -> PrizeResult<Self> {
        if tiers.is_empty() {
            return Err(PrizeError::invalid("catalog", "no tiers configured"));
        }

        for (index, tier) in tiers.iter().enumerate() {
            if tiers[..index].iter().any(|t| t.matches_value(tier.value())) {
                return Err(PrizeError::DuplicateTier(tier.value()));
            }
        }

        Ok(Self { tiers })
    }

    /// The four reference tiers (R$ 5, 10, 25, 50)
    pub fn standard() -> Self {
        let tiers = STANDARD_TIERS
            .iter()
            .map(|(value, label, outcomes)| PriceTier::from_static(*value, label, outcomes))
            .collect();
        Self { tiers }
    }

    /// Build from a parsed document, validating every tier
    pub fn from_document(doc: CatalogDocument) -> PrizeResult<Self> {
        let tiers = doc
            .tiers
            .into_iter()
            .map(|t| {
                let label = t.label.unwrap_or_else(|| brl_label(t.value));
                PriceTier::new(t.value, label, t.payout_table)
            })
            .collect::<PrizeResult<Vec<_>>>()?;

        let catalog = Self::new(tiers)?;
        log::debug!("Loaded tier catalog with {} tiers", catalog.len());
        Ok(catalog)
    }

    /// Parse a JSON catalog
    pub fn from_json(json: &str) -> PrizeResult<Self> {
        let doc: CatalogDocument =
            serde_json::from_str(json).map_err(|e| PrizeError::Json(e.to_string()))?;
        Self::from_document(doc)
    }

    /// Parse a YAML catalog
    pub fn from_yaml(yaml: &str) -> PrizeResult<Self> {
        let doc: CatalogDocument =
            serde_yml::from_str(yaml).map_err(|e| PrizeError::Yaml(e.to_string()))?;
        Self::from_document(doc)
    }

    /// Convert back to the serialized form
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            tiers: self
                .tiers
                .iter()
                .map(|t| TierDocument {
                    value: t.value(),
                    label: Some(t.label().to_string()),
                    payout_table: t.payout_table().outcomes().to_vec(),
                })
                .collect(),
        }
    }

    /// Export as pretty JSON
    pub fn to_json(&self) -> PrizeResult<String> {
        serde_json::to_string_pretty(&self.to_document()).map_err(|e| PrizeError::Json(e.to_string()))
    }

    /// Export as YAML
    pub fn to_yaml(&self) -> PrizeResult<String> {
        serde_yml::to_string(&self.to_document()).map_err(|e| PrizeError::Yaml(e.to_string()))
    }

    /// Tier priced at `value`
    pub fn get(&self, value: f64) -> Option<&PriceTier> {
        self.tiers.iter().find(|t| t.matches_value(value))
    }

    /// First configured tier (the default selection)
    pub fn default_tier(&self) -> &PriceTier {
        &self.tiers[0]
    }

    pub fn tiers(&self) -> &[PriceTier] {
        &self.tiers
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriceTier> {
        self.tiers.iter()
    }

    /// All configured ticket prices
    pub fn values(&self) -> Vec<f64> {
        self.tiers.iter().map(|t| t.value()).collect()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl Default for TierCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
