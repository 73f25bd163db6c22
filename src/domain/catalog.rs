use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

/// A purchasable proxy location: display name and monthly unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryListing {
    pub name: String,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub countries: BTreeMap<String, CountryListing>,
}

/// Immutable region/country → price directory.
///
/// Constructed once at startup (builtin data or a JSON file) and injected
/// into the engine. There is no write path: later edits to a catalog file
/// never affect orders that were already priced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    regions: BTreeMap<String, Region>,
}

impl Catalog {
    /// Loads a catalog from a JSON source shaped as
    /// `{ "<region_id>": { "name": ..., "countries": { "<country_id>": { "name": ..., "price": ... } } } }`.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }

    /// Looks up a `(region, country)` pair. `None` means the selection is
    /// not purchasable.
    pub fn resolve(&self, region_id: &str, country_id: &str) -> Option<&CountryListing> {
        self.regions.get(region_id)?.countries.get(country_id)
    }

    /// Iterates regions in stable (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Region)> {
        self.regions.iter()
    }

    fn region(&mut self, region_id: &str, name: &str, countries: &[(&str, &str, i64)]) {
        let countries = countries
            .iter()
            .map(|(id, name, price)| {
                (
                    id.to_string(),
                    CountryListing {
                        name: name.to_string(),
                        price: *price,
                    },
                )
            })
            .collect();
        self.regions.insert(
            region_id.to_string(),
            Region {
                name: name.to_string(),
                countries,
            },
        );
    }

    /// The storefront's stock catalog.
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        catalog.region(
            "europe",
            "Europe",
            &[
                ("austria", "Austria", 249),
                ("bosnia", "Bosnia and Herzegovina", 249),
                ("uk", "United Kingdom", 299),
                ("hungary", "Hungary", 249),
                ("germany", "Germany", 299),
                ("greece", "Greece", 199),
                ("denmark", "Denmark", 249),
                ("ireland", "Ireland", 299),
                ("iceland", "Iceland", 249),
                ("spain", "Spain", 299),
                ("italy", "Italy", 299),
                ("latvia", "Latvia", 299),
                ("netherlands", "Netherlands", 149),
                ("norway", "Norway", 249),
                ("poland", "Poland", 149),
                ("portugal", "Portugal", 299),
                ("russia", "Russia", 99),
                ("serbia", "Serbia", 199),
                ("slovakia", "Slovakia", 199),
                ("slovenia", "Slovenia", 199),
                ("finland", "Finland", 199),
                ("france", "France", 299),
                ("croatia", "Croatia", 249),
                ("czech", "Czechia", 249),
                ("switzerland", "Switzerland", 249),
                ("sweden", "Sweden", 249),
                ("estonia", "Estonia", 199),
            ],
        );
        catalog.region(
            "asia",
            "Asia",
            &[
                ("azerbaijan", "Azerbaijan", 149),
                ("vietnam", "Vietnam", 149),
                ("hongkong", "Hong Kong", 199),
                ("georgia", "Georgia", 199),
                ("israel", "Israel", 249),
                ("india", "India", 249),
                ("indonesia", "Indonesia", 199),
                ("kazakhstan", "Kazakhstan", 149),
                ("qatar", "Qatar", 199),
                ("china", "China", 149),
                ("kuwait", "Kuwait", 299),
                ("malaysia", "Malaysia", 249),
                ("uae", "United Arab Emirates", 249),
                ("korea", "South Korea", 299),
                ("thailand", "Thailand", 299),
                ("turkey", "Turkey", 149),
                ("philippines", "Philippines", 299),
                ("japan", "Japan", 299),
            ],
        );
        catalog.region(
            "america",
            "America",
            &[
                ("argentina", "Argentina", 299),
                ("brazil", "Brazil", 199),
                ("canada", "Canada", 149),
                ("cuba", "Cuba", 249),
                ("mexico", "Mexico", 199),
                ("usa", "United States", 149),
            ],
        );
        catalog.region(
            "africa",
            "Africa",
            &[
                ("egypt", "Egypt", 149),
                ("morocco", "Morocco", 199),
                ("southafrica", "South Africa", 249),
            ],
        );
        catalog.region(
            "oceania",
            "Oceania",
            &[
                ("australia", "Australia", 249),
                ("newzealand", "New Zealand", 199),
                ("samoa", "Samoa", 199),
            ],
        );
        catalog
    }
}
