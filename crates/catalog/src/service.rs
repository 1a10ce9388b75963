use core::str::FromStr;

use serde::{Deserialize, Serialize};

use aquawash_core::DomainError;

/// Washing/treatment service offered at the counter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    External,
    InternalExternal,
    Diesel,
    Polish,
}

impl ServiceKind {
    /// Every service, in catalog order.
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::External,
        ServiceKind::InternalExternal,
        ServiceKind::Diesel,
        ServiceKind::Polish,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ServiceKind::External => "external",
            ServiceKind::InternalExternal => "internal_external",
            ServiceKind::Diesel => "diesel",
            ServiceKind::Polish => "polish",
        }
    }

    /// Catalog entry for this service.
    pub fn entry(self) -> ServiceCatalogEntry {
        let (name, base_price) = match self {
            ServiceKind::External => ("External Wash", 100),
            ServiceKind::InternalExternal => ("Internal & External Wash", 200),
            ServiceKind::Diesel => ("Diesel Treatment", 150),
            ServiceKind::Polish => ("Polish & Wax", 300),
        };
        ServiceCatalogEntry {
            kind: self,
            name,
            base_price,
        }
    }

    /// The full service catalog, in display order.
    pub fn catalog() -> [ServiceCatalogEntry; 4] {
        ServiceKind::ALL.map(ServiceKind::entry)
    }
}

impl core::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ServiceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| DomainError::unknown_service(s))
    }
}

/// A service as listed in the catalog. Base prices are fixed at build time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCatalogEntry {
    #[serde(rename = "id")]
    pub kind: ServiceKind,
    pub name: &'static str,
    pub base_price: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_the_four_services_with_base_prices() {
        let catalog = ServiceKind::catalog();
        let prices: Vec<_> = catalog.iter().map(|e| (e.kind.key(), e.base_price)).collect();
        assert_eq!(
            prices,
            vec![
                ("external", 100),
                ("internal_external", 200),
                ("diesel", 150),
                ("polish", 300),
            ]
        );
        assert_eq!(catalog[1].name, "Internal & External Wash");
    }

    #[test]
    fn parse_accepts_keys_and_rejects_others() {
        assert_eq!(
            "internal_external".parse::<ServiceKind>().unwrap(),
            ServiceKind::InternalExternal
        );
        assert_eq!(
            "wax".parse::<ServiceKind>().unwrap_err(),
            DomainError::UnknownService("wax".to_string())
        );
    }

    #[test]
    fn entry_serializes_with_id_field() {
        let value = serde_json::to_value(ServiceKind::Diesel.entry()).unwrap();
        assert_eq!(value["id"], "diesel");
        assert_eq!(value["name"], "Diesel Treatment");
        assert_eq!(value["base_price"], 150);
    }
}
