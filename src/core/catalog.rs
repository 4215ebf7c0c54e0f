use crate::core::{CatalogSource, Service};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    Remote,
    /// The remote catalog could not be read and the built-in list is in use.
    Fallback,
}

#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub services: Vec<Service>,
    pub origin: CatalogOrigin,
}

/// 讀取服務目錄，失敗時改用內建的示範清單
pub async fn load_catalog<C: CatalogSource + ?Sized>(source: &C) -> LoadedCatalog {
    match source.fetch_services().await {
        Ok(services) => {
            tracing::info!("📡 Loaded {} services from the catalog", services.len());
            LoadedCatalog {
                services,
                origin: CatalogOrigin::Remote,
            }
        }
        Err(e) => {
            tracing::warn!("Catalog unavailable ({}), using built-in demo services", e);
            LoadedCatalog {
                services: demo_services(),
                origin: CatalogOrigin::Fallback,
            }
        }
    }
}

pub fn demo_services() -> Vec<Service> {
    let service = |id: &str, name: &str, description: &str, price: f64, category: &str, hours| {
        Service {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            currency: "AED".to_string(),
            category: category.to_string(),
            estimated_time: hours,
        }
    };

    vec![
        service(
            "1",
            "Wash & Fold",
            "Professional washing and folding service for everyday clothes.",
            55.0,
            "laundry",
            24,
        ),
        service(
            "2",
            "Dry Cleaning",
            "Professional dry cleaning for delicate and formal wear.",
            95.0,
            "dry_cleaning",
            48,
        ),
        service(
            "3",
            "Ironing Service",
            "Professional ironing and pressing for crisp, clean clothes.",
            30.0,
            "ironing",
            24,
        ),
    ]
}
