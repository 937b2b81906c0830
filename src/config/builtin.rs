use crate::domain::model::{InjectionPlan, LocalePlan, MergePolicy};
use indexmap::IndexMap;
use std::path::Path;

pub const DEFAULT_MESSAGES_DIR: &str = "web/messages";
pub const SERVICES_SECTION: &str = "services";

const SERVICES_EN: [(&str, &str); 6] = [
    ("searchSupplyPlaceholder", "Search supplies..."),
    ("quantityPlaceholder", "0"),
    ("servicePlaceholder", "e.g., Dental cleaning"),
    ("assetPlaceholder", "e.g., Dental chair"),
    ("supplyNamePlaceholder", "e.g., Latex gloves"),
    ("supplyPresentationPlaceholder", "e.g., Box of 100"),
];

const SERVICES_ES: [(&str, &str); 6] = [
    ("searchSupplyPlaceholder", "Buscar insumos..."),
    ("quantityPlaceholder", "0"),
    ("servicePlaceholder", "Ej: Limpieza dental"),
    ("assetPlaceholder", "Ej: Sillón dental"),
    ("supplyNamePlaceholder", "Ej: Guantes de látex"),
    ("supplyPresentationPlaceholder", "Ej: Caja de 100"),
];

/// The services placeholder plan, with bundles at `<messages_dir>/<code>.json`.
pub fn services_placeholders(messages_dir: &str) -> InjectionPlan {
    InjectionPlan {
        name: "services-placeholders".to_string(),
        section: SERVICES_SECTION.to_string(),
        policy: MergePolicy::Overwrite,
        locales: vec![
            locale(messages_dir, "en", &SERVICES_EN),
            locale(messages_dir, "es", &SERVICES_ES),
        ],
    }
}

fn locale(messages_dir: &str, code: &str, table: &[(&str, &str)]) -> LocalePlan {
    let path = Path::new(messages_dir).join(format!("{}.json", code));
    let entries: IndexMap<String, String> = table
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    LocalePlan {
        code: code.to_string(),
        path: path.to_string_lossy().into_owned(),
        entries,
    }
}
