//! Catálogo de modelos EV
//!
//! Tabla estática de referencia, definida en compilación y nunca mutada.

use serde::Serialize;

/// Modelo de vehículo eléctrico del catálogo
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleModel {
    pub id: &'static str,
    pub name: &'static str,
    pub brand: &'static str,
    /// kWh
    pub battery_capacity: f64,
    /// km
    pub range: u32,
    /// minutos (0-80%)
    pub charging_time: u32,
    pub connector_types: &'static [&'static str],
    pub image_url: &'static str,
    pub price: &'static str,
    /// km/h
    pub top_speed: u32,
    pub acceleration: &'static str,
    pub gradient: [&'static str; 2],
    pub color: &'static str,
}

impl VehicleModel {
    pub fn supports_connector(&self, connector: &str) -> bool {
        self.connector_types
            .iter()
            .any(|c| c.eq_ignore_ascii_case(connector))
    }
}

pub static EV_MODELS: &[VehicleModel] = &[
    VehicleModel {
        id: "tata-nexon-ev",
        name: "Tata Nexon EV",
        brand: "Tata",
        battery_capacity: 30.2,
        range: 312,
        charging_time: 60,
        connector_types: &["Type 2", "CCS"],
        image_url: "https://images.unsplash.com/photo-1593941707874-ef25b8b4a92b?w=400",
        price: "₹15.99 Lakh",
        top_speed: 120,
        acceleration: "9.9 sec (0-100 km/h)",
        gradient: ["#FF6B6B", "#4ECDC4"],
        color: "#FF6B6B",
    },
    VehicleModel {
        id: "mg-zs-ev",
        name: "MG ZS EV",
        brand: "MG",
        battery_capacity: 44.5,
        range: 419,
        charging_time: 50,
        connector_types: &["Type 2", "CCS"],
        image_url: "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?w=400",
        price: "₹24.58 Lakh",
        top_speed: 140,
        acceleration: "8.5 sec (0-100 km/h)",
        gradient: ["#667eea", "#764ba2"],
        color: "#667eea",
    },
    VehicleModel {
        id: "hyundai-kona",
        name: "Hyundai Kona Electric",
        brand: "Hyundai",
        battery_capacity: 39.2,
        range: 452,
        charging_time: 57,
        connector_types: &["Type 2", "CCS"],
        image_url: "https://images.unsplash.com/photo-1549927681-6ea9c2b5da9e?w=400",
        price: "₹23.84 Lakh",
        top_speed: 167,
        acceleration: "9.7 sec (0-100 km/h)",
        gradient: ["#f093fb", "#f5576c"],
        color: "#f093fb",
    },
    VehicleModel {
        id: "byd-atto-3",
        name: "BYD Atto 3",
        brand: "BYD",
        battery_capacity: 60.48,
        range: 521,
        charging_time: 50,
        connector_types: &["Type 2", "CCS"],
        image_url: "https://images.unsplash.com/photo-1571068316344-75bc76f77890?w=400",
        price: "₹33.99 Lakh",
        top_speed: 160,
        acceleration: "7.3 sec (0-100 km/h)",
        gradient: ["#4facfe", "#00f2fe"],
        color: "#4facfe",
    },
    VehicleModel {
        id: "mahindra-xuv400",
        name: "Mahindra XUV400 EV",
        brand: "Mahindra",
        battery_capacity: 39.4,
        range: 456,
        charging_time: 50,
        connector_types: &["Type 2", "CCS"],
        image_url: "https://images.unsplash.com/photo-1580273916550-e323be2ae537?w=400",
        price: "₹15.49 Lakh",
        top_speed: 150,
        acceleration: "8.3 sec (0-100 km/h)",
        gradient: ["#fa709a", "#fee140"],
        color: "#fa709a",
    },
    VehicleModel {
        id: "tesla-model-3",
        name: "Tesla Model 3",
        brand: "Tesla",
        battery_capacity: 57.5,
        range: 555,
        charging_time: 30,
        connector_types: &["Tesla", "CCS"],
        image_url: "https://images.unsplash.com/photo-1560958089-b8a1929cea89?w=400",
        price: "₹39.99 Lakh",
        top_speed: 225,
        acceleration: "5.6 sec (0-100 km/h)",
        gradient: ["#667eea", "#764ba2"],
        color: "#667eea",
    },
];

/// Buscar un modelo por identificador
pub fn find_model(id: &str) -> Option<&'static VehicleModel> {
    EV_MODELS.iter().find(|model| model.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = EV_MODELS.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), EV_MODELS.len());
    }

    #[test]
    fn test_find_model() {
        let kona = find_model("hyundai-kona").unwrap();
        assert_eq!(kona.range, 452);
        assert!(kona.supports_connector("ccs"));
        assert!(!kona.supports_connector("CHAdeMO"));
        assert!(find_model("unknown").is_none());
    }
}
