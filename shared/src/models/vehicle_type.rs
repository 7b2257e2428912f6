//! Vehicle Type Model

use serde::{Deserialize, Serialize};

/// Vehicle type entity (carro, moto, caminhonete...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleType {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Embedded vehicle type reference returned by joined queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleTypeRef {
    pub id: i64,
    pub name: String,
}

impl From<&VehicleType> for VehicleTypeRef {
    fn from(value: &VehicleType) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
        }
    }
}

/// Create vehicle type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleTypeCreate {
    pub name: String,
    pub description: Option<String>,
}

/// Update vehicle type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleTypeUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}
