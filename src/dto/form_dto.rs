use serde::Deserialize;

use crate::models::option::{OptionCategory, OptionId};
use crate::models::form::NumericField;

// Valores crudos del formulario HTML (query string o form-urlencoded).
// El placeholder llega como cadena vacía.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSubmission {
    #[serde(rename = "makeId", default)]
    pub make_id: Option<String>,
    #[serde(rename = "modelId", default)]
    pub model_id: Option<String>,
    #[serde(rename = "transmissionId", default)]
    pub transmission_id: Option<String>,
    #[serde(rename = "fueltypeId", default)]
    pub fuel_type_id: Option<String>,
    #[serde(rename = "bodyStyleId", default)]
    pub body_style_id: Option<String>,
    #[serde(rename = "colorId", default)]
    pub color_id: Option<String>,
    #[serde(rename = "optionId", default)]
    pub option_id: Option<String>,
    #[serde(rename = "damageId", default)]
    pub damage_id: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub mileage: Option<String>,
    #[serde(default)]
    pub horsepower: Option<String>,
    #[serde(rename = "numPrevOwners", default)]
    pub num_prev_owners: Option<String>,
}

impl FormSubmission {
    /// Id seleccionado de una categoría; `None` para el placeholder o basura
    pub fn selection(&self, category: OptionCategory) -> Option<OptionId> {
        let raw = match category {
            OptionCategory::Make => &self.make_id,
            OptionCategory::Model => &self.model_id,
            OptionCategory::Transmission => &self.transmission_id,
            OptionCategory::FuelType => &self.fuel_type_id,
            OptionCategory::BodyStyle => &self.body_style_id,
            OptionCategory::Color => &self.color_id,
            OptionCategory::CarOption => &self.option_id,
            OptionCategory::Damage => &self.damage_id,
        };
        raw.as_deref().and_then(|value| value.trim().parse().ok())
    }

    /// Texto crudo de un campo numérico (sin limpiar)
    pub fn text(&self, field: NumericField) -> &str {
        let raw = match field {
            NumericField::Year => &self.year,
            NumericField::Mileage => &self.mileage,
            NumericField::Horsepower => &self.horsepower,
            NumericField::PrevOwners => &self.num_prev_owners,
        };
        raw.as_deref().unwrap_or_default()
    }
}
