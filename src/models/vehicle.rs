//! Modelo del vehículo a evaluar
//!
//! `VehicleQuery` es la foto del formulario en el momento del envío y
//! `PredictionResult` la respuesta ya resuelta del servicio de predicción.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::option::OptionId;

/// Cuerpo JSON enviado a `POST /predict`
///
/// Los ids van como enteros (`null` si el desplegable sigue en el
/// placeholder) y los campos numéricos como texto, tal cual se escribieron.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleQuery {
    #[serde(rename = "makeId")]
    pub make_id: Option<OptionId>,
    #[serde(rename = "modelId")]
    pub model_id: Option<OptionId>,
    #[serde(rename = "transmissionId")]
    pub transmission_id: Option<OptionId>,
    #[serde(rename = "fueltypeId")]
    pub fuel_type_id: Option<OptionId>,
    #[serde(rename = "bodyStyleId")]
    pub body_style_id: Option<OptionId>,
    #[serde(rename = "colorId")]
    pub color_id: Option<OptionId>,
    #[serde(rename = "optionId")]
    pub option_id: Option<OptionId>,
    #[serde(rename = "damageId")]
    pub damage_id: Option<OptionId>,
    pub year: String,
    pub mileage: String,
    pub horsepower: String,
    #[serde(rename = "numPrevOwners")]
    pub num_prev_owners: String,
}

/// Respuesta de `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub make: String,
    pub model: String,
    #[serde(deserialize_with = "display_text")]
    pub year: String,
    #[serde(deserialize_with = "display_text")]
    pub mileage: String,
    #[serde(deserialize_with = "display_text")]
    pub horsepower: String,
    #[serde(default)]
    pub transmission: Option<String>,
    pub fueltype: String,
    #[serde(rename = "bodyStyle")]
    pub body_style: String,
    pub color: String,
    pub option: String,
    pub damage: String,
    #[serde(rename = "numPrevOwners", default, deserialize_with = "optional_display_text")]
    pub num_prev_owners: Option<String>,
    pub price: f64,
    pub time: f64,
}

/// El servicio devuelve año, kilometraje y potencia a veces como número y
/// a veces como texto; aquí solo se muestran, así que se guardan como texto.
fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(value))
}

fn optional_display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(value_to_text(other)),
    })
}

// Entero exacto más grande que cabe en un f64 sin perder dígitos
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => match n.as_f64() {
            // `2016.0` se muestra como `2016`
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
