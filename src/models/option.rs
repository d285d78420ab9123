//! Opciones seleccionables de los desplegables
//!
//! Este módulo define la fila `{id, name}` que devuelve el servicio remoto
//! y las categorías de desplegable del formulario.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador de una opción tal como lo envía el servicio remoto
pub type OptionId = i64;

/// Texto del placeholder no seleccionable de cada desplegable
pub const PLACEHOLDER_LABEL: &str = "Choose";

/// Una opción de un desplegable (marca, modelo, color, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: OptionId,
    pub name: String,
}

impl SelectOption {
    pub fn new(id: OptionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Categorías de desplegable del formulario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionCategory {
    Make,
    Model,
    Transmission,
    FuelType,
    BodyStyle,
    Color,
    CarOption,
    Damage,
}

impl OptionCategory {
    /// Todas las categorías en el orden en que aparecen en el formulario
    pub const ALL: [OptionCategory; 8] = [
        OptionCategory::Make,
        OptionCategory::Model,
        OptionCategory::Transmission,
        OptionCategory::FuelType,
        OptionCategory::BodyStyle,
        OptionCategory::Color,
        OptionCategory::CarOption,
        OptionCategory::Damage,
    ];

    /// Categorías que se cargan una sola vez al abrir la página
    pub const STATIC: [OptionCategory; 7] = [
        OptionCategory::Make,
        OptionCategory::Transmission,
        OptionCategory::FuelType,
        OptionCategory::BodyStyle,
        OptionCategory::Color,
        OptionCategory::CarOption,
        OptionCategory::Damage,
    ];

    /// Id del elemento `<select>` en la página
    pub fn select_id(&self) -> &'static str {
        match self {
            OptionCategory::Make => "make-select",
            OptionCategory::Model => "model-select",
            OptionCategory::Transmission => "transmission-select",
            OptionCategory::FuelType => "fueltype-select",
            OptionCategory::BodyStyle => "bodystyle-select",
            OptionCategory::Color => "color-select",
            OptionCategory::CarOption => "option-select",
            OptionCategory::Damage => "damage-select",
        }
    }

    /// Nombre del campo en el formulario HTML y en el cuerpo de `/predict`
    pub fn field_name(&self) -> &'static str {
        match self {
            OptionCategory::Make => "makeId",
            OptionCategory::Model => "modelId",
            OptionCategory::Transmission => "transmissionId",
            OptionCategory::FuelType => "fueltypeId",
            OptionCategory::BodyStyle => "bodyStyleId",
            OptionCategory::Color => "colorId",
            OptionCategory::CarOption => "optionId",
            OptionCategory::Damage => "damageId",
        }
    }

    /// Etiqueta visible del desplegable
    pub fn label(&self) -> &'static str {
        match self {
            OptionCategory::Make => "Make",
            OptionCategory::Model => "Model",
            OptionCategory::Transmission => "Transmission",
            OptionCategory::FuelType => "Fuel type",
            OptionCategory::BodyStyle => "Body style",
            OptionCategory::Color => "Color",
            OptionCategory::CarOption => "Options",
            OptionCategory::Damage => "Damage level",
        }
    }

    /// El modelo depende de la marca seleccionada
    pub fn is_dependent(&self) -> bool {
        matches!(self, OptionCategory::Model)
    }

    /// Resolver una categoría a partir del id de su `<select>`
    pub fn from_select_id(select_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.select_id() == select_id)
    }
}

impl fmt::Display for OptionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
