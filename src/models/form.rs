//! Estado del formulario (view-model)
//!
//! Sustituye al DOM: cada desplegable guarda sus opciones y el valor
//! seleccionado, los campos numéricos guardan el texto tal cual, y el panel
//! de resultados sabe si está visible. La capa de vistas solo lee esto.

use std::collections::BTreeMap;

use super::option::{OptionCategory, OptionId, SelectOption};
use super::vehicle::{PredictionResult, VehicleQuery};
use crate::utils::format::format_grouped_integer;

/// Estado de la página durante una sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Unloaded,
    LoadingOptions,
    Ready,
}

/// Estado de la lista de un desplegable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Empty,
    Loading,
    Populated,
    Failed,
}

/// Un `<select>` con su placeholder implícito
///
/// El placeholder siempre existe y corresponde a `selected == None`; no
/// forma parte de `options`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectControl {
    pub category: OptionCategory,
    pub options: Vec<SelectOption>,
    pub selected: Option<OptionId>,
    pub state: ListState,
}

impl SelectControl {
    pub fn new(category: OptionCategory) -> Self {
        Self {
            category,
            options: Vec::new(),
            selected: None,
            state: ListState::Empty,
        }
    }

    /// Dejar solo el placeholder
    pub fn clear(&mut self) {
        self.options.clear();
        self.selected = None;
        self.state = ListState::Empty;
    }

    /// Añadir opciones al final, en el orden recibido
    pub fn append(&mut self, options: impl IntoIterator<Item = SelectOption>) {
        self.options.extend(options);
        self.state = ListState::Populated;
    }

    /// Seleccionar un id de la lista; un id desconocido vuelve al placeholder
    pub fn select(&mut self, id: Option<OptionId>) -> bool {
        self.selected = id.filter(|id| self.contains(*id));
        self.selected.is_some()
    }

    pub fn contains(&self, id: OptionId) -> bool {
        self.options.iter().any(|option| option.id == id)
    }

    pub fn is_selected(&self, id: OptionId) -> bool {
        self.selected == Some(id)
    }

    /// Número de entradas incluyendo el placeholder
    pub fn entry_count(&self) -> usize {
        self.options.len() + 1
    }
}

/// Campos de texto numéricos del formulario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Year,
    Mileage,
    Horsepower,
    PrevOwners,
}

impl NumericField {
    pub const ALL: [NumericField; 4] = [
        NumericField::Year,
        NumericField::Mileage,
        NumericField::Horsepower,
        NumericField::PrevOwners,
    ];

    pub fn input_id(&self) -> &'static str {
        match self {
            NumericField::Year => "year-input",
            NumericField::Mileage => "mileage-input",
            NumericField::Horsepower => "horsepower-input",
            NumericField::PrevOwners => "prev-owners-input",
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            NumericField::Year => "year",
            NumericField::Mileage => "mileage",
            NumericField::Horsepower => "horsepower",
            NumericField::PrevOwners => "numPrevOwners",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NumericField::Year => "Year",
            NumericField::Mileage => "Mileage",
            NumericField::Horsepower => "Horsepower",
            NumericField::PrevOwners => "Previous owners",
        }
    }
}

/// Texto actual de los campos numéricos
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericInputs {
    pub year: String,
    pub mileage: String,
    pub horsepower: String,
    pub num_prev_owners: String,
}

impl NumericInputs {
    pub fn get(&self, field: NumericField) -> &str {
        match field {
            NumericField::Year => &self.year,
            NumericField::Mileage => &self.mileage,
            NumericField::Horsepower => &self.horsepower,
            NumericField::PrevOwners => &self.num_prev_owners,
        }
    }

    pub fn get_mut(&mut self, field: NumericField) -> &mut String {
        match field {
            NumericField::Year => &mut self.year,
            NumericField::Mileage => &mut self.mileage,
            NumericField::Horsepower => &mut self.horsepower,
            NumericField::PrevOwners => &mut self.num_prev_owners,
        }
    }
}

/// Resultado ya formateado para mostrar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResult {
    pub make: String,
    pub model: String,
    pub year: String,
    pub mileage: String,
    pub horsepower: String,
    pub transmission: Option<String>,
    pub fueltype: String,
    pub body_style: String,
    pub color: String,
    pub option: String,
    pub damage: String,
    pub num_prev_owners: Option<String>,
    pub price: String,
    pub time: String,
}

impl From<&PredictionResult> for RenderedResult {
    fn from(result: &PredictionResult) -> Self {
        Self {
            make: result.make.clone(),
            model: result.model.clone(),
            year: result.year.clone(),
            mileage: result.mileage.clone(),
            horsepower: result.horsepower.clone(),
            transmission: result.transmission.clone(),
            fueltype: result.fueltype.clone(),
            body_style: result.body_style.clone(),
            color: result.color.clone(),
            option: result.option.clone(),
            damage: result.damage.clone(),
            num_prev_owners: result.num_prev_owners.clone(),
            price: format_grouped_integer(result.price),
            time: format_grouped_integer(result.time),
        }
    }
}

/// Panel de resultados; una vez visible no se vuelve a ocultar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsPanel {
    pub visible: bool,
    pub result: Option<RenderedResult>,
}

impl ResultsPanel {
    pub fn show(&mut self, result: RenderedResult) {
        self.visible = true;
        self.result = Some(result);
    }

    /// El título "sin resultados" se ve mientras el panel está oculto
    pub fn no_results_visible(&self) -> bool {
        !self.visible
    }
}

/// Tipo de aviso al usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Bloqueante, equivalente a un `alert()`
    Alert,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Alert,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }
}

/// View-model completo del formulario
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub page: PageState,
    selects: BTreeMap<OptionCategory, SelectControl>,
    pub inputs: NumericInputs,
    pub results: ResultsPanel,
    pub notices: Vec<Notice>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        let selects = OptionCategory::ALL
            .into_iter()
            .map(|category| (category, SelectControl::new(category)))
            .collect();

        Self {
            page: PageState::Unloaded,
            selects,
            inputs: NumericInputs::default(),
            results: ResultsPanel::default(),
            notices: Vec::new(),
        }
    }

    /// Desplegables en el orden del formulario
    pub fn selects(&self) -> impl Iterator<Item = &SelectControl> {
        self.selects.values()
    }

    pub fn select(&self, category: OptionCategory) -> &SelectControl {
        // FormState::new crea un control por cada categoría
        &self.selects[&category]
    }

    pub fn select_mut(&mut self, category: OptionCategory) -> &mut SelectControl {
        self.selects
            .entry(category)
            .or_insert_with(|| SelectControl::new(category))
    }

    pub fn selected(&self, category: OptionCategory) -> Option<OptionId> {
        self.selects.get(&category).and_then(|select| select.selected)
    }

    /// Leer el formulario tal cual está
    pub fn collect(&self) -> VehicleQuery {
        VehicleQuery {
            make_id: self.selected(OptionCategory::Make),
            model_id: self.selected(OptionCategory::Model),
            transmission_id: self.selected(OptionCategory::Transmission),
            fuel_type_id: self.selected(OptionCategory::FuelType),
            body_style_id: self.selected(OptionCategory::BodyStyle),
            color_id: self.selected(OptionCategory::Color),
            option_id: self.selected(OptionCategory::CarOption),
            damage_id: self.selected(OptionCategory::Damage),
            year: self.inputs.year.clone(),
            mileage: self.inputs.mileage.clone(),
            horsepower: self.inputs.horsepower.clone(),
            num_prev_owners: self.inputs.num_prev_owners.clone(),
        }
    }

    /// Equivalente a `form.reset()`: placeholders y campos vacíos
    ///
    /// Las listas estáticas se mantienen. El modelo se vacía porque la marca
    /// vuelve al placeholder.
    pub fn reset_controls(&mut self) {
        for select in self.selects.values_mut() {
            if select.category.is_dependent() {
                select.clear();
            } else {
                select.selected = None;
            }
        }
        self.inputs = NumericInputs::default();
    }
}
