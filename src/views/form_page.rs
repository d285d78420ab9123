//! Página HTML del formulario
//!
//! Adaptador de render: traduce el `FormState` a la página. Los ids de
//! elemento (`make-select`, `results-predicted-price`, ...) son estables.

use askama::Template;

use crate::models::form::{FormState, NoticeKind, NumericField, RenderedResult};
use crate::models::option::{OptionCategory, PLACEHOLDER_LABEL};

pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub struct SelectView {
    pub id: &'static str,
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub options: Vec<OptionView>,
    pub none_selected: bool,
    pub is_make: bool,
}

pub struct InputView {
    pub id: &'static str,
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
}

pub struct ResultRow {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
}

pub struct NoticeView {
    pub alert: bool,
    pub message: String,
}

#[derive(Template)]
#[template(path = "form.html")]
pub struct FormPage {
    pub title: &'static str,
    pub selects: Vec<SelectView>,
    pub inputs: Vec<InputView>,
    pub notices: Vec<NoticeView>,
    pub results_visible: bool,
    pub result_rows: Vec<ResultRow>,
    pub price: String,
    pub time: String,
}

impl FormPage {
    pub fn from_state(state: &FormState) -> Self {
        let selects = state
            .selects()
            .map(|select| SelectView {
                id: select.category.select_id(),
                name: select.category.field_name(),
                label: select.category.label(),
                placeholder: PLACEHOLDER_LABEL,
                options: select
                    .options
                    .iter()
                    .map(|option| OptionView {
                        value: option.id.to_string(),
                        label: option.name.clone(),
                        selected: select.is_selected(option.id),
                    })
                    .collect(),
                none_selected: select.selected.is_none(),
                is_make: select.category == OptionCategory::Make,
            })
            .collect();

        let inputs = NumericField::ALL
            .into_iter()
            .map(|field| InputView {
                id: field.input_id(),
                name: field.field_name(),
                label: field.label(),
                value: state.inputs.get(field).to_string(),
            })
            .collect();

        let notices = state
            .notices
            .iter()
            .map(|notice| NoticeView {
                alert: notice.kind == NoticeKind::Alert,
                message: notice.message.clone(),
            })
            .collect();

        let (result_rows, price, time) = match &state.results.result {
            Some(result) => (result_rows(result), result.price.clone(), result.time.clone()),
            None => (Vec::new(), String::new(), String::new()),
        };

        Self {
            title: "Car price estimator",
            selects,
            inputs,
            notices,
            results_visible: state.results.visible,
            result_rows,
            price,
            time,
        }
    }
}

fn result_rows(result: &RenderedResult) -> Vec<ResultRow> {
    let mut rows = vec![
        row("results-car-make", "Make", &result.make),
        row("results-car-model", "Model", &result.model),
        row("results-car-year", "Year", &result.year),
        row("results-car-mileage", "Mileage", &result.mileage),
        row("results-car-horsepower", "Horsepower", &result.horsepower),
    ];
    if let Some(transmission) = &result.transmission {
        rows.push(row("results-car-transmission", "Transmission", transmission));
    }
    rows.extend([
        row("results-car-fueltype", "Fuel type", &result.fueltype),
        row("results-car-bodystyle", "Body style", &result.body_style),
        row("results-car-color", "Color", &result.color),
        row("results-car-options", "Options", &result.option),
        row("results-car-damagelevel", "Damage level", &result.damage),
    ]);
    if let Some(owners) = &result.num_prev_owners {
        rows.push(row("results-car-prev-owners", "Previous owners", owners));
    }
    rows
}

fn row(id: &'static str, label: &'static str, value: &str) -> ResultRow {
    ResultRow {
        id,
        label,
        value: value.to_string(),
    }
}

/// Renderizar la página completa
pub fn render_form_page(state: &FormState) -> askama::Result<String> {
    FormPage::from_state(state).render()
}
