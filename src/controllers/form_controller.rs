//! Controlador del formulario
//!
//! Es dueño del `FormState` de una sesión de página: carga los
//! desplegables, mantiene la cascada marca → modelo, limpia los campos
//! numéricos, envía la consulta y pinta el resultado.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, error, info, warn};

use crate::clients::{OptionsSource, PredictionSource};
use crate::dto::form_dto::FormSubmission;
use crate::models::form::{FormState, ListState, Notice, NumericField, PageState, RenderedResult};
use crate::models::option::{OptionCategory, OptionId, SelectOption};
use crate::models::vehicle::{PredictionResult, VehicleQuery};
use crate::utils::errors::{ClientResult, FILL_ALL_DATA_MESSAGE};
use crate::utils::validation::sanitize_in_place;

/// Petición de modelos pendiente, etiquetada con la generación de la
/// cascada en la que se lanzó
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelRequest {
    pub generation: u64,
    pub make_id: OptionId,
}

/// Resultado de un envío del formulario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// El panel de resultados muestra la predicción
    Rendered,
    /// El servicio respondió 422
    Rejected,
    /// Fallo de transporte, estado inesperado o JSON inválido
    Failed,
}

pub struct FormController {
    options: Arc<dyn OptionsSource>,
    prediction: Arc<dyn PredictionSource>,
    state: FormState,
    model_generation: u64,
}

impl FormController {
    pub fn new(options: Arc<dyn OptionsSource>, prediction: Arc<dyn PredictionSource>) -> Self {
        Self {
            options,
            prediction,
            state: FormState::new(),
            model_generation: 0,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Cargar los siete desplegables estáticos en paralelo
    ///
    /// Una categoría que falla se queda solo con su placeholder.
    pub async fn populate_static_options(&mut self) {
        self.state.page = PageState::LoadingOptions;
        for category in OptionCategory::STATIC {
            self.state.select_mut(category).state = ListState::Loading;
        }

        let fetches = OptionCategory::STATIC.into_iter().map(|category| {
            let source = Arc::clone(&self.options);
            async move { (category, source.get_options(category).await) }
        });
        let results = join_all(fetches).await;

        let mut failed = Vec::new();
        for (category, result) in results {
            let select = self.state.select_mut(category);
            match result {
                Ok(options) => {
                    debug!("📋 {}: {} opciones", category, options.len());
                    select.append(options);
                }
                Err(e) => {
                    warn!("⚠️ No se pudieron cargar las opciones de {}: {}", category, e);
                    select.state = ListState::Failed;
                    failed.push(category.label());
                }
            }
        }

        if !failed.is_empty() {
            self.state.notices.push(Notice::info(format!(
                "Some lists could not be loaded: {}",
                failed.join(", ")
            )));
        }

        self.state.page = PageState::Ready;
        info!("✅ Formulario listo ({} listas con error)", failed.len());
    }

    /// Primera mitad de la cascada: seleccionar la marca y vaciar el modelo
    ///
    /// Devuelve la petición a lanzar, o `None` si la marca quedó en el
    /// placeholder. Cualquier petición anterior queda obsoleta.
    pub fn begin_make_change(&mut self, make_id: Option<OptionId>) -> Option<ModelRequest> {
        self.model_generation += 1;

        self.state.select_mut(OptionCategory::Make).select(make_id);
        self.state.select_mut(OptionCategory::Model).clear();

        let make_id = self.state.selected(OptionCategory::Make)?;
        self.state.select_mut(OptionCategory::Model).state = ListState::Loading;

        Some(ModelRequest {
            generation: self.model_generation,
            make_id,
        })
    }

    /// Segunda mitad de la cascada: aplicar la respuesta si sigue vigente
    ///
    /// Devuelve `false` cuando la respuesta es de una marca ya cambiada.
    pub fn apply_model_options(
        &mut self,
        request: ModelRequest,
        result: ClientResult<Vec<SelectOption>>,
    ) -> bool {
        if request.generation != self.model_generation {
            debug!(
                "🗑️ Modelos de la marca {} descartados (gen {} != {})",
                request.make_id, request.generation, self.model_generation
            );
            return false;
        }

        let models = self.state.select_mut(OptionCategory::Model);
        models.clear();
        match result {
            Ok(options) => {
                debug!("📋 {} modelos para la marca {}", options.len(), request.make_id);
                models.append(options);
            }
            Err(e) => {
                warn!(
                    "⚠️ No se pudieron cargar los modelos de la marca {}: {}",
                    request.make_id, e
                );
                models.state = ListState::Failed;
            }
        }
        true
    }

    /// Cascada completa marca → modelo
    pub async fn change_make(&mut self, make_id: Option<OptionId>) -> bool {
        let Some(request) = self.begin_make_change(make_id) else {
            return false;
        };
        let result = self.options.get_model_options(request.make_id).await;
        self.apply_model_options(request, result)
    }

    /// Seleccionar un valor en un desplegable que no sea la marca
    pub fn select(&mut self, category: OptionCategory, id: Option<OptionId>) -> bool {
        self.state.select_mut(category).select(id)
    }

    pub fn set_text(&mut self, field: NumericField, value: impl Into<String>) {
        *self.state.inputs.get_mut(field) = value.into();
    }

    /// Quitar los caracteres que no son dígitos de los campos numéricos
    pub fn sanitize_numeric_fields(&mut self) {
        for field in NumericField::ALL {
            sanitize_in_place(self.state.inputs.get_mut(field));
        }
    }

    pub fn collect(&self) -> VehicleQuery {
        self.state.collect()
    }

    /// Volcar en el view-model lo que envió el navegador, marca primero
    /// para que la cascada cargue sus modelos
    pub async fn load_submission(&mut self, submission: &FormSubmission) {
        self.change_make(submission.selection(OptionCategory::Make)).await;

        for category in OptionCategory::ALL {
            if category != OptionCategory::Make {
                self.select(category, submission.selection(category));
            }
        }
        for field in NumericField::ALL {
            self.set_text(field, submission.text(field));
        }
    }

    /// Enviar el formulario
    ///
    /// Los errores nunca salen de aquí: se convierten en un aviso y el panel
    /// de resultados no se toca.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.sanitize_numeric_fields();
        let query = self.collect();
        // El reset deja la marca en el placeholder: ninguna respuesta de
        // modelos pendiente puede volver a llenar la lista
        self.model_generation += 1;
        self.state.reset_controls();

        match self.prediction.get_prediction_results(&query).await {
            Ok(result) => {
                self.render(&result);
                SubmitOutcome::Rendered
            }
            Err(e) if e.is_validation() => {
                warn!("⚠️ Predicción rechazada: faltan datos");
                self.state.notices.push(Notice::alert(FILL_ALL_DATA_MESSAGE));
                SubmitOutcome::Rejected
            }
            Err(e) => {
                error!("❌ Error obteniendo la predicción: {}", e);
                self.state
                    .notices
                    .push(Notice::alert(format!("Could not get a prediction: {}", e)));
                SubmitOutcome::Failed
            }
        }
    }

    /// Mostrar el panel de resultados con la predicción
    pub fn render(&mut self, result: &PredictionResult) {
        info!(
            "💰 Predicción: {} {} -> {} / {}",
            result.make, result.model, result.price, result.time
        );
        self.state.results.show(RenderedResult::from(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::ClientError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeOptions {
        lists: HashMap<OptionCategory, Vec<SelectOption>>,
        models: HashMap<OptionId, Vec<SelectOption>>,
        failing: Vec<OptionCategory>,
    }

    #[async_trait]
    impl OptionsSource for FakeOptions {
        async fn get_options(&self, category: OptionCategory) -> ClientResult<Vec<SelectOption>> {
            if self.failing.contains(&category) {
                return Err(ClientError::RemoteStatus {
                    status: 500,
                    body: "down".to_string(),
                });
            }
            Ok(self.lists.get(&category).cloned().unwrap_or_default())
        }

        async fn get_model_options(&self, make_id: OptionId) -> ClientResult<Vec<SelectOption>> {
            Ok(self.models.get(&make_id).cloned().unwrap_or_default())
        }
    }

    enum FakeAnswer {
        Result(PredictionResult),
        Validation,
        ServerError,
    }

    struct FakePrediction {
        answer: FakeAnswer,
        seen: Mutex<Vec<VehicleQuery>>,
    }

    impl FakePrediction {
        fn new(answer: FakeAnswer) -> Self {
            Self {
                answer,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PredictionSource for FakePrediction {
        async fn get_prediction_results(
            &self,
            query: &VehicleQuery,
        ) -> ClientResult<PredictionResult> {
            self.seen.lock().unwrap().push(query.clone());
            match &self.answer {
                FakeAnswer::Result(result) => Ok(result.clone()),
                FakeAnswer::Validation => Err(ClientError::Validation),
                FakeAnswer::ServerError => Err(ClientError::RemoteStatus {
                    status: 500,
                    body: "boom".to_string(),
                }),
            }
        }
    }

    fn focus_result() -> PredictionResult {
        PredictionResult {
            make: "Ford".to_string(),
            model: "Focus".to_string(),
            year: "20161".to_string(),
            mileage: "120000".to_string(),
            horsepower: "150".to_string(),
            transmission: Some("Manual".to_string()),
            fueltype: "Petrol".to_string(),
            body_style: "Hatchback".to_string(),
            color: "Blue".to_string(),
            option: "Sunroof".to_string(),
            damage: "No Damage".to_string(),
            num_prev_owners: Some("1".to_string()),
            price: 5000.0,
            time: 10.0,
        }
    }

    fn fake_options() -> FakeOptions {
        let mut options = FakeOptions::default();
        options.lists.insert(
            OptionCategory::Make,
            vec![SelectOption::new(1, "Ford"), SelectOption::new(2, "Chevrolet")],
        );
        options.lists.insert(
            OptionCategory::Color,
            vec![
                SelectOption::new(0, "Black"),
                SelectOption::new(1, "White"),
                SelectOption::new(2, "Red"),
            ],
        );
        options.models.insert(1, vec![SelectOption::new(10, "Focus")]);
        options.models.insert(
            2,
            vec![SelectOption::new(20, "Volt"), SelectOption::new(21, "Spark")],
        );
        options
    }

    fn full_catalog() -> FakeOptions {
        let mut options = fake_options();
        options.lists.insert(
            OptionCategory::Transmission,
            vec![SelectOption::new(0, "Automatic"), SelectOption::new(1, "Manual")],
        );
        options
            .lists
            .insert(OptionCategory::FuelType, vec![SelectOption::new(0, "Petrol")]);
        options.lists.insert(
            OptionCategory::BodyStyle,
            vec![SelectOption::new(4, "Hatchback"), SelectOption::new(5, "Sedan")],
        );
        options
            .lists
            .insert(OptionCategory::CarOption, vec![SelectOption::new(0, "Sunroof")]);
        options.lists.insert(
            OptionCategory::Damage,
            vec![SelectOption::new(0, "No Damage"), SelectOption::new(1, "Minor")],
        );
        options
    }

    fn controller(
        options: FakeOptions,
        answer: FakeAnswer,
    ) -> (FormController, Arc<FakePrediction>) {
        let prediction = Arc::new(FakePrediction::new(answer));
        let controller = FormController::new(Arc::new(options), prediction.clone());
        (controller, prediction)
    }

    #[tokio::test]
    async fn test_population_keeps_order_and_count() {
        let (mut controller, _) = controller(fake_options(), FakeAnswer::Validation);
        controller.populate_static_options().await;

        let state = controller.state();
        assert_eq!(state.page, PageState::Ready);

        let colors = state.select(OptionCategory::Color);
        let names: Vec<&str> = colors.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Black", "White", "Red"]);
        assert_eq!(colors.entry_count(), 4);
        assert_eq!(state.select(OptionCategory::Make).options.len(), 2);
        assert_eq!(state.select(OptionCategory::Model).state, ListState::Empty);
        assert!(state.notices.is_empty());
    }

    #[tokio::test]
    async fn test_every_static_list_has_one_entry_per_item() {
        let options = full_catalog();
        let expected: HashMap<OptionCategory, Vec<SelectOption>> = options.lists.clone();
        let (mut controller, _) = controller(options, FakeAnswer::Validation);
        controller.populate_static_options().await;

        for category in OptionCategory::STATIC {
            let select = controller.state().select(category);
            let items = &expected[&category];
            assert_eq!(&select.options, items, "{}", category);
            assert_eq!(select.entry_count(), items.len() + 1, "{}", category);
            assert_eq!(select.state, ListState::Populated, "{}", category);
        }
    }

    #[tokio::test]
    async fn test_failed_category_keeps_placeholder_and_adds_notice() {
        let mut options = fake_options();
        options.failing.push(OptionCategory::Color);
        let (mut controller, _) = controller(options, FakeAnswer::Validation);

        controller.populate_static_options().await;

        let colors = controller.state().select(OptionCategory::Color);
        assert_eq!(colors.entry_count(), 1);
        assert_eq!(colors.state, ListState::Failed);
        assert_eq!(controller.state().select(OptionCategory::Make).options.len(), 2);
        assert_eq!(controller.state().notices.len(), 1);
        assert!(controller.state().notices[0].message.contains("Color"));
    }

    #[tokio::test]
    async fn test_make_change_replaces_models() {
        let (mut controller, _) = controller(fake_options(), FakeAnswer::Validation);
        controller.populate_static_options().await;

        assert!(controller.change_make(Some(2)).await);
        assert_eq!(controller.state().select(OptionCategory::Model).options.len(), 2);

        assert!(controller.change_make(Some(1)).await);
        let models = controller.state().select(OptionCategory::Model);
        assert_eq!(models.options, vec![SelectOption::new(10, "Focus")]);
        assert_eq!(models.state, ListState::Populated);
    }

    #[tokio::test]
    async fn test_make_back_to_placeholder_empties_models() {
        let (mut controller, _) = controller(fake_options(), FakeAnswer::Validation);
        controller.populate_static_options().await;
        controller.change_make(Some(2)).await;

        assert!(!controller.change_make(None).await);
        let models = controller.state().select(OptionCategory::Model);
        assert_eq!(models.entry_count(), 1);
        assert_eq!(models.state, ListState::Empty);
    }

    #[tokio::test]
    async fn test_stale_model_response_is_discarded() {
        let (mut controller, _) = controller(fake_options(), FakeAnswer::Validation);
        controller.populate_static_options().await;

        let first = controller.begin_make_change(Some(2)).unwrap();
        let second = controller.begin_make_change(Some(1)).unwrap();

        assert!(controller.apply_model_options(second, Ok(vec![SelectOption::new(10, "Focus")])));
        assert!(!controller.apply_model_options(
            first,
            Ok(vec![SelectOption::new(20, "Volt"), SelectOption::new(21, "Spark")])
        ));

        let models = controller.state().select(OptionCategory::Model);
        assert_eq!(models.options, vec![SelectOption::new(10, "Focus")]);
        assert_eq!(controller.state().selected(OptionCategory::Make), Some(1));
    }

    #[tokio::test]
    async fn test_sanitize_is_idempotent() {
        let (mut controller, _) = controller(fake_options(), FakeAnswer::Validation);
        controller.set_text(NumericField::Year, "2016o1");
        controller.set_text(NumericField::Mileage, "120.000 km");

        controller.sanitize_numeric_fields();
        let once = controller.state().inputs.clone();
        controller.sanitize_numeric_fields();

        assert_eq!(controller.state().inputs, once);
        assert_eq!(once.year, "20161");
        assert_eq!(once.mileage, "120000");
    }

    #[tokio::test]
    async fn test_end_to_end_submit_renders_results() {
        let (mut controller, prediction) =
            controller(fake_options(), FakeAnswer::Result(focus_result()));
        controller.populate_static_options().await;
        controller.change_make(Some(1)).await;
        assert_eq!(controller.state().select(OptionCategory::Model).entry_count(), 2);

        controller.select(OptionCategory::Model, Some(10));
        controller.select(OptionCategory::Color, Some(2));
        controller.set_text(NumericField::Year, "2016o1");

        let outcome = controller.submit().await;
        assert_eq!(outcome, SubmitOutcome::Rendered);

        let sent = prediction.seen.lock().unwrap()[0].clone();
        assert_eq!(sent.make_id, Some(1));
        assert_eq!(sent.model_id, Some(10));
        assert_eq!(sent.color_id, Some(2));
        assert_eq!(sent.year, "20161");

        let state = controller.state();
        assert!(state.results.visible);
        assert!(!state.results.no_results_visible());
        let rendered = state.results.result.as_ref().unwrap();
        assert_eq!(rendered.price, "5,000");
        assert_eq!(rendered.time, "10");
        assert_eq!(rendered.model, "Focus");

        // form.reset(): placeholders seleccionados, modelos vacíos
        assert_eq!(state.selected(OptionCategory::Make), None);
        assert_eq!(state.inputs.year, "");
        assert_eq!(state.select(OptionCategory::Make).options.len(), 2);
        assert_eq!(state.select(OptionCategory::Model).entry_count(), 1);
    }

    #[tokio::test]
    async fn test_model_not_selectable_after_submit() {
        let (mut controller, _) = controller(fake_options(), FakeAnswer::Result(focus_result()));
        controller.populate_static_options().await;
        controller.change_make(Some(1)).await;
        controller.select(OptionCategory::Model, Some(10));

        controller.submit().await;

        assert!(!controller.select(OptionCategory::Model, Some(10)));
        let query = controller.collect();
        assert_eq!(query.make_id, None);
        assert_eq!(query.model_id, None);
    }

    #[tokio::test]
    async fn test_pending_model_response_discarded_after_submit() {
        let (mut controller, _) = controller(fake_options(), FakeAnswer::Validation);
        controller.populate_static_options().await;
        let pending = controller.begin_make_change(Some(1)).unwrap();

        controller.submit().await;

        assert!(!controller.apply_model_options(pending, Ok(vec![SelectOption::new(10, "Focus")])));
        let models = controller.state().select(OptionCategory::Model);
        assert_eq!(models.entry_count(), 1);
        assert_eq!(models.state, ListState::Empty);
    }

    #[tokio::test]
    async fn test_validation_error_shows_notice_and_keeps_panel_hidden() {
        let (mut controller, _) = controller(fake_options(), FakeAnswer::Validation);
        controller.populate_static_options().await;

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Rejected);
        let state = controller.state();
        assert!(!state.results.visible);
        assert!(state.results.result.is_none());
        assert_eq!(state.notices, vec![Notice::alert(FILL_ALL_DATA_MESSAGE)]);
    }

    #[tokio::test]
    async fn test_transport_failure_is_caught() {
        let (mut controller, _) = controller(fake_options(), FakeAnswer::ServerError);

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(!controller.state().results.visible);
        assert!(controller.state().notices[0].message.contains("500"));
    }

    #[tokio::test]
    async fn test_second_failure_does_not_hide_previous_results() {
        let (mut controller, _) = controller(fake_options(), FakeAnswer::Result(focus_result()));
        controller.submit().await;
        let shown = controller.state().results.clone();

        controller.prediction = Arc::new(FakePrediction::new(FakeAnswer::Validation));
        controller.submit().await;

        assert_eq!(controller.state().results, shown);
        assert!(controller.state().results.visible);
    }

    #[tokio::test]
    async fn test_load_submission_runs_cascade_first() {
        let (mut controller, _) = controller(fake_options(), FakeAnswer::Validation);
        controller.populate_static_options().await;

        let submission = FormSubmission {
            make_id: Some("2".to_string()),
            model_id: Some("21".to_string()),
            year: Some("20x20".to_string()),
            ..Default::default()
        };
        controller.load_submission(&submission).await;

        let query = controller.collect();
        assert_eq!(query.make_id, Some(2));
        assert_eq!(query.model_id, Some(21));
        assert_eq!(query.year, "20x20");
    }
}
