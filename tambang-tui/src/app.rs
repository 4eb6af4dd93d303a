use std::sync::Arc;

use tambang_core::{
    input::{parse_distance, parse_minutes},
    model::{FareRequest, Quote},
    ports::FareError,
    service::FareService,
};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    ModelSelect,
    VariantSelect,
    TripForm,
    FareView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Distance,
    Time,
    TrafficJam,
    NightCharge,
}

impl Field {
    pub(crate) fn next(self) -> Self {
        match self {
            Field::Distance => Field::Time,
            Field::Time => Field::TrafficJam,
            Field::TrafficJam => Field::NightCharge,
            Field::NightCharge => Field::Distance,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            Field::Distance => Field::NightCharge,
            Field::Time => Field::Distance,
            Field::TrafficJam => Field::Time,
            Field::NightCharge => Field::TrafficJam,
        }
    }
}

pub(crate) struct App {
    pub service: Arc<FareService>,

    pub screen: Screen,
    pub models: Vec<String>,
    pub model_list_index: usize,
    pub selected_model: Option<String>,

    pub variants: Vec<String>,
    pub variant_list_index: usize,
    pub selected_variant: Option<String>,

    pub distance_input: String,
    pub time_input: String,
    pub traffic_jam: bool,
    pub night_charge: bool,
    pub focused: Field,

    pub quote: Option<Quote>,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(service: Arc<FareService>) -> Self {
        let models = service.list_models();
        Self {
            service,
            screen: Screen::ModelSelect,
            models,
            model_list_index: 0,
            selected_model: None,
            variants: Vec::new(),
            variant_list_index: 0,
            selected_variant: None,
            distance_input: String::new(),
            time_input: String::new(),
            traffic_jam: false,
            night_charge: false,
            focused: Field::Distance,
            quote: None,
            error_message: None,
        }
    }

    pub(crate) fn select_current_model(&mut self) {
        let Some(model) = self.models.get(self.model_list_index).cloned() else {
            return;
        };
        match self.service.list_variants(&model) {
            Ok(variants) => {
                self.variants = variants;
                self.variant_list_index = 0;
                self.selected_model = Some(model);
                self.error_message = None;
                self.screen = Screen::VariantSelect;
            }
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }

    pub(crate) fn select_current_variant(&mut self) {
        if let Some(variant) = self.variants.get(self.variant_list_index) {
            self.selected_variant = Some(variant.clone());
            self.error_message = None;
            self.screen = Screen::TripForm;
        }
    }

    /// Text field that receives typed characters, if the focus is on one.
    pub(crate) fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused {
            Field::Distance => Some(&mut self.distance_input),
            Field::Time => Some(&mut self.time_input),
            Field::TrafficJam | Field::NightCharge => None,
        }
    }

    pub(crate) fn toggle_focused(&mut self) {
        match self.focused {
            Field::TrafficJam => self.traffic_jam = !self.traffic_jam,
            Field::NightCharge => self.night_charge = !self.night_charge,
            Field::Distance | Field::Time => {}
        }
    }

    fn request(&self) -> Result<FareRequest, FareError> {
        let (Some(model), Some(variant)) = (&self.selected_model, &self.selected_variant) else {
            return Err(FareError::InvalidInput("select a car first".to_owned()));
        };
        Ok(FareRequest {
            model: model.clone(),
            variant: variant.clone(),
            distance_km: parse_distance(&self.distance_input)?,
            time_minutes: parse_minutes(&self.time_input)?,
            traffic_jam: self.traffic_jam,
            night_charge: self.night_charge,
        })
    }

    /// Compute the fare from the form. Invalid input leaves the form open
    /// with an error message.
    pub(crate) fn calculate(&mut self) {
        match self
            .request()
            .and_then(|request| self.service.quote_request(&request))
        {
            Ok(quote) => {
                self.quote = Some(quote);
                self.error_message = None;
                self.screen = Screen::FareView;
            }
            Err(err) => {
                warn!(error = %err, "calculation rejected");
                self.quote = None;
                self.error_message = Some(err.to_string());
            }
        }
    }

    /// Clear the trip fields and go back to choosing a model.
    pub(crate) fn start_over(&mut self) {
        self.distance_input.clear();
        self.time_input.clear();
        self.traffic_jam = false;
        self.night_charge = false;
        self.focused = Field::Distance;
        self.quote = None;
        self.selected_variant = None;
        self.error_message = None;
        self.screen = Screen::ModelSelect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let catalog = tambang_catalog_my::catalog().expect("built-in table is valid");
        App::new(Arc::new(FareService::new(Arc::new(catalog))))
    }

    fn app_on_form() -> App {
        let mut app = app();
        app.select_current_model();
        app.select_current_variant();
        app
    }

    #[test]
    fn selecting_model_lists_its_variants() {
        let mut app = app();
        app.model_list_index = 4;
        app.select_current_model();
        assert_eq!(app.screen, Screen::VariantSelect);
        assert_eq!(app.selected_model.as_deref(), Some("Perodua Myvi"));
        assert_eq!(app.variants, vec!["1.3 G (M)", "1.5 X (A)"]);
    }

    #[test]
    fn calculate_shows_fare() {
        let mut app = app_on_form();
        assert_eq!(app.screen, Screen::TripForm);
        app.distance_input = "10".to_owned();
        app.time_input = "15".to_owned();
        app.traffic_jam = true;
        app.night_charge = true;
        app.calculate();

        assert_eq!(app.screen, Screen::FareView);
        let quote = app.quote.as_ref().expect("quote computed");
        assert_eq!(quote.fare.to_string(), "RM21.06");
        assert_eq!(quote.variant.variant, "1.0 G (M)");
    }

    #[test]
    fn invalid_input_keeps_the_form_open() {
        let mut app = app_on_form();
        app.distance_input = "-1".to_owned();
        app.time_input = "15".to_owned();
        app.calculate();

        assert_eq!(app.screen, Screen::TripForm);
        assert!(app.quote.is_none());
        assert!(
            app.error_message
                .as_deref()
                .is_some_and(|msg| msg.starts_with("Invalid input")),
            "{:?}",
            app.error_message
        );

        app.distance_input = "3".to_owned();
        app.calculate();
        assert_eq!(app.screen, Screen::FareView);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn calculate_without_selection_is_rejected() {
        let mut app = app();
        app.distance_input = "1".to_owned();
        app.time_input = "1".to_owned();
        app.calculate();
        assert_eq!(app.screen, Screen::ModelSelect);
        assert!(app.error_message.is_some());
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut field = Field::Distance;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, Field::Distance);
        assert_eq!(Field::Distance.previous(), Field::NightCharge);
    }

    #[test]
    fn start_over_resets_the_trip() {
        let mut app = app_on_form();
        app.distance_input = "10".to_owned();
        app.time_input = "5".to_owned();
        app.focused = Field::TrafficJam;
        app.toggle_focused();
        app.calculate();
        app.start_over();

        assert_eq!(app.screen, Screen::ModelSelect);
        assert!(app.distance_input.is_empty());
        assert!(!app.traffic_jam);
        assert!(app.quote.is_none());
    }
}
