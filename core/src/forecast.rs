//! Patient volume forecaster.
//!
//! Independent linear-regression fit of daily patient counts against
//! temperature and humidity. Algorithmically unrelated to the dispatch
//! triad and never consulted by it; the CLI runs it as a closing demo.
//!
//! Training max-normalizes both features, then runs batch gradient descent
//! with gradient `(2/n) · Σ error · x` per weight. Prediction scales raw
//! inputs by 1/100 to land near the normalized training range.

/// One observed day: weather conditions and patient volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub temperature: f64,
    pub humidity: f64,
    pub patients: f64,
}

impl Observation {
    pub fn new(temperature: f64, humidity: f64, patients: f64) -> Self {
        Self {
            temperature,
            humidity,
            patients,
        }
    }
}

/// Gradient descent parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingConfig {
    pub learning_rate: f64,
    pub epochs: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            epochs: 10_000,
        }
    }
}

/// Fitted two-feature linear model.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForecastModel {
    pub weight_temperature: f64,
    pub weight_humidity: f64,
    pub bias: f64,
}

impl ForecastModel {
    /// Fit a model to the observations.
    ///
    /// Features are max-normalized before descent. An empty training set
    /// yields the zero model.
    pub fn train(observations: &[Observation], config: &TrainingConfig) -> Self {
        if observations.is_empty() {
            return Self::default();
        }

        let data = normalize(observations);
        let n = data.len() as f64;
        let mut model = Self::default();

        for _ in 0..config.epochs {
            let mut temp_sum = 0.0;
            let mut humid_sum = 0.0;
            let mut bias_sum = 0.0;

            for obs in &data {
                let prediction = model.weight_temperature * obs.temperature
                    + model.weight_humidity * obs.humidity
                    + model.bias;
                let error = prediction - obs.patients;

                temp_sum += error * obs.temperature;
                humid_sum += error * obs.humidity;
                bias_sum += error;
            }

            model.weight_temperature -= config.learning_rate * (2.0 / n) * temp_sum;
            model.weight_humidity -= config.learning_rate * (2.0 / n) * humid_sum;
            model.bias -= config.learning_rate * (2.0 / n) * bias_sum;
        }

        model
    }

    /// Predicted patient count for raw (unnormalized) conditions.
    ///
    /// Raw inputs are scaled by 1/100 to approximate the normalized
    /// training range.
    pub fn predict(&self, temperature: f64, humidity: f64) -> f64 {
        let temperature = temperature / 100.0;
        let humidity = humidity / 100.0;
        self.weight_temperature * temperature + self.weight_humidity * humidity + self.bias
    }
}

/// Max-normalize both features, leaving patient counts untouched
fn normalize(observations: &[Observation]) -> Vec<Observation> {
    let max_temp = observations
        .iter()
        .map(|o| o.temperature)
        .fold(0.0, f64::max);
    let max_humidity = observations.iter().map(|o| o.humidity).fold(0.0, f64::max);

    observations
        .iter()
        .map(|o| Observation {
            temperature: if max_temp > 0.0 {
                o.temperature / max_temp
            } else {
                o.temperature
            },
            humidity: if max_humidity > 0.0 {
                o.humidity / max_humidity
            } else {
                o.humidity
            },
            patients: o.patients,
        })
        .collect()
}

/// The historical reference dataset shipped with the simulator
pub fn reference_observations() -> Vec<Observation> {
    vec![
        Observation::new(20.0, 60.0, 50.0),
        Observation::new(25.0, 70.0, 50.0),
        Observation::new(26.0, 77.0, 55.0),
        Observation::new(28.0, 79.0, 55.0),
        Observation::new(30.0, 81.0, 58.0),
        Observation::new(32.0, 81.0, 58.0),
        Observation::new(34.0, 82.0, 60.0),
        Observation::new(34.0, 83.0, 61.0),
        Observation::new(35.0, 85.0, 64.0),
        Observation::new(35.0, 85.0, 64.0),
        Observation::new(36.0, 85.0, 67.0),
        Observation::new(37.0, 90.0, 69.0),
        Observation::new(37.0, 95.0, 71.0),
        Observation::new(38.0, 95.0, 73.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_training_set_yields_zero_model() {
        let model = ForecastModel::train(&[], &TrainingConfig::default());
        assert_eq!(model, ForecastModel::default());
        assert_eq!(model.predict(30.0, 80.0), 0.0);
    }

    #[test]
    fn test_normalize_scales_to_unit_max() {
        let data = normalize(&[
            Observation::new(20.0, 50.0, 10.0),
            Observation::new(40.0, 100.0, 20.0),
        ]);

        assert!((data[1].temperature - 1.0).abs() < 1e-12);
        assert!((data[1].humidity - 1.0).abs() < 1e-12);
        assert!((data[0].temperature - 0.5).abs() < 1e-12);
        // Patient counts are never normalized
        assert_eq!(data[0].patients, 10.0);
    }

    #[test]
    fn test_trained_model_is_finite() {
        let model = ForecastModel::train(&reference_observations(), &TrainingConfig::default());
        assert!(model.weight_temperature.is_finite());
        assert!(model.weight_humidity.is_finite());
        assert!(model.bias.is_finite());
    }

    #[test]
    fn test_prediction_tracks_training_range() {
        let model = ForecastModel::train(&reference_observations(), &TrainingConfig::default());

        // Mid-range conditions should predict a plausible mid-range volume
        let predicted = model.predict(28.0, 65.0);
        assert!(predicted > 30.0 && predicted < 90.0, "got {}", predicted);
    }

    #[test]
    fn test_hotter_days_predict_more_patients() {
        let model = ForecastModel::train(&reference_observations(), &TrainingConfig::default());

        let cool = model.predict(20.0, 60.0);
        let hot = model.predict(38.0, 95.0);
        assert!(hot > cool);
    }
}
