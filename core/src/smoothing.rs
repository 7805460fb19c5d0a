/// Eksponentiell glatting: ny = a * x + (1 - a) * forrige.
/// Første verdi etter reset slippes gjennom uendret.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpSmoother {
    factor: f64,
    value: Option<f64>,
}

impl ExpSmoother {
    /// `factor` forventes validert til (0, 1] av kalleren.
    pub fn new(factor: f64) -> Self {
        Self { factor, value: None }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn set_factor(&mut self, factor: f64) {
        self.factor = factor;
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Beregner neste glattede verdi uten å oppdatere tilstanden.
    pub fn peek(&self, x: f64) -> f64 {
        match self.value {
            Some(prev) => self.factor * x + (1.0 - self.factor) * prev,
            None => x,
        }
    }

    pub fn update(&mut self, x: f64) -> f64 {
        let next = self.peek(x);
        self.value = Some(next);
        next
    }

    pub fn reset(&mut self) {
        self.value = None;
    }
}

/// Glatter en hel serie trykkverdier (f.eks. ved etterprosessering av logg).
pub fn smooth_series(values: &[f64], factor: f64) -> Vec<f64> {
    let mut s = ExpSmoother::new(factor);
    values.iter().map(|&x| s.update(x)).collect()
}
