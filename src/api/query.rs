/// Filters for the user game export
#[derive(Debug, Clone, PartialEq)]
pub struct GameQuery {
    pub max: usize,
    pub perf_type: Option<String>,
    pub analysed: bool,
    pub opening: bool,
    pub evals: bool,
}

impl GameQuery {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            perf_type: None,
            analysed: false,
            opening: false,
            evals: false,
        }
    }

    pub fn perf_type(mut self, speed: &str) -> Self {
        self.perf_type = Some(speed.to_string());
        self
    }

    /// Analysed games only, with opening names and evaluations
    pub fn with_analysis(mut self) -> Self {
        self.analysed = true;
        self.opening = true;
        self.evals = true;
        self
    }

    pub fn to_query_string(&self) -> String {
        let mut params = vec![format!("max={}", self.max)];
        if let Some(perf_type) = &self.perf_type {
            params.push(format!("perfType={}", urlencoding::encode(perf_type)));
        }
        if self.analysed {
            params.push("analysed=true".to_string());
        }
        params.push(format!("opening={}", self.opening));
        params.push(format!("evals={}", self.evals));
        params.join("&")
    }
}
