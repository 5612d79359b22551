use vienna::DEFAULT_MAX_SOLUTIONS;
use vienna::engine::config::{DEFAULT_DANGLES, DEFAULT_INVERSE_FINAL_COST};

pub struct DefaultsConfig {
    pub dangles: u8,
    pub no_lonely_pairs: bool,
    pub final_cost: f64,
    pub num_solutions: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            dangles: DEFAULT_DANGLES,
            no_lonely_pairs: true,
            final_cost: DEFAULT_INVERSE_FINAL_COST,
            num_solutions: DEFAULT_MAX_SOLUTIONS,
        }
    }
}
