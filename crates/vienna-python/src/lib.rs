//! Python module `vienna`: `fold`, `cofold`, `inverse_fold`, `folded_structure`
//! and `does_sequence_fold_to` over the process-wide default client.
//!
//! Invalid arguments raise `ValueError`; a missing or failing engine raises
//! `ViennaException`. The GIL is released while the engine runs.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyIterator, PyList};
use vienna_core::{EngineError, FoldResult, InverseResult};

create_exception!(vienna, ViennaException, PyException);

fn to_py_err(err: EngineError) -> PyErr {
    match err {
        EngineError::InvalidInput(msg) => PyValueError::new_err(msg),
        other => ViennaException::new_err(other.to_string()),
    }
}

/// Results from calling RNAfold or RNAcofold.
#[pyclass(name = "FoldResults", module = "vienna", frozen)]
struct PyFoldResults {
    inner: FoldResult,
}

#[pymethods]
impl PyFoldResults {
    #[getter]
    fn dot_bracket(&self) -> &str {
        self.inner.dot_bracket()
    }

    #[getter]
    fn mfe(&self) -> f64 {
        self.inner.mfe()
    }

    /// Trailing ensemble statistic: the ensemble diversity for `fold`, the
    /// engine's final reported value for `cofold`.
    #[getter]
    fn ens_defect(&self) -> f64 {
        self.inner.ensemble_diversity()
    }

    /// `[i, j, probability]` triples, 1-indexed.
    #[getter]
    fn bp_probs(&self) -> Vec<(usize, usize, f64)> {
        self.inner
            .bp_probs()
            .iter()
            .map(|bp| (bp.i, bp.j, bp.probability))
            .collect()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        format!(
            "FoldResults(dot_bracket='{}', mfe={}, ens_defect={}, bp_probs=[{} pairs])",
            self.inner.dot_bracket(),
            self.inner.mfe(),
            self.inner.ensemble_diversity(),
            self.inner.bp_probs().len()
        )
    }
}

/// One designed sequence and its score.
#[pyclass(name = "SeqScore", module = "vienna", frozen)]
#[derive(Clone)]
struct PySeqScore {
    #[pyo3(get)]
    seq: String,
    #[pyo3(get)]
    score: f64,
}

#[pymethods]
impl PySeqScore {
    fn __repr__(&self) -> String {
        format!("SeqScore(seq='{}', score={})", self.seq, self.score)
    }
}

/// Results from calling RNAinverse.
#[pyclass(name = "InverseResults", module = "vienna", frozen)]
struct PyInverseResults {
    seq_scores: Vec<PySeqScore>,
}

impl From<InverseResult> for PyInverseResults {
    fn from(result: InverseResult) -> Self {
        Self {
            seq_scores: result
                .into_iter()
                .map(|s| PySeqScore {
                    seq: s.sequence,
                    score: s.score,
                })
                .collect(),
        }
    }
}

#[pymethods]
impl PyInverseResults {
    fn __len__(&self) -> usize {
        self.seq_scores.len()
    }

    fn __getitem__(&self, index: isize) -> PyResult<PySeqScore> {
        let len = self.seq_scores.len() as isize;
        let idx = if index < 0 { index + len } else { index };
        if !(0..len).contains(&idx) {
            return Err(PyIndexError::new_err("InverseResults index out of range"));
        }
        Ok(self.seq_scores[idx as usize].clone())
    }

    fn __iter__<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyIterator>> {
        PyList::new(py, self.seq_scores.iter().cloned())?.try_iter()
    }

    fn __repr__(&self) -> String {
        format!("InverseResults({} sequences)", self.seq_scores.len())
    }
}

/// Fold a sequence using RNAfold.
#[pyfunction]
#[pyo3(signature = (seq, bp_probs = false))]
fn fold(py: Python<'_>, seq: &str, bp_probs: bool) -> PyResult<PyFoldResults> {
    py.allow_threads(|| vienna_core::fold(seq, bp_probs))
        .map(|inner| PyFoldResults { inner })
        .map_err(to_py_err)
}

/// Fold two sequences separated by '&' using RNAcofold.
#[pyfunction]
fn cofold(py: Python<'_>, seq: &str) -> PyResult<PyFoldResults> {
    py.allow_threads(|| vienna_core::cofold(seq))
        .map(|inner| PyFoldResults { inner })
        .map_err(to_py_err)
}

/// Generate sequences that fold into `secstruct` under `constraint`.
#[pyfunction]
#[pyo3(signature = (secstruct, constraint, n_sol = vienna_core::DEFAULT_MAX_SOLUTIONS))]
fn inverse_fold(
    py: Python<'_>,
    secstruct: &str,
    constraint: &str,
    n_sol: usize,
) -> PyResult<PyInverseResults> {
    py.allow_threads(|| vienna_core::inverse_fold(secstruct, constraint, n_sol))
        .map(PyInverseResults::from)
        .map_err(to_py_err)
}

#[pyfunction]
fn folded_structure(py: Python<'_>, seq: &str) -> PyResult<String> {
    py.allow_threads(|| vienna_core::folded_structure(seq))
        .map_err(to_py_err)
}

#[pyfunction]
fn does_sequence_fold_to(py: Python<'_>, seq: &str, structure: &str) -> PyResult<bool> {
    py.allow_threads(|| vienna_core::does_sequence_fold_to(seq, structure))
        .map_err(to_py_err)
}

#[pymodule]
fn vienna(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("ViennaException", m.py().get_type::<ViennaException>())?;
    m.add_class::<PyFoldResults>()?;
    m.add_class::<PySeqScore>()?;
    m.add_class::<PyInverseResults>()?;
    m.add_function(wrap_pyfunction!(fold, m)?)?;
    m.add_function(wrap_pyfunction!(cofold, m)?)?;
    m.add_function(wrap_pyfunction!(inverse_fold, m)?)?;
    m.add_function(wrap_pyfunction!(folded_structure, m)?)?;
    m.add_function(wrap_pyfunction!(does_sequence_fold_to, m)?)?;
    Ok(())
}
