use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Case error: {0}")]
    Case(#[from] hf_case::CaseError),

    #[error("Grid error: {0}")]
    Grid(#[from] hf_grid::GridError),

    #[error("Solver error: {0}")]
    Solver(#[from] hf_solver::SolverError),

    #[error("Results error: {0}")]
    Results(#[from] hf_results::ResultsError),
}
