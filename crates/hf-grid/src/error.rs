use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid grid dimension: {axis} = {points} (at least 2 points per axis)")]
    InvalidDimension { axis: &'static str, points: usize },
}
