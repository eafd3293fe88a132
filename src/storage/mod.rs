pub mod csv_backend;

use crate::errors::ExpenseError;

pub type Result<T> = std::result::Result<T, ExpenseError>;

pub use csv_backend::{decode_line, encode_line, load_expenses, save_expenses};
