pub mod expense_type;

pub use expense_type::ExpenseType;
