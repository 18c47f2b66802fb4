mod price;
mod side;

pub use price::Price;
pub use side::Side;
