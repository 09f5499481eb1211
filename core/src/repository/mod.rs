pub mod file;
pub mod traits;

pub use file::{ActivitySnapshot, FileActivitySource};
pub use traits::ActivitySource;
