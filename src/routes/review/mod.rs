mod add;
mod list;

pub use add::*;
pub use list::*;
