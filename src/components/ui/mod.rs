pub mod button;
pub mod card;
pub mod input;
pub mod separator;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use button::*;
#[allow(unused_imports)]
pub use card::*;
pub use input::*;
pub use separator::*;
