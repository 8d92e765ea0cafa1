// Output generation module

pub mod html;
pub mod params;
pub mod partition;
pub mod templates;

pub use html::*;
pub use params::*;
pub use partition::*;
pub use templates::*;
