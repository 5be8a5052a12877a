pub mod camera;
pub mod constants;
pub mod content;
pub mod geo;
pub mod interaction;
pub mod mesh;
pub mod notepad;
pub mod player;
pub mod render_data;
pub mod routes;
pub mod scene;
pub mod tour;

pub static GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");
pub static FLAG_WGSL: &str = include_str!("../shaders/flag.wgsl");

pub use camera::*;
pub use constants::*;
pub use content::*;
pub use geo::*;
pub use interaction::*;
pub use mesh::*;
pub use notepad::*;
pub use player::*;
pub use render_data::*;
pub use routes::*;
pub use scene::*;
pub use tour::*;
