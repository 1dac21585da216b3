mod state;

pub use state::{AppState, InputAction, Phase};
