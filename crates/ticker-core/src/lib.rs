pub mod column;
pub mod config;
pub mod error;
pub mod sequence;

pub use column::{ColumnAction, ColumnPath, ColumnTransition, TickerPlanner};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use sequence::{AnimationCharacterIndices, CharacterList, EMPTY_CHAR};
