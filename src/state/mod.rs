pub mod app_state;
pub mod carousel;
pub mod forms;
pub mod gallery;
pub mod stats;
pub mod ui_state;

pub use app_state::{AppState, HomeFocus, View, PROGRAMS};
pub use carousel::CarouselState;
pub use gallery::GalleryState;
pub use ui_state::{Modal, UiState};
