mod intent;
mod reducer;
mod render;
mod rows;
mod state;

pub use intent::ConsentIntent;
pub use reducer::ConsentReducer;
pub use render::{dialog_height, render_consent_dialog, DialogText, DIALOG_WIDTH};
pub use rows::DialogRow;
pub use state::ConsentDialogState;
