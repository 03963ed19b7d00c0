mod central_panel;
mod dialogs;
mod properties_panel;
mod timeline_panel;
mod toolbar;
mod tools_panel;

pub use central_panel::central_panel;
pub use dialogs::{dialogs, edit_menu};
pub use properties_panel::properties_panel;
pub use timeline_panel::{bottom_bar, timeline_panel};
pub use toolbar::toolbar;
pub use tools_panel::tools_panel;
