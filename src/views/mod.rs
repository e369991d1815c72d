//! Page components. Each one owns its own state and renders through the
//! templates in `frontend/templates`.

pub mod app;
pub mod create_event;
pub mod dates;
pub mod event_card;
pub mod event_list;
pub mod register_modal;
