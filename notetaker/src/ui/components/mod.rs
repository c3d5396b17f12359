pub mod delete_confirmation;
pub mod empty_state;
pub mod help_bar;
pub mod help_popup;
pub mod loading_indicator;
pub mod note_form;
pub mod popup;
pub mod screen_title;
pub mod search_input;
pub mod text_field;
pub mod toast;
