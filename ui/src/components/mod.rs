pub mod form_view;
pub mod prompt_bar;
