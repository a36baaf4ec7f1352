pub mod personal_handlers;
