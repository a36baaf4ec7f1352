pub mod personal_services;
