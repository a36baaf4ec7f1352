pub mod personal;
