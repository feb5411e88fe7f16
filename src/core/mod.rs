pub mod add;
pub mod aggregate;
pub mod clear;
pub mod report;
pub mod view;
