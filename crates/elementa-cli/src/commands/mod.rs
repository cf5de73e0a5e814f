pub mod balance;
pub mod catalog;
pub mod element;
pub mod mass;
pub mod mix;
pub mod react;
