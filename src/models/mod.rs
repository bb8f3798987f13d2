pub mod attendance;
pub mod customer;
pub mod employee;
pub mod feedback;
pub mod menu_item;
pub mod raw_material;
pub mod report;
pub mod supplier;
pub mod transaction;
