//! HTML views built from typed nodes

pub mod chart;
pub mod components;
pub mod format;
pub mod html;
pub mod layout;
pub mod modals;
pub mod pages;
