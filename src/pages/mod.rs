//! Page components, one per route.

pub mod attribute_form;
pub mod attributes_list;
pub mod product_form;
pub mod products_list;
pub mod signin;
pub mod signup;
