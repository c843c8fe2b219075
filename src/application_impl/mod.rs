mod birthday_service_impl;

pub use birthday_service_impl::*;
