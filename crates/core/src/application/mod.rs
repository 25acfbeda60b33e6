// Application Layer - FAQ use cases

mod faq_service;

pub use faq_service::FaqService;

#[cfg(test)]
mod faq_service_test;
