//! Registry service implementations.

mod certificates;
mod contacts;


pub use certificates::CertificateRegistryService;
pub use contacts::ContactIntakeService;
