mod loader;

pub use loader::{LoaderError, load_support_orgs_from};
